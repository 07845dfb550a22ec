use std::fmt::{Display, Formatter};
use std::str::FromStr;
use anyhow::{anyhow, Error};

#[derive(Default, PartialEq, Eq, Debug, Clone, Hash, Copy)]
pub enum QueryType {
    #[default]
    A, // 1
    NS,
    CNAME,
    SOA,
    PTR,
    HINFO,
    MX,
    TXT,
    AAAA,
    SRV, // 33
    // QTYPE
    AXFR, // 252
    MAILB,
    MAILA,
    ASTERISK,
    UNKNOWN(u16),
}

impl QueryType {
    pub fn from(value: u16) -> QueryType {
        match value {
            1 => QueryType::A,
            2 => QueryType::NS,
            5 => QueryType::CNAME,
            6 => QueryType::SOA,
            12 => QueryType::PTR,
            13 => QueryType::HINFO,
            15 => QueryType::MX,
            16 => QueryType::TXT,
            28 => QueryType::AAAA,
            33 => QueryType::SRV,
            252 => QueryType::AXFR,
            253 => QueryType::MAILB,
            254 => QueryType::MAILA,
            255 => QueryType::ASTERISK,
            n => QueryType::UNKNOWN(n),
        }
    }

    pub fn to_num(&self) -> u16 {
        match *self {
            QueryType::A => 1,
            QueryType::NS => 2,
            QueryType::CNAME => 5,
            QueryType::SOA => 6,
            QueryType::PTR => 12,
            QueryType::HINFO => 13,
            QueryType::MX => 15,
            QueryType::TXT => 16,
            QueryType::AAAA => 28,
            QueryType::SRV => 33,
            QueryType::AXFR => 252,
            QueryType::MAILB => 253,
            QueryType::MAILA => 254,
            QueryType::ASTERISK => 255,
            QueryType::UNKNOWN(n) => n,
        }
    }
}

impl FromStr for QueryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        let code = upper.strip_prefix("TYPE").unwrap_or(upper.as_str());
        if let Ok(n) = code.parse::<u16>() {
            return Ok(QueryType::from(n));
        }

        match upper.as_str() {
            "A" => Ok(QueryType::A),
            "NS" => Ok(QueryType::NS),
            "CNAME" => Ok(QueryType::CNAME),
            "SOA" => Ok(QueryType::SOA),
            "PTR" => Ok(QueryType::PTR),
            "HINFO" => Ok(QueryType::HINFO),
            "MX" => Ok(QueryType::MX),
            "TXT" => Ok(QueryType::TXT),
            "AAAA" => Ok(QueryType::AAAA),
            "SRV" => Ok(QueryType::SRV),
            "AXFR" => Ok(QueryType::AXFR),
            "MAILB" => Ok(QueryType::MAILB),
            "MAILA" => Ok(QueryType::MAILA),
            "ANY" | "*" => Ok(QueryType::ASTERISK),
            _ => Err(anyhow!("{} is not a known query type", s)),
        }
    }
}

impl Display for QueryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryType::ASTERISK => write!(f, "ANY"),
            QueryType::UNKNOWN(n) => write!(f, "TYPE{}", n),
            other => write!(f, "{:?}", other),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unknown_codes_are_preserved() {
        assert_eq!(QueryType::from(1), QueryType::A);
        assert_eq!(QueryType::from(65).to_num(), 65);
        assert_eq!(QueryType::from(65).to_string(), "TYPE65");
        assert_eq!("TYPE65".parse::<QueryType>().ok(), Some(QueryType::UNKNOWN(65)));
    }

    #[test]
    fn parse_mnemonics() {
        assert_eq!("aaaa".parse::<QueryType>().ok(), Some(QueryType::AAAA));
        assert_eq!("ANY".parse::<QueryType>().ok(), Some(QueryType::ASTERISK));
        assert_eq!("28".parse::<QueryType>().ok(), Some(QueryType::AAAA));
        assert!("BOGUS".parse::<QueryType>().is_err());
    }
}
