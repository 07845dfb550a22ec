use std::fmt::{Display, Formatter};
use std::str::FromStr;
use anyhow::{anyhow, Error};

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub enum QueryClass {
    #[default]
    IN, // 1
    CS,
    CH,
    HS,
    ASTERISK,
    UNKNOWN(u16),
}

impl QueryClass {
    pub fn from(value: u16) -> Self {
        match value {
            1 => QueryClass::IN,
            2 => QueryClass::CS,
            3 => QueryClass::CH,
            4 => QueryClass::HS,
            255 => QueryClass::ASTERISK,
            n => QueryClass::UNKNOWN(n),
        }
    }

    pub fn to_num(&self) -> u16 {
        match *self {
            QueryClass::IN => 1,
            QueryClass::CS => 2,
            QueryClass::CH => 3,
            QueryClass::HS => 4,
            QueryClass::ASTERISK => 255,
            QueryClass::UNKNOWN(n) => n,
        }
    }
}

impl FromStr for QueryClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        let code = upper.strip_prefix("CLASS").unwrap_or(upper.as_str());
        if let Ok(n) = code.parse::<u16>() {
            return Ok(QueryClass::from(n));
        }

        match upper.as_str() {
            "IN" => Ok(QueryClass::IN),
            "CS" => Ok(QueryClass::CS),
            "CH" => Ok(QueryClass::CH),
            "HS" => Ok(QueryClass::HS),
            "ANY" | "*" => Ok(QueryClass::ASTERISK),
            _ => Err(anyhow!("{} is not a known query class", s)),
        }
    }
}

impl Display for QueryClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryClass::ASTERISK => write!(f, "ANY"),
            QueryClass::UNKNOWN(n) => write!(f, "CLASS{}", n),
            other => write!(f, "{:?}", other),
        }
    }
}
