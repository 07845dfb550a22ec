use std::io::{Result, Error, ErrorKind};
use std::time::Duration;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

pub(crate) enum TimeUnit {
    NanoSecond,
    MicroSecond,
    MilliSecond,
    Second,
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    /// `None` when `n` units do not fit in a `Duration`.
    pub fn to_duration(&self, n: u64) -> Option<Duration> {
        let res = match self {
            TimeUnit::NanoSecond => Duration::from_nanos(n),
            TimeUnit::MicroSecond => Duration::from_micros(n),
            TimeUnit::MilliSecond => Duration::from_millis(n),
            TimeUnit::Second => Duration::from_secs(n),
            TimeUnit::Minute => Duration::from_secs(MINUTE.checked_mul(n)?),
            TimeUnit::Hour => Duration::from_secs(HOUR.checked_mul(n)?),
            TimeUnit::Day => Duration::from_secs(DAY.checked_mul(n)?),
        };

        Some(res)
    }

    pub fn from(s: &str) -> Result<Self> {
        match s {
            "d" | "D" => Ok(Self::Day),
            "h" | "H" => Ok(Self::Hour),
            "m" | "M" => Ok(Self::Minute),
            "s" | "S" => Ok(Self::Second),
            "ms" => Ok(Self::MilliSecond),
            "µs" | "us" => Ok(Self::MicroSecond),
            "ns" => Ok(Self::NanoSecond),
            _ => Err(invalid(format!("{} is an invalid time unit", s))),
        }
    }
}

/// Parses strings such as `5s`, `1m10s` or `250ms` into a `Duration`.
pub fn parse(s: &str) -> Result<Duration> {
    let mut res = Duration::ZERO;
    let mut rest = s.trim();

    if rest.is_empty() {
        return Err(invalid(format!("{:?} is an invalid duration", s)));
    }

    while !rest.is_empty() {
        let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        if digits == 0 {
            return Err(invalid(format!("{} is an invalid duration", s)));
        }

        let n: u64 = rest[..digits]
            .parse()
            .map_err(|_| invalid(format!("{} is an invalid duration", s)))?;
        rest = &rest[digits..];

        let unit_len = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
        if unit_len == 0 {
            return Err(invalid(format!("{} is missing a time unit", s)));
        }

        res = TimeUnit::from(&rest[..unit_len])?
            .to_duration(n)
            .and_then(|d| res.checked_add(d))
            .ok_or_else(|| invalid(format!("{} is too large", s)))?;
        rest = &rest[unit_len..];
    }

    Ok(res)
}

fn invalid(msg: String) -> Error {
    Error::new(ErrorKind::InvalidInput, msg)
}
