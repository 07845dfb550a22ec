use std::fmt::{Display, Formatter, Write};
use crate::error::CodecError;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

/// A sequence of labels. Names built with [`DomainName::parse`] are
/// validated and non-empty. Decoded names keep whatever the wire carried,
/// which may be the root name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName {
    labels: Vec<Vec<u8>>,
}

impl DomainName {
    pub fn parse(domain: &str) -> Result<Self, CodecError> {
        // a single trailing dot marks the fully-qualified form
        let trimmed = domain.strip_suffix('.').unwrap_or(domain);

        if trimmed.is_empty() {
            return Err(CodecError::InvalidDomain("domain is empty".to_string()));
        }

        Self::from_labels(trimmed.split('.').map(str::as_bytes))
    }

    fn from_labels<'a, I>(labels: I) -> Result<Self, CodecError>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut res = Vec::new();
        let mut wire_len = 1;

        for label in labels {
            validate_label(label)?;

            wire_len += 1 + label.len();
            if wire_len > MAX_NAME_LEN {
                return Err(CodecError::InvalidDomain(format!(
                    "name exceeds {} byte limit",
                    MAX_NAME_LEN
                )));
            }

            res.push(label.to_vec());
        }

        if res.is_empty() {
            return Err(CodecError::InvalidDomain("domain has no labels".to_string()));
        }

        Ok(Self { labels: res })
    }

    /// Labels as read off the wire. The parser bounds each one to
    /// `MAX_LABEL_LEN` bytes, nothing else is checked.
    pub(crate) fn from_wire(labels: Vec<&[u8]>) -> Self {
        Self {
            labels: labels.into_iter().map(<[u8]>::to_vec).collect(),
        }
    }

    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &[u8]> {
        self.labels.iter().map(Vec::as_slice)
    }

    /// Length of the name on the wire, terminator included.
    pub fn wire_len(&self) -> usize {
        self.labels.iter().map(|label| 1 + label.len()).sum::<usize>() + 1
    }
}

impl Display for DomainName {
    /// Dotted form without the trailing dot. Bytes that are not printable
    /// ASCII, and dots or backslashes inside a label, are written as `\DDD`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_char('.')?;
            }

            for &b in label {
                if b.is_ascii_graphic() && b != b'.' && b != b'\\' {
                    f.write_char(b as char)?;
                } else {
                    write!(f, "\\{:03}", b)?;
                }
            }
        }

        Ok(())
    }
}

fn validate_label(label: &[u8]) -> Result<(), CodecError> {
    if label.is_empty() {
        return Err(CodecError::InvalidDomain("empty label".to_string()));
    }

    if label.len() > MAX_LABEL_LEN {
        return Err(CodecError::InvalidDomain(format!(
            "label of {} bytes exceeds {} character limit",
            label.len(),
            MAX_LABEL_LEN
        )));
    }

    if let Some(byte) = label.iter().find(|&&b| !is_label_byte(b)) {
        return Err(CodecError::InvalidDomain(format!(
            "label contains invalid byte 0x{:02x}",
            byte
        )));
    }

    Ok(())
}

fn is_label_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}
