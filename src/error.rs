use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid domain name: {0}")]
    InvalidDomain(String),

    #[error("Truncated header: got {len} bytes, need 12")]
    TruncatedHeader { len: usize },

    #[error("Truncated question at offset {offset}")]
    TruncatedQuestion { offset: usize },

    #[error("Unsupported label type 0x{len:02x} at offset {offset}")]
    UnsupportedLabel { offset: usize, len: u8 },
}
