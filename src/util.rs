/// Lowercase hex rendering of `bytes`, two digits per byte, no separators.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}
