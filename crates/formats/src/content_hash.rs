/// Hex blake3 hash of a payload, used to detect redundant re-deliveries
/// of the same tier or horizon blob.
pub fn content_hash(payload: &[u8]) -> String {
    blake3::hash(payload).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::content_hash;

    #[test]
    fn identical_payloads_share_a_hash() {
        let a = content_hash(b"[]");
        let b = content_hash(b"[]");
        let c = content_hash(b"[{}]");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
