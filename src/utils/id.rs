use rand::Rng;

/// Generate a random hex hash of the specified length
///
/// Generates random bytes and hex-encodes them directly, returning the first
/// `length` hex characters. This is used for generating unique IDs for saved
/// filters and records created against the mock backend.
pub fn generate_hash(length: usize) -> String {
    // Each byte produces 2 hex characters, so we need ceil(length / 2) bytes
    let num_bytes = length.div_ceil(2);
    let mut buf = vec![0u8; num_bytes];
    rand::rng().fill(&mut buf[..]);
    let hex: String = buf.iter().map(|b| format!("{b:02x}")).collect();
    hex[..length].to_string()
}

/// Generate a short record ID with a prefix, retrying on collision.
///
/// `exists` is consulted for each candidate; the hash length grows if the
/// short space is exhausted.
pub fn generate_record_id(prefix: &str, exists: impl Fn(&str) -> bool) -> String {
    const RETRIES_PER_LENGTH: u32 = 40;

    for length in 4..=8 {
        for _ in 0..RETRIES_PER_LENGTH {
            let candidate = format!("{prefix}-{}", generate_hash(length));
            if !exists(&candidate) {
                return candidate;
            }
        }
    }

    // 16 hex chars of randomness; a collision here means the caller's
    // `exists` is lying.
    format!("{prefix}-{}", generate_hash(16))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_hash_length() {
        assert_eq!(generate_hash(4).len(), 4);
        assert_eq!(generate_hash(7).len(), 7);
    }

    #[test]
    fn test_generate_hash_is_hex() {
        let hash = generate_hash(8);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_record_id_format() {
        let id = generate_record_id("flt", |_| false);
        assert!(id.starts_with("flt-"));
        let parts: Vec<&str> = id.rsplitn(2, '-').collect();
        assert_eq!(parts[0].len(), 4);
    }

    #[test]
    fn test_generate_record_id_skips_existing() {
        // Reject every 4-char candidate; the generator must move to longer hashes
        let id = generate_record_id("flt", |candidate| candidate.len() == "flt-".len() + 4);
        assert!(id.len() > "flt-".len() + 4);
    }

    #[test]
    fn test_generate_record_id_unique() {
        let a = generate_record_id("flt", |_| false);
        let b = generate_record_id("flt", |_| false);
        // 4 hex chars collide rarely enough for a smoke check
        assert!(a.starts_with("flt-") && b.starts_with("flt-"));
    }
}
