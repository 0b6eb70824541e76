//! Content hashes of rendered signals.

/// BLAKE3 hash (hex) of the little-endian bytes of every sample.
///
/// Two signals hash equal only if they are bit-identical, so a stored hash is
/// a compact golden value for a seeded render.
pub fn signal_hash(samples: &[f64]) -> String {
    let mut hasher = blake3::Hasher::new();
    for sample in samples {
        hasher.update(&sample.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable_and_bitwise() {
        let a = signal_hash(&[0.0, 1.0, -0.5]);
        assert_eq!(a, signal_hash(&[0.0, 1.0, -0.5]));
        assert_eq!(a.len(), 64);
        // Negative zero has a different bit pattern.
        assert_ne!(a, signal_hash(&[-0.0, 1.0, -0.5]));
    }

    #[test]
    fn test_empty_signal_hash() {
        assert_eq!(signal_hash(&[]), blake3::hash(b"").to_hex().to_string());
    }
}
