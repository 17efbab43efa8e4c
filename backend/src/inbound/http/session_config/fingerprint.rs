//! Short, non-secret identifier for the active session key.

use actix_web::cookie::Key;
use sha2::{Digest, Sha256};

const FINGERPRINT_LEN: usize = 8;

/// Hex-encoded prefix of the SHA-256 digest of the key's signing half.
///
/// Logged at startup so operators can tell which key a node runs with.
///
/// # Examples
///
/// ```rust
/// use actix_web::cookie::Key;
/// use scholar::inbound::http::session_config::fingerprint::key_fingerprint;
///
/// let fingerprint = key_fingerprint(&Key::generate());
/// assert_eq!(fingerprint.len(), 16);
/// ```
#[must_use]
pub fn key_fingerprint(key: &Key) -> String {
    let digest = Sha256::digest(key.signing());
    digest
        .get(..FINGERPRINT_LEN)
        .map(hex::encode)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn same_material_gives_same_fingerprint() {
        let first = Key::derive_from(&[7_u8; 64]);
        let second = Key::derive_from(&[7_u8; 64]);
        assert_eq!(key_fingerprint(&first), key_fingerprint(&second));
    }

    #[rstest]
    fn fingerprint_is_sixteen_lowercase_hex_digits() {
        let fingerprint = key_fingerprint(&Key::generate());
        assert_eq!(fingerprint.len(), FINGERPRINT_LEN * 2);
        assert!(
            fingerprint
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[rstest]
    fn distinct_material_gives_distinct_fingerprints() {
        let first = Key::derive_from(&[b'x'; 64]);
        let second = Key::derive_from(&[b'y'; 64]);
        assert_ne!(key_fingerprint(&first), key_fingerprint(&second));
    }
}
