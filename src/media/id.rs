//! Content-derived media identifiers.

/// Identifier length in bytes before hex encoding.
const ID_BYTES: usize = 16;

/// Stable identifier for a media file.
///
/// Pure function of the `/`-separated path relative to the media root:
/// blake3 of the path, truncated to 16 bytes, lowercase hex.
pub fn media_id(relative: &str) -> String {
    let hash = blake3::hash(relative.as_bytes());
    hex::encode(&hash.as_bytes()[..ID_BYTES])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_id_shape() {
        let id = media_id("clips/a.mp4");
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_media_id_deterministic() {
        assert_eq!(media_id("a.mp4"), media_id("a.mp4"));
    }

    #[test]
    fn test_media_id_distinct() {
        assert_ne!(media_id("a.mp4"), media_id("b.mp4"));
        assert_ne!(media_id("x/a.mp4"), media_id("a.mp4"));
    }

    #[test]
    fn test_media_id_matches_blake3_prefix() {
        let full = blake3::hash(b"a.mp4").to_hex();
        assert_eq!(media_id("a.mp4"), &full[..32]);
    }
}
