//! Framing template selection
//!
//! The template is picked from a content hash of the original text so the same
//! input lands on the same template in every run and every process. The hash
//! is SHA-256 truncated to its first 8 bytes (big-endian), never the
//! process-seeded std hasher.

use sha2::{Digest, Sha256};

/// Portable 64-bit content hash of `text`
pub fn stable_hash(text: &str) -> u64 {
    let digest = Sha256::digest(text.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head)
}

/// Index into a template list of length `count`
///
/// `count` must be non-zero; tone tables guarantee at least one template.
pub fn select_index(text: &str, count: usize) -> usize {
    debug_assert!(count > 0);
    (stable_hash(text) % count.max(1) as u64) as usize
}

/// Pick the framing template for `text`
pub fn select<'a>(text: &str, framings: &'a [String]) -> &'a str {
    framings
        .get(select_index(text, framings.len()))
        .map(String::as_str)
        .unwrap_or("")
}

/// Upper-case the first character, leave the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_hash_known_values() {
        // sha256("") = e3b0c44298fc1c14...
        assert_eq!(stable_hash(""), 0xe3b0_c442_98fc_1c14);
        // sha256("I am okay") = 707b553901f5b815...
        assert_eq!(stable_hash("I am okay"), 0x707b_5539_01f5_b815);
    }

    #[test]
    fn test_select_index_in_range() {
        for text in ["", "a", "hello world", "🎉"] {
            for count in 1..8 {
                assert!(select_index(text, count) < count);
            }
        }
    }

    #[test]
    fn test_select_index_known_values() {
        assert_eq!(select_index("", 4), 0);
        assert_eq!(select_index("I am okay", 4), 1);
    }

    #[test]
    fn test_hash_depends_on_case() {
        assert_ne!(stable_hash("Bad day"), stable_hash("bad day"));
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("hello World"), "Hello World");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first("ßtraße"), "SStraße");
        assert_eq!(capitalize_first("1st place"), "1st place");
    }
}
