use sha2::{Digest, Sha256};

/// Stable, non-reversible identifier for an API key, safe to log.
pub fn fingerprint(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    let hash = hasher.finalize();
    format!("key_{}", &hex::encode(hash)[..16])
}

/// Short human-readable form of a key: first and last four chars only.
pub fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

pub(crate) fn mask_opt(key: &Option<String>) -> Option<String> {
    key.as_deref().map(mask)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fingerprint_is_stable_and_prefixed() {
        let first = fingerprint("sk-ant-secret");
        let second = fingerprint("sk-ant-secret");

        assert_eq!(first, second);
        assert!(first.starts_with("key_"));
        assert_eq!(first.len(), "key_".len() + 16);
        assert!(!first.contains("secret"));
    }

    #[test]
    fn different_keys_fingerprint_differently() {
        assert_ne!(fingerprint("a"), fingerprint("b"));
    }

    #[test]
    fn mask_keeps_edges_of_long_keys() {
        let actual = mask("sk-ant-api03-abcdefgh");
        let expected = "sk-a...efgh";
        assert_eq!(actual, expected);
    }

    #[test]
    fn mask_hides_short_keys_entirely() {
        assert_eq!(mask("12345678"), "****");
        assert_eq!(mask(""), "****");
    }
}
