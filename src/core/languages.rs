//! Target language tag checks
//!
//! Only the shape of the tag is checked here. Whether the backend actually
//! translates into a language is left to the backend.

/// Check that `code` looks like a BCP-47 language tag and return it trimmed.
///
/// The primary subtag is 2-8 ASCII letters; further subtags are 1-8 ASCII
/// alphanumerics separated by `-` or `_`.
pub fn parse_tag(code: &str) -> Option<&str> {
    let tag = code.trim();
    let mut subtags = tag.split(|c: char| c == '-' || c == '_');

    let primary = subtags.next()?;
    if !(2..=8).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let rest_ok = subtags.all(|s| (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric()));

    rest_ok.then_some(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_tags() {
        for code in ["es", "rw", "ckb", "pt-PT", "zh-CN", "zh_TW", "sr-Latn-RS", "zz"] {
            assert_eq!(parse_tag(code), Some(code), "{code} should be accepted");
        }
        assert_eq!(parse_tag(" fr "), Some("fr"));
    }

    #[test]
    fn test_malformed_tags() {
        for code in ["", "   ", "e", "e s", "es-", "-es", "1a", "es--PT", "es-toolongsubtag", "fr!"] {
            assert_eq!(parse_tag(code), None, "{code:?} should be rejected");
        }
    }
}
