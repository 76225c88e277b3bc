// Single-token conversion: preservation check, classification, dispatch.
use crate::case::detect::{detect_case, DetectedCase};
use crate::case::format::{formatter_for, single_word_to_case};
use crate::options::CaseFormat;

/// True when a token must be passed through byte-for-byte: it contains a
/// character outside `[A-Za-z0-9_-]`, starts with a non-letter, or ends with
/// a non-alphanumeric character. Runs before classification and overrides
/// everything else, so identifiers carrying special prefixes or suffixes
/// (`$id`, `_private`, `key:`) round-trip untouched.
pub fn should_preserve(token: &str) -> bool {
    let bytes = token.as_bytes();
    let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
        return false;
    };
    bytes
        .iter()
        .any(|&b| !(b.is_ascii_alphanumeric() || b == b'_' || b == b'-'))
        || !first.is_ascii_alphabetic()
        || !last.is_ascii_alphanumeric()
}

/// Rewrites a single token into the target convention.
///
/// Empty and preserved tokens come back unchanged. When `source` is given,
/// classification is skipped and the (source, target) converter is applied
/// directly; the caller vouches for the source tag. Otherwise the token is
/// classified first: indeterminate tokens come back unchanged, single words
/// go through the dedicated single-word converter, and a token already in
/// the target convention is left alone.
///
/// # Example
/// ```
/// use recase::{convert_token, CaseFormat};
///
/// assert_eq!(convert_token("user_id", CaseFormat::Camel, None), "userId");
/// assert_eq!(convert_token("$ref", CaseFormat::Camel, None), "$ref");
/// ```
pub fn convert_token(token: &str, target: CaseFormat, source: Option<CaseFormat>) -> String {
    if token.is_empty() {
        return String::new();
    }
    if should_preserve(token) {
        return token.to_string();
    }
    if let Some(source) = source {
        if source == target {
            return token.to_string();
        }
        return formatter_for(source, target)(token);
    }
    let detected = match detect_case(token) {
        None => return token.to_string(),
        Some(DetectedCase::SingleWord) => return single_word_to_case(token, target),
        Some(detected) => detected,
    };
    match detected.case_format() {
        Some(source) if source == target => token.to_string(),
        Some(source) => formatter_for(source, target)(token),
        // Unreachable for the supported matrix; fall back to pass-through.
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_all_detected_conventions() {
        assert_eq!(convert_token("user_id", CaseFormat::Camel, None), "userId");
        assert_eq!(convert_token("user_id", CaseFormat::Pascal, None), "UserId");
        assert_eq!(convert_token("user_id", CaseFormat::Kebab, None), "user-id");
        assert_eq!(convert_token("userId", CaseFormat::Snake, None), "user_id");
        assert_eq!(convert_token("UserId", CaseFormat::Kebab, None), "user-id");
        assert_eq!(convert_token("user-id", CaseFormat::Pascal, None), "UserId");
    }

    #[test]
    fn empty_token_is_unchanged() {
        assert_eq!(convert_token("", CaseFormat::Snake, None), "");
    }

    #[test]
    fn preserved_tokens_pass_through_any_target() {
        for token in ["$id", "_private", "9lives", "key:", "trailing_", "a b", "naïve"] {
            assert!(should_preserve(token), "{token} should be preserved");
            for target in CaseFormat::ALL {
                assert_eq!(convert_token(token, target, None), token);
            }
        }
    }

    #[test]
    fn plain_tokens_are_not_preserved() {
        for token in ["user_id", "userId", "UserId", "user-id", "role", "Role"] {
            assert!(!should_preserve(token));
        }
    }

    #[test]
    fn indeterminate_tokens_are_unchanged() {
        assert_eq!(convert_token("HELLO", CaseFormat::Camel, None), "HELLO");
        assert_eq!(
            convert_token("Mixed_Case", CaseFormat::Camel, None),
            "Mixed_Case"
        );
    }

    #[test]
    fn single_words_use_the_dedicated_converter() {
        assert_eq!(convert_token("role", CaseFormat::Pascal, None), "Role");
        assert_eq!(convert_token("Role", CaseFormat::Snake, None), "role");
        assert_eq!(convert_token("Role", CaseFormat::Camel, None), "role");
    }

    #[test]
    fn token_already_in_target_is_unchanged() {
        assert_eq!(convert_token("user_id", CaseFormat::Snake, None), "user_id");
        assert_eq!(convert_token("userId", CaseFormat::Camel, None), "userId");
    }

    #[test]
    fn explicit_source_bypasses_classification() {
        assert_eq!(
            convert_token("HTTPResponse", CaseFormat::Snake, Some(CaseFormat::Pascal)),
            "http_response"
        );
        // The caller's tag is trusted even when it contradicts the token:
        // this camelCase key is treated as already-snake and left alone.
        assert_eq!(
            convert_token("userId", CaseFormat::Snake, Some(CaseFormat::Snake)),
            "userId"
        );
    }

    #[test]
    fn explicit_source_still_respects_preservation() {
        assert_eq!(
            convert_token("$userId", CaseFormat::Snake, Some(CaseFormat::Camel)),
            "$userId"
        );
    }

    #[test]
    fn converting_twice_into_the_same_target_is_idempotent() {
        for token in ["user_id", "userId", "UserId", "user-id", "hTTPResponse", "Role"] {
            for target in CaseFormat::ALL {
                let once = convert_token(token, target, None);
                let twice = convert_token(&once, target, Some(target));
                assert_eq!(once, twice, "token {token} target {target}");
            }
        }
    }
}
