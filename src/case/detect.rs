// Token classification: decides which naming convention a bare key follows.
use crate::options::CaseFormat;

/// Outcome of classifying a token. `SingleWord` covers tokens with no
/// delimiter and no case transition ("role", "Role"), which are ambiguous
/// among the four conventions until a target is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectedCase {
    Snake,
    Camel,
    Pascal,
    Kebab,
    SingleWord,
}

impl DetectedCase {
    /// The convention tag for pairwise conversion, `None` for `SingleWord`.
    pub fn case_format(&self) -> Option<CaseFormat> {
        match self {
            DetectedCase::Snake => Some(CaseFormat::Snake),
            DetectedCase::Camel => Some(CaseFormat::Camel),
            DetectedCase::Pascal => Some(CaseFormat::Pascal),
            DetectedCase::Kebab => Some(CaseFormat::Kebab),
            DetectedCase::SingleWord => None,
        }
    }
}

/// Classifies a token, or returns `None` when no convention fits.
///
/// Checks run in priority order with the first match winning: single-word,
/// snake, camel, pascal, kebab. A token can never be ambiguous between
/// single-word and a multi-word form, because the multi-word forms require a
/// delimiter or a case transition that single-word forbids.
///
/// # Example
/// ```
/// use recase::{detect_case, DetectedCase};
///
/// assert_eq!(detect_case("user_id"), Some(DetectedCase::Snake));
/// assert_eq!(detect_case("userId"), Some(DetectedCase::Camel));
/// assert_eq!(detect_case("UserId"), Some(DetectedCase::Pascal));
/// assert_eq!(detect_case("user-id"), Some(DetectedCase::Kebab));
/// assert_eq!(detect_case("user"), Some(DetectedCase::SingleWord));
/// assert_eq!(detect_case("user id"), None);
/// ```
pub fn detect_case(token: &str) -> Option<DetectedCase> {
    if token.is_empty() {
        return None;
    }
    if is_single_word(token) {
        return Some(DetectedCase::SingleWord);
    }
    if is_snake_case(token) {
        return Some(DetectedCase::Snake);
    }
    if is_camel_case(token) {
        return Some(DetectedCase::Camel);
    }
    if is_pascal_case(token) {
        return Some(DetectedCase::Pascal);
    }
    if is_kebab_case(token) {
        return Some(DetectedCase::Kebab);
    }
    None
}

/// True when the token is a single word: no delimiters, ASCII alphanumeric
/// only, and either all-lowercase or first-letter-uppercase with the rest
/// lowercase. Tokens of length ≤ 1 qualify.
pub fn is_single_word(token: &str) -> bool {
    if token.contains(['_', '-', ' ']) {
        return false;
    }
    if !token.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return false;
    }
    if token.len() <= 1 {
        return true;
    }
    if !token.bytes().any(|b| b.is_ascii_uppercase()) {
        return true;
    }
    // Capitalized word: first char not lowercase, remainder free of uppercase.
    !token.as_bytes()[0].is_ascii_lowercase()
        && !token.bytes().skip(1).any(|b| b.is_ascii_uppercase())
}

/// True for snake_case: lowercase letters, digits and underscores, no
/// consecutive underscores, and at least one underscore unless the token is
/// a bare lowercase word.
pub fn is_snake_case(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
        && !token.contains("__")
        && (token.contains('_')
            || token
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}

/// True for camelCase: starts lowercase, letters and digits only, with at
/// least one uppercase letter.
pub fn is_camel_case(token: &str) -> bool {
    let mut bytes = token.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    token.bytes().skip(1).all(|b| b.is_ascii_alphanumeric())
        && token.bytes().any(|b| b.is_ascii_uppercase())
}

/// True for PascalCase: starts uppercase, letters and digits only, with at
/// least one lowercase letter.
pub fn is_pascal_case(token: &str) -> bool {
    let mut bytes = token.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    token.bytes().skip(1).all(|b| b.is_ascii_alphanumeric())
        && token.bytes().any(|b| b.is_ascii_lowercase())
}

/// True for kebab-case: lowercase letters, digits and hyphens, no
/// consecutive hyphens, and at least one hyphen unless the token is a bare
/// lowercase word.
pub fn is_kebab_case(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        && !token.contains("--")
        && (token.contains('-')
            || token
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_accepts_plain_and_capitalized_words() {
        assert!(is_single_word("hello"));
        assert!(is_single_word("Hello"));
        assert!(is_single_word("a"));
        assert!(is_single_word("Z"));
        assert!(is_single_word("version2"));
        assert!(is_single_word("123"));
    }

    #[test]
    fn single_word_rejects_delimiters_and_transitions() {
        assert!(!is_single_word("hello_world"));
        assert!(!is_single_word("hello-world"));
        assert!(!is_single_word("hello world"));
        assert!(!is_single_word("helloWorld"));
        assert!(!is_single_word("HELLO"));
        assert!(!is_single_word("hello@world"));
    }

    #[test]
    fn snake_detection() {
        assert!(is_snake_case("hello_world"));
        assert!(is_snake_case("field_2_name"));
        assert!(is_snake_case("hello"));
        assert!(!is_snake_case("hello__world"));
        assert!(!is_snake_case("Hello_world"));
        assert!(!is_snake_case("hello-world"));
        assert!(!is_snake_case(""));
    }

    #[test]
    fn camel_detection() {
        assert!(is_camel_case("helloWorld"));
        assert!(is_camel_case("hTTPResponse"));
        assert!(!is_camel_case("hello"));
        assert!(!is_camel_case("HelloWorld"));
        assert!(!is_camel_case("hello_world"));
    }

    #[test]
    fn pascal_detection() {
        assert!(is_pascal_case("HelloWorld"));
        assert!(is_pascal_case("HTTPResponse"));
        assert!(!is_pascal_case("HELLO"));
        assert!(!is_pascal_case("helloWorld"));
    }

    #[test]
    fn kebab_detection() {
        assert!(is_kebab_case("hello-world"));
        assert!(is_kebab_case("hello"));
        assert!(!is_kebab_case("hello--world"));
        assert!(!is_kebab_case("hello_world"));
    }

    #[test]
    fn priority_order_resolves_overlaps() {
        // "hello" satisfies the snake and kebab shapes too; single-word wins.
        assert_eq!(detect_case("hello"), Some(DetectedCase::SingleWord));
        assert_eq!(detect_case("Role"), Some(DetectedCase::SingleWord));
        assert_eq!(detect_case("hello_world"), Some(DetectedCase::Snake));
        assert_eq!(detect_case("hello-world"), Some(DetectedCase::Kebab));
    }

    #[test]
    fn indeterminate_tokens() {
        assert_eq!(detect_case(""), None);
        assert_eq!(detect_case("HELLO"), None);
        assert_eq!(detect_case("Hello_World"), None);
        assert_eq!(detect_case("hello world"), None);
        assert_eq!(detect_case("mixed_caseAnd-delims"), None);
    }
}
