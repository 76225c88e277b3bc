// Pairwise case converters and the (source, target) formatter table.
//
// The camel-sourced and pascal-sourced converters intentionally disagree on
// acronym runs: camelToSnake splits a run one separator per capital
// ("hTTPResponse" -> "h_t_t_p_response"), while pascalToSnake peels a
// leading run off as a unit ("HTTPResponse" -> "http_response"). Callers
// must not assume the two are inverses of each other.
use crate::options::CaseFormat;

pub(crate) type Formatter = fn(&str) -> String;

/// Fixed 4x4 converter table indexed by `(source, target)`; the diagonal is
/// the identity. Built once, never mutated.
static FORMATTERS: [[Formatter; 4]; 4] = [
    [identity, snake_to_camel, snake_to_pascal, snake_to_kebab],
    [camel_to_snake, identity, camel_to_pascal, camel_to_kebab],
    [pascal_to_snake, pascal_to_camel, identity, pascal_to_kebab],
    [kebab_to_snake, kebab_to_camel, kebab_to_pascal, identity],
];

pub(crate) fn formatter_for(source: CaseFormat, target: CaseFormat) -> Formatter {
    FORMATTERS[source.index()][target.index()]
}

fn identity(token: &str) -> String {
    token.to_string()
}

fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn lowercase_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercases the token, then deletes each run of the delimiter and
/// uppercases the character that follows it. A trailing run is dropped.
fn delimited_to_camel(token: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(token.len());
    let mut at_boundary = false;
    for ch in token.chars() {
        if ch == delimiter {
            at_boundary = true;
            continue;
        }
        let lowered = ch.to_ascii_lowercase();
        if at_boundary {
            out.push(lowered.to_ascii_uppercase());
            at_boundary = false;
        } else {
            out.push(lowered);
        }
    }
    out
}

/// Inserts `separator` before any uppercase letter following a lowercase
/// letter or digit, then after any uppercase letter that is itself followed
/// by another uppercase letter, then lowercases. An acronym run is split one
/// separator per capital.
fn camel_delimited(token: &str, separator: char) -> String {
    let chars: Vec<char> = token.chars().collect();
    let mut split = String::with_capacity(chars.len());
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() {
                split.push(separator);
            }
        }
        split.push(ch);
    }
    let split: Vec<char> = split.chars().collect();
    let mut out = String::with_capacity(split.len());
    for (i, &ch) in split.iter().enumerate() {
        out.push(ch);
        if ch.is_ascii_uppercase() && split.get(i + 1).is_some_and(|c| c.is_ascii_uppercase()) {
            out.push(separator);
        }
    }
    out.to_ascii_lowercase()
}

/// Peels an acronym run off as a unit (a run of 2+ capitals immediately
/// followed by a capital-then-lowercase pair splits before that capital),
/// then applies the standard lower-to-upper boundary split, then lowercases.
fn pascal_delimited(token: &str, separator: char) -> String {
    let chars: Vec<char> = token.chars().collect();
    let mut split = String::with_capacity(chars.len());
    for (i, &ch) in chars.iter().enumerate() {
        if i >= 2
            && ch.is_ascii_uppercase()
            && chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase())
            && chars[i - 1].is_ascii_uppercase()
            && chars[i - 2].is_ascii_uppercase()
        {
            split.push(separator);
        }
        split.push(ch);
    }
    let split: Vec<char> = split.chars().collect();
    let mut out = String::with_capacity(split.len());
    for (i, &ch) in split.iter().enumerate() {
        if i > 0
            && ch.is_ascii_uppercase()
            && (split[i - 1].is_ascii_lowercase() || split[i - 1].is_ascii_digit())
        {
            out.push(separator);
        }
        out.push(ch);
    }
    out.to_ascii_lowercase()
}

pub fn snake_to_camel(token: &str) -> String {
    delimited_to_camel(token, '_')
}

pub fn snake_to_pascal(token: &str) -> String {
    capitalize_first(&snake_to_camel(token))
}

pub fn snake_to_kebab(token: &str) -> String {
    token.replace('_', "-")
}

pub fn camel_to_snake(token: &str) -> String {
    camel_delimited(token, '_')
}

pub fn camel_to_kebab(token: &str) -> String {
    camel_delimited(token, '-')
}

pub fn camel_to_pascal(token: &str) -> String {
    capitalize_first(token)
}

pub fn pascal_to_camel(token: &str) -> String {
    lowercase_first(token)
}

pub fn pascal_to_snake(token: &str) -> String {
    pascal_delimited(token, '_')
}

pub fn pascal_to_kebab(token: &str) -> String {
    pascal_delimited(token, '-')
}

pub fn kebab_to_camel(token: &str) -> String {
    delimited_to_camel(token, '-')
}

pub fn kebab_to_pascal(token: &str) -> String {
    capitalize_first(&kebab_to_camel(token))
}

pub fn kebab_to_snake(token: &str) -> String {
    token.replace('-', "_")
}

/// Converter for single-word tokens, keyed by target only. Note the camel
/// target lowercases only the first character ("ROLE" -> "rOLE").
pub fn single_word_to_case(token: &str, target: CaseFormat) -> String {
    match target {
        CaseFormat::Pascal => {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        }
        CaseFormat::Camel => lowercase_first(token),
        CaseFormat::Snake | CaseFormat::Kebab => token.to_ascii_lowercase(),
    }
}
