use thiserror::Error;

/// Failures surfaced by option parsing and JSON extraction.
///
/// The conversion and walk paths themselves never fail: unclassifiable
/// tokens, non-container values, non-string keys, and depth-exhausted
/// subtrees are all pass-through cases rather than errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("unknown case format: {0:?} (expected snake, camel, pascal, or kebab)")]
    UnknownCaseFormat(String),

    #[error("invalid depth: {0:?} (expected a non-negative integer or \"unbounded\")")]
    InvalidDepth(String),

    #[error("cyclic value cannot be represented as JSON")]
    CyclicValue,

    #[error("map key is not a string and cannot be represented as a JSON object key")]
    NonStringMapKey,
}
