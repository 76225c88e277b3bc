//! Recursive key-case conversion for nested data structures.
//!
//! `recase` rewrites the property keys of arbitrarily nested [`Value`]
//! graphs between snake_case, camelCase, PascalCase, and kebab-case while
//! leaving values, non-string keys, and non-convertible tokens untouched.
//! It is meant as a data-shape adapter, e.g. between a snake_case wire
//! format and camelCase in-memory structures.
//!
//! The walk is bounded by a configurable depth (default 3 container edges
//! from the root) and memoizes transformed containers by identity, so
//! shared subtrees stay shared in the output and cyclic inputs terminate.
//!
//! # Examples
//!
//! ```
//! use recase::{transform, CaseFormat, TransformOptions, Value};
//! use serde_json::json;
//!
//! let input = Value::from(json!({"user_id": 1, "first_name": "John"}));
//! let output = transform(&input, &TransformOptions::new());
//! assert_eq!(output.to_json()?, json!({"userId": 1, "firstName": "John"}));
//!
//! let input = Value::from(json!([{"user_id": 1}]));
//! let options = TransformOptions::new().target_case(CaseFormat::Pascal);
//! assert_eq!(transform(&input, &options).to_json()?, json!([{"UserId": 1}]));
//! # Ok::<(), recase::TransformError>(())
//! ```
//!
//! Single tokens can be converted directly:
//!
//! ```
//! use recase::{convert_token, CaseFormat};
//!
//! assert_eq!(convert_token("first_name", CaseFormat::Camel, None), "firstName");
//! assert_eq!(convert_token("$meta", CaseFormat::Camel, None), "$meta");
//! ```
pub mod case;
mod error;
mod options;
mod value;
pub mod walk;

pub use case::convert::{convert_token, should_preserve};
pub use case::detect::{
    detect_case, is_camel_case, is_kebab_case, is_pascal_case, is_single_word, is_snake_case,
    DetectedCase,
};
pub use error::TransformError;
pub use options::{CaseFormat, Depth, TransformOptions};
pub use value::Value;
pub use walk::{transform_array_items, transform_map, transform_object};

use walk::walker::Walker;

/// Transforms every key of every nested container in `data` into the target
/// convention, down to the configured depth.
///
/// The input is not modified; the result is a structurally equivalent graph
/// with fresh containers. Values appearing more than once in the input keep
/// their aliasing in the output, and cyclic inputs produce cyclic outputs
/// rather than recursing forever. Primitives are returned as-is.
///
/// # Example
/// ```
/// use recase::{transform, CaseFormat, Depth, TransformOptions, Value};
/// use serde_json::json;
///
/// let input = Value::from(json!({"outer_key": {"inner_key": 1}}));
/// let options = TransformOptions::new()
///     .target_case(CaseFormat::Kebab)
///     .depth(Depth::Unbounded);
/// let output = transform(&input, &options);
/// assert_eq!(output.to_json()?, json!({"outer-key": {"inner-key": 1}}));
/// # Ok::<(), recase::TransformError>(())
/// ```
pub fn transform(data: &Value, options: &TransformOptions) -> Value {
    Walker::new(options.resolve()).walk(data, 0)
}
