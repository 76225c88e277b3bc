pub mod containers;
pub mod walker;

pub use containers::{transform_array_items, transform_map, transform_object};
