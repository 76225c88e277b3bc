pub mod convert;
pub mod detect;
pub mod format;

pub use convert::convert_token;
pub use detect::{detect_case, DetectedCase};
