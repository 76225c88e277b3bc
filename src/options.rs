//! Transform options and their string/config representations.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TransformError;

/// One of the four supported naming conventions. Used both as a source tag
/// (what a token was classified as) and a target tag (what to rewrite into).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseFormat {
    Snake,
    Camel,
    Pascal,
    Kebab,
}

impl CaseFormat {
    pub const ALL: [CaseFormat; 4] = [
        CaseFormat::Snake,
        CaseFormat::Camel,
        CaseFormat::Pascal,
        CaseFormat::Kebab,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseFormat::Snake => "snake",
            CaseFormat::Camel => "camel",
            CaseFormat::Pascal => "pascal",
            CaseFormat::Kebab => "kebab",
        }
    }

    /// Stable index into the formatter table.
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for CaseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseFormat {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "snake" => Ok(CaseFormat::Snake),
            "camel" => Ok(CaseFormat::Camel),
            "pascal" => Ok(CaseFormat::Pascal),
            "kebab" => Ok(CaseFormat::Kebab),
            other => Err(TransformError::UnknownCaseFormat(other.to_string())),
        }
    }
}

/// Recursion bound for the walker, counted in container edges descended
/// from the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Depth {
    Bounded(usize),
    Unbounded,
}

impl Depth {
    pub(crate) fn limit(&self) -> Option<usize> {
        match self {
            Depth::Bounded(n) => Some(*n),
            Depth::Unbounded => None,
        }
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth::Bounded(3)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Depth::Bounded(n) => write!(f, "{n}"),
            Depth::Unbounded => f.write_str("unbounded"),
        }
    }
}

impl FromStr for Depth {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "unbounded" {
            return Ok(Depth::Unbounded);
        }
        s.parse::<usize>()
            .map(Depth::Bounded)
            .map_err(|_| TransformError::InvalidDepth(s.to_string()))
    }
}

impl Serialize for Depth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Depth::Bounded(n) => serializer.serialize_u64(*n as u64),
            Depth::Unbounded => serializer.serialize_str("unbounded"),
        }
    }
}

impl<'de> Deserialize<'de> for Depth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(usize),
            Text(String),
        }
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(Depth::Bounded(n)),
            Repr::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Options for [`transform`](crate::transform). All fields are optional:
/// the target defaults to camelCase and the depth to 3.
///
/// Supplying `source_case` bypasses classification for every token, so it
/// must be correct for all keys in the input; mixed-case inputs will be
/// mis-converted when the assumption is violated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformOptions {
    pub target_case: Option<CaseFormat>,
    pub source_case: Option<CaseFormat>,
    pub depth: Option<Depth>,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_case(mut self, target: CaseFormat) -> Self {
        self.target_case = Some(target);
        self
    }

    pub fn source_case(mut self, source: CaseFormat) -> Self {
        self.source_case = Some(source);
        self
    }

    pub fn depth(mut self, depth: Depth) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Fills in defaults once per top-level call; the result is held
    /// constant for the whole walk.
    pub(crate) fn resolve(&self) -> ResolvedOptions {
        ResolvedOptions {
            target: self.target_case.unwrap_or(CaseFormat::Camel),
            source: self.source_case,
            max_depth: self.depth.unwrap_or_default().limit(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ResolvedOptions {
    pub(crate) target: CaseFormat,
    pub(crate) source: Option<CaseFormat>,
    /// `None` means unbounded.
    pub(crate) max_depth: Option<usize>,
}
