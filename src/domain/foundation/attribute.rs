//! Quality attribute value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A quality attribute key (e.g. "Performance").
///
/// Attributes carry no formal ontology; two attributes are the same exactly
/// when their strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualityAttribute(String);

impl QualityAttribute {
    /// Creates a new attribute key.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the attribute name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QualityAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QualityAttribute {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for QualityAttribute {
    fn from(name: String) -> Self {
        Self(name)
    }
}
