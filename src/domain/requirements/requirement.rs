//! Requirement value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QualityAttribute;

/// A single requirement: a free-text applicability condition plus the
/// quality attributes it asserts are desired.
///
/// Created by an external parser; never mutated by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Free-text applicability condition (e.g. "when traffic is bursty").
    pub condition: String,
    /// Quality attributes this requirement asks for.
    pub qualities: Vec<QualityAttribute>,
}

impl Requirement {
    /// Creates a new requirement.
    pub fn new(condition: impl Into<String>, qualities: Vec<QualityAttribute>) -> Self {
        Self {
            condition: condition.into(),
            qualities,
        }
    }
}
