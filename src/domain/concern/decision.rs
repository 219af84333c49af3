//! Decision result for one pattern category within a concern.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QualityAttribute;

/// The chosen pattern for one decision category, with its objective score
/// and the weighted per-attribute contributions of the chosen row.
///
/// `satisfied` holds the positive contributions and `unsatisfied` the
/// negative ones; attributes with a zero contribution appear in neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The decision category this choice answers.
    pub category: String,
    /// Name of the selected pattern.
    pub pattern: String,
    /// Objective value of the selected row (desired attributes only).
    pub score: i64,
    /// Positive weighted contributions, sorted by attribute.
    pub satisfied: Vec<(QualityAttribute, i64)>,
    /// Negative weighted contributions, sorted by attribute.
    pub unsatisfied: Vec<(QualityAttribute, i64)>,
}

impl Decision {
    /// Creates a decision with empty contribution lists.
    pub fn new(category: impl Into<String>, pattern: impl Into<String>, score: i64) -> Self {
        Self {
            category: category.into(),
            pattern: pattern.into(),
            score,
            satisfied: Vec::new(),
            unsatisfied: Vec::new(),
        }
    }
}
