//! Architecture pattern row of the scoring matrix.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::QualityAttribute;

/// One row of the scoring matrix: an architecture pattern belonging to a
/// single decision category, scored against quality attributes.
///
/// A positive score means the pattern contributes to satisfying the
/// attribute, a negative score means it actively harms it, and an absent
/// attribute is neutral. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitecturePattern {
    /// Pattern name (e.g. "Event Sourcing").
    pub name: String,
    /// The decision category this pattern belongs to (e.g. "Data Access Style").
    pub category: String,
    /// Signed suitability scores per quality attribute.
    pub scores: HashMap<QualityAttribute, i32>,
}

impl ArchitecturePattern {
    /// Creates a new pattern row.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        scores: HashMap<QualityAttribute, i32>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            scores,
        }
    }

    /// Returns the score for an attribute, treating absent attributes as 0.
    pub fn score(&self, attribute: &QualityAttribute) -> i32 {
        self.scores.get(attribute).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(&str, i32)]) -> HashMap<QualityAttribute, i32> {
        pairs
            .iter()
            .map(|(name, score)| (QualityAttribute::new(*name), *score))
            .collect()
    }

    #[test]
    fn score_returns_stored_value() {
        let pattern = ArchitecturePattern::new(
            "Async Messaging",
            "Communication Style",
            scores(&[("Performance", 5), ("Consistency", -2)]),
        );

        assert_eq!(pattern.score(&"Performance".into()), 5);
        assert_eq!(pattern.score(&"Consistency".into()), -2);
    }

    #[test]
    fn score_treats_absent_attribute_as_neutral() {
        let pattern =
            ArchitecturePattern::new("Sync RPC", "Communication Style", scores(&[("Performance", -2)]));

        assert_eq!(pattern.score(&"Security".into()), 0);
    }
}
