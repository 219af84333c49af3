//! Scoring matrix - the full pattern catalog, queryable by category.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::ArchitecturePattern;
use crate::domain::foundation::{QualityAttribute, ValidationError};

/// The full collection of scored architecture patterns.
///
/// Invariants (enforced at construction):
/// - the matrix contains at least one pattern
/// - pattern names are unique
///
/// Every pattern belongs to exactly one category by construction, and every
/// category named by a row therefore has at least one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringMatrix {
    patterns: Vec<ArchitecturePattern>,
}

impl ScoringMatrix {
    /// Builds a matrix from pattern rows, validating the catalog invariants.
    pub fn new(patterns: Vec<ArchitecturePattern>) -> Result<Self, ValidationError> {
        if patterns.is_empty() {
            return Err(ValidationError::empty_field("patterns"));
        }

        let mut seen = HashSet::new();
        for pattern in &patterns {
            if !seen.insert(pattern.name.as_str()) {
                return Err(ValidationError::invalid_format(
                    "pattern",
                    format!("duplicate name '{}'", pattern.name),
                ));
            }
        }

        Ok(Self { patterns })
    }

    /// Returns all pattern rows in catalog order.
    pub fn rows(&self) -> &[ArchitecturePattern] {
        &self.patterns
    }

    /// Returns the rows belonging to one category, in catalog order.
    pub fn rows_by_category(&self, category: &str) -> Vec<&ArchitecturePattern> {
        self.patterns
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Returns the decision categories in first-appearance order, deduplicated.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.patterns
            .iter()
            .filter(|p| seen.insert(p.category.as_str()))
            .map(|p| p.category.as_str())
            .collect()
    }

    /// Returns every quality attribute appearing in any row.
    pub fn attributes(&self) -> HashSet<QualityAttribute> {
        self.patterns
            .iter()
            .flat_map(|p| p.scores.keys().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn pattern(name: &str, category: &str, pairs: &[(&str, i32)]) -> ArchitecturePattern {
        let scores: HashMap<QualityAttribute, i32> = pairs
            .iter()
            .map(|(attr, score)| (QualityAttribute::new(*attr), *score))
            .collect();
        ArchitecturePattern::new(name, category, scores)
    }

    fn sample_matrix() -> ScoringMatrix {
        ScoringMatrix::new(vec![
            pattern("Sync RPC", "Communication", &[("Performance", -2), ("Consistency", 5)]),
            pattern("Async Messaging", "Communication", &[("Performance", 5), ("Consistency", -2)]),
            pattern("Shared Database", "Data Access", &[("Consistency", 4)]),
            pattern("Database per Service", "Data Access", &[("Scalability", 4)]),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(ScoringMatrix::new(Vec::new()).is_err());
    }

    #[test]
    fn rejects_duplicate_pattern_names() {
        let result = ScoringMatrix::new(vec![
            pattern("Sync RPC", "Communication", &[]),
            pattern("Sync RPC", "Data Access", &[]),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn categories_are_deduplicated_in_first_appearance_order() {
        let matrix = sample_matrix();
        assert_eq!(matrix.categories(), vec!["Communication", "Data Access"]);
    }

    #[test]
    fn rows_by_category_preserves_catalog_order() {
        let matrix = sample_matrix();
        let rows = matrix.rows_by_category("Communication");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Sync RPC");
        assert_eq!(rows[1].name, "Async Messaging");
    }

    #[test]
    fn rows_by_category_returns_empty_for_unknown_category() {
        let matrix = sample_matrix();
        assert!(matrix.rows_by_category("Deployment").is_empty());
    }

    #[test]
    fn attributes_cover_every_row() {
        let matrix = sample_matrix();
        let attributes = matrix.attributes();
        assert_eq!(attributes.len(), 3);
        assert!(attributes.contains(&"Performance".into()));
        assert!(attributes.contains(&"Consistency".into()));
        assert!(attributes.contains(&"Scalability".into()));
    }
}
