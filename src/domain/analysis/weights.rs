//! Quality weight aggregation and normalization.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::catalog::ScoringMatrix;
use crate::domain::foundation::QualityAttribute;
use crate::domain::requirements::{ConditionGroup, Requirement};

/// How the run-wide quality weights are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityWeightsMode {
    /// Every attribute present as a matrix column gets weight 1.
    EquallyImportant,
    /// Every attribute is a hard ask; degenerates to equal weights for
    /// scoring purposes.
    AllRequired,
    /// Weight = number of requirements referencing the attribute.
    #[default]
    Inferred,
    /// The caller supplies the weight map directly.
    Provided,
}

/// Derives and normalizes quality-attribute weights.
///
/// All functions are pure; the weight maps they return are raw tallies until
/// passed through [`WeightAggregator::normalize`].
pub struct WeightAggregator;

impl WeightAggregator {
    /// Weight 1 for every attribute appearing in the matrix.
    ///
    /// Used for `EquallyImportant`, and for `AllRequired` which carries no
    /// inferred weights and is handled as the same degenerate all-equal case.
    pub fn equal_weights(matrix: &ScoringMatrix) -> HashMap<QualityAttribute, u32> {
        matrix.attributes().into_iter().map(|attr| (attr, 1)).collect()
    }

    /// Tally of attribute references across all requirements.
    pub fn inferred_weights(requirements: &[Requirement]) -> HashMap<QualityAttribute, u32> {
        let mut weights = HashMap::new();
        for requirement in requirements {
            for quality in &requirement.qualities {
                *weights.entry(quality.clone()).or_insert(0) += 1;
            }
        }
        weights
    }

    /// Same tally as [`WeightAggregator::inferred_weights`], scoped to the
    /// requirements belonging to one concern's condition groups.
    pub fn concern_weights(groups: &[ConditionGroup]) -> HashMap<QualityAttribute, u32> {
        let mut weights = HashMap::new();
        for group in groups {
            for requirement in group.requirements() {
                for quality in &requirement.qualities {
                    *weights.entry(quality.clone()).or_insert(0) += 1;
                }
            }
        }
        weights
    }

    /// Normalizes weights to a 0-100 scale via truncating integer division:
    /// `floor(weight * 100 / total)`.
    ///
    /// Truncation means the normalized weights generally sum to slightly less
    /// than 100; this is documented behavior, not corrected. A zero total
    /// yields all-zero weights rather than a division fault.
    pub fn normalize(weights: &HashMap<QualityAttribute, u32>) -> HashMap<QualityAttribute, u32> {
        let total: u64 = weights.values().map(|&w| u64::from(w)).sum();

        weights
            .iter()
            .map(|(attr, &weight)| {
                let normalized = if total == 0 {
                    0
                } else {
                    (u64::from(weight) * 100 / total) as u32
                };
                (attr.clone(), normalized)
            })
            .collect()
    }
}
