//! Condition Consolidator - merges requirements with equivalent conditions.

use std::sync::Arc;

use tracing::debug;

use crate::domain::requirements::{ConditionGroup, Requirement};
use crate::ports::EquivalenceOracle;

use super::pipeline::PipelineError;

/// Folds requirements into condition groups, one group per equivalence
/// class of applicability conditions.
///
/// Requirements are processed strictly in input order. Each candidate is
/// compared against the nominal condition of every existing group, one
/// oracle round trip at a time, and joins the first group judged
/// equivalent; when no group matches it founds a new one. First-match-wins
/// means equivalence classes are not transitively closed: once a group has
/// claimed a requirement, later members are never compared against it
/// directly.
pub struct ConditionConsolidator {
    oracle: Arc<dyn EquivalenceOracle>,
}

impl ConditionConsolidator {
    /// Creates a consolidator using the given equivalence oracle.
    pub fn new(oracle: Arc<dyn EquivalenceOracle>) -> Self {
        Self { oracle }
    }

    /// Consolidates requirements into condition groups covering every
    /// requirement exactly once.
    pub async fn consolidate(
        &self,
        requirements: &[Requirement],
    ) -> Result<Vec<ConditionGroup>, PipelineError> {
        let mut groups: Vec<ConditionGroup> = Vec::new();

        for requirement in requirements {
            let mut matched = None;

            for (index, group) in groups.iter().enumerate() {
                let equivalent = self
                    .oracle
                    .is_equivalent(&requirement.condition, group.nominal_condition())
                    .await?;

                debug!(
                    condition = %requirement.condition,
                    nominal = %group.nominal_condition(),
                    equivalent,
                    "equivalence check"
                );

                if equivalent {
                    matched = Some(index);
                    break;
                }
            }

            match matched {
                Some(index) => groups[index].push(requirement.clone()),
                None => groups.push(ConditionGroup::new(requirement.clone())),
            }
        }

        Ok(groups)
    }
}
