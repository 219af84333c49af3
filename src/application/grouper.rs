//! Concern Grouper - partitions condition groups into consistent scenarios.

use std::sync::Arc;

use tracing::debug;

use crate::domain::requirements::{ConditionGroup, SatisfiableGroup};
use crate::ports::{GroupingOracle, OracleError};

use super::pipeline::PipelineError;

/// Partitions condition groups into satisfiable groups via one grouping
/// oracle round trip.
///
/// A condition group may be placed in more than one satisfiable group; a
/// universally applicable condition may be placed in every one.
pub struct ConcernGrouper {
    oracle: Arc<dyn GroupingOracle>,
}

impl ConcernGrouper {
    /// Creates a grouper using the given grouping oracle.
    pub fn new(oracle: Arc<dyn GroupingOracle>) -> Self {
        Self { oracle }
    }

    /// Builds the satisfiable groups for the given condition groups.
    ///
    /// When every condition is the universal one there is nothing to
    /// partition: the oracle is skipped and a single implicit group holding
    /// all conditions is returned.
    pub async fn group(
        &self,
        groups: Vec<ConditionGroup>,
    ) -> Result<Vec<SatisfiableGroup>, PipelineError> {
        if groups.is_empty() {
            return Ok(Vec::new());
        }

        if groups.iter().all(ConditionGroup::is_universal) {
            debug!("only universal conditions present; skipping the grouping oracle");
            return Ok(vec![SatisfiableGroup::new(groups)]);
        }

        let conditions: Vec<String> = groups
            .iter()
            .map(|g| g.nominal_condition().to_string())
            .collect();

        let partition = self.oracle.partition(&conditions).await?;
        debug!(tuples = partition.len(), "grouping oracle returned a partition");

        let mut satisfiable = Vec::with_capacity(partition.len());
        for tuple in partition {
            let mut members = Vec::with_capacity(tuple.len());
            for index in tuple {
                let group = groups.get(index).ok_or_else(|| {
                    PipelineError::Oracle(OracleError::malformed(format!(
                        "partition index {index} outside the condition list"
                    )))
                })?;
                members.push(group.clone());
            }
            satisfiable.push(SatisfiableGroup::new(members));
        }

        Ok(satisfiable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::oracle::MockGroupingOracle;
    use crate::domain::requirements::{Requirement, UNIVERSAL_CONDITION};

    fn group(condition: &str) -> ConditionGroup {
        ConditionGroup::new(Requirement::new(condition, vec!["Performance".into()]))
    }

    #[tokio::test]
    async fn universal_only_input_skips_the_oracle() {
        let oracle = Arc::new(MockGroupingOracle::new());
        let grouper = ConcernGrouper::new(oracle.clone());

        let satisfiable = grouper
            .group(vec![group(UNIVERSAL_CONDITION)])
            .await
            .unwrap();

        assert_eq!(satisfiable.len(), 1);
        assert_eq!(satisfiable[0].groups.len(), 1);
        assert_eq!(oracle.call_count(), 0);
    }

    #[tokio::test]
    async fn partition_tuples_map_back_to_condition_groups() {
        let oracle = Arc::new(
            MockGroupingOracle::new().with_partition(vec![vec![0, 2], vec![1, 2]]),
        );
        let grouper = ConcernGrouper::new(oracle.clone());

        let satisfiable = grouper
            .group(vec![
                group("when load spikes"),
                group("during a regional outage"),
                group(UNIVERSAL_CONDITION),
            ])
            .await
            .unwrap();

        assert_eq!(satisfiable.len(), 2);
        assert_eq!(
            satisfiable[0].conditions(),
            vec!["when load spikes", UNIVERSAL_CONDITION]
        );
        assert_eq!(
            satisfiable[1].conditions(),
            vec!["during a regional outage", UNIVERSAL_CONDITION]
        );
        assert_eq!(oracle.call_count(), 1);
    }

    #[tokio::test]
    async fn malformed_partitions_fail_the_run() {
        let oracle = Arc::new(MockGroupingOracle::new().with_error(OracleError::malformed("(1,x)")));
        let grouper = ConcernGrouper::new(oracle);

        let result = grouper.group(vec![group("a"), group("b")]).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn out_of_range_partition_indices_fail_the_run() {
        let oracle = Arc::new(MockGroupingOracle::new().with_partition(vec![vec![0, 5]]));
        let grouper = ConcernGrouper::new(oracle);

        let result = grouper.group(vec![group("a"), group("b")]).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn empty_input_yields_no_groups() {
        let oracle = Arc::new(MockGroupingOracle::new());
        let grouper = ConcernGrouper::new(oracle.clone());

        let satisfiable = grouper.group(Vec::new()).await.unwrap();

        assert!(satisfiable.is_empty());
        assert_eq!(oracle.call_count(), 0);
    }
}
