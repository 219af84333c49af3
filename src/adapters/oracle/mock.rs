//! Mock oracles for testing.
//!
//! Deterministic implementations of the oracle ports, allowing the
//! consolidation and grouping stages to run without a live language-model
//! backend. Responses are queued and consumed in order; when the queue is
//! empty a configurable default applies. Calls are recorded for
//! verification.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{EquivalenceOracle, GroupingOracle, OracleError};

/// Mock equivalence oracle with queued verdicts and call tracking.
#[derive(Debug, Clone, Default)]
pub struct MockEquivalenceOracle {
    verdicts: Arc<Mutex<VecDeque<Result<bool, OracleError>>>>,
    default_verdict: bool,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockEquivalenceOracle {
    /// Creates a mock that answers "not equivalent" by default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock that always answers with the given verdict.
    pub fn always(verdict: bool) -> Self {
        Self {
            default_verdict: verdict,
            ..Self::default()
        }
    }

    /// Queues one verdict.
    pub fn with_verdict(self, verdict: bool) -> Self {
        self.verdicts.lock().unwrap().push_back(Ok(verdict));
        self
    }

    /// Queues one error.
    pub fn with_error(self, error: OracleError) -> Self {
        self.verdicts.lock().unwrap().push_back(Err(error));
        self
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The `(a, b)` pairs asked so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EquivalenceOracle for MockEquivalenceOracle {
    async fn is_equivalent(&self, a: &str, b: &str) -> Result<bool, OracleError> {
        self.calls
            .lock()
            .unwrap()
            .push((a.to_string(), b.to_string()));

        match self.verdicts.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(self.default_verdict),
        }
    }
}

/// Mock grouping oracle with queued partitions and call tracking.
///
/// The default reply (empty queue) is the identity partition: every
/// condition in its own group.
#[derive(Debug, Clone, Default)]
pub struct MockGroupingOracle {
    replies: Arc<Mutex<VecDeque<Result<Vec<Vec<usize>>, OracleError>>>>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockGroupingOracle {
    /// Creates a mock that answers with the identity partition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one partition reply (zero-based indices).
    pub fn with_partition(self, groups: Vec<Vec<usize>>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(groups));
        self
    }

    /// Queues one error.
    pub fn with_error(self, error: OracleError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl GroupingOracle for MockGroupingOracle {
    async fn partition(&self, conditions: &[String]) -> Result<Vec<Vec<usize>>, OracleError> {
        self.calls.lock().unwrap().push(conditions.to_vec());

        match self.replies.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok((0..conditions.len()).map(|i| vec![i]).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn queued_verdicts_are_consumed_in_order() {
        let oracle = MockEquivalenceOracle::new()
            .with_verdict(true)
            .with_verdict(false);

        assert!(oracle.is_equivalent("a", "b").await.unwrap());
        assert!(!oracle.is_equivalent("a", "c").await.unwrap());
        // Queue exhausted: default verdict applies.
        assert!(!oracle.is_equivalent("a", "d").await.unwrap());
        assert_eq!(oracle.call_count(), 3);
    }

    #[tokio::test]
    async fn always_equivalent_mock_never_runs_dry() {
        let oracle = MockEquivalenceOracle::always(true);

        for _ in 0..5 {
            assert!(oracle.is_equivalent("x", "y").await.unwrap());
        }
    }

    #[tokio::test]
    async fn grouping_mock_defaults_to_identity_partition() {
        let oracle = MockGroupingOracle::new();
        let conditions = vec!["a".to_string(), "b".to_string()];

        let partition = oracle.partition(&conditions).await.unwrap();
        assert_eq!(partition, vec![vec![0], vec![1]]);
        assert_eq!(oracle.call_count(), 1);
    }

    #[tokio::test]
    async fn grouping_mock_replays_queued_errors() {
        let oracle = MockGroupingOracle::new().with_error(OracleError::malformed("(1,x)"));

        let err = oracle.partition(&["a".to_string()]).await.unwrap_err();
        assert!(matches!(err, OracleError::MalformedResponse(_)));
    }
}
