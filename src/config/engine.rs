//! Engine configuration - weight modes, run mode, and solver strategy.

use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::analysis::{QualityWeightsMode, SolverStrategy};

use super::error::ValidationError;

/// How the pipeline is orchestrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Skip consolidation and grouping; optimize once against the provided
    /// weights.
    Direct,
    /// Consolidate conditions, derive concerns, optimize per concern.
    #[default]
    FullPipeline,
}

/// Experiment settings for one pipeline run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// How run-wide quality weights are derived.
    #[serde(default)]
    pub weights_mode: QualityWeightsMode,

    /// Caller-supplied weights, used in provided mode and in direct runs.
    #[serde(default)]
    pub provided_weights: HashMap<String, u32>,

    /// Full pipeline or direct optimization.
    #[serde(default)]
    pub run_mode: RunMode,

    /// Exact integer program or greedy heuristic.
    #[serde(default)]
    pub solver: SolverStrategy,
}

impl EngineConfig {
    /// Validate engine settings.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let needs_provided = self.run_mode == RunMode::Direct
            || self.weights_mode == QualityWeightsMode::Provided;
        if needs_provided && self.provided_weights.is_empty() {
            return Err(ValidationError::MissingProvidedWeights);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_run_the_full_pipeline_with_inferred_weights() {
        let config = EngineConfig::default();
        assert_eq!(config.run_mode, RunMode::FullPipeline);
        assert_eq!(config.weights_mode, QualityWeightsMode::Inferred);
        assert_eq!(config.solver, SolverStrategy::Exact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn direct_mode_requires_provided_weights() {
        let config = EngineConfig {
            run_mode: RunMode::Direct,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            run_mode: RunMode::Direct,
            provided_weights: HashMap::from([("Performance".to_string(), 70)]),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn provided_weights_mode_requires_a_map() {
        let config = EngineConfig {
            weights_mode: QualityWeightsMode::Provided,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn modes_deserialize_from_snake_case() {
        let mode: RunMode = serde_json::from_str("\"direct\"").unwrap();
        assert_eq!(mode, RunMode::Direct);

        let mode: QualityWeightsMode = serde_json::from_str("\"equally_important\"").unwrap();
        assert_eq!(mode, QualityWeightsMode::EquallyImportant);

        let solver: SolverStrategy = serde_json::from_str("\"greedy\"").unwrap();
        assert_eq!(solver, SolverStrategy::Greedy);
    }
}
