//! Decision Pipeline - end-to-end concern construction and selection.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{EngineConfig, QualityWeightsMode, RunMode};
use crate::domain::analysis::{OptimizationOutcome, Optimizer, WeightAggregator};
use crate::domain::catalog::ScoringMatrix;
use crate::domain::concern::{Concern, RunReport};
use crate::domain::foundation::QualityAttribute;
use crate::domain::requirements::Requirement;
use crate::ports::{EquivalenceOracle, GroupingOracle, OracleError};

use super::{ConcernGrouper, ConditionConsolidator};

/// Errors that abort a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// An oracle call failed or returned an uninterpretable reply.
    #[error("oracle call failed: {0}")]
    Oracle(#[from] OracleError),
}

/// Orchestrates the decision flow: consolidate conditions, derive concerns,
/// aggregate weights, and optimize per concern.
///
/// The scoring matrix is an explicit constructor dependency; there is no
/// process-wide catalog. The two operating modes are dispatched on
/// [`RunMode`], keeping the paths independently testable.
pub struct DecisionPipeline {
    matrix: ScoringMatrix,
    settings: EngineConfig,
    consolidator: ConditionConsolidator,
    grouper: ConcernGrouper,
}

impl DecisionPipeline {
    /// Creates a pipeline over the given catalog, settings, and oracles.
    pub fn new(
        matrix: ScoringMatrix,
        settings: EngineConfig,
        equivalence: Arc<dyn EquivalenceOracle>,
        grouping: Arc<dyn GroupingOracle>,
    ) -> Self {
        Self {
            matrix,
            settings,
            consolidator: ConditionConsolidator::new(equivalence),
            grouper: ConcernGrouper::new(grouping),
        }
    }

    /// Runs the pipeline and returns the evaluated concerns.
    ///
    /// The run either yields concerns with populated decisions or concerns
    /// explicitly marked undecided; it never silently returns a partial
    /// decision set.
    pub async fn run(&self, requirements: &[Requirement]) -> Result<RunReport, PipelineError> {
        match self.settings.run_mode {
            RunMode::Direct => Ok(self.run_direct()),
            RunMode::FullPipeline => self.run_full(requirements).await,
        }
    }

    /// Direct mode: one optimization pass against the provided weights,
    /// with no consolidation or grouping. The emitted concern carries no
    /// conditions.
    fn run_direct(&self) -> RunReport {
        info!("running direct optimization against provided weights");
        let provided = to_attribute_weights(&self.settings.provided_weights);
        let concern = self.evaluate(Vec::new(), provided);
        RunReport::new(vec![concern])
    }

    /// Full pipeline: consolidate, group, then evaluate one concern per
    /// satisfiable group plus a global concern over the union of all
    /// conditions.
    async fn run_full(&self, requirements: &[Requirement]) -> Result<RunReport, PipelineError> {
        let groups = self.consolidator.consolidate(requirements).await?;
        info!(
            requirements = requirements.len(),
            groups = groups.len(),
            "consolidated requirements into condition groups"
        );

        let satisfiable = self.grouper.group(groups).await?;
        info!(concerns = satisfiable.len(), "derived satisfiable groups");

        let mut concerns = Vec::with_capacity(satisfiable.len() + 1);
        for group in &satisfiable {
            let weights = WeightAggregator::concern_weights(&group.groups);
            concerns.push(self.evaluate(group.conditions(), weights));
        }

        // One extra global concern across every condition seen.
        let mut global_conditions = Vec::new();
        for group in &satisfiable {
            for condition in group.conditions() {
                if !global_conditions.contains(&condition) {
                    global_conditions.push(condition);
                }
            }
        }
        let global_weights = self.global_weights(requirements);
        concerns.push(self.evaluate(global_conditions, global_weights));

        Ok(RunReport::new(concerns))
    }

    /// Run-wide weights for the global concern, per the configured mode.
    fn global_weights(&self, requirements: &[Requirement]) -> HashMap<QualityAttribute, u32> {
        match self.settings.weights_mode {
            QualityWeightsMode::EquallyImportant | QualityWeightsMode::AllRequired => {
                WeightAggregator::equal_weights(&self.matrix)
            }
            QualityWeightsMode::Inferred => WeightAggregator::inferred_weights(requirements),
            QualityWeightsMode::Provided => {
                to_attribute_weights(&self.settings.provided_weights)
            }
        }
    }

    /// Normalizes the raw weights, runs the optimizer, and assembles the
    /// concern.
    fn evaluate(
        &self,
        conditions: Vec<String>,
        raw_weights: HashMap<QualityAttribute, u32>,
    ) -> Concern {
        let desired: HashSet<QualityAttribute> = raw_weights.keys().cloned().collect();
        let weights = WeightAggregator::normalize(&raw_weights);

        debug!(
            conditions = conditions.len(),
            attributes = desired.len(),
            "optimizing concern"
        );

        let outcome = Optimizer::optimize(self.settings.solver, &desired, &self.matrix, &weights);
        let concern = Concern::new(conditions, weights);

        match outcome {
            OptimizationOutcome::Solved {
                decisions,
                satisfaction,
            } => concern.with_decisions(decisions, satisfaction),
            OptimizationOutcome::NoOptimalSolution => {
                warn!("no optimal solution for concern; reporting it undecided");
                concern
            }
        }
    }
}

fn to_attribute_weights(raw: &HashMap<String, u32>) -> HashMap<QualityAttribute, u32> {
    raw.iter()
        .map(|(name, &weight)| (QualityAttribute::new(name.clone()), weight))
        .collect()
}
