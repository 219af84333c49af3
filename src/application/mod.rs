//! Application layer - Pipeline orchestration.
//!
//! This layer wires the domain services and ports into the end-to-end
//! concern construction and decision selection flow. The pipeline is a
//! strict sequence (consolidate, group, then per concern aggregate and
//! optimize), so there is no shared mutable state between stages.

mod consolidator;
mod grouper;
mod pipeline;

pub use consolidator::ConditionConsolidator;
pub use grouper::ConcernGrouper;
pub use pipeline::{DecisionPipeline, PipelineError};
