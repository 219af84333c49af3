//! Requirements module - Requirements and consolidated condition groups.
//!
//! Requirements arrive pre-parsed from an external collaborator and are
//! read-only to the core. Condition groups and satisfiable groups are built
//! once per run by the consolidation and grouping stages.

mod condition_group;
mod requirement;

pub use condition_group::{ConditionGroup, SatisfiableGroup, UNIVERSAL_CONDITION};
pub use requirement::Requirement;
