//! Concern - a consistent operating scenario with its chosen decisions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Decision;
use crate::domain::foundation::QualityAttribute;

/// A mutually-consistent scenario: the applicability conditions that hold in
/// it, the aggregated quality weights derived for it, and the architecture
/// decisions chosen under those weights.
///
/// A concern for which the solver found no optimal solution carries empty
/// `decisions` and `satisfaction` maps; it is never silently populated with
/// a partial answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concern {
    /// Nominal condition texts that hold in this scenario.
    pub conditions: Vec<String>,
    /// Normalized per-attribute weights (sum ≤ 100 after truncation).
    pub desired_qualities: HashMap<QualityAttribute, u32>,
    /// One decision per pattern category, in catalog category order.
    pub decisions: Vec<Decision>,
    /// Accumulated weighted contributions across all chosen rows.
    pub satisfaction: HashMap<QualityAttribute, i64>,
}

impl Concern {
    /// Creates a concern with no decisions yet.
    pub fn new(
        conditions: Vec<String>,
        desired_qualities: HashMap<QualityAttribute, u32>,
    ) -> Self {
        Self {
            conditions,
            desired_qualities,
            decisions: Vec::new(),
            satisfaction: HashMap::new(),
        }
    }

    /// Attaches solved decisions and their satisfaction breakdown.
    pub fn with_decisions(
        mut self,
        decisions: Vec<Decision>,
        satisfaction: HashMap<QualityAttribute, i64>,
    ) -> Self {
        self.decisions = decisions;
        self.satisfaction = satisfaction;
        self
    }

    /// Returns true when the solver produced a decision set for this concern.
    pub fn is_decided(&self) -> bool {
        !self.decisions.is_empty()
    }

    /// Total objective score across all decisions.
    pub fn total_score(&self) -> i64 {
        self.decisions.iter().map(|d| d.score).sum()
    }
}

/// The result of one pipeline run: every evaluated concern plus the run
/// timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub concerns: Vec<Concern>,
    pub generated_at: DateTime<Utc>,
}

impl RunReport {
    /// Creates a report stamped with the current time.
    pub fn new(concerns: Vec<Concern>) -> Self {
        Self {
            concerns,
            generated_at: Utc::now(),
        }
    }
}
