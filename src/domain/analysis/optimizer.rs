//! Optimizer - per-category pattern selection and satisfaction breakdown.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::program::SelectionProgram;
use crate::domain::catalog::{ArchitecturePattern, ScoringMatrix};
use crate::domain::concern::Decision;
use crate::domain::foundation::QualityAttribute;

/// Which solving strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverStrategy {
    /// Solve the joint 0-1 integer program exactly.
    #[default]
    Exact,
    /// Keep the best-scoring row per category, first row winning ties.
    Greedy,
}

/// Result of one optimization call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimizationOutcome {
    /// One decision per category plus the accumulated satisfaction map.
    Solved {
        decisions: Vec<Decision>,
        satisfaction: HashMap<QualityAttribute, i64>,
    },
    /// The program was infeasible; this is a terminal outcome for the
    /// concern, not a retryable condition.
    NoOptimalSolution,
}

impl OptimizationOutcome {
    /// Returns true when a decision set was produced.
    pub fn is_solved(&self) -> bool {
        matches!(self, OptimizationOutcome::Solved { .. })
    }
}

/// Objective value of one row: the weighted sum of its scores over the
/// desired attributes only. Attributes absent from the row score 0;
/// attributes outside `desired` never contribute even when weighted.
pub(crate) fn row_score(
    row: &ArchitecturePattern,
    desired: &HashSet<QualityAttribute>,
    weights: &HashMap<QualityAttribute, u32>,
) -> i64 {
    desired
        .iter()
        .map(|attr| {
            let weight = weights.get(attr).copied().unwrap_or(0);
            i64::from(row.score(attr)) * i64::from(weight)
        })
        .sum()
}

/// Solves the per-category selection problem and recomputes the reported
/// satisfaction breakdown for the chosen rows.
pub struct Optimizer;

impl Optimizer {
    /// Selects exactly one pattern per category under the given strategy.
    ///
    /// The satisfaction breakdown intentionally spans *every* attribute a
    /// chosen row defines (not just the desired set), each multiplied by its
    /// weight or 0, so the report may surface attributes the objective never
    /// looked at.
    pub fn optimize(
        strategy: SolverStrategy,
        desired: &HashSet<QualityAttribute>,
        matrix: &ScoringMatrix,
        weights: &HashMap<QualityAttribute, u32>,
    ) -> OptimizationOutcome {
        let chosen: Vec<&ArchitecturePattern> = match strategy {
            SolverStrategy::Exact => {
                let program = SelectionProgram::formulate(matrix, desired, weights);
                match program.solve() {
                    Some(solution) => solution
                        .chosen
                        .iter()
                        .map(|&index| &matrix.rows()[index])
                        .collect(),
                    None => return OptimizationOutcome::NoOptimalSolution,
                }
            }
            SolverStrategy::Greedy => Self::greedy_selection(matrix, desired, weights),
        };

        Self::build_outcome(&chosen, desired, weights)
    }

    /// Per-category scan keeping the row with the strictly greatest score,
    /// so ties go to the first row in catalog order. Always produces a
    /// decision for every category.
    fn greedy_selection<'a>(
        matrix: &'a ScoringMatrix,
        desired: &HashSet<QualityAttribute>,
        weights: &HashMap<QualityAttribute, u32>,
    ) -> Vec<&'a ArchitecturePattern> {
        let mut chosen = Vec::new();

        for category in matrix.categories() {
            let mut best: Option<(&ArchitecturePattern, i64)> = None;

            for row in matrix.rows_by_category(category) {
                let score = row_score(row, desired, weights);
                match best {
                    Some((_, best_score)) if score <= best_score => {}
                    _ => best = Some((row, score)),
                }
            }

            if let Some((row, _)) = best {
                chosen.push(row);
            }
        }

        chosen
    }

    fn build_outcome(
        chosen: &[&ArchitecturePattern],
        desired: &HashSet<QualityAttribute>,
        weights: &HashMap<QualityAttribute, u32>,
    ) -> OptimizationOutcome {
        let mut satisfaction: HashMap<QualityAttribute, i64> = HashMap::new();
        let mut decisions = Vec::with_capacity(chosen.len());

        for row in chosen {
            let mut decision =
                Decision::new(&row.category, &row.name, row_score(row, desired, weights));

            let mut contributions: Vec<(QualityAttribute, i64)> = row
                .scores
                .iter()
                .map(|(attr, &score)| {
                    let weight = weights.get(attr).copied().unwrap_or(0);
                    (attr.clone(), i64::from(score) * i64::from(weight))
                })
                .collect();
            contributions.sort_by(|a, b| a.0.cmp(&b.0));

            for (attr, contribution) in contributions {
                *satisfaction.entry(attr.clone()).or_insert(0) += contribution;
                if contribution > 0 {
                    decision.satisfied.push((attr, contribution));
                } else if contribution < 0 {
                    decision.unsatisfied.push((attr, contribution));
                }
            }

            decisions.push(decision);
        }

        OptimizationOutcome::Solved {
            decisions,
            satisfaction,
        }
    }
}
