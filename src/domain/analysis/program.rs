//! 0-1 integer program for per-category pattern selection.

use std::collections::HashMap;
use std::collections::HashSet;

use super::optimizer::row_score;
use crate::domain::catalog::ScoringMatrix;
use crate::domain::foundation::QualityAttribute;

/// One binary decision variable per matrix row, an exactly-one constraint per
/// category, and an objective that maximizes the weighted row scores jointly
/// across all categories.
///
/// The joint formulation is kept explicit even though categories do not
/// interact in the objective; the solver works on the whole program, and the
/// equivalence with independent per-category selection is a verified property
/// of the model, not an assumption baked into the code.
#[derive(Debug, Clone)]
pub struct SelectionProgram {
    /// Objective coefficient of each variable (row), in matrix row order.
    objective: Vec<i64>,
    /// Exactly-one constraints: `(category, variable indices)`.
    constraints: Vec<(String, Vec<usize>)>,
}

/// An optimal assignment of the program's binary variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSolution {
    /// Chosen variable (row) indices, one per constraint, in constraint order.
    pub chosen: Vec<usize>,
    /// Objective value of the assignment.
    pub objective: i64,
}

impl SelectionProgram {
    /// Builds a program from raw parts.
    pub fn new(objective: Vec<i64>, constraints: Vec<(String, Vec<usize>)>) -> Self {
        Self {
            objective,
            constraints,
        }
    }

    /// Formulates the selection program for a matrix under the given desired
    /// attributes and weights.
    pub fn formulate(
        matrix: &ScoringMatrix,
        desired: &HashSet<QualityAttribute>,
        weights: &HashMap<QualityAttribute, u32>,
    ) -> Self {
        let objective = matrix
            .rows()
            .iter()
            .map(|row| row_score(row, desired, weights))
            .collect();

        let constraints = matrix
            .categories()
            .into_iter()
            .map(|category| {
                let variables = matrix
                    .rows()
                    .iter()
                    .enumerate()
                    .filter(|(_, row)| row.category == category)
                    .map(|(index, _)| index)
                    .collect();
                (category.to_string(), variables)
            })
            .collect();

        Self {
            objective,
            constraints,
        }
    }

    /// Solves the program exactly via depth-first branch-and-bound over the
    /// constraint blocks, pruning with an optimistic bound on the remaining
    /// blocks.
    ///
    /// Returns `None` when the program is infeasible (a constraint with no
    /// variables). Among equally optimal assignments the first one found in
    /// variable order is kept, so the result is deterministic.
    pub fn solve(&self) -> Option<ProgramSolution> {
        if self.constraints.iter().any(|(_, vars)| vars.is_empty()) {
            return None;
        }

        // Optimistic bound: the best coefficient inside each remaining block.
        let block_best: Vec<i64> = self
            .constraints
            .iter()
            .map(|(_, vars)| {
                vars.iter()
                    .map(|&v| self.objective[v])
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut suffix_bound = vec![0i64; self.constraints.len() + 1];
        for index in (0..self.constraints.len()).rev() {
            suffix_bound[index] = suffix_bound[index + 1] + block_best[index];
        }

        let mut best: Option<ProgramSolution> = None;
        let mut partial = Vec::with_capacity(self.constraints.len());
        self.branch(0, 0, &mut partial, &suffix_bound, &mut best);
        best
    }

    fn branch(
        &self,
        block: usize,
        current: i64,
        partial: &mut Vec<usize>,
        suffix_bound: &[i64],
        best: &mut Option<ProgramSolution>,
    ) {
        if let Some(incumbent) = best {
            if current + suffix_bound[block] <= incumbent.objective {
                return;
            }
        }

        if block == self.constraints.len() {
            *best = Some(ProgramSolution {
                chosen: partial.clone(),
                objective: current,
            });
            return;
        }

        for &variable in &self.constraints[block].1 {
            partial.push(variable);
            self.branch(
                block + 1,
                current + self.objective[variable],
                partial,
                suffix_bound,
                best,
            );
            partial.pop();
        }
    }
}
