//! Condition groups and satisfiable groups.

use serde::{Deserialize, Serialize};

use super::Requirement;

/// Condition text treated as universally applicable: a group carrying it may
/// join every satisfiable group, and grouping is skipped entirely when no
/// other condition exists.
pub const UNIVERSAL_CONDITION: &str = "applies under all circumstances";

/// A set of requirements whose applicability conditions were judged
/// semantically equivalent.
///
/// The nominal condition is the condition text of the first requirement seen
/// for the equivalence class; later members keep their own text but are
/// represented by the nominal one from then on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionGroup {
    nominal_condition: String,
    requirements: Vec<Requirement>,
}

impl ConditionGroup {
    /// Starts a new group with its founding requirement.
    pub fn new(first: Requirement) -> Self {
        Self {
            nominal_condition: first.condition.clone(),
            requirements: vec![first],
        }
    }

    /// Appends a requirement judged equivalent to this group's condition.
    pub fn push(&mut self, requirement: Requirement) {
        self.requirements.push(requirement);
    }

    /// Returns the canonical condition text for this group.
    pub fn nominal_condition(&self) -> &str {
        &self.nominal_condition
    }

    /// Returns the member requirements in arrival order.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Returns true if this group's condition is the universal one.
    pub fn is_universal(&self) -> bool {
        self.nominal_condition.trim().eq_ignore_ascii_case(UNIVERSAL_CONDITION)
    }
}

/// A set of condition groups judged mutually non-contradictory: one
/// consistent operating scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatisfiableGroup {
    pub groups: Vec<ConditionGroup>,
}

impl SatisfiableGroup {
    /// Creates a satisfiable group from its member condition groups.
    pub fn new(groups: Vec<ConditionGroup>) -> Self {
        Self { groups }
    }

    /// Returns the nominal condition texts of the member groups.
    pub fn conditions(&self) -> Vec<String> {
        self.groups
            .iter()
            .map(|g| g.nominal_condition().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirement(condition: &str) -> Requirement {
        Requirement::new(condition, vec!["Performance".into()])
    }

    #[test]
    fn nominal_condition_is_first_requirements_text() {
        let mut group = ConditionGroup::new(requirement("when load spikes"));
        group.push(requirement("under bursty load"));

        assert_eq!(group.nominal_condition(), "when load spikes");
        assert_eq!(group.requirements().len(), 2);
    }

    #[test]
    fn universal_condition_is_case_insensitive() {
        let group = ConditionGroup::new(requirement("Applies Under All Circumstances"));
        assert!(group.is_universal());

        let other = ConditionGroup::new(requirement("when load spikes"));
        assert!(!other.is_universal());
    }

    #[test]
    fn satisfiable_group_lists_nominal_conditions() {
        let group = SatisfiableGroup::new(vec![
            ConditionGroup::new(requirement("when load spikes")),
            ConditionGroup::new(requirement("during a regional outage")),
        ]);

        assert_eq!(
            group.conditions(),
            vec!["when load spikes", "during a regional outage"]
        );
    }
}
