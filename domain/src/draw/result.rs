//! Allocation result

use super::group::{Group, GroupLabel};
use crate::core::person::Person;
use serde::{Deserialize, Serialize};

/// The outcome of one draw: a closed partition of the roster.
///
/// Each roster member appears in exactly one of `group1`, `group2` or
/// `unassigned`. The result is immutable; a re-run produces a fresh,
/// independently drawn value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub group1: Group,
    pub group2: Group,
    pub unassigned: Vec<Person>,
}

impl AllocationResult {
    pub fn new(group1: Group, group2: Group, unassigned: Vec<Person>) -> Self {
        Self {
            group1,
            group2,
            unassigned,
        }
    }

    /// Total number of people across all three output sets
    pub fn total(&self) -> usize {
        self.group1.len() + self.group2.len() + self.unassigned.len()
    }

    /// Iterate over assigned people with their group label
    pub fn assignments(&self) -> impl Iterator<Item = (&Person, GroupLabel)> {
        self.group1
            .members
            .iter()
            .map(|p| (p, GroupLabel::Group1))
            .chain(self.group2.members.iter().map(|p| (p, GroupLabel::Group2)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::category::Category;

    #[test]
    fn test_assignments_cover_both_groups() {
        let mut group1 = Group::new(GroupLabel::Group1);
        group1.members.push(Person::new("Ana", Category::B).unwrap());
        let mut group2 = Group::new(GroupLabel::Group2);
        group2.members.push(Person::new("Luis", Category::A).unwrap());

        let result = AllocationResult::new(group1, group2, vec![]);
        assert_eq!(result.total(), 2);

        let pairs: Vec<(String, GroupLabel)> = result
            .assignments()
            .map(|(p, label)| (p.full_name().to_string(), label))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Ana".to_string(), GroupLabel::Group1),
                ("Luis".to_string(), GroupLabel::Group2),
            ]
        );
    }
}
