//! Draw summary
//!
//! The per-group/per-category counts the reporting surface renders (the
//! original deployment fed these numbers to its bar and pie charts).

use super::result::AllocationResult;
use crate::core::category::Category;
use crate::core::roster::Roster;
use serde::{Deserialize, Serialize};

/// Counts for one category across the output sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub roster: usize,
    pub group1: usize,
    pub group2: usize,
    pub unassigned: usize,
}

/// Aggregate counts for one draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSummary {
    pub roster_total: usize,
    pub group1_total: usize,
    pub group2_total: usize,
    pub unassigned_total: usize,
    pub category_a: CategoryBreakdown,
    pub category_b: CategoryBreakdown,
}

impl DrawSummary {
    pub fn from_result(roster: &Roster, result: &AllocationResult) -> Self {
        let breakdown = |category: Category| CategoryBreakdown {
            roster: roster.count(category),
            group1: result.group1.count(category),
            group2: result.group2.count(category),
            unassigned: result
                .unassigned
                .iter()
                .filter(|p| p.category() == category)
                .count(),
        };

        Self {
            roster_total: roster.len(),
            group1_total: result.group1.len(),
            group2_total: result.group2.len(),
            unassigned_total: result.unassigned.len(),
            category_a: breakdown(Category::A),
            category_b: breakdown(Category::B),
        }
    }

    pub fn breakdown(&self, category: Category) -> CategoryBreakdown {
        match category {
            Category::A => self.category_a,
            Category::B => self.category_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::person::Person;
    use crate::draw::group::{Group, GroupLabel};

    #[test]
    fn test_summary_counts() {
        let roster = Roster::new(vec![
            Person::new("Ana", Category::B).unwrap(),
            Person::new("Luis", Category::A).unwrap(),
            Person::new("Carla", Category::B).unwrap(),
        ]);

        let mut group1 = Group::new(GroupLabel::Group1);
        group1.members.push(roster.people()[0].clone());
        let mut group2 = Group::new(GroupLabel::Group2);
        group2.members.push(roster.people()[1].clone());
        let unassigned = vec![roster.people()[2].clone()];

        let result = AllocationResult::new(group1, group2, unassigned);
        let summary = DrawSummary::from_result(&roster, &result);

        assert_eq!(summary.roster_total, 3);
        assert_eq!(summary.group1_total, 1);
        assert_eq!(summary.group2_total, 1);
        assert_eq!(summary.unassigned_total, 1);
        assert_eq!(summary.category_a.group2, 1);
        assert_eq!(summary.category_b.group1, 1);
        assert_eq!(summary.category_b.unassigned, 1);
        assert_eq!(summary.breakdown(Category::B).roster, 2);
    }
}
