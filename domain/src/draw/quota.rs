//! Quota value objects

use crate::core::category::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Seats reserved for one category: how many of its members go to each group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
    pub group1: usize,
    pub group2: usize,
}

impl Quota {
    pub fn new(group1: usize, group2: usize) -> Self {
        Self { group1, group2 }
    }

    /// Total seats this category fills across both groups
    pub fn total(&self) -> usize {
        self.group1 + self.group2
    }
}

/// The full quota configuration: category -> seats per group.
///
/// Backed by a `BTreeMap` so iteration order is deterministic, which keeps
/// draws reproducible under a fixed rng seed. A category may be absent, in
/// which case its roster members are never selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaSet {
    quotas: BTreeMap<Category, Quota>,
}

impl QuotaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion
    pub fn with(mut self, category: Category, quota: Quota) -> Self {
        self.quotas.insert(category, quota);
        self
    }

    pub fn get(&self, category: Category) -> Option<Quota> {
        self.quotas.get(&category).copied()
    }

    /// Categories with a quota, in deterministic (canonical) order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Quota)> + '_ {
        self.quotas.iter().map(|(c, q)| (*c, *q))
    }

    pub fn is_empty(&self) -> bool {
        self.quotas.is_empty()
    }

    /// Expected size of group1 across all categories
    pub fn group1_total(&self) -> usize {
        self.quotas.values().map(|q| q.group1).sum()
    }

    /// Expected size of group2 across all categories
    pub fn group2_total(&self) -> usize {
        self.quotas.values().map(|q| q.group2).sum()
    }

    /// The quotas of the observed deployment: 27+27 for category A,
    /// 51+52 for category B.
    pub fn observed_default() -> Self {
        Self::new()
            .with(Category::A, Quota::new(27, 27))
            .with(Category::B, Quota::new(51, 52))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_total() {
        assert_eq!(Quota::new(27, 27).total(), 54);
        assert_eq!(Quota::new(51, 52).total(), 103);
        assert_eq!(Quota::default().total(), 0);
    }

    #[test]
    fn test_quota_set_group_totals() {
        let quotas = QuotaSet::observed_default();
        assert_eq!(quotas.group1_total(), 78);
        assert_eq!(quotas.group2_total(), 79);
    }

    #[test]
    fn test_quota_set_iteration_is_canonical_order() {
        // Inserted B first; iteration must still yield A before B.
        let quotas = QuotaSet::new()
            .with(Category::B, Quota::new(1, 2))
            .with(Category::A, Quota::new(3, 4));
        let order: Vec<Category> = quotas.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec![Category::A, Category::B]);
    }

    #[test]
    fn test_quota_set_missing_category() {
        let quotas = QuotaSet::new().with(Category::A, Quota::new(1, 1));
        assert!(quotas.get(Category::B).is_none());
    }
}
