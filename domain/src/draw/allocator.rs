//! Quota-constrained random partition
//!
//! Splits a roster into two groups under fixed per-category quotas. Selection
//! is a uniform random permutation per category, driven by a single injected
//! rng so a fixed seed reproduces the whole draw.

use super::group::{Group, GroupLabel};
use super::quota::QuotaSet;
use super::result::AllocationResult;
use crate::core::error::DomainError;
use crate::core::roster::Roster;
use rand::seq::SliceRandom;
use rand::Rng;

/// Allocate the roster into two groups under the given quotas.
///
/// For each category carrying a quota, its roster members are uniformly
/// shuffled and the first `group1` picks go to group1, the next `group2`
/// picks to group2, the remainder to the unassigned pool. Members of
/// categories without a quota are never selected and land in the unassigned
/// pool as well, so the three output sets always form a closed partition of
/// the roster.
///
/// Fails before touching the rng output:
/// - [`DomainError::InvalidRoster`] if the roster is empty or contains a
///   blank name.
/// - [`DomainError::InsufficientParticipants`] if some category has fewer
///   members than its quota total.
pub fn allocate<R: Rng + ?Sized>(
    roster: &Roster,
    quotas: &QuotaSet,
    rng: &mut R,
) -> Result<AllocationResult, DomainError> {
    roster.validate()?;

    for (category, quota) in quotas.iter() {
        let available = roster.count(category);
        if available < quota.total() {
            return Err(DomainError::InsufficientParticipants {
                category,
                required: quota.total(),
                available,
            });
        }
    }

    let mut group1 = Group::new(GroupLabel::Group1);
    let mut group2 = Group::new(GroupLabel::Group2);
    let mut unassigned = Vec::new();

    // One rng drives every category, in QuotaSet's deterministic order.
    for (category, quota) in quotas.iter() {
        let mut bucket = roster.of_category(category);
        bucket.shuffle(rng);

        let mut drained = bucket.into_iter();
        group1.members.extend(drained.by_ref().take(quota.group1));
        group2.members.extend(drained.by_ref().take(quota.group2));
        unassigned.extend(drained);
    }

    // Categories with no quota are never selected.
    for person in roster.iter() {
        if quotas.get(person.category()).is_none() {
            unassigned.push(person.clone());
        }
    }

    Ok(AllocationResult::new(group1, group2, unassigned))
}
