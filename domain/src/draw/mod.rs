//! Draw subdomain
//!
//! - [`quota::QuotaSet`] — per-category seat counts for the two groups
//! - [`allocator::allocate`] — the quota-constrained random partition
//! - [`result::AllocationResult`] — closed partition of the roster
//! - [`summary::DrawSummary`] — per-group/per-category counts for reporting

pub mod allocator;
pub mod group;
pub mod quota;
pub mod result;
pub mod summary;
