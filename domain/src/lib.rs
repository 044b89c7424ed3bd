//! Domain layer for alliance-draw
//!
//! This crate contains the core business logic: the roster model and the
//! quota-constrained random partition (the Allocator). It has no dependencies
//! on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Draw
//!
//! A draw splits a roster into two groups. Each person carries a binary
//! [`Category`], and each category has a fixed [`Quota`] of seats per group.
//! Selection within a category is a uniform random permutation driven by an
//! injected `rand::Rng`, so a fixed seed reproduces the exact assignment.
//!
//! ## Closed partition
//!
//! Every roster member ends up in exactly one of group1, group2 or the
//! unassigned pool. Nothing is silently dropped.

pub mod core;
pub mod draw;

// Re-export commonly used types
pub use crate::core::{
    category::Category,
    error::DomainError,
    person::Person,
    roster::Roster,
};
pub use draw::{
    allocator::allocate,
    group::{Group, GroupLabel},
    quota::{Quota, QuotaSet},
    result::AllocationResult,
    summary::{CategoryBreakdown, DrawSummary},
};
