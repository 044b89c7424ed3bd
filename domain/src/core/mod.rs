//! Core domain concepts shared across the draw subdomain.
//!
//! - [`category::Category`] — the binary attribute quotas are computed over
//! - [`person::Person`] — a validated roster entry
//! - [`roster::Roster`] — the ordered input list of people
//! - [`error::DomainError`] — domain-level errors

pub mod category;
pub mod error;
pub mod person;
pub mod roster;
