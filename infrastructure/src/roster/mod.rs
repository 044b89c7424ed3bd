//! Roster input adapters

pub mod delimited;
