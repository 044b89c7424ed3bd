//! Roster source port
//!
//! Defines where the roster comes from. The shipped adapter reads delimited
//! text files; tests use an in-memory implementation.

use draw_domain::Roster;
use thiserror::Error;

/// Errors that can occur while loading a roster
#[derive(Error, Debug)]
pub enum RosterSourceError {
    #[error("Failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("Roster is missing required column: {0}")]
    MissingColumn(String),

    #[error("Unrecognized category value {value:?} at row {row}")]
    UnrecognizedCategory { value: String, row: usize },

    #[error("Roster contains no usable rows")]
    Empty,

    #[error("Invalid roster entry: {0}")]
    InvalidEntry(String),
}

/// Source of the roster to draw from
///
/// Implementations (adapters) live in the infrastructure layer.
pub trait RosterSource {
    /// Load and validate the roster
    fn load(&self) -> Result<Roster, RosterSourceError>;
}
