//! Application layer for alliance-draw
//!
//! This crate contains use cases and port definitions. It depends only on
//! the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    notifier::{DrawNotifier, NoNotifier},
    result_exporter::{ExportError, ResultExporter},
    roster_source::{RosterSource, RosterSourceError},
};
pub use use_cases::run_draw::{DrawOutcome, RunDrawError, RunDrawInput, RunDrawUseCase};
