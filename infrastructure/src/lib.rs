//! Infrastructure layer for alliance-draw
//!
//! Adapters for the application ports: layered TOML configuration, the
//! delimited-text roster reader and the CSV/JSON exporters.

pub mod config;
pub mod export;
pub mod roster;

// Re-export commonly used types
pub use config::{
    file_config::{ConfigValidationError, FileConfig, FileOutputConfig, FileRosterConfig},
    loader::ConfigLoader,
};
pub use export::{csv::CsvExporter, json::JsonExporter};
pub use roster::delimited::DelimitedRosterSource;
