//! Presentation layer for alliance-draw
//!
//! CLI argument definitions, console formatting of draw outcomes and the
//! console notifier.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, ExportFormat, OutputFormat};
pub use output::console::{ConsoleFormatter, DisplayOptions};
pub use output::formatter::OutputFormatter;
pub use progress::ConsoleNotifier;
