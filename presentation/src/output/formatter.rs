//! Output formatter trait

use draw_application::DrawOutcome;

/// Trait for formatting draw outcomes
pub trait OutputFormatter {
    /// Format the complete outcome with listings
    fn format(&self, outcome: &DrawOutcome) -> String;

    /// Format as JSON
    fn format_json(&self, outcome: &DrawOutcome) -> String;

    /// Format the counts summary only
    fn format_summary_only(&self, outcome: &DrawOutcome) -> String;
}
