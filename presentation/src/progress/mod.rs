//! Console notifier
//!
//! Narrates a draw run for non-quiet invocations.

use colored::Colorize;
use draw_application::DrawNotifier;
use draw_domain::{Category, DrawSummary, Roster};

/// Prints phase markers to stdout as the draw progresses
pub struct ConsoleNotifier;

impl DrawNotifier for ConsoleNotifier {
    fn on_roster_loaded(&self, roster: &Roster) {
        println!(
            "{} {} people loaded (A: {}, B: {})",
            "[ok]".green().bold(),
            roster.len(),
            roster.count(Category::A),
            roster.count(Category::B),
        );
    }

    fn on_draw_complete(&self, summary: &DrawSummary) {
        println!(
            "{} draw complete: {} + {} assigned, {} unassigned",
            "[ok]".green().bold(),
            summary.group1_total,
            summary.group2_total,
            summary.unassigned_total,
        );
    }
}
