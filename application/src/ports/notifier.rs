//! Draw notification port
//!
//! Phase callbacks consumed by the presentation layer to narrate a run.

use draw_domain::{DrawSummary, Roster};

/// Callback for progress updates during a draw
pub trait DrawNotifier {
    /// Called after the roster has been loaded and validated
    fn on_roster_loaded(&self, roster: &Roster);

    /// Called after the draw has completed
    fn on_draw_complete(&self, summary: &DrawSummary);
}

/// No-op notifier for when narration is not needed
pub struct NoNotifier;

impl DrawNotifier for NoNotifier {
    fn on_roster_loaded(&self, _roster: &Roster) {}
    fn on_draw_complete(&self, _summary: &DrawSummary) {}
}
