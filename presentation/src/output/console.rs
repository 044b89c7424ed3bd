//! Console output formatter for draw outcomes

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use draw_application::DrawOutcome;
use draw_domain::{Category, CategoryBreakdown, Group};

/// Human-facing display names for the two groups
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub group1_name: String,
    pub group2_name: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            group1_name: "Group 1".to_string(),
            group2_name: "Group 2".to_string(),
        }
    }
}

/// Formats draw outcomes for console display
pub struct ConsoleFormatter {
    options: DisplayOptions,
}

impl ConsoleFormatter {
    pub fn new(options: DisplayOptions) -> Self {
        Self { options }
    }

    /// Format the complete outcome: totals, both listings, distribution
    pub fn format(&self, outcome: &DrawOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Draw Results"));
        output.push('\n');

        output.push_str(&self.format_totals(outcome));

        output.push_str(&Self::section_header(&format!(
            "{} ({} members)",
            self.options.group1_name,
            outcome.result.group1.len()
        )));
        output.push_str(&Self::member_listing(&outcome.result.group1));

        output.push_str(&Self::section_header(&format!(
            "{} ({} members)",
            self.options.group2_name,
            outcome.result.group2.len()
        )));
        output.push_str(&Self::member_listing(&outcome.result.group2));

        if !outcome.result.unassigned.is_empty() {
            output.push_str(&Self::section_header(&format!(
                "Unassigned ({} members)",
                outcome.result.unassigned.len()
            )));
            for person in &outcome.result.unassigned {
                output.push_str(&format!("  - {}\n", person));
            }
        }

        output.push_str(&self.format_distribution(outcome));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(&self, outcome: &DrawOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the counts summary only
    pub fn format_summary_only(&self, outcome: &DrawOutcome) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n\n", "=== Draw Summary ===".cyan().bold()));
        output.push_str(&self.format_totals(outcome));
        output.push_str(&self.format_distribution(outcome));
        output
    }

    fn format_totals(&self, outcome: &DrawOutcome) -> String {
        let summary = &outcome.summary;
        format!(
            "{} {}   (A: {}, B: {})\n{} {}\n\n",
            "Roster:".cyan().bold(),
            summary.roster_total,
            summary.category_a.roster,
            summary.category_b.roster,
            "Drawn at:".cyan().bold(),
            outcome.drawn_at.format("%Y-%m-%d %H:%M:%S UTC"),
        )
    }

    fn member_listing(group: &Group) -> String {
        let mut out = String::new();
        for person in &group.members {
            out.push_str(&format!("  - {}\n", person));
        }
        out
    }

    /// Per-category count bars, the console stand-in for the original charts
    fn format_distribution(&self, outcome: &DrawOutcome) -> String {
        let summary = &outcome.summary;
        let max = [
            summary.category_a.group1,
            summary.category_a.group2,
            summary.category_b.group1,
            summary.category_b.group2,
        ]
        .into_iter()
        .max()
        .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&Self::section_header("Distribution"));
        for category in Category::all() {
            let breakdown = summary.breakdown(category);
            out.push_str(&format!("Category {}\n", category));
            out.push_str(&Self::bar_line(&self.options.group1_name, breakdown.group1, max));
            out.push_str(&Self::bar_line(&self.options.group2_name, breakdown.group2, max));
            if breakdown.unassigned > 0 {
                out.push_str(&Self::bar_line("unassigned", breakdown.unassigned, max));
            }
        }
        out.push('\n');
        out
    }

    fn bar_line(label: &str, count: usize, max: usize) -> String {
        const WIDTH: usize = 30;
        let filled = if max == 0 { 0 } else { count * WIDTH / max };
        format!(
            "  {:<12} {} {}\n",
            label,
            "#".repeat(filled).green(),
            count
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &DrawOutcome) -> String {
        Self::format(self, outcome)
    }

    fn format_json(&self, outcome: &DrawOutcome) -> String {
        Self::format_json(self, outcome)
    }

    fn format_summary_only(&self, outcome: &DrawOutcome) -> String {
        Self::format_summary_only(self, outcome)
    }
}
