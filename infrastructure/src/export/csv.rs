//! CSV export adapter

use draw_application::{DrawOutcome, ExportError, ResultExporter};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Writes `assignments.csv` and `roster.csv` into a directory
pub struct CsvExporter {
    directory: PathBuf,
}

impl CsvExporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl ResultExporter for CsvExporter {
    fn export(&self, outcome: &DrawOutcome) -> Result<Vec<PathBuf>, ExportError> {
        fs::create_dir_all(&self.directory)?;

        let assignments_path = self.directory.join("assignments.csv");
        let mut assignments = fs::File::create(&assignments_path)?;
        writeln!(assignments, "full_name,group")?;
        for (person, label) in outcome.result.assignments() {
            writeln!(assignments, "{},{}", field(person.full_name()), label)?;
        }
        for person in &outcome.result.unassigned {
            writeln!(assignments, "{},unassigned", field(person.full_name()))?;
        }

        let roster_path = self.directory.join("roster.csv");
        let mut roster = fs::File::create(&roster_path)?;
        writeln!(roster, "full_name,category")?;
        for person in outcome.roster.iter() {
            writeln!(
                roster,
                "{},{}",
                field(person.full_name()),
                person.category()
            )?;
        }

        info!(
            "Exported draw to {} and {}",
            assignments_path.display(),
            roster_path.display()
        );
        Ok(vec![assignments_path, roster_path])
    }
}

/// Quote a cell when it contains a delimiter, quote or newline
fn field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
