//! Delimited-text roster reader
//!
//! Reads a header-addressed delimited file (comma or semicolon) into a
//! domain [`Roster`]. Rows with a missing name or category cell are dropped
//! with a warning. Unrecognized category spellings fail hard unless
//! `skip_unrecognized` is set, which restores the lenient warn-and-filter
//! behavior of the original tool.

use crate::config::file_config::FileRosterConfig;
use draw_application::{RosterSource, RosterSourceError};
use draw_domain::{Category, Person, Roster};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Roster source backed by a delimited text file
pub struct DelimitedRosterSource {
    path: PathBuf,
    format: FileRosterConfig,
}

impl DelimitedRosterSource {
    pub fn new(path: impl Into<PathBuf>, format: FileRosterConfig) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Map a raw category cell through the configured label lists
    fn match_category(&self, raw: &str) -> Option<Category> {
        let matches = |labels: &[String]| labels.iter().any(|l| l.eq_ignore_ascii_case(raw));
        if matches(&self.format.category_a_labels) {
            Some(Category::A)
        } else if matches(&self.format.category_b_labels) {
            Some(Category::B)
        } else {
            None
        }
    }
}

impl RosterSource for DelimitedRosterSource {
    fn load(&self) -> Result<Roster, RosterSourceError> {
        let text = fs::read_to_string(&self.path)?;
        let delimiter = self.format.delimiter_char().unwrap_or(',');

        let mut lines = text.lines();
        let header = lines.next().ok_or(RosterSourceError::Empty)?;
        let headers = split_row(header, delimiter);

        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| RosterSourceError::MissingColumn(name.to_string()))
        };
        let name_idx = column(&self.format.name_column)?;
        let category_idx = column(&self.format.category_column)?;

        let mut people = Vec::new();
        for (offset, line) in lines.enumerate() {
            // Header is row 1
            let row = offset + 2;
            if line.trim().is_empty() {
                continue;
            }

            let cells = split_row(line, delimiter);
            let name = cells.get(name_idx).map(|c| c.trim()).unwrap_or("");
            let raw_category = cells.get(category_idx).map(|c| c.trim()).unwrap_or("");

            if name.is_empty() || raw_category.is_empty() {
                warn!("Dropping row {row}: missing name or category");
                continue;
            }

            let category = match self.match_category(raw_category) {
                Some(c) => c,
                None if self.format.skip_unrecognized => {
                    warn!("Dropping row {row}: unrecognized category {raw_category:?}");
                    continue;
                }
                None => {
                    return Err(RosterSourceError::UnrecognizedCategory {
                        value: raw_category.to_string(),
                        row,
                    });
                }
            };

            let person = Person::new(name, category)
                .map_err(|e| RosterSourceError::InvalidEntry(e.to_string()))?;
            people.push(person);
        }

        if people.is_empty() {
            return Err(RosterSourceError::Empty);
        }

        debug!(
            "Loaded {} people from {}",
            people.len(),
            self.path.display()
        );
        Ok(Roster::new(people))
    }
}

/// Split one line into cells, honoring double-quoted fields with `""` escapes
fn split_row(line: &str, delimiter: char) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == '"' && current.is_empty() {
            in_quotes = true;
        } else if c == delimiter {
            cells.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    cells.push(current);
    cells
}
