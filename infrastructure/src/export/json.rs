//! JSON export adapter

use draw_application::{DrawOutcome, ExportError, ResultExporter};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Writes the full draw outcome as one pretty-printed JSON document
pub struct JsonExporter {
    directory: PathBuf,
}

impl JsonExporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl ResultExporter for JsonExporter {
    fn export(&self, outcome: &DrawOutcome) -> Result<Vec<PathBuf>, ExportError> {
        fs::create_dir_all(&self.directory)?;

        let path = self.directory.join("draw.json");
        let json = serde_json::to_string_pretty(outcome)?;
        fs::write(&path, json)?;

        info!("Exported draw to {}", path.display());
        Ok(vec![path])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use draw_domain::{
        allocate, Category, DrawSummary, Person, Quota, QuotaSet, Roster,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_export_roundtrips() {
        let roster = Roster::new(vec![
            Person::new("Juan Perez", Category::A).unwrap(),
            Person::new("Maria Lopez", Category::B).unwrap(),
        ]);
        let quotas = QuotaSet::new()
            .with(Category::A, Quota::new(1, 0))
            .with(Category::B, Quota::new(0, 1));
        let result = allocate(&roster, &quotas, &mut StdRng::seed_from_u64(1)).unwrap();
        let summary = DrawSummary::from_result(&roster, &result);
        let outcome = DrawOutcome {
            roster,
            result,
            summary,
            drawn_at: Utc::now(),
        };

        let dir = tempfile::tempdir().unwrap();
        let paths = JsonExporter::new(dir.path()).export(&outcome).unwrap();
        assert_eq!(paths.len(), 1);

        let text = fs::read_to_string(&paths[0]).unwrap();
        let back: DrawOutcome = serde_json::from_str(&text).unwrap();
        assert_eq!(back.result, outcome.result);
        assert_eq!(back.summary, outcome.summary);
    }
}
