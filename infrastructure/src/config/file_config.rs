//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Defaults reproduce the observed deployment: quotas 27+27 for category A
//! and 51+52 for category B.

use draw_domain::{Category, Quota, QuotaSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("at least one category must have a non-zero quota")]
    EmptyQuotas,

    #[error("roster.delimiter must be a single character")]
    InvalidDelimiter,

    #[error("roster.category_{0}_labels cannot be empty")]
    EmptyCategoryLabels(&'static str),
}

/// Raw quota configuration from TOML
///
/// Each entry is a `[group1, group2]` pair of seat counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuotaConfig {
    pub category_a: [usize; 2],
    pub category_b: [usize; 2],
}

impl Default for FileQuotaConfig {
    fn default() -> Self {
        Self {
            category_a: [27, 27],
            category_b: [51, 52],
        }
    }
}

impl FileQuotaConfig {
    /// Convert to the domain quota set, omitting all-zero categories
    pub fn to_quota_set(&self) -> QuotaSet {
        let mut quotas = QuotaSet::new();
        if self.category_a != [0, 0] {
            quotas = quotas.with(Category::A, Quota::new(self.category_a[0], self.category_a[1]));
        }
        if self.category_b != [0, 0] {
            quotas = quotas.with(Category::B, Quota::new(self.category_b[0], self.category_b[1]));
        }
        quotas
    }
}

/// Raw roster file format configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRosterConfig {
    /// Header of the full-name column
    pub name_column: String,
    /// Header of the category column
    pub category_column: String,
    /// Cell delimiter (single character, e.g. "," or ";")
    pub delimiter: String,
    /// Raw spellings mapped to category A (case-insensitive)
    pub category_a_labels: Vec<String>,
    /// Raw spellings mapped to category B (case-insensitive)
    pub category_b_labels: Vec<String>,
    /// Silently drop rows with an unrecognized category instead of failing
    pub skip_unrecognized: bool,
}

impl Default for FileRosterConfig {
    fn default() -> Self {
        Self {
            name_column: "full_name".to_string(),
            category_column: "category".to_string(),
            delimiter: ",".to_string(),
            category_a_labels: vec!["A".to_string()],
            category_b_labels: vec!["B".to_string()],
            skip_unrecognized: false,
        }
    }
}

impl FileRosterConfig {
    pub fn delimiter_char(&self) -> Option<char> {
        let mut chars = self.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Display name for group1
    pub group1_name: String,
    /// Display name for group2
    pub group2_name: String,
    /// Directory export files are written into
    pub directory: String,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            group1_name: "Group 1".to_string(),
            group2_name: "Group 2".to_string(),
            directory: ".".to_string(),
            color: true,
        }
    }
}

/// Root of the TOML config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub quotas: FileQuotaConfig,
    pub roster: FileRosterConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Check invariants figment cannot express
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.quotas.to_quota_set().is_empty() {
            return Err(ConfigValidationError::EmptyQuotas);
        }
        if self.roster.delimiter_char().is_none() {
            return Err(ConfigValidationError::InvalidDelimiter);
        }
        if self.roster.category_a_labels.is_empty() {
            return Err(ConfigValidationError::EmptyCategoryLabels("a"));
        }
        if self.roster.category_b_labels.is_empty() {
            return Err(ConfigValidationError::EmptyCategoryLabels("b"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quotas_match_observed_deployment() {
        let config = FileConfig::default();
        let quotas = config.quotas.to_quota_set();
        assert_eq!(quotas.get(Category::A), Some(Quota::new(27, 27)));
        assert_eq!(quotas.get(Category::B), Some(Quota::new(51, 52)));
        assert_eq!(quotas.group1_total(), 78);
        assert_eq!(quotas.group2_total(), 79);
    }

    #[test]
    fn test_zero_quota_category_is_omitted() {
        let quotas = FileQuotaConfig {
            category_a: [2, 2],
            category_b: [0, 0],
        };
        let set = quotas.to_quota_set();
        assert!(set.get(Category::A).is_some());
        assert!(set.get(Category::B).is_none());
    }

    #[test]
    fn test_default_config_validates() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_all_zero_quotas() {
        let mut config = FileConfig::default();
        config.quotas.category_a = [0, 0];
        config.quotas.category_b = [0, 0];
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyQuotas)
        ));
    }

    #[test]
    fn test_validate_rejects_multi_char_delimiter() {
        let mut config = FileConfig::default();
        config.roster.delimiter = ",,".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidDelimiter)
        ));
    }

    #[test]
    fn test_toml_roundtrip() {
        let toml_str = r#"
            [quotas]
            category_a = [3, 3]
            category_b = [5, 6]

            [roster]
            name_column = "NOMBRE_COMPLETO"
            category_column = "GENERO"
            delimiter = ";"
            category_a_labels = ["HOMBRE"]
            category_b_labels = ["MUJER"]
            skip_unrecognized = true

            [output]
            group1_name = "Alianza Verde"
            group2_name = "Alianza Azul"
        "#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.quotas.category_b, [5, 6]);
        assert_eq!(config.roster.delimiter_char(), Some(';'));
        assert!(config.roster.skip_unrecognized);
        assert_eq!(config.output.group1_name, "Alianza Verde");
        // Unspecified keys keep their defaults
        assert!(config.output.color);
        assert!(config.validate().is_ok());
    }
}
