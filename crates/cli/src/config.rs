//! CLI configuration

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::{Path, PathBuf};

use cloudctl_common::{Error, Result};

use crate::output::{Field, OutputFormat, TableDisplay};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "CLOUDCTL_CONFIG";

/// Persistent CLI defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default output format (table, json, yaml, text)
    pub output: String,

    /// Default inventory snapshot path
    pub inventory: Option<PathBuf>,

    /// Default `--limit` for list queries, 0 for unlimited
    pub page_limit: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Table.to_string(),
            inventory: None,
            page_limit: 0,
        }
    }
}

impl CliConfig {
    /// Config file location: `$CLOUDCTL_CONFIG`, else `~/.cloudctl/config.toml`
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(cloudctl_common::default_config_path)
    }

    /// Load configuration from file, falling back to defaults when absent
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::parse(&self.output)
    }

    /// Update one setting by its command-line key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output" => self.output = OutputFormat::parse(value).to_string(),
            "inventory" => {
                self.inventory = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            "page-limit" | "page_limit" => {
                self.page_limit = value.parse().map_err(|_| {
                    Error::InvalidConfig(format!("page-limit must be a number, got '{}'", value))
                })?
            }
            other => {
                return Err(Error::InvalidConfig(format!(
                    "unknown key '{}' (expected output, inventory or page-limit)",
                    other
                )))
            }
        }
        Ok(())
    }
}

static CONFIG_FIELDS: &[Field] = &[
    Field::new("output", "output"),
    Field::new("inventory", "inventory"),
    Field::new("page_limit", "pageLimit"),
];

impl TableDisplay for CliConfig {
    fn fields() -> &'static [Field] {
        CONFIG_FIELDS
    }

    fn row(&self) -> Vec<serde_json::Value> {
        vec![
            json!(self.output),
            json!(self.inventory.as_ref().map(|p| p.display().to_string())),
            json!(self.page_limit),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = CliConfig::load(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output_format(), OutputFormat::Table);
    }

    #[test]
    fn test_save_then_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        let mut config = CliConfig::default();
        config.set("output", "YAML").unwrap();
        config.set("inventory", "/srv/inventory.json").unwrap();
        config.set("page-limit", "25").unwrap();
        config.save(&path).unwrap();

        let loaded = CliConfig::load(&path).unwrap();
        assert_eq!(loaded.output_format(), OutputFormat::Yaml);
        assert_eq!(loaded.inventory, Some(PathBuf::from("/srv/inventory.json")));
        assert_eq!(loaded.page_limit, 25);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "output = \"json\"\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.page_limit, 0);
    }

    #[test]
    fn test_unknown_output_normalized_to_table() {
        let mut config = CliConfig::default();
        config.set("output", "fancy").unwrap();
        assert_eq!(config.output, "table");
    }

    #[test]
    fn test_rejects_bad_keys_and_values() {
        let mut config = CliConfig::default();
        assert!(config.set("colour", "red").is_err());
        assert!(config.set("page-limit", "many").is_err());
    }

    #[test]
    fn test_view_record_columns_line_up() {
        let config = CliConfig {
            output: "yaml".into(),
            inventory: Some(PathBuf::from("/srv/inventory.json")),
            page_limit: 25,
        };
        let record = crate::output::Record::from_display(&config);
        assert_eq!(record.get("output"), Some(&json!("yaml")));
        assert_eq!(record.get("inventory"), Some(&json!("/srv/inventory.json")));
        assert_eq!(record.get("pageLimit"), Some(&json!(25)));
    }
}
