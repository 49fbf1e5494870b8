//! Configuration file support for digikey-bom-report.
//!
//! Provides YAML-based configuration through `bom-report.config.yml` files,
//! including data structures, file loading, and validation. Every key is
//! optional; command-line flags override whatever is set here.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::bom_reporting::policies::RetryPolicy;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "bom-report.config.yml";

/// Largest page size the keyword search endpoint accepts
pub const MAX_SEARCH_LIMIT: u32 = 50;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output_format: Option<String>,
    pub output_path: Option<String>,
    pub template_path: Option<String>,
    pub columns: Option<ColumnsConfig>,
    pub locale: Option<LocaleConfig>,
    pub retry: Option<RetryConfig>,
    pub match_confidence_threshold: Option<f64>,
    pub api_base_url: Option<String>,
    pub search_limit: Option<u32>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// BOM column names, for exports that don't use the default headers.
#[derive(Debug, Deserialize, Default)]
pub struct ColumnsConfig {
    pub part_number: Option<String>,
    pub quantity: Option<String>,
    pub designators: Option<String>,
    pub manufacturer: Option<String>,
}

/// Locale headers sent with every distributor search.
#[derive(Debug, Deserialize, Default)]
pub struct LocaleConfig {
    pub site: Option<String>,
    pub language: Option<String>,
    pub currency: Option<String>,
    pub customer_id: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RetryConfig {
    pub max_retries: Option<u32>,
    pub delay_ms: Option<u64>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.output_format {
        if let Err(message) = format.parse::<OutputFormat>() {
            bail!("Invalid config: output_format: {}", message);
        }
    }

    if let Some(threshold) = config.match_confidence_threshold {
        if !(0.0..=1.0).contains(&threshold) {
            bail!(
                "Invalid config: match_confidence_threshold must be between 0.0 and 1.0 (got {}).\n\n\
                 💡 Hint: 1.0 accepts exact matches only; the default is 0.90.",
                threshold
            );
        }
    }

    if let Some(limit) = config.search_limit {
        if limit == 0 || limit > MAX_SEARCH_LIMIT {
            bail!(
                "Invalid config: search_limit must be between 1 and {} (got {}).",
                MAX_SEARCH_LIMIT,
                limit
            );
        }
    }

    if let Some(max_retries) = config.retry.as_ref().and_then(|r| r.max_retries) {
        if max_retries > RetryPolicy::MAX_RETRIES {
            bail!(
                "Invalid config: retry.max_retries must be between 0 and {} (got {}).",
                RetryPolicy::MAX_RETRIES,
                max_retries
            );
        }
    }

    if let Some(ref columns) = config.columns {
        let named = [
            ("part_number", &columns.part_number),
            ("quantity", &columns.quantity),
            ("designators", &columns.designators),
            ("manufacturer", &columns.manufacturer),
        ];
        for (key, value) in named {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                bail!(
                    "Invalid config: columns.{} must not be empty.\n\n\
                     💡 Hint: Remove the key to use the default column name.",
                    key
                );
            }
        }
    }

    if let Some(ref locale) = config.locale {
        if locale.currency.as_deref().is_some_and(|c| c.trim().is_empty()) {
            bail!("Invalid config: locale.currency must not be empty.");
        }
    }

    if let Some(ref url) = config.api_base_url {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            bail!(
                "Invalid config: api_base_url must be an http(s) URL (got '{}').",
                url
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
output_format: csv
output_path: reports/bom.csv
columns:
  part_number: MPN
  quantity: Qty
locale:
  site: DE
  language: de
  currency: EUR
retry:
  max_retries: 5
  delay_ms: 250
match_confidence_threshold: 0.85
api_base_url: https://sandbox-api.digikey.com
search_limit: 5
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.output_format.as_deref(), Some("csv"));
        assert_eq!(config.output_path.as_deref(), Some("reports/bom.csv"));
        let columns = config.columns.unwrap();
        assert_eq!(columns.part_number.as_deref(), Some("MPN"));
        assert_eq!(columns.quantity.as_deref(), Some("Qty"));
        assert!(columns.designators.is_none());
        let locale = config.locale.unwrap();
        assert_eq!(locale.site.as_deref(), Some("DE"));
        assert_eq!(locale.currency.as_deref(), Some("EUR"));
        assert!(locale.customer_id.is_none());
        let retry = config.retry.unwrap();
        assert_eq!(retry.max_retries, Some(5));
        assert_eq!(retry.delay_ms, Some(250));
        assert_eq!(config.match_confidence_threshold, Some(0.85));
        assert_eq!(config.search_limit, Some(5));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "output_format: html\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.output_format.as_deref(), Some("html"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(format!("{}", err).contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");
        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_output_format() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "output_format: pdf\n");
        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("output_format"));
    }

    #[test]
    fn test_threshold_out_of_range() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "match_confidence_threshold: 1.5\n");
        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("between 0.0 and 1.0"));
    }

    #[test]
    fn test_search_limit_out_of_range() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "search_limit: 0\n");
        assert!(load_config_from_path(&config_path).is_err());

        let config_path = write_config(&dir, "search_limit: 51\n");
        assert!(load_config_from_path(&config_path).is_err());
    }

    #[test]
    fn test_max_retries_out_of_range() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "retry:\n  max_retries: 4294967295\n");
        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("retry.max_retries must be between 0 and 10"));

        let config_path = write_config(&dir, "retry:\n  max_retries: 10\n");
        assert!(load_config_from_path(&config_path).is_ok());
    }

    #[test]
    fn test_empty_column_name() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "columns:\n  quantity: \"  \"\n");
        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("columns.quantity must not be empty"));
    }

    #[test]
    fn test_empty_currency() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "locale:\n  currency: \"\"\n");
        assert!(load_config_from_path(&config_path).is_err());
    }

    #[test]
    fn test_non_http_base_url() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "api_base_url: ftp://example.com\n");
        assert!(load_config_from_path(&config_path).is_err());
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
output_format: csv
check_cve: true
another_unknown: value
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("check_cve"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.output_format.is_none());
        assert!(config.columns.is_none());
        assert!(config.retry.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
