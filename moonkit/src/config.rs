//! Report configuration file support.
//!
//! This module reads the settings of the `moon-report` binary from a TOML
//! file:
//!
//! ```toml
//! [report]
//! start = { year = 2020, month = 2, day = 1, hour = 18.0 }
//! days = 30
//! step_days = 1
//!
//! [output]
//! format = "table"
//! pretty = true
//! strict = false
//! summary = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::domain::CalendarDate;
use crate::error::{MoonError, MoonResult};

/// Upper bound on the span of one report, a century of days.
pub const MAX_REPORT_DAYS: u32 = 36_525;

/// Report configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub report: ReportSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Date range settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    pub start: CalendarDate,
    #[serde(default = "default_days")]
    pub days: u32,
    #[serde(default = "default_step_days")]
    pub step_days: u32,
}

/// How the report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Reject an invalid start date instead of warning about it.
    #[serde(default)]
    pub strict: bool,
    /// Append phase transitions and the span summary.
    #[serde(default)]
    pub summary: bool,
}

fn default_days() -> u32 {
    30
}

fn default_step_days() -> u32 {
    1
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
            strict: false,
            summary: false,
        }
    }
}

impl FromStr for ReportConfig {
    type Err = MoonError;

    /// Parse a TOML document. Errors name the offending field path.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let deserializer = toml::Deserializer::new(content);
        serde_path_to_error::deserialize(deserializer).map_err(|e| {
            MoonError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })
    }
}

impl ReportConfig {
    /// Load report configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ReportConfig)` if successful
    /// * `Err(MoonError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> MoonResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            MoonError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        content.parse()
    }

    /// Load report configuration from the default location.
    ///
    /// Searches for `moonkit.toml` in:
    /// 1. Current directory
    /// 2. `moonkit/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> MoonResult<Self> {
        let search_paths = [
            PathBuf::from("moonkit.toml"),
            PathBuf::from("moonkit/moonkit.toml"),
            PathBuf::from("../moonkit.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::debug!("Using report config {}", path.display());
                return Self::from_file(&path);
            }
        }

        Err(MoonError::ConfigurationError(
            "No moonkit.toml found in standard locations".to_string(),
        ))
    }

    /// Check the range settings.
    pub fn validate(&self) -> MoonResult<()> {
        if self.report.days == 0 {
            return Err(MoonError::ConfigurationError(
                "'report.days' must be greater than zero".to_string(),
            ));
        }

        if self.report.days > MAX_REPORT_DAYS {
            return Err(MoonError::ConfigurationError(format!(
                "'report.days' must be at most {}, got {}",
                MAX_REPORT_DAYS, self.report.days
            )));
        }

        if self.report.step_days == 0 {
            return Err(MoonError::ConfigurationError(
                "'report.step_days' must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[report]
start = { year = 2020, month = 2, day = 1, hour = 18.0 }
days = 29
step_days = 2

[output]
format = "table"
pretty = false
strict = true
summary = true
"#;

        let config: ReportConfig = toml.parse().unwrap();
        assert_eq!(
            config.report.start,
            CalendarDate::new(2020, 2, 1).with_time(18.0, 0.0)
        );
        assert_eq!(config.report.days, 29);
        assert_eq!(config.report.step_days, 2);
        assert_eq!(config.output.format, OutputFormat::Table);
        assert!(!config.output.pretty);
        assert!(config.output.strict);
        assert!(config.output.summary);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let toml = r#"
[report]
start = { year = 2021, month = 6, day = 15 }
"#;

        let config: ReportConfig = toml.parse().unwrap();
        assert_eq!(config.report.days, 30);
        assert_eq!(config.report.step_days, 1);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
        assert!(!config.output.strict);
    }

    #[test]
    fn test_missing_start_is_error() {
        let toml = r#"
[report]
days = 10
"#;

        let result = toml.parse::<ReportConfig>();
        assert!(matches!(result, Err(MoonError::ConfigurationError(_))));
    }

    #[test]
    fn test_parse_error_names_field() {
        let toml = r#"
[report]
start = { year = 2021, month = "June", day = 15 }
"#;

        let err = toml.parse::<ReportConfig>().unwrap_err();
        assert!(err.to_string().contains("report.start.month"), "{}", err);
    }

    #[test]
    fn test_unknown_format_is_error() {
        let toml = r#"
[report]
start = { year = 2021, month = 6, day = 15 }

[output]
format = "xml"
"#;

        assert!(toml.parse::<ReportConfig>().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_days() {
        let toml = r#"
[report]
start = { year = 2021, month = 6, day = 15 }
days = 0
"#;

        let config: ReportConfig = toml.parse().unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_huge_span() {
        let toml = r#"
[report]
start = { year = 2021, month = 6, day = 15 }
days = 100000
"#;

        let config: ReportConfig = toml.parse().unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[report]\nstart = {{ year = 2020, month = 3, day = 9 }}\ndays = 7"
        )
        .unwrap();

        let config = ReportConfig::from_file(file.path()).unwrap();
        assert_eq!(config.report.start, CalendarDate::new(2020, 3, 9));
        assert_eq!(config.report.days, 7);
    }

    #[test]
    fn test_from_missing_file() {
        let err = ReportConfig::from_file("/definitely/not/here/moonkit.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
