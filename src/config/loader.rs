//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::LoggerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LoggerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), level = %config.level, "Logger configuration loaded");
    Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<LoggerConfig, ConfigError> {
    let config: LoggerConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::Level;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r##"
level = "trace"
use_tid = true
time_format = "%H:%M:%S"
time_color = "Alert"

[[colorizers]]
name = "Alert"
fg = "#000000"
bg = "red"
bold = true
"##
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.level, Level::Trace);
        assert!(config.use_tid);
        assert_eq!(config.colorizers.len(), 1);
        assert_eq!(config.colorizers[0].bg.as_deref(), Some("red"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_bad_level_is_parse_error() {
        let err = parse_config("level = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("unknown log level"));
    }

    #[test]
    fn test_validation_errors_joined() {
        let err = parse_config("time_color = \"Nope\"\ntime_format = \"%Q\"").unwrap_err();
        match &err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
        let text = err.to_string();
        assert!(text.starts_with("Validation failed: "));
        assert!(text.contains(", "));
    }
}
