//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that colors and colorizer names resolve
//! - Check the timestamp pattern before it reaches the emit path
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use thiserror::Error;

use crate::color::{ColorError, ColorizerRegistry};
use crate::config::schema::LoggerConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("time_format {0:?} is not a valid strftime pattern")]
    InvalidTimeFormat(String),

    #[error("time_color {0:?} does not name a known colorizer")]
    UnknownTimeColor(String),

    #[error("colorizers[{0}] has an empty name")]
    EmptyColorizerName(usize),

    #[error("colorizer {0:?} is defined more than once")]
    DuplicateColorizerName(String),

    #[error("colorizer {name:?} has invalid {field}: {source}")]
    InvalidColor {
        name: String,
        field: &'static str,
        source: ColorError,
    },

    #[error("file_path {0:?} is a directory")]
    FilePathIsDirectory(String),
}

pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if StrftimeItems::new(&config.time_format).any(|item| matches!(item, Item::Error)) {
        errors.push(ValidationError::InvalidTimeFormat(config.time_format.clone()));
    }

    let mut seen = HashSet::new();
    for (index, def) in config.colorizers.iter().enumerate() {
        if def.name.trim().is_empty() {
            errors.push(ValidationError::EmptyColorizerName(index));
        } else if !seen.insert(def.name.as_str()) {
            errors.push(ValidationError::DuplicateColorizerName(def.name.clone()));
        }

        let colors = std::iter::once(("fg", Some(&def.fg))).chain(std::iter::once(("bg", def.bg.as_ref())));
        for (field, value) in colors {
            if let Some(Err(source)) = value.map(|v| v.parse::<crate::color::Rgb>()) {
                errors.push(ValidationError::InvalidColor {
                    name: def.name.clone(),
                    field,
                    source,
                });
            }
        }
    }

    if !config.time_color.is_empty()
        && !seen.contains(config.time_color.as_str())
        && !ColorizerRegistry::with_defaults().contains(&config.time_color)
    {
        errors.push(ValidationError::UnknownTimeColor(config.time_color.clone()));
    }

    if !config.file_path.is_empty() && Path::new(&config.file_path).is_dir() {
        errors.push(ValidationError::FilePathIsDirectory(config.file_path.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
