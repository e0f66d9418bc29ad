//! Top-level tracer configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::FormatterConfig;
use crate::constants::ENV_PREFIX;
use crate::errors::ConfigError;
use crate::format::FormatterKind;
use crate::options::{Detail, Ordering, TraceOption};

/// Tracer configuration.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CAUSETRACE_*`)
/// 2. Config file, when one is given and exists
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TraceConfig {
    /// Emission order. Default: oldest-first.
    pub ordering: Option<Ordering>,
    /// Detailed segments. Default: true.
    pub detailed: Option<bool>,
    pub formatter: FormatterConfig,
}

impl TraceConfig {
    /// Load configuration with layered resolution, then validate it.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = path {
            if path.exists() {
                Self::merge_toml_file(&mut config, path)?;
            } else {
                tracing::debug!(path = %path.display(), "no trace config file, using defaults");
            }
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &TraceConfig) -> Result<(), ConfigError> {
        if let Some(ref indentation) = config.formatter.indentation {
            if indentation.contains(['\n', '\r']) {
                return Err(ConfigError::ValidationFailed {
                    field: "formatter.indentation".to_string(),
                    message: "must not contain line terminators".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the effective ordering, defaulting to oldest-first.
    pub fn effective_ordering(&self) -> Ordering {
        self.ordering.unwrap_or_default()
    }

    /// Returns the effective detail level, defaulting to detailed.
    pub fn effective_detail(&self) -> Detail {
        Detail::from_enabled(self.detailed.unwrap_or(true))
    }

    /// The tracer options this config resolves to.
    pub fn to_options(&self) -> Vec<TraceOption> {
        vec![
            TraceOption::Ordering(self.effective_ordering()),
            TraceOption::Detail(self.effective_detail()),
            TraceOption::Formatter(self.formatter.to_spec()),
        ]
    }

    fn merge_toml_file(config: &mut TraceConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TraceConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut TraceConfig, other: &TraceConfig) {
        if other.ordering.is_some() {
            base.ordering = other.ordering;
        }
        if other.detailed.is_some() {
            base.detailed = other.detailed;
        }
        if other.formatter.kind.is_some() {
            base.formatter.kind = other.formatter.kind;
        }
        if other.formatter.naive.is_some() {
            base.formatter.naive = other.formatter.naive;
        }
        if other.formatter.indentation.is_some() {
            base.formatter.indentation = other.formatter.indentation.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CAUSETRACE_ORDERING`, `CAUSETRACE_FORMATTER`, etc.
    /// Values that do not parse are ignored.
    fn apply_env_overrides(config: &mut TraceConfig) {
        if let Some(val) = env_var("ORDERING") {
            match val.as_str() {
                "oldest-first" => config.ordering = Some(Ordering::OldestFirst),
                "newest-first" => config.ordering = Some(Ordering::NewestFirst),
                _ => ignored("ORDERING", &val),
            }
        }
        if let Some(val) = env_var("DETAILED") {
            match val.parse::<bool>() {
                Ok(v) => config.detailed = Some(v),
                Err(_) => ignored("DETAILED", &val),
            }
        }
        if let Some(val) = env_var("FORMATTER") {
            match val.parse::<FormatterKind>() {
                Ok(v) => config.formatter.kind = Some(v),
                Err(_) => ignored("FORMATTER", &val),
            }
        }
        if let Some(val) = env_var("NAIVE") {
            match val.parse::<bool>() {
                Ok(v) => config.formatter.naive = Some(v),
                Err(_) => ignored("NAIVE", &val),
            }
        }
        if let Some(val) = env_var("INDENTATION") {
            config.formatter.indentation = Some(val);
        }
    }
}

fn env_var(suffix: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{suffix}")).ok()
}

fn ignored(suffix: &str, value: &str) {
    let var = format!("{ENV_PREFIX}{suffix}");
    tracing::warn!(%var, value, "ignoring unparsable config override");
}
