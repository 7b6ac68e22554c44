//! Configuration for the sort harness.
//!
//! Supports YAML file and environment variable overrides.

use std::path::Path;

use serde::Deserialize;

use crate::sort::Algorithm;

/// Default size at which list contents are no longer printed.
pub const DEFAULT_PRINT_LIMIT: usize = 100;

/// Default length of the reverse-ordered case.
pub const DEFAULT_REVERSE_LEN: usize = 100_000;

/// Default largest case the naive sort is run on.
pub const DEFAULT_NAIVE_LIMIT: usize = 10_000;

/// Harness configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Lists with at least this many values are not printed.
    pub print_limit: usize,
    /// Length of the built-in reverse-ordered case.
    pub reverse_len: usize,
    /// Largest case the naive sort is run on; `None` runs it on every case.
    pub naive_limit: Option<usize>,
    /// Algorithms to run, in order.
    pub algorithms: Vec<Algorithm>,
    /// Extra cases run after the built-in ones.
    pub cases: Vec<CaseConfig>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            print_limit: DEFAULT_PRINT_LIMIT,
            reverse_len: DEFAULT_REVERSE_LEN,
            naive_limit: Some(DEFAULT_NAIVE_LIMIT),
            algorithms: Algorithm::ALL.to_vec(),
            cases: Vec::new(),
        }
    }
}

/// A user-supplied sort case.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CaseConfig {
    /// Name shown in the report.
    pub name: String,
    /// Input sequence.
    pub values: Vec<i32>,
    /// Expected output. The ascending sort of `values` when omitted.
    pub expected: Option<Vec<i32>>,
}

impl HarnessConfig {
    /// Load configuration from file and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file
    /// 3. Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("LINKSORT_CONFIG").unwrap_or_else(|_| "linksort.yaml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(limit) = std::env::var("LINKSORT_PRINT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.print_limit = l;
            }
        }

        if let Ok(len) = std::env::var("LINKSORT_REVERSE_LEN") {
            if let Ok(l) = len.parse() {
                self.reverse_len = l;
            }
        }

        if let Ok(limit) = std::env::var("LINKSORT_NAIVE_LIMIT") {
            if limit.eq_ignore_ascii_case("none") {
                self.naive_limit = None;
            } else if let Ok(l) = limit.parse() {
                self.naive_limit = Some(l);
            }
        }
    }

    /// True if `algorithm` should run on a case of `size` values.
    pub fn allows(&self, algorithm: Algorithm, size: usize) -> bool {
        match (algorithm, self.naive_limit) {
            (Algorithm::Naive, Some(limit)) => size <= limit,
            _ => true,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
