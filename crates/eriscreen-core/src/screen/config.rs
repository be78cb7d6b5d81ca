use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("screening cutoff must be finite and non-negative, got {0}")]
    InvalidCutoff(f64),
}

/// Which quartet-significance bound the sieve prepares and answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreeningMethod {
    /// Plain Cauchy-Schwarz magnitude bounds.
    #[default]
    Schwarz,
    /// Cauchy-Schwarz augmented with exchange-type bounds for a tighter
    /// estimate.
    Csam,
    /// Long-range multipole (distance/extent) screening. Requesting this
    /// method is an error until a working extent estimator exists; see
    /// [`Sieve::shell_significant_qqr`](crate::screen::sieve::Sieve::shell_significant_qqr).
    Qqr,
}

/// Construction parameters for a [`Sieve`](crate::screen::sieve::Sieve).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScreeningConfig {
    /// Integral magnitude below which shell and function quartets are
    /// discarded.
    pub cutoff: f64,
    pub method: ScreeningMethod,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            cutoff: 1e-12,
            method: ScreeningMethod::Schwarz,
        }
    }
}

impl ScreeningConfig {
    pub fn new(cutoff: f64, method: ScreeningMethod) -> Self {
        Self { cutoff, method }
    }

    /// Reads and validates a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cutoff.is_finite() || self.cutoff < 0.0 {
            return Err(ConfigError::InvalidCutoff(self.cutoff));
        }
        Ok(())
    }
}
