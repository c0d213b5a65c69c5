//! User configuration for the `calc` command.
//!
//! Settings live in a JSON file under the platform config directory and can be
//! overridden per invocation from the command line.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// An `f64` never carries more than 17 significant decimal digits.
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Number of decimal places to print. `None` prints the shortest exact form.
    pub precision: Option<usize>,
    pub format: OutputFormat,
}

impl CalcConfig {
    /// Load configuration from the default location.
    ///
    /// Platforms without a home directory get the defaults.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Ok(path) => Self::load_from(&path),
            Err(err) => {
                tracing::debug!(error = %err, "No config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            precision = ?config.precision,
            format = ?config.format,
            "Loaded config"
        );
        Ok(config)
    }

    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "calculator")
            .context("Failed to get project directories")?;
        Ok(dirs.config_dir().join("config.json"))
    }

    /// Apply command-line overrides on top of the loaded settings.
    pub fn with_overrides(
        mut self,
        precision: Option<usize>,
        format: Option<OutputFormat>,
    ) -> Result<Self> {
        if precision.is_some() {
            self.precision = precision;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if let Some(precision) = self.precision {
            if precision > MAX_PRECISION {
                return Err(anyhow::anyhow!(
                    "Precision {precision} exceeds the maximum of {MAX_PRECISION}"
                )
                .into());
            }
        }
        Ok(())
    }
}
