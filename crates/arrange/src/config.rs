use crate::error::{CliError, Result};
use arranger::{LEFT_TO_RIGHT, select_direction};
use log::warn;
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};

const ENV_REPORT_DIR: &str = "ARRANGE_REPORT_DIR";
const DEFAULT_REPORT_DIR: &str = "reports";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub arrange: ArrangeConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArrangeConfig {
    /// Command used when none is given on the command line
    pub command: String,
}

impl Default for ArrangeConfig {
    fn default() -> Self {
        Self {
            command: LEFT_TO_RIGHT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    pub enabled: bool,
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output_dir: PathBuf::from(DEFAULT_REPORT_DIR),
        }
    }
}

impl Config {
    /// Loads `path` if it exists, otherwise falls back to defaults.
    /// The environment is applied on top in both cases.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            Self::load_from_file(path)?
        } else {
            warn!(
                "Config file not found: {}, using default settings",
                path.display()
            );
            Self::default()
        };
        config.apply_env()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| CliError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        select_direction(&self.arrange.command).map_err(|e| {
            CliError::InvalidConfiguration(format!("arrange.command: {e}"))
        })?;

        if self.report.enabled && self.report.output_dir.as_os_str().is_empty() {
            return Err(CliError::InvalidConfiguration(
                "report.output_dir cannot be empty when reporting is enabled".to_string(),
            ));
        }

        Ok(())
    }

    /// `ARRANGE_REPORT_DIR` overrides the report directory
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(output_dir) = env::var(ENV_REPORT_DIR) {
            if output_dir.trim().is_empty() {
                return Ok(());
            }
            let path = PathBuf::from(output_dir.trim());

            // If the path already exists but is not a directory, reject early.
            if path.exists() && !path.is_dir() {
                return Err(CliError::InvalidConfiguration(format!(
                    "Report path is not a directory: {}",
                    path.display()
                )));
            }
            self.report.output_dir = path;
        }
        Ok(())
    }
}
