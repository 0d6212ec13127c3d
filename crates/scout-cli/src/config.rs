//! CLI configuration.
//!
//! Relative paths in the file are taken relative to the working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use scout_briefing::BriefingHeader;

use crate::error::{CliError, CliResult};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "scout.toml";

/// Scout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// Directory holding the six source CSV files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory briefings are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Organization name on the briefing cover
    #[serde(default = "default_organization")]
    pub organization: String,

    /// Subtitle on the briefing cover
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_organization() -> String {
    BriefingHeader::default().organization
}

fn default_subtitle() -> String {
    BriefingHeader::default().subtitle
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
            organization: default_organization(),
            subtitle: default_subtitle(),
        }
    }
}

impl ScoutConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&content).map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
    }

    /// Resolves the active configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used if present, else the defaults. Returns the file the values came
    /// from, if any.
    pub fn resolve(explicit: Option<&Path>) -> CliResult<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    return Ok((Self::default(), None));
                }
                path
            }
        };

        info!("Loading configuration from {}", path.display());
        let config = Self::from_file(&path)?;
        Ok((config, Some(path)))
    }

    /// The file `config init` writes and `config path` reports.
    pub fn target_path(explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf)
    }

    /// Serializes to TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Serialization(e.to_string()))
    }

    /// Cover page text for the assembler.
    pub fn header(&self) -> BriefingHeader {
        BriefingHeader {
            organization: self.organization.clone(),
            subtitle: self.subtitle.clone(),
        }
    }
}
