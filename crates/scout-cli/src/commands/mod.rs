//! CLI command implementations.

pub mod brief;
pub mod config;
pub mod shortlist;

// Re-export submodules for convenience
pub use brief::BriefArgs;
pub use config::ConfigArgs;
pub use shortlist::ShortlistArgs;

use std::path::{Path, PathBuf};

use tracing::info;

use scout_core::Repository;

use crate::cli::OutputFormat;
use crate::config::ScoutConfig;
use crate::error::CliResult;

/// Settings shared by the data commands.
#[derive(Debug)]
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Resolved configuration.
    pub config: ScoutConfig,
}

impl Context {
    /// The data directory, preferring a command-line override.
    pub fn data_dir(&self, overridden: Option<&Path>) -> PathBuf {
        overridden.map_or_else(|| self.config.data_dir.clone(), Path::to_path_buf)
    }

    /// Loads the repository snapshot once for this invocation.
    pub fn load_repository(&self, overridden: Option<&Path>) -> CliResult<Repository> {
        let dir = self.data_dir(overridden);
        info!("Loading data from {}", dir.display());
        Ok(scout_ext_file::load_repository(&dir)?)
    }
}
