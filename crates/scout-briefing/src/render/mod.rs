//! Document renderers.
//!
//! The production layout (paginated, styled) lives outside this workspace and
//! consumes the same [`Briefing`] blocks. The renderers here produce text
//! artifacts for review and for piping into other tools.

mod json;
mod markdown;

pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use scout_core::{ScoutError, ScoutResult};

use crate::blocks::Briefing;

/// Turns a briefing into a document.
pub trait DocumentRenderer {
    /// File extension of the produced artifact, without the dot.
    fn extension(&self) -> &'static str;

    /// Writes the document.
    fn render(&self, briefing: &Briefing, out: &mut dyn Write) -> ScoutResult<()>;

    /// Renders into a string.
    fn render_to_string(&self, briefing: &Briefing) -> ScoutResult<String> {
        let mut buf = Vec::new();
        self.render(briefing, &mut buf)?;
        String::from_utf8(buf).map_err(|e| ScoutError::render(e.to_string()))
    }
}

/// Renders a briefing into `"{GP} - {Fund} - Briefing.{ext}"` under `dir`,
/// creating the directory if needed. Returns the written path.
pub fn render_to_file(
    renderer: &dyn DocumentRenderer,
    briefing: &Briefing,
    dir: impl AsRef<Path>,
) -> ScoutResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| ScoutError::io(dir.display().to_string(), e.to_string()))?;

    let path = dir.join(format!("{}.{}", briefing.file_stem(), renderer.extension()));
    let mut file =
        fs::File::create(&path).map_err(|e| ScoutError::io(path.display().to_string(), e.to_string()))?;
    renderer.render(briefing, &mut file)?;
    file.flush()
        .map_err(|e| ScoutError::io(path.display().to_string(), e.to_string()))?;

    info!("Briefing written to {}", path.display());
    Ok(path)
}

pub(crate) fn write_err(e: std::io::Error) -> ScoutError {
    ScoutError::render(e.to_string())
}
