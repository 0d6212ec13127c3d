//! JSON renderer.

use std::io::Write;

use scout_core::{ScoutError, ScoutResult};

use super::{write_err, DocumentRenderer};
use crate::blocks::Briefing;

/// Pretty-printed JSON of the block sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    /// Create a new JSON renderer.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, briefing: &Briefing, out: &mut dyn Write) -> ScoutResult<()> {
        serde_json::to_writer_pretty(&mut *out, briefing)
            .map_err(|e| ScoutError::render(e.to_string()))?;
        writeln!(out).map_err(write_err)
    }
}
