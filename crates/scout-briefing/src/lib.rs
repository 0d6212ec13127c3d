//! # Scout Briefing
//!
//! Assembly engine for secondary candidate briefings.
//!
//! Given a repository snapshot and one target fund, the engine resolves the
//! fund's metrics, joins every related table and produces an ordered sequence
//! of content blocks:
//!
//! 1. GP Overview
//! 2. Target Fund Overview
//! 3. Track Record (Prior Funds)
//! 4. Recent Developments / GP News
//! 5. Target Fund Investments
//! 6. Target Fund LPs
//! 7. Key Contacts
//!
//! Sections always appear in this order, whatever data is available.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scout_briefing::prelude::*;
//!
//! let repo = scout_ext_file::load_repository("data")?;
//! let briefing = assemble_briefing(&FundKey::new("Acme Capital", "Acme Fund III"), &repo)?;
//! let markdown = MarkdownRenderer::new().render_to_string(&briefing)?;
//! ```
//!
//! ## Module Overview
//!
//! - [`metrics`] - Metric providers and the remaining value derivation
//! - [`blocks`] - Content block model handed to renderers
//! - [`sections`] - Per-section joins, ordering and placeholders
//! - [`assembler`] - The assembly entry point
//! - [`render`] - Renderer trait with Markdown and JSON implementations

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod assembler;
pub mod blocks;
pub mod metrics;
pub mod render;
pub mod sections;

pub use assembler::{assemble_briefing, BriefingAssembler, BriefingHeader};
pub use blocks::{Block, Briefing, Column, Section, Table, TableStyle, TitleBlock};
pub use metrics::{
    remaining_value, BriefingMetrics, FallbackMetricsProvider, MeasuredMetrics,
    MeasuredMetricsProvider, MetricsProvider, MetricsSource,
};
pub use render::{render_to_file, DocumentRenderer, JsonRenderer, MarkdownRenderer};
pub use sections::SectionComposer;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::assembler::{assemble_briefing, BriefingAssembler, BriefingHeader};
    pub use crate::blocks::{Block, Briefing, Section, Table};
    pub use crate::metrics::{
        BriefingMetrics, FallbackMetricsProvider, MetricsProvider, MetricsSource,
    };
    pub use crate::render::{render_to_file, DocumentRenderer, JsonRenderer, MarkdownRenderer};
    pub use scout_core::prelude::*;
}
