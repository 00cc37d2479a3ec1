//! Renderers turning a [`SelectionResult`] into printable text.

mod flat;
mod json;
mod size;
mod tree;

pub use size::format_size;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::select::SelectionResult;

/// Output format for the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Indented tree grouped by shared path prefix
    Tree,
    /// Flat size-descending list with human-readable sizes
    Flat,
    /// Tab-delimited raw byte counts, for machine consumption
    Parseable,
    /// JSON object with entries and total
    Json,
}

impl Default for DisplayMode {
    fn default() -> Self {
        DisplayMode::Tree
    }
}

/// Render the selection in the requested mode. The total row always
/// comes last, labelled `total_label`.
pub fn render(result: &SelectionResult, mode: DisplayMode, total_label: &str) -> Result<String> {
    let lines = match mode {
        DisplayMode::Tree => tree::render(result, total_label),
        DisplayMode::Flat => flat::render_human(result, total_label),
        DisplayMode::Parseable => flat::render_parseable(result, total_label),
        DisplayMode::Json => return json::render(result),
    };
    Ok(lines.join("\n"))
}
