use anyhow::{Context, Result};

use crate::enhance::PipelineResult;

/// Populated sections, each under its header, separated by blank lines.
pub fn render_sections(result: &PipelineResult) -> String {
    let sections = result.populated_sections();
    if sections.is_empty() {
        return "(no labelled sections found)".to_string();
    }
    sections
        .into_iter()
        .map(|section| format!("{}\n{}", section.header(), result.section(section)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_json(result: &PipelineResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize pipeline result")
}
