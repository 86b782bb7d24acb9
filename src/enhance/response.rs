//! Splits a model reply into the per-stage sections requested by the prompt.
//!
//! All header positions are collected in one pass and the reply is sliced
//! between consecutive positions, so sections never overlap and the result
//! does not depend on the order the headers appear in.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::fallback::FALLBACK_FOOTER;
use super::stage::Section;

/// Matches any of the five headers, tolerating markdown emphasis or heading
/// markers around them (`**AFTER SUMMARIZATION:**`, `**ORIGINAL TEXT**:`,
/// `## ORIGINAL TEXT:`).
/// Capture group `n` corresponds to the `n`th [`Section`].
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = Section::iter()
        .map(|section| {
            let words: Vec<String> = section.label().split(' ').map(regex::escape).collect();
            format!("({})", words.join(r"[ \t]+"))
        })
        .collect();
    let pattern = format!(r"(?i)(?:[#*_]+[ \t]*)?(?:{})[*_]*[ \t]*:[*_]*", alternatives.join("|"));
    Regex::new(&pattern).expect("section header pattern is valid")
});

/// A model reply decomposed into per-stage text.
///
/// Missing sections are empty strings. `full_response` always holds the
/// reply verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub after_spelling: String,
    #[serde(default)]
    pub after_restructuring: String,
    #[serde(default)]
    pub after_summarization: String,
    #[serde(default)]
    pub final_translation: String,
    #[serde(default)]
    pub full_response: String,
}

impl PipelineResult {
    pub fn section(&self, section: Section) -> &str {
        match section {
            Section::Original => &self.original,
            Section::AfterSpelling => &self.after_spelling,
            Section::AfterRestructuring => &self.after_restructuring,
            Section::AfterSummarization => &self.after_summarization,
            Section::FinalTranslation => &self.final_translation,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Original => &mut self.original,
            Section::AfterSpelling => &mut self.after_spelling,
            Section::AfterRestructuring => &mut self.after_restructuring,
            Section::AfterSummarization => &mut self.after_summarization,
            Section::FinalTranslation => &mut self.final_translation,
        }
    }

    /// Sections that carry text, in pipeline order.
    pub fn populated_sections(&self) -> Vec<Section> {
        Section::iter()
            .filter(|section| !self.section(*section).is_empty())
            .collect()
    }

    /// Output of the last stage that produced text, falling back to the
    /// original section.
    pub fn final_text(&self) -> &str {
        Section::iter()
            .rev()
            .map(|section| self.section(section))
            .find(|text| !text.is_empty())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy)]
struct Boundary {
    start: usize,
    body_start: usize,
    section: Section,
}

/// Decompose `response` into a [`PipelineResult`].
///
/// Never fails: text without recognizable headers yields empty sections.
/// Labels match case-insensitively. A section runs until the next header or
/// the end of the reply; the final translation also stops at the first blank
/// line. A trailing fallback footer line is not part of any section. When a
/// header repeats, its first occurrence wins.
pub fn decompose(response: &str) -> PipelineResult {
    let body = strip_fallback_footer(response);
    let mut boundaries: Vec<Boundary> = HEADER_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let section = Section::iter()
                .enumerate()
                .find_map(|(index, section)| caps.get(index + 1).map(|_| section))?;
            Some(Boundary {
                start: whole.start(),
                body_start: whole.end(),
                section,
            })
        })
        .collect();
    boundaries.sort_by_key(|boundary| boundary.start);

    let mut result = PipelineResult {
        full_response: response.to_string(),
        ..PipelineResult::default()
    };
    let mut seen = Vec::with_capacity(boundaries.len());

    for (index, boundary) in boundaries.iter().enumerate() {
        let section = boundary.section;
        if seen.contains(&section) {
            tracing::debug!(%section, offset = boundary.start, "ignoring repeated section header");
            continue;
        }
        seen.push(section);

        let end = boundaries
            .get(index + 1)
            .map_or(body.len(), |next| next.start);
        let mut text = body[boundary.body_start..end].trim_start();
        if section == Section::FinalTranslation {
            text = cut_at_blank_line(text);
        }
        *result.section_mut(section) = text.trim().to_string();
    }

    result
}

/// `response` without a closing [`FALLBACK_FOOTER`] line. Only the exact
/// footer on the last non-blank line is removed.
fn strip_fallback_footer(response: &str) -> &str {
    let trimmed = response.trim_end();
    match trimmed.strip_suffix(FALLBACK_FOOTER) {
        Some(rest) if rest.is_empty() || rest.ends_with('\n') => rest,
        _ => response,
    }
}

fn cut_at_blank_line(body: &str) -> &str {
    [body.find("\n\n"), body.find("\n\r\n")]
        .into_iter()
        .flatten()
        .min()
        .map_or(body, |cut| &body[..cut])
}
