//! Locally fabricated replies used when the enhancement backend is
//! unreachable. They use the same section headers as a real model reply so
//! [`super::response::decompose`] handles both alike.

use super::options::{EnhancementOptions, TranslationStyle};
use super::stage::{PipelineStage, Section};

pub const FALLBACK_FOOTER: &str = "--- END FALLBACK RESPONSE ---";

const DEMO_MISSPELLING: &str = "וואלה";
const DEMO_CORRECTION: &str = "ואללה";

/// Build a demonstration reply for `text`.
///
/// `banner` is shown in the opening fence line, typically the reason the
/// real backend could not be used.
pub fn demo_response(text: &str, options: &EnhancementOptions, banner: &str) -> String {
    let mut reply = format!("--- {banner} ---\n\n");
    push_section(&mut reply, Section::Original, text, None);

    let mut current = text.to_string();
    for stage in options.enabled_stages() {
        match stage {
            PipelineStage::SpellingCorrection => {
                current = current.replace(DEMO_MISSPELLING, DEMO_CORRECTION);
                let note = format!("[DEMO: Corrected \"{DEMO_MISSPELLING}\" to \"{DEMO_CORRECTION}\"]");
                push_section(&mut reply, stage.section(), &current, Some(&note));
            }
            PipelineStage::Restructuring => {
                current = current.replace(". ", ".\n");
                push_section(
                    &mut reply,
                    stage.section(),
                    &current,
                    Some("[DEMO: Improved paragraph structure]"),
                );
            }
            PipelineStage::Summarization => {
                current = truncate_words(&current, options.summary_length);
                let note = format!("[DEMO: {}% summary]", options.summary_length);
                push_section(&mut reply, stage.section(), &current, Some(&note));
            }
            PipelineStage::Translation => {
                push_section(
                    &mut reply,
                    stage.section(),
                    demo_translation(options.translation_style),
                    None,
                );
            }
        }
    }

    if options.is_empty() {
        reply.push_str("No enhancements selected - original text returned.\n");
    }

    reply.push('\n');
    reply.push_str(FALLBACK_FOOTER);
    reply
}

fn push_section(reply: &mut String, section: Section, body: &str, note: Option<&str>) {
    reply.push_str(section.header());
    reply.push('\n');
    reply.push_str(body);
    reply.push('\n');
    if let Some(note) = note {
        reply.push_str(note);
        reply.push('\n');
    }
    reply.push('\n');
}

/// Keep the leading `percentage`% of space-separated words, at least one.
fn truncate_words(text: &str, percentage: u8) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    let keep = (words.len() * usize::from(percentage) / 100).max(1);
    format!("{}...", words[..keep.min(words.len())].join(" "))
}

fn demo_translation(style: TranslationStyle) -> &'static str {
    match style {
        TranslationStyle::Literal => {
            "I write text beautiful. [DEMO: Literal word-for-word translation]"
        }
        TranslationStyle::Natural => "I'm writing beautiful text. [DEMO: Natural fluent translation]",
        TranslationStyle::Formal => {
            "This document demonstrates Hebrew text composition. [DEMO: Formal translation]"
        }
    }
}
