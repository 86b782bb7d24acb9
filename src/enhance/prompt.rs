//! Builds the instruction sent to the text-generation model.
//!
//! The prompt asks the model to run the enabled stages as a chain, each one
//! consuming the previous stage's output, and to label every intermediate
//! result with the headers from [`Section`]. [`super::response::decompose`]
//! parses exactly that labelling.

use super::options::EnhancementOptions;
use super::stage::{PipelineStage, Section};

const PREAMBLE: &str = "You are a professional Hebrew text processing assistant. \
Process the following Hebrew text in a SEQUENTIAL PIPELINE where each step builds on \
the previous step's output.";

const PIPELINE_HEADING: &str = "PROCESSING PIPELINE (apply in this exact order):";

pub const OUTPUT_FORMAT_HEADING: &str =
    "OUTPUT FORMAT - Show the result after each processing step:";

const CLOSING: &str = "Do not provide explanations or commentary. \
Show only the results after each processing step.";

const ORIGINAL_DESCRIPTOR: &str = "original text";

/// Compose the enhancement prompt for `text`.
///
/// Deterministic for a given input. Step numbers count enabled stages only.
/// The text is embedded verbatim, empty or not.
pub fn compose_prompt(text: &str, options: &EnhancementOptions) -> String {
    let mut prompt = String::with_capacity(1024 + text.len() * 2);

    prompt.push_str(PREAMBLE);
    prompt.push_str("\n\n");
    prompt.push_str(Section::Original.header());
    prompt.push_str("\n\"\"\"\n");
    prompt.push_str(text);
    prompt.push_str("\n\"\"\"\n");

    if !options.is_empty() {
        prompt.push('\n');
        prompt.push_str(PIPELINE_HEADING);
        prompt.push('\n');

        let mut source = ORIGINAL_DESCRIPTOR;
        for (index, stage) in options.enabled_stages().enumerate() {
            prompt.push_str(&format!("\nSTEP {}: {}\n", index + 1, stage.step_title()));
            for line in step_instructions(stage, source, options) {
                prompt.push_str("- ");
                prompt.push_str(&line);
                prompt.push('\n');
            }
            source = stage.output_descriptor();
        }
    }

    prompt.push_str("\n\n");
    prompt.push_str(OUTPUT_FORMAT_HEADING);
    prompt.push_str("\n\n");
    prompt.push_str(Section::Original.header());
    prompt.push('\n');
    prompt.push_str(text);
    prompt.push('\n');

    for stage in options.enabled_stages() {
        let section = stage.section();
        prompt.push('\n');
        prompt.push_str(section.header());
        prompt.push('\n');
        prompt.push_str(section.placeholder());
        prompt.push('\n');
    }

    prompt.push('\n');
    prompt.push_str(CLOSING);
    prompt
}

fn step_instructions(
    stage: PipelineStage,
    source: &str,
    options: &EnhancementOptions,
) -> Vec<String> {
    let mut lines = match stage {
        PipelineStage::SpellingCorrection => vec![
            format!("Fix Hebrew spelling errors in the {source} ONLY if there are actual mistakes"),
            "Do NOT mark correctly spelled words as corrections".to_string(),
            "Only correct obvious misspellings, OCR errors, or grammatical mistakes".to_string(),
        ],
        PipelineStage::Restructuring => vec![
            format!("Improve structure and formatting of the {source} ONLY if needed"),
            "Add paragraph breaks, improve flow, fix punctuation".to_string(),
            "Do NOT mark restructuring if no actual changes were made".to_string(),
        ],
        PipelineStage::Summarization => vec![
            format!(
                "Create a {}% summary of the {source}",
                options.summary_length
            ),
            "Maintain key information and main points in Hebrew".to_string(),
        ],
        PipelineStage::Translation => vec![
            format!(
                "Translate the {source} to English using {} style",
                options.translation_style
            ),
            options.translation_style.guidance().to_string(),
        ],
    };

    if options.track_changes {
        match stage {
            PipelineStage::SpellingCorrection => {
                lines.push("Mark real corrections as [CORRECTED: old→new]".to_string());
            }
            PipelineStage::Restructuring => {
                lines.push("Mark real changes as [RESTRUCTURED]".to_string());
            }
            PipelineStage::Summarization | PipelineStage::Translation => {}
        }
    }

    lines
}
