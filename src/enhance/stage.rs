use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// One transformation in the enhancement pipeline.
///
/// Variants are declared in execution order; `PipelineStage::iter()` walks
/// them the same way the composer does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PipelineStage {
    SpellingCorrection,
    Restructuring,
    Summarization,
    Translation,
}

impl PipelineStage {
    /// Title printed after `STEP n:` in the prompt.
    pub fn step_title(self) -> &'static str {
        match self {
            Self::SpellingCorrection => "SPELLING CORRECTION",
            Self::Restructuring => "TEXT RESTRUCTURING",
            Self::Summarization => "SUMMARIZATION",
            Self::Translation => "TRANSLATION",
        }
    }

    /// How later steps refer to this stage's output.
    ///
    /// Translation is always last, so nothing ever refers back to it.
    pub fn output_descriptor(self) -> &'static str {
        match self {
            Self::SpellingCorrection => "spell-corrected text",
            Self::Restructuring => "restructured text",
            Self::Summarization => "summarized text",
            Self::Translation => "translated text",
        }
    }

    pub fn section(self) -> Section {
        match self {
            Self::SpellingCorrection => Section::AfterSpelling,
            Self::Restructuring => Section::AfterRestructuring,
            Self::Summarization => Section::AfterSummarization,
            Self::Translation => Section::FinalTranslation,
        }
    }
}

/// A labelled block in the model's reply.
///
/// The header strings are the whole contract between the composer and the
/// decomposer and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Section {
    Original,
    AfterSpelling,
    AfterRestructuring,
    AfterSummarization,
    FinalTranslation,
}

impl Section {
    /// Header label including the trailing colon.
    pub fn header(self) -> &'static str {
        match self {
            Self::Original => "ORIGINAL TEXT:",
            Self::AfterSpelling => "AFTER SPELLING CORRECTION:",
            Self::AfterRestructuring => "AFTER RESTRUCTURING:",
            Self::AfterSummarization => "AFTER SUMMARIZATION:",
            Self::FinalTranslation => "FINAL ENGLISH TRANSLATION:",
        }
    }

    /// Header label without the colon, as matched by the decomposer.
    pub fn label(self) -> &'static str {
        self.header().trim_end_matches(':')
    }

    /// Bracketed description shown under the header in the output template.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Original => "[Original text]",
            Self::AfterSpelling => "[Hebrew text after spell checking]",
            Self::AfterRestructuring => "[Hebrew text after structure improvements]",
            Self::AfterSummarization => "[Hebrew summary of the processed text]",
            Self::FinalTranslation => "[English translation of the final processed text]",
        }
    }
}
