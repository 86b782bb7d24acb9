//! Text enhancement pipeline: prompt composition on the way out, section
//! decomposition on the way back.

pub mod fallback;
pub mod options;
pub mod prompt;
pub mod response;
pub mod stage;

pub use fallback::demo_response;
pub use options::{
    EnhancementOptions, SUMMARY_PERCENTAGES, TranslationStyle, closest_summary_percentage,
};
pub use prompt::compose_prompt;
pub use response::{PipelineResult, decompose};
pub use stage::{PipelineStage, Section};
