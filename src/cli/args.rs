use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::enhance::{EnhancementOptions, TranslationStyle};

/// `Digi-Ktav` - enhancement pipeline for handwritten Hebrew OCR output.
#[derive(Parser, Debug)]
#[command(name = "digiktav")]
#[command(version)]
#[command(about = "Compose, run and parse the Digi-Ktav text enhancement pipeline.", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.digiktav/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of config
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the enhancement prompt for a text
    Prompt {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        stages: StageArgs,
    },

    /// Split a model reply into its pipeline sections
    Parse {
        /// File holding the reply (default: stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the sections as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the pipeline through the enhancement backend
    Enhance {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        stages: StageArgs,

        /// Print the sections as JSON
        #[arg(long)]
        json: bool,

        /// Print the reply verbatim instead of the parsed sections
        #[arg(long, conflicts_with = "json")]
        raw: bool,
    },

    /// Print the offline demonstration reply for a text
    Demo {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        stages: StageArgs,
    },

    /// Recognize handwriting in a scanned image through the backend
    Recognize {
        /// Image to upload (jpeg, png, bmp or webp)
        image: PathBuf,

        /// Also run the recognized text through the enhancement pipeline
        #[arg(long)]
        enhance: bool,

        #[command(flatten)]
        stages: StageArgs,

        /// Print the sections as JSON
        #[arg(long, requires = "enhance")]
        json: bool,
    },

    /// Compress a scanned image through the backend
    Compress {
        /// Image to upload
        image: PathBuf,

        /// Where to write the compressed image
        #[arg(short, long)]
        output: PathBuf,

        /// Target size in KB (default: from config)
        #[arg(long)]
        max_size_kb: Option<u32>,

        /// Longest edge in pixels (default: from config)
        #[arg(long)]
        max_dimension: Option<u32>,
    },

    /// Show the effective configuration
    Config,
}

/// Where the text to enhance comes from. Stdin when neither is given.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Text to process
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Stage selection. When no stage flag is given the config defaults apply.
#[derive(Args, Debug, Default, Clone)]
pub struct StageArgs {
    /// Correct spelling and OCR errors
    #[arg(long)]
    pub spelling: bool,

    /// Improve paragraphing, flow and punctuation
    #[arg(long)]
    pub structure: bool,

    /// Summarize to PCT percent (snapped to 5, 20, 35 or 50)
    #[arg(long, value_name = "PCT")]
    pub summarize: Option<f64>,

    /// Translate to English: literal, natural or formal
    #[arg(long, value_name = "STYLE")]
    pub translate: Option<TranslationStyle>,

    /// Ask the model to mark corrections inline
    #[arg(long)]
    pub track_changes: bool,
}

impl StageArgs {
    fn selects_stages(&self) -> bool {
        self.spelling || self.structure || self.summarize.is_some() || self.translate.is_some()
    }

    pub fn resolve(&self, defaults: &EnhancementOptions) -> EnhancementOptions {
        let mut options = if self.selects_stages() {
            let mut options = EnhancementOptions::default();
            if self.spelling {
                options = options.with_spelling_correction();
            }
            if self.structure {
                options = options.with_structuring();
            }
            if let Some(pct) = self.summarize {
                options = options.with_summary(pct);
            }
            if let Some(style) = self.translate {
                options = options.with_translation(style);
            }
            options.track_changes = defaults.track_changes;
            options
        } else {
            defaults.clone()
        };
        options.track_changes |= self.track_changes;
        options
    }
}
