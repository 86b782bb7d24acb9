#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod enhance;
pub mod error;
#[doc(hidden)]
pub mod utils;

pub use cli::Cli;
pub use config::Config;
pub use enhance::{EnhancementOptions, PipelineResult, compose_prompt, decompose};
pub use error::{BackendError, ConfigError};
