use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

use super::args::InputArgs;

impl InputArgs {
    /// Resolve the input text from `--text`, `--file` or stdin, in that order.
    pub fn read(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        match &self.file {
            Some(path) => read_text_file(path),
            None => read_stdin(),
        }
    }
}

pub fn read_text_file(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(strip_trailing_newlines(raw))
}

pub fn read_stdin() -> Result<String> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read stdin")?;
    Ok(strip_trailing_newlines(raw))
}

fn strip_trailing_newlines(mut raw: String) -> String {
    let kept = raw.trim_end_matches(['\n', '\r']).len();
    raw.truncate(kept);
    raw
}
