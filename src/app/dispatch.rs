use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

use super::image::{RECOGNIZABLE_MIME_TYPES, decode_image_data, mime_for, to_data_url};
use super::render::{render_json, render_sections};
use super::status::render_status;
use crate::Config;
use crate::cli::{Cli, Commands, read_stdin, read_text_file};
use crate::client::{EnhancementClient, RecognizedText, ResponseSource};
use crate::enhance::{EnhancementOptions, compose_prompt, decompose, demo_response};

const DEMO_BANNER: &str = "DEMO MODE RESPONSE (no enhancement backend used)";

pub async fn dispatch(cli: Cli, config: &Config) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli.command, config, &mut out).await?;
    out.flush().context("Failed to flush stdout")
}

/// Execute one command, writing its user-facing output to `out`.
pub async fn run(command: Commands, config: &Config, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Prompt { input, stages } => {
            let text = input.read()?;
            let options = stages.resolve(&config.enhancement);
            writeln!(out, "{}", compose_prompt(&text, &options))?;
        }

        Commands::Parse { file, json } => {
            let reply = match file {
                Some(path) => read_text_file(&path)?,
                None => read_stdin()?,
            };
            let result = decompose(&reply);
            if result.populated_sections().is_empty() {
                warn!("reply contains no recognised section headers");
            }
            let rendered = if json {
                render_json(&result)?
            } else {
                render_sections(&result)
            };
            writeln!(out, "{rendered}")?;
        }

        Commands::Enhance {
            input,
            stages,
            json,
            raw,
        } => {
            let text = input.read()?;
            let options = stages.resolve(&config.enhancement);
            let client = EnhancementClient::new(&config.backend);
            enhance(&client, &text, &options, json, raw, out).await?;
        }

        Commands::Recognize {
            image,
            enhance: run_pipeline,
            stages,
            json,
        } => {
            let client = EnhancementClient::new(&config.backend);
            let recognized = recognize(&client, &image).await?;
            if run_pipeline {
                let options = stages.resolve(&config.enhancement);
                enhance(&client, &recognized.text, &options, json, false, out).await?;
            } else {
                writeln!(out, "{}", recognized.text)?;
            }
        }

        Commands::Demo { input, stages } => {
            let text = input.read()?;
            let options = stages.resolve(&config.enhancement);
            writeln!(out, "{}", demo_response(&text, &options, DEMO_BANNER))?;
        }

        Commands::Compress {
            image,
            output,
            max_size_kb,
            max_dimension,
        } => {
            compress(
                config,
                &image,
                &output,
                max_size_kb.unwrap_or(config.image.max_size_kb),
                max_dimension.unwrap_or(config.image.max_dimension),
                out,
            )
            .await?;
        }

        Commands::Config => {
            writeln!(out, "{}", render_status(config))?;
        }
    }
    Ok(())
}

async fn enhance(
    client: &EnhancementClient,
    text: &str,
    options: &EnhancementOptions,
    json: bool,
    raw: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let enhanced = client.enhance(text, options).await;
    if let ResponseSource::Fallback { reason } = &enhanced.source {
        warn!(%reason, "showing demonstration output");
    }

    if raw {
        writeln!(out, "{}", enhanced.text)?;
        return Ok(());
    }
    let result = decompose(&enhanced.text);
    let rendered = if json {
        render_json(&result)?
    } else {
        render_sections(&result)
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}

async fn recognize(client: &EnhancementClient, image: &Path) -> Result<RecognizedText> {
    let bytes = fs::read(image).with_context(|| format!("Failed to read {}", image.display()))?;
    let mime = mime_for(&bytes, image);
    if !RECOGNIZABLE_MIME_TYPES.contains(&mime) {
        warn!(mime, "image type is not one the recognizer accepts");
    }
    let filename = image
        .file_name()
        .map_or_else(|| "upload".to_string(), |name| name.to_string_lossy().into_owned());

    let recognized = client
        .recognize_image(&filename, bytes, mime)
        .await
        .with_context(|| format!("Recognition failed for {}", image.display()))?;
    if recognized.text.trim().is_empty() {
        warn!(filename = %recognized.filename, "no text recognized");
    }
    Ok(recognized)
}

async fn compress(
    config: &Config,
    image: &Path,
    output: &Path,
    max_size_kb: u32,
    max_dimension: u32,
    out: &mut dyn Write,
) -> Result<()> {
    let bytes = fs::read(image).with_context(|| format!("Failed to read {}", image.display()))?;
    let data = to_data_url(&bytes, mime_for(&bytes, image));

    let client = EnhancementClient::new(&config.backend);
    let compressed = client
        .compress_image(&data, max_size_kb, max_dimension)
        .await;

    let written = if compressed.compressed {
        decode_image_data(&compressed.data)?
    } else {
        bytes
    };
    fs::write(output, &written)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(path = %output.display(), bytes = written.len(), "wrote image");

    match (compressed.original_size_kb, compressed.compressed_size_kb) {
        (Some(before), Some(after)) if compressed.compressed => {
            writeln!(out, "{before:.1}KB → {after:.1}KB: {}", output.display())?;
        }
        _ if compressed.compressed => writeln!(out, "compressed: {}", output.display())?,
        _ => writeln!(out, "unchanged (compression unavailable): {}", output.display())?,
    }
    Ok(())
}
