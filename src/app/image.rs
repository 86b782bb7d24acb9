use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;

/// Image types the recognition endpoint accepts.
pub const RECOGNIZABLE_MIME_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/bmp", "image/webp"];

pub fn detect_mime(bytes: &[u8]) -> Option<&'static str> {
    infer::get(bytes).map(|kind| kind.mime_type())
}

pub fn detect_mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}

/// MIME type of an image file: magic bytes first, then the extension.
pub fn mime_for(bytes: &[u8], path: &Path) -> &'static str {
    detect_mime(bytes)
        .or_else(|| detect_mime_from_extension(path))
        .unwrap_or("application/octet-stream")
}

pub fn to_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Decode a `data:` URL or bare base64 payload.
pub fn decode_image_data(data: &str) -> Result<Vec<u8>> {
    let payload = match data.split_once(";base64,") {
        Some((prefix, payload)) if prefix.starts_with("data:") => payload,
        _ => data,
    };
    STANDARD
        .decode(payload.trim())
        .context("Image data is not valid base64")
}
