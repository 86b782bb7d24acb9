use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enhance::EnhancementOptions;

// ── /enhance-text/ ───────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct EnhanceTextRequest<'a> {
    pub text: &'a str,
    pub options: &'a EnhancementOptions,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceTextResponse {
    pub success: bool,
    #[serde(default)]
    pub enhanced_text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// ── /process-image/ ──────────────────────────────────────────────

/// Reply of the handwriting recognition endpoint. The image itself goes up
/// as the multipart `file` field.
#[derive(Debug, Deserialize)]
pub struct ProcessImageResponse {
    #[serde(default)]
    pub filename: Option<String>,
    pub recognized_text: String,
}

// ── /compress-image/ ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CompressImageRequest<'a> {
    pub image_data: &'a str,
    pub max_size_kb: u32,
    pub max_dimension: u32,
}

#[derive(Debug, Deserialize)]
pub struct CompressImageResponse {
    pub success: bool,
    #[serde(default)]
    pub compressed_image: Option<String>,
    #[serde(default)]
    pub original_size_kb: Option<f64>,
    #[serde(default)]
    pub compressed_size_kb: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

// ── Error bodies ─────────────────────────────────────────────────

/// Error payload of a non-2xx reply. `detail` is a string for handled
/// errors and a list of objects for request validation failures.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            Value::Null | Value::String(_) => None,
            other => Some(other.to_string()),
        }
    }
}
