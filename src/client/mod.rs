//! HTTP wrapper around the enhancement backend.
//!
//! The backend owns handwriting recognition and the model call. This client
//! uploads scans, ships text and options there and, when enhancement goes
//! wrong, substitutes a local demonstration reply so callers always get
//! something [`crate::enhance::decompose`] can split.

mod http;
pub mod types;

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::BackendConfig;
use crate::enhance::{EnhancementOptions, demo_response};
use crate::error::BackendError;
use crate::utils::text::preview;

pub use http::build_backend_client;
use types::{
    CompressImageRequest, CompressImageResponse, EnhanceTextRequest, EnhanceTextResponse,
    ErrorBody, ProcessImageResponse,
};

const RECOGNIZE_PATH: &str = "process-image/";
const ENHANCE_PATH: &str = "enhance-text/";
const COMPRESS_PATH: &str = "compress-image/";

/// Where an [`EnhancedText`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseSource {
    Backend,
    Fallback { reason: String },
}

/// A model reply, or a local stand-in for one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancedText {
    pub text: String,
    pub source: ResponseSource,
}

impl EnhancedText {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ResponseSource::Fallback { .. })
    }
}

/// Text recognized from an uploaded scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedText {
    pub filename: String,
    pub text: String,
}

/// Result of [`EnhancementClient::compress_image`]. `data` is the original
/// input when compression was not possible.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedImage {
    pub data: String,
    pub compressed: bool,
    pub original_size_kb: Option<f64>,
    pub compressed_size_kb: Option<f64>,
}

pub struct EnhancementClient {
    client: Client,
    backend: BackendConfig,
}

impl EnhancementClient {
    pub fn new(backend: &BackendConfig) -> Self {
        Self {
            client: build_backend_client(backend),
            backend: backend.clone(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        self.backend.endpoint(path)
    }

    /// Upload a scanned page as the multipart `file` field and return the
    /// recognized text. Uses the longer recognition timeout.
    pub async fn recognize_image(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        mime: &str,
    ) -> Result<RecognizedText, BackendError> {
        let endpoint = self.endpoint(RECOGNIZE_PATH);
        info!(filename, bytes = bytes.len(), mime, "uploading image for recognition");

        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime)
            .map_err(|e| BackendError::Request {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            })?;
        let request = self
            .client
            .post(&endpoint)
            .timeout(Duration::from_secs(self.backend.ocr_timeout_secs))
            .multipart(Form::new().part("file", part));

        let reply: ProcessImageResponse = send_for_json(&endpoint, request).await?;
        info!(
            chars = reply.recognized_text.chars().count(),
            preview = %preview(&reply.recognized_text, 100),
            "received recognized text"
        );
        Ok(RecognizedText {
            filename: reply.filename.unwrap_or_else(|| filename.to_string()),
            text: reply.recognized_text,
        })
    }

    /// Ask the backend to run the pipeline and return its raw reply.
    pub async fn request_enhancement(
        &self,
        text: &str,
        options: &EnhancementOptions,
    ) -> Result<String, BackendError> {
        info!(
            chars = text.chars().count(),
            preview = %preview(text, 100),
            stages = ?options.enabled_stages().collect::<Vec<_>>(),
            "requesting text enhancement"
        );

        let reply: EnhanceTextResponse = self
            .post_json(ENHANCE_PATH, &EnhanceTextRequest { text, options })
            .await?;

        if !reply.success {
            return Err(BackendError::Rejected(
                reply
                    .error
                    .unwrap_or_else(|| "Enhancement failed on server".to_string()),
            ));
        }

        let enhanced = reply.enhanced_text.unwrap_or_default();
        info!(chars = enhanced.chars().count(), "received enhanced text");
        Ok(enhanced)
    }

    /// Like [`Self::request_enhancement`] but never fails: any error yields
    /// a demonstration reply labelled with the failure reason.
    pub async fn enhance(&self, text: &str, options: &EnhancementOptions) -> EnhancedText {
        match self.request_enhancement(text, options).await {
            Ok(text) => EnhancedText {
                text,
                source: ResponseSource::Backend,
            },
            Err(err) => {
                let reason = err.to_string();
                warn!(error = %reason, "enhancement backend failed, using fallback reply");
                let banner = format!("SERVER ENHANCEMENT FAILED ({reason})");
                EnhancedText {
                    text: demo_response(text, options, &banner),
                    source: ResponseSource::Fallback { reason },
                }
            }
        }
    }

    pub async fn request_compression(
        &self,
        image_data: &str,
        max_size_kb: u32,
        max_dimension: u32,
    ) -> Result<CompressImageResponse, BackendError> {
        let reply: CompressImageResponse = self
            .post_json(
                COMPRESS_PATH,
                &CompressImageRequest {
                    image_data,
                    max_size_kb,
                    max_dimension,
                },
            )
            .await?;

        if !reply.success {
            return Err(BackendError::Rejected(
                reply
                    .error
                    .unwrap_or_else(|| "Image compression failed on server".to_string()),
            ));
        }
        Ok(reply)
    }

    /// Compress a base64 image on the backend, returning the input unchanged
    /// on any failure.
    pub async fn compress_image(
        &self,
        image_data: &str,
        max_size_kb: u32,
        max_dimension: u32,
    ) -> CompressedImage {
        let unchanged = || CompressedImage {
            data: image_data.to_string(),
            compressed: false,
            original_size_kb: None,
            compressed_size_kb: None,
        };

        match self
            .request_compression(image_data, max_size_kb, max_dimension)
            .await
        {
            Ok(CompressImageResponse {
                compressed_image: Some(data),
                original_size_kb,
                compressed_size_kb,
                ..
            }) => {
                info!(
                    original_kb = original_size_kb.unwrap_or_default(),
                    compressed_kb = compressed_size_kb.unwrap_or_default(),
                    "image compressed on server"
                );
                CompressedImage {
                    data,
                    compressed: true,
                    original_size_kb,
                    compressed_size_kb,
                }
            }
            Ok(_) => {
                warn!("compression reply carried no image, keeping original");
                unchanged()
            }
            Err(err) => {
                warn!(error = %err, "image compression failed, keeping original");
                unchanged()
            }
        }
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, BackendError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let endpoint = self.endpoint(path);
        let request = self.client.post(&endpoint).json(body);
        send_for_json(&endpoint, request).await
    }
}

async fn send_for_json<R: DeserializeOwned>(
    endpoint: &str,
    request: RequestBuilder,
) -> Result<R, BackendError> {
    let request_error = |e: reqwest::Error| BackendError::Request {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    };
    let response = request.send().await.map_err(request_error)?;

    if !response.status().is_success() {
        return Err(status_error(response).await);
    }

    let raw = response.text().await.map_err(request_error)?;
    serde_json::from_str(&raw).map_err(|e| BackendError::Decode {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

async fn status_error(response: Response) -> BackendError {
    let status = response.status().as_u16();
    let detail = response
        .text()
        .await
        .ok()
        .and_then(|raw| serde_json::from_str::<ErrorBody>(&raw).ok())
        .and_then(|body| body.detail_text())
        .unwrap_or_else(|| format!("Server error: {status}"));
    BackendError::Status { status, detail }
}
