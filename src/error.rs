use thiserror::Error;

// ─── Config errors ───────────────────────────────────────────────────────────

/// Errors raised while reading, parsing or validating `config.toml`.
///
/// The config layer returns `anyhow::Result` with these as the source, so
/// callers can `downcast_ref::<ConfigError>()` beneath the context chain.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Backend errors ──────────────────────────────────────────────────────────

/// Failures talking to the enhancement backend. The enhancement pipeline
/// itself cannot fail.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to {endpoint} failed: {message}")]
    Request { endpoint: String, message: String },

    /// Non-2xx reply. `detail` is the server's own message when it sent one.
    #[error("{detail}")]
    Status { status: u16, detail: String },

    /// 2xx reply with `success: false`.
    #[error("{0}")]
    Rejected(String),

    #[error("malformed response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}
