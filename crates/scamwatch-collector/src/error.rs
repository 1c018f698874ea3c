use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    /// Any failure surfaced by the Chrome DevTools session. `headless_chrome`
    /// reports errors as `anyhow::Error`, so only the message survives.
    #[error("browser error: {0}")]
    Browser(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CollectError {
    pub(crate) fn browser(e: anyhow::Error) -> Self {
        Self::Browser(e.to_string())
    }
}
