use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
}
