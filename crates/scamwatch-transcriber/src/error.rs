use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("audio extraction failed: {reason}")]
    Ffmpeg { reason: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("speech API error ({status}): {body}")]
    Api { status: u16, body: String },
}
