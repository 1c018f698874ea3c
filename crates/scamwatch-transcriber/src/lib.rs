//! Video-to-text transcription.
//!
//! Extracts the audio track from a video file into a scoped temporary WAV
//! (removed on every exit path, success or failure), submits it to a hosted
//! speech-recognition service, and returns the recognized text.

use std::path::Path;

pub mod audio;
pub mod error;
pub mod speech;

pub use audio::{extract_audio, TempWav};
pub use error::TranscribeError;
pub use speech::SpeechClient;

/// Transcribe the audio track of `video_path` to text.
///
/// ffmpeg extraction runs on a blocking thread; the WAV guard is dropped —
/// and the temp file removed — whether recognition succeeds or fails.
///
/// # Errors
///
/// Returns [`TranscribeError`] if extraction or recognition fails. Callers at
/// the CLI boundary convert this into a printed error string rather than a
/// process failure.
pub async fn transcribe_video(
    speech: &SpeechClient,
    video_path: &Path,
) -> Result<String, TranscribeError> {
    let path = video_path.to_owned();
    let wav = tokio::task::spawn_blocking(move || extract_audio(&path))
        .await
        .map_err(|e| TranscribeError::Ffmpeg {
            reason: format!("audio extraction task failed: {e}"),
        })??;

    speech.transcribe_wav(wav.path()).await
}
