//! Audio track extraction via ffmpeg.

use std::path::{Path, PathBuf};

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};

use crate::error::TranscribeError;

/// A temporary WAV file that is removed when dropped.
///
/// The guard is created before ffmpeg runs, so the file is cleaned up on
/// every path out of the transcription chain, success or failure.
#[derive(Debug)]
pub struct TempWav {
    path: PathBuf,
}

impl TempWav {
    pub(crate) fn at_unique_path() -> Self {
        let path = std::env::temp_dir().join(format!("scamwatch-audio-{}.wav", uuid::Uuid::new_v4()));
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempWav {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to remove temp audio file");
            }
        }
    }
}

/// Extract the audio stream of a video container into a 16 kHz mono WAV at a
/// unique temporary path.
///
/// # Errors
///
/// Returns [`TranscribeError::Ffmpeg`] if ffmpeg cannot be spawned, reports
/// errors, or produces no output file (e.g. the container has no audio
/// track). The temp file, if partially written, is removed by the returned
/// guard's `Drop` on the error path too.
pub fn extract_audio(video_path: &Path) -> Result<TempWav, TranscribeError> {
    let wav = TempWav::at_unique_path();

    let mut child = FfmpegCommand::new()
        .hide_banner()
        .overwrite()
        .input(video_path.to_string_lossy())
        .args(["-vn", "-acodec", "pcm_s16le", "-ar", "16000", "-ac", "1"])
        .output(wav.path().to_string_lossy())
        .spawn()
        .map_err(|e| TranscribeError::Ffmpeg {
            reason: format!("failed to spawn ffmpeg: {e}"),
        })?;

    let mut errors: Vec<String> = Vec::new();
    child
        .iter()
        .map_err(|e| TranscribeError::Ffmpeg {
            reason: format!("failed to read ffmpeg events: {e}"),
        })?
        .for_each(|event| match event {
            FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, msg) | FfmpegEvent::Error(msg) => {
                errors.push(msg);
            }
            FfmpegEvent::Log(level, msg) => {
                tracing::debug!(?level, "{msg}");
            }
            _ => {}
        });

    if !errors.is_empty() {
        return Err(TranscribeError::Ffmpeg {
            reason: errors.join("; "),
        });
    }
    if !wav.path().exists() {
        return Err(TranscribeError::Ffmpeg {
            reason: format!(
                "ffmpeg produced no output for {}",
                video_path.display()
            ),
        });
    }

    tracing::info!(wav = %wav.path().display(), "audio track extracted");
    Ok(wav)
}
