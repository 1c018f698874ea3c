//! `transcribe` command: video → transcript text.

use std::path::Path;

use scamwatch_core::AppConfig;
use scamwatch_transcriber::{transcribe_video, SpeechClient};

pub(crate) async fn run(config: &AppConfig, video: &Path) -> anyhow::Result<()> {
    let speech_url = config.speech_api_url()?;
    let client = SpeechClient::new(&speech_url, config.request_timeout_secs)?;

    println!("Transcribed Text:");
    match transcribe_video(&client, video).await {
        Ok(text) => println!("{text}"),
        // The transcriber's contract is an error string, not a failed command.
        Err(e) => println!("An error occurred: {e}"),
    }

    Ok(())
}
