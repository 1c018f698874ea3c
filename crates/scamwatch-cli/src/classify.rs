//! `classify` command: scam verdicts for a text or a collected posts file.

use std::path::PathBuf;

use scamwatch_classifier::GroqClient;
use scamwatch_core::{AppConfig, PostRecord};

pub(crate) async fn run(
    config: &AppConfig,
    text: Option<String>,
    file: Option<PathBuf>,
) -> anyhow::Result<()> {
    let api_key = config.groq_api_key()?;
    let client = GroqClient::new(&api_key, config.request_timeout_secs)?;

    if let Some(text) = text {
        let verdict = client.classify(&text).await;
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(());
    }

    let Some(file) = file else {
        anyhow::bail!("provide either --text or --file");
    };

    let json = std::fs::read_to_string(&file)?;
    let records: Vec<PostRecord> = serde_json::from_str(&json)?;

    for record in &records {
        let verdict = client.classify(&record.text).await;
        println!("{}:", record.username);
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    }

    Ok(())
}
