//! `load` command: upload a posts file and read the table back.

use std::path::Path;

use scamwatch_core::{AppConfig, PostRecord};
use scamwatch_db::{load_posts, TableClient};

pub(crate) async fn run(config: &AppConfig, file: &Path) -> anyhow::Result<()> {
    let auth = config.table_auth()?;
    let client = TableClient::new(&auth.url, &auth.key, config.request_timeout_secs)?;

    let json = std::fs::read_to_string(file)?;
    let records: Vec<PostRecord> = serde_json::from_str(&json)?;

    println!("starting upload of {} posts...", records.len());
    let summary = load_posts(&client, &records).await;
    println!(
        "upload summary: {} succeeded, {} failed, {} total",
        summary.success,
        summary.failure,
        records.len()
    );

    // Informal verification: read the table back and print it. No diffing
    // against the input set.
    match client.list_posts().await {
        Ok(rows) => {
            println!("found {} posts in table:", rows.len());
            for row in rows {
                println!("  {} | {} | {}", row.name, row.username, row.date);
            }
        }
        Err(e) => eprintln!("error: verification read-back failed: {e}"),
    }

    Ok(())
}
