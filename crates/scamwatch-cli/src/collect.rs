//! `collect` command: drive the browser session and write the posts file.

use std::path::Path;
use std::time::Duration;

use scamwatch_collector::{collect_posts_or_empty, write_posts, ChromeCollector, CollectError};
use scamwatch_core::{AppConfig, PostRecord};

pub(crate) async fn run(
    config: &AppConfig,
    query: &str,
    max_results: usize,
    out: &Path,
) -> anyhow::Result<()> {
    let credentials = config.collector_credentials()?;
    let element_wait = Duration::from_secs(config.element_wait_secs);
    let scroll_settle = Duration::from_millis(config.scroll_settle_ms);
    let query = query.to_owned();

    // The whole browser session is blocking; run it off the async runtime.
    let records = tokio::task::spawn_blocking(
        move || -> Result<Option<Vec<PostRecord>>, CollectError> {
            let mut collector = ChromeCollector::new(element_wait, scroll_settle)?;

            if !collector.login(&credentials) {
                // Fail closed: abort the run gracefully, session released.
                collector.close();
                return Ok(None);
            }

            // A browser failure from here on yields an empty result; the
            // posts file still gets written.
            let records = match collector.search(&query) {
                Ok(()) => collect_posts_or_empty(&mut collector, max_results),
                Err(e) => {
                    tracing::warn!(error = %e, "error collecting posts");
                    Vec::new()
                }
            };
            collector.close();
            Ok(Some(records))
        },
    )
    .await
    .map_err(|e| anyhow::anyhow!("collection task failed: {e}"))??;

    let Some(records) = records else {
        eprintln!("error: login failed — check EMAIL, USER, and PASS");
        return Ok(());
    };

    write_posts(out, &records)?;
    println!("collected {} posts to {}", records.len(), out.display());
    Ok(())
}
