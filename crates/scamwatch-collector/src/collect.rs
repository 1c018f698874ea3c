//! The scan/scroll collection loop and the posts file writer.

use std::collections::HashSet;
use std::path::Path;

use scamwatch_core::PostRecord;
use serde::Serialize;

use crate::error::CollectError;
use crate::source::PostSource;

/// Collect up to `max_results` unique posts from a source.
///
/// Repeatedly scans the rendered elements, appends posts whose identifier has
/// not been seen before, and triggers another render cycle. Stops when
/// `max_results` is reached or when a render cycle leaves the rendered
/// element count unchanged (no further content is loading).
///
/// # Errors
///
/// Returns [`CollectError`] only if the source itself fails; per-element
/// extraction failures are handled inside the source.
pub fn collect_posts<S: PostSource>(
    source: &mut S,
    max_results: usize,
) -> Result<Vec<PostRecord>, CollectError> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut records: Vec<PostRecord> = Vec::new();

    loop {
        let scan = source.scan()?;

        for raw in scan.posts {
            if records.len() >= max_results {
                break;
            }
            if !seen.insert(raw.id.clone()) {
                continue;
            }
            tracing::info!(id = %raw.id, username = %raw.username, "found post");
            records.push(raw.into());
        }

        if records.len() >= max_results {
            break;
        }

        let rendered_after = source.render_more()?;
        if rendered_after == scan.rendered {
            tracing::info!(
                collected = records.len(),
                "no new posts rendered after scroll — stopping"
            );
            break;
        }
    }

    Ok(records)
}

/// Collect posts, degrading any source failure to an empty result.
///
/// A browser error mid-collection (the page can no longer be queried, a
/// scroll cannot be executed) is logged and yields no records; it never
/// aborts the run. The posts file still gets written, just empty.
pub fn collect_posts_or_empty<S: PostSource>(source: &mut S, max_results: usize) -> Vec<PostRecord> {
    match collect_posts(source, max_results) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(error = %e, "error collecting posts");
            Vec::new()
        }
    }
}

/// Wire shape of one entry in the collector's output file.
#[derive(Serialize)]
struct PostFileEntry<'a> {
    username: &'a str,
    text: &'a str,
    tweet_id: &'a str,
}

/// Write collected posts to a JSON file as `{username, text, tweet_id}`
/// objects.
///
/// # Errors
///
/// Returns [`CollectError::Json`] on serialization failure or
/// [`CollectError::Io`] if the file cannot be written.
pub fn write_posts(path: &Path, records: &[PostRecord]) -> Result<(), CollectError> {
    let entries: Vec<PostFileEntry<'_>> = records
        .iter()
        .map(|r| PostFileEntry {
            username: &r.username,
            text: &r.text,
            tweet_id: r.post_id.as_deref().unwrap_or(""),
        })
        .collect();

    let json = serde_json::to_string_pretty(&entries)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
