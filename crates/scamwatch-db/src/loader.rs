//! Batch upload of post records into the hosted table.

use scamwatch_core::PostRecord;

use crate::client::{InsertPost, TableClient};
use crate::normalize::normalize_date;

/// Outcome of one load run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub success: usize,
    pub failure: usize,
}

/// Insert each record into the remote table, one attempt per record.
///
/// Dates are normalized first (parse failures keep the raw string). An insert
/// counts as a success only when the service reports the inserted row back;
/// remote-call failures are logged and counted, never propagated, so one bad
/// record does not abort the batch.
pub async fn load_posts(client: &TableClient, records: &[PostRecord]) -> LoadSummary {
    let mut summary = LoadSummary::default();

    for record in records {
        let date = normalize_date(&record.date);
        let payload = InsertPost {
            name: &record.name,
            username: &record.username,
            description: &record.text,
            date: &date,
        };

        tracing::info!(username = %record.username, "uploading post");

        match client.insert_post(&payload).await {
            Ok(true) => {
                tracing::info!(username = %record.username, "post uploaded");
                summary.success += 1;
            }
            Ok(false) => {
                tracing::warn!(username = %record.username, "insert reported no rows");
                summary.failure += 1;
            }
            Err(e) => {
                tracing::warn!(username = %record.username, error = %e, "insert failed");
                summary.failure += 1;
            }
        }
    }

    summary
}
