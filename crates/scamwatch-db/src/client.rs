//! REST client for the hosted `posts` table.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::DbError;

const POSTS_TABLE: &str = "posts";

/// Insert payload for one post row.
#[derive(Debug, Serialize)]
pub struct InsertPost<'a> {
    pub name: &'a str,
    pub username: &'a str,
    pub description: &'a str,
    /// ISO date-time string, or the raw source string when normalization
    /// failed.
    pub date: &'a str,
}

/// A row read back from the `posts` table.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRow {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
}

/// Client for the PostgREST interface of the hosted table.
///
/// Use [`TableClient::new`] with the project URL and access key; tests point
/// it at a wiremock server instead.
pub struct TableClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TableClient {
    /// Creates a new client for the given project base URL and access key.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Result<Self, DbError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("scamwatch/0.1 (table-loader)")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{POSTS_TABLE}", self.base_url)
    }

    /// Insert one post row.
    ///
    /// Returns `true` if the service's returned representation contains the
    /// inserted row, `false` if it came back empty. One attempt, no retry.
    ///
    /// # Errors
    ///
    /// - [`DbError::Api`] if the service returns a non-2xx status.
    /// - [`DbError::Http`] on network failure or a malformed reply.
    pub async fn insert_post(&self, payload: &InsertPost<'_>) -> Result<bool, DbError> {
        let response = self
            .client
            .post(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(DbError::Api { status, body });
        }

        let rows: Vec<serde_json::Value> = response.json().await?;
        Ok(!rows.is_empty())
    }

    /// Read back every row of the table.
    ///
    /// # Errors
    ///
    /// - [`DbError::Api`] if the service returns a non-2xx status.
    /// - [`DbError::Http`] on network failure or a malformed reply.
    pub async fn list_posts(&self) -> Result<Vec<PostRow>, DbError> {
        let response = self
            .client
            .get(self.table_url())
            .query(&[("select", "*")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(DbError::Api { status, body });
        }

        Ok(response.json().await?)
    }
}
