//! Shared domain types and configuration for scamwatch.
//!
//! The pipeline passes two shapes between stages: [`PostRecord`] (a scraped
//! social-media post) and [`Verdict`] (the scam classification for one post
//! body). Both are plain serde types; each stage that needs a different wire
//! layout defines its own payload struct and converts.

use serde::{Deserialize, Serialize};

pub mod config;

pub use config::{AppConfig, ConfigError, Credentials, TableAuth};

/// A scraped social-media post.
///
/// The collector fills `username`, `text`, and `post_id`; the loader input
/// files additionally carry `name` (display name) and `date` in the source
/// format `"Mon D, YYYY"`. Loader files historically use `description` for
/// the body, so that name is accepted as an alias on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    /// Display name of the author. Empty when the collector did not capture it.
    #[serde(default)]
    pub name: String,
    /// Handle of the author, e.g. `@1CrypticPoet`.
    pub username: String,
    /// Free-text post body.
    #[serde(alias = "description")]
    pub text: String,
    /// Post date in the source format `"Mon D, YYYY"`. Empty when unknown.
    #[serde(default)]
    pub date: String,
    /// Raw unique identifier assigned by the site, when available. Collector
    /// output files call this `tweet_id`.
    #[serde(default, alias = "tweet_id", skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
}

/// Scam classification result for one post body.
///
/// `is_scam` is `None` whenever the classifier could not produce a real
/// answer; in that case `error` describes what went wrong and the remaining
/// fields hold the degraded defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_scam: Option<bool>,
    /// Model confidence in the verdict, 0–100.
    pub confidence: u8,
    /// Suspicious elements the model called out.
    #[serde(default)]
    pub indicators: Vec<String>,
    /// Brief explanation of the classification.
    #[serde(default)]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Verdict {
    /// A degraded verdict carrying an error instead of a real answer.
    #[must_use]
    pub fn degraded(error: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            is_scam: None,
            confidence: 0,
            indicators: Vec::new(),
            explanation: explanation.into(),
            error: Some(error.into()),
        }
    }
}
