//! Hosted table access for scamwatch.
//!
//! The remote table lives behind a PostgREST-style REST interface (Supabase):
//! inserts are POSTs with `Prefer: return=representation`, reads are GETs
//! with a `select` query. [`loader::load_posts`] is the batch upload used by
//! the `load` subcommand.

use thiserror::Error;

pub mod client;
pub mod loader;
pub mod normalize;

pub use client::{InsertPost, PostRow, TableClient};
pub use loader::{load_posts, LoadSummary};
pub use normalize::normalize_date;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("table API error ({status}): {body}")]
    Api { status: u16, body: String },
}
