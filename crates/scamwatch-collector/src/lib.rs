//! Browser-driven post collection.
//!
//! Drives a headless Chrome session: logs into the site, submits a hashtag
//! search, and scrolls through the results scraping rendered post elements
//! into [`scamwatch_core::PostRecord`]s. The scan/scroll loop itself is
//! generic over [`PostSource`] so its termination and dedup behaviour can be
//! tested without a browser.

pub mod chrome;
pub mod collect;
pub mod error;
pub mod source;

pub use chrome::ChromeCollector;
pub use collect::{collect_posts, collect_posts_or_empty, write_posts};
pub use error::CollectError;
pub use source::{PostSource, RawPost, Scan};
