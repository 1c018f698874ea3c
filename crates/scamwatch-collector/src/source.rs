use scamwatch_core::PostRecord;

use crate::error::CollectError;

/// A post as extracted from one rendered element, before conversion to the
/// shared record type. Elements without an identifier never make it here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPost {
    pub id: String,
    pub username: String,
    pub text: String,
}

impl From<RawPost> for PostRecord {
    fn from(raw: RawPost) -> Self {
        Self {
            name: String::new(),
            username: raw.username,
            text: raw.text,
            date: String::new(),
            post_id: Some(raw.id),
        }
    }
}

/// Result of scanning the currently rendered post elements.
#[derive(Debug, Clone)]
pub struct Scan {
    /// Total number of post elements currently rendered, including ones that
    /// failed extraction. Used for the loop termination check.
    pub rendered: usize,
    /// Posts successfully extracted from those elements. Extraction failures
    /// are logged by the source and simply absent here.
    pub posts: Vec<RawPost>,
}

/// A scrollable page of post elements.
///
/// [`ChromeCollector`](crate::ChromeCollector) is the production
/// implementation; tests drive the collection loop with a scripted fake.
pub trait PostSource {
    /// Scan the currently rendered post elements.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError`] if the page can no longer be queried. A single
    /// element failing extraction is not an error; the source logs it and
    /// omits the post.
    fn scan(&mut self) -> Result<Scan, CollectError>;

    /// Trigger further content to render (scroll to the bottom) and wait for
    /// it to settle, then report how many post elements are rendered.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError`] if the render trigger cannot be executed.
    fn render_more(&mut self) -> Result<usize, CollectError>;
}
