use super::*;
use crate::source::{RawPost, Scan};

fn raw(id: &str) -> RawPost {
    RawPost {
        id: id.to_string(),
        username: format!("@user_{id}"),
        text: format!("post body {id}"),
    }
}

/// Scripted source: each page is what `scan` sees; `render_more` advances to
/// the next page (or stays on the last one, simulating exhausted content).
struct FakeSource {
    pages: Vec<Vec<RawPost>>,
    current: usize,
}

impl FakeSource {
    fn new(pages: Vec<Vec<RawPost>>) -> Self {
        Self { pages, current: 0 }
    }
}

impl PostSource for FakeSource {
    fn scan(&mut self) -> Result<Scan, CollectError> {
        let posts = self.pages[self.current].clone();
        Ok(Scan {
            rendered: posts.len(),
            posts,
        })
    }

    fn render_more(&mut self) -> Result<usize, CollectError> {
        if self.current + 1 < self.pages.len() {
            self.current += 1;
        }
        Ok(self.pages[self.current].len())
    }
}

#[test]
fn stops_at_max_results() {
    let mut source = FakeSource::new(vec![vec![
        raw("1"),
        raw("2"),
        raw("3"),
        raw("4"),
        raw("5"),
    ]]);
    let records = collect_posts(&mut source, 3).expect("collect");
    assert_eq!(records.len(), 3);
}

#[test]
fn deduplicates_by_identifier_across_render_cycles() {
    // Page 2 re-renders page 1's posts plus one new one, as an infinite-scroll
    // page does.
    let mut source = FakeSource::new(vec![
        vec![raw("1"), raw("2")],
        vec![raw("1"), raw("2"), raw("3")],
    ]);
    let records = collect_posts(&mut source, 10).expect("collect");

    let ids: Vec<&str> = records
        .iter()
        .filter_map(|r| r.post_id.as_deref())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn terminates_when_render_count_stops_growing() {
    // One page, never grows: must stop after a single render cycle rather
    // than loop forever even though max_results is far from reached.
    let mut source = FakeSource::new(vec![vec![raw("1")]]);
    let records = collect_posts(&mut source, 100).expect("collect");
    assert_eq!(records.len(), 1);
}

#[test]
fn empty_page_yields_no_records() {
    let mut source = FakeSource::new(vec![Vec::new()]);
    let records = collect_posts(&mut source, 5).expect("collect");
    assert!(records.is_empty());
}

#[test]
fn zero_max_results_returns_immediately() {
    let mut source = FakeSource::new(vec![vec![raw("1")]]);
    let records = collect_posts(&mut source, 0).expect("collect");
    assert!(records.is_empty());
}

/// Source whose page can no longer be queried, as when the browser tab dies
/// mid-session.
struct BrokenSource;

impl PostSource for BrokenSource {
    fn scan(&mut self) -> Result<Scan, CollectError> {
        Err(CollectError::Browser("tab closed".to_string()))
    }

    fn render_more(&mut self) -> Result<usize, CollectError> {
        Err(CollectError::Browser("tab closed".to_string()))
    }
}

#[test]
fn source_failure_degrades_to_empty_result() {
    let records = collect_posts_or_empty(&mut BrokenSource, 5);
    assert!(records.is_empty());
}

#[test]
fn collect_posts_or_empty_passes_through_on_success() {
    let mut source = FakeSource::new(vec![vec![raw("1"), raw("2")]]);
    let records = collect_posts_or_empty(&mut source, 5);
    assert_eq!(records.len(), 2);
}

#[test]
fn raw_post_converts_to_record_with_id() {
    let record: scamwatch_core::PostRecord = raw("42").into();
    assert_eq!(record.username, "@user_42");
    assert_eq!(record.text, "post body 42");
    assert_eq!(record.post_id.as_deref(), Some("42"));
    assert_eq!(record.name, "");
    assert_eq!(record.date, "");
}

#[test]
fn write_posts_uses_the_fixed_wire_fields() {
    let mut source = FakeSource::new(vec![vec![raw("7")]]);
    let records = collect_posts(&mut source, 5).expect("collect");

    let path = std::env::temp_dir().join(format!("scamwatch-posts-{}.json", uuid::Uuid::new_v4()));
    write_posts(&path, &records).expect("write");

    let json = std::fs::read_to_string(&path).expect("read back");
    std::fs::remove_file(&path).ok();

    let parsed: serde_json::Value = serde_json::from_str(&json).expect("parse");
    let entry = &parsed[0];
    assert_eq!(entry["username"], "@user_7");
    assert_eq!(entry["text"], "post body 7");
    assert_eq!(entry["tweet_id"], "7");
}
