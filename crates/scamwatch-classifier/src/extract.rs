//! Fenced-JSON extraction from free-form model replies.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a ```json fenced block and captures the object inside. `(?s)` lets
/// `.` span newlines; the lazy `.*?` stops at the first closing fence.
static JSON_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json\s*(\{.*?\})\s*```").expect("fence pattern is a valid regex")
});

/// Extract the first fenced JSON object from a reply, if any.
pub(crate) fn extract_fenced_json(reply: &str) -> Option<&str> {
    JSON_FENCE
        .captures(reply)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_from_fenced_block() {
        let reply = "Here is my analysis:\n```json\n{\"is_scam\": true}\n```\nDone.";
        assert_eq!(extract_fenced_json(reply), Some("{\"is_scam\": true}"));
    }

    #[test]
    fn extracts_multiline_object() {
        let reply = "```json\n{\n  \"is_scam\": false,\n  \"confidence\": 10\n}\n```";
        let json = extract_fenced_json(reply).expect("should match");
        assert!(json.starts_with('{') && json.ends_with('}'));
        assert!(json.contains("\"confidence\": 10"));
    }

    #[test]
    fn returns_none_without_a_fence() {
        assert_eq!(extract_fenced_json("{\"is_scam\": true}"), None);
        assert_eq!(extract_fenced_json("no json here at all"), None);
    }

    #[test]
    fn plain_fence_without_json_tag_does_not_match() {
        assert_eq!(extract_fenced_json("```\n{\"is_scam\": true}\n```"), None);
    }

    #[test]
    fn first_block_wins_when_reply_has_several() {
        let reply = "```json\n{\"a\": 1}\n```\n```json\n{\"b\": 2}\n```";
        assert_eq!(extract_fenced_json(reply), Some("{\"a\": 1}"));
    }
}
