//! Response parser — turns free-form model output into post records.
//!
//! The model is asked for `{"posts": [...]}` but may wrap it in markdown fences,
//! add a preamble, or ignore the format entirely. Strategies are tried in order and
//! the first one that succeeds wins. The paragraph fallback always succeeds, so
//! parsing never fails outright.

use serde_json::{Map, Value};

use crate::models::post::RawPostRecord;

/// Synthetic posts produced by the paragraph fallback.
const MAX_FALLBACK_POSTS: usize = 3;
/// Character cap for a synthetic post title.
const FALLBACK_TITLE_CHARS: usize = 60;

/// Which parsing strategy produced the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseTier {
    /// The whole response was a JSON document.
    Direct,
    /// A `{ ... }` block embedded in surrounding text was a JSON document.
    Embedded,
    /// No JSON; blank-line separated paragraphs became synthetic posts.
    Paragraphs,
}

#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub tier: ParseTier,
    pub records: Vec<RawPostRecord>,
}

type Strategy = fn(&str) -> Option<Vec<RawPostRecord>>;

const STRATEGIES: &[(ParseTier, Strategy)] = &[
    (ParseTier::Direct, parse_direct),
    (ParseTier::Embedded, parse_embedded),
    (ParseTier::Paragraphs, parse_paragraphs),
];

/// Extracts post records from raw model output.
pub fn parse_response(raw: &str) -> ParsedResponse {
    STRATEGIES
        .iter()
        .find_map(|&(tier, strategy)| strategy(raw).map(|records| ParsedResponse { tier, records }))
        .unwrap_or(ParsedResponse {
            tier: ParseTier::Paragraphs,
            records: Vec::new(),
        })
}

fn parse_direct(raw: &str) -> Option<Vec<RawPostRecord>> {
    posts_from_document(raw)
}

/// Greedy brace block: from the first `{` to the last `}` after it.
fn parse_embedded(raw: &str) -> Option<Vec<RawPostRecord>> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    posts_from_document(&raw[start..=end])
}

fn parse_paragraphs(raw: &str) -> Option<Vec<RawPostRecord>> {
    let records = raw
        .trim()
        .split("\n\n")
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .take(MAX_FALLBACK_POSTS)
        .map(synthetic_record)
        .collect();
    Some(records)
}

fn synthetic_record(chunk: &str) -> RawPostRecord {
    let title: String = chunk
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .take(FALLBACK_TITLE_CHARS)
        .collect();

    let mut record = Map::new();
    record.insert("title".to_string(), Value::String(title));
    record.insert("body".to_string(), Value::String(chunk.to_string()));
    record
}

/// Parses `text` as a JSON object and returns the object entries of its `posts` array.
///
/// Fails when the text is not JSON or not a JSON object. A missing or
/// non-array `posts` field is a successful parse with no records.
fn posts_from_document(text: &str) -> Option<Vec<RawPostRecord>> {
    let document: Value = serde_json::from_str(text).ok()?;
    let object = document.as_object()?;

    let records = object
        .get("posts")
        .and_then(Value::as_array)
        .map(|posts| {
            posts
                .iter()
                .filter_map(Value::as_object)
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    Some(records)
}
