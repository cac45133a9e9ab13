use serde::Deserialize;
use serde_json::{Map, Value};

/// Fields requested from the archive when the caller does not override them.
pub const DEFAULT_FIELDS: &[&str] = &[
    "title",
    "score",
    "url",
    "author",
    "created_utc",
    "full_link",
    "selftext",
];

/// One page of search results. Pullpush wraps everything in a `data` array.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<Post>,
}

/// A single submission, kept as the raw field map the archive returned.
/// Only `created_utc` matters during fetching (it is the pagination cursor);
/// every other field is passed through untouched for rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct Post(Map<String, Value>);

impl Post {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Creation time in epoch seconds. Pullpush emits both integer and float
    /// epochs depending on the record's vintage.
    pub fn created_utc(&self) -> Option<i64> {
        match self.0.get("created_utc")? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            _ => None,
        }
    }
}
