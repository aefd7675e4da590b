//! Snippet data types for keyword-addressed storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored snippet of text, addressed by keyword.
///
/// Rows are materialized by the store when reading from the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snippet {
    /// Unique keyword this snippet is filed under.
    pub keyword: String,
    /// The snippet text itself. May be empty.
    pub message: String,
    /// Hidden snippets are excluded from catalog and search results
    /// but remain reachable by exact keyword.
    #[serde(default)]
    pub hidden: bool,
    /// When the snippet was stored or last overwritten.
    pub recorded_at: DateTime<Utc>,
}
