//! Comment types
//!
//! Defines the comment record stored in a board's thread.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single comment in a board thread
///
/// Serialized as `{ "id", "author", "content", "date" }` with the date in
/// `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// 1-based position in the thread at submission time
    pub id: u64,
    /// Display name of the author
    pub author: String,
    /// Trimmed comment body
    pub content: String,
    /// Calendar date the comment was submitted
    pub date: NaiveDate,
}

impl Comment {
    /// Date formatted the way it is stored and displayed
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
