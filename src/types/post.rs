//! Post types
//!
//! The post shown above a board's comment thread.

use crate::types::board::BoardRef;

/// A board post as displayed in the detail view
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub title: String,
    pub content: String,
    pub author: String,
    /// Display date, already formatted
    pub date: String,
}

impl Post {
    /// Sample post used until a post source is wired in
    pub fn placeholder(board: &BoardRef) -> Self {
        Self {
            title: format!("게시물 제목 {}", board.id),
            content: format!("이 게시물의 내용입니다. 게시물 ID는 {}입니다.", board.id),
            author: "우지은".to_string(),
            date: "2024.07.25".to_string(),
        }
    }

    /// Header shown while the board id is not resolved yet
    pub fn unresolved() -> Self {
        Self {
            title: "게시글 제목 영역입니다.".to_string(),
            content: "본문이 들어가는 영역입니다.".to_string(),
            author: "우지은".to_string(),
            date: "2024.07.25".to_string(),
        }
    }
}
