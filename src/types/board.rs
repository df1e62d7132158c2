//! Board identity types
//!
//! A board is addressed by a scope (which family of board pages it belongs
//! to) and an opaque identifier taken from the route.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix shared by every comment thread key.
pub const COMMENT_KEY_PREFIX: &str = "comments";

/// Marker segment for textual board ids, keeps them apart from numeric ones.
const NAMED_ID_MARKER: &str = "s_";

/// Identifier of a single board, as handed over by the routing layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardId {
    /// Numeric id such as `/boards/3`
    Numeric(u64),
    /// Any other textual id
    Named(String),
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardId::Numeric(id) => write!(f, "{}", id),
            BoardId::Named(name) => write!(f, "{}", name),
        }
    }
}

impl From<u64> for BoardId {
    fn from(id: u64) -> Self {
        BoardId::Numeric(id)
    }
}

/// Error returned when a route segment cannot name a board
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("board id cannot be empty")]
pub struct EmptyBoardId;

impl FromStr for BoardId {
    type Err = EmptyBoardId;

    /// Route text is kept as given. Only the canonical decimal form of a
    /// number becomes [`BoardId::Numeric`], so `"007"` and `"7"` stay apart.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(EmptyBoardId);
        }

        if let Ok(id) = s.parse::<u64>() {
            if id.to_string() == s {
                return Ok(BoardId::Numeric(id));
            }
        }

        Ok(BoardId::Named(s.to_string()))
    }
}

/// Family of board pages a board belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardScope {
    /// The general `/boards/{id}` pages
    General,
    /// Detail pages nested under a numbered section
    Section(u32),
}

/// Everything a board view needs to locate its comment thread
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardRef {
    pub scope: BoardScope,
    pub id: BoardId,
}

impl BoardRef {
    pub fn general(id: impl Into<BoardId>) -> Self {
        Self {
            scope: BoardScope::General,
            id: id.into(),
        }
    }

    pub fn section(section: u32, id: impl Into<BoardId>) -> Self {
        Self {
            scope: BoardScope::Section(section),
            id: id.into(),
        }
    }
}

/// Key of a comment thread in the key-value store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageKey(String);

impl StorageKey {
    /// Derive the thread key for a board.
    ///
    /// Layout:
    /// - `comments_{n}` for a general board with numeric id `n`
    /// - `comments_s_{name}` for a general board with a textual id
    /// - `comments_{section}_{n}` / `comments_{section}_s_{name}` for section boards
    ///
    /// Numeric keys match what earlier versions of the board pages wrote, so
    /// existing threads keep loading. A general numeric key never contains a
    /// second `_`, a section key always starts with digits, and textual ids
    /// always follow the `s_` marker, which keeps the mapping injective.
    pub fn for_board(board: &BoardRef) -> Self {
        let mut key = String::from(COMMENT_KEY_PREFIX);
        key.push('_');

        if let BoardScope::Section(section) = board.scope {
            key.push_str(&section.to_string());
            key.push('_');
        }

        match &board.id {
            BoardId::Numeric(id) => key.push_str(&id.to_string()),
            BoardId::Named(name) => {
                key.push_str(NAMED_ID_MARKER);
                key.push_str(name);
            }
        }

        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A board listed in the sidebar
#[derive(Debug, Clone, PartialEq)]
pub struct BoardEntry {
    pub board: BoardRef,
    pub title: String,
}

/// Boards shown in the sidebar before any group data is wired in
pub fn default_boards() -> Vec<BoardEntry> {
    let mut boards: Vec<BoardEntry> = (1u64..=5)
        .map(|id| BoardEntry {
            board: BoardRef::general(id),
            title: format!("게시물 {}", id),
        })
        .collect();

    boards.extend((1u64..=3).map(|id| BoardEntry {
        board: BoardRef::section(3, id),
        title: format!("3번 게시판 / {}", id),
    }));

    boards
}
