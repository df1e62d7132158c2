//! Comment thread storage
//!
//! Loads, appends to and persists the comment list of a board. Every board
//! view goes through [`ThreadSession`], which drives a [`ThreadStore`] over
//! any [`KeyValueStore`].
//!
//! Comment ids are count-based: a new comment gets `len + 1`. This only holds
//! because comments are never removed. Adding deletion means storing a
//! monotonically increasing counter next to the thread instead.

use crate::storage::{KeyValueStore, StorageError};
use crate::system::clock::Clock;
use crate::types::board::{BoardRef, StorageKey};
use crate::types::comment::Comment;
use std::sync::Arc;

/// Errors raised by thread operations
///
/// Only [`ThreadError::PersistFailure`] is meant to reach the user; the
/// other variants are handled silently by [`ThreadSession`].
#[derive(Debug, thiserror::Error)]
pub enum ThreadError {
    #[error("Board is not resolved yet")]
    NotReady,
    #[error("Comment is empty")]
    EmptySubmission,
    #[error("Thread {key} holds unreadable data: {reason}")]
    CorruptState { key: StorageKey, reason: String },
    #[error("Failed to save thread {key}: {source}")]
    PersistFailure {
        key: StorageKey,
        #[source]
        source: StorageError,
    },
}

impl ThreadError {
    /// Whether the view should tell the user about this error
    pub fn is_user_visible(&self) -> bool {
        matches!(self, ThreadError::PersistFailure { .. })
    }
}

/// Build the thread that results from submitting `content`.
///
/// Returns the new sequence and the comment that was added. Content that
/// trims to nothing is rejected with [`ThreadError::EmptySubmission`] and
/// `existing` is left as it was.
pub fn append(
    existing: &[Comment],
    author: &str,
    content: &str,
    clock: &dyn Clock,
) -> Result<(Vec<Comment>, Comment), ThreadError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ThreadError::EmptySubmission);
    }

    let comment = Comment {
        id: existing.len() as u64 + 1,
        author: author.to_string(),
        content: content.to_string(),
        date: clock.today(),
    };

    let mut comments = Vec::with_capacity(existing.len() + 1);
    comments.extend_from_slice(existing);
    comments.push(comment.clone());

    Ok((comments, comment))
}

/// Thread persistence over a key-value backend
#[derive(Clone)]
pub struct ThreadStore {
    backend: Arc<dyn KeyValueStore>,
}

impl ThreadStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Storage key of a board's thread
    pub fn resolve_key(board: &BoardRef) -> StorageKey {
        StorageKey::for_board(board)
    }

    /// Read the thread at `key`
    ///
    /// A missing key is a thread nobody commented on yet and loads as empty.
    pub fn load(&self, key: &StorageKey) -> Result<Vec<Comment>, ThreadError> {
        let raw = self
            .backend
            .get(key.as_str())
            .map_err(|e| ThreadError::CorruptState {
                key: key.clone(),
                reason: e.to_string(),
            })?;

        let Some(raw) = raw else {
            return Ok(Vec::new());
        };

        let comments: Vec<Comment> =
            serde_json::from_str(&raw).map_err(|e| ThreadError::CorruptState {
                key: key.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!("Loaded {} comments from {}", comments.len(), key);
        Ok(comments)
    }

    /// Read the thread at `key`, treating unreadable data as an empty thread
    ///
    /// The stored value is left untouched; the next persist overwrites it.
    pub fn load_or_empty(&self, key: &StorageKey) -> Vec<Comment> {
        match self.load(key) {
            Ok(comments) => comments,
            Err(e) => {
                tracing::warn!("Starting {} as an empty thread: {}", key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the thread at `key` with the full `comments` sequence
    pub fn persist(&self, key: &StorageKey, comments: &[Comment]) -> Result<(), ThreadError> {
        let persist_failure = |source: StorageError| ThreadError::PersistFailure {
            key: key.clone(),
            source,
        };

        let json = serde_json::to_string(comments).map_err(|e| persist_failure(e.into()))?;
        self.backend
            .set(key.as_str(), &json)
            .map_err(persist_failure)?;

        tracing::debug!("Saved {} comments to {}", comments.len(), key);
        Ok(())
    }
}

/// Where a view's thread is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadState {
    /// No board resolved yet
    Uninitialized,
    /// Thread loaded and accepting submissions
    Loaded,
    /// A submission is being appended and saved
    Appending,
}

/// Outcome of the most recent save, for the view to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Idle,
    Saved,
    Failed(String),
    /// Comments that never reached storage were dropped when the view
    /// switched threads
    Discarded(usize),
}

/// What happened to a submission
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Appended and durably saved
    Saved(Comment),
    /// Appended in memory, but the save failed
    Unsaved { comment: Comment, error: ThreadError },
    /// Nothing changed
    Ignored(ThreadError),
}

/// The comment thread of one board view
///
/// Holds the loaded sequence so the view always has something to render,
/// and performs append-then-persist on every submission.
#[derive(Clone)]
pub struct ThreadSession {
    store: ThreadStore,
    key: Option<StorageKey>,
    comments: Vec<Comment>,
    state: ThreadState,
    save_status: SaveStatus,
    /// Comments shown in this session that no save has stored yet
    unsaved: usize,
}

impl ThreadSession {
    pub fn new(store: ThreadStore) -> Self {
        Self {
            store,
            key: None,
            comments: Vec::new(),
            state: ThreadState::Uninitialized,
            save_status: SaveStatus::Idle,
            unsaved: 0,
        }
    }

    /// Load the thread of `board`, or stay uninitialized while it is unknown
    ///
    /// Comments of the previous thread that failed to save are dropped; the
    /// save status then reports how many were lost.
    pub fn open(&mut self, board: Option<&BoardRef>) {
        self.save_status = self.release_unsaved();

        let Some(board) = board else {
            tracing::debug!("Board not resolved, deferring thread load");
            self.key = None;
            self.comments.clear();
            self.state = ThreadState::Uninitialized;
            return;
        };

        let key = ThreadStore::resolve_key(board);
        self.comments = self.store.load_or_empty(&key);
        tracing::info!("Opened thread {} ({} comments)", key, self.comments.len());

        self.key = Some(key);
        self.state = ThreadState::Loaded;
    }

    fn release_unsaved(&mut self) -> SaveStatus {
        let dropped = std::mem::take(&mut self.unsaved);
        if dropped == 0 {
            return SaveStatus::Idle;
        }

        if let Some(key) = self.key() {
            tracing::warn!("Dropping {} unsaved comments of thread {}", dropped, key);
        }
        SaveStatus::Discarded(dropped)
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn state(&self) -> ThreadState {
        self.state
    }

    pub fn save_status(&self) -> &SaveStatus {
        &self.save_status
    }

    pub fn key(&self) -> Option<&StorageKey> {
        self.key.as_ref()
    }

    /// Append `text` by `author` and save the thread
    ///
    /// When saving fails the comment stays visible and the failure is
    /// recorded in [`ThreadSession::save_status`] until a later save on the
    /// same thread succeeds. Every save writes the full sequence, so that
    /// later save also stores the comments that failed.
    pub fn submit(&mut self, author: &str, text: &str, clock: &dyn Clock) -> SubmitOutcome {
        let key = match (&self.key, self.state) {
            (Some(key), ThreadState::Loaded) => key.clone(),
            _ => return SubmitOutcome::Ignored(ThreadError::NotReady),
        };

        let (comments, comment) = match append(&self.comments, author, text, clock) {
            Ok(appended) => appended,
            Err(e) => return SubmitOutcome::Ignored(e),
        };

        self.state = ThreadState::Appending;
        self.comments = comments;
        let result = self.store.persist(&key, &self.comments);
        self.state = ThreadState::Loaded;

        match result {
            Ok(()) => {
                self.unsaved = 0;
                self.save_status = SaveStatus::Saved;
                SubmitOutcome::Saved(comment)
            }
            Err(error) => {
                tracing::error!("Comment {} kept in memory only: {}", comment.id, error);
                self.unsaved += 1;
                self.save_status = SaveStatus::Failed(error.to_string());
                SubmitOutcome::Unsaved { comment, error }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::system::clock::FixedClock;
    use crate::types::board::BoardId;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 7, 28).unwrap())
    }

    fn comment(id: u64, content: &str) -> Comment {
        Comment {
            id,
            author: "우지은".to_string(),
            content: content.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 7, 25).unwrap(),
        }
    }

    fn store_with_backend() -> (ThreadStore, Arc<MemoryStore>) {
        let backend = Arc::new(MemoryStore::new());
        (ThreadStore::new(backend.clone()), backend)
    }

    #[test]
    fn test_append_assigns_next_id() {
        let existing = vec![comment(1, "first"), comment(2, "second")];
        let (comments, added) = append(&existing, "Jieun", "third", &clock()).unwrap();

        assert_eq!(comments.len(), 3);
        assert_eq!(added.id, 3);
        assert_eq!(&comments[..2], &existing[..]);
        assert_eq!(comments[2], added);
    }

    #[test]
    fn test_append_trims_content() {
        let (_, added) = append(&[], "Jieun", "  hello \n", &clock()).unwrap();
        assert_eq!(added.content, "hello");
    }

    #[test]
    fn test_append_rejects_blank_content() {
        let existing = vec![comment(1, "first")];
        for blank in ["", "   ", "\n\t "] {
            let result = append(&existing, "Jieun", blank, &clock());
            assert!(matches!(result, Err(ThreadError::EmptySubmission)));
        }
        assert_eq!(existing, vec![comment(1, "first")]);
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let (store, _) = store_with_backend();
        let key = ThreadStore::resolve_key(&BoardRef::general(1u64));
        assert!(store.load(&key).unwrap().is_empty());
    }

    #[test]
    fn test_persist_then_load_round_trip() {
        let (store, _) = store_with_backend();
        let key = ThreadStore::resolve_key(&BoardRef::general(1u64));
        let comments = vec![comment(1, "첫 댓글"), comment(2, "with \"quotes\"")];

        store.persist(&key, &comments).unwrap();
        assert_eq!(store.load(&key).unwrap(), comments);
        assert_eq!(store.load(&key).unwrap(), store.load(&key).unwrap());
    }

    #[test]
    fn test_persist_overwrites_whole_thread() {
        let (store, backend) = store_with_backend();
        let key = ThreadStore::resolve_key(&BoardRef::general(1u64));

        store.persist(&key, &[comment(1, "a"), comment(2, "b")]).unwrap();
        store.persist(&key, &[comment(1, "a")]).unwrap();

        assert_eq!(store.load(&key).unwrap(), vec![comment(1, "a")]);
        assert_eq!(backend.write_count(), 2);
    }

    #[test]
    fn test_corrupt_value_loads_as_empty_and_is_kept() {
        let (store, backend) = store_with_backend();
        let key = ThreadStore::resolve_key(&BoardRef::general(1u64));
        backend.set(key.as_str(), "{not json").unwrap();

        assert!(matches!(
            store.load(&key),
            Err(ThreadError::CorruptState { .. })
        ));
        assert!(store.load_or_empty(&key).is_empty());
        assert_eq!(backend.get(key.as_str()).unwrap(), Some("{not json".to_string()));
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let (store, backend) = store_with_backend();
        let key = ThreadStore::resolve_key(&BoardRef::general(1u64));
        backend.set(key.as_str(), r#"{"id":1}"#).unwrap();

        assert!(matches!(
            store.load(&key),
            Err(ThreadError::CorruptState { .. })
        ));
    }

    #[test]
    fn test_persist_failure_is_reported() {
        let (store, backend) = store_with_backend();
        backend.set_unavailable(true);
        let key = ThreadStore::resolve_key(&BoardRef::general(1u64));

        let err = store.persist(&key, &[comment(1, "a")]).unwrap_err();
        assert!(err.is_user_visible());
        assert!(matches!(
            err,
            ThreadError::PersistFailure {
                source: StorageError::Unavailable(_),
                ..
            }
        ));
    }

    #[test]
    fn test_only_persist_failure_is_user_visible() {
        assert!(!ThreadError::NotReady.is_user_visible());
        assert!(!ThreadError::EmptySubmission.is_user_visible());
        assert!(!ThreadError::CorruptState {
            key: ThreadStore::resolve_key(&BoardRef::general(1u64)),
            reason: String::new(),
        }
        .is_user_visible());
    }

    #[test]
    fn test_session_starts_uninitialized() {
        let (store, _) = store_with_backend();
        let mut session = ThreadSession::new(store);
        assert_eq!(session.state(), ThreadState::Uninitialized);
        assert!(session.comments().is_empty());

        session.open(None);
        assert_eq!(session.state(), ThreadState::Uninitialized);
        assert!(session.key().is_none());
    }

    #[test]
    fn test_submit_before_board_is_resolved_is_ignored() {
        let (store, backend) = store_with_backend();
        let mut session = ThreadSession::new(store);

        let outcome = session.submit("Jieun", "hello", &clock());
        assert!(matches!(outcome, SubmitOutcome::Ignored(ThreadError::NotReady)));
        assert!(session.comments().is_empty());
        assert_eq!(backend.write_count(), 0);
    }

    #[test]
    fn test_whitespace_submission_writes_nothing() {
        let (store, backend) = store_with_backend();
        let mut session = ThreadSession::new(store);
        session.open(Some(&BoardRef::general(1u64)));

        let outcome = session.submit("Jieun", "  ", &clock());
        assert!(matches!(
            outcome,
            SubmitOutcome::Ignored(ThreadError::EmptySubmission)
        ));
        assert!(session.comments().is_empty());
        assert_eq!(session.save_status(), &SaveStatus::Idle);
        assert_eq!(backend.write_count(), 0);
    }

    #[test]
    fn test_first_comment_is_saved_and_reloads() {
        let (store, _) = store_with_backend();
        let board = BoardRef::general(1u64);
        let mut session = ThreadSession::new(store.clone());
        session.open(Some(&board));

        let outcome = session.submit("Jieun", "hello", &clock());
        let expected = Comment {
            id: 1,
            author: "Jieun".to_string(),
            content: "hello".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 7, 28).unwrap(),
        };

        assert!(matches!(outcome, SubmitOutcome::Saved(ref c) if *c == expected));
        assert_eq!(session.comments(), &[expected.clone()]);
        assert_eq!(session.state(), ThreadState::Loaded);
        assert_eq!(session.save_status(), &SaveStatus::Saved);

        let key = ThreadStore::resolve_key(&board);
        assert_eq!(store.load(&key).unwrap(), vec![expected.clone()]);

        let mut reopened = ThreadSession::new(store);
        reopened.open(Some(&board));
        assert_eq!(reopened.comments(), &[expected]);
    }

    #[test]
    fn test_third_comment_follows_existing_ones() {
        let (store, _) = store_with_backend();
        let board = BoardRef::section(3, 2u64);
        let existing = vec![comment(1, "first"), comment(2, "second")];
        store
            .persist(&ThreadStore::resolve_key(&board), &existing)
            .unwrap();

        let mut session = ThreadSession::new(store);
        session.open(Some(&board));
        session.submit("Jieun", "third", &clock());

        let comments = session.comments();
        assert_eq!(comments.len(), 3);
        assert_eq!(&comments[..2], &existing[..]);
        assert_eq!(comments[2].id, 3);
        assert_eq!(comments[2].content, "third");
    }

    #[test]
    fn test_corrupt_thread_opens_empty_and_next_save_replaces_it() {
        let (store, backend) = store_with_backend();
        let board = BoardRef::general(9u64);
        let key = ThreadStore::resolve_key(&board);
        backend.set(key.as_str(), "garbage").unwrap();

        let mut session = ThreadSession::new(store.clone());
        session.open(Some(&board));
        assert_eq!(session.state(), ThreadState::Loaded);
        assert!(session.comments().is_empty());

        session.submit("Jieun", "fresh start", &clock());
        assert_eq!(store.load(&key).unwrap().len(), 1);
    }

    #[test]
    fn test_failed_save_keeps_comment_and_heals_on_next_save() {
        let (store, backend) = store_with_backend();
        let board = BoardRef::general(1u64);
        let key = ThreadStore::resolve_key(&board);
        let mut session = ThreadSession::new(store.clone());
        session.open(Some(&board));

        backend.set_unavailable(true);
        let outcome = session.submit("Jieun", "offline", &clock());
        assert!(matches!(
            outcome,
            SubmitOutcome::Unsaved { ref comment, ref error }
                if comment.id == 1 && error.is_user_visible()
        ));
        assert_eq!(session.comments().len(), 1);
        assert_eq!(session.state(), ThreadState::Loaded);
        assert!(matches!(session.save_status(), SaveStatus::Failed(_)));
        assert!(store.load(&key).unwrap().is_empty());

        backend.set_unavailable(false);
        session.submit("Jieun", "back online", &clock());
        assert_eq!(session.save_status(), &SaveStatus::Saved);

        let saved = store.load(&key).unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].content, "offline");
        assert_eq!(saved[1].id, 2);
    }

    #[test]
    fn test_switching_boards_after_failed_save_reports_lost_comments() {
        let (store, backend) = store_with_backend();
        let first = BoardRef::general(1u64);
        let second = BoardRef::general(2u64);
        let mut session = ThreadSession::new(store);
        session.open(Some(&first));

        backend.set_unavailable(true);
        session.submit("Jieun", "never stored", &clock());
        session.submit("Jieun", "also lost", &clock());
        backend.set_unavailable(false);

        session.open(Some(&second));
        assert_eq!(session.save_status(), &SaveStatus::Discarded(2));
        assert!(session.comments().is_empty());

        session.open(Some(&first));
        assert_eq!(session.save_status(), &SaveStatus::Idle);
        assert!(session.comments().is_empty());
    }

    #[test]
    fn test_successful_save_clears_unsaved_count() {
        let (store, backend) = store_with_backend();
        let mut session = ThreadSession::new(store);
        session.open(Some(&BoardRef::general(1u64)));

        backend.set_unavailable(true);
        session.submit("Jieun", "offline", &clock());
        backend.set_unavailable(false);
        session.submit("Jieun", "online", &clock());

        session.open(Some(&BoardRef::general(2u64)));
        assert_eq!(session.save_status(), &SaveStatus::Idle);
    }

    #[test]
    fn test_switching_boards_reloads_thread() {
        let (store, _) = store_with_backend();
        let first = BoardRef::general(1u64);
        let second = BoardRef::general(BoardId::Named("1".to_string()));

        let mut session = ThreadSession::new(store);
        session.open(Some(&first));
        session.submit("Jieun", "on the first board", &clock());

        session.open(Some(&second));
        assert!(session.comments().is_empty());
        assert_eq!(session.save_status(), &SaveStatus::Idle);

        session.open(Some(&first));
        assert_eq!(session.comments().len(), 1);

        session.open(None);
        assert_eq!(session.state(), ThreadState::Uninitialized);
        assert!(session.comments().is_empty());
    }
}
