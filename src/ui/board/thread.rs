//! Comment thread hook
//!
//! Gives board views their comment list and a submit entry point.

use crate::app::AppState;
use crate::storage::settings::AppSettings;
use crate::storage::threads::{SaveStatus, SubmitOutcome, ThreadSession, ThreadState};
use crate::system::clock::Clock;
use crate::types::board::BoardRef;
use crate::types::comment::Comment;
use dioxus::prelude::*;
use std::sync::Arc;

/// Handle returned by [`use_comment_thread`]
#[derive(Clone)]
pub struct CommentThread {
    session: Signal<ThreadSession>,
    settings: Signal<AppSettings>,
    clock: Arc<dyn Clock>,
}

/// Load the comment thread of `board` and reload it whenever the board changes
pub fn use_comment_thread(board: ReadOnlySignal<Option<BoardRef>>) -> CommentThread {
    let app_state = use_context::<AppState>();
    let threads = app_state.threads.clone();
    let mut session = use_signal(move || ThreadSession::new(threads));

    use_effect(move || {
        let board = board.read().clone();
        session.write().open(board.as_ref());
    });

    CommentThread {
        session,
        settings: app_state.settings,
        clock: app_state.clock.clone(),
    }
}

impl CommentThread {
    /// Comments in display order; empty until the board is loaded
    pub fn comments(&self) -> Vec<Comment> {
        self.session.read().comments().to_vec()
    }

    pub fn save_status(&self) -> SaveStatus {
        self.session.read().save_status().clone()
    }

    pub fn is_ready(&self) -> bool {
        self.session.read().state() == ThreadState::Loaded
    }

    /// Post `text` as the current user
    pub fn submit(&mut self, text: &str) {
        let author = self.settings.read().author_name();
        let outcome = self
            .session
            .write()
            .submit(&author, text, self.clock.as_ref());

        match outcome {
            SubmitOutcome::Saved(comment) => {
                tracing::debug!("Comment {} saved", comment.id);
            }
            SubmitOutcome::Unsaved { comment, error } => {
                if error.is_user_visible() {
                    tracing::warn!("Comment {} is shown but not saved", comment.id);
                }
            }
            SubmitOutcome::Ignored(reason) => {
                tracing::debug!("Submission ignored: {}", reason);
            }
        }
    }
}
