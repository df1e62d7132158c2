//! Board detail view
//!
//! Post header followed by the board's comment thread.

pub mod comment_input;
pub mod comment_list;
pub mod thread;

use crate::app::AppState;
use crate::types::post::Post;
use crate::ui::components::save_notice::SaveNotice;
use comment_input::CommentInput;
use comment_list::CommentList;
use dioxus::prelude::*;
pub use thread::{use_comment_thread, CommentThread};

#[component]
pub fn BoardDetail() -> Element {
    let app_state = use_context::<AppState>();
    let thread = use_comment_thread(ReadOnlySignal::new(app_state.current_board));
    let is_en = app_state.settings.read().is_en();

    let post = match app_state.current_board.read().as_ref() {
        Some(board) => Post::placeholder(board),
        None => Post::unresolved(),
    };

    let handle_submit = {
        let mut thread = thread.clone();
        move |text: String| thread.submit(&text)
    };

    rsx! {
        div {
            class: "min-h-screen text-white p-6",

            // Post
            div {
                class: "p-4",
                h1 { class: "text-2xl font-semibold mb-4", "{post.title}" }
                hr { class: "border-none h-px bg-gray-700 my-5" }
                p {
                    class: "text-sm text-gray-400 mb-4",
                    if is_en { "Author: " } else { "작성자: " }
                    "{post.author} | {post.date}"
                }
                p { class: "text-base leading-relaxed mb-6", "{post.content}" }
            }

            // Comments
            div {
                class: "p-4",
                h2 {
                    class: "text-xl font-semibold mb-4",
                    if is_en { "Leave a comment" } else { "댓글 달기" }
                }
                CommentInput {
                    on_submit: handle_submit,
                    disabled: !thread.is_ready(),
                }
                SaveNotice { status: thread.save_status() }

                h2 {
                    class: "text-xl font-semibold mb-4",
                    if is_en { "Comments" } else { "댓글 목록" }
                }
                CommentList { comments: thread.comments() }
            }
        }
    }
}
