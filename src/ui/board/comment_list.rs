//! Comment list component

use crate::app::AppState;
use crate::types::comment::Comment;
use dioxus::prelude::*;

#[component]
pub fn CommentList(comments: Vec<Comment>) -> Element {
    let app_state = use_context::<AppState>();
    let is_en = app_state.settings.read().is_en();

    if comments.is_empty() {
        return rsx! {
            p {
                class: "text-center text-gray-400",
                if is_en { "No comments yet." } else { "아직 작성한 댓글이 없습니다." }
            }
        };
    }

    rsx! {
        ul {
            for comment in comments {
                li {
                    key: "{comment.id}",
                    class: "bg-gray-700 p-4 rounded-lg mb-4",
                    p {
                        class: "text-sm text-gray-400 mb-1",
                        "{comment.author} | "
                        {comment.date_label()}
                    }
                    p { class: "whitespace-pre-wrap", "{comment.content}" }
                }
            }
        }
    }
}
