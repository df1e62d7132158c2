//! Save status notice
//!
//! Tells the user when a comment was not written to disk, or was lost.

use crate::app::AppState;
use crate::storage::threads::SaveStatus;
use dioxus::prelude::*;

/// Notice text and detail line for a save status, `None` when all is well
fn notice_text(status: SaveStatus, is_en: bool) -> Option<(String, String)> {
    match status {
        SaveStatus::Failed(reason) => {
            let message = if is_en {
                "Your comment is shown but could not be saved. It will be lost if you leave this board before a later comment saves successfully."
            } else {
                "댓글이 표시되었지만 저장하지 못했습니다. 다음 댓글이 저장되기 전에 게시판을 떠나면 사라집니다."
            };
            Some((message.to_string(), reason))
        }
        SaveStatus::Discarded(count) => {
            let message = if is_en {
                format!("{} unsaved comment(s) from the previous board were lost.", count)
            } else {
                format!("이전 게시판에서 저장하지 못한 댓글 {}개가 사라졌습니다.", count)
            };
            Some((message, String::new()))
        }
        SaveStatus::Idle | SaveStatus::Saved => None,
    }
}

#[component]
pub fn SaveNotice(status: SaveStatus) -> Element {
    let app_state = use_context::<AppState>();
    let is_en = app_state.settings.read().is_en();

    let Some((message, detail)) = notice_text(status, is_en) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "flex items-start gap-3 p-3 mb-6 rounded-lg border border-red-500/40 bg-red-500/10 text-red-200 text-sm",
            role: "alert",
            svg {
                class: "w-4 h-4 mt-0.5 shrink-0",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z" }
                line { x1: "12", y1: "9", x2: "12", y2: "13" }
                line { x1: "12", y1: "17", x2: "12.01", y2: "17" }
            }
            div {
                p { "{message}" }
                if !detail.is_empty() {
                    p { class: "text-xs opacity-70 mt-1", "{detail}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_notice_when_saved() {
        assert!(notice_text(SaveStatus::Idle, true).is_none());
        assert!(notice_text(SaveStatus::Saved, false).is_none());
    }

    #[test]
    fn test_failed_notice_does_not_promise_a_later_save() {
        let (message, detail) = notice_text(SaveStatus::Failed("disk full".to_string()), true).unwrap();
        assert!(message.contains("could not be saved"));
        assert!(!message.contains("will be saved"));
        assert_eq!(detail, "disk full");
    }

    #[test]
    fn test_discarded_notice_reports_count() {
        let (message, detail) = notice_text(SaveStatus::Discarded(2), true).unwrap();
        assert!(message.starts_with("2 unsaved"));
        assert!(detail.is_empty());

        let (message, _) = notice_text(SaveStatus::Discarded(3), false).unwrap();
        assert!(message.contains("3개"));
    }
}
