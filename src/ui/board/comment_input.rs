//! Comment input component

use crate::app::AppState;
use dioxus::prelude::*;

/// Estimate how many rows the textarea needs based on content
fn compute_rows(text: &str) -> usize {
    let newlines = text.chars().filter(|&c| c == '\n').count();
    // Each visual line ~ 80 chars for the comment box width
    let wrap_lines: usize = text
        .lines()
        .map(|line| line.chars().count().saturating_sub(1) / 80)
        .sum();
    (newlines + wrap_lines + 1).clamp(3, 10)
}

#[component]
pub fn CommentInput(on_submit: EventHandler<String>, disabled: bool) -> Element {
    let mut text = use_signal(String::new);
    let app_state = use_context::<AppState>();
    let is_en = app_state.settings.read().is_en();

    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
            evt.prevent_default();
            if !disabled && !text().trim().is_empty() {
                on_submit.call(text());
                text.set(String::new());
            }
        }
    };

    let can_submit = !disabled && !text().trim().is_empty();
    let rows = compute_rows(&text()).to_string();

    let placeholder = if is_en { "Write a comment." } else { "댓글을 입력해 주세요." };
    let button_label = if is_en { "Post" } else { "등록" };
    let button_class = if can_submit {
        "bg-emerald-500 text-white px-6 py-2 rounded-lg transition-all hover:bg-emerald-400"
    } else {
        "bg-emerald-500 text-white px-6 py-2 rounded-lg opacity-40 cursor-not-allowed"
    };

    rsx! {
        div {
            class: "mb-6",

            textarea {
                class: "w-full bg-gray-700 text-white p-4 rounded-lg mb-2 resize-none outline-none",
                placeholder: "{placeholder}",
                value: "{text}",
                rows: "{rows}",
                disabled: disabled,
                oninput: move |evt| text.set(evt.value()),
                onkeydown: handle_keydown,
            }

            button {
                class: "{button_class}",
                disabled: !can_submit,
                onclick: move |_| {
                    if can_submit {
                        on_submit.call(text());
                        text.set(String::new());
                    }
                },
                "{button_label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_rows_bounds() {
        assert_eq!(compute_rows(""), 3);
        assert_eq!(compute_rows("one\ntwo\nthree\nfour"), 4);
        assert_eq!(compute_rows(&"\n".repeat(40)), 10);
    }

    #[test]
    fn test_compute_rows_counts_wrapped_lines() {
        let long_line = "가".repeat(250);
        assert_eq!(compute_rows(&format!("{}\n{}\nx", long_line, long_line)), 9);
    }
}
