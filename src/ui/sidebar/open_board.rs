//! Open a board by typing its id

use crate::app::{AppState, View};
use crate::types::board::{BoardId, BoardRef};
use dioxus::prelude::*;

#[component]
pub fn OpenBoard() -> Element {
    let app_state = use_context::<AppState>();
    let is_en = app_state.settings.read().is_en();
    let mut text = use_signal(String::new);
    let mut current_board = app_state.current_board;
    let mut view = app_state.view;

    let mut open = move || match text().trim().parse::<BoardId>() {
        Ok(id) => {
            current_board.set(Some(BoardRef::general(id)));
            view.set(View::Board);
            text.set(String::new());
        }
        Err(e) => tracing::debug!("Not opening board: {}", e),
    };

    rsx! {
        div {
            class: "px-3 pb-2",
            input {
                class: "w-full px-3 py-2 rounded-lg bg-gray-700 text-sm text-white outline-none placeholder-gray-500",
                placeholder: if is_en { "Board id, then Enter" } else { "게시물 번호 입력 후 Enter" },
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        evt.prevent_default();
                        open();
                    }
                },
            }
        }
    }
}
