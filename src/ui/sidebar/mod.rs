//! Sidebar
//!
//! Board navigation and the entry to the profile settings.

pub mod board_list;
pub mod open_board;

use crate::app::{AppState, View};
use board_list::BoardList;
use dioxus::prelude::*;
use open_board::OpenBoard;

#[component]
pub fn Sidebar() -> Element {
    let app_state = use_context::<AppState>();
    let is_en = app_state.settings.read().is_en();
    let in_settings = *app_state.view.read() == View::Settings;
    let mut view = app_state.view;

    rsx! {
        aside {
            class: "w-64 shrink-0 flex flex-col border-r border-gray-700 bg-gray-800",

            div {
                class: "px-4 py-5 text-lg font-semibold select-none",
                "TeamBoard"
            }

            OpenBoard {}
            BoardList {}

            button {
                class: if in_settings { "m-2 px-3 py-2 rounded-lg text-sm text-left bg-white/[0.08]" } else { "m-2 px-3 py-2 rounded-lg text-sm text-left text-gray-400 hover:bg-white/[0.05]" },
                onclick: move |_| view.set(if in_settings { View::Board } else { View::Settings }),
                if is_en { "Profile & settings" } else { "프로필 및 설정" }
            }
        }
    }
}
