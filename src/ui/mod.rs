//! UI components for TeamBoard
//!
//! This module contains all user interface components built with Dioxus.

pub mod board;
pub mod components;
pub mod settings;
pub mod sidebar;

use crate::app::{AppState, View};
use board::BoardDetail;
use dioxus::prelude::*;
use settings::Settings;
use sidebar::Sidebar;

/// Sidebar plus the active main panel
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let view = *app_state.view.read();

    rsx! {
        div {
            class: "flex h-screen w-full overflow-hidden bg-gray-900 text-white",

            Sidebar {}

            main {
                class: "flex-1 min-w-0 overflow-y-auto",
                match view {
                    View::Board => rsx! { BoardDetail {} },
                    View::Settings => rsx! { Settings {} },
                }
            }
        }
    }
}
