use dioxus::prelude::*;

use crate::app::{AppState, View};

#[component]
pub fn BoardList() -> Element {
    let app_state = use_context::<AppState>();
    let is_en = app_state.settings.read().is_en();
    let boards = app_state.boards.read().clone();
    let selected = app_state.current_board.read().clone();

    rsx! {
        div {
            class: "flex-1 overflow-y-auto p-2 space-y-1 scrollbar-thin",

            if boards.is_empty() {
                div {
                    class: "flex flex-col items-center justify-center py-10 text-gray-500 gap-2 opacity-50",
                    span { class: "text-xs font-medium", if is_en { "No boards" } else { "게시판이 없습니다" } }
                }
            } else {
                div {
                    class: "text-[10px] uppercase tracking-widest text-gray-500 font-semibold px-3 py-2 select-none opacity-60",
                    if is_en { "Boards" } else { "게시판" }
                }

                {boards.into_iter().map(|entry| {
                    let is_selected = selected.as_ref() == Some(&entry.board);

                    let row_class = if is_selected {
                        "flex items-center gap-2.5 px-3 py-2 rounded-lg bg-white/[0.08] border-l-2 border-emerald-500 text-white cursor-pointer transition-all"
                    } else {
                        "flex items-center gap-2.5 px-3 py-2 rounded-lg hover:bg-white/[0.05] border-l-2 border-transparent text-gray-400 hover:text-white cursor-pointer transition-all"
                    };

                    let board = entry.board.clone();
                    let mut current_board = app_state.current_board;
                    let mut view = app_state.view;

                    rsx! {
                        div {
                            key: "{entry.title}",
                            class: "px-1",
                            onclick: move |_| {
                                tracing::debug!("Selected board {}", board.id);
                                current_board.set(Some(board.clone()));
                                view.set(View::Board);
                            },

                            div {
                                class: row_class,
                                svg {
                                    width: "14",
                                    height: "14",
                                    view_box: "0 0 24 24",
                                    fill: "none",
                                    stroke: "currentColor",
                                    stroke_width: "2",
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    path { d: "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" }
                                }
                                div {
                                    class: "truncate flex-1 text-sm",
                                    "{entry.title}"
                                }
                            }
                        }
                    }
                })}
            }
        }
    }
}
