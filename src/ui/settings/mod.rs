#![allow(non_snake_case)]

pub mod appearance;
pub mod profile;

use crate::app::AppState;
use crate::ui::settings::appearance::AppearanceSettings;
use crate::ui::settings::profile::ProfileSettings;
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy)]
enum SettingsTab {
    Profile,
    Appearance,
}

pub fn Settings() -> Element {
    let mut active_tab = use_signal(|| SettingsTab::Profile);
    let app_state = use_context::<AppState>();
    let is_en = app_state.settings.read().is_en();

    rsx! {
        div {
            class: "flex flex-col h-full min-h-0",

            // Header — tabs
            div {
                class: "flex-none px-6 py-4 border-b border-gray-700",

                div {
                    class: "max-w-3xl mx-auto w-full",

                    div {
                        class: "flex gap-1 p-1 rounded-xl w-fit bg-white/[0.03] border border-white/[0.06]",

                        TabButton {
                            active: active_tab() == SettingsTab::Profile,
                            onclick: move |_| active_tab.set(SettingsTab::Profile),
                            label: if is_en { "Profile" } else { "프로필" },
                        }
                        TabButton {
                            active: active_tab() == SettingsTab::Appearance,
                            onclick: move |_| active_tab.set(SettingsTab::Appearance),
                            label: if is_en { "Appearance" } else { "화면" },
                        }
                    }
                }
            }

            // Content Area
            div {
                class: "flex-1 overflow-y-auto p-6 scrollbar-thin",
                match active_tab() {
                    SettingsTab::Profile => rsx! { ProfileSettings {} },
                    SettingsTab::Appearance => rsx! { AppearanceSettings {} },
                }
            }
        }
    }
}

#[component]
fn TabButton(active: bool, onclick: EventHandler<MouseEvent>, label: String) -> Element {
    let classes = if active {
        "text-white shadow-sm bg-white/[0.06] border border-white/[0.08]"
    } else {
        "text-gray-500 hover:text-gray-300 border border-transparent"
    };

    rsx! {
        button {
            class: "py-2 px-4 rounded-lg text-sm font-medium transition-all {classes}",
            onclick: onclick,
            "{label}"
        }
    }
}
