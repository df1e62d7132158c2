use crate::app::AppState;
use crate::storage::settings::save_settings;
use dioxus::prelude::*;

pub fn AppearanceSettings() -> Element {
    let app_state = use_context::<AppState>();
    let settings = app_state.settings.read().clone();
    let current_lang = settings.language.clone();
    let is_en = settings.is_en();
    let mut settings_lang = app_state.settings;

    rsx! {
        div {
            class: "space-y-6 max-w-3xl mx-auto pb-8",

            // Language Card
            div {
                class: "p-5 rounded-2xl bg-white/[0.03] border border-white/[0.06]",

                h3 {
                    class: "text-base font-semibold mb-5",
                    if is_en { "Language" } else { "언어" }
                }

                div { class: "grid grid-cols-2 gap-3",
                    for (code, label) in [("ko", "한국어"), ("en", "English")] {
                        button {
                            onclick: {
                                let code = code.to_string();
                                move |_| {
                                    let mut settings = settings_lang.write();
                                    settings.language = code.clone();
                                    if let Err(error) = save_settings(&settings) {
                                        tracing::error!("Failed to save settings: {}", error);
                                    }
                                }
                            },
                            class: format!(
                                "py-3 px-4 rounded-xl border transition-all text-center text-sm font-medium {}",
                                if current_lang == code {
                                    "border-emerald-500 bg-emerald-500/10 text-emerald-400"
                                } else {
                                    "border-gray-700 bg-white/[0.02] text-gray-400 hover:bg-white/[0.04]"
                                }
                            ),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
