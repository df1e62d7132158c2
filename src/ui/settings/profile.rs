use crate::app::AppState;
use crate::storage::settings::save_settings;
use dioxus::prelude::*;

/// Display name used as the author of new comments
pub fn ProfileSettings() -> Element {
    let app_state = use_context::<AppState>();
    let settings = app_state.settings.read().clone();
    let is_en = settings.is_en();
    let mut draft = use_signal(|| settings.display_name.clone().unwrap_or_default());
    let mut settings_signal = app_state.settings;

    let placeholder = settings.author_name();
    let unchanged = draft().trim() == settings.display_name.as_deref().unwrap_or("");

    rsx! {
        div {
            class: "space-y-6 max-w-3xl mx-auto pb-8",

            div {
                class: "p-5 rounded-2xl bg-white/[0.03] border border-white/[0.06]",

                h3 {
                    class: "text-base font-semibold mb-5",
                    if is_en { "Display name" } else { "표시 이름" }
                }
                div {
                    class: "text-xs text-gray-500 mb-4",
                    if is_en { "Shown as the author of the comments you post." } else { "작성한 댓글의 작성자로 표시됩니다." }
                }

                div {
                    class: "flex gap-3",
                    input {
                        class: "flex-1 px-3 py-2 rounded-lg bg-gray-700 text-sm text-white outline-none",
                        placeholder: "{placeholder}",
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    button {
                        class: "px-4 py-2 rounded-lg text-sm bg-emerald-500 text-white disabled:opacity-40",
                        disabled: unchanged,
                        onclick: move |_| {
                            let mut settings = settings_signal.write();
                            settings.display_name = Some(draft());
                            settings.validate();
                            if let Err(error) = save_settings(&settings) {
                                tracing::error!("Failed to save settings: {}", error);
                            }
                        },
                        if is_en { "Save" } else { "저장" }
                    }
                }
            }
        }
    }
}
