//! 設定パネルコンポーネント
//!
//! ダークモード切替と言語選択

use leptos::prelude::*;
use ocr_client_common::Language;

#[component]
pub fn SettingsPanel<FD, FL>(
    dark_mode: Signal<bool>,
    language: Signal<Language>,
    on_toggle_dark: FD,
    on_language: FL,
) -> impl IntoView
where
    FD: Fn(()) + 'static + Clone,
    FL: Fn(Language) + 'static + Clone,
{
    view! {
        <div class="settings-panel">
            <div class="form-group">
                <label for="language">"Language"</label>
                <select
                    id="language"
                    on:change=move |ev| {
                        if let Some(lang) = Language::from_tag(&event_target_value(&ev)) {
                            on_language(lang);
                        }
                    }
                >
                    {Language::ALL
                        .into_iter()
                        .map(|lang| {
                            view! {
                                <option value=lang.as_str() selected=move || language.get() == lang>
                                    {lang.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <button
                class="btn btn-secondary btn-small"
                on:click=move |_| on_toggle_dark(())
            >
                {move || if dark_mode.get() { "Light mode" } else { "Dark mode" }}
            </button>
        </div>
    }
}
