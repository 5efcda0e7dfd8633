//! メインアプリケーションコンポーネント

use crate::components::{
    header::Header,
    history_list::HistoryList,
    preview::Preview,
    progress_bar::ProgressBar,
    result_panel::ResultPanel,
    settings_panel::SettingsPanel,
    upload_area::UploadArea,
};
use crate::effects::{accept_file, apply_theme_class, dispatch};
use crate::storage::LocalStore;
use leptos::logging::warn;
use leptos::prelude::*;
use ocr_client_common::{Action, AppState, ClientConfig, Language, ThemeTokens};
use web_sys::File;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = StoredValue::new(ClientConfig::from_build_env());

    // 保存済みの設定と履歴を復元
    let (restored, warnings) = AppState::restore(&LocalStore);
    for warning in &warnings {
        warn!("{}", warning);
    }
    let restored = restored.with_config(&config.get_value());
    apply_theme_class(restored.preferences.dark_mode);
    let state = RwSignal::new(restored);

    let dark_mode = Signal::derive(move || state.with(|s| s.preferences.dark_mode));
    let language = Signal::derive(move || state.with(|s| s.preferences.language));
    let show_upload = Signal::derive(move || state.with(|s| s.show_upload));
    let submitting = Signal::derive(move || state.with(|s| s.is_submitting()));
    let preview_url = Signal::derive(move || state.with(|s| s.preview_url.clone()));
    let result = Signal::derive(move || state.with(|s| s.result.clone()));
    let copied = Signal::derive(move || state.with(|s| s.copied));
    let history = Signal::derive(move || state.with(|s| s.history.entries().to_vec()));

    let on_toggle_dark = move |_: ()| dispatch(state, config, Action::ToggleDarkMode);
    let on_language = move |lang: Language| dispatch(state, config, Action::SetLanguage(lang));
    let on_toggle_upload = move |_: ()| dispatch(state, config, Action::ToggleUpload);
    let on_file = move |file: File| accept_file(state, config, file);
    let on_copy = move |_: ()| dispatch(state, config, Action::Copy);
    let on_clear_history = move |_: ()| dispatch(state, config, Action::ClearHistory);

    view! {
        <div
            class="app"
            class:dark=move || dark_mode.get()
            style=move || ThemeTokens::for_mode(dark_mode.get()).css_variables()
        >
            <main class="container">
                <SettingsPanel
                    dark_mode=dark_mode
                    language=language
                    on_toggle_dark=on_toggle_dark
                    on_language=on_language
                />

                <Header />

                <UploadArea
                    show_upload=show_upload
                    on_toggle_upload=on_toggle_upload
                    on_file=on_file
                />

                <ProgressBar active=submitting />

                <Preview preview_url=preview_url />

                <ResultPanel result=result copied=copied on_copy=on_copy />

                <HistoryList entries=history on_clear=on_clear_history />
            </main>
        </div>
    }
}
