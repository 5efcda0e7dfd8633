//! 副作用の実行
//!
//! `AppState::apply` が返した `Effect` をブラウザAPIで実行する。

use crate::api;
use crate::storage::LocalStore;
use gloo::timers::callback::Timeout;
use leptos::logging::{error, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use ocr_client_common::theme::DARK_CLASS;
use ocr_client_common::{storage, Action, AppState, ClientConfig, Effect, ImageKind, Submission};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Url};

/// 操作を適用し、副作用を実行
pub fn dispatch(state: RwSignal<AppState>, config: StoredValue<ClientConfig>, action: Action) {
    let effects = state.try_update(|s| s.apply(action)).unwrap_or_default();
    run(state, config, effects, None);
}

/// 選択・ドロップされたファイルを受け付ける
///
/// 対応外のMIMEタイプは何もせずに無視する。
pub fn accept_file(state: RwSignal<AppState>, config: StoredValue<ClientConfig>, file: File) {
    let Some(kind) = ImageKind::from_mime(&file.type_()) else {
        return;
    };

    let preview_url = match Url::create_object_url_with_blob(&file) {
        Ok(url) => url,
        Err(e) => {
            error!("Failed to create preview for {}: {:?}", file.name(), e);
            return;
        }
    };

    let effects = state
        .try_update(|s| s.apply(Action::FileAccepted { kind, preview_url }))
        .unwrap_or_default();
    run(state, config, effects, Some(&file));
}

fn run(
    state: RwSignal<AppState>,
    config: StoredValue<ClientConfig>,
    effects: Vec<Effect>,
    file: Option<&File>,
) {
    for effect in effects {
        match effect {
            Effect::Submit(submission) => match file {
                Some(file) => spawn_local(submit(state, config, file.clone(), submission)),
                None => warn!("submission {} has no file attached", submission.seq),
            },
            Effect::Persist(key) => {
                let result = state.with_untracked(|s| storage::persist(&LocalStore, s, key));
                if let Err(e) = result {
                    error!("Failed to save {}: {}", key.as_str(), e);
                }
            }
            Effect::ApplyTheme { dark } => apply_theme_class(dark),
            Effect::WriteClipboard(text) => spawn_local(write_clipboard(text)),
            Effect::ArmCopyTimer { generation, after_ms } => {
                Timeout::new(after_ms, move || {
                    dispatch(state, config, Action::CopyAckExpired { generation })
                })
                .forget();
            }
        }
    }
}

async fn submit(
    state: RwSignal<AppState>,
    config: StoredValue<ClientConfig>,
    file: File,
    submission: Submission,
) {
    let (endpoint, timeout_ms) = config.with_value(|c| (c.endpoint.clone(), c.timeout_ms));

    let action = match api::ocr::recognize(&endpoint, timeout_ms, &file, &submission).await {
        Ok(text) => Action::SubmitSucceeded {
            seq: submission.seq,
            text,
            id: js_sys::Date::now() as u64,
            timestamp: display_timestamp(),
        },
        Err(e) => {
            error!("Error processing image: {}", e);
            Action::SubmitFailed {
                seq: submission.seq,
                message: e.to_string(),
            }
        }
    };

    dispatch(state, config, action);
}

async fn write_clipboard(text: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(&text);
    if let Err(e) = JsFuture::from(promise).await {
        error!("Failed to copy text: {:?}", e);
    }
}

/// ドキュメントルートのテーマクラスを切り替え
pub fn apply_theme_class(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, dark) {
        error!("Failed to apply theme: {:?}", e);
    }
}

fn display_timestamp() -> String {
    String::from(js_sys::Date::new_0().to_locale_string("default", &JsValue::UNDEFINED))
}
