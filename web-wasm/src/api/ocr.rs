//! OCRサーバーへの画像送信
//!
//! multipart/form-data で `file` と `language` を POST し、
//! レスポンスを共通ライブラリの `interpret_response` で解釈する。

use gloo::timers::callback::Timeout;
use ocr_client_common::{interpret_response, Error, Result, Submission, FIELD_FILE};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, File, FormData, Request, RequestInit, RequestMode, Response};

/// JS側の例外をメッセージ文字列に変換
fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

fn transport(value: JsValue) -> Error {
    Error::Transport(js_message(&value))
}

/// フォームデータを組み立て
fn build_form(file: &File, submission: &Submission) -> Result<FormData> {
    let form = FormData::new().map_err(transport)?;
    form.append_with_blob_and_filename(FIELD_FILE, file, &file.name())
        .map_err(transport)?;
    for (name, value) in submission.text_fields() {
        form.append_with_str(name, value).map_err(transport)?;
    }
    Ok(form)
}

/// 画像を送信して認識テキストを取得
///
/// # Arguments
/// * `endpoint` - OCRサーバーのURL
/// * `timeout_ms` - タイムアウト（超過時はリクエストを中断）
/// * `file` - 送信する画像
/// * `submission` - 送信情報（言語など）
pub async fn recognize(
    endpoint: &str,
    timeout_ms: u64,
    file: &File,
    submission: &Submission,
) -> Result<String> {
    let form = build_form(file, submission)?;

    let controller = AbortController::new().map_err(transport)?;
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);
    opts.set_signal(Some(&controller.signal()));

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(transport)?;

    // 応答が返るまで保持し、ドロップ時にタイマーを解除する
    let _deadline = {
        let controller = controller.clone();
        Timeout::new(timeout_ms.min(u32::MAX as u64) as u32, move || controller.abort())
    };

    let window = web_sys::window().ok_or_else(|| Error::Transport("window is not available".into()))?;
    let resp_value = match JsFuture::from(window.fetch_with_request(&request)).await {
        Ok(value) => value,
        Err(_) if controller.signal().aborted() => return Err(Error::Timeout(timeout_ms)),
        Err(e) => return Err(transport(e)),
    };
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    let text_promise = resp.text().map_err(transport)?;
    let body = match JsFuture::from(text_promise).await {
        Ok(value) => value.as_string().unwrap_or_default(),
        Err(_) if controller.signal().aborted() => return Err(Error::Timeout(timeout_ms)),
        Err(e) => return Err(transport(e)),
    };

    interpret_response(resp.status(), &body)
}
