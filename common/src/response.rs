//! OCRサーバーのレスポンス解釈
//!
//! - 2xx以外: ステータスと本文を含むエラー
//! - 2xx: JSONの `text` フィールドを結果とする
//! - 2xxでも `error` フィールドのみの場合はサーバー側の認識失敗として扱う

use crate::error::{Error, Result};
use serde::Deserialize;

/// OCRサーバーのレスポンス本文
#[derive(Debug, Deserialize)]
struct OcrResponse {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTPステータスと本文から認識結果を取り出す
///
/// # Arguments
/// * `status` - HTTPステータスコード
/// * `body` - レスポンス本文（テキスト）
///
/// # Returns
/// * `Ok(String)` - 認識テキスト
/// * `Err` - サーバーエラー、JSON不正、`text` 欠落
pub fn interpret_response(status: u16, body: &str) -> Result<String> {
    if !(200..300).contains(&status) {
        return Err(Error::Server {
            status,
            body: body.to_string(),
        });
    }

    let response: OcrResponse = serde_json::from_str(body)?;
    match (response.text, response.error) {
        (Some(text), _) => Ok(text),
        (None, Some(error)) => Err(Error::Recognition(error)),
        (None, None) => Err(Error::MissingText),
    }
}
