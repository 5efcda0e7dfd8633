//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// Display文字列はそのまま結果エリアに `Error: ...` として表示される。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Server error: {status} - {body}")]
    Server { status: u16, body: String },

    #[error("{0}")]
    Transport(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response did not contain a text field")]
    MissingText,

    #[error("Recognition failed: {0}")]
    Recognition(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
