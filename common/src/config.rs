//! クライアント設定
//!
//! エンドポイントやタイムアウトなど、CLIとWebで共通の既定値

use serde::{Deserialize, Serialize};

/// OCRサーバーの既定エンドポイント
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// リクエストタイムアウト既定値（ミリ秒）
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// 履歴の最大保持件数
pub const HISTORY_LIMIT: usize = 10;

/// 「Copied」表示の継続時間（ミリ秒）
pub const COPY_ACK_MS: u32 = 2_000;

/// クライアント設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
    /// 成功結果を履歴に記録するか
    pub record_history: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            record_history: true,
        }
    }
}

impl ClientConfig {
    /// ビルド時の環境変数 `OCR_ENDPOINT` で上書きした設定
    ///
    /// WASMビルドでは実行時の環境変数が無いため、コンパイル時に埋め込む。
    pub fn from_build_env() -> Self {
        match option_env!("OCR_ENDPOINT") {
            Some(endpoint) if !endpoint.trim().is_empty() => Self {
                endpoint: endpoint.trim().to_string(),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }
}
