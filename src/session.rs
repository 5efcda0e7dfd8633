//! CLIセッション
//!
//! 共通の `AppState` に操作を適用し、返された副作用をローカルで実行する。
//! ブラウザ版と同じキーで設定・履歴を保存する。

use crate::client::OcrClient;
use crate::intake::Candidate;
use ocr_client_common::{storage, Action, AppState, ClientConfig, Effect, KeyValueStore, Submission};
use serde::Serialize;

/// 1ファイル分の認識結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionRecord {
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecognitionRecord {
    /// 結果エリアと同じ表示文字列
    pub fn display_text(&self) -> String {
        match (&self.text, &self.error) {
            (Some(text), _) => text.clone(),
            (None, Some(error)) => format!("Error: {}", error),
            (None, None) => String::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.text.is_some()
    }
}

pub struct Session<S: KeyValueStore> {
    state: AppState,
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    /// ストアから状態を復元してセッションを開始
    pub fn open(store: S, config: &ClientConfig) -> Self {
        let (state, warnings) = AppState::restore(&store);
        for warning in warnings {
            tracing::warn!("{}", warning);
        }
        Self {
            state: state.with_config(config),
            store,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 操作を適用し、送信以外の副作用を実行
    ///
    /// 送信要求は呼び出し側が処理するため返す。
    pub fn dispatch(&mut self, action: Action) -> Vec<Submission> {
        let mut submissions = Vec::new();

        for effect in self.state.apply(action) {
            match effect {
                Effect::Submit(submission) => submissions.push(submission),
                Effect::Persist(key) => {
                    if let Err(e) = storage::persist(&self.store, &self.state, key) {
                        tracing::error!("{} の保存に失敗: {}", key.as_str(), e);
                    }
                }
                Effect::ApplyTheme { dark } => tracing::debug!(dark, "テーマ設定を更新"),
                Effect::WriteClipboard(_) | Effect::ArmCopyTimer { .. } => {
                    tracing::debug!("端末ではクリップボード操作を行いません")
                }
            }
        }

        submissions
    }

    /// 1ファイルを送信して結果を状態に反映
    pub async fn process(&mut self, client: &OcrClient, candidate: &Candidate) -> RecognitionRecord {
        let submissions = self.dispatch(Action::FileAccepted {
            kind: candidate.kind,
            preview_url: candidate.preview_url(),
        });

        let mut record = RecognitionRecord {
            file_name: candidate.file_name.clone(),
            text: None,
            error: None,
        };

        for submission in submissions {
            let outcome = match candidate.read_bytes() {
                Ok(bytes) => client
                    .recognize(&candidate.file_name, bytes, &submission)
                    .await
                    .map_err(|e| e.to_string()),
                Err(e) => Err(format!("{}: {}", candidate.path.display(), e)),
            };

            let action = match outcome {
                Ok(text) => {
                    record.text = Some(text.clone());
                    let now = chrono::Local::now();
                    Action::SubmitSucceeded {
                        seq: submission.seq,
                        text,
                        id: now.timestamp_millis().max(0) as u64,
                        timestamp: now.format("%Y/%m/%d %H:%M:%S").to_string(),
                    }
                }
                Err(message) => {
                    tracing::error!("Error processing image {}: {}", candidate.file_name, message);
                    record.error = Some(message.clone());
                    Action::SubmitFailed {
                        seq: submission.seq,
                        message,
                    }
                }
            };
            let _ = self.dispatch(action);
        }

        record
    }
}
