//! アプリケーション状態
//!
//! 状態は `AppState` ひとつにまとめ、`Action` を適用して更新する。
//! 副作用（送信・保存・テーマ適用・クリップボード・タイマー）は `Effect` として返し、
//! 実行はWeb/CLIそれぞれのシェル側で行う。
//!
//! 状態遷移: `Idle → Submitting{seq} → (成功 | 失敗) → Idle`

use crate::config::{ClientConfig, COPY_ACK_MS};
use crate::error::Error;
use crate::history::History;
use crate::mime::ImageKind;
use crate::request::Submission;
use crate::storage::{self, KeyValueStore, StoreKey};
use crate::types::{HistoryEntry, Language, Preferences};

/// 送信フェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting { seq: u64 },
}

/// 状態を変更する操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// アップロード欄の開閉
    ToggleUpload,
    /// MIME判定を通過したファイル
    FileAccepted { kind: ImageKind, preview_url: String },
    SubmitSucceeded {
        seq: u64,
        text: String,
        /// 履歴ID（UNIXミリ秒）
        id: u64,
        timestamp: String,
    },
    SubmitFailed { seq: u64, message: String },
    ToggleDarkMode,
    SetDarkMode(bool),
    SetLanguage(Language),
    ClearHistory,
    Copy,
    CopyAckExpired { generation: u64 },
}

/// シェルが実行する副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Submit(Submission),
    Persist(StoreKey),
    ApplyTheme { dark: bool },
    WriteClipboard(String),
    ArmCopyTimer { generation: u64, after_ms: u32 },
}

/// アプリケーションの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub preferences: Preferences,
    pub history: History,
    pub preview_url: Option<String>,
    pub result: Option<String>,
    pub show_upload: bool,
    pub phase: Phase,
    pub copied: bool,
    pub record_history: bool,
    last_seq: u64,
    copy_generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Preferences::default(), History::default())
    }
}

impl AppState {
    pub fn new(preferences: Preferences, history: History) -> Self {
        Self {
            preferences,
            history,
            preview_url: None,
            result: None,
            show_upload: false,
            phase: Phase::Idle,
            copied: false,
            record_history: true,
            last_seq: 0,
            copy_generation: 0,
        }
    }

    /// ストアから設定と履歴を復元
    ///
    /// 読み込めなかった値は既定値になり、その理由を警告として返す。
    pub fn restore<S: KeyValueStore + ?Sized>(store: &S) -> (Self, Vec<Error>) {
        let (preferences, mut warnings) = storage::load_preferences(store);
        let (history, history_warning) = storage::load_history(store);
        warnings.extend(history_warning);
        (Self::new(preferences, history), warnings)
    }

    /// 設定ファイルの値を反映
    pub fn with_config(mut self, config: &ClientConfig) -> Self {
        self.record_history = config.record_history;
        self
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    pub fn can_copy(&self) -> bool {
        self.result.is_some()
    }

    /// 操作を適用し、必要な副作用を返す
    #[must_use]
    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::ToggleUpload => {
                self.show_upload = !self.show_upload;
                vec![]
            }

            Action::FileAccepted { kind, preview_url } => {
                self.last_seq += 1;
                let seq = self.last_seq;
                self.preview_url = Some(preview_url);
                self.show_upload = false;
                self.phase = Phase::Submitting { seq };
                vec![Effect::Submit(Submission {
                    seq,
                    kind,
                    language: self.preferences.language,
                })]
            }

            Action::SubmitSucceeded { seq, text, id, timestamp } => {
                if seq != self.last_seq {
                    return vec![];
                }
                self.phase = Phase::Idle;
                self.result = Some(text.clone());

                if !self.record_history {
                    return vec![];
                }
                self.history.push(HistoryEntry {
                    id,
                    timestamp,
                    image_url: self.preview_url.clone().unwrap_or_default(),
                    text,
                    language: self.preferences.language,
                });
                vec![Effect::Persist(StoreKey::History)]
            }

            Action::SubmitFailed { seq, message } => {
                if seq != self.last_seq {
                    return vec![];
                }
                self.phase = Phase::Idle;
                self.result = Some(format!("Error: {}", message));
                vec![]
            }

            Action::ToggleDarkMode => self.set_dark_mode(!self.preferences.dark_mode),

            Action::SetDarkMode(dark) => {
                if dark == self.preferences.dark_mode {
                    return vec![];
                }
                self.set_dark_mode(dark)
            }

            Action::SetLanguage(language) => {
                if language == self.preferences.language {
                    return vec![];
                }
                self.preferences.language = language;
                vec![Effect::Persist(StoreKey::Language)]
            }

            Action::ClearHistory => {
                if self.history.is_empty() {
                    return vec![];
                }
                self.history.clear();
                vec![Effect::Persist(StoreKey::History)]
            }

            Action::Copy => {
                let Some(text) = self.result.clone() else {
                    return vec![];
                };
                self.copied = true;
                self.copy_generation += 1;
                vec![
                    Effect::WriteClipboard(text),
                    Effect::ArmCopyTimer {
                        generation: self.copy_generation,
                        after_ms: COPY_ACK_MS,
                    },
                ]
            }

            Action::CopyAckExpired { generation } => {
                // 再コピーで張り直したタイマーだけが表示を消す
                if generation == self.copy_generation {
                    self.copied = false;
                }
                vec![]
            }
        }
    }

    fn set_dark_mode(&mut self, dark: bool) -> Vec<Effect> {
        self.preferences.dark_mode = dark;
        vec![
            Effect::Persist(StoreKey::DarkMode),
            Effect::ApplyTheme { dark },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn accept(state: &mut AppState, preview: &str) -> Submission {
        let effects = state.apply(Action::FileAccepted {
            kind: ImageKind::Png,
            preview_url: preview.to_string(),
        });
        match effects.as_slice() {
            [Effect::Submit(submission)] => *submission,
            other => panic!("送信が1件だけ要求されるはず: {:?}", other),
        }
    }

    fn succeed(seq: u64, text: &str) -> Action {
        Action::SubmitSucceeded {
            seq,
            text: text.to_string(),
            id: 1_000 + seq,
            timestamp: format!("t{}", seq),
        }
    }

    #[test]
    fn test_file_accepted_starts_submission() {
        let mut state = AppState::default();
        state.show_upload = true;
        let submission = accept(&mut state, "blob:1");

        assert_eq!(state.preview_url.as_deref(), Some("blob:1"));
        assert!(!state.show_upload);
        assert_eq!(state.phase, Phase::Submitting { seq: submission.seq });
        assert_eq!(submission.language, Language::Mongolian);
        assert_eq!(submission.kind, ImageKind::Png);
    }

    #[test]
    fn test_success_sets_result_and_prepends_history() {
        let mut state = AppState::default();
        state.preferences.language = Language::Cyrillic;
        let submission = accept(&mut state, "blob:1");

        let effects = state.apply(succeed(submission.seq, "сайн байна уу"));

        assert_eq!(state.result.as_deref(), Some("сайн байна уу"));
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(effects, vec![Effect::Persist(StoreKey::History)]);

        let entry = state.history.latest().expect("履歴が追加されるはず");
        assert_eq!(entry.text, "сайн байна уу");
        assert_eq!(entry.language, Language::Cyrillic);
        assert_eq!(entry.image_url, "blob:1");
    }

    #[test]
    fn test_success_without_history_recording() {
        let config = ClientConfig {
            record_history: false,
            ..ClientConfig::default()
        };
        let mut state = AppState::default().with_config(&config);
        let submission = accept(&mut state, "blob:1");

        let effects = state.apply(succeed(submission.seq, "text"));
        assert!(effects.is_empty());
        assert!(state.history.is_empty());
        assert_eq!(state.result.as_deref(), Some("text"));
    }

    #[test]
    fn test_failure_renders_error_prefix() {
        let mut state = AppState::default();
        let submission = accept(&mut state, "blob:1");

        let effects = state.apply(Action::SubmitFailed {
            seq: submission.seq,
            message: "Server error: 500 - internal error".to_string(),
        });

        assert!(effects.is_empty());
        assert_eq!(
            state.result.as_deref(),
            Some("Error: Server error: 500 - internal error")
        );
        assert!(state.history.is_empty());
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = AppState::default();
        let first = accept(&mut state, "blob:1");
        let second = accept(&mut state, "blob:2");
        assert!(second.seq > first.seq);

        // 古い送信の応答が後から届いても反映しない
        let effects = state.apply(succeed(first.seq, "old"));
        assert!(effects.is_empty());
        assert!(state.result.is_none());
        assert!(state.is_submitting());

        let _ = state.apply(succeed(second.seq, "new"));
        assert_eq!(state.result.as_deref(), Some("new"));
        assert_eq!(state.history.len(), 1);

        let _ = state.apply(Action::SubmitFailed {
            seq: first.seq,
            message: "late".to_string(),
        });
        assert_eq!(state.result.as_deref(), Some("new"));
    }

    #[test]
    fn test_history_capped_through_actions() {
        let mut state = AppState::default();
        for i in 0..11 {
            let submission = accept(&mut state, &format!("blob:{}", i));
            let _ = state.apply(succeed(submission.seq, &format!("text {}", i)));
        }
        assert_eq!(state.history.len(), 10);
        assert_eq!(state.history.latest().map(|e| e.text.as_str()), Some("text 10"));
        assert!(state.history.entries().iter().all(|e| e.text != "text 0"));
    }

    #[test]
    fn test_toggle_dark_mode_twice_restores() {
        let store = MemoryStore::new();
        let mut state = AppState::default();
        let mut theme_class = false;

        for _ in 0..2 {
            for effect in state.apply(Action::ToggleDarkMode) {
                match effect {
                    Effect::Persist(key) => storage::persist(&store, &state, key).unwrap(),
                    Effect::ApplyTheme { dark } => theme_class = dark,
                    other => panic!("想定外の副作用: {:?}", other),
                }
            }
        }

        assert_eq!(store.get("darkMode").as_deref(), Some("false"));
        assert!(!theme_class);
        assert!(!state.preferences.dark_mode);
    }

    #[test]
    fn test_set_same_preference_is_noop() {
        let mut state = AppState::default();
        assert!(state.apply(Action::SetDarkMode(false)).is_empty());
        assert!(state.apply(Action::SetLanguage(Language::Mongolian)).is_empty());
        assert_eq!(
            state.apply(Action::SetLanguage(Language::Cyrillic)),
            vec![Effect::Persist(StoreKey::Language)]
        );
    }

    #[test]
    fn test_copy_without_result_is_noop() {
        let mut state = AppState::default();
        assert!(state.apply(Action::Copy).is_empty());
        assert!(!state.copied);
        assert!(!state.can_copy());
    }

    #[test]
    fn test_copy_ack_resets_on_retrigger() {
        let mut state = AppState::default();
        let submission = accept(&mut state, "blob:1");
        let _ = state.apply(succeed(submission.seq, "abc"));

        let first = state.apply(Action::Copy);
        assert_eq!(first[0], Effect::WriteClipboard("abc".to_string()));
        let second = state.apply(Action::Copy);

        let generation_of = |effects: &[Effect]| {
            effects.iter().find_map(|e| match e {
                Effect::ArmCopyTimer { generation, after_ms } => {
                    assert_eq!(*after_ms, 2_000);
                    Some(*generation)
                }
                _ => None,
            })
        };
        let g1 = generation_of(&first).expect("タイマーが要求されるはず");
        let g2 = generation_of(&second).expect("タイマーが要求されるはず");

        // 最初のタイマーは表示を消さない
        let _ = state.apply(Action::CopyAckExpired { generation: g1 });
        assert!(state.copied);

        let _ = state.apply(Action::CopyAckExpired { generation: g2 });
        assert!(!state.copied);
    }

    #[test]
    fn test_clear_history() {
        let mut state = AppState::default();
        assert!(state.apply(Action::ClearHistory).is_empty());

        let submission = accept(&mut state, "blob:1");
        let _ = state.apply(succeed(submission.seq, "abc"));
        assert_eq!(
            state.apply(Action::ClearHistory),
            vec![Effect::Persist(StoreKey::History)]
        );
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_restore_after_reload() {
        let store = MemoryStore::new();
        let mut state = AppState::default();

        let run = |state: &mut AppState, action: Action| {
            for effect in state.apply(action) {
                if let Effect::Persist(key) = effect {
                    storage::persist(&store, state, key).unwrap();
                }
            }
        };

        run(&mut state, Action::SetDarkMode(true));
        run(&mut state, Action::SetLanguage(Language::Cyrillic));
        let submission = accept(&mut state, "blob:1");
        run(&mut state, succeed(submission.seq, "сайн"));

        let (restored, warnings) = AppState::restore(&store);
        assert!(warnings.is_empty());
        assert_eq!(restored.preferences, state.preferences);
        assert_eq!(restored.history, state.history);
        assert!(restored.result.is_none());
    }

    #[test]
    fn test_restore_corrupted_history() {
        let store = MemoryStore::new();
        store.set("ocrHistory", "not json").unwrap();
        store.set("darkMode", "true").unwrap();

        let (state, warnings) = AppState::restore(&store);
        assert!(state.history.is_empty());
        assert!(state.preferences.dark_mode);
        assert_eq!(warnings.len(), 1);
    }
}
