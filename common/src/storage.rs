//! 設定と履歴の永続化
//!
//! ブラウザの localStorage と同じキー・値形式で保存する。
//! - `darkMode`: "true" / "false"
//! - `language`: "mongolian" / "cyrillic"
//! - `ocrHistory`: HistoryEntry配列のJSON

use crate::error::{Error, Result};
use crate::history::History;
use crate::state::AppState;
use crate::types::{Language, Preferences};
use std::cell::RefCell;
use std::collections::HashMap;

/// 文字列キー・値ストア
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// 保存キー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    DarkMode,
    Language,
    History,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::DarkMode => "darkMode",
            StoreKey::Language => "language",
            StoreKey::History => "ocrHistory",
        }
    }
}

/// 設定を読み込む
///
/// 欠落は既定値、不正値は既定値に戻したうえで警告として返す。
pub fn load_preferences<S: KeyValueStore + ?Sized>(store: &S) -> (Preferences, Vec<Error>) {
    let mut warnings = Vec::new();
    let mut preferences = Preferences::default();

    if let Some(raw) = store.get(StoreKey::DarkMode.as_str()) {
        match serde_json::from_str::<bool>(&raw) {
            Ok(dark_mode) => preferences.dark_mode = dark_mode,
            Err(_) => warnings.push(Error::Storage(format!("invalid darkMode value: {}", raw))),
        }
    }

    if let Some(raw) = store.get(StoreKey::Language.as_str()) {
        match Language::from_tag(&raw) {
            Some(language) => preferences.language = language,
            None => warnings.push(Error::Storage(format!("unknown language tag: {}", raw))),
        }
    }

    (preferences, warnings)
}

/// 履歴を読み込む（壊れていれば空の履歴）
pub fn load_history<S: KeyValueStore + ?Sized>(store: &S) -> (History, Option<Error>) {
    match store.get(StoreKey::History.as_str()) {
        None => (History::default(), None),
        Some(raw) => match History::from_json(&raw) {
            Ok(history) => (history, None),
            Err(e) => (
                History::default(),
                Some(Error::Storage(format!("corrupted history, starting empty: {}", e))),
            ),
        },
    }
}

/// 状態の該当項目を書き込む
pub fn persist<S: KeyValueStore + ?Sized>(store: &S, state: &AppState, key: StoreKey) -> Result<()> {
    let value = match key {
        StoreKey::DarkMode => state.preferences.dark_mode.to_string(),
        StoreKey::Language => state.preferences.language.as_str().to_string(),
        StoreKey::History => state.history.to_json()?,
    };
    store.set(key.as_str(), &value)
}

/// メモリ上のストア（テスト・ヘッドレス実行用）
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let store = MemoryStore::new();
        let (preferences, warnings) = load_preferences(&store);
        assert_eq!(preferences, Preferences::default());
        assert!(!preferences.dark_mode);
        assert_eq!(preferences.language, Language::Mongolian);
        assert!(warnings.is_empty());

        let (history, warning) = load_history(&store);
        assert!(history.is_empty());
        assert!(warning.is_none());
    }

    #[test]
    fn test_load_stored_preferences() {
        let store = MemoryStore::new();
        store.set("darkMode", "true").unwrap();
        store.set("language", "cyrillic").unwrap();

        let (preferences, warnings) = load_preferences(&store);
        assert!(preferences.dark_mode);
        assert_eq!(preferences.language, Language::Cyrillic);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let store = MemoryStore::new();
        store.set("darkMode", "yes").unwrap();
        store.set("language", "latin").unwrap();

        let (preferences, warnings) = load_preferences(&store);
        assert_eq!(preferences, Preferences::default());
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_corrupted_history_is_empty() {
        let store = MemoryStore::new();
        store.set("ocrHistory", "[{ broken").unwrap();

        let (history, warning) = load_history(&store);
        assert!(history.is_empty());
        assert!(matches!(warning, Some(Error::Storage(_))));
    }

    #[test]
    fn test_memory_store_remove() {
        let store = MemoryStore::new();
        store.set("language", "cyrillic").unwrap();
        store.remove("language").unwrap();
        assert!(store.get("language").is_none());
    }
}
