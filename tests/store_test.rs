//! ファイルストアのテスト
//!
//! localStorage互換のキー・値ファイルと状態の復元を検証

use ocr_client::store::{FileStore, STORE_FILE_NAME};
use ocr_client_common::{storage, Action, AppState, ImageKind, KeyValueStore, Language, StoreKey};
use tempfile::tempdir;

/// 存在しないストアファイル
#[test]
fn test_store_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::in_dir(dir.path());

    assert!(store.get("darkMode").is_none());
    assert!(!store.path().exists());
}

/// 保存と読み込み
#[test]
fn test_store_set_and_get() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::in_dir(&dir.path().join("nested"));

    store.set("language", "cyrillic").expect("保存失敗");
    store.set("darkMode", "true").expect("保存失敗");

    let reopened = FileStore::in_dir(&dir.path().join("nested"));
    assert_eq!(reopened.get("language").as_deref(), Some("cyrillic"));
    assert_eq!(reopened.get("darkMode").as_deref(), Some("true"));
}

/// 値の上書きと削除
#[test]
fn test_store_overwrite_and_remove() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::in_dir(dir.path());

    store.set("language", "cyrillic").unwrap();
    store.set("language", "mongolian").unwrap();
    assert_eq!(store.get("language").as_deref(), Some("mongolian"));

    store.remove("language").unwrap();
    assert!(store.get("language").is_none());

    // 存在しないキーの削除はエラーにならない
    store.remove("missing").expect("削除は成功するはず");
}

/// ストアファイルが破損している場合
#[test]
fn test_store_corrupted_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join(STORE_FILE_NAME), "{ invalid json }").unwrap();

    let store = FileStore::in_dir(dir.path());
    assert!(store.get("language").is_none());

    // 破損していても上書き保存できる
    store.set("language", "cyrillic").expect("保存失敗");
    assert_eq!(store.get("language").as_deref(), Some("cyrillic"));
}

/// 再起動後に設定と履歴が復元される
#[test]
fn test_restore_state_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::in_dir(dir.path());
    let mut state = AppState::default();

    let apply = |state: &mut AppState, action: Action| {
        for effect in state.apply(action) {
            if let ocr_client_common::Effect::Persist(key) = effect {
                storage::persist(&store, state, key).expect("保存失敗");
            }
        }
    };

    apply(&mut state, Action::SetDarkMode(true));
    apply(&mut state, Action::SetLanguage(Language::Cyrillic));
    apply(
        &mut state,
        Action::FileAccepted {
            kind: ImageKind::Gif,
            preview_url: "file:///tmp/a.gif".to_string(),
        },
    );
    apply(
        &mut state,
        Action::SubmitSucceeded {
            seq: 1,
            text: "сайн байна уу".to_string(),
            id: 42,
            timestamp: "2026/10/19 10:00:00".to_string(),
        },
    );

    let raw = std::fs::read_to_string(dir.path().join(STORE_FILE_NAME)).unwrap();
    assert!(raw.contains(StoreKey::History.as_str()));

    let (restored, warnings) = AppState::restore(&FileStore::in_dir(dir.path()));
    assert!(warnings.is_empty());
    assert!(restored.preferences.dark_mode);
    assert_eq!(restored.preferences.language, Language::Cyrillic);
    assert_eq!(restored.history, state.history);
    assert_eq!(restored.history.latest().map(|e| e.id), Some(42));
}
