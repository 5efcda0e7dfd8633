//! ドメイン型の定義
//!
//! - Language: OCR言語（モンゴル文字 / キリル文字）
//! - Preferences: ダークモードと言語の設定
//! - HistoryEntry: 認識結果の履歴1件

use serde::{Deserialize, Serialize};
use std::fmt;

/// OCR対象の言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Mongolian,
    Cyrillic,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Mongolian, Language::Cyrillic];

    /// 永続化・送信に使うタグ
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Mongolian => "mongolian",
            Language::Cyrillic => "cyrillic",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "mongolian" => Some(Language::Mongolian),
            "cyrillic" => Some(Language::Cyrillic),
            _ => None,
        }
    }

    /// 画面表示用のラベル
    pub fn label(&self) -> &'static str {
        match self {
            Language::Mongolian => "Mongolian script",
            Language::Cyrillic => "Mongolian Cyrillic",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(&s.to_lowercase())
            .ok_or_else(|| format!("Unknown language: {}. Use mongolian or cyrillic", s))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ユーザー設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub language: Language,
}

/// 認識結果の履歴エントリ
///
/// 作成後に変更されることはない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// 作成時刻（UNIXミリ秒）
    pub id: u64,
    /// 表示用の日時文字列
    pub timestamp: String,
    /// プレビュー参照
    pub image_url: String,
    pub text: String,
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_default() {
        assert_eq!(Language::default(), Language::Mongolian);
    }

    #[test]
    fn test_language_tags() {
        for lang in Language::ALL {
            assert_eq!(Language::from_tag(lang.as_str()), Some(lang));
        }
        assert_eq!(Language::from_tag("latin"), None);
        assert_eq!(Language::Cyrillic.to_string(), "cyrillic");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("Cyrillic".parse::<Language>(), Ok(Language::Cyrillic));
        assert!("latin".parse::<Language>().is_err());
    }

    #[test]
    fn test_history_entry_serialize() {
        let entry = HistoryEntry {
            id: 1_700_000_000_000,
            timestamp: "2026/10/19 12:00:00".to_string(),
            image_url: "blob:http://localhost/abc".to_string(),
            text: "сайн байна уу".to_string(),
            language: Language::Cyrillic,
        };

        let json = serde_json::to_string(&entry).expect("シリアライズ失敗");
        assert!(json.contains("\"imageUrl\":\"blob:http://localhost/abc\""));
        assert!(json.contains("\"language\":\"cyrillic\""));
        assert!(json.contains("\"id\":1700000000000"));
    }

    #[test]
    fn test_history_entry_deserialize() {
        let json = r#"{
            "id": 1,
            "timestamp": "1/1/2025, 10:00:00 AM",
            "imageUrl": "blob:x",
            "text": "ᠮᠣᠩᠭᠣᠯ",
            "language": "mongolian"
        }"#;

        let entry: HistoryEntry = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(entry.text, "ᠮᠣᠩᠭᠣᠯ");
        assert_eq!(entry.language, Language::Mongolian);
    }
}
