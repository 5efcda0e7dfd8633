//! OCRリクエストの組み立て情報
//!
//! multipart/form-data のフィールド名と、1回の送信を表す `Submission`

use crate::mime::ImageKind;
use crate::types::Language;

/// 画像ファイルのフィールド名
pub const FIELD_FILE: &str = "file";

/// 言語タグのフィールド名
pub const FIELD_LANGUAGE: &str = "language";

/// 1回分の送信要求
///
/// `seq` は送信ごとに単調増加し、最新の送信以外の応答は破棄される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub seq: u64,
    pub kind: ImageKind,
    pub language: Language,
}

impl Submission {
    /// ファイル以外のテキストフィールド
    pub fn text_fields(&self) -> [(&'static str, &'static str); 1] {
        [(FIELD_LANGUAGE, self.language.as_str())]
    }
}
