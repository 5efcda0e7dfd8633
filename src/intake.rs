//! 送信対象ファイルの収集
//!
//! 拡張子から画像形式を判定し、PNG / JPEG / SVG / GIF 以外は対象外とする。

use crate::error::{OcrCliError, Result};
use ocr_client_common::ImageKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 送信候補
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub file_name: String,
    pub kind: ImageKind,
}

impl Candidate {
    /// 対応形式ならCandidateを作る
    pub fn from_path(path: &Path) -> Option<Self> {
        let kind = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImageKind::from_extension)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Some(Self {
            path: path.to_path_buf(),
            file_name,
            kind,
        })
    }

    /// 履歴に残すプレビュー参照（file:// URL）
    pub fn preview_url(&self) -> String {
        let absolute = self.path.canonicalize().unwrap_or_else(|_| self.path.clone());
        format!("file://{}", absolute.display())
    }

    pub fn read_bytes(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}

/// ファイルまたはフォルダから送信候補を集める
///
/// - ファイル指定: 対応外の形式はエラー
/// - フォルダ指定: 直下の対応形式のみ、ファイル名順
pub fn collect_candidates(path: &Path) -> Result<Vec<Candidate>> {
    if !path.exists() {
        return Err(OcrCliError::FileNotFound(path.display().to_string()));
    }

    if path.is_file() {
        return match Candidate::from_path(path) {
            Some(candidate) => Ok(vec![candidate]),
            None => Err(ocr_client_common::Error::UnsupportedType(path.display().to_string()).into()),
        };
    }

    let mut candidates = Vec::new();

    for entry in WalkDir::new(path)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let entry_path = entry.path();
        if !entry_path.is_file() {
            continue;
        }

        match Candidate::from_path(entry_path) {
            Some(candidate) => candidates.push(candidate),
            None => tracing::debug!("対象外の形式をスキップ: {}", entry_path.display()),
        }
    }

    // ファイル名でソート
    candidates.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(candidates)
}
