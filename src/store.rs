//! ファイルベースのキー・値ストア
//!
//! ブラウザの localStorage と同じキー（darkMode / language / ocrHistory）を
//! 1つのJSONファイルに保存する。

use ocr_client_common::{Error, KeyValueStore, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

pub const STORE_FILE_NAME: &str = "storage.json";

/// JSONファイルに保存するストア
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 指定ディレクトリ直下の storage.json を使う
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 全件読み込み（存在しない・壊れている場合は空）
    fn load(&self) -> BTreeMap<String, String> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return BTreeMap::new(),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("ストアファイルが壊れています、空として扱います: {} ({})", self.path.display(), e);
                BTreeMap::new()
            }
        }
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let storage_error = |e: std::io::Error| Error::Storage(format!("{}: {}", self.path.display(), e));

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(storage_error)?;
        }
        let file = File::create(&self.path).map_err(storage_error)?;
        serde_json::to_writer_pretty(BufWriter::new(file), values)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load();
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.load();
        if values.remove(key).is_some() {
            self.save(&values)?;
        }
        Ok(())
    }
}
