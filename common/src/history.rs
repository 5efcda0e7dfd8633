//! 認識履歴
//!
//! 新しい順に並んだ上限付きリスト。上限を超えた分は古い方から捨てる。

use crate::config::HISTORY_LIMIT;
use crate::error::Result;
use crate::types::HistoryEntry;

/// 上限付きの認識履歴（先頭が最新）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }
}

impl History {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// 保存済みJSONから復元
    ///
    /// 上限より多く保存されていた場合は新しい方から上限件数だけ残す。
    pub fn from_json(raw: &str) -> Result<Self> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(raw)?;
        let mut history = Self::default();
        history.entries = entries;
        history.entries.truncate(history.limit);
        Ok(history)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// 先頭に追加し、上限を超えた古いエントリを捨てる
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.limit);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
