//! OCR Client Common Library
//!
//! CLIとWeb(WASM)で共有される型・状態管理・永続化ロジック

pub mod config;
pub mod error;
pub mod history;
pub mod mime;
pub mod request;
pub mod response;
pub mod state;
pub mod storage;
pub mod theme;
pub mod types;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use history::History;
pub use mime::{ImageKind, ACCEPT_ATTR};
pub use request::{Submission, FIELD_FILE, FIELD_LANGUAGE};
pub use response::interpret_response;
pub use state::{Action, AppState, Effect, Phase};
pub use storage::{KeyValueStore, MemoryStore, StoreKey};
pub use theme::ThemeTokens;
pub use types::{HistoryEntry, Language, Preferences};
