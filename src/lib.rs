//! OCR Client
//!
//! 画像をローカルのOCRサーバーへ送信し、認識テキストと履歴を扱うCLI

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod intake;
pub mod session;
pub mod store;
