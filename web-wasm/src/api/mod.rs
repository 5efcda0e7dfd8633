//! OCRサーバー連携

pub mod ocr;
