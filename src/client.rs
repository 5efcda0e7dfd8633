//! OCRサーバーHTTPクライアント
//!
//! 画像を multipart/form-data で POST し、レスポンスを共通ロジックで解釈する。

use crate::error::{OcrCliError, Result};
use ocr_client_common::{interpret_response, ClientConfig, Error, Submission, FIELD_FILE};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

pub struct OcrClient {
    http: reqwest::Client,
    endpoint: String,
    timeout_ms: u64,
}

impl OcrClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| OcrCliError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            timeout_ms: config.timeout_ms,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 画像を送信して認識テキストを取得
    ///
    /// # Arguments
    /// * `file_name` - multipartに載せるファイル名
    /// * `bytes` - 画像データ
    /// * `submission` - 形式・言語などの送信情報
    pub async fn recognize(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        submission: &Submission,
    ) -> ocr_client_common::Result<String> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(submission.kind.mime_type())
            .map_err(|e| self.classify(e))?;

        let mut form = Form::new().part(FIELD_FILE, part);
        for (name, value) in submission.text_fields() {
            form = form.text(name, value);
        }

        tracing::debug!(endpoint = %self.endpoint, seq = submission.seq, "OCRリクエスト送信");

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.classify(e))?;
        tracing::debug!(status, bytes = body.len(), "OCRレスポンス受信");

        interpret_response(status, &body)
    }

    fn classify(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout(self.timeout_ms)
        } else {
            Error::Transport(e.to_string())
        }
    }
}
