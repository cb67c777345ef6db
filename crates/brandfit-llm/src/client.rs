//! Gemini `generateContent` client.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde_json::{json, Value};

use crate::error::LlmError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// One creative image, in upload order, with its declared MIME type.
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub bytes: Vec<u8>,
    pub mime: String,
}

/// Explicitly constructed, dependency-injected model client. One
/// initialization point; no hidden reinitialization.
pub struct GeminiClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest` client
    /// cannot be constructed.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Point the client at a different API host (used in tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Issue one generation request and return the response text.
    ///
    /// Multimodal when `images` is non-empty: image parts follow the text
    /// part in order. Output is requested as JSON-formatted text with
    /// thinking disabled. Any transport or decode failure is returned as
    /// a `Gemini Error: ...` string rather than propagated.
    pub async fn generate(&self, prompt: &str, images: &[ImageInput]) -> String {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = build_request_body(prompt, images);

        let response = match self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return format!("Gemini Error: {e}"),
        };

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "model call failed");
            return format!("Gemini Error: HTTP {status}: {detail}");
        }

        match response.json::<Value>().await {
            Ok(value) => extract_text(&value),
            Err(e) => format!("Gemini Error: {e}"),
        }
    }
}

/// Request body: one user turn whose first part is the prompt text,
/// followed by base64 inline-data parts for each image.
pub(crate) fn build_request_body(prompt: &str, images: &[ImageInput]) -> Value {
    let mut parts = vec![json!({ "text": prompt })];
    for image in images {
        parts.push(json!({
            "inline_data": {
                "mime_type": image.mime,
                "data": BASE64.encode(&image.bytes),
            }
        }));
    }
    json!({
        "contents": [{ "role": "user", "parts": parts }],
        "generationConfig": {
            "responseModalities": ["TEXT"],
            "responseMimeType": "application/json",
            "thinkingConfig": { "thinkingBudget": 0 }
        }
    })
}

/// Concatenate the text parts of the first candidate, trimmed. Missing
/// structure yields an empty string.
fn extract_text(value: &Value) -> String {
    let parts = value
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|c| c.first())
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(Value::as_array);
    let Some(parts) = parts else {
        return String::new();
    };
    parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join("")
        .trim()
        .to_string()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
