use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::Duration;

use crate::config::Config;
use crate::services::inference::{InferenceClient, InferenceError, InlineImage};

/// generateContent request body
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    #[serde(rename_all = "camelCase")]
    InlineData {
        inline_data: Blob<'a>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Blob<'a> {
    mime_type: &'a str,
    data: &'a str,
}

/// generateContent response structure (only the fields we read)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Google API error envelope
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Client for the Gemini generateContent REST endpoint
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("litter-check-service/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.inference_timeout_secs))
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key: config.gemini_api_key.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl InferenceClient for GeminiClient {
    async fn generate(&self, prompt: &str, image: InlineImage<'_>) -> Result<String, InferenceError> {
        let body = build_request(prompt, image);

        tracing::info!("🤖 Sending photo to {} ({} base64 bytes)", self.model, image.data.len());

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                // Log full error chain for debugging
                let mut error_msg = e.to_string();
                let mut source = e.source();
                while let Some(err) = source {
                    error_msg.push_str(&format!(": {}", err));
                    source = err.source();
                }
                tracing::warn!("Gemini request failed: {}", error_msg);
                InferenceError::Transport(error_msg)
            })?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&raw)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown error").to_string());
            tracing::warn!("Gemini returned HTTP {}: {}", status, message);
            return Err(InferenceError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::Transport(format!("invalid response body: {}", e)))?;

        tracing::debug!("✅ Gemini responded successfully");

        response_text(data)
    }
}

fn build_request<'a>(prompt: &'a str, image: InlineImage<'a>) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![
                Part::Text { text: prompt },
                Part::InlineData {
                    inline_data: Blob {
                        mime_type: image.mime_type,
                        data: image.data,
                    },
                },
            ],
        }],
    }
}

/// Concatenate the text parts of the first candidate
fn response_text(data: GenerateContentResponse) -> Result<String, InferenceError> {
    let text: String = data
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(InferenceError::EmptyResponse {
            block_reason: data.prompt_feedback.and_then(|f| f.block_reason),
        });
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let body = build_request("olha a foto", InlineImage::jpeg("AAAA"));

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [
                        { "text": "olha a foto" },
                        { "inlineData": { "mimeType": "image/jpeg", "data": "AAAA" } }
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let data: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "{\"aprovado\":" }, { "text": " true}" }], "role": "model" } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();

        assert_eq!(response_text(data).unwrap(), "{\"aprovado\": true}");
    }

    #[test]
    fn test_response_without_candidates() {
        let data: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();

        assert!(matches!(
            response_text(data),
            Err(InferenceError::EmptyResponse { block_reason: Some(ref r) }) if r == "SAFETY"
        ));
    }

    #[test]
    fn test_endpoint() {
        let config = Config {
            gemini_base_url: "http://localhost:9999/".to_string(),
            ..Default::default()
        };
        let client = GeminiClient::new(&config).unwrap();

        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
