//! Chat-completion upstream client (Hugging Face inference router).
//!
//! Forwards the user's prompt verbatim to the hosted chat/completions API
//! and returns the first choice's text. The upstream is an opaque
//! collaborator; its failures surface as `AppError::ChatUpstream`.

use std::time::Duration;

use doculens_core::AppError;
use serde::{Deserialize, Serialize};

const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 400;
const FALLBACK_REPLY: &str = "I couldn't generate a response.";

#[derive(Clone)]
pub struct ChatCompletionService {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<MessageParam>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct MessageParam {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionService {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Send one user prompt and return the model's reply.
    pub async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![MessageParam {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::ChatUpstream(format!("request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::ChatUpstream(format!("failed to read response: {}", e)))?;

        tracing::debug!(
            status = status.as_u16(),
            preview = %body.chars().take(200).collect::<String>(),
            "Chat completion response"
        );

        if !status.is_success() {
            return Err(AppError::ChatUpstream(format!(
                "inference API returned {}",
                status
            )));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::ChatUpstream(format!("invalid response body: {}", e)))?;

        Ok(extract_reply(parsed))
    }
}

/// First non-empty choice text, or the canned fallback reply.
fn extract_reply(response: ChatCompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| FALLBACK_REPLY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = ChatCompletionRequest {
            model: "some/model".to_string(),
            messages: vec![MessageParam {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "some/model");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hello");
        assert_eq!(value["temperature"], 0.7);
        assert_eq!(value["max_tokens"], 400);
    }

    #[test]
    fn test_extract_reply_from_response() {
        let parsed: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "An answer."}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_reply(parsed), "An answer.");
    }

    #[test]
    fn test_extract_reply_fallback_on_empty_choices() {
        let parsed: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(extract_reply(parsed), FALLBACK_REPLY);
    }

    #[test]
    fn test_extract_reply_fallback_on_missing_content() {
        let parsed: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"role": "assistant"}}]}"#).unwrap();
        assert_eq!(extract_reply(parsed), FALLBACK_REPLY);
    }

    #[test]
    fn test_completions_url_normalizes_slash() {
        let service = ChatCompletionService::new(
            "key".to_string(),
            "m".to_string(),
            "https://example.test/v1/".to_string(),
        );
        assert_eq!(
            service.completions_url(),
            "https://example.test/v1/chat/completions"
        );
    }
}
