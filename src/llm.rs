//! Upstream chat-completion client
//!
//! Forwards a system/user prompt pair to an OpenAI-compatible
//! chat-completion endpoint and extracts the first choice's message text.
//! Single best-effort call: no retry, no streaming, no request timeout (a
//! hung upstream call blocks only its own request handler).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Upstream error bodies relayed to the client are truncated to this length
const ERROR_BODY_LIMIT: usize = 300;

/// Fixed low sampling temperature for deterministic-ish answers
const TEMPERATURE: f64 = 0.2;

/// Returned when the upstream reply carries no message text
pub const FALLBACK_ANSWER: &str = "The LLM did not return a response. Please try again.";

/// Chat client errors
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat-completion API
pub struct ChatClient {
    http_client: reqwest::Client,
    api_url: String,
    model: String,
    api_key: String,
}

impl ChatClient {
    pub fn new(api_url: String, model: String, api_key: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_url,
            model,
            api_key,
        }
    }

    /// Forward the prompts and return the first completion's text, or the
    /// fallback string when the reply carries none.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, LlmError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        debug!(model = %self.model, "Forwarding chat request to {}", self.api_url);

        let response = self
            .http_client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api(status.as_u16(), truncate(&body, ERROR_BODY_LIMIT)));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        let answer = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| FALLBACK_ANSWER.to_string());

        Ok(answer)
    }
}

fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_caps_long_bodies() {
        let long = "x".repeat(1000);
        assert_eq!(truncate(&long, ERROR_BODY_LIMIT).len(), ERROR_BODY_LIMIT);
        assert_eq!(truncate("short", ERROR_BODY_LIMIT), "short");
    }

    #[test]
    fn response_parses_missing_content_as_none() {
        let completion: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{}}]}"#).unwrap();
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content);
        assert_eq!(content, None);
    }

    #[test]
    fn response_parses_answer_text() {
        let completion: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"42 students"}}]}"#,
        )
        .unwrap();
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content);
        assert_eq!(content.as_deref(), Some("42 students"));
    }
}
