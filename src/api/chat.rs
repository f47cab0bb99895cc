//! LLM analysis proxy handler
//!
//! Forwards a natural-language question about the dataset to the configured
//! chat-completion endpoint. Fails closed when the API key is missing, and
//! refuses to ask questions about an empty dataset.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::ApiError;
use crate::llm::LlmError;
use crate::model::Student;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

const SYSTEM_PROMPT: &str = "You are an assistant for a Student Information Management System. \
You are given REAL student records in JSON format and a user question. \
You MUST base your answers ONLY on the provided data. \
If the user asks something that cannot be answered strictly from the data, politely say you cannot answer. \
When relevant, compute statistics such as counts, averages, and groupings explicitly. \
For list questions, show clear bullet lists or tables in plain text. \
If the question is ambiguous, explain your assumptions briefly.";

fn build_user_prompt(students: &[Student], question: &str) -> String {
    let dataset =
        serde_json::to_string_pretty(students).unwrap_or_else(|_| "[]".to_string());
    format!(
        "Student dataset (JSON array of objects with fields id, name, age, course, year, gender):\n\
         {}\n\nUser question:\n{}",
        dataset, question
    )
}

/// POST /llm/chat
///
/// Checks run in order: non-empty message, non-empty dataset, configured
/// credential. An empty dataset reports as such even when no key is set.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = request.message.trim().to_string();
    if message.is_empty() {
        return Err(ApiError::Validation("message is required".to_string()));
    }

    let students = state.store.load().await;
    if students.is_empty() {
        return Err(ApiError::Internal(
            "Student dataset is empty. Please add students first before using the LLM analysis feature."
                .to_string(),
        ));
    }

    let client = state.llm.as_ref().ok_or_else(|| {
        ApiError::Config(
            "LLM API key is not configured on the server. Please set OPENAI_API_KEY environment variable."
                .to_string(),
        )
    })?;

    info!("Forwarding chat question over {} students", students.len());

    match client
        .complete(SYSTEM_PROMPT, &build_user_prompt(&students, &message))
        .await
    {
        Ok(answer) => Ok(Json(ChatResponse { answer })),
        Err(LlmError::Api(status, details)) => {
            error!("LLM API error {}: {}", status, details);
            Err(ApiError::Upstream(details))
        }
        Err(e) => {
            error!("LLM request failed: {}", e);
            Err(ApiError::Internal(
                "Unexpected server error while processing LLM request.".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_embeds_dataset_and_question() {
        let students = vec![Student {
            id: "S00000000001".to_string(),
            name: "Ann".to_string(),
            age: None,
            course: "CS".to_string(),
            year: 2,
            gender: "F".to_string(),
        }];

        let prompt = build_user_prompt(&students, "How many students are there?");
        assert!(prompt.contains("\"name\": \"Ann\""));
        assert!(prompt.ends_with("How many students are there?"));
        assert!(prompt.contains("User question:"));
    }
}
