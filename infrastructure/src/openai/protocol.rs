//! Chat completions wire types

use serde::{Deserialize, Serialize};
use triage_application::GatewayError;
use triage_domain::Model;

/// Sampling temperature for chat models
pub const CHAT_TEMPERATURE: f32 = 0.1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,
}

impl ChatRequest {
    /// Shape the request for the model family.
    ///
    /// Reasoning models take a single user message (system prompt first)
    /// and `max_completion_tokens`; chat models take separate messages,
    /// a low temperature and `max_tokens`.
    pub fn build(model: &Model, system_prompt: &str, prompt: &str, max_tokens: u32) -> Self {
        if model.is_reasoning() {
            Self {
                model: model.to_string(),
                messages: vec![ChatMessage::new(
                    "user",
                    format!("{}\n\n{}", system_prompt, prompt),
                )],
                temperature: None,
                max_tokens: None,
                max_completion_tokens: Some(max_tokens),
            }
        } else {
            Self {
                model: model.to_string(),
                messages: vec![
                    ChatMessage::new("system", system_prompt),
                    ChatMessage::new("user", prompt),
                ],
                temperature: Some(CHAT_TEMPERATURE),
                max_tokens: Some(max_tokens),
                max_completion_tokens: None,
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice
    pub fn into_text(self) -> Result<String, GatewayError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::InvalidResponse("No content in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reasoning_model_request() {
        let request = ChatRequest::build(&Model::O1Mini, "You are a nurse.", "Assess this.", 4000);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "o1-mini");
        assert_eq!(json["max_completion_tokens"], 4000);
        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());

        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "You are a nurse.\n\nAssess this.");
    }

    #[test]
    fn test_chat_model_request() {
        let request = ChatRequest::build(&Model::Gpt4o, "You are a nurse.", "Assess this.", 4000);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["max_tokens"], 4000);
        assert!(json.get("max_completion_tokens").is_none());
        assert!((json["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);

        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "Assess this.");
    }

    #[test]
    fn test_response_text() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"ESI Level: 2"},"finish_reason":"stop"}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_text().unwrap(), "ESI Level: 2");
    }

    #[test]
    fn test_response_without_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            response.into_text(),
            Err(GatewayError::InvalidResponse(_))
        ));
    }
}
