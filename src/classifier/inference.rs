use reqwest::Response;
use serde::{Deserialize, Serialize};

use super::client::CompletionError;

pub fn build_request(model: String, prompt: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model,
        messages: vec![ChatMessage {
            role: "user".into(),
            content: prompt.to_string(),
        }],
        temperature: 0.0,
    }
}

pub async fn parse_response(response: Response) -> Result<String, CompletionError> {
    let completion: ChatCompletionResponse = response
        .json()
        .await
        .map_err(|err| CompletionError::Malformed(err.to_string()))?;
    extract_content(completion)
}

fn extract_content(completion: ChatCompletionResponse) -> Result<String, CompletionError> {
    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::Malformed("response did not contain any choices".into()))?;

    choice
        .message
        .and_then(|msg| msg.content)
        .ok_or_else(|| CompletionError::Malformed("response missing message content".into()))
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatCompletionMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionMessage {
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_is_single_user_turn_at_zero_temperature() {
        let request = build_request("gpt-4o".into(), "classify me");
        let body = serde_json::to_value(&request).expect("request serializes");

        assert_eq!(
            body,
            json!({
                "model": "gpt-4o",
                "messages": [{"role": "user", "content": "classify me"}],
                "temperature": 0.0
            })
        );
    }

    #[test]
    fn content_comes_from_first_choice() {
        let completion: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "Safe"}},
                {"message": {"role": "assistant", "content": "Suspicious"}}
            ]
        }))
        .expect("valid completion");
        assert_eq!(extract_content(completion).expect("content"), "Safe");
    }

    #[test]
    fn empty_choices_or_null_content_are_malformed() {
        let empty: ChatCompletionResponse =
            serde_json::from_value(json!({"choices": []})).expect("valid json");
        assert!(matches!(extract_content(empty), Err(CompletionError::Malformed(_))));

        let null: ChatCompletionResponse =
            serde_json::from_value(json!({"choices": [{"message": {"content": null}}]}))
                .expect("valid json");
        assert!(matches!(extract_content(null), Err(CompletionError::Malformed(_))));
    }
}
