use serde::{Deserialize, Serialize};

// Body accepted by POST /api/generate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub text: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub prompt_type: Option<String>
}

#[derive(Debug, Serialize)]
pub struct GenerationResponse {
    pub result: String
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>
}

// Wire types for the OpenAI-compatible chat completions API

#[derive(Debug, Deserialize, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Message
}
