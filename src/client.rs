use async_trait::async_trait;
use reqwest::Client;

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::models::{ChatRequest, ChatResponse, Message};

/// Everything the provider needs for one chat completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_role: String,
    pub prompt: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32
}

/// A hosted chat-completion API. Implementations return the first choice's
/// content as-is.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError>;
}

pub struct GroqClient {
    http_client: Client,
    api_key: String,
    completions_url: String
}

impl GroqClient {

    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {

        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ProviderError::Http)?;

        Ok(GroqClient {
            http_client,
            api_key: config.api_key.clone(),
            completions_url: format!("{}/chat/completions", config.api_base)
        })

    }

}

#[async_trait]
impl CompletionProvider for GroqClient {

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {

        let body = ChatRequest {
            model: &request.model,
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: request.system_role.clone()
                },
                Message {
                    role: "user".to_string(),
                    content: request.prompt.clone()
                }
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens
        };

        let response = self.http_client
            .post(&self.completions_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(ProviderError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(ProviderError::Status { status: status.as_u16(), body });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(ProviderError::Decode)?;

        chat.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ProviderError::NoChoices)

    }

}
