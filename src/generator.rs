use std::sync::Arc;

use crate::client::{CompletionProvider, CompletionRequest};
use crate::error::ProviderError;
use crate::models::GenerationRequest;
use crate::templates::PromptTemplate;

#[derive(Clone)]
pub struct Generator {
    provider: Arc<dyn CompletionProvider>
}

impl Generator {

    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {

        Generator { provider }

    }

    /// Picks the template for a request's `promptType`.
    pub fn resolve(request: &GenerationRequest) -> &'static PromptTemplate {

        PromptTemplate::for_tag(request.prompt_type.as_deref())

    }

    /// Builds the prompt from `template`, calls the provider once and returns the
    /// completion with surrounding whitespace removed.
    pub async fn generate(
        &self,
        template: &PromptTemplate,
        request: &GenerationRequest
    ) -> Result<String, ProviderError> {

        let completion_request = CompletionRequest {
            system_role: template.system_role.to_string(),
            prompt: template.build_prompt(&request.text, &request.context),
            model: template.model.to_string(),
            temperature: template.temperature,
            max_tokens: template.max_tokens
        };

        tracing::debug!(
            prompt_type = template.kind.as_str(),
            model = template.model,
            prompt_bytes = completion_request.prompt.len(),
            "sending completion request"
        );

        let content = self.provider.complete(&completion_request).await?;

        Ok(content.trim().to_string())

    }

}
