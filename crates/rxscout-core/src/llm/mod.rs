mod claude;
mod error;
mod openai;
mod provider;

pub use claude::ClaudeClient;
pub use error::LLMError;
pub use openai::OpenAIClient;
pub use provider::Provider;

use async_trait::async_trait;
use std::sync::Arc;

/// Trait for Large Language Model providers.
///
/// This abstraction allows swapping between different LLM providers
/// without changing the synthesis stages, and lets tests substitute
/// a scripted double for the real client.
///
/// # Supported Providers
///
/// - **OpenRouter** (default): free-tier friendly gateway over many models
/// - **OpenAI-compatible**: works with OpenAI, Azure, Ollama, vLLM, etc.
/// - **Anthropic**: Claude models via Anthropic API
///
/// # Example
///
/// ```ignore
/// use rxscout_core::llm::{Provider, LLM};
///
/// // Auto-detect from environment
/// let llm = Provider::from_env()?;
///
/// let response = llm.complete("Summarize metformin's mechanism.").await?;
/// ```
#[async_trait]
pub trait LLM: Send + Sync {
    /// Complete a prompt and return the response.
    async fn complete(&self, prompt: &str) -> Result<String, LLMError>;

    /// Complete a prompt with a system message.
    async fn complete_with_system(
        &self,
        system: &str,
        prompt: &str,
    ) -> Result<String, LLMError>;
}

/// Blanket implementation for boxed trait objects.
#[async_trait]
impl LLM for Box<dyn LLM> {
    async fn complete(&self, prompt: &str) -> Result<String, LLMError> {
        (**self).complete(prompt).await
    }

    async fn complete_with_system(
        &self,
        system: &str,
        prompt: &str,
    ) -> Result<String, LLMError> {
        (**self).complete_with_system(system, prompt).await
    }
}

/// Blanket implementation for shared trait objects.
///
/// The pipeline hands one client to both synthesis stages.
#[async_trait]
impl LLM for Arc<dyn LLM> {
    async fn complete(&self, prompt: &str) -> Result<String, LLMError> {
        (**self).complete(prompt).await
    }

    async fn complete_with_system(
        &self,
        system: &str,
        prompt: &str,
    ) -> Result<String, LLMError> {
        (**self).complete_with_system(system, prompt).await
    }
}
