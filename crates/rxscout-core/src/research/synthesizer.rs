use thiserror::Error;
use tracing::debug;

use crate::evidence::Evidence;
use crate::llm::{LLMError, LLM};
use crate::research::prompts::{build_research_prompt, RESEARCH_SYSTEM_PROMPT};
use crate::research::report::ResearchReport;

/// Runs the one-shot research synthesis for a drug.
pub struct ResearchSynthesizer<L: LLM> {
    llm: L,
}

impl<L: LLM> ResearchSynthesizer<L> {
    /// Creates a new research synthesizer.
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    /// Synthesizes the gathered evidence into a structured research report.
    ///
    /// Called exactly once per pipeline run; a failure here aborts the run.
    pub async fn synthesize(
        &self,
        drug_name: &str,
        evidence: &Evidence,
    ) -> Result<ResearchReport, SynthesisError> {
        let prompt = build_research_prompt(drug_name, evidence);
        debug!(drug = drug_name, prompt_len = prompt.len(), "invoking research synthesis");

        let response = self
            .llm
            .complete_with_system(RESEARCH_SYSTEM_PROMPT, &prompt)
            .await?;

        parse_report(&response)
    }
}

/// Parses and validates the model response as a research report.
///
/// Deserialization into the typed report is the shape validation: a missing
/// required field or a type mismatch is a synthesis failure, never a
/// silently patched result.
fn parse_report(response: &str) -> Result<ResearchReport, SynthesisError> {
    let json = extract_json(response);

    serde_json::from_str(json).map_err(|e| {
        SynthesisError::Schema(format!(
            "response does not match the research report shape: {}. Response: {}",
            e,
            truncate(json, 500)
        ))
    })
}

/// Extracts JSON from a response that might be wrapped in markdown code blocks.
pub(crate) fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    // Check for ```json ... ``` or ``` ... ```
    if trimmed.starts_with("```") {
        if let Some(start) = trimmed.find('\n') {
            let rest = &trimmed[start + 1..];
            if let Some(end) = rest.rfind("```") {
                return rest[..end].trim();
            }
        }
    }

    trimmed
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Errors from the model synthesis stages.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("LLM error: {0}")]
    Llm(#[from] LLMError),

    #[error("schema validation failed: {0}")]
    Schema(String),
}

impl SynthesisError {
    /// True when the underlying failure was a provider rate limit.
    ///
    /// Diagnostic only: rate-limited calls take the same fallback path as
    /// any other synthesis failure.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, SynthesisError::Llm(LLMError::RateLimited))
    }
}
