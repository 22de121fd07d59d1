mod prompts;
mod report;
mod synthesizer;

pub use prompts::{build_research_prompt, RESEARCH_SYSTEM_PROMPT};
pub use report::ResearchReport;
pub use synthesizer::{ResearchSynthesizer, SynthesisError};

pub(crate) use synthesizer::{extract_json, truncate};
