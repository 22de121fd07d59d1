pub mod config;
pub mod evidence;
pub mod llm;
pub mod market;
pub mod pipeline;
pub mod report;
pub mod research;

pub use config::Config;
pub use evidence::{Evidence, EvidenceGatherer};
pub use llm::{ClaudeClient, LLMError, OpenAIClient, Provider, LLM};
pub use market::{MarketAnalysis, MarketEvaluator};
pub use pipeline::{MarketBatch, Pipeline};
pub use report::{build_report, FinalReport};
pub use research::{ResearchReport, ResearchSynthesizer, SynthesisError};
