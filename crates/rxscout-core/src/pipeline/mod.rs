//! Pipeline orchestration.
//!
//! Stages run in a fixed sequence: gather evidence, synthesize research,
//! fan out market evaluations, build the final report. Research synthesis
//! is the only stage whose failure surfaces to the caller; every
//! per-indication market failure is absorbed into a fallback record so a
//! usable report is always produced once research succeeds.

use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::{Config, MAX_MARKET_INDICATIONS};
use crate::evidence::EvidenceGatherer;
use crate::llm::{LLMError, Provider, LLM};
use crate::market::{MarketAnalysis, MarketEvaluator};
use crate::report::{build_report, FinalReport};
use crate::research::{ResearchReport, ResearchSynthesizer, SynthesisError};

/// Output of the market fan-out stage.
#[derive(Debug, Clone)]
pub struct MarketBatch {
    pub drug_name: String,
    pub research_report: ResearchReport,
    /// One entry per evaluated indication, fallback records included,
    /// in evaluation order.
    pub market_analyses: Vec<MarketAnalysis>,
}

/// The drug repurposing research pipeline.
///
/// Stateless between runs: every stage produces immutable values consumed
/// by the next, and nothing is cached or persisted.
pub struct Pipeline {
    gatherer: EvidenceGatherer,
    research: ResearchSynthesizer<Arc<dyn LLM>>,
    market: MarketEvaluator<Arc<dyn LLM>>,
}

impl Pipeline {
    /// Creates a pipeline around an injected LLM client.
    ///
    /// The same client serves both synthesis stages.
    pub fn new(llm: Arc<dyn LLM>, config: &Config) -> Self {
        Self {
            gatherer: EvidenceGatherer::new(&config.evidence),
            research: ResearchSynthesizer::new(Arc::clone(&llm)),
            market: MarketEvaluator::new(llm),
        }
    }

    /// Creates a pipeline with the LLM client described by the config.
    pub fn from_config(config: &Config) -> Result<Self, LLMError> {
        let llm: Arc<dyn LLM> = Arc::from(Provider::from_config(&config.llm).build()?);
        Ok(Self::new(llm, config))
    }

    /// Runs the full pipeline for a drug.
    ///
    /// Fails only if research synthesis fails; market evaluation failures
    /// degrade to per-indication fallback records.
    pub async fn run(&self, drug_name: &str) -> Result<FinalReport, SynthesisError> {
        info!(drug = drug_name, "gathering evidence");
        let evidence = self.gatherer.gather(drug_name).await;
        info!(
            publications = evidence.publications.len(),
            trials = evidence.trials.len(),
            patents = evidence.patents.len(),
            "evidence gathered"
        );

        let research = self.research.synthesize(drug_name, &evidence).await?;
        info!(
            indications = research.potential_new_indications.len(),
            "research synthesized"
        );

        let batch = self.run_market_analyses(&research).await;

        Ok(build_report(
            drug_name,
            &batch.research_report,
            &batch.market_analyses,
            Utc::now(),
        ))
    }

    /// Evaluates the market for each candidate indication.
    ///
    /// Candidates are capped at the first five and evaluated sequentially:
    /// each model call may share a provider rate limit, and running them
    /// concurrently risks correlated throttling failures. A failed
    /// evaluation substitutes a fallback record and the loop continues;
    /// this stage never errors.
    pub async fn run_market_analyses(&self, research: &ResearchReport) -> MarketBatch {
        let drug_name = research.drug_name.clone();
        let candidates = research
            .potential_new_indications
            .iter()
            .take(MAX_MARKET_INDICATIONS);

        let mut market_analyses = Vec::new();
        for indication in candidates {
            info!(%indication, "analyzing market");
            match self.market.evaluate(&drug_name, indication).await {
                Ok(analysis) => market_analyses.push(analysis),
                Err(error) if error.is_rate_limited() => {
                    warn!(%indication, "rate limit hit, substituting fallback record");
                    market_analyses.push(MarketAnalysis::unavailable(&drug_name, indication));
                }
                Err(error) => {
                    warn!(%indication, %error, "market evaluation failed, substituting fallback record");
                    market_analyses.push(MarketAnalysis::unavailable(&drug_name, indication));
                }
            }
        }

        MarketBatch {
            drug_name,
            research_report: research.clone(),
            market_analyses,
        }
    }
}
