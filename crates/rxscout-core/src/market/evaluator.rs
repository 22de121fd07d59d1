use tracing::{debug, warn};

use crate::evidence::{MarketData, MarketDataSource};
use crate::llm::LLM;
use crate::market::analysis::MarketAnalysis;
use crate::market::prompts::{build_market_prompt, MARKET_SYSTEM_PROMPT};
use crate::research::{extract_json, truncate, SynthesisError};

/// Evaluates the market for one drug/indication pair.
pub struct MarketEvaluator<L: LLM> {
    llm: L,
    market_data: MarketDataSource,
}

impl<L: LLM> MarketEvaluator<L> {
    /// Creates a new market evaluator.
    pub fn new(llm: L) -> Self {
        Self {
            llm,
            market_data: MarketDataSource::new(),
        }
    }

    /// Produces a market analysis for a single indication.
    ///
    /// Each candidate gets an independent lookup and an independent model
    /// call; there is no batching across indications.
    pub async fn evaluate(
        &self,
        drug_name: &str,
        indication: &str,
    ) -> Result<MarketAnalysis, SynthesisError> {
        // Lookup failures fail closed to the default record; only the
        // model invocation can fail this stage.
        let data = match self.market_data.lookup(indication).await {
            Ok(data) => data,
            Err(error) => {
                warn!(indication, %error, "market lookup failed, using default record");
                MarketData::default_record()
            }
        };

        let prompt = build_market_prompt(drug_name, indication, &data);
        debug!(drug = drug_name, indication, "invoking market evaluation");

        let response = self
            .llm
            .complete_with_system(MARKET_SYSTEM_PROMPT, &prompt)
            .await?;

        parse_analysis(&response)
    }
}

fn parse_analysis(response: &str) -> Result<MarketAnalysis, SynthesisError> {
    let json = extract_json(response);

    serde_json::from_str(json).map_err(|e| {
        SynthesisError::Schema(format!(
            "response does not match the market analysis shape: {}. Response: {}",
            e,
            truncate(json, 500)
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analysis_valid() {
        let response = r#"{
            "drug_name": "Metformin",
            "target_indication": "Cancer",
            "market_opportunity": "Large market",
            "estimated_market_size_usd": 200000000000.0,
            "growth_cagr_percent": 12.5,
            "key_competitors": ["Pfizer"],
            "business_recommendation": "Pursue",
            "summary": "Strong potential"
        }"#;

        let analysis = parse_analysis(response).unwrap();
        assert_eq!(analysis.target_indication, "Cancer");
        assert_eq!(analysis.key_competitors.len(), 1);
    }

    #[test]
    fn test_parse_analysis_rejects_wrong_shape() {
        let result = parse_analysis(r#"{"target_indication": "Cancer"}"#);
        assert!(matches!(result, Err(SynthesisError::Schema(_))));
    }
}
