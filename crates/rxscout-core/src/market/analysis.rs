use serde::{Deserialize, Serialize};

use crate::config::{
    UNAVAILABLE_CAGR_PERCENT, UNAVAILABLE_COMPETITOR, UNAVAILABLE_MARKET_OPPORTUNITY,
    UNAVAILABLE_MARKET_SIZE_USD, UNAVAILABLE_RECOMMENDATION,
};

/// Commercial assessment of repurposing a drug for a *single* indication.
///
/// One instance per evaluated indication. Fallback records produced for
/// failed evaluations share this exact shape, so merging needs no
/// branching downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketAnalysis {
    /// The drug being analyzed
    pub drug_name: String,
    /// The specific disease or indication being evaluated
    pub target_indication: String,
    /// Qualitative summary of the opportunity
    pub market_opportunity: String,
    /// Estimated total addressable market in USD
    pub estimated_market_size_usd: f64,
    /// Projected Compound Annual Growth Rate for this market
    pub growth_cagr_percent: f64,
    /// Key competitor companies or drugs in this space
    pub key_competitors: Vec<String>,
    /// A specific strategic recommendation
    pub business_recommendation: String,
    /// Concise summary of the market potential
    pub summary: String,
}

impl MarketAnalysis {
    /// The placeholder record substituted when evaluating an indication
    /// fails. Distinguishable by its content, identical in shape.
    pub fn unavailable(drug_name: &str, indication: &str) -> Self {
        MarketAnalysis {
            drug_name: drug_name.to_string(),
            target_indication: indication.to_string(),
            market_opportunity: UNAVAILABLE_MARKET_OPPORTUNITY.to_string(),
            estimated_market_size_usd: UNAVAILABLE_MARKET_SIZE_USD,
            growth_cagr_percent: UNAVAILABLE_CAGR_PERCENT,
            key_competitors: vec![UNAVAILABLE_COMPETITOR.to_string()],
            business_recommendation: UNAVAILABLE_RECOMMENDATION.to_string(),
            summary: format!("Market analysis unavailable for {indication}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_record() {
        let fallback = MarketAnalysis::unavailable("Metformin", "Alzheimer's");

        assert_eq!(fallback.target_indication, "Alzheimer's");
        assert_eq!(fallback.market_opportunity, "Analysis unavailable (rate limited)");
        assert_eq!(fallback.estimated_market_size_usd, 5_000_000.0);
        assert_eq!(fallback.growth_cagr_percent, 5.0);
        assert_eq!(fallback.key_competitors, vec!["TBD".to_string()]);
        assert_eq!(fallback.summary, "Market analysis unavailable for Alzheimer's");
    }
}
