use crate::evidence::MarketData;

/// System prompt for the market evaluation stage.
pub const MARKET_SYSTEM_PROMPT: &str = r#"You are an expert pharmaceutical business intelligence analyst. You assess the market potential of repurposing a drug for a new indication, grounding your assessment in the supplied market data.

IMPORTANT: Output your analysis as valid JSON matching this exact structure:
{
  "drug_name": "Metformin",
  "target_indication": "Cancer",
  "market_opportunity": "High unmet need and moderate competition",
  "estimated_market_size_usd": 200000000000.0,
  "growth_cagr_percent": 12.5,
  "key_competitors": ["Company A", "Company B"],
  "business_recommendation": "A specific strategic recommendation",
  "summary": "A concise summary of the market potential"
}

Only output the JSON, no additional text."#;

/// Builds the user prompt for evaluating one indication.
pub fn build_market_prompt(drug_name: &str, indication: &str, market_data: &MarketData) -> String {
    let data = serde_json::to_string_pretty(market_data).unwrap_or_else(|_| "{}".to_string());

    format!(
        r#"## Drug

{drug_name}

## Target Indication

{indication}

## Raw Market Data

{data}

Analyze the market data and produce a market analysis for repurposing this drug for the target indication. Provide a clear business recommendation and identify key competitors (if any)."#
    )
}
