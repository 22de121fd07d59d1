//! Market data lookup for a single indication.
//!
//! Serves a static table of headline figures per therapeutic area; the
//! evaluator grounds the model's qualitative assessment in this record.

use serde::Serialize;

use super::ProviderError;

/// Raw market figures for one indication.
#[derive(Debug, Clone, Serialize)]
pub struct MarketData {
    pub market_size_usd_billion: f64,
    pub cagr_percent: f64,
    pub competition: String,
    pub unmet_need: String,
}

impl MarketData {
    /// The record substituted for indications outside the table, and when
    /// a lookup fails.
    pub fn default_record() -> Self {
        MarketData {
            market_size_usd_billion: 1.0,
            cagr_percent: 3.0,
            competition: "Low".to_string(),
            unmet_need: "N/A".to_string(),
        }
    }
}

/// Indication-keyed market data source.
pub struct MarketDataSource;

impl MarketDataSource {
    pub fn new() -> Self {
        Self
    }

    /// Looks up market figures for the indication.
    ///
    /// Matching is by substring on the lower-cased indication, so
    /// "Pancreatic Cancer" and "Cancer" hit the same row.
    pub async fn lookup(&self, indication: &str) -> Result<MarketData, ProviderError> {
        let indication = indication.to_lowercase();

        let data = if indication.contains("cancer") {
            MarketData {
                market_size_usd_billion: 200.0,
                cagr_percent: 12.5,
                competition: "Moderate".to_string(),
                unmet_need: "High".to_string(),
            }
        } else if indication.contains("alzheimer") {
            MarketData {
                market_size_usd_billion: 15.0,
                cagr_percent: 8.1,
                competition: "High".to_string(),
                unmet_need: "Very High".to_string(),
            }
        } else if indication.contains("pcos") {
            MarketData {
                market_size_usd_billion: 5.0,
                cagr_percent: 4.5,
                competition: "High".to_string(),
                unmet_need: "Low".to_string(),
            }
        } else if indication.contains("obesity") {
            MarketData {
                market_size_usd_billion: 25.0,
                cagr_percent: 15.0,
                competition: "Very High (GLP-1s)".to_string(),
                unmet_need: "Moderate".to_string(),
            }
        } else {
            MarketData::default_record()
        };

        Ok(data)
    }
}

impl Default for MarketDataSource {
    fn default() -> Self {
        Self::new()
    }
}
