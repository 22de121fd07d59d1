//! ClinicalTrials.gov v2 API client.
//!
//! API docs: https://clinicaltrials.gov/data-api/api
//! Endpoint: https://clinicaltrials.gov/api/v2/studies

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::{ProviderError, Trial};
use crate::config::{
    CLINICAL_TRIALS_BASE_URL, CLINICAL_TRIALS_URL, DEFAULT_TRIAL_YEAR, EvidenceConfig,
};

const SOURCE: &str = "clinicaltrials.gov";

/// ClinicalTrials.gov client.
pub struct TrialsClient {
    client: Client,
    user_agent: String,
    timeout: Duration,
    max_results: usize,
}

impl TrialsClient {
    pub fn new(config: &EvidenceConfig) -> Self {
        Self {
            client: Client::new(),
            user_agent: config.user_agent.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
            max_results: config.max_results_per_source,
        }
    }

    /// Searches for trials whose condition or intervention mentions the drug.
    pub async fn search(&self, drug_name: &str) -> Result<Vec<Trial>, ProviderError> {
        let page_size = self.max_results.to_string();
        let response = self
            .client
            .get(CLINICAL_TRIALS_URL)
            .query(&[
                ("query.cond", drug_name),
                ("pageSize", page_size.as_str()),
            ])
            .header("user-agent", &self.user_agent)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: SOURCE,
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await.map_err(|e| ProviderError::Decode {
            provider: SOURCE,
            message: e.to_string(),
        })?;

        Ok(parse_studies(&body))
    }
}

/// Parses a v2 studies response body into trial records.
///
/// All fields live under `protocolSection`; every module is optional, so
/// each extraction carries its own default. A missing start date records
/// the sentinel year.
pub fn parse_studies(body: &Value) -> Vec<Trial> {
    body["studies"]
        .as_array()
        .map(|studies| studies.iter().map(parse_study).collect())
        .unwrap_or_default()
}

fn parse_study(study: &Value) -> Trial {
    let protocol = &study["protocolSection"];

    let title = protocol["identificationModule"]["officialTitle"]
        .as_str()
        .unwrap_or("N/A")
        .to_string();

    let phase = protocol["designModule"]["phases"]
        .as_array()
        .and_then(|phases| phases.first())
        .and_then(|phase| phase.as_str())
        .unwrap_or("N/A")
        .to_string();

    let status = protocol["statusModule"]["overallStatus"]
        .as_str()
        .unwrap_or("Unknown")
        .to_string();

    let conditions = protocol["conditionsModule"]["conditions"]
        .as_array()
        .map(|conditions| {
            conditions
                .iter()
                .filter_map(|condition| condition.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();
    let condition = if conditions.is_empty() {
        "Not specified".to_string()
    } else {
        conditions
    };

    // Dates arrive as "YYYY-MM" or "YYYY-MM-DD"
    let year = protocol["statusModule"]["startDateStruct"]["date"]
        .as_str()
        .and_then(|date| date.split('-').next())
        .and_then(|year| year.parse().ok())
        .unwrap_or(DEFAULT_TRIAL_YEAR);

    let nct_id = protocol["identificationModule"]["nctId"]
        .as_str()
        .unwrap_or("");
    let url = if nct_id.is_empty() {
        CLINICAL_TRIALS_BASE_URL.to_string()
    } else {
        format!("https://clinicaltrials.gov/study/{nct_id}")
    };

    Trial {
        title,
        phase,
        status,
        year,
        condition: Some(condition),
        url,
    }
}
