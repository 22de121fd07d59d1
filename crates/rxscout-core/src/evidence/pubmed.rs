//! PubMed literature search via the NCBI E-utilities API.
//!
//! Two-step flow: `esearch.fcgi` resolves the query to a PMID list, then
//! `esummary.fcgi` fetches article summaries for those ids.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::{Publication, ProviderError};
use crate::config::{
    EvidenceConfig, NCBI_COURTESY_DELAY_MS, PUBMED_ARTICLE_BASE_URL, PUBMED_ESEARCH_URL,
    PUBMED_ESUMMARY_URL,
};

const SOURCE: &str = "pubmed";

/// PubMed E-utilities client.
pub struct PubMedClient {
    client: Client,
    user_agent: String,
    timeout: Duration,
    max_results: usize,
}

impl PubMedClient {
    pub fn new(config: &EvidenceConfig) -> Self {
        Self {
            client: Client::new(),
            user_agent: config.user_agent.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
            max_results: config.max_results_per_source,
        }
    }

    /// Searches PubMed for repurposing-relevant literature about the drug.
    pub async fn search(&self, drug_name: &str) -> Result<Vec<Publication>, ProviderError> {
        // Bias the query toward repurposing literature rather than the
        // drug's approved-use corpus.
        let query = format!(
            "({drug_name}) AND (repurposing OR new indication OR novel therapy \
             OR anti-tumor OR neuroprotection)"
        );

        let ids = self.search_ids(&query).await?;
        if ids.is_empty() {
            debug!(drug = drug_name, "no PubMed articles matched");
            return Ok(Vec::new());
        }

        let body = self.fetch_summaries(&ids).await?;
        Ok(parse_esummary(&body))
    }

    async fn search_ids(&self, query: &str) -> Result<Vec<String>, ProviderError> {
        tokio::time::sleep(Duration::from_millis(NCBI_COURTESY_DELAY_MS)).await;

        let max = self.max_results.to_string();
        let response = self
            .client
            .get(PUBMED_ESEARCH_URL)
            .query(&[
                ("db", "pubmed"),
                ("term", query),
                ("retmax", max.as_str()),
                ("sort", "relevance"),
                ("retmode", "json"),
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

        Ok(body["esearchresult"]["idlist"]
            .as_array()
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| id.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn fetch_summaries(&self, ids: &[String]) -> Result<Value, ProviderError> {
        tokio::time::sleep(Duration::from_millis(NCBI_COURTESY_DELAY_MS)).await;

        let id_list = ids.join(",");
        let response = self
            .client
            .get(PUBMED_ESUMMARY_URL)
            .query(&[
                ("db", "pubmed"),
                ("id", id_list.as_str()),
                ("retmode", "json"),
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

        response.json().await.map_err(|e| ProviderError::Decode {
            provider: SOURCE,
            message: e.to_string(),
        })
    }
}

/// Parses an esummary response body into publications.
///
/// Articles come keyed by PMID under `result`, with the id order preserved
/// in `result.uids`. The year is the first token of `pubdate`
/// (e.g. "2023 Jan 15"); an unparsable date records the 0 sentinel.
pub fn parse_esummary(body: &Value) -> Vec<Publication> {
    let result = &body["result"];

    let uids: Vec<&str> = result["uids"]
        .as_array()
        .map(|uids| uids.iter().filter_map(|uid| uid.as_str()).collect())
        .unwrap_or_default();

    uids.into_iter()
        .map(|pmid| {
            let article = &result[pmid];

            let year = article["pubdate"]
                .as_str()
                .and_then(|date| date.split_whitespace().next())
                .and_then(|year| year.parse().ok())
                .unwrap_or(0);

            let authors = article["authors"]
                .as_array()
                .map(|authors| {
                    authors
                        .iter()
                        .filter_map(|author| author["name"].as_str().map(String::from))
                        .collect()
                })
                .unwrap_or_default();

            Publication {
                title: article["title"].as_str().unwrap_or("No Title").to_string(),
                year,
                authors,
                url: format!("{PUBMED_ARTICLE_BASE_URL}{pmid}/"),
            }
        })
        .collect()
}
