//! Evidence gathering: literature, clinical trials, and patents.
//!
//! The three sub-fetches are independent and run concurrently. Each fails
//! closed: a provider error is logged and replaced by an empty collection,
//! so a single dead source never aborts the pipeline.

mod error;
pub mod market;
pub mod patents;
pub mod pubmed;
pub mod trials;

pub use error::ProviderError;
pub use market::{MarketData, MarketDataSource};
pub use patents::PatentSource;
pub use pubmed::PubMedClient;
pub use trials::TrialsClient;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::EvidenceConfig;

/// A research publication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    /// Title of the research paper
    pub title: String,
    /// Publication year (0 when unparsable)
    #[serde(default)]
    pub year: i32,
    /// Primary authors
    #[serde(default)]
    pub authors: Vec<String>,
    /// URL to the publication
    pub url: String,
}

/// A clinical trial record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trial {
    /// Official title of the trial
    pub title: String,
    /// Current phase (e.g., "Phase 2")
    #[serde(default)]
    pub phase: String,
    /// Current status (e.g., "Recruiting", "Completed")
    #[serde(default)]
    pub status: String,
    /// Start year
    #[serde(default)]
    pub year: i32,
    /// The condition being studied; absent conditions land in the
    /// "Unknown" bucket when trials are grouped downstream
    #[serde(default)]
    pub condition: Option<String>,
    /// URL to the trial
    pub url: String,
}

/// A patent record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patent {
    /// Title of the patent
    pub title: String,
    /// Publication year of the patent
    #[serde(default)]
    pub year: i32,
    /// Applicant or assignee (e.g., "Pfizer Inc.")
    #[serde(default)]
    pub applicant: String,
    /// URL to the patent document
    pub url: String,
}

/// The three evidence collections gathered for a drug.
///
/// A plain record: the sub-fetches complete in any order and the result is
/// the same.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Evidence {
    pub publications: Vec<Publication>,
    pub trials: Vec<Trial>,
    pub patents: Vec<Patent>,
}

impl Evidence {
    /// Returns true if every source came back empty.
    pub fn is_empty(&self) -> bool {
        self.publications.is_empty() && self.trials.is_empty() && self.patents.is_empty()
    }
}

/// Fetches the three evidence collections for a drug.
pub struct EvidenceGatherer {
    pubmed: PubMedClient,
    trials: TrialsClient,
    patents: PatentSource,
}

impl EvidenceGatherer {
    /// Creates a gatherer with the given provider configuration.
    pub fn new(config: &EvidenceConfig) -> Self {
        Self {
            pubmed: PubMedClient::new(config),
            trials: TrialsClient::new(config),
            patents: PatentSource::new(),
        }
    }

    /// Gathers publications, trials, and patents for the drug.
    ///
    /// Never fails: each source's error is logged and degraded to an empty
    /// collection without disturbing the other two fetches.
    pub async fn gather(&self, drug_name: &str) -> Evidence {
        let (publications, trials, patents) = futures::join!(
            self.pubmed.search(drug_name),
            self.trials.search(drug_name),
            self.patents.search(drug_name),
        );

        Evidence {
            publications: or_empty("pubmed", publications),
            trials: or_empty("clinicaltrials.gov", trials),
            patents: or_empty("patents", patents),
        }
    }
}

fn or_empty<T>(source: &str, result: Result<Vec<T>, ProviderError>) -> Vec<T> {
    match result {
        Ok(items) => {
            debug!(source, count = items.len(), "evidence fetched");
            items
        }
        Err(error) => {
            warn!(source, %error, "evidence fetch failed, continuing with empty collection");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_empty_passes_through_ok() {
        let items = or_empty("test", Ok(vec![1, 2, 3]));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_or_empty_degrades_errors() {
        let result: Result<Vec<i32>, ProviderError> = Err(ProviderError::Status {
            provider: "test",
            status: 503,
        });
        assert!(or_empty("test", result).is_empty());
    }

    #[test]
    fn test_evidence_is_empty() {
        assert!(Evidence::default().is_empty());

        let evidence = Evidence {
            patents: vec![Patent {
                title: "t".into(),
                year: 2023,
                applicant: "a".into(),
                url: "u".into(),
            }],
            ..Evidence::default()
        };
        assert!(!evidence.is_empty());
    }
}
