use serde::{Deserialize, Serialize};

use crate::evidence::{Patent, Publication, Trial};

/// The output of the research synthesis stage.
///
/// The scientific foundation for the market analysis: the model's reading
/// of the gathered evidence. Created once per pipeline run and only read
/// afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchReport {
    /// The drug being researched
    pub drug_name: String,
    /// Concise summary of the drug's primary mechanism of action
    pub mechanism_of_action: String,
    /// Candidate new diseases or therapeutic areas for repurposing, in
    /// model output order; the approved use is excluded by instruction
    pub potential_new_indications: Vec<String>,
    /// The most relevant recent publications
    pub key_publications: Vec<Publication>,
    /// The most relevant clinical trials for new indications
    pub key_trials: Vec<Trial>,
    /// Recent relevant patents, especially new formulations or uses
    pub key_patents: Vec<Patent>,
    /// High-level summary of emerging research themes
    pub research_trends: String,
}
