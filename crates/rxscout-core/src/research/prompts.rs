use crate::evidence::Evidence;

/// System prompt for the research synthesis stage.
pub const RESEARCH_SYSTEM_PROMPT: &str = r#"You are an expert pharmaceutical research analyst. You analyze raw data from PubMed, ClinicalTrials.gov, and patent databases for a given drug and synthesize the findings into a structured report.

Identify the drug's primary mechanism of action, list *only* the most promising *new* indications for repurposing (never include the drug's primary approved use), and summarize the key research trends.

IMPORTANT: Output your analysis as valid JSON matching this exact structure:
{
  "drug_name": "Metformin",
  "mechanism_of_action": "A concise summary of the primary mechanism of action",
  "potential_new_indications": ["Cancer", "Alzheimer's"],
  "key_publications": [
    {
      "title": "Publication title",
      "year": 2023,
      "authors": ["Author A", "Author B"],
      "url": "https://pubmed.ncbi.nlm.nih.gov/00000000/"
    }
  ],
  "key_trials": [
    {
      "title": "Official trial title",
      "phase": "Phase 2",
      "status": "Recruiting",
      "year": 2023,
      "condition": "Cancer",
      "url": "https://clinicaltrials.gov/study/NCT00000000"
    }
  ],
  "key_patents": [
    {
      "title": "Patent title",
      "year": 2023,
      "applicant": "Pfizer Inc.",
      "url": "https://www.lens.org/patent/XXXXXX"
    }
  ],
  "research_trends": "A high-level summary of emerging research themes"
}

Only output the JSON, no additional text."#;

/// Builds the user prompt for research synthesis from the gathered evidence.
pub fn build_research_prompt(drug_name: &str, evidence: &Evidence) -> String {
    let publications = to_json_block(&evidence.publications);
    let trials = to_json_block(&evidence.trials);
    let patents = to_json_block(&evidence.patents);

    format!(
        r#"## Drug

{drug_name}

## Raw Data

### PubMed Articles

{publications}

### Clinical Trials

{trials}

### Patents

{patents}

Analyze all the raw data and generate a structured research report for this drug. Identify the primary mechanism of action, list only the most promising new indications for repurposing (do not include its primary approved use), and summarize the key research trends."#
    )
}

fn to_json_block<T: serde::Serialize>(items: &[T]) -> String {
    serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
}
