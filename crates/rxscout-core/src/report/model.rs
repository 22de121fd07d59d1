use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The final, consolidated output of a pipeline run.
///
/// Every sub-report is derived deterministically from the research report
/// and market analyses handed to the builder; there is no hidden state.
/// Maps are `BTreeMap` so serialized output is byte-stable across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalReport {
    pub drug_name: String,
    pub summary: ReportSummary,
    pub clinical_trials: ClinicalTrialsReport,
    pub research_papers: ResearchPapersReport,
    pub patents: PatentsReport,
    pub market_analysis: MarketAnalysisReport,
    pub visualization_data: ChartData,
    pub report_links: ReportLinks,
}

/// Top-level insight synthesizing scientific and market data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub overall_insight: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialDetail {
    pub title: String,
    pub phase: String,
    pub status: String,
    pub year: i32,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalTrialsReport {
    pub total_trials: usize,
    pub trials_by_disease: BTreeMap<String, usize>,
    pub key_trials: Vec<TrialDetail>,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperDetail {
    pub title: String,
    pub year: i32,
    pub authors: Vec<String>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchPapersReport {
    pub total_papers: usize,
    pub key_topics: Vec<String>,
    pub top_papers: Vec<PaperDetail>,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatentDetail {
    pub title: String,
    pub year: i32,
    pub applicant: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatentsReport {
    pub total_patents: usize,
    pub recent_patents: Vec<PatentDetail>,
    pub patent_trend: BTreeMap<i32, usize>,
    pub summary: String,
}

/// One ranked indication in the market section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketIndicationAnalysis {
    pub disease: String,
    pub market_size_usd_billion: f64,
    pub competition: String,
    /// Calculated score from 0.0 to 1.0 representing potential
    pub potential_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketAnalysisReport {
    /// Indications sorted by potential score, best first
    pub top_indications: Vec<MarketIndicationAnalysis>,
    pub summary: String,
}

/// Chart-ready aggregates for a front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub trials_by_disease: BTreeMap<String, usize>,
    pub patent_trend: BTreeMap<i32, usize>,
    pub market_potential: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportLinks {
    pub pdf_report: String,
    pub timestamp: DateTime<Utc>,
}

impl FinalReport {
    /// Renders the report as markdown for terminal display.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("# Repurposing Report: {}\n\n", self.drug_name));
        md.push_str(&self.summary.overall_insight);
        md.push_str("\n\n");

        md.push_str("## Market Analysis\n\n");
        md.push_str(&self.market_analysis.summary);
        md.push_str("\n\n");
        for indication in &self.market_analysis.top_indications {
            md.push_str(&format!(
                "- **{}**: score {:.2}, market ${:.1}B, competition: {}\n",
                indication.disease,
                indication.potential_score,
                indication.market_size_usd_billion,
                indication.competition
            ));
        }
        md.push('\n');

        md.push_str(&format!(
            "## Clinical Trials ({})\n\n",
            self.clinical_trials.total_trials
        ));
        for trial in &self.clinical_trials.key_trials {
            md.push_str(&format!(
                "- {} ({}, {}, {})\n",
                trial.title, trial.phase, trial.status, trial.year
            ));
        }
        md.push('\n');

        md.push_str(&format!(
            "## Research Papers ({})\n\n",
            self.research_papers.total_papers
        ));
        for paper in &self.research_papers.top_papers {
            md.push_str(&format!("- {} ({})\n", paper.title, paper.year));
        }
        md.push('\n');

        md.push_str(&format!("## Patents ({})\n\n", self.patents.total_patents));
        for patent in &self.patents.recent_patents {
            md.push_str(&format!(
                "- {} ({}, {})\n",
                patent.title, patent.applicant, patent.year
            ));
        }
        md.push('\n');

        md.push_str("## Links\n\n");
        md.push_str(&format!("- PDF: {}\n", self.report_links.pdf_report));
        md.push_str(&format!(
            "- Generated: {}\n",
            self.report_links.timestamp.to_rfc3339()
        ));

        md
    }
}
