//! Merges the research report and market analyses into the final report.
//!
//! `build_report` is a pure function: deterministic given its inputs and
//! total over well-shaped ones. The generation timestamp is injected so
//! callers (and tests) control the one non-deterministic value.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::config::{
    CAGR_NORMALIZER_PERCENT, CAGR_WEIGHT, COMPETITION_WEIGHT, MARKET_SIZE_NORMALIZER_USD,
    MARKET_SIZE_WEIGHT, MAX_DISPLAY_ITEMS, REPORT_BASE_URL,
};
use crate::evidence::{Patent, Publication, Trial};
use crate::market::MarketAnalysis;
use crate::report::model::{
    ChartData, ClinicalTrialsReport, FinalReport, MarketAnalysisReport,
    MarketIndicationAnalysis, PaperDetail, PatentDetail, PatentsReport, ReportLinks,
    ReportSummary, ResearchPapersReport, TrialDetail,
};
use crate::research::ResearchReport;

/// Builds the consolidated final report.
pub fn build_report(
    drug_name: &str,
    research: &ResearchReport,
    markets: &[MarketAnalysis],
    generated_at: DateTime<Utc>,
) -> FinalReport {
    FinalReport {
        drug_name: drug_name.to_string(),
        summary: ReportSummary {
            overall_insight: format!(
                "{drug_name} shows significant repurposing potential based on recent \
                 research and market analysis."
            ),
        },
        clinical_trials: ClinicalTrialsReport {
            total_trials: research.key_trials.len(),
            trials_by_disease: group_trials_by_condition(&research.key_trials),
            key_trials: convert_trials(&research.key_trials),
            summary: research.research_trends.clone(),
        },
        research_papers: ResearchPapersReport {
            total_papers: research.key_publications.len(),
            key_topics: research.potential_new_indications.clone(),
            top_papers: convert_publications(&research.key_publications),
            summary: research.research_trends.clone(),
        },
        patents: PatentsReport {
            total_patents: research.key_patents.len(),
            recent_patents: convert_patents(&research.key_patents),
            patent_trend: group_patents_by_year(&research.key_patents),
            summary: "Patent activity suggests growing interest in new applications."
                .to_string(),
        },
        market_analysis: MarketAnalysisReport {
            top_indications: rank_indications(markets),
            summary: market_summary(markets),
        },
        visualization_data: ChartData {
            trials_by_disease: group_trials_by_condition(&research.key_trials),
            patent_trend: group_patents_by_year(&research.key_patents),
            market_potential: markets
                .iter()
                .map(|market| (market.target_indication.clone(), potential_score(market)))
                .collect(),
        },
        report_links: ReportLinks {
            pdf_report: format!("{}/{}_report.pdf", REPORT_BASE_URL, report_slug(drug_name)),
            timestamp: generated_at,
        },
    }
}

/// Groups trials by condition; trials without one land in "Unknown".
pub fn group_trials_by_condition(trials: &[Trial]) -> BTreeMap<String, usize> {
    let mut grouped = BTreeMap::new();
    for trial in trials {
        let condition = match trial.condition.as_deref() {
            Some(condition) if !condition.trim().is_empty() => condition.to_string(),
            _ => "Unknown".to_string(),
        };
        *grouped.entry(condition).or_insert(0) += 1;
    }
    grouped
}

fn group_patents_by_year(patents: &[Patent]) -> BTreeMap<i32, usize> {
    let mut grouped = BTreeMap::new();
    for patent in patents {
        *grouped.entry(patent.year).or_insert(0) += 1;
    }
    grouped
}

fn convert_trials(trials: &[Trial]) -> Vec<TrialDetail> {
    trials
        .iter()
        .take(MAX_DISPLAY_ITEMS)
        .map(|trial| TrialDetail {
            title: trial.title.clone(),
            phase: trial.phase.clone(),
            status: trial.status.clone(),
            year: trial.year,
            url: trial.url.clone(),
        })
        .collect()
}

fn convert_publications(publications: &[Publication]) -> Vec<PaperDetail> {
    publications
        .iter()
        .take(MAX_DISPLAY_ITEMS)
        .map(|publication| PaperDetail {
            title: publication.title.clone(),
            year: publication.year,
            authors: publication.authors.clone(),
            url: publication.url.clone(),
        })
        .collect()
}

fn convert_patents(patents: &[Patent]) -> Vec<PatentDetail> {
    patents
        .iter()
        .take(MAX_DISPLAY_ITEMS)
        .map(|patent| PatentDetail {
            title: patent.title.clone(),
            year: patent.year,
            applicant: patent.applicant.clone(),
            url: patent.url.clone(),
        })
        .collect()
}

/// Scores one market analysis into [0, 1].
///
/// Larger markets and higher growth raise the score; named competitors
/// lower it with a harmonic decay, so a handful of competitors does not
/// zero out an attractive market.
pub fn potential_score(market: &MarketAnalysis) -> f64 {
    let size_score = (market.estimated_market_size_usd / MARKET_SIZE_NORMALIZER_USD).min(1.0);
    let cagr_score = (market.growth_cagr_percent / CAGR_NORMALIZER_PERCENT).min(1.0);
    let competition_score = 1.0 / (market.key_competitors.len() as f64 + 1.0);

    let score = size_score * MARKET_SIZE_WEIGHT
        + cagr_score * CAGR_WEIGHT
        + competition_score * COMPETITION_WEIGHT;

    round2(score)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Projects and ranks the market analyses by potential score, descending.
///
/// The sort is stable: ties keep the order the fan-out produced.
fn rank_indications(markets: &[MarketAnalysis]) -> Vec<MarketIndicationAnalysis> {
    let mut ranked: Vec<MarketIndicationAnalysis> = markets
        .iter()
        .map(|market| MarketIndicationAnalysis {
            disease: market.target_indication.clone(),
            market_size_usd_billion: market.estimated_market_size_usd / 1_000_000_000.0,
            competition: if market.key_competitors.is_empty() {
                "Low".to_string()
            } else {
                market.key_competitors.join(", ")
            },
            potential_score: potential_score(market),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.potential_score
            .partial_cmp(&a.potential_score)
            .unwrap_or(Ordering::Equal)
    });

    ranked
}

fn market_summary(markets: &[MarketAnalysis]) -> String {
    if markets.is_empty() {
        return "No market analyses available.".to_string();
    }
    format!(
        "Analysis of {} potential indications completed. See top_indications for details.",
        markets.len()
    )
}

/// Lower-cases the drug name and collapses whitespace runs to `-`.
pub fn report_slug(drug_name: &str) -> String {
    drug_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.075), 0.08);
        assert_eq!(round2(1.0000000000000002), 1.0);
        assert_eq!(round2(0.333), 0.33);
    }

    #[test]
    fn test_report_slug() {
        assert_eq!(report_slug("Metformin"), "metformin");
        assert_eq!(report_slug("Valproic Acid"), "valproic-acid");
        assert_eq!(report_slug("  Valproic   Acid "), "valproic-acid");
    }

    #[test]
    fn test_market_summary_empty() {
        assert_eq!(market_summary(&[]), "No market analyses available.");
    }
}
