use chrono::{TimeZone, Utc};

use rxscout_core::evidence::Trial;
use rxscout_core::market::MarketAnalysis;
use rxscout_core::report::{build_report, group_trials_by_condition, potential_score, report_slug};
use rxscout_core::research::ResearchReport;

fn trial(condition: Option<&str>) -> Trial {
    Trial {
        title: "A trial".to_string(),
        phase: "PHASE2".to_string(),
        status: "RECRUITING".to_string(),
        year: 2022,
        condition: condition.map(String::from),
        url: "https://clinicaltrials.gov/study/NCT00000000".to_string(),
    }
}

fn analysis(indication: &str, size_usd: f64, cagr: f64, competitors: &[&str]) -> MarketAnalysis {
    MarketAnalysis {
        drug_name: "Metformin".to_string(),
        target_indication: indication.to_string(),
        market_opportunity: "Opportunity".to_string(),
        estimated_market_size_usd: size_usd,
        growth_cagr_percent: cagr,
        key_competitors: competitors.iter().map(|s| s.to_string()).collect(),
        business_recommendation: "Recommendation".to_string(),
        summary: "Summary".to_string(),
    }
}

fn research_report(trials: Vec<Trial>) -> ResearchReport {
    ResearchReport {
        drug_name: "Metformin".to_string(),
        mechanism_of_action: "AMPK activation".to_string(),
        potential_new_indications: vec!["Cancer".to_string()],
        key_publications: Vec::new(),
        key_trials: trials,
        key_patents: Vec::new(),
        research_trends: "Trends".to_string(),
    }
}

mod scoring {
    use super::*;

    #[test]
    fn test_saturated_inputs_score_one() {
        // size_score = 1, cagr_score = 1, competition_score = 1
        let market = analysis("Cancer", 50_000_000_000.0, 15.0, &[]);
        assert_eq!(potential_score(&market), 1.0);
    }

    #[test]
    fn test_zero_market_with_three_competitors() {
        // Only the competition component contributes: 0.3 * 0.25
        let market = analysis("Cancer", 0.0, 0.0, &["A", "B", "C"]);
        assert_eq!(potential_score(&market), 0.08);
    }

    #[test]
    fn test_fallback_record_score() {
        let fallback = MarketAnalysis::unavailable("Metformin", "Alzheimer's");
        assert_eq!(potential_score(&fallback), 0.25);
    }

    #[test]
    fn test_score_bounds() {
        let sizes = [0.0, 5_000_000.0, 1e9, 5e10, 1e13];
        let cagrs = [0.0, 3.0, 15.0, 40.0, 500.0];
        let competitor_counts = [0, 1, 2, 5, 50];

        for &size in &sizes {
            for &cagr in &cagrs {
                for &count in &competitor_counts {
                    let names: Vec<String> = (0..count).map(|i| format!("C{i}")).collect();
                    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
                    let market = analysis("X", size, cagr, &name_refs);
                    let score = potential_score(&market);
                    assert!(
                        (0.0..=1.0).contains(&score),
                        "score {score} out of bounds for size={size} cagr={cagr} competitors={count}"
                    );
                }
            }
        }
    }
}

mod grouping {
    use super::*;

    #[test]
    fn test_trials_group_by_condition_with_unknown_bucket() {
        let trials = vec![
            trial(Some("Cancer")),
            trial(Some("Cancer")),
            trial(None),
        ];

        let grouped = group_trials_by_condition(&trials);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["Cancer"], 2);
        assert_eq!(grouped["Unknown"], 1);
    }

    #[test]
    fn test_empty_condition_counts_as_unknown() {
        let grouped = group_trials_by_condition(&[trial(Some("")), trial(None)]);
        assert_eq!(grouped["Unknown"], 2);
    }
}

mod building {
    use super::*;

    fn fixed_timestamp() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_totals_match_key_list_lengths() {
        let research = research_report(vec![trial(Some("Cancer")), trial(None)]);
        let markets = vec![analysis("Cancer", 1e9, 5.0, &["A"])];

        let report = build_report("Metformin", &research, &markets, fixed_timestamp());

        assert_eq!(report.clinical_trials.total_trials, research.key_trials.len());
        assert_eq!(report.research_papers.total_papers, research.key_publications.len());
        assert_eq!(report.patents.total_patents, research.key_patents.len());
    }

    #[test]
    fn test_display_lists_truncate_to_ten() {
        let trials: Vec<Trial> = (0..12).map(|_| trial(Some("Cancer"))).collect();
        let research = research_report(trials);

        let report = build_report("Metformin", &research, &[], fixed_timestamp());

        // Counts reflect the full list, display is capped
        assert_eq!(report.clinical_trials.total_trials, 12);
        assert_eq!(report.clinical_trials.key_trials.len(), 10);
    }

    #[test]
    fn test_ranking_is_descending_and_stable() {
        let markets = vec![
            analysis("Small", 1e9, 3.0, &["A", "B"]),
            analysis("First of tie", 5e10, 15.0, &[]),
            analysis("Second of tie", 5e10, 15.0, &[]),
        ];

        let report = build_report("Metformin", &research_report(Vec::new()), &markets, fixed_timestamp());
        let ranked = &report.market_analysis.top_indications;

        assert_eq!(ranked[0].disease, "First of tie");
        assert_eq!(ranked[1].disease, "Second of tie");
        assert_eq!(ranked[2].disease, "Small");

        let scores: Vec<f64> = ranked.iter().map(|r| r.potential_score).collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_empty_markets_summary() {
        let report = build_report("Metformin", &research_report(Vec::new()), &[], fixed_timestamp());
        assert!(report.market_analysis.top_indications.is_empty());
        assert_eq!(report.market_analysis.summary, "No market analyses available.");
    }

    #[test]
    fn test_market_summary_counts_indications() {
        let markets = vec![
            analysis("Cancer", 1e9, 5.0, &[]),
            analysis("Obesity", 2e9, 8.0, &[]),
        ];
        let report = build_report("Metformin", &research_report(Vec::new()), &markets, fixed_timestamp());
        assert_eq!(
            report.market_analysis.summary,
            "Analysis of 2 potential indications completed. See top_indications for details."
        );
    }

    #[test]
    fn test_competition_column() {
        let markets = vec![
            analysis("Cancer", 1e9, 5.0, &["Pfizer", "Novartis"]),
            analysis("Obesity", 1e9, 5.0, &[]),
        ];
        let report = build_report("Metformin", &research_report(Vec::new()), &markets, fixed_timestamp());

        let by_disease = |name: &str| {
            report
                .market_analysis
                .top_indications
                .iter()
                .find(|r| r.disease == name)
                .unwrap()
                .competition
                .clone()
        };
        assert_eq!(by_disease("Cancer"), "Pfizer, Novartis");
        assert_eq!(by_disease("Obesity"), "Low");
    }

    #[test]
    fn test_chart_data_mirrors_sections() {
        let research = research_report(vec![trial(Some("Cancer")), trial(None)]);
        let markets = vec![analysis("Cancer", 5e10, 15.0, &[])];

        let report = build_report("Metformin", &research, &markets, fixed_timestamp());

        assert_eq!(
            report.visualization_data.trials_by_disease,
            report.clinical_trials.trials_by_disease
        );
        assert_eq!(report.visualization_data.market_potential["Cancer"], 1.0);
    }

    #[test]
    fn test_links_use_slug_and_injected_timestamp() {
        let report = build_report(
            "Valproic Acid",
            &research_report(Vec::new()),
            &[],
            fixed_timestamp(),
        );

        assert_eq!(
            report.report_links.pdf_report,
            "https://rxscout.dev/reports/valproic-acid_report.pdf"
        );
        assert_eq!(report.report_links.timestamp, fixed_timestamp());
    }

    #[test]
    fn test_build_report_is_idempotent() {
        let research = research_report(vec![trial(Some("Cancer")), trial(None)]);
        let markets = vec![
            analysis("Cancer", 5e10, 15.0, &[]),
            MarketAnalysis::unavailable("Metformin", "Alzheimer's"),
        ];

        let first = build_report("Metformin", &research, &markets, fixed_timestamp());
        let second = build_report("Metformin", &research, &markets, fixed_timestamp());

        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn test_markdown_rendering() {
        let markets = vec![analysis("Cancer", 5e10, 15.0, &[])];
        let report = build_report("Metformin", &research_report(Vec::new()), &markets, fixed_timestamp());

        let markdown = report.to_markdown();
        assert!(markdown.contains("# Repurposing Report: Metformin"));
        assert!(markdown.contains("**Cancer**"));
        assert!(markdown.contains("https://rxscout.dev/reports/metformin_report.pdf"));
    }
}

mod slug {
    use super::*;

    #[test]
    fn test_report_slug() {
        assert_eq!(report_slug("Metformin"), "metformin");
        assert_eq!(report_slug("Valproic Acid"), "valproic-acid");
    }
}
