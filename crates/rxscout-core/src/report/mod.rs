mod builder;
mod model;

pub use builder::{build_report, group_trials_by_condition, potential_score, report_slug};
pub use model::{
    ChartData, ClinicalTrialsReport, FinalReport, MarketAnalysisReport,
    MarketIndicationAnalysis, PaperDetail, PatentDetail, PatentsReport, ReportLinks,
    ReportSummary, ResearchPapersReport, TrialDetail,
};
