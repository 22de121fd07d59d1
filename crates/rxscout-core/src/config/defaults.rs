//! Default values for rxscout configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Evidence Provider Defaults
// ============================================================================

/// User agent sent with every evidence provider request.
pub const DEFAULT_USER_AGENT: &str =
    "rxscout/0.1 (drug repurposing research pipeline; mailto:contact@rxscout.dev)";

/// NCBI E-utilities search endpoint.
pub const PUBMED_ESEARCH_URL: &str =
    "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";

/// NCBI E-utilities summary endpoint.
pub const PUBMED_ESUMMARY_URL: &str =
    "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi";

/// Base URL for linking to a PubMed article by PMID.
pub const PUBMED_ARTICLE_BASE_URL: &str = "https://pubmed.ncbi.nlm.nih.gov/";

/// ClinicalTrials.gov v2 studies endpoint.
pub const CLINICAL_TRIALS_URL: &str = "https://clinicaltrials.gov/api/v2/studies";

/// Fallback URL when a study has no NCT id.
pub const CLINICAL_TRIALS_BASE_URL: &str = "https://clinicaltrials.gov/";

/// Maximum results requested from each evidence source.
pub const DEFAULT_MAX_RESULTS_PER_SOURCE: usize = 5;

/// Per-request timeout for evidence providers.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Courtesy delay before each NCBI E-utilities request (their usage policy
/// caps unauthenticated clients at ~3 requests per second).
pub const NCBI_COURTESY_DELAY_MS: u64 = 400;

/// Year recorded for a trial whose start date cannot be parsed.
pub const DEFAULT_TRIAL_YEAR: i32 = 2024;

// ============================================================================
// LLM Defaults
// ============================================================================

/// Default LLM provider.
pub const DEFAULT_LLM_PROVIDER: &str = "openrouter";

/// Default max tokens for LLM responses.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

// OpenAI defaults
/// Default OpenAI API URL.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
/// Default OpenAI model.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

// Anthropic defaults
/// Default Anthropic API URL.
pub const DEFAULT_ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
/// Default Anthropic model.
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";
/// Default Anthropic API version.
pub const DEFAULT_ANTHROPIC_API_VERSION: &str = "2023-06-01";

// Ollama defaults
/// Default Ollama API URL.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/v1";
/// Default Ollama model.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";

// OpenRouter defaults
/// Default OpenRouter API URL.
pub const DEFAULT_OPENROUTER_URL: &str = "https://openrouter.ai/api/v1";
/// Default OpenRouter model.
pub const DEFAULT_OPENROUTER_MODEL: &str = "tngtech/deepseek-r1t2-chimera:free";

// ============================================================================
// Pipeline Defaults
// ============================================================================

/// Maximum candidate indications evaluated per run; candidates beyond the
/// cap are dropped, not queued.
pub const MAX_MARKET_INDICATIONS: usize = 5;

/// Maximum items of each evidence kind projected into the final report.
pub const MAX_DISPLAY_ITEMS: usize = 10;

// ============================================================================
// Scoring Defaults
// ============================================================================

/// Market size at which the size component of the potential score saturates.
pub const MARKET_SIZE_NORMALIZER_USD: f64 = 50_000_000_000.0;

/// CAGR at which the growth component of the potential score saturates.
pub const CAGR_NORMALIZER_PERCENT: f64 = 15.0;

/// Weight of the market-size component.
pub const MARKET_SIZE_WEIGHT: f64 = 0.4;
/// Weight of the growth component.
pub const CAGR_WEIGHT: f64 = 0.3;
/// Weight of the competition component.
pub const COMPETITION_WEIGHT: f64 = 0.3;

// ============================================================================
// Report Defaults
// ============================================================================

/// Base URL for generated report links.
pub const REPORT_BASE_URL: &str = "https://rxscout.dev/reports";

// ============================================================================
// Fallback Record Defaults
// ============================================================================

/// Opportunity marker substituted when a market evaluation fails.
pub const UNAVAILABLE_MARKET_OPPORTUNITY: &str = "Analysis unavailable (rate limited)";

/// Nominal market size substituted when a market evaluation fails.
pub const UNAVAILABLE_MARKET_SIZE_USD: f64 = 5_000_000.0;

/// Nominal CAGR substituted when a market evaluation fails.
pub const UNAVAILABLE_CAGR_PERCENT: f64 = 5.0;

/// Placeholder competitor entry for a failed market evaluation.
pub const UNAVAILABLE_COMPETITOR: &str = "TBD";

/// Recommendation text for a failed market evaluation.
pub const UNAVAILABLE_RECOMMENDATION: &str =
    "Further analysis needed - retry after the rate limit resets";
