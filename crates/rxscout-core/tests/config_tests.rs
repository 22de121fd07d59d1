use rxscout_core::config::{
    Config, DEFAULT_LLM_PROVIDER, DEFAULT_MAX_RESULTS_PER_SOURCE, DEFAULT_MAX_TOKENS,
};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.llm.provider, DEFAULT_LLM_PROVIDER);
    assert_eq!(config.llm.max_tokens, DEFAULT_MAX_TOKENS);
    assert_eq!(
        config.evidence.max_results_per_source,
        DEFAULT_MAX_RESULTS_PER_SOURCE
    );
    assert!(config.evidence.user_agent.starts_with("rxscout/"));
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[llm]
provider = "anthropic"
max_tokens = 2048

[evidence]
max_results_per_source = 2
request_timeout_secs = 10
"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.llm.provider, "anthropic");
    assert_eq!(config.llm.max_tokens, 2048);
    assert_eq!(config.evidence.max_results_per_source, 2);
    assert_eq!(config.evidence.request_timeout_secs, 10);
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[llm]\nprovider = \"ollama\"").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.llm.provider, "ollama");
    assert_eq!(
        config.evidence.max_results_per_source,
        DEFAULT_MAX_RESULTS_PER_SOURCE
    );
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "not = [valid").unwrap();

    assert!(Config::from_file(file.path()).is_err());
}

#[test]
fn test_default_config_string() {
    let rendered = Config::default_config_string();
    assert!(rendered.contains("[llm]"));
    assert!(rendered.contains("[evidence]"));
    // API keys come from the environment, never the rendered config
    assert!(!rendered.contains("api_key"));
}
