use thiserror::Error;

/// Errors that can occur while fetching evidence from an external provider.
///
/// These never reach the pipeline caller: the gatherer logs the failure and
/// substitutes an empty collection for the affected source.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{provider} returned status {status}")]
    Status { provider: &'static str, status: u16 },

    #[error("failed to decode {provider} response: {message}")]
    Decode { provider: &'static str, message: String },
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Network(err.to_string())
    }
}
