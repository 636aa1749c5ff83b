pub mod ovh;
pub mod textise;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

use crate::error::ProviderError;
use crate::messages::LyricsQuery;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

/// One source of lyrics in the fallback chain
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Try to produce lyrics for the query.
    /// `Ok(None)` and `Err(ProviderError::Unavailable)` both hand over to the next provider.
    async fn attempt(&self, query: &LyricsQuery) -> Result<Option<String>, ProviderError>;
}

/// Build the HTTP client shared by all providers
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    let user_agent = format!("lyricproxy/{}", env!("CARGO_PKG_VERSION"));

    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .context("Failed to build HTTP client")
}

/// Drop trailing slashes so paths can be appended with a single `/`
pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://api.lyrics.ovh/v1/"),
            "https://api.lyrics.ovh/v1"
        );
        assert_eq!(normalize_base_url("http://localhost"), "http://localhost");
    }

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client(Duration::from_secs(5)).is_ok());
    }
}
