use super::types::OvhLyricsResponse;
use super::{normalize_base_url, LyricsProvider};
use crate::error::ProviderError;
use crate::messages::LyricsQuery;
use async_trait::async_trait;

pub const DEFAULT_BASE_URL: &str = "https://api.lyrics.ovh/v1";

/// Primary provider: the lyrics.ovh JSON API
pub struct LyricsOvhClient {
    client: reqwest::Client,
    base_url: String,
}

impl LyricsOvhClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
        }
    }

    /// `<base>/<artist>/<title>` with both segments percent-encoded
    pub fn lookup_url(&self, query: &LyricsQuery) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            urlencoding::encode(&query.artist),
            urlencoding::encode(&query.title)
        )
    }
}

#[async_trait]
impl LyricsProvider for LyricsOvhClient {
    fn name(&self) -> &'static str {
        "lyrics.ovh"
    }

    async fn attempt(&self, query: &LyricsQuery) -> Result<Option<String>, ProviderError> {
        let url = self.lookup_url(query);
        tracing::debug!("Fetching lyrics: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Unavailable(format!(
                "unexpected status code from lyrics.ovh: {}",
                status
            )));
        }

        let body = response.json::<OvhLyricsResponse>().await.map_err(|e| {
            ProviderError::Unavailable(format!("malformed lyrics.ovh body: {}", e))
        })?;

        match body.lyrics {
            Some(lyrics) if !lyrics.is_empty() => Ok(Some(lyrics)),
            _ => {
                tracing::debug!(
                    "lyrics.ovh has no lyrics for: {} - {} ({})",
                    query.artist,
                    query.title,
                    body.error.as_deref().unwrap_or("empty lyrics field")
                );
                Ok(None)
            }
        }
    }
}
