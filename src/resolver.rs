use crate::api::ovh::LyricsOvhClient;
use crate::api::textise::TextiseSearchClient;
use crate::api::{self, LyricsProvider};
use crate::config::Config;
use crate::error::{LyricsError, ProviderError};
use crate::messages::{LyricsQuery, LyricsRequest, LyricsResult};
use std::sync::Arc;

/// Returned with a 200 when no provider produced anything usable
pub const NOT_FOUND_PLACEHOLDER: &str = "Lyrics not found.";

/// Walks an ordered chain of providers and keeps the first usable answer
pub struct LyricsResolver {
    providers: Vec<Box<dyn LyricsProvider>>,
}

impl LyricsResolver {
    pub fn new(providers: Vec<Box<dyn LyricsProvider>>) -> Self {
        Self { providers }
    }

    /// lyrics.ovh first, then the search scrape, sharing one HTTP client
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = api::build_http_client(config.timeout())?;

        let providers: Vec<Box<dyn LyricsProvider>> = vec![
            Box::new(LyricsOvhClient::new(client.clone(), &config.primary_url)),
            Box::new(TextiseSearchClient::new(
                client,
                &config.proxy_url,
                &config.search_url,
            )),
        ];

        Ok(Self::new(providers))
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Validate the request and resolve it.
    /// Only validation and unexpected failures come back as errors.
    pub async fn resolve(&self, request: &LyricsRequest) -> Result<LyricsResult, LyricsError> {
        let query = request.validate()?;
        let lyrics = self.find_lyrics(&query).await?;

        Ok(LyricsResult {
            artist: query.artist,
            title: query.title,
            lyrics,
        })
    }

    /// Like [`resolve`](Self::resolve), but a panic anywhere in the lookup is
    /// reported as `LyricsError::Unexpected` instead of tearing down the caller
    pub async fn resolve_guarded(
        self: Arc<Self>,
        request: LyricsRequest,
    ) -> Result<LyricsResult, LyricsError> {
        let task = tokio::spawn(async move { self.resolve(&request).await });

        match task.await {
            Ok(outcome) => outcome,
            Err(e) => Err(LyricsError::Unexpected(anyhow::anyhow!(
                "lyrics lookup task failed: {}",
                e
            ))),
        }
    }

    async fn find_lyrics(&self, query: &LyricsQuery) -> Result<String, LyricsError> {
        for provider in &self.providers {
            match provider.attempt(query).await {
                Ok(Some(lyrics)) => {
                    tracing::info!(
                        provider = provider.name(),
                        "Lyrics found for: {} - {}",
                        query.artist,
                        query.title
                    );
                    return Ok(lyrics);
                }
                Ok(None) => {
                    tracing::debug!(provider = provider.name(), "No usable lyrics, falling through");
                }
                Err(ProviderError::Unavailable(reason)) => {
                    tracing::debug!(
                        provider = provider.name(),
                        "Provider unavailable, falling through: {}",
                        reason
                    );
                }
                Err(ProviderError::Unexpected(e)) => {
                    return Err(LyricsError::Unexpected(
                        e.context(format!("provider {} failed", provider.name())),
                    ));
                }
            }
        }

        tracing::info!("Lyrics not found for: {} - {}", query.artist, query.title);
        Ok(NOT_FOUND_PLACEHOLDER.to_string())
    }
}
