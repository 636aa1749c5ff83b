use super::{normalize_base_url, LyricsProvider};
use crate::error::ProviderError;
use crate::extract;
use crate::messages::LyricsQuery;
use async_trait::async_trait;

pub const DEFAULT_PROXY_URL: &str = "https://textise.net/showtext.aspx";
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search";

/// Fallback provider: a web search rendered to text by the textise proxy,
/// then mined with the heuristic in [`crate::extract`]
pub struct TextiseSearchClient {
    client: reqwest::Client,
    proxy_url: String,
    search_url: String,
}

impl TextiseSearchClient {
    pub fn new(client: reqwest::Client, proxy_url: &str, search_url: &str) -> Self {
        Self {
            client,
            proxy_url: normalize_base_url(proxy_url),
            search_url: normalize_base_url(search_url),
        }
    }

    /// Proxy URL wrapping the search URL. The search query is the encoded
    /// `"<artist> <title> lyrics"` followed by a literal `+lyrics`, so the
    /// word appears twice.
    pub fn page_url(&self, query: &LyricsQuery) -> String {
        let phrase = format!("{} {} lyrics", query.artist, query.title);
        format!(
            "{}?strURL={}?q={}+lyrics",
            self.proxy_url,
            self.search_url,
            urlencoding::encode(&phrase)
        )
    }
}

#[async_trait]
impl LyricsProvider for TextiseSearchClient {
    fn name(&self) -> &'static str {
        "textise-search"
    }

    async fn attempt(&self, query: &LyricsQuery) -> Result<Option<String>, ProviderError> {
        let url = self.page_url(query);
        tracing::debug!("Fetching search page: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Unavailable(format!(
                "unexpected status code from search proxy: {}",
                status
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ProviderError::Unavailable(format!("unreadable search page: {}", e)))?;
        tracing::debug!("Received search page ({} bytes)", html.len());

        let lyrics = extract::extract_lyrics(&html);
        if lyrics.is_none() {
            tracing::debug!(
                "Search page for {} - {} did not pass the acceptance rule",
                query.artist,
                query.title
            );
        }

        Ok(lyrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_doubles_lyrics_keyword() {
        let client = TextiseSearchClient::new(
            reqwest::Client::new(),
            DEFAULT_PROXY_URL,
            DEFAULT_SEARCH_URL,
        );
        let query = LyricsQuery {
            artist: "Adele".to_string(),
            title: "Hello".to_string(),
        };

        assert_eq!(
            client.page_url(&query),
            "https://textise.net/showtext.aspx?strURL=https://www.google.com/search?q=Adele%20Hello%20lyrics+lyrics"
        );
    }

    #[tokio::test]
    async fn test_refused_connection_is_unavailable() {
        let client = TextiseSearchClient::new(
            reqwest::Client::new(),
            "http://127.0.0.1:1/showtext.aspx",
            DEFAULT_SEARCH_URL,
        );
        let query = LyricsQuery {
            artist: "Adele".to_string(),
            title: "Hello".to_string(),
        };

        let outcome = client.attempt(&query).await;
        assert!(matches!(outcome, Err(ProviderError::Unavailable(_))));
    }
}
