use thiserror::Error;

/// Failure reported by one provider attempt back to the resolver
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Routine: transport failure, non-success status, malformed or empty body.
    /// The resolver moves on to the next provider.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Anything the fallback chain does not expect. Aborts the lookup.
    #[error("unexpected provider failure: {0:#}")]
    Unexpected(anyhow::Error),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        // A request that could not even be built points at our own configuration
        if err.is_builder() {
            ProviderError::Unexpected(err.into())
        } else {
            ProviderError::Unavailable(err.to_string())
        }
    }
}

/// Failure of a whole lookup, as seen by the HTTP layer and the CLI
#[derive(Error, Debug)]
pub enum LyricsError {
    #[error("Missing artist or title")]
    MissingInput,

    #[error("Lyrics fetch failed: {0:#}")]
    Unexpected(anyhow::Error),
}

impl LyricsError {
    /// Message safe to hand back to clients
    pub fn public_message(&self) -> &'static str {
        match self {
            LyricsError::MissingInput => "Missing artist or title",
            LyricsError::Unexpected(_) => "Lyrics fetch failed",
        }
    }
}
