use crate::error::LyricsError;
use serde::{Deserialize, Serialize};

/// Query parameters of an incoming lyrics request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LyricsRequest {
    pub artist: Option<String>,
    pub title: Option<String>,
}

/// A request that passed validation: both fields present and non-blank.
/// Values are kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsQuery {
    pub artist: String,
    pub title: String,
}

/// Body of every 200 response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LyricsResult {
    pub artist: String,
    pub title: String,
    pub lyrics: String,
}

/// Body of every 400 and 500 response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResult {
    pub error: String,
}

impl LyricsRequest {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            title: Some(title.into()),
        }
    }

    /// Reject the request if either field is missing or only whitespace
    pub fn validate(&self) -> Result<LyricsQuery, LyricsError> {
        let artist = non_blank(self.artist.as_deref());
        let title = non_blank(self.title.as_deref());

        match (artist, title) {
            (Some(artist), Some(title)) => Ok(LyricsQuery {
                artist: artist.to_string(),
                title: title.to_string(),
            }),
            _ => Err(LyricsError::MissingInput),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<&LyricsError> for ErrorResult {
    fn from(err: &LyricsError) -> Self {
        Self {
            error: err.public_message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_keeps_raw_values() {
        let query = LyricsRequest::new("  Adele ", "Hello\n").validate().unwrap();
        assert_eq!(query.artist, "  Adele ");
        assert_eq!(query.title, "Hello\n");
    }

    #[test]
    fn test_validate_rejects_missing_or_blank() {
        let cases = [
            LyricsRequest::default(),
            LyricsRequest {
                artist: Some("Adele".into()),
                title: None,
            },
            LyricsRequest {
                artist: None,
                title: Some("Hello".into()),
            },
            LyricsRequest::new("", "Hello"),
            LyricsRequest::new("Adele", "   "),
        ];

        for request in cases {
            assert!(matches!(
                request.validate(),
                Err(LyricsError::MissingInput)
            ));
        }
    }

    #[test]
    fn test_request_deserializes_partial_query() {
        let request: LyricsRequest = serde_json::from_str(r#"{"artist":"Adele"}"#).unwrap();
        assert_eq!(request.artist.as_deref(), Some("Adele"));
        assert!(request.title.is_none());
    }

    #[test]
    fn test_error_result_uses_public_message() {
        let err = LyricsError::Unexpected(anyhow::anyhow!("socket exploded"));
        let body = serde_json::to_string(&ErrorResult::from(&err)).unwrap();
        assert_eq!(body, r#"{"error":"Lyrics fetch failed"}"#);
    }
}
