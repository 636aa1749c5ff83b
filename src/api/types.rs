use serde::Deserialize;

/// Body returned by lyrics.ovh; on a miss it carries `error` instead of `lyrics`
#[derive(Debug, Deserialize)]
pub struct OvhLyricsResponse {
    pub lyrics: Option<String>,
    pub error: Option<String>,
}
