use crate::error::LyricsError;
use crate::messages::{ErrorResult, LyricsRequest};
use crate::resolver::LyricsResolver;
use anyhow::Result;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

/// Resolve one song and write the same JSON body the HTTP endpoint would return.
/// Validation and unexpected failures print the error body and exit non-zero.
pub async fn run_lookup<W: Write>(
    resolver: Arc<LyricsResolver>,
    request: LyricsRequest,
    out: &mut W,
) -> Result<ExitCode> {
    match resolver.resolve_guarded(request).await {
        Ok(result) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if let LyricsError::Unexpected(ref cause) = e {
                tracing::error!("lyrics lookup error: {:#}", cause);
            }
            writeln!(out, "{}", serde_json::to_string_pretty(&ErrorResult::from(&e))?)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
