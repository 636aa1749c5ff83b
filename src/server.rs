use crate::config::Config;
use crate::error::LyricsError;
use crate::messages::{ErrorResult, LyricsRequest};
use crate::resolver::LyricsResolver;
use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    resolver: Arc<LyricsResolver>,
}

impl AppState {
    pub fn new(resolver: Arc<LyricsResolver>) -> Self {
        Self { resolver }
    }
}

/// Routes for the lyrics endpoint. Any HTTP method is accepted.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/lyrics", any(lyrics_route))
        .route("/api/lyric", any(lyrics_route))
        .with_state(state)
}

/// A query string that fails to parse is treated like one with no parameters
pub async fn lyrics_route(
    State(state): State<AppState>,
    query: Option<Query<LyricsRequest>>,
) -> Response {
    let request = query.map(|Query(q)| q).unwrap_or_default();

    match state.resolver.clone().resolve_guarded(request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => e.into_response(),
    }
}

impl IntoResponse for LyricsError {
    fn into_response(self) -> Response {
        let status = match &self {
            LyricsError::MissingInput => StatusCode::BAD_REQUEST,
            LyricsError::Unexpected(e) => {
                tracing::error!("lyrics api error: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResult::from(&self))).into_response()
    }
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: &Config, resolver: Arc<LyricsResolver>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    tracing::info!(
        "Listening on {} (providers: {})",
        listener.local_addr()?,
        resolver.provider_names().join(" -> ")
    );

    axum::serve(listener, router(AppState::new(resolver)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C, running until killed: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
