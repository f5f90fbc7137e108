//! HTTP service exposing the profile page.
//!
//! One route: `GET /`. The handler awaits the repository fetch to
//! completion before rendering, then responds with the composed document
//! and a `Cache-Control` header carrying the revalidation window for the
//! hosting runtime.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use log::{error, info};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::config::{Config, build_http_client};
use crate::github::{GitHubClient, REVALIDATE_SECS, RecentRepos};
use crate::page::{self, Profile};

/// Shared state for the page handler.
#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RecentRepos>,
    pub profile: Arc<Profile>,
    pub public_url: Arc<str>,
}

/// Build the axum application around a repository fetcher.
pub fn build_app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    Router::new()
        .route("/", get(profile_page))
        .with_state(state)
        .layer(middleware)
}

#[tracing::instrument(skip(state))]
async fn profile_page(State(state): State<AppState>) -> Response {
    // The fetch is awaited to completion (or failure) before any
    // rendering starts.
    let repos = match state.repos.recent_repos().await {
        Ok(repos) => repos,
        Err(e) => {
            error!("Unexpected repository fetch failure: {:#}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match page::render_page(&state.profile, &state.public_url, &repos) {
        Ok(html) => (
            [(
                header::CACHE_CONTROL,
                format!("public, max-age={}", REVALIDATE_SECS),
            )],
            Html(html),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to render profile page: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Run the page service until the process is terminated.
pub async fn run(config: Config) -> Result<()> {
    let client = build_http_client(config.token.as_deref())?;
    let github = GitHubClient::new(client, &config.api_url, config.username.clone());
    let profile = Profile::with_username(config.username.as_deref());

    let state = AppState {
        repos: Arc::new(github),
        profile: Arc::new(profile),
        public_url: config.public_url.clone().into(),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Serving profile page on http://{}", config.bind_addr);

    axum::serve(listener, build_app(state))
        .await
        .context("Server error")?;

    Ok(())
}
