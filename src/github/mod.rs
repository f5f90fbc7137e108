//! Recent-repository fetcher for the GitHub API.
//!
//! One outbound `GET /users/{username}/repos` per page render, sorted by
//! last update and capped to [`RECENT_REPO_COUNT`] entries. Upstream
//! rejection and transport failures are normalized into an empty list so
//! the page shell always renders; they never reach the caller as errors.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, header::CACHE_CONTROL};
use serde::Deserialize;

/// Number of repository cards shown on the page.
pub const RECENT_REPO_COUNT: usize = 3;

/// Freshness window forwarded to caching intermediaries, in seconds (4 hours).
pub const REVALIDATE_SECS: u64 = 4 * 60 * 60;

/// Read-only projection of one upstream repository record.
///
/// Fields are exactly as returned by the API; extra upstream fields are
/// ignored and nothing is computed or mutated after the fetch.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub language: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecentRepos: Send + Sync {
    /// The account's most recently updated repositories, newest first,
    /// truncated to at most [`RECENT_REPO_COUNT`] entries.
    ///
    /// An unconfigured account, a non-success status and a transport
    /// failure all come back as `Ok` with an empty list. The only `Err`
    /// is a success response whose body does not parse.
    async fn recent_repos(&self) -> Result<Vec<RepoSummary>>;
}

/// GitHub-backed [`RecentRepos`] implementation.
pub struct GitHubClient {
    client: Client,
    api_url: String,
    username: Option<String>,
}

impl GitHubClient {
    /// Create a fetcher for the given account. An empty username is
    /// treated the same as an absent one.
    pub fn new(client: Client, api_url: impl Into<String>, username: Option<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            username: username.filter(|u| !u.is_empty()),
        }
    }
}

#[async_trait]
impl RecentRepos for GitHubClient {
    #[tracing::instrument(skip(self))]
    async fn recent_repos(&self) -> Result<Vec<RepoSummary>> {
        let Some(username) = self.username.as_deref() else {
            debug!("No username configured, skipping repository fetch");
            return Ok(Vec::new());
        };

        let url = format!("{}/users/{}/repos", self.api_url, username);
        debug!("Fetching recent repositories from {}...", url);

        let per_page = RECENT_REPO_COUNT.to_string();
        let result = self
            .client
            .get(&url)
            .query(&[("sort", "updated"), ("per_page", per_page.as_str())])
            .header(CACHE_CONTROL, format!("max-age={}", REVALIDATE_SECS))
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!("GitHub API unreachable: {}", e);
                return Ok(Vec::new());
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("GitHub API request to {} failed with status {}", url, status);
            return Ok(Vec::new());
        }

        let mut repos: Vec<RepoSummary> = response
            .json()
            .await
            .context("Failed to parse JSON response from GitHub API")?;
        repos.truncate(RECENT_REPO_COUNT);

        debug!("Fetched {} recent repositories", repos.len());
        Ok(repos)
    }
}
