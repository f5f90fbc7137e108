//! Runtime configuration and HTTP client construction.
//!
//! Everything the fetch and render paths need is carried in an explicit
//! [`Config`] object; nothing below `main` reads process-wide environment
//! state directly.

use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use std::net::SocketAddr;

/// Default GitHub API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Runtime configuration for the page service.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub account whose repositories are shown. `None` disables the fetch.
    pub username: Option<String>,
    /// Optional API credential, attached as `Authorization: token <value>`.
    pub token: Option<String>,
    /// GitHub API base URL.
    pub api_url: String,
    /// Public URL of the deployed page, encoded into the QR code.
    pub public_url: String,
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Assemble a configuration, normalizing empty strings to absent values.
    pub fn new(
        username: Option<String>,
        token: Option<String>,
        api_url: Option<String>,
        public_url: String,
        bind_addr: SocketAddr,
    ) -> Self {
        let username = username.filter(|u| !u.is_empty());
        let token = token.filter(|t| !t.is_empty());

        debug!("Configured username: {:?}", username);
        debug!("Credential configured: {}", token.is_some());

        Self {
            username,
            token,
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            public_url,
            bind_addr,
        }
    }
}

/// Build an HTTP client with optional authentication token
pub fn build_http_client(token: Option<&str>) -> Result<Client> {
    let mut headers = HeaderMap::new();

    if let Some(token) = token {
        let mut auth_value = HeaderValue::from_str(&format!("token {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("HTTP client configured with authentication");
    }

    let client = Client::builder()
        .user_agent("devlink")
        .default_headers(headers)
        .build()?;

    Ok(client)
}
