use anyhow::Result;
use clap::Parser;
use devlink::config::Config;
use std::net::SocketAddr;

/// devlink - personal link-in-bio page
///
/// Serves a single profile page with social links, a three-state theme
/// toggle, a QR code for the page's own URL and the account's three most
/// recently updated GitHub repositories.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for
/// authentication. This is useful for avoiding anonymous rate limits.
#[derive(Parser, Debug)]
#[command(author, version = env!("DEVLINK_VERSION"), about)]
struct Cli {
    /// GitHub account whose repositories are shown (also via GITHUB_USERNAME)
    #[arg(long, env = "GITHUB_USERNAME", value_name = "USERNAME")]
    username: Option<String>,

    /// GitHub API token (also via GITHUB_TOKEN)
    #[arg(long, env = "GITHUB_TOKEN", value_name = "TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,

    /// Public URL of the deployed page, encoded into the QR code
    #[arg(
        long = "public-url",
        env = "DEVLINK_PUBLIC_URL",
        value_name = "URL",
        default_value = "http://localhost:3000"
    )]
    public_url: String,

    /// Address to listen on
    #[arg(
        long,
        env = "DEVLINK_BIND",
        value_name = "ADDR",
        default_value = "127.0.0.1:3000"
    )]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = Config::new(
        cli.username,
        cli.token,
        cli.api_url,
        cli.public_url,
        cli.bind,
    );

    devlink::server::run(config).await
}
