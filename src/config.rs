use crate::api::{ovh, textise};
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    name = "lyricproxy",
    version,
    about = "Best-effort lyrics lookup over HTTP (lyrics.ovh first, search scrape second)"
)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Resolve a single song and print the JSON response
    Lookup {
        #[arg(long)]
        artist: Option<String>,
        #[arg(long)]
        title: Option<String>,
    },
}

/// Runtime settings; every flag can also come from the environment
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "LYRICPROXY_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Timeout for each outbound request, in seconds
    #[arg(
        long,
        env = "LYRICPROXY_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..=120)
    )]
    pub timeout_secs: u64,

    /// Base URL of the lyrics.ovh API
    #[arg(long, env = "LYRICPROXY_PRIMARY_URL", default_value = ovh::DEFAULT_BASE_URL)]
    pub primary_url: String,

    /// Text-rendering proxy used for the fallback search
    #[arg(long, env = "LYRICPROXY_PROXY_URL", default_value = textise::DEFAULT_PROXY_URL)]
    pub proxy_url: String,

    /// Search engine wrapped by the proxy
    #[arg(long, env = "LYRICPROXY_SEARCH_URL", default_value = textise::DEFAULT_SEARCH_URL)]
    pub search_url: String,

    /// Write logs to `lyricproxy.log` in this directory instead of stderr
    #[arg(long, env = "LYRICPROXY_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Write logs under the user data directory instead of stderr
    #[arg(long, env = "LYRICPROXY_LOG_TO_FILE")]
    pub log_to_file: bool,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
