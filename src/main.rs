use anyhow::Result;
use clap::Parser;
use lyricproxy::config::{Cli, Command};
use lyricproxy::messages::LyricsRequest;
use lyricproxy::resolver::LyricsResolver;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _guard = lyricproxy::logging::init(&cli.config)?;

    let resolver = Arc::new(LyricsResolver::from_config(&cli.config)?);

    match cli.command.clone().unwrap_or(Command::Serve) {
        Command::Serve => {
            lyricproxy::server::serve(&cli.config, resolver).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Lookup { artist, title } => {
            let request = LyricsRequest { artist, title };
            lyricproxy::lookup::run_lookup(resolver, request, &mut std::io::stdout()).await
        }
    }
}
