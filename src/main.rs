use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use toolview::interactive::InteractiveViewer;
use toolview::load_transcript;

#[derive(Parser)]
#[command(
    name = "toolview",
    version,
    about = "Terminal viewer for tool calls and results in chat transcript JSONL files",
    long_about = None
)]
struct Cli {
    /// Path to a chat transcript (one JSON message per line)
    transcript: PathBuf,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let messages = load_transcript(&cli.transcript)?;
    tracing::info!(count = messages.len(), "transcript loaded");

    let mut viewer = InteractiveViewer::new(messages);
    viewer.run()
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "toolview=debug"
    } else {
        "toolview=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
