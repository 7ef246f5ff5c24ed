use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "release-scout")]
#[command(version, about = "Report the newest release on each minor-version branch")]
struct Cli {
    /// Repository list file with one `owner/repo,min-version` entry per line
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Report lines go to stdout, so logging stays on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(release_scout::cli::runner::run(&cli.file))
}
