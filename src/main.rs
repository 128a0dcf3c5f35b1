//! `cardreset` - reset the work-in-progress fields of every card.
//!
//! Reads `SUPABASE_URL` and `SUPABASE_ANON_KEY` from the environment or a
//! `.env` file and issues one bulk update against the `cards` table.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cardreset::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let exit_code = cardreset::runner::execute(cli).await?;
    std::process::exit(exit_code);
}

/// `RUST_LOG` when set and valid, `warn` otherwise.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}
