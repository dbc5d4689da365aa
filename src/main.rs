mod cli;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Logs go to stderr so `--json` output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stmtlens=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.len() {
        2.. => cli::as_cli(&args),
        _ => {
            cli::print_usage();
            Ok(())
        }
    }
}
