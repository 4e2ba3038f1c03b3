// fticon - SharePoint item-type icon resolution
// Command-line front end; logging goes to stderr, results to stdout.

use std::process;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
const LOG_ENV_VAR_NAME: &str = "FTICON_LOG";

fn main() {
    let filter = EnvFilter::try_from_env (LOG_ENV_VAR_NAME)
        .unwrap_or_else (|_| EnvFilter::new ("warn"));

    tracing_subscriber::fmt()
        .with_env_filter (filter)
        .with_writer (std::io::stderr)
        .init();

    if let Err(e) = fticon::run() {
        eprintln!("{}", e);
        process::exit(1);
    }
}
