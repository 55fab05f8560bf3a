mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;
use tracing_subscriber::EnvFilter;

use crate::core::error::SniffError;

pub fn run() -> Result<(), SniffError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Sniff(a) => handlers::sniff(&a),
        parse::Command::Labels(a) => handlers::labels(&a),
        parse::Command::Columns(a) => handlers::columns(&a),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
