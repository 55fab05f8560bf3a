use std::error::Error;

use tracing::error;

fn main() {
    ascii_sniff::cli::init_tracing();

    if let Err(err) = ascii_sniff::cli::run() {
        error!(error = %err, "command failed");
        if let Some(cause) = err.source() {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}
