mod cli;
mod convert;
mod parse;
mod render;
mod types;

use clap::Parser;
use cli::Cli;
use convert::Outcome;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const EXIT_FAILURE: i32 = 1;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout only carries the completion message
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(std::io::stderr)
        .init();
    debug!("Arguments: {:?}", cli);

    match convert::convert(&cli.source, &cli.destination) {
        Ok(Outcome::Written { files, violations }) => {
            info!("Found {} violations in {} files", violations, files);
        }
        Ok(Outcome::Clean) => {}
        Err(e) => {
            error!("Conversion failed: {:#}", e);
            std::process::exit(EXIT_FAILURE);
        }
    }

    println!("Conversion done");
}
