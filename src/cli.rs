use clap::Parser;
use std::path::PathBuf;

// Display order for log level option (placed at end of help text)
const LOG_LEVEL_DISPLAY_ORDER: usize = 100;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "junit-conversor", version, about = "Convert flake8 output into a JUnit XML report", long_about = None)]
pub struct Cli {
    /// Log level (see https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html)
    /// [env: JUNIT_CONVERSOR_LOG=] [default: info]
    #[arg(
        long,
        env = "JUNIT_CONVERSOR_LOG",
        default_value = "info",
        hide_default_value = true,
        hide_env = true,
        display_order = LOG_LEVEL_DISPLAY_ORDER,
        verbatim_doc_comment
    )]
    pub log_level: String,

    /// flake8 output file (`-` for stdin)
    pub source: String,

    /// JUnit XML report path (not created when there are no violations)
    pub destination: PathBuf,
}
