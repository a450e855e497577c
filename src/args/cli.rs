use clap::Parser;
use std::time::Duration;

use super::parsers::{parse_duration_arg, parse_positive_u64, parse_positive_usize};
use super::types::{OutputFormat, PositiveU64, PositiveUsize, RemainderPolicy};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP GET load generator: a fixed request budget spread over parallel workers, reported as status counts, latency percentiles and throughput."
)]
pub struct LoadArgs {
    /// Target URL for the load test
    #[arg(long, short)]
    pub url: Option<String>,

    /// Total number of GET requests to issue
    #[arg(long, short = 'n', value_parser = parse_positive_u64)]
    pub requests: Option<PositiveU64>,

    /// Number of parallel workers
    #[arg(long, short = 'c', default_value = "1", value_parser = parse_positive_usize)]
    pub concurrency: PositiveUsize,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        short = 't',
        default_value = "10s",
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// What to do with requests left over when --requests is not divisible by --concurrency
    #[arg(long, value_enum, default_value = "drop", ignore_case = true)]
    pub remainder: RemainderPolicy,

    /// Report format printed to stdout
    #[arg(long = "output-format", value_enum, default_value = "text", ignore_case = true)]
    pub output_format: OutputFormat,

    /// Path to config file (TOML/JSON). Defaults to ./volley.toml or ./volley.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by VOLLEY_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
