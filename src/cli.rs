use clap::Parser;
use cve_info_fetcher::config::CliOverrides;
use std::path::PathBuf;

/// Enrich a CSV list of CVE IDs with details from a vulnerability lookup service
#[derive(Parser, Debug)]
#[command(name = "cve-info-fetcher")]
#[command(version)]
#[command(
    about = "Enrich a CSV list of CVE IDs with details from a vulnerability lookup service",
    long_about = "Reads CVE IDs from the first column of INPUT, looks each one up and writes \
                  Output_<YYYYMMDD_HHMMSS>.csv with the original columns plus Title, \
                  Description, CVSS Score, Exploit Available, CWE and References.\n\n\
                  Press Ctrl-C once to stop after the current lookup; the rows processed \
                  so far are still written."
)]
pub struct Args {
    /// CSV file whose first column holds CVE IDs (the first row is the header)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for the output file (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to a config file (defaults to ./cve-fetcher.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base URL of the lookup service
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Minimum delay between two lookups, in milliseconds
    #[arg(long, value_name = "N")]
    pub pacing_ms: Option<u64>,

    /// Per-request timeout, in seconds
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Attempts per lookup before giving up
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Values that take precedence over the config file
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_url: self.api_url.clone(),
            timeout_secs: self.timeout_secs,
            max_attempts: self.max_attempts,
            pacing_ms: self.pacing_ms,
            output_dir: self.output_dir.clone(),
        }
    }
}
