//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;
use fibengine_core::{Algorithm, FibError};

/// FibEngine: exact Fibonacci numbers through a single-holder device.
#[derive(Parser, Debug)]
#[command(name = "fibengine", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Fibonacci index to compute.
    #[arg(short = 'n', long, default_value = "1000", env = "FIBENGINE_N")]
    pub index: u64,

    /// Algorithm to use: linear, fast, or all.
    #[arg(long, default_value = "fast")]
    pub algo: String,

    /// Verbose output (print every digit).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Number of concurrent clients contending for the device.
    #[arg(long, default_value = "1")]
    pub clients: usize,

    /// Clients wait for the device instead of failing when it is busy.
    #[arg(long)]
    pub wait: bool,

    /// Cross-check every result against num-bigint.
    #[arg(long)]
    pub verify: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Resolve `--algo` into the algorithms to run.
    pub fn algorithms(&self) -> Result<Vec<Algorithm>, FibError> {
        if self.algo.eq_ignore_ascii_case("all") {
            Ok(Algorithm::ALL.to_vec())
        } else {
            Ok(vec![self.algo.parse()?])
        }
    }
}
