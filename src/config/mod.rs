pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::bench::host_parallelism;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// Default bounds: one and ten million.
pub const DEFAULT_BOUNDS: [u64; 2] = [1_000_000, 10_000_000];
pub const DEFAULT_PRIMES_FILE: &str = "primes.txt";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "prime-bench")]
#[command(about = "Measures the speedup of a multithreaded trial-division prime search")]
pub struct CliConfig {
    /// Worker threads for the parallel run (defaults to available parallelism)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Upper bounds to benchmark, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_BOUNDS)]
    pub bounds: Vec<u64>,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_PRIMES_FILE)]
    pub primes_file: String,

    /// Also write a JSON summary with this file name
    #[arg(long)]
    pub report: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage between runs")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(host_parallelism)
    }

    fn bounds(&self) -> &[u64] {
        &self.bounds
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn primes_file(&self) -> &str {
        &self.primes_file
    }

    fn report_file(&self) -> Option<&str> {
        self.report.as_deref()
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_path("primes_file", &self.primes_file)?;
        if let Some(report) = &self.report {
            validation::validate_path("report", report)?;
        }
        validation::validate_bench_settings(self.thread_count(), &self.bounds)
    }
}
