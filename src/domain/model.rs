use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Primes gathered by one run, in merge order (not numeric order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeList {
    values: Vec<u64>,
}

impl PrimeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one worker's local results.
    pub fn extend_from_worker(&mut self, local: Vec<u64>) {
        if self.values.is_empty() {
            self.values = local;
        } else {
            self.values.extend(local);
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }

    /// One integer per line, each line terminated by `\n`.
    pub fn to_lines(&self) -> String {
        let mut out = String::with_capacity(self.values.len() * 8);
        for value in &self.values {
            out.push_str(&value.to_string());
            out.push('\n');
        }
        out
    }
}

impl From<Vec<u64>> for PrimeList {
    fn from(values: Vec<u64>) -> Self {
        Self { values }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    Written { path: String },
    Failed { reason: String },
}

impl PersistOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, PersistOutcome::Written { .. })
    }
}

/// Result of one coordinator invocation.
#[derive(Debug, Clone)]
pub struct PrimeRun {
    pub thread_count: usize,
    pub bound: u64,
    pub primes: PrimeList,
    /// Spawn-to-join span only.
    pub elapsed: Duration,
    pub persisted: PersistOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedupReport {
    pub bound: u64,
    pub thread_count: usize,
    pub single_elapsed_us: u128,
    pub multi_elapsed_us: u128,
    pub prime_count: usize,
    pub speedup_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchSummary {
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub host_parallelism: usize,
    pub reports: Vec<SpeedupReport>,
}
