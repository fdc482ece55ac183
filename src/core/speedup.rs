use crate::domain::model::SpeedupReport;
use crate::domain::ports::PrimeSearch;
use crate::utils::error::Result;
use std::time::{Duration, Instant};

/// `(single - multi) / single * 100`.
///
/// Negative when the parallel run was slower. A zero `single` yields `0.0`.
pub fn speedup_percent(single: Duration, multi: Duration) -> f64 {
    let single = single.as_secs_f64();
    if single == 0.0 {
        return 0.0;
    }
    (single - multi.as_secs_f64()) / single * 100.0
}

/// Times a single-worker run against a multi-worker run of the same bound.
pub struct SpeedupEstimator<R: PrimeSearch> {
    search: R,
}

impl<R: PrimeSearch> SpeedupEstimator<R> {
    pub fn new(search: R) -> Self {
        Self { search }
    }

    pub fn search(&self) -> &R {
        &self.search
    }

    /// Each timing spans the whole invocation, persistence included.
    pub async fn estimate(&self, thread_count: usize, bound: u64) -> Result<SpeedupReport> {
        let begin_single = Instant::now();
        let single_run = self.search.run(1, bound).await?;
        let single_elapsed = begin_single.elapsed();

        let begin_multi = Instant::now();
        let multi_run = self.search.run(thread_count, bound).await?;
        let multi_elapsed = begin_multi.elapsed();

        if single_run.primes.len() != multi_run.primes.len() {
            tracing::warn!(
                "⚠️ Prime counts differ for bound {}: {} (1 worker) vs {} ({} workers)",
                bound,
                single_run.primes.len(),
                multi_run.primes.len(),
                thread_count
            );
        }

        let report = SpeedupReport {
            bound,
            thread_count,
            single_elapsed_us: single_elapsed.as_micros(),
            multi_elapsed_us: multi_elapsed.as_micros(),
            prime_count: multi_run.primes.len(),
            speedup_percent: speedup_percent(single_elapsed, multi_elapsed),
        };

        tracing::debug!("Speedup report: {:?}", report);
        Ok(report)
    }
}
