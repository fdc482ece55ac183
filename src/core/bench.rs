use crate::adapters::storage::LocalStorage;
use crate::core::coordinator::RunCoordinator;
use crate::core::speedup::SpeedupEstimator;
use crate::domain::model::{BenchSummary, SpeedupReport};
use crate::domain::ports::{ConfigProvider, PrimeSearch, Storage};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use chrono::Utc;

/// Runs the speedup estimate for every configured bound.
pub struct BenchEngine<R: PrimeSearch> {
    name: String,
    estimator: SpeedupEstimator<R>,
    thread_count: usize,
    bounds: Vec<u64>,
    monitor: SystemMonitor,
}

impl<R: PrimeSearch> BenchEngine<R> {
    pub fn new(name: impl Into<String>, search: R, thread_count: usize, bounds: Vec<u64>) -> Self {
        Self::new_with_monitoring(name, search, thread_count, bounds, false)
    }

    pub fn new_with_monitoring(
        name: impl Into<String>,
        search: R,
        thread_count: usize,
        bounds: Vec<u64>,
        monitor_enabled: bool,
    ) -> Self {
        Self {
            name: name.into(),
            estimator: SpeedupEstimator::new(search),
            thread_count,
            bounds,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<BenchSummary> {
        tracing::info!(
            "🚀 Starting benchmark '{}' with {} workers over {} bound(s)",
            self.name,
            self.thread_count,
            self.bounds.len()
        );
        let started_at = Utc::now();
        self.monitor.log_stats("Start");

        let mut reports: Vec<SpeedupReport> = Vec::with_capacity(self.bounds.len());
        for &bound in &self.bounds {
            let report = self.estimator.estimate(self.thread_count, bound).await?;
            println!(
                "Multithreading speedup for {}: {}%",
                bound, report.speedup_percent
            );
            tracing::info!(
                "✅ bound={} primes={} single={}us multi={}us speedup={:.2}%",
                report.bound,
                report.prime_count,
                report.single_elapsed_us,
                report.multi_elapsed_us,
                report.speedup_percent
            );
            self.monitor.log_stats(&format!("Bound {}", bound));
            reports.push(report);
        }

        self.monitor.log_final_stats();

        Ok(BenchSummary {
            name: self.name.clone(),
            started_at,
            host_parallelism: host_parallelism(),
            reports,
        })
    }
}

/// Wires local storage, the coordinator and the engine from a config, then runs.
///
/// The JSON summary is written when the config names a report file; like the
/// primes file, a failed write is logged and does not fail the benchmark.
pub async fn run_configured<C: ConfigProvider>(name: &str, config: &C) -> Result<BenchSummary> {
    let storage = LocalStorage::new(config.output_path());
    let coordinator = RunCoordinator::new(storage.clone(), config.primes_file());
    let engine = BenchEngine::new_with_monitoring(
        name,
        coordinator,
        config.thread_count(),
        config.bounds().to_vec(),
        config.monitoring_enabled(),
    );

    let summary = engine.run().await?;

    if let Some(report_file) = config.report_file() {
        match write_summary(&storage, report_file, &summary).await {
            Ok(path) => tracing::info!("📁 Summary saved to: {}", path),
            Err(e) => {
                tracing::error!("❌ Could not write summary '{}': {}", report_file, e);
                eprintln!("❌ {}", e.user_friendly_message());
            }
        }
    }

    Ok(summary)
}

/// Writes the summary as pretty JSON and returns the written path.
pub async fn write_summary<S: Storage>(
    storage: &S,
    file_name: &str,
    summary: &BenchSummary,
) -> Result<String> {
    let json = serde_json::to_vec_pretty(summary)?;
    storage.write_file(file_name, &json).await
}

/// Hardware threads available to this process; 1 when unknown.
pub fn host_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
