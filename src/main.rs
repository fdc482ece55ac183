use clap::Parser;
use prime_bench::core::bench::run_configured;
use prime_bench::core::ConfigProvider;
use prime_bench::utils::error::ErrorSeverity;
use prime_bench::utils::{logger, validation::Validate};
use prime_bench::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting prime-bench");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.monitoring_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    match run_configured("prime-bench", &config).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Benchmark finished: {} bound(s) on {} hardware threads",
                summary.reports.len(),
                summary.host_parallelism
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Benchmark failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
