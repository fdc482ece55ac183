use anyhow::Context;
use clap::Parser;
use prime_bench::core::bench::run_configured;
use prime_bench::core::ConfigProvider;
use prime_bench::utils::{logger, validation::Validate};
use prime_bench::TomlConfig;

#[derive(Parser)]
#[command(name = "toml-bench")]
#[command(about = "Prime search speedup benchmark driven by a TOML file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "bench-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the worker count from the config
    #[arg(short, long)]
    threads: Option<usize>,

    /// Print the resolved plan without running it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    if config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based benchmark");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(threads) = args.threads {
        config.set_threads(threads);
        tracing::info!("🔧 Worker count overridden to: {}", threads);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if args.dry_run {
        println!("Benchmark: {}", config.name());
        println!("Workers:   {}", config.thread_count());
        println!("Bounds:    {:?}", config.bounds());
        println!(
            "Output:    {}/{}",
            config.output_path(),
            config.primes_file()
        );
        if let Some(report) = config.report_file() {
            println!("Report:    {}/{}", config.output_path(), report);
        }
        return Ok(());
    }

    let summary = run_configured(config.name(), &config).await?;
    tracing::info!(
        "✅ Benchmark '{}' finished with {} report(s)",
        summary.name,
        summary.reports.len()
    );

    Ok(())
}
