use crate::config::{DEFAULT_BOUNDS, DEFAULT_PRIMES_FILE};
use crate::core::bench::host_parallelism;
use crate::core::ConfigProvider;
use crate::utils::error::{BenchError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub benchmark: BenchmarkConfig,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,

    #[serde(skip)]
    resolved_threads: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    pub name: String,
    pub description: Option<String>,
    /// Omitted means "use every hardware thread".
    pub threads: Option<usize>,
    pub bounds: Option<Vec<u64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: String,
    pub primes_file: Option<String>,
    pub report_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub json_logs: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BenchError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let mut config: TomlConfig =
            toml::from_str(&processed_content).map_err(|e| BenchError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        config.resolved_threads = config.benchmark.threads.unwrap_or_else(host_parallelism);
        Ok(config)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BenchError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("benchmark.name", &self.benchmark.name)?;
        validation::validate_path("output.directory", &self.output.directory)?;
        validation::validate_path("output.primes_file", self.primes_file())?;
        if let Some(report) = &self.output.report_file {
            validation::validate_path("output.report_file", report)?;
        }
        if let Some(threads) = self.benchmark.threads {
            validation::validate_positive_number("benchmark.threads", threads, 1)?;
        }
        validation::validate_bench_settings(self.resolved_threads, self.bounds())
    }

    pub fn name(&self) -> &str {
        &self.benchmark.name
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }

    pub fn set_threads(&mut self, threads: usize) {
        self.benchmark.threads = Some(threads);
        self.resolved_threads = threads;
    }
}

impl ConfigProvider for TomlConfig {
    fn thread_count(&self) -> usize {
        self.resolved_threads
    }

    fn bounds(&self) -> &[u64] {
        self.benchmark.bounds.as_deref().unwrap_or(&DEFAULT_BOUNDS)
    }

    fn output_path(&self) -> &str {
        &self.output.directory
    }

    fn primes_file(&self) -> &str {
        self.output
            .primes_file
            .as_deref()
            .unwrap_or(DEFAULT_PRIMES_FILE)
    }

    fn report_file(&self) -> Option<&str> {
        self.output.report_file.as_deref()
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[benchmark]
name = "sweep"
threads = 4
bounds = [10000, 100000]

[output]
directory = "./bench-output"
report_file = "summary.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.name(), "sweep");
        assert_eq!(config.thread_count(), 4);
        assert_eq!(config.bounds(), &[10_000, 100_000]);
        assert_eq!(config.primes_file(), "primes.txt");
        assert_eq!(config.report_file(), Some("summary.json"));
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_threads_default_to_host_parallelism() {
        let toml_content = r#"
[benchmark]
name = "auto"
bounds = [1000]

[output]
directory = "."
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.thread_count(), host_parallelism());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PRIME_BENCH_TEST_DIR", "/tmp/prime-bench");

        let toml_content = r#"
[benchmark]
name = "env"
bounds = [1000]

[output]
directory = "${PRIME_BENCH_TEST_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "/tmp/prime-bench");

        std::env::remove_var("PRIME_BENCH_TEST_DIR");
    }

    #[test]
    fn test_missing_bounds_use_defaults() {
        let toml_content = r#"
[benchmark]
name = "no-bounds"

[output]
directory = "."
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.bounds(), &[1_000_000, 10_000_000]);
    }

    #[test]
    fn test_empty_bounds_fail_validation() {
        let toml_content = r#"
[benchmark]
name = "empty-bounds"
bounds = []

[output]
directory = "."
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(BenchError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_zero_threads_fails_validation() {
        let toml_content = r#"
[benchmark]
name = "zero"
threads = 0
bounds = [1000]

[output]
directory = "."
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[benchmark\nname = ");
        assert!(matches!(
            result,
            Err(BenchError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[benchmark]
name = "file-test"
bounds = [500]

[output]
directory = "./output"

[monitoring]
enabled = true
json_logs = true
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.name(), "file-test");
        assert!(config.monitoring_enabled());
        assert!(config.json_logs());
    }
}
