use crate::utils::error::{BenchError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(BenchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Shared checks for anything that describes a benchmark run.
pub fn validate_bench_settings(thread_count: usize, bounds: &[u64]) -> Result<()> {
    validate_range("threads", thread_count, 1, MAX_THREADS)?;

    if bounds.is_empty() {
        return Err(BenchError::MissingConfigError {
            field: "bounds".to_string(),
        });
    }
    for &bound in bounds {
        // 上限 1 以下不會有質數, 但仍是合法的執行
        validate_range("bounds", bound, 0, MAX_BOUND)?;
    }
    Ok(())
}

/// Beyond this many OS threads the per-thread stack reservations dominate.
pub const MAX_THREADS: usize = 4096;

/// Trial division past this bound takes hours per run.
pub const MAX_BOUND: u64 = 1 << 40;
