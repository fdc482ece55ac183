use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Blocking task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Worker {worker} failed: {message}")]
    WorkerError { worker: usize, message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Storage,
    Execution,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BenchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BenchError::ConfigValidationError { .. }
            | BenchError::InvalidConfigValueError { .. }
            | BenchError::MissingConfigError { .. } => ErrorCategory::Configuration,
            BenchError::IoError(_)
            | BenchError::SerializationError(_)
            | BenchError::StorageError { .. } => ErrorCategory::Storage,
            BenchError::WorkerError { .. } => ErrorCategory::Execution,
            BenchError::TaskError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 輸出檔寫入失敗不影響計算結果
            ErrorCategory::Storage => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Execution => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command line flags or the TOML configuration file"
            }
            ErrorCategory::Storage => {
                "Make sure the output directory exists and is writable"
            }
            ErrorCategory::Execution => {
                "Lower the thread count or the search bound and try again"
            }
            ErrorCategory::System => "The process ran out of resources; retry on a quieter host",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BenchError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            BenchError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
            BenchError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            BenchError::WorkerError { worker, .. } => {
                format!("Worker thread {} did not finish", worker)
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_are_low_severity() {
        let err = BenchError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_config_error_message() {
        let err = BenchError::InvalidConfigValueError {
            field: "threads".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.user_friendly_message(),
            "Invalid setting 'threads': Value must be at least 1"
        );
    }
}
