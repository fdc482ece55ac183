pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{bench::BenchEngine, coordinator::RunCoordinator, speedup::SpeedupEstimator};
pub use crate::utils::error::{BenchError, Result};
