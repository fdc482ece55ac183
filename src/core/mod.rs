pub mod bench;
pub mod coordinator;
pub mod partition;
pub mod primality;
pub mod speedup;

pub use crate::domain::model::{
    BenchSummary, PersistOutcome, PrimeList, PrimeRun, SpeedupReport,
};
pub use crate::domain::ports::{ConfigProvider, PrimeSearch, Storage};
pub use crate::utils::error::Result;
