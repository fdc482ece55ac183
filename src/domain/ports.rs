use crate::domain::model::PrimeRun;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn thread_count(&self) -> usize;
    fn bounds(&self) -> &[u64];
    fn output_path(&self) -> &str;
    fn primes_file(&self) -> &str;
    fn report_file(&self) -> Option<&str>;
    fn monitoring_enabled(&self) -> bool;
}

/// Anything that can perform one timed prime search over `[0, bound]`.
#[async_trait]
pub trait PrimeSearch: Send + Sync {
    async fn run(&self, thread_count: usize, bound: u64) -> Result<PrimeRun>;
}
