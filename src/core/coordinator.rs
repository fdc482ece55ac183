use crate::core::partition::find_primes_in_stride;
use crate::domain::model::{PersistOutcome, PrimeList, PrimeRun};
use crate::domain::ports::{PrimeSearch, Storage};
use crate::utils::error::{BenchError, Result};
use async_trait::async_trait;
use std::any::Any;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Searches `[0, bound]` with `thread_count` OS threads.
///
/// Worker `i` scans residue class `i mod thread_count` into its own vector.
/// The vectors are merged in worker order once every thread has been joined;
/// the returned duration covers spawn through the last join.
pub fn search_primes(thread_count: usize, bound: u64) -> Result<(PrimeList, Duration)> {
    search_primes_with(thread_count, bound, find_primes_in_stride)
}

/// Worker pass: `(start, bound, stride)` to the primes of that residue class.
type WorkerFn = fn(u64, u64, u64) -> Vec<u64>;

fn search_primes_with(
    thread_count: usize,
    bound: u64,
    worker_fn: WorkerFn,
) -> Result<(PrimeList, Duration)> {
    if thread_count == 0 {
        return Err(BenchError::InvalidConfigValueError {
            field: "threads".to_string(),
            value: thread_count.to_string(),
            reason: "At least one worker is required".to_string(),
        });
    }

    let stride = thread_count as u64;
    let begin = Instant::now();

    let mut handles: Vec<JoinHandle<Vec<u64>>> = Vec::with_capacity(thread_count);
    for worker in 0..thread_count {
        let spawned = thread::Builder::new()
            .name(format!("prime-worker-{}", worker))
            .spawn(move || worker_fn(worker as u64, bound, stride));

        match spawned {
            Ok(handle) => handles.push(handle),
            Err(e) => {
                // 已啟動的 worker 必須先收回, 不可留下孤兒執行緒
                for handle in handles {
                    let _ = handle.join();
                }
                return Err(BenchError::WorkerError {
                    worker,
                    message: format!("failed to spawn thread: {}", e),
                });
            }
        }
    }

    let mut locals = Vec::with_capacity(thread_count);
    let mut failure = None;
    for (worker, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(local) => locals.push(local),
            Err(payload) => {
                failure.get_or_insert(BenchError::WorkerError {
                    worker,
                    message: panic_message(payload.as_ref()),
                });
            }
        }
    }
    let elapsed = begin.elapsed();

    if let Some(err) = failure {
        return Err(err);
    }

    let mut primes = PrimeList::new();
    for local in locals {
        primes.extend_from_worker(local);
    }

    tracing::debug!(
        "Found {} primes up to {} with {} workers in {:?}",
        primes.len(),
        bound,
        thread_count,
        elapsed
    );

    Ok((primes, elapsed))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panicked: {}", msg)
    } else {
        "panicked".to_string()
    }
}

/// Runs one search and writes its primes to a fixed file through `Storage`.
pub struct RunCoordinator<S: Storage> {
    storage: S,
    primes_file: String,
}

impl<S: Storage> RunCoordinator<S> {
    pub fn new(storage: S, primes_file: impl Into<String>) -> Self {
        Self {
            storage,
            primes_file: primes_file.into(),
        }
    }

    /// A failed write is reported and swallowed; the run itself still succeeds.
    async fn persist(&self, primes: &PrimeList) -> PersistOutcome {
        let data = primes.to_lines();
        match self.storage.write_file(&self.primes_file, data.as_bytes()).await {
            Ok(path) => {
                tracing::debug!("Wrote {} primes to {}", primes.len(), path);
                println!("Primes saved to '{}'.", path);
                PersistOutcome::Written { path }
            }
            Err(e) => {
                tracing::error!("❌ Could not write '{}': {}", self.primes_file, e);
                eprintln!("Error: unable to open '{}': {}", self.primes_file, e);
                PersistOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[async_trait]
impl<S: Storage> PrimeSearch for RunCoordinator<S> {
    async fn run(&self, thread_count: usize, bound: u64) -> Result<PrimeRun> {
        tracing::debug!("Searching [0, {}] with {} workers", bound, thread_count);

        let (primes, elapsed) =
            tokio::task::spawn_blocking(move || search_primes(thread_count, bound)).await??;

        print!("{} microseconds\t", elapsed.as_micros());
        let persisted = self.persist(&primes).await;

        Ok(PrimeRun {
            thread_count,
            bound,
            primes,
            elapsed,
            persisted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn as_set(list: &PrimeList) -> BTreeSet<u64> {
        list.as_slice().iter().copied().collect()
    }

    #[test]
    fn test_bound_thirty_single_worker() {
        let (primes, _) = search_primes(1, 30).unwrap();
        assert_eq!(primes.as_slice(), &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_bound_one_is_empty() {
        for workers in 1..=8 {
            let (primes, _) = search_primes(workers, 1).unwrap();
            assert!(primes.is_empty(), "workers={}", workers);
        }
    }

    #[test]
    fn test_worker_count_does_not_change_result_set() {
        let (single, _) = search_primes(1, 5_000).unwrap();
        for workers in [2, 3, 4, 7, 16] {
            let (multi, _) = search_primes(workers, 5_000).unwrap();
            assert_eq!(multi.len(), single.len());
            assert_eq!(as_set(&multi), as_set(&single), "workers={}", workers);
        }
    }

    #[test]
    fn test_more_workers_than_numbers() {
        let (primes, _) = search_primes(12, 5).unwrap();
        assert_eq!(as_set(&primes), BTreeSet::from([2, 3, 5]));
    }

    #[test]
    fn test_zero_workers_rejected() {
        assert!(matches!(
            search_primes(0, 100),
            Err(BenchError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_repeated_searches_do_not_accumulate() {
        let (first, _) = search_primes(4, 100).unwrap();
        let (second, _) = search_primes(4, 100).unwrap();
        assert_eq!(first.len(), 25);
        assert_eq!(second.len(), 25);
    }

    static FINISHED_WORKERS: AtomicUsize = AtomicUsize::new(0);

    fn panics_on_worker_one(start: u64, bound: u64, stride: u64) -> Vec<u64> {
        if start == 1 {
            panic!("worker one gave up");
        }
        // 讓其他 worker 晚於 panic 結束, 確認仍會被 join
        std::thread::sleep(std::time::Duration::from_millis(20));
        let local = find_primes_in_stride(start, bound, stride);
        FINISHED_WORKERS.fetch_add(1, Ordering::SeqCst);
        local
    }

    #[test]
    fn test_worker_panic_is_returned_after_all_joins() {
        let result = search_primes_with(4, 100, panics_on_worker_one);

        match result {
            Err(BenchError::WorkerError { worker, message }) => {
                assert_eq!(worker, 1);
                assert!(message.contains("worker one gave up"), "{}", message);
            }
            other => panic!("expected a worker error, got {:?}", other.map(|(p, _)| p)),
        }
        assert_eq!(FINISHED_WORKERS.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_panic_message_formats_payload() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "panicked: boom");
        let payload: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(payload.as_ref()), "panicked");
    }
}
