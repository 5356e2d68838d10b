//! Rayon thread pool sizing for the odds estimator.

use rayon::ThreadPoolBuilder;

/// How many worker threads run batches. `0` means Rayon's global pool (all cores).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerPool {
    pub workers: usize,
}

impl WorkerPool {
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Runs `f` on a pool of this size. Falls back to the global pool if a dedicated
    /// pool cannot be built.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if self.workers == 0 {
            return f();
        }
        match ThreadPoolBuilder::new().num_threads(self.workers).build() {
            Ok(pool) => pool.install(f),
            Err(err) => {
                tracing::warn!(%err, workers = self.workers, "thread pool unavailable, using global pool");
                f()
            }
        }
    }
}
