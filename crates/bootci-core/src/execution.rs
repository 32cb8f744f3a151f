//! Execution engines for controlling computation strategy
//!
//! Resample and jackknife iterations are independent reads of the sample, so
//! they are dispatched as batches through an engine. The engine decides
//! whether the batch runs on the current thread or on a rayon pool; callers
//! always get results back in index order.

#[cfg(feature = "parallel")]
use crate::{Error, Result};

/// Execution strategy for batch operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Process items sequentially
    Sequential,
    /// Process items in parallel
    Parallel,
}

/// Trait for execution engines that control how batches are performed
pub trait ExecutionEngine: Clone + Send + Sync {
    /// Execute `f` for every index in `0..count`, returning results in index order
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send;

    /// Get the execution strategy
    fn strategy(&self) -> ExecutionStrategy;

    /// Check if parallel execution is available
    fn is_parallel(&self) -> bool {
        matches!(self.strategy(), ExecutionStrategy::Parallel)
    }

    /// Get the number of threads available
    fn num_threads(&self) -> usize;
}

/// Sequential execution engine
///
/// Executes all operations sequentially in the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEngine;

impl SequentialEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutionEngine for SequentialEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        (0..count).map(f).collect()
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Parallel execution engine using Rayon
///
/// Executes batches on rayon's global pool unless a dedicated pool is given.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug, Default)]
pub struct ParallelEngine {
    thread_pool: Option<std::sync::Arc<rayon::ThreadPool>>,
}

#[cfg(feature = "parallel")]
impl ParallelEngine {
    /// Create a new parallel engine with the global thread pool
    pub fn new() -> Self {
        Self { thread_pool: None }
    }

    /// Create a new parallel engine with a custom thread pool
    pub fn with_thread_pool(pool: std::sync::Arc<rayon::ThreadPool>) -> Self {
        Self {
            thread_pool: Some(pool),
        }
    }

    /// Create a parallel engine backed by a dedicated pool of `num_threads` workers
    pub fn with_threads(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| Error::Execution(format!("Failed to build thread pool: {e}")))?;
        Ok(Self::with_thread_pool(std::sync::Arc::new(pool)))
    }
}

#[cfg(feature = "parallel")]
impl ExecutionEngine for ParallelEngine {
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        let run = || (0..count).into_par_iter().map(&f).collect::<Vec<R>>();
        match &self.thread_pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        match &self.thread_pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

/// Engine chosen at compile time: parallel when the `parallel` feature is on
#[cfg(feature = "parallel")]
pub type AutoEngine = ParallelEngine;

/// Engine chosen at compile time: parallel when the `parallel` feature is on
#[cfg(not(feature = "parallel"))]
pub type AutoEngine = SequentialEngine;

/// Create a sequential engine
pub fn sequential() -> SequentialEngine {
    SequentialEngine::new()
}

/// Create a parallel engine on rayon's global pool
#[cfg(feature = "parallel")]
pub fn parallel() -> ParallelEngine {
    ParallelEngine::new()
}

/// Best available engine for this build
pub fn auto_engine() -> AutoEngine {
    // Hardware threads only matter for the parallel engine; log them once here
    tracing::trace!(cpus = num_cpus::get(), "selecting execution engine");
    AutoEngine::default()
}
