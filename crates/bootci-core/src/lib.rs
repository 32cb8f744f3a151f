//! Core types for bootstrap confidence interval estimation
//!
//! This crate provides the shared foundation used by the statistic and
//! confidence crates:
//!
//! - **Errors**: one [`Error`] enum and [`Result`] alias for every crate
//! - **Math**: standard normal CDF and quantile function
//! - **Execution**: sequential and rayon-backed engines for batch work
//! - **Workspace**: reusable index/value buffers for resampling
//! - **Cancellation**: a shared flag polled by long-running loops
//!
//! # Example
//!
//! ```rust
//! use bootci_core::execution::{sequential, ExecutionEngine};
//!
//! let engine = sequential();
//! let doubled = engine.execute_batch(4, |i| i * 2);
//! assert_eq!(doubled, vec![0, 2, 4, 6]);
//! ```

pub mod cancel;
pub mod error;
pub mod execution;
pub mod math;
pub mod workspace;

pub use cancel::CancellationToken;
pub use error::{check_finite, check_open_unit, Error, Result};
pub use execution::{auto_engine, sequential, AutoEngine, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};
pub use workspace::ResampleWorkspace;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{CancellationToken, ExecutionEngine, Result, SequentialEngine};
}
