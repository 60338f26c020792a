//! Batch Worker - a polling background worker with graceful shutdown
//!
//! The crate provides a small worker runtime in two modes:
//! - **worker mode**: poll a [`WorkSource`] for batches of [`WorkItem`]s,
//!   process each in order through a [`WorkProcessor`], and stop cleanly
//!   when a termination signal arrives (the in-flight item finishes, the
//!   rest of the batch is left unclaimed)
//! - **cron mode**: run the loop body exactly once and exit non-zero if
//!   the task fails
//!
//! Sources and processors are trait seams; [`MemorySource`] and
//! [`LogProcessor`] are the built-in implementations used by the CLI and
//! by tests.

pub mod cron;
pub mod error;
pub mod memory;
pub mod work;
pub mod worker;

pub use cron::run_scheduled;
pub use error::{Result, WorkerError};
pub use memory::MemorySource;
pub use work::{WorkItem, WorkProcessor, WorkSource};
pub use worker::{
    setup_signal_handler, LogProcessor, ShutdownHandle, WorkRunner, WorkerConfig,
    WorkerConfigBuilder, WorkerState,
};
