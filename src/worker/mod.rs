//! Worker runtime
//!
//! This module provides:
//! - WorkRunner: Main worker loop that polls a source for pending items
//! - ShutdownHandle: Signals a graceful shutdown to a running loop
//! - LogProcessor: Default processor that logs each item
//! - WorkerConfig: Configuration for the worker

pub mod config;
pub mod processor;
pub mod runner;
pub mod state;

pub use config::{WorkerConfig, WorkerConfigBuilder};
pub use processor::LogProcessor;
pub use runner::{setup_signal_handler, ShutdownHandle, WorkRunner};
pub use state::WorkerState;
