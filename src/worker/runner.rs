//! Work runner - main worker loop

use crate::error::{Result, WorkerError};
use crate::work::{WorkItem, WorkProcessor, WorkSource};
use crate::worker::{WorkerConfig, WorkerState};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{error, info};

/// Shutdown flag and lifecycle state shared between the loop and the
/// signal path. The flag has one writer (the signal path) and is only ever
/// set to true.
struct Shared {
    shutdown: AtomicBool,
    state: AtomicU8,
}

/// Handle for requesting a graceful shutdown from outside the loop
#[derive(Clone)]
pub struct ShutdownHandle {
    shared: Arc<Shared>,
}

impl ShutdownHandle {
    /// Request shutdown
    ///
    /// Idempotent: repeated calls have the same effect as one. The current
    /// item runs to completion; nothing new is started afterward.
    pub fn request_shutdown(&self) {
        self.shared.shutdown.store(true, Ordering::Relaxed);
        // Only a running worker moves to draining; a stopped one stays stopped.
        let _ = self.shared.state.compare_exchange(
            WorkerState::Running.as_u8(),
            WorkerState::Draining.as_u8(),
            Ordering::Relaxed,
            Ordering::Relaxed,
        );
    }

    /// Whether shutdown has been requested
    pub fn is_shutdown_requested(&self) -> bool {
        self.shared.shutdown.load(Ordering::Relaxed)
    }
}

/// Work runner that polls a source and processes items until shutdown
pub struct WorkRunner<S, P> {
    source: S,
    processor: P,
    config: WorkerConfig,
    shared: Arc<Shared>,
}

impl<S: WorkSource, P: WorkProcessor> WorkRunner<S, P> {
    /// Create a new work runner
    pub fn new(source: S, processor: P, config: WorkerConfig) -> Self {
        Self {
            source,
            processor,
            config,
            shared: Arc::new(Shared {
                shutdown: AtomicBool::new(false),
                state: AtomicU8::new(WorkerState::Running.as_u8()),
            }),
        }
    }

    /// Get a handle to signal shutdown
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Request shutdown directly; same effect as going through the handle
    pub fn request_shutdown(&self) {
        self.shutdown_handle().request_shutdown();
    }

    /// Current lifecycle state
    pub fn state(&self) -> WorkerState {
        WorkerState::from_u8(self.shared.state.load(Ordering::Relaxed))
    }

    fn shutdown_requested(&self) -> bool {
        self.shared.shutdown.load(Ordering::Relaxed)
    }

    /// Main worker loop
    ///
    /// Polls for work and processes it until shutdown is signaled. Fetch
    /// errors and item errors are logged and never end the loop; after an
    /// empty or failed cycle the loop waits one poll interval. Returns
    /// after a clean shutdown. If shutdown was already requested, returns
    /// immediately without fetching.
    pub async fn run(&self) -> Result<()> {
        info!("Worker started");
        info!("Poll interval: {:?}", self.config.poll_interval);
        info!("Task timeout: {:?}", self.config.task_timeout);
        info!("Batch size: {}", self.config.batch_size);

        loop {
            // Check for shutdown signal
            if self.shutdown_requested() {
                info!("Shutdown signal received, stopping worker...");
                break;
            }

            match self.source.fetch_batch().await {
                Ok(items) if items.is_empty() => {
                    info!(
                        "No pending work, sleeping for {:?}",
                        self.config.poll_interval
                    );
                    sleep(self.config.poll_interval).await;
                }
                Ok(items) => {
                    self.process_batch(items).await;
                }
                Err(e) => {
                    error!("Failed to fetch work items: {}", e);
                    // Wait before retrying after a failed cycle
                    sleep(self.config.poll_interval).await;
                }
            }
        }

        self.shared
            .state
            .store(WorkerState::Stopped.as_u8(), Ordering::Relaxed);
        info!("Worker shutdown complete");
        Ok(())
    }

    /// Process one fetched batch strictly in order
    ///
    /// Shutdown is checked before each item, not mid-item: an in-flight
    /// item always runs to completion, remaining items are left for the
    /// next run. A failed item is logged and the batch continues.
    async fn process_batch(&self, items: Vec<WorkItem>) {
        for item in items {
            if self.shutdown_requested() {
                info!("Shutdown requested, leaving remaining items unclaimed");
                break;
            }
            if let Err(e) = self.process_item(&item).await {
                error!("Work item {} failed: {}", item.id, e);
            }
        }
    }

    async fn process_item(&self, item: &WorkItem) -> Result<()> {
        info!("Processing work item: {}", item.id);

        // Process with timeout
        let result =
            tokio::time::timeout(self.config.task_timeout, self.processor.process(item)).await;

        match result {
            Ok(Ok(())) => {
                info!("Completed work item: {}", item.id);
                Ok(())
            }
            Ok(Err(e)) => Err(e),
            Err(_) => Err(WorkerError::TaskTimeout),
        }
    }

    /// Run the loop body exactly once (cron / --once mode)
    ///
    /// Fetches a single batch and processes every item in order. Returns
    /// the number of items handled. Unlike `run`, the first fetch or item
    /// error is fatal to the run so one-shot mode can exit non-zero.
    pub async fn run_once(&self) -> Result<usize> {
        let items = self.source.fetch_batch().await?;
        if items.is_empty() {
            info!("No pending work items");
            return Ok(0);
        }

        let mut processed = 0;
        for item in items {
            self.process_item(&item).await?;
            processed += 1;
        }
        Ok(processed)
    }
}

/// Setup signal handlers for graceful shutdown
///
/// SIGINT and SIGTERM both request shutdown; off Unix only Ctrl+C is wired.
pub fn setup_signal_handler(handle: ShutdownHandle) {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            match (
                signal(SignalKind::interrupt()),
                signal(SignalKind::terminate()),
            ) {
                (Ok(mut sigint), Ok(mut sigterm)) => {
                    tokio::select! {
                        _ = sigint.recv() => info!("Received SIGINT, initiating shutdown..."),
                        _ = sigterm.recv() => info!("Received SIGTERM, initiating shutdown..."),
                    }
                    handle.request_shutdown();
                }
                _ => error!("Failed to install signal handlers"),
            }
        }

        #[cfg(not(unix))]
        {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating shutdown...");
                    handle.request_shutdown();
                }
                Err(e) => error!("Failed to listen for Ctrl+C: {}", e),
            }
        }
    });
}
