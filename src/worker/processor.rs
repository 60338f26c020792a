//! Default processor that logs each work item

use crate::error::Result;
use crate::work::{WorkItem, WorkProcessor};
use async_trait::async_trait;
use tracing::info;

/// Processor that logs each item it receives
///
/// The default processor for the binary; useful for smoke-testing a
/// deployment against a seeded queue before wiring in real work.
#[derive(Debug, Default)]
pub struct LogProcessor;

impl LogProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WorkProcessor for LogProcessor {
    async fn process(&self, item: &WorkItem) -> Result<()> {
        info!("Work item {}: {}", item.id, item.data);
        Ok(())
    }
}
