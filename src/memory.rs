//! In-memory work source for development and tests

use crate::error::Result;
use crate::work::{WorkItem, WorkSource};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// In-memory FIFO work source
///
/// Backed by a mutex-guarded queue; `fetch_batch` drains up to `batch_size`
/// items per call. Used by the CLI to run against a seeded queue, and by
/// tests.
pub struct MemorySource {
    queue: Mutex<VecDeque<WorkItem>>,
    batch_size: usize,
}

impl MemorySource {
    /// Create an empty source that returns at most `batch_size` items per fetch
    pub fn new(batch_size: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            batch_size: batch_size.max(1),
        }
    }

    /// Create a source pre-loaded with items
    pub fn with_items(batch_size: usize, items: impl IntoIterator<Item = WorkItem>) -> Self {
        let source = Self::new(batch_size);
        source.queue.lock().unwrap().extend(items);
        source
    }

    /// Enqueue a work item
    pub fn push(&self, item: WorkItem) {
        self.queue.lock().unwrap().push_back(item);
    }

    /// Number of items currently queued
    pub fn len(&self) -> usize {
        self.queue.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl WorkSource for MemorySource {
    async fn fetch_batch(&self) -> Result<Vec<WorkItem>> {
        let mut queue = self.queue.lock().unwrap();
        let take = self.batch_size.min(queue.len());
        Ok(queue.drain(..take).collect())
    }
}
