//! Work items and the collaborator seams around them

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single unit of pending work
///
/// Lives for one loop iteration: produced by a [`WorkSource`], handed to a
/// [`WorkProcessor`], then discarded. The payload is opaque JSON that the
/// runner never inspects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    /// Identifier used in logs and error reporting
    pub id: String,

    /// Opaque payload for the processor
    #[serde(default)]
    pub data: serde_json::Value,
}

impl WorkItem {
    pub fn new(id: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

/// Source of pending work items (queue, database, API, ...)
#[async_trait]
pub trait WorkSource: Send + Sync {
    /// Return zero or more pending items
    ///
    /// Order within one returned batch is preserved by the runner. A fetch
    /// error is treated as "no items this cycle" by the worker loop.
    async fn fetch_batch(&self) -> Result<Vec<WorkItem>>;
}

/// Processes a single work item
#[async_trait]
pub trait WorkProcessor: Send + Sync {
    /// Perform the unit of work for one item
    ///
    /// An error here is item-level: the worker loop logs it and moves on to
    /// the next item.
    async fn process(&self, item: &WorkItem) -> Result<()>;
}

#[async_trait]
impl<S: WorkSource + ?Sized> WorkSource for Arc<S> {
    async fn fetch_batch(&self) -> Result<Vec<WorkItem>> {
        self.as_ref().fetch_batch().await
    }
}

#[async_trait]
impl<P: WorkProcessor + ?Sized> WorkProcessor for Arc<P> {
    async fn process(&self, item: &WorkItem) -> Result<()> {
        self.as_ref().process(item).await
    }
}
