//! Task manager for async operations
//!
//! Owns the async work a dispatch loop spawns: API requests, settings
//! writes, anything that finishes later and re-enters the loop as an
//! action. Tasks are keyed; spawning under a key that is already running
//! aborts the predecessor, so "the newest search wins" falls out of the
//! keying. Debounced spawning covers sync-as-you-type draft saving.
//!
//! # Example
//!
//! ```ignore
//! use tripkit_core::tasks::{TaskManager, TaskKey};
//! use std::time::Duration;
//!
//! let (action_tx, mut action_rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut tasks = TaskManager::new(action_tx);
//!
//! // A fresh search replaces any search still in flight
//! tasks.spawn(TaskKey::new("flight_search"), async move {
//!     match client.search(&query).await {
//!         Ok(offers) => SearchAction::DidLoad { generation, offers },
//!         Err(e) => SearchAction::DidError { generation, message: e.user_message() },
//!     }
//! });
//!
//! // Draft sync waits for the user to stop typing
//! tasks.debounce(TaskKey::new("draft_sync"), Duration::from_millis(250), async move {
//!     SearchAction::DraftChange(draft)
//! });
//!
//! // Cancel everything on shutdown
//! tasks.cancel_all();
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};

use crate::Action;

/// Identifies a task for cancellation and replacement.
///
/// Tasks with the same key are mutually exclusive - spawning a new task
/// with a key that's already running will cancel the existing task.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    /// Create a new task key.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the key name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TaskKey {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TaskKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Manages async task lifecycle with automatic replacement.
///
/// Each task resolves to one action, delivered back to the dispatch loop
/// over the manager's channel. A task aborted before completion sends
/// nothing. Note that an aborted task may already have sent its action
/// into the channel; response ordering beyond that is the store's job
/// (see the search store's request generation).
///
/// # Type Parameters
///
/// - `A`: The action type that tasks produce
pub struct TaskManager<A> {
    tasks: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    /// Create a new task manager.
    ///
    /// The `action_tx` channel is used to send actions back to the dispatch
    /// loop when tasks complete.
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
        }
    }

    /// Spawn a task, cancelling any existing task with the same key.
    pub fn spawn<F>(&mut self, key: impl Into<TaskKey>, future: F) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        let key = key.into();

        self.cancel(&key);

        let tx = self.action_tx.clone();
        let handle: JoinHandle<()> = tokio::spawn(async move {
            let action = future.await;
            let _ = tx.send(action);
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Spawn a task after a quiet period.
    ///
    /// If called again with the same key before the duration expires, the
    /// pending task is dropped and the timer restarts. Used for draft
    /// syncing and search-as-you-type.
    pub fn debounce<F>(
        &mut self,
        key: impl Into<TaskKey>,
        duration: Duration,
        future: F,
    ) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        let key = key.into();

        self.cancel(&key);

        let tx = self.action_tx.clone();
        let handle: JoinHandle<()> = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let action = future.await;
            let _ = tx.send(action);
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Cancel a task by key.
    ///
    /// If no task exists with the given key, this is a no-op.
    pub fn cancel(&mut self, key: &TaskKey) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    /// Cancel all running tasks.
    ///
    /// Useful for cleanup on shutdown or logout.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    /// Check if a task with the given key is currently running.
    pub fn is_running(&self, key: &TaskKey) -> bool {
        self.tasks.contains_key(key)
    }

    /// Get the number of running tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if there are no running tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        // Abort all running tasks on drop
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}
