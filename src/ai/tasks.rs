//! Background AI requests keyed by suggestion key.
//!
//! Each request runs as its own tokio task. The tracker keeps one handle per
//! key: submitting again under a key that is still in flight aborts the older
//! task, and any completion whose generation no longer matches is dropped.
//! Completions arrive over a channel and are applied on the caller's thread,
//! so the store is only ever touched synchronously.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use super::AiGateway;
use crate::core::{AiSuggestion, AnswerStore, RequestKind};

/// A finished request, tagged with the generation it was submitted under.
#[derive(Debug, Clone)]
pub struct Completion {
    pub key: String,
    pub generation: u64,
    pub suggestion: AiSuggestion,
}

struct InFlight {
    generation: u64,
    task: JoinHandle<()>,
}

/// Owns in-flight AI tasks and routes their results into the store.
pub struct RequestTracker {
    gateway: Arc<AiGateway>,
    runtime: Handle,
    in_flight: HashMap<String, InFlight>,
    next_generation: u64,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
}

impl RequestTracker {
    /// Create a tracker that spawns onto `runtime`.
    pub fn new(gateway: Arc<AiGateway>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { gateway, runtime, in_flight: HashMap::new(), next_generation: 0, tx, rx }
    }

    pub fn gateway(&self) -> &AiGateway {
        &self.gateway
    }

    /// Start a request. Marks `key` as loading and supersedes any request
    /// already running under it.
    pub fn submit(
        &mut self,
        store: &mut AnswerStore,
        key: impl Into<String>,
        kind: RequestKind,
        input: String,
    ) {
        let key = key.into();
        if let Some(previous) = self.in_flight.remove(&key) {
            previous.task.abort();
            tracing::debug!(key = %key, generation = previous.generation, "Superseded in-flight request");
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        store.set_loading(key.clone(), true);

        let gateway = Arc::clone(&self.gateway);
        let tx = self.tx.clone();
        let task_key = key.clone();
        let task = self.runtime.spawn(async move {
            let suggestion = if kind.uses_search() {
                gateway.search(&input).await
            } else {
                gateway.draft(&input).await
            };
            // The receiver lives as long as the tracker.
            let _ = tx.send(Completion { key: task_key, generation, suggestion });
        });

        tracing::debug!(key = %key, %kind, generation, "Submitted AI request");
        self.in_flight.insert(key, InFlight { generation, task });
    }

    /// Apply every completion that has already arrived. Returns the keys that
    /// were written to the store.
    pub fn poll(&mut self, store: &mut AnswerStore) -> Vec<String> {
        let mut applied = Vec::new();
        while let Ok(completion) = self.rx.try_recv() {
            let key = completion.key.clone();
            if self.apply(store, completion) {
                applied.push(key);
            }
        }
        applied
    }

    /// Wait for the next current completion and apply it. Returns its key, or
    /// `None` when nothing is in flight.
    pub async fn settle_next(&mut self, store: &mut AnswerStore) -> Option<String> {
        while !self.in_flight.is_empty() {
            let completion = self.rx.recv().await?;
            let key = completion.key.clone();
            if self.apply(store, completion) {
                return Some(key);
            }
        }
        None
    }

    /// Abort the request under `key`, if any, and clear its loading flag.
    pub fn cancel(&mut self, store: &mut AnswerStore, key: &str) -> bool {
        match self.in_flight.remove(key) {
            Some(request) => {
                request.task.abort();
                store.set_loading(key, false);
                true
            }
            None => false,
        }
    }

    /// Number of requests still running.
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.in_flight.contains_key(key)
    }

    fn apply(&mut self, store: &mut AnswerStore, completion: Completion) -> bool {
        let current = self.in_flight.get(&completion.key).map(|r| r.generation);
        if current != Some(completion.generation) {
            tracing::debug!(
                key = %completion.key,
                generation = completion.generation,
                "Discarding stale completion"
            );
            return false;
        }

        self.in_flight.remove(&completion.key);
        tracing::debug!(key = %completion.key, "Stored AI suggestion");
        store.set_suggestion(completion.key.clone(), completion.suggestion);
        store.set_loading(completion.key, false);
        true
    }
}

impl Drop for RequestTracker {
    fn drop(&mut self) {
        for request in self.in_flight.values() {
            request.task.abort();
        }
    }
}
