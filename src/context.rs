//! Completion contexts: where asynchronous query callbacks run.
//!
//! The engine finishes requests on its own worker threads. Callers that need
//! their callbacks on one particular thread (a UI loop, say) hand the engine a
//! [`CompletionContext`] and every callback is posted there instead of being
//! run on the worker.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread::{self, JoinHandle};
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

/// Unit of work posted to a completion context.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Executor that receives completion callbacks.
pub trait CompletionContext: Send + Sync {
    /// Schedule `job` to run on this context.
    fn post(&self, job: Job);
}

/// Runs jobs one at a time, in posting order, on a dedicated thread.
pub struct SequentialExecutor {
    sender: Option<UnboundedSender<Job>>,
    thread: Option<JoinHandle<()>>,
}

impl SequentialExecutor {
    pub fn new() -> std::io::Result<Self> {
        Self::with_name("eresult-completion")
    }

    pub fn with_name(name: impl Into<String>) -> std::io::Result<Self> {
        let (sender, mut receiver) = unbounded_channel::<Job>();

        let thread = thread::Builder::new().name(name.into()).spawn(move || {
            while let Some(job) = receiver.blocking_recv() {
                if catch_unwind(AssertUnwindSafe(job)).is_err() {
                    tracing::error!("completion callback panicked");
                }
            }
        })?;

        Ok(Self {
            sender: Some(sender),
            thread: Some(thread),
        })
    }
}

impl CompletionContext for SequentialExecutor {
    fn post(&self, job: Job) {
        let delivered = self
            .sender
            .as_ref()
            .map(|sender| sender.send(job).is_ok())
            .unwrap_or(false);
        if !delivered {
            tracing::warn!("completion context closed, dropping callback");
        }
    }
}

impl Drop for SequentialExecutor {
    fn drop(&mut self) {
        // Closing the channel lets the thread drain what is queued and exit.
        self.sender.take();
        if let Some(thread) = self.thread.take() {
            if thread.thread().id() != thread::current().id() {
                let _ = thread.join();
            }
        }
    }
}

/// Runs jobs immediately on whichever thread posts them.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineContext;

impl CompletionContext for InlineContext {
    fn post(&self, job: Job) {
        job();
    }
}
