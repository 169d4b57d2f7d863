use log::{debug, error};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use super::context::ExecutionContext;
use super::error::ExecutionError;
use super::options::{ErrorPolicy, RunSummary};
use crate::task::{Task, TaskError};

/// An ordered, single-use sequence of tasks.
///
/// `execute_all` drains the queue front to back. Cloning is shallow: the
/// clone holds the same task handles in its own sequence, so draining one
/// leaves the other untouched.
#[derive(Clone, Default)]
pub struct TaskQueue {
    tasks: VecDeque<Arc<dyn Task>>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue<T: Task + 'static>(mut self, task: T) -> Self {
        self.push(task);
        self
    }

    pub fn enqueue_shared(mut self, task: Arc<dyn Task>) -> Self {
        self.tasks.push_back(task);
        self
    }

    pub fn push<T: Task + 'static>(&mut self, task: T) {
        self.tasks.push_back(Arc::new(task));
    }

    pub fn dequeue(&mut self) -> Option<Arc<dyn Task>> {
        self.tasks.pop_front()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Dequeues and runs every task in order, stopping at the first failure.
    ///
    /// Tasks behind a failed one stay queued. Returns the number of tasks
    /// that ran to completion.
    pub async fn execute_all(
        &mut self,
        ctx: &mut ExecutionContext,
    ) -> Result<usize, ExecutionError> {
        let summary = self.execute_all_with(ctx, ErrorPolicy::FailFast).await?;
        Ok(summary.executed)
    }

    pub async fn execute_all_with(
        &mut self,
        ctx: &mut ExecutionContext,
        policy: ErrorPolicy,
    ) -> Result<RunSummary, ExecutionError> {
        let mut summary = RunSummary::default();

        while let Some(task) = self.dequeue() {
            debug!("Executing task '{}'", task.name());
            match task.execute(ctx).await {
                Ok(()) => summary.executed += 1,
                Err(e) => {
                    let failure = into_execution_error(task.name(), e);
                    match policy {
                        ErrorPolicy::FailFast => return Err(failure),
                        ErrorPolicy::Continue => {
                            error!("{}; continuing with the next task", failure);
                            summary.failures.push(failure);
                        }
                    }
                }
            }
        }

        Ok(summary)
    }
}

impl fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.tasks.iter().map(|t| t.name()))
            .finish()
    }
}

/// Failures raised by nested queues keep their original attribution instead
/// of being re-wrapped by every enclosing control-flow task.
fn into_execution_error(task: &str, e: TaskError) -> ExecutionError {
    match e.downcast::<ExecutionError>() {
        Ok(inner) => *inner,
        Err(other) => ExecutionError::task_failed(task, other),
    }
}

/// Produces a fresh, independently drainable [`TaskQueue`] on every call.
pub trait QueueFactory: Send + Sync {
    fn build(&self) -> TaskQueue;
}

impl<F> QueueFactory for F
where
    F: Fn() -> TaskQueue + Send + Sync,
{
    fn build(&self) -> TaskQueue {
        self()
    }
}

/// A queue used as a template: each build hands out a clone.
impl QueueFactory for TaskQueue {
    fn build(&self) -> TaskQueue {
        self.clone()
    }
}
