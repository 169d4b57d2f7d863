use log::{debug, info};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::context::ExecutionContext;
use super::error::ExecutionError;
use super::options::{ContainerOptions, RunSummary};
use super::queue::TaskQueue;

/// Handle to a context that outlives a single run.
pub type SharedContext = Arc<tokio::sync::Mutex<ExecutionContext>>;

/// A named set of task queues bound to one registered context.
///
/// Containers are handed out by [`ContainerRegistry`](super::ContainerRegistry);
/// the registry guarantees one instance per name.
pub struct Container {
    /// Unique name within its registry
    name: String,
    /// Run-time behaviour such as the error policy
    options: ContainerOptions,
    /// Queues waiting to be drained, in the order they were added
    queues: Mutex<VecDeque<TaskQueue>>,
    /// The context registered under the same name
    context: SharedContext,
}

impl Container {
    pub(crate) fn new(name: String, context: SharedContext, options: ContainerOptions) -> Self {
        Self {
            name,
            options,
            queues: Mutex::new(VecDeque::new()),
            context,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &ContainerOptions {
        &self.options
    }

    pub fn add_task_queue(&self, queue: TaskQueue) -> &Self {
        debug!(
            "Container '{}': adding queue with {} task(s)",
            self.name,
            queue.len()
        );
        self.lock_queues().push_back(queue);
        self
    }

    /// Number of queues not yet drained.
    pub fn queue_count(&self) -> usize {
        self.lock_queues().len()
    }

    /// The context registered for this container's name.
    pub fn execution_context(&self) -> SharedContext {
        self.context.clone()
    }

    /// Drains every queue, in the order added, against `ctx`.
    ///
    /// Queues are consumed by the run. Under `ErrorPolicy::FailFast` the
    /// first failure aborts the run; the tasks behind it stay queued at the
    /// front of the container, ahead of the queues not yet started.
    pub async fn execute_all(
        &self,
        ctx: &mut ExecutionContext,
    ) -> Result<RunSummary, ExecutionError> {
        info!("Container '{}': starting run", self.name);
        let mut summary = RunSummary::default();

        // The lock is released before each drain so tasks may add queues.
        while let Some(mut queue) = self.next_queue() {
            match queue.execute_all_with(ctx, self.options.error_policy).await {
                Ok(result) => summary.merge(result),
                Err(e) => {
                    if !queue.is_empty() {
                        self.lock_queues().push_front(queue);
                    }
                    return Err(e);
                }
            }
        }

        info!(
            "Container '{}': run finished, {} task(s) executed, {} failure(s)",
            self.name,
            summary.executed,
            summary.failures.len()
        );
        Ok(summary)
    }

    /// Runs the container against its own registered context.
    pub async fn run(&self) -> Result<RunSummary, ExecutionError> {
        let context = self.execution_context();
        let mut ctx = context.lock().await;
        self.execute_all(&mut ctx).await
    }

    fn next_queue(&self) -> Option<TaskQueue> {
        self.lock_queues().pop_front()
    }

    fn lock_queues(&self) -> std::sync::MutexGuard<'_, VecDeque<TaskQueue>> {
        // Poisoning leaves the deque intact.
        self.queues.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests;
