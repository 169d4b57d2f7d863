use async_trait::async_trait;
use std::error::Error;
use std::sync::Arc;

use crate::engine::ExecutionContext;

pub mod aspect;
pub mod control;
pub mod example_task;

/// Error type returned by task implementations.
pub type TaskError = Box<dyn Error + Send + Sync>;

/// A unit of work run against a shared [`ExecutionContext`].
///
/// Leaf tasks do real work; the control-flow tasks in [`control`] and
/// [`aspect::AspectTask`] implement this trait too, so composites are
/// enqueued exactly like leaves.
#[async_trait]
pub trait Task: Send + Sync {
    async fn execute(&self, ctx: &mut ExecutionContext) -> Result<(), TaskError>;

    /// Label used in log records and error reports.
    fn name(&self) -> &str {
        "task"
    }
}

#[async_trait]
impl<T: Task + ?Sized> Task for Arc<T> {
    async fn execute(&self, ctx: &mut ExecutionContext) -> Result<(), TaskError> {
        (**self).execute(ctx).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
