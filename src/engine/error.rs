use thiserror::Error;

use crate::task::TaskError;

/// Failure outcome of running a queue, a control-flow task or a container.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("task '{task}' failed: {source}")]
    TaskFailed {
        task: String,
        #[source]
        source: TaskError,
    },

    #[error("loop '{task}' exceeded its limit of {limit} iterations")]
    IterationLimitExceeded { task: String, limit: usize },
}

impl ExecutionError {
    pub fn task_failed(task: impl Into<String>, source: TaskError) -> Self {
        ExecutionError::TaskFailed {
            task: task.into(),
            source,
        }
    }

    /// Name of the task the failure is attributed to.
    pub fn task(&self) -> &str {
        match self {
            ExecutionError::TaskFailed { task, .. } => task,
            ExecutionError::IterationLimitExceeded { task, .. } => task,
        }
    }
}
