use super::error::ExecutionError;

/// What a container does when one of its top-level tasks fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort the whole run and hand the failure to the caller.
    #[default]
    FailFast,
    /// Record the failure and carry on with the next task.
    Continue,
}

#[derive(Debug, Clone, Default)]
pub struct ContainerOptions {
    /// How task failures are handled during `execute_all`
    pub error_policy: ErrorPolicy,
}

impl ContainerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error_policy(mut self, value: ErrorPolicy) -> Self {
        self.error_policy = value;
        self
    }
}

/// Outcome of a run that did not abort.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of top-level tasks dequeued and executed
    pub executed: usize,
    /// Failures isolated under `ErrorPolicy::Continue`
    pub failures: Vec<ExecutionError>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn merge(&mut self, other: RunSummary) {
        self.executed += other.executed;
        self.failures.extend(other.failures);
    }
}
