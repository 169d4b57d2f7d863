use async_trait::async_trait;
use log::debug;

use crate::engine::ExecutionContext;
use crate::task::{Task, TaskError};

type BeforeHook = Box<dyn Fn(&mut ExecutionContext) -> bool + Send + Sync>;
type AfterHook = Box<dyn Fn(&mut ExecutionContext) + Send + Sync>;

/// Wraps a task with optional before/after hooks.
///
/// A `before` hook returning `false` is a gate: the wrapped task and the
/// `after` hook are both skipped and the aspect still succeeds. If the
/// wrapped task fails, the `after` hook does not run.
pub struct AspectTask {
    task: Box<dyn Task>,
    before: Option<BeforeHook>,
    after: Option<AfterHook>,
}

impl AspectTask {
    pub fn new<T: Task + 'static>(task: T) -> Self {
        Self {
            task: Box::new(task),
            before: None,
            after: None,
        }
    }

    pub fn before<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut ExecutionContext) -> bool + Send + Sync + 'static,
    {
        self.before = Some(Box::new(hook));
        self
    }

    pub fn after<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut ExecutionContext) + Send + Sync + 'static,
    {
        self.after = Some(Box::new(hook));
        self
    }
}

#[async_trait]
impl Task for AspectTask {
    async fn execute(&self, ctx: &mut ExecutionContext) -> Result<(), TaskError> {
        if let Some(before) = &self.before {
            if !before(ctx) {
                debug!("Aspect gate closed, skipping '{}'", self.task.name());
                return Ok(());
            }
        }

        self.task.execute(ctx).await?;

        if let Some(after) = &self.after {
            after(ctx);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        self.task.name()
    }
}
