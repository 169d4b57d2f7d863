use async_trait::async_trait;
use log::debug;

use super::Condition;
use crate::engine::{ExecutionContext, QueueFactory, TaskQueue};
use crate::task::{Task, TaskError};

/// If/else: runs the queue of exactly one branch per execution.
pub struct ConditionalTask {
    condition: Condition,
    then_factory: Box<dyn QueueFactory>,
    else_factory: Box<dyn QueueFactory>,
}

impl ConditionalTask {
    pub fn new<C, T, E>(condition: C, then_factory: T, else_factory: E) -> Self
    where
        C: Fn(&ExecutionContext) -> bool + Send + Sync + 'static,
        T: QueueFactory + 'static,
        E: QueueFactory + 'static,
    {
        Self {
            condition: Box::new(condition),
            then_factory: Box::new(then_factory),
            else_factory: Box::new(else_factory),
        }
    }

    /// A branch with nothing to do when the condition is false.
    pub fn without_else<C, T>(condition: C, then_factory: T) -> Self
    where
        C: Fn(&ExecutionContext) -> bool + Send + Sync + 'static,
        T: QueueFactory + 'static,
    {
        Self::new(condition, then_factory, TaskQueue::new)
    }
}

#[async_trait]
impl Task for ConditionalTask {
    async fn execute(&self, ctx: &mut ExecutionContext) -> Result<(), TaskError> {
        let branch = (self.condition)(ctx);
        debug!("Conditional evaluated to {}", branch);

        let mut queue = if branch {
            self.then_factory.build()
        } else {
            self.else_factory.build()
        };
        queue.execute_all(ctx).await?;
        Ok(())
    }

    fn name(&self) -> &str {
        "conditional"
    }
}
