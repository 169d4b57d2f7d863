use async_trait::async_trait;
use log::debug;

use super::Condition;
use crate::engine::{ExecutionContext, ExecutionError, QueueFactory};
use crate::task::{Task, TaskError};

/// While loop over a body queue.
///
/// The condition is checked before every iteration and each iteration drains
/// a fresh clone of the factory's queue, so a drained body never leaks into
/// the next pass. Termination is up to the body: it has to change the
/// context so the condition eventually turns false. Without
/// [`with_max_iterations`](Self::with_max_iterations) there is no cap.
pub struct LoopTask {
    condition: Condition,
    body_factory: Box<dyn QueueFactory>,
    max_iterations: Option<usize>,
}

impl LoopTask {
    pub fn new<C, B>(condition: C, body_factory: B) -> Self
    where
        C: Fn(&ExecutionContext) -> bool + Send + Sync + 'static,
        B: QueueFactory + 'static,
    {
        Self {
            condition: Box::new(condition),
            body_factory: Box::new(body_factory),
            max_iterations: None,
        }
    }

    pub fn with_max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = Some(value);
        self
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }
}

#[async_trait]
impl Task for LoopTask {
    async fn execute(&self, ctx: &mut ExecutionContext) -> Result<(), TaskError> {
        let mut iterations = 0usize;

        while (self.condition)(ctx) {
            if let Some(limit) = self.max_iterations {
                if iterations >= limit {
                    return Err(ExecutionError::IterationLimitExceeded {
                        task: self.name().to_string(),
                        limit,
                    }
                    .into());
                }
            }

            let mut body = self.body_factory.build().clone();
            body.execute_all(ctx).await?;
            iterations += 1;
        }

        debug!("Loop finished after {} iteration(s)", iterations);
        Ok(())
    }

    fn name(&self) -> &str {
        "loop"
    }
}
