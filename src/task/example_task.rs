use crate::engine::ExecutionContext;
use crate::task::{Task, TaskError};
use async_trait::async_trait;
use log::info;

/// A simple task that logs its name and bumps a counter in the context.
pub struct CounterTask {
    pub name: String,
    pub counter_key: String,
}

impl CounterTask {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            counter_key: "id".into(),
        }
    }

    pub fn with_counter_key(mut self, key: impl Into<String>) -> Self {
        self.counter_key = key.into();
        self
    }
}

#[async_trait]
impl Task for CounterTask {
    async fn execute(&self, ctx: &mut ExecutionContext) -> Result<(), TaskError> {
        info!("Executing task: {}", self.name);
        let value = ctx.increment(&self.counter_key, 1);
        match ctx.get("sharedData") {
            Some(shared) => info!("Shared data: {}==={}", shared, value),
            None => info!("{} = {}", self.counter_key, value),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
