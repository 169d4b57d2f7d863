use async_trait::async_trait;
use log::{debug, info};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::engine::{ExecutionContext, TaskQueue};
use crate::task::{Task, TaskError};

type Selector<K> = Box<dyn Fn(&ExecutionContext) -> K + Send + Sync>;

/// Multi-way dispatch on an exact key match.
///
/// The selector runs once per execution. A matching case drains a clone of
/// its queue, so the switch can sit inside a loop body and still fire on
/// every pass. With no match and no default case nothing runs.
pub struct SwitchTask<K> {
    selector: Selector<K>,
    cases: HashMap<K, TaskQueue>,
    default_case: Option<TaskQueue>,
}

impl<K> SwitchTask<K>
where
    K: Eq + Hash + Debug + Send + Sync + 'static,
{
    pub fn new<S>(selector: S) -> Self
    where
        S: Fn(&ExecutionContext) -> K + Send + Sync + 'static,
    {
        Self {
            selector: Box::new(selector),
            cases: HashMap::new(),
            default_case: None,
        }
    }

    /// Registers a case. A later call with the same key replaces the queue.
    pub fn case(mut self, key: K, queue: TaskQueue) -> Self {
        self.cases.insert(key, queue);
        self
    }

    pub fn with_cases(mut self, cases: HashMap<K, TaskQueue>) -> Self {
        self.cases.extend(cases);
        self
    }

    pub fn default_case(mut self, queue: TaskQueue) -> Self {
        self.default_case = Some(queue);
        self
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }
}

#[async_trait]
impl<K> Task for SwitchTask<K>
where
    K: Eq + Hash + Debug + Send + Sync + 'static,
{
    async fn execute(&self, ctx: &mut ExecutionContext) -> Result<(), TaskError> {
        let key = (self.selector)(ctx);

        let mut queue = match (self.cases.get(&key), &self.default_case) {
            (Some(queue), _) => {
                debug!("Switch matched case {:?}", key);
                queue.clone()
            }
            (None, Some(default)) => {
                debug!("Switch fell through to the default case for {:?}", key);
                default.clone()
            }
            (None, None) => {
                info!("No matching case found for {:?}", key);
                return Ok(());
            }
        };
        queue.execute_all(ctx).await?;
        Ok(())
    }

    fn name(&self) -> &str {
        "switch"
    }
}
