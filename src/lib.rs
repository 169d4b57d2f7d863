//! # queueflow
//!
//! A small embeddable workflow engine. Workflows are assembled from
//! composable tasks that run in order over one shared, mutable
//! [`ExecutionContext`].
//!
//! ## Features
//!
//! - FIFO task queues with shallow cloning
//! - If/else, while and switch control-flow tasks built from queue factories
//! - Aspect tasks with before/after hooks and a skip gate
//! - Named containers held in an explicit, idempotent registry
//! - Fail-fast or isolate-and-continue error policies
//!
//! Tasks run strictly one after another: task *N+1* never starts before
//! task *N*, and everything it triggered, has finished.
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use queueflow::{
//!     ConditionalTask, ContainerRegistry, ExecutionContext, Task, TaskError, TaskQueue,
//! };
//!
//! struct Greet;
//!
//! #[async_trait]
//! impl Task for Greet {
//!     async fn execute(&self, ctx: &mut ExecutionContext) -> Result<(), TaskError> {
//!         ctx.increment("greetings", 1);
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = ContainerRegistry::new();
//!     let container = registry.create("demo", Some(ExecutionContext::new().with("id", 12)));
//!
//!     container.add_task_queue(
//!         TaskQueue::new().enqueue(Greet).enqueue(ConditionalTask::new(
//!             |ctx: &ExecutionContext| ctx.get_int("id") == Some(12),
//!             || TaskQueue::new().enqueue(Greet),
//!             TaskQueue::new,
//!         )),
//!     );
//!
//!     let summary = container.run().await.expect("run failed");
//!     assert_eq!(summary.executed, 2);
//!
//!     let ctx = container.execution_context();
//!     assert_eq!(ctx.lock().await.get_int("greetings"), Some(2));
//! }
//! ```
//!
//! ## License
//!
//! Licensed under the MIT license. See the [LICENSE](LICENSE) file for details.

pub mod engine;
pub mod task;

pub use engine::{
    Container, ContainerOptions, ContainerRegistry, ErrorPolicy, ExecutionContext, ExecutionError,
    QueueFactory, RunSummary, SharedContext, TaskQueue, Value,
};
pub use task::aspect::AspectTask;
pub use task::control::{ConditionalTask, LoopTask, SwitchTask};
pub use task::{Task, TaskError};
