mod container;
mod context;
mod error;
mod options;
mod queue;
mod registry;

pub use container::{Container, SharedContext};
pub use context::{ExecutionContext, Value};
pub use error::ExecutionError;
pub use options::{ContainerOptions, ErrorPolicy, RunSummary};
pub use queue::{QueueFactory, TaskQueue};
pub use registry::ContainerRegistry;
