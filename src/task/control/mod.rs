//! Control-flow tasks: branch, loop and multi-way dispatch.
//!
//! Each of these is an ordinary [`Task`](crate::task::Task) that, instead of
//! doing leaf work, builds sub-queues and drains them against the context it
//! was given.
//!
//! Predicates and selectors receive the context read-only, so a loop can
//! observe the mutations of its own body. A closure that ignores its
//! argument behaves as a plain zero-argument predicate.

use crate::engine::ExecutionContext;

pub mod conditional;
pub mod switch;
pub mod while_loop;

pub use conditional::ConditionalTask;
pub use switch::SwitchTask;
pub use while_loop::LoopTask;

pub(crate) type Condition = Box<dyn Fn(&ExecutionContext) -> bool + Send + Sync>;
