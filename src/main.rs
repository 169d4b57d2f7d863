use async_trait::async_trait;
use log::info;

use queueflow::task::example_task::CounterTask;
use queueflow::{
    AspectTask, ConditionalTask, ContainerRegistry, ExecutionContext, SwitchTask, Task,
    TaskError, TaskQueue,
};

/// Reads the current id without touching it.
struct ReportTask;

#[async_trait]
impl Task for ReportTask {
    async fn execute(&self, ctx: &mut ExecutionContext) -> Result<(), TaskError> {
        info!("Current id: {:?}", ctx.get_int("id"));
        Ok(())
    }

    fn name(&self) -> &str {
        "report"
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // RUST_LOG=info shows task output.
    env_logger::init();
    info!("Starting the queueflow demo...");

    // Step 1: Set up the registry and the container.
    let registry = ContainerRegistry::new();
    let container = registry.create("test01", None);

    // Step 2: Build the main queue.
    let switch_task = SwitchTask::new(|_| "case3")
        .case("case1", TaskQueue::new().enqueue(CounterTask::new("wjm")))
        .case("case2", TaskQueue::new().enqueue(CounterTask::new("zz")))
        .case("case3", TaskQueue::new().enqueue(CounterTask::new("jj")));

    let if_else_task = ConditionalTask::new(
        |_| false,
        || TaskQueue::new().enqueue(CounterTask::new("if else is true")),
        || {
            TaskQueue::new().enqueue(
                AspectTask::new(CounterTask::new("if else is false")).before(|ctx| {
                    info!("this before execute: {:?}", ctx.get_int("id"));
                    true
                }),
            )
        },
    );

    let main_queue = TaskQueue::new()
        .enqueue(CounterTask::new("Main Task 1"))
        .enqueue(CounterTask::new("Main Task 2"))
        .enqueue(CounterTask::new("Main Task 3"))
        .enqueue(ReportTask)
        .enqueue(switch_task)
        .enqueue(if_else_task);

    // Step 3: Load the definition and run it against a caller-supplied context.
    container.add_task_queue(main_queue);
    let mut ctx = ExecutionContext::new()
        .with("id", 12)
        .with("sharedData", "shared data");
    let summary = container.execute_all(&mut ctx).await?;

    // Step 4: Report.
    println!(
        "Executed {} task(s); final id = {:?}",
        summary.executed,
        ctx.get_int("id")
    );

    Ok(())
}
