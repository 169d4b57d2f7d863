#[cfg(test)]
mod tests {
    use crate::engine::{
        ContainerOptions, ContainerRegistry, ErrorPolicy, ExecutionContext, ExecutionError,
        TaskQueue,
    };
    use crate::task::{Task, TaskError};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct RecordTask {
        label: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
        should_fail: bool,
    }

    #[async_trait]
    impl Task for RecordTask {
        async fn execute(&self, ctx: &mut ExecutionContext) -> Result<(), TaskError> {
            self.log.lock().unwrap().push(self.label);
            if self.should_fail {
                return Err(format!("{} failed", self.label).into());
            }
            ctx.increment("id", 1);
            Ok(())
        }

        fn name(&self) -> &str {
            self.label
        }
    }

    fn record(label: &'static str, log: &Arc<Mutex<Vec<&'static str>>>) -> RecordTask {
        RecordTask {
            label,
            log: log.clone(),
            should_fail: false,
        }
    }

    fn failing(label: &'static str, log: &Arc<Mutex<Vec<&'static str>>>) -> RecordTask {
        RecordTask {
            should_fail: true,
            ..record(label, log)
        }
    }

    #[tokio::test]
    async fn test_execute_all_drains_queues_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = ContainerRegistry::new();
        let container = registry.create("ordered", None);
        container
            .add_task_queue(
                TaskQueue::new()
                    .enqueue(record("q1-a", &log))
                    .enqueue(record("q1-b", &log)),
            )
            .add_task_queue(TaskQueue::new().enqueue(record("q2-a", &log)));
        assert_eq!(container.queue_count(), 2);

        let mut ctx = ExecutionContext::new().with("id", 12);
        let summary = container.execute_all(&mut ctx).await.unwrap();

        assert_eq!(summary.executed, 3);
        assert!(summary.is_success());
        assert_eq!(*log.lock().unwrap(), vec!["q1-a", "q1-b", "q2-a"]);
        assert_eq!(ctx.get_int("id"), Some(15));
        assert_eq!(container.queue_count(), 0);
    }

    #[tokio::test]
    async fn test_execute_all_uses_supplied_context() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = ContainerRegistry::new();
        let container =
            registry.create("supplied", Some(ExecutionContext::new().with("id", 100)));
        container.add_task_queue(TaskQueue::new().enqueue(record("only", &log)));

        let mut external = ExecutionContext::new().with("id", 12);
        container.execute_all(&mut external).await.unwrap();

        assert_eq!(external.get_int("id"), Some(13));
        let registered = container.execution_context();
        assert_eq!(registered.lock().await.get_int("id"), Some(100));
    }

    #[tokio::test]
    async fn test_run_uses_registered_context_and_accumulates() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = ContainerRegistry::new();
        let container = registry.create("own", Some(ExecutionContext::new().with("id", 12)));

        container.add_task_queue(TaskQueue::new().enqueue(record("first", &log)));
        container.run().await.unwrap();
        container.add_task_queue(TaskQueue::new().enqueue(record("second", &log)));
        container.run().await.unwrap();

        let ctx = registry.execution_context("own").unwrap();
        assert_eq!(ctx.lock().await.get_int("id"), Some(14));
    }

    #[tokio::test]
    async fn test_fail_fast_aborts_run() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = ContainerRegistry::new();
        let container = registry.create("fail-fast", None);
        container
            .add_task_queue(
                TaskQueue::new()
                    .enqueue(record("ok", &log))
                    .enqueue(failing("bad", &log))
                    .enqueue(record("skipped", &log)),
            )
            .add_task_queue(TaskQueue::new().enqueue(record("never", &log)));

        let mut ctx = ExecutionContext::new();
        let err = container.execute_all(&mut ctx).await.unwrap_err();

        assert!(matches!(err, ExecutionError::TaskFailed { .. }));
        assert_eq!(err.task(), "bad");
        assert_eq!(*log.lock().unwrap(), vec!["ok", "bad"]);
        assert_eq!(container.queue_count(), 2);
    }

    #[tokio::test]
    async fn test_fail_fast_resumes_with_remaining_tasks() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = ContainerRegistry::new();
        let container = registry.create("resume", None);
        container
            .add_task_queue(
                TaskQueue::new()
                    .enqueue(failing("bad", &log))
                    .enqueue(record("skipped", &log)),
            )
            .add_task_queue(TaskQueue::new().enqueue(record("never", &log)));

        let mut ctx = ExecutionContext::new();
        assert!(container.execute_all(&mut ctx).await.is_err());

        // The partly drained queue is still ahead of the untouched one
        let summary = container.execute_all(&mut ctx).await.unwrap();

        assert_eq!(summary.executed, 2);
        assert_eq!(*log.lock().unwrap(), vec!["bad", "skipped", "never"]);
        assert_eq!(container.queue_count(), 0);
        assert_eq!(ctx.get_int("id"), Some(2));
    }

    #[tokio::test]
    async fn test_fail_fast_on_last_task_leaves_no_empty_queue() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = ContainerRegistry::new();
        let container = registry.create("tail-failure", None);
        container.add_task_queue(
            TaskQueue::new()
                .enqueue(record("ok", &log))
                .enqueue(failing("bad", &log)),
        );

        let mut ctx = ExecutionContext::new();
        assert!(container.execute_all(&mut ctx).await.is_err());

        assert_eq!(container.queue_count(), 0);
    }

    #[tokio::test]
    async fn test_continue_policy_runs_everything() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = ContainerRegistry::new();
        let container = registry.create_with_options(
            "isolated",
            None,
            ContainerOptions::new().with_error_policy(ErrorPolicy::Continue),
        );
        assert_eq!(container.options().error_policy, ErrorPolicy::Continue);
        container
            .add_task_queue(
                TaskQueue::new()
                    .enqueue(record("ok", &log))
                    .enqueue(failing("bad", &log))
                    .enqueue(record("after", &log)),
            )
            .add_task_queue(TaskQueue::new().enqueue(failing("worse", &log)));

        let mut ctx = ExecutionContext::new();
        let summary = container.execute_all(&mut ctx).await.unwrap();

        assert_eq!(summary.executed, 2);
        assert_eq!(summary.failures.len(), 2);
        assert_eq!(summary.failures[0].task(), "bad");
        assert_eq!(summary.failures[1].task(), "worse");
        assert_eq!(*log.lock().unwrap(), vec!["ok", "bad", "after", "worse"]);
        assert_eq!(ctx.get_int("id"), Some(2));
    }

    #[tokio::test]
    async fn test_empty_container_run() {
        let registry = ContainerRegistry::new();
        let container = registry.create("empty", None);

        let summary = container.run().await.unwrap();

        assert_eq!(summary.executed, 0);
        assert!(summary.is_success());
    }
}
