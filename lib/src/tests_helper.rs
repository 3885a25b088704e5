use crate::task::{PeriodicTask, TaskCatalog};

/// Builds a catalog from `(name, wcet, period)` triples. Panics on an invalid set.
pub fn create_task_catalog(tasks: &[(&str, i32, i32)]) -> TaskCatalog {
    TaskCatalog::new(
        tasks
            .iter()
            .map(|&(name, wcet, period)| PeriodicTask::new(name, wcet, period))
            .collect(),
    )
    .expect("Invalid task set for test")
}

pub fn create_drone_task_catalog() -> TaskCatalog {
    create_task_catalog(&[
        ("Video Stream Handler", 10, 33),
        ("Gimbal Sync", 5, 20),
        ("Controller Monitor", 5, 20),
        ("Telemetry Watchdog", 2, 100),
        ("LTE Handler", 3, 100),
        ("Fail-Safe Switch", 1, 10),
    ])
}

pub fn create_overloaded_task_catalog() -> TaskCatalog {
    create_task_catalog(&[("Overloaded", 5, 3)])
}
