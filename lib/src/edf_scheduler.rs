//! Preemptive Earliest-Deadline-First scheduling on a single processor.
use std::collections::VecDeque;

use crate::{
    error::ConfigurationError,
    job::Job,
    log::SchedulerLog,
    scheduler::SchedulerBase,
    task::TaskCatalog,
};

pub struct EDFScheduler<'a> {
    task_catalog: &'a TaskCatalog,
}

impl<'a> SchedulerBase<'a> for EDFScheduler<'a> {
    fn new(task_catalog: &'a TaskCatalog) -> Self {
        Self { task_catalog }
    }

    fn get_task_catalog(&self) -> &'a TaskCatalog {
        self.task_catalog
    }

    /// Ties on the absolute deadline fall back to release time, then task name.
    fn sort_ready_queue(&self, ready_queue: &mut VecDeque<Job<'a>>) {
        ready_queue
            .make_contiguous()
            .sort_by(|a, b| a.priority_key().cmp(&b.priority_key()));
    }
}

/// Simulates EDF over `[0, horizon)` and returns the timeline and deadline misses.
///
/// The result depends only on `task_catalog` and `horizon`; running it twice yields the same log.
///
/// # Example
///
/// ```
/// use lib::edf_scheduler::run;
/// use lib::task::{PeriodicTask, TaskCatalog};
///
/// let task_catalog = TaskCatalog::new(vec![PeriodicTask::new("T", 1, 10)]).unwrap();
/// let log = run(&task_catalog, 10).unwrap();
/// assert_eq!(log.timeline[0].label(), "T");
/// assert!(log.timeline[1..].iter().all(|entry| entry.is_idle()));
/// assert!(log.deadline_misses.is_empty());
/// ```
pub fn run(task_catalog: &TaskCatalog, horizon: i32) -> Result<SchedulerLog, ConfigurationError> {
    EDFScheduler::new(task_catalog).schedule(horizon)
}
