use std::collections::VecDeque;

use crate::{
    error::ConfigurationError,
    job::{Job, JobState},
    log::SchedulerLog,
    task::TaskCatalog,
};

pub trait SchedulerBase<'a> {
    fn new(task_catalog: &'a TaskCatalog) -> Self
    where
        Self: Sized;
    fn get_task_catalog(&self) -> &'a TaskCatalog;
    /// Puts the job to run next at the front of the ready queue.
    fn sort_ready_queue(&self, ready_queue: &mut VecDeque<Job<'a>>);
    fn schedule(&self, horizon: i32) -> Result<SchedulerLog, ConfigurationError>
    where
        Self: Sized,
    {
        schedule(self, horizon)
    }
}

/// This function simulates a preemptive uniprocessor scheduler over a discrete time horizon.
///
/// # Arguments
///
/// * `scheduler` - An object that implements `SchedulerBase`, providing the task catalog and the priority order.
/// * `horizon` - Number of unit time steps to simulate, `[0, horizon)`.
///
/// # Returns
///
/// * A `SchedulerLog` holding the timeline, the deadline misses and per-task statistics.
/// * `ConfigurationError::NegativeHorizon` if `horizon < 0`; no step is simulated in that case.
///
/// # Description
///
/// Each time step `t` runs the following phases in this order:
///
/// 1. Every task whose period divides `t` releases a job into the ready queue.
/// 2. Jobs whose absolute deadline is `<= t` are logged as deadline misses and dropped.
/// 3. The ready queue is sorted by the scheduler's priority order.
/// 4. The job at the front runs for one time unit and leaves the queue when its work is done.
///    If the queue is empty the step is idle.
///
/// The decision is re-evaluated at every step, so a newly released job with higher priority
/// preempts the running one immediately. Jobs still queued at the horizon are counted as pending.
pub fn schedule<'a>(
    scheduler: &impl SchedulerBase<'a>,
    horizon: i32,
) -> Result<SchedulerLog, ConfigurationError> {
    if horizon < 0 {
        return Err(ConfigurationError::NegativeHorizon { horizon });
    }
    let task_catalog = scheduler.get_task_catalog();
    let mut ready_queue: VecDeque<Job<'a>> = VecDeque::new();
    let mut log = SchedulerLog::new(task_catalog, horizon);

    for current_time in 0..horizon {
        for job in task_catalog.release_jobs(current_time) {
            log.write_release_log(&job);
            ready_queue.push_back(job);
        }

        ready_queue.retain(|job| {
            if job.deadline_missed(current_time) {
                log.write_deadline_miss_log(job, current_time);
                false
            } else {
                true
            }
        });

        scheduler.sort_ready_queue(&mut ready_queue);

        let job_state = match ready_queue.front_mut() {
            Some(job) => {
                log.write_execution_log(job);
                job.process()
            }
            None => {
                log.write_idle_log();
                continue;
            }
        };
        if job_state == JobState::Done {
            if let Some(finished_job) = ready_queue.pop_front() {
                log.write_finishing_job_log(&finished_job);
            }
        }
    }

    log.write_pending_log(&ready_queue);
    log.write_scheduling_log();
    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::TimelineEntry;
    use crate::tests_helper::create_task_catalog;

    /// Runs jobs in release order regardless of deadline.
    struct FirstComeFirstServed<'a> {
        task_catalog: &'a TaskCatalog,
    }

    impl<'a> SchedulerBase<'a> for FirstComeFirstServed<'a> {
        fn new(task_catalog: &'a TaskCatalog) -> Self {
            Self { task_catalog }
        }

        fn get_task_catalog(&self) -> &'a TaskCatalog {
            self.task_catalog
        }

        fn sort_ready_queue(&self, ready_queue: &mut VecDeque<Job<'a>>) {
            ready_queue
                .make_contiguous()
                .sort_by_key(|job| job.release_time());
        }
    }

    #[test]
    fn test_schedule_negative_horizon() {
        let task_catalog = create_task_catalog(&[("A", 1, 2)]);
        let scheduler = FirstComeFirstServed::new(&task_catalog);
        assert_eq!(
            scheduler.schedule(-1),
            Err(ConfigurationError::NegativeHorizon { horizon: -1 })
        );
    }

    #[test]
    fn test_schedule_zero_horizon() {
        let task_catalog = create_task_catalog(&[("A", 1, 2)]);
        let log = FirstComeFirstServed::new(&task_catalog).schedule(0).unwrap();
        assert!(log.timeline.is_empty());
        assert!(log.deadline_misses.is_empty());
        assert_eq!(log.task_logs[0].released_jobs, 0);
    }

    #[test]
    fn test_schedule_uses_scheduler_order() {
        // Same release time: the stable sort keeps A ahead of B despite B's earlier deadline.
        let task_catalog = create_task_catalog(&[("A", 3, 10), ("B", 1, 4)]);
        let log = FirstComeFirstServed::new(&task_catalog).schedule(4).unwrap();
        let labels: Vec<&str> = log.timeline.iter().map(TimelineEntry::label).collect();
        assert_eq!(labels, vec!["A", "A", "A", "B"]);
        assert!(log.deadline_misses.is_empty());
    }

    #[test]
    fn test_schedule_empty_catalog_is_idle() {
        let task_catalog = create_task_catalog(&[]);
        let log = FirstComeFirstServed::new(&task_catalog).schedule(3).unwrap();
        assert!(log.timeline.iter().all(TimelineEntry::is_idle));
        assert_eq!(log.processor_log.idle_time, 3);
    }
}
