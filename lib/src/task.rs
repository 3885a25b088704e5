//! Periodic task definitions and the task catalog they form.
use std::collections::HashSet;

use getset::{CopyGetters, Getters};
use serde_derive::{Deserialize, Serialize};

use crate::{error::ConfigurationError, job::Job, log::IDLE_LABEL};

/// A periodic task with an implicit deadline (relative deadline = period).
#[derive(Clone, Debug, PartialEq, Eq, Getters, CopyGetters, Serialize, Deserialize)]
pub struct PeriodicTask {
    #[getset(get = "pub")]
    name: String,
    /// Worst-case execution time per job.
    #[getset(get_copy = "pub")]
    wcet: i32,
    #[getset(get_copy = "pub")]
    period: i32,
}

impl PeriodicTask {
    pub fn new(name: &str, wcet: i32, period: i32) -> Self {
        Self {
            name: name.to_owned(),
            wcet,
            period,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.name.is_empty() {
            return Err(ConfigurationError::EmptyTaskName);
        }
        if self.name == IDLE_LABEL {
            return Err(ConfigurationError::ReservedTaskName {
                name: self.name.clone(),
            });
        }
        if self.wcet <= 0 {
            return Err(ConfigurationError::NonPositiveWcet {
                name: self.name.clone(),
                wcet: self.wcet,
            });
        }
        if self.period <= 0 {
            return Err(ConfigurationError::NonPositivePeriod {
                name: self.name.clone(),
                period: self.period,
            });
        }
        Ok(())
    }

    pub fn utilization(&self) -> f64 {
        self.wcet as f64 / self.period as f64
    }

    /// Returns the job released at `current_time`, if `current_time` is a multiple of the period.
    pub fn spawn_job(&self, task_id: usize, current_time: i32) -> Option<Job<'_>> {
        if current_time % self.period != 0 {
            return None;
        }
        Some(Job::new(task_id, self, current_time))
    }
}

/// Ordered, validated set of periodic tasks. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskCatalog {
    tasks: Vec<PeriodicTask>,
}

impl TaskCatalog {
    /// Builds a catalog, rejecting the whole set if any task is invalid.
    ///
    /// # Arguments
    ///
    /// * `tasks` - task definitions, in the order they are released when periods coincide
    ///
    /// # Returns
    ///
    /// * `Err(ConfigurationError)` for a non-positive `wcet` or `period`, an empty or
    ///   reserved name, or a duplicate name
    ///
    /// # Example
    ///
    /// ```
    /// use lib::task::{PeriodicTask, TaskCatalog};
    ///
    /// let task_catalog = TaskCatalog::new(vec![
    ///     PeriodicTask::new("Gimbal Sync", 5, 20),
    ///     PeriodicTask::new("Fail-Safe Switch", 1, 10),
    /// ])
    /// .unwrap();
    /// assert_eq!(task_catalog.len(), 2);
    /// assert!(TaskCatalog::new(vec![PeriodicTask::new("A", 1, 0)]).is_err());
    /// ```
    pub fn new(tasks: Vec<PeriodicTask>) -> Result<Self, ConfigurationError> {
        let mut names = HashSet::with_capacity(tasks.len());
        for task in tasks.iter() {
            task.validate()?;
            if !names.insert(task.name().as_str()) {
                return Err(ConfigurationError::DuplicateTaskName {
                    name: task.name().clone(),
                });
            }
        }
        Ok(Self { tasks })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PeriodicTask> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get_task(&self, name: &str) -> Option<&PeriodicTask> {
        self.tasks.iter().find(|task| task.name() == name)
    }

    pub fn get_task_id(&self, name: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.name() == name)
    }

    pub fn total_utilization(&self) -> f64 {
        self.tasks.iter().map(PeriodicTask::utilization).sum()
    }

    /// Jobs released at `current_time`, in catalog order.
    pub fn release_jobs(&self, current_time: i32) -> Vec<Job<'_>> {
        self.tasks
            .iter()
            .enumerate()
            .filter_map(|(task_id, task)| task.spawn_job(task_id, current_time))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_helper::create_drone_task_catalog;

    #[test]
    fn test_periodic_task_validate_normal() {
        assert_eq!(PeriodicTask::new("T", 1, 10).validate(), Ok(()));
        // wcet > period is allowed; it only guarantees misses for that task.
        assert_eq!(PeriodicTask::new("T", 5, 3).validate(), Ok(()));
    }

    #[test]
    fn test_periodic_task_validate_non_positive() {
        assert_eq!(
            PeriodicTask::new("T", 0, 10).validate(),
            Err(ConfigurationError::NonPositiveWcet {
                name: "T".to_string(),
                wcet: 0
            })
        );
        assert_eq!(
            PeriodicTask::new("T", 1, -4).validate(),
            Err(ConfigurationError::NonPositivePeriod {
                name: "T".to_string(),
                period: -4
            })
        );
    }

    #[test]
    fn test_periodic_task_validate_names() {
        assert_eq!(
            PeriodicTask::new("", 1, 10).validate(),
            Err(ConfigurationError::EmptyTaskName)
        );
        assert_eq!(
            PeriodicTask::new("IDLE", 1, 10).validate(),
            Err(ConfigurationError::ReservedTaskName {
                name: "IDLE".to_string()
            })
        );
    }

    #[test]
    fn test_periodic_task_spawn_job_normal() {
        let task = PeriodicTask::new("T", 2, 5);
        assert!(task.spawn_job(0, 3).is_none());
        let job = task.spawn_job(0, 10).unwrap();
        assert_eq!(job.release_time(), 10);
        assert_eq!(job.absolute_deadline(), 15);
        assert_eq!(job.remain_proc_time(), 2);
    }

    #[test]
    fn test_task_catalog_new_duplicate_name() {
        let result = TaskCatalog::new(vec![
            PeriodicTask::new("A", 1, 5),
            PeriodicTask::new("B", 1, 5),
            PeriodicTask::new("A", 2, 7),
        ]);
        assert_eq!(
            result,
            Err(ConfigurationError::DuplicateTaskName {
                name: "A".to_string()
            })
        );
    }

    #[test]
    fn test_task_catalog_lookup() {
        let task_catalog = create_drone_task_catalog();
        assert_eq!(task_catalog.len(), 6);
        assert_eq!(task_catalog.get_task("LTE Handler").unwrap().wcet(), 3);
        assert_eq!(task_catalog.get_task_id("Fail-Safe Switch"), Some(5));
        assert!(task_catalog.get_task("Unknown").is_none());
    }

    #[test]
    fn test_task_catalog_release_jobs_in_catalog_order() {
        let task_catalog = create_drone_task_catalog();
        let names: Vec<&str> = task_catalog
            .release_jobs(0)
            .iter()
            .map(|job| job.task_name())
            .collect();
        assert_eq!(
            names,
            vec![
                "Video Stream Handler",
                "Gimbal Sync",
                "Controller Monitor",
                "Telemetry Watchdog",
                "LTE Handler",
                "Fail-Safe Switch"
            ]
        );
        let names: Vec<&str> = task_catalog
            .release_jobs(20)
            .iter()
            .map(|job| job.task_name())
            .collect();
        assert_eq!(
            names,
            vec!["Gimbal Sync", "Controller Monitor", "Fail-Safe Switch"]
        );
    }

    #[test]
    fn test_task_catalog_empty() {
        let task_catalog = TaskCatalog::new(vec![]).unwrap();
        assert!(task_catalog.is_empty());
        assert!(task_catalog.release_jobs(0).is_empty());
        assert_eq!(task_catalog.total_utilization(), 0.0);
    }
}
