//! This module contains the definition of a released job and its processing state
use crate::task::PeriodicTask;

///state of a job after being processed for one time unit
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum JobState {
    Continue,
    Done,
}

/// One release of a periodic task. Borrows its task from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job<'a> {
    task_id: usize,
    task: &'a PeriodicTask,
    release_time: i32,
    absolute_deadline: i32,
    remain_proc_time: i32,
}

impl<'a> Job<'a> {
    pub fn new(task_id: usize, task: &'a PeriodicTask, release_time: i32) -> Self {
        Self {
            task_id,
            task,
            release_time,
            absolute_deadline: release_time + task.period(),
            remain_proc_time: task.wcet(),
        }
    }

    pub fn task_id(&self) -> usize {
        self.task_id
    }

    pub fn task(&self) -> &'a PeriodicTask {
        self.task
    }

    pub fn task_name(&self) -> &'a str {
        self.task.name()
    }

    pub fn release_time(&self) -> i32 {
        self.release_time
    }

    pub fn absolute_deadline(&self) -> i32 {
        self.absolute_deadline
    }

    pub fn remain_proc_time(&self) -> i32 {
        self.remain_proc_time
    }

    pub fn deadline_missed(&self, current_time: i32) -> bool {
        self.absolute_deadline <= current_time
    }

    /// EDF order: earliest deadline, then earliest release, then task name.
    pub fn priority_key(&self) -> (i32, i32, &'a str) {
        (self.absolute_deadline, self.release_time, self.task_name())
    }

    pub fn process(&mut self) -> JobState {
        self.remain_proc_time -= 1;
        if self.remain_proc_time == 0 {
            JobState::Done
        } else {
            JobState::Continue
        }
    }
}
