use std::{collections::VecDeque, fmt, io};

use log::debug;
use serde_derive::{Deserialize, Serialize};

use crate::{
    job::Job,
    output_log::dump_struct_to_yaml,
    task::{PeriodicTask, TaskCatalog},
};

/// Timeline label of a step with nothing to run.
pub const IDLE_LABEL: &str = "IDLE";

/// What the processor did during one time step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimelineEntry {
    Idle,
    Running(String),
}

impl TimelineEntry {
    pub fn label(&self) -> &str {
        match self {
            TimelineEntry::Idle => IDLE_LABEL,
            TimelineEntry::Running(task_name) => task_name,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, TimelineEntry::Idle)
    }
}

impl fmt::Display for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for TimelineEntry {
    fn from(label: String) -> Self {
        if label == IDLE_LABEL {
            TimelineEntry::Idle
        } else {
            TimelineEntry::Running(label)
        }
    }
}

impl From<TimelineEntry> for String {
    fn from(entry: TimelineEntry) -> Self {
        match entry {
            TimelineEntry::Idle => IDLE_LABEL.to_owned(),
            TimelineEntry::Running(task_name) => task_name,
        }
    }
}

/// A contiguous run of identical timeline entries over `[start_time, end_time)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    pub label: String,
    pub start_time: i32,
    pub end_time: i32,
}

impl TimelineSegment {
    pub fn length(&self) -> i32 {
        self.end_time - self.start_time
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineMiss {
    pub task_name: String,
    pub release_time: i32,
    pub absolute_deadline: i32,
    pub miss_time: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLog {
    pub task_name: String,
    pub released_jobs: i32,
    pub completed_jobs: i32,
    pub missed_jobs: i32,
    /// Jobs still in the ready queue when the horizon is reached.
    pub pending_jobs: i32,
    pub total_proc_time: i32,
}

impl TaskLog {
    pub fn new(task: &PeriodicTask) -> Self {
        Self {
            task_name: task.name().clone(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessorLog {
    pub busy_time: i32,
    pub idle_time: i32,
    pub utilization: f32,
}

impl ProcessorLog {
    pub fn calculate_utilization(&mut self, schedule_length: i32) {
        self.utilization = if schedule_length > 0 {
            self.busy_time as f32 / schedule_length as f32
        } else {
            0.0
        };
    }
}

/// Everything one simulation run produces. Built fresh per run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchedulerLog {
    pub horizon: i32,
    pub timeline: Vec<TimelineEntry>,
    pub deadline_misses: Vec<DeadlineMiss>,
    pub task_logs: Vec<TaskLog>,
    pub processor_log: ProcessorLog,
}

impl SchedulerLog {
    pub fn new(task_catalog: &TaskCatalog, horizon: i32) -> Self {
        Self {
            horizon,
            timeline: Vec::with_capacity(horizon.max(0) as usize),
            deadline_misses: Vec::new(),
            task_logs: task_catalog.iter().map(TaskLog::new).collect(),
            processor_log: ProcessorLog::default(),
        }
    }

    pub fn write_release_log(&mut self, job: &Job) {
        debug!(
            "t={}: released {} (deadline {})",
            job.release_time(),
            job.task_name(),
            job.absolute_deadline()
        );
        self.task_logs[job.task_id()].released_jobs += 1;
    }

    pub fn write_deadline_miss_log(&mut self, job: &Job, current_time: i32) {
        debug!(
            "t={}: {} released at {} missed its deadline {}",
            current_time,
            job.task_name(),
            job.release_time(),
            job.absolute_deadline()
        );
        self.task_logs[job.task_id()].missed_jobs += 1;
        self.deadline_misses.push(DeadlineMiss {
            task_name: job.task_name().to_owned(),
            release_time: job.release_time(),
            absolute_deadline: job.absolute_deadline(),
            miss_time: current_time,
        });
    }

    pub fn write_execution_log(&mut self, job: &Job) {
        self.task_logs[job.task_id()].total_proc_time += 1;
        self.processor_log.busy_time += 1;
        self.timeline
            .push(TimelineEntry::Running(job.task_name().to_owned()));
    }

    pub fn write_finishing_job_log(&mut self, job: &Job) {
        self.task_logs[job.task_id()].completed_jobs += 1;
    }

    pub fn write_idle_log(&mut self) {
        self.processor_log.idle_time += 1;
        self.timeline.push(TimelineEntry::Idle);
    }

    pub fn write_pending_log(&mut self, ready_queue: &VecDeque<Job>) {
        for job in ready_queue.iter() {
            self.task_logs[job.task_id()].pending_jobs += 1;
        }
    }

    pub fn write_scheduling_log(&mut self) {
        self.processor_log.calculate_utilization(self.horizon);
    }

    pub fn get_task_log(&self, task_name: &str) -> Option<&TaskLog> {
        self.task_logs
            .iter()
            .find(|task_log| task_log.task_name == task_name)
    }

    /// Run-length compressed timeline, the block layout a Gantt chart is drawn from.
    pub fn timeline_segments(&self) -> Vec<TimelineSegment> {
        let mut segments: Vec<TimelineSegment> = Vec::new();
        for (current_time, entry) in self.timeline.iter().enumerate() {
            let current_time = current_time as i32;
            match segments.last_mut() {
                Some(segment) if segment.label == entry.label() => {
                    segment.end_time = current_time + 1;
                }
                _ => segments.push(TimelineSegment {
                    label: entry.label().to_owned(),
                    start_time: current_time,
                    end_time: current_time + 1,
                }),
            }
        }
        segments
    }

    pub fn dump_log_to_yaml(&self, file_path: &str) -> io::Result<()> {
        dump_struct_to_yaml(file_path, self)
    }

    pub fn dump_timeline_segments_to_yaml(&self, file_path: &str) -> io::Result<()> {
        #[derive(Serialize)]
        struct TimelineSegments {
            timeline_segments: Vec<TimelineSegment>,
        }
        dump_struct_to_yaml(
            file_path,
            &TimelineSegments {
                timeline_segments: self.timeline_segments(),
            },
        )
    }
}
