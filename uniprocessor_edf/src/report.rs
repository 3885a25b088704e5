//! Plain-text report of one simulation run.
use std::fmt::Write;

use lib::{log::SchedulerLog, schedulability::SchedulabilityAnalysis, task::TaskCatalog};

fn percentage(part: i32, whole: i32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

pub fn format_report(
    task_catalog: &TaskCatalog,
    analysis: &SchedulabilityAnalysis,
    scheduler_log: &SchedulerLog,
) -> String {
    let mut report = String::new();
    let horizon = scheduler_log.horizon;

    let _ = writeln!(report, "Task set:");
    for task in task_catalog.iter() {
        let _ = writeln!(
            report,
            "- {} (WCET={}, T={})",
            task.name(),
            task.wcet(),
            task.period()
        );
    }

    let _ = writeln!(
        report,
        "Total CPU utilization: {:.3} ({:.1}%)",
        analysis.total_utilization,
        analysis.total_utilization * 100.0
    );
    if analysis.schedulable {
        let _ = writeln!(report, "The task set is schedulable under EDF.");
    } else {
        let _ = writeln!(report, "The task set is not schedulable: the CPU is overloaded.");
    }

    let idle_time = scheduler_log.processor_log.idle_time;
    let busy_time = scheduler_log.processor_log.busy_time;
    let _ = writeln!(report, "\nScheduling analysis:");
    let _ = writeln!(report, "Simulation time: {} ms", horizon);
    let _ = writeln!(
        report,
        "CPU idle time: {} ms ({:.1}%)",
        idle_time,
        percentage(idle_time, horizon)
    );
    let _ = writeln!(
        report,
        "CPU busy time: {} ms ({:.1}%)",
        busy_time,
        percentage(busy_time, horizon)
    );

    if scheduler_log.deadline_misses.is_empty() {
        let _ = writeln!(report, "\nNo task missed its deadline.");
    } else {
        let _ = writeln!(report, "\nTasks that missed their deadline:");
        for miss in scheduler_log.deadline_misses.iter() {
            let _ = writeln!(
                report,
                "- {} (Release: {} ms, Deadline: {} ms, Missed at: {} ms)",
                miss.task_name, miss.release_time, miss.absolute_deadline, miss.miss_time
            );
        }
    }

    let _ = writeln!(report, "\nTimeline:");
    for segment in scheduler_log.timeline_segments() {
        let _ = writeln!(
            report,
            "[{:>4}, {:>4}) {}",
            segment.start_time, segment.end_time, segment.label
        );
    }
    report
}
