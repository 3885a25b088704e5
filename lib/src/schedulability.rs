//! Utilization-based schedulability analysis for uniprocessor EDF.
use serde_derive::{Deserialize, Serialize};

use crate::{task::TaskCatalog, util::get_hyper_period};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulabilityAnalysis {
    pub total_utilization: f64,
    /// `None` when the least common multiple of the periods overflows.
    pub hyper_period: Option<i64>,
    pub schedulable: bool,
}

/// Applies the Liu & Layland bound `U <= 1` to the task catalog.
///
/// The test ignores any simulation horizon. A simulation shorter than the
/// hyperperiod can show no misses for a set this function rejects.
///
/// # Arguments
///
/// * `task_catalog` - validated task catalog
///
/// # Returns
///
/// * `SchedulabilityAnalysis` - total utilization, hyperperiod and verdict
///
/// # Example
///
/// ```
/// use lib::schedulability::analyze;
/// use lib::task::{PeriodicTask, TaskCatalog};
///
/// let task_catalog = TaskCatalog::new(vec![
///     PeriodicTask::new("A", 1, 2),
///     PeriodicTask::new("B", 2, 4),
/// ])
/// .unwrap();
/// let analysis = analyze(&task_catalog);
/// assert_eq!(analysis.total_utilization, 1.0);
/// assert!(analysis.schedulable);
/// ```
pub fn analyze(task_catalog: &TaskCatalog) -> SchedulabilityAnalysis {
    let total_utilization = task_catalog.total_utilization();
    let hyper_period = get_hyper_period(task_catalog);
    // sum(wcet * H / period) <= H is U <= 1 without float rounding
    let schedulable = hyper_period
        .and_then(|h| demand_in_hyper_period(task_catalog, h).map(|demand| demand <= h))
        .unwrap_or(total_utilization <= 1.0);
    SchedulabilityAnalysis {
        total_utilization,
        hyper_period,
        schedulable,
    }
}

fn demand_in_hyper_period(task_catalog: &TaskCatalog, hyper_period: i64) -> Option<i64> {
    task_catalog.iter().try_fold(0i64, |demand, task| {
        (hyper_period / task.period() as i64)
            .checked_mul(task.wcet() as i64)
            .and_then(|task_demand| demand.checked_add(task_demand))
    })
}

/// Whether a simulation of `horizon` steps spans at least one full hyperperiod.
pub fn horizon_covers_hyper_period(task_catalog: &TaskCatalog, horizon: i32) -> bool {
    get_hyper_period(task_catalog).map_or(false, |hyper_period| horizon as i64 >= hyper_period)
}
