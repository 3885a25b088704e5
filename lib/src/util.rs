use num_integer::Integer;

use crate::task::TaskCatalog;

fn checked_lcm(a: i64, b: i64) -> Option<i64> {
    (a / a.gcd(&b)).checked_mul(b)
}

/// Least common multiple of all periods, or `None` if it overflows `i64`.
/// An empty catalog has a hyperperiod of 1.
pub fn get_hyper_period(task_catalog: &TaskCatalog) -> Option<i64> {
    task_catalog
        .iter()
        .try_fold(1i64, |hyper_period, task| {
            checked_lcm(hyper_period, task.period() as i64)
        })
}
