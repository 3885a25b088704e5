pub mod edf_scheduler;
pub mod error;
pub mod job;
pub mod log;
pub mod output_log;
pub mod schedulability;
pub mod scheduler;
pub mod task;
pub mod task_set_creator;
#[cfg(any(test, feature = "test-helpers"))]
pub mod tests_helper;
pub mod util;
