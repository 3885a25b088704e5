//! Error types for task-set configuration and loading.
//!
//! Configuration problems are detected before the first simulated time step.
//! Deadline misses are not errors; they are reported through the scheduler log.

use std::fmt;
use std::io;

use yaml_rust::ScanError;

/// A task catalog or simulation request that cannot be run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The task name is empty.
    EmptyTaskName,
    /// The task name collides with the idle marker of the timeline.
    ReservedTaskName { name: String },
    /// Two tasks share the same name.
    DuplicateTaskName { name: String },
    /// `wcet` must be strictly positive.
    NonPositiveWcet { name: String, wcet: i32 },
    /// `period` must be strictly positive.
    NonPositivePeriod { name: String, period: i32 },
    /// The simulation horizon must not be negative.
    NegativeHorizon { horizon: i32 },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTaskName => write!(f, "task name must not be empty"),
            Self::ReservedTaskName { name } => {
                write!(f, "task name '{name}' is reserved for the idle marker")
            }
            Self::DuplicateTaskName { name } => write!(f, "duplicate task name '{name}'"),
            Self::NonPositiveWcet { name, wcet } => {
                write!(f, "task '{name}' has non-positive wcet {wcet}")
            }
            Self::NonPositivePeriod { name, period } => {
                write!(f, "task '{name}' has non-positive period {period}")
            }
            Self::NegativeHorizon { horizon } => {
                write!(f, "simulation horizon {horizon} is negative")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Errors raised while building a task catalog from a YAML file.
#[derive(Debug)]
pub enum TaskSetLoadError {
    /// Only `.yaml` and `.yml` files are accepted.
    InvalidFileType { file_path: String },
    /// The file could not be read.
    Io(io::Error),
    /// The file is not valid YAML.
    Yaml(ScanError),
    /// The file holds no `tasks` sequence.
    MissingTaskList,
    /// A task entry lacks a field or holds a value of the wrong type.
    InvalidField { index: usize, field: &'static str },
    /// The parsed tasks do not form a valid catalog.
    Configuration(ConfigurationError),
}

impl fmt::Display for TaskSetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFileType { file_path } => write!(f, "invalid file type: {file_path}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Yaml(err) => write!(f, "YAML error: {err}"),
            Self::MissingTaskList => write!(f, "YAML file has no 'tasks' sequence"),
            Self::InvalidField { index, field } => {
                write!(f, "task #{index} has a missing or invalid '{field}' field")
            }
            Self::Configuration(err) => write!(f, "invalid task set: {err}"),
        }
    }
}

impl std::error::Error for TaskSetLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Yaml(err) => Some(err),
            Self::Configuration(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TaskSetLoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ScanError> for TaskSetLoadError {
    fn from(err: ScanError) -> Self {
        Self::Yaml(err)
    }
}

impl From<ConfigurationError> for TaskSetLoadError {
    fn from(err: ConfigurationError) -> Self {
        Self::Configuration(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_configuration_error_display() {
        let err = ConfigurationError::NonPositivePeriod {
            name: "T".to_string(),
            period: 0,
        };
        assert_eq!(err.to_string(), "task 'T' has non-positive period 0");
    }

    #[test]
    fn test_task_set_load_error_source_configuration() {
        let err = TaskSetLoadError::from(ConfigurationError::EmptyTaskName);
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "invalid task set: task name must not be empty"
        );
    }

    #[test]
    fn test_task_set_load_error_source_none() {
        let err = TaskSetLoadError::MissingTaskList;
        assert!(err.source().is_none());
    }
}
