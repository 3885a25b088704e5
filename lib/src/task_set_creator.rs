//! Build a task catalog from a yaml file
use std::fs;

use log::debug;
use yaml_rust::{Yaml, YamlLoader};

use crate::error::TaskSetLoadError;
use crate::task::{PeriodicTask, TaskCatalog};

fn load_yaml(file_path: &str) -> Result<Vec<Yaml>, TaskSetLoadError> {
    if !file_path.ends_with(".yaml") && !file_path.ends_with(".yml") {
        return Err(TaskSetLoadError::InvalidFileType {
            file_path: file_path.to_owned(),
        });
    }
    let file_content = fs::read_to_string(file_path)?;
    Ok(YamlLoader::load_from_str(&file_content)?)
}

fn get_i32_field(task: &Yaml, index: usize, field: &'static str) -> Result<i32, TaskSetLoadError> {
    task[field]
        .as_i64()
        .and_then(|value| i32::try_from(value).ok())
        .ok_or(TaskSetLoadError::InvalidField { index, field })
}

/// load yaml file and return a task catalog
///
/// # Arguments
///
/// *  `file_path` - yaml file path, holding a `tasks` sequence of `{name, wcet, period}` entries
///
/// # Returns
///
/// *  `task_catalog` - validated task catalog, or the first problem found
///
/// # Example
///
/// ```
/// use lib::task_set_creator::create_task_catalog_from_yaml;
///
/// let task_catalog =
///     create_task_catalog_from_yaml("tests/sample_task_sets/drone_task_set.yaml").unwrap();
/// let first_task = task_catalog.iter().next().unwrap();
///
/// let task_num = task_catalog.len();
/// let task_name = first_task.name();
/// let task_period = first_task.period();
/// ```
pub fn create_task_catalog_from_yaml(file_path: &str) -> Result<TaskCatalog, TaskSetLoadError> {
    let yaml_docs = load_yaml(file_path)?;
    let tasks = yaml_docs
        .first()
        .and_then(|yaml_doc| yaml_doc["tasks"].as_vec())
        .ok_or(TaskSetLoadError::MissingTaskList)?;

    let mut periodic_tasks = Vec::with_capacity(tasks.len());
    for (index, task) in tasks.iter().enumerate() {
        let name = task["name"]
            .as_str()
            .ok_or(TaskSetLoadError::InvalidField {
                index,
                field: "name",
            })?;
        let wcet = get_i32_field(task, index, "wcet")?;
        let period = get_i32_field(task, index, "period")?;
        periodic_tasks.push(PeriodicTask::new(name, wcet, period));
    }
    debug!("Loaded {} tasks from {}", periodic_tasks.len(), file_path);

    Ok(TaskCatalog::new(periodic_tasks)?)
}
