use std::fs::{self, OpenOptions};
use std::io::{self, Write};

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde_derive::{Deserialize, Serialize};

use crate::schedulability::SchedulabilityAnalysis;
use crate::task::{PeriodicTask, TaskCatalog};

#[derive(Serialize, Deserialize)]
struct TaskSetInfo {
    total_utilization: f64,
    each_task_info: Vec<PeriodicTask>,
}

#[derive(Serialize, Deserialize)]
struct SchedulabilityResult {
    schedulability_result: SchedulabilityAnalysis,
}

pub fn create_yaml_file(folder_path: &str, file_name: &str) -> String {
    if fs::metadata(folder_path).is_err() {
        let _ = fs::create_dir_all(folder_path);
        info!("Created folder: {}", folder_path);
    }
    let file_path = format!("{}/{}.yaml", folder_path, file_name);
    if let Err(err) = fs::File::create(&file_path) {
        warn!("Failed to create file: {}", err);
    }
    file_path
}

/// Creates `<folder_path>/<date>-<alg_name>-log.yaml`, stamped with the current UTC time.
pub fn create_scheduler_log_yaml_file(folder_path: &str, alg_name: &str) -> String {
    let now: DateTime<Utc> = Utc::now();
    let date = now.format("%Y-%m-%d-%H-%M-%S").to_string();
    let file_name = format!("{}-{}-log", date, alg_name);
    create_yaml_file(folder_path, &file_name)
}

pub fn append_info_to_yaml(file_path: &str, info: &str) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(file_path)?;
    file.write_all(info.as_bytes())
}

pub fn dump_struct_to_yaml<T: serde::Serialize>(file_path: &str, value: &T) -> io::Result<()> {
    let yaml =
        serde_yaml::to_string(value).map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    append_info_to_yaml(file_path, &yaml)
}

pub fn dump_task_set_info_to_yaml(file_path: &str, task_catalog: &TaskCatalog) -> io::Result<()> {
    let task_set_info = TaskSetInfo {
        total_utilization: task_catalog.total_utilization(),
        each_task_info: task_catalog.iter().cloned().collect(),
    };
    dump_struct_to_yaml(file_path, &task_set_info)
}

pub fn dump_schedulability_result_to_yaml(
    file_path: &str,
    analysis: &SchedulabilityAnalysis,
) -> io::Result<()> {
    let result = SchedulabilityResult {
        schedulability_result: analysis.clone(),
    };
    dump_struct_to_yaml(file_path, &result)
}
