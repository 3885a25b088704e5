use std::io;

use lib::log::SchedulerLog;
use lib::output_log::{dump_schedulability_result_to_yaml, dump_task_set_info_to_yaml};
use lib::schedulability::SchedulabilityAnalysis;
use lib::task::TaskCatalog;

pub fn dump_edf_result_to_file(
    file_path: &str,
    task_catalog: &TaskCatalog,
    analysis: &SchedulabilityAnalysis,
    scheduler_log: &SchedulerLog,
) -> io::Result<()> {
    dump_task_set_info_to_yaml(file_path, task_catalog)?;
    dump_schedulability_result_to_yaml(file_path, analysis)?;
    scheduler_log.dump_log_to_yaml(file_path)?;
    scheduler_log.dump_timeline_segments_to_yaml(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::edf_scheduler::run;
    use lib::output_log::create_yaml_file;
    use lib::schedulability::analyze;
    use lib::tests_helper::{create_drone_task_catalog, create_overloaded_task_catalog};
    use std::fs::remove_file;
    use yaml_rust::YamlLoader;

    #[test]
    fn test_dump_edf_result_to_file_normal() {
        let task_catalog = create_drone_task_catalog();
        let scheduler_log = run(&task_catalog, 100).unwrap();
        let file_path = create_yaml_file("../outputs", "test_dump_edf_result_normal");
        dump_edf_result_to_file(&file_path, &task_catalog, &analyze(&task_catalog), &scheduler_log)
            .unwrap();

        let file_contents = std::fs::read_to_string(&file_path).unwrap();
        let yaml_doc = &YamlLoader::load_from_str(&file_contents).unwrap()[0];

        assert_eq!(yaml_doc["each_task_info"].as_vec().unwrap().len(), 6);
        assert_eq!(
            yaml_doc["schedulability_result"]["schedulable"].as_bool(),
            Some(true)
        );
        assert_eq!(yaml_doc["horizon"].as_i64(), Some(100));
        assert_eq!(yaml_doc["timeline"].as_vec().unwrap().len(), 100);
        assert_eq!(yaml_doc["timeline"][0].as_str(), Some("Fail-Safe Switch"));
        assert!(yaml_doc["deadline_misses"].as_vec().unwrap().is_empty());
        assert_eq!(
            yaml_doc["timeline_segments"][1]["label"].as_str(),
            Some("Controller Monitor")
        );

        remove_file(file_path).unwrap();
    }

    #[test]
    fn test_dump_edf_result_to_file_with_misses() {
        let task_catalog = create_overloaded_task_catalog();
        let scheduler_log = run(&task_catalog, 7).unwrap();
        let file_path = create_yaml_file("../outputs", "test_dump_edf_result_with_misses");
        dump_edf_result_to_file(&file_path, &task_catalog, &analyze(&task_catalog), &scheduler_log)
            .unwrap();

        let file_contents = std::fs::read_to_string(&file_path).unwrap();
        let yaml_doc = &YamlLoader::load_from_str(&file_contents).unwrap()[0];

        assert_eq!(
            yaml_doc["schedulability_result"]["schedulable"].as_bool(),
            Some(false)
        );
        let deadline_misses = yaml_doc["deadline_misses"].as_vec().unwrap();
        assert_eq!(deadline_misses.len(), 2);
        assert_eq!(deadline_misses[1]["miss_time"].as_i64(), Some(6));
        assert_eq!(yaml_doc["task_logs"][0]["pending_jobs"].as_i64(), Some(1));

        remove_file(file_path).unwrap();
    }
}
