mod outputs_result;
mod report;

use std::process;

use clap::Parser;
use lib::edf_scheduler::run;
use lib::output_log::create_scheduler_log_yaml_file;
use lib::schedulability::{analyze, horizon_covers_hyper_period};
use lib::task_set_creator::create_task_catalog_from_yaml;
use log::{error, info, warn};
use outputs_result::dump_edf_result_to_file;
use report::format_report;

#[derive(Parser)]
#[clap(
    name = "Uniprocessor_EDF",
    version = "1.0",
    about = "About:
    Simulates preemptive Earliest-Deadline-First scheduling of periodic tasks on one processor.
    Each task's period is also its relative deadline."
)]
struct ArgParser {
    ///Path to the task set YAML file.
    #[clap(short = 'f', long = "task_set_file_path", required = true)]
    task_set_file_path: String,
    ///Number of unit time steps to simulate.
    #[clap(short = 't', long = "horizon", default_value_t = 100)]
    horizon: i32,
    ///Path to output directory.
    #[clap(short = 'o', long = "output_dir_path", default_value = "../outputs")]
    output_dir_path: String,
}

fn main() {
    env_logger::init();
    let arg: ArgParser = ArgParser::parse();

    let task_catalog = match create_task_catalog_from_yaml(&arg.task_set_file_path) {
        Ok(task_catalog) => task_catalog,
        Err(err) => {
            error!("Failed to load {}: {}", arg.task_set_file_path, err);
            process::exit(1);
        }
    };

    let analysis = analyze(&task_catalog);
    if !horizon_covers_hyper_period(&task_catalog, arg.horizon) {
        warn!(
            "The horizon {} is shorter than the hyperperiod {:?}; the simulation may disagree with the utilization test.",
            arg.horizon, analysis.hyper_period
        );
    }

    let scheduler_log = match run(&task_catalog, arg.horizon) {
        Ok(scheduler_log) => scheduler_log,
        Err(err) => {
            error!("Invalid simulation request: {}", err);
            process::exit(1);
        }
    };

    print!("{}", format_report(&task_catalog, &analysis, &scheduler_log));

    let file_path = create_scheduler_log_yaml_file(&arg.output_dir_path, "edf");
    match dump_edf_result_to_file(&file_path, &task_catalog, &analysis, &scheduler_log) {
        Ok(()) => info!("Scheduler log written to {}", file_path),
        Err(err) => warn!("Failed to write {}: {}", file_path, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_parser_defaults() {
        let arg = ArgParser::try_parse_from(vec!["uniprocessor_edf", "-f", "tasks.yaml"]).unwrap();
        assert_eq!(arg.task_set_file_path, "tasks.yaml");
        assert_eq!(arg.horizon, 100);
        assert_eq!(arg.output_dir_path, "../outputs");
    }

    #[test]
    fn test_arg_parser_all_arguments() {
        let arg = ArgParser::try_parse_from(vec![
            "uniprocessor_edf",
            "--task_set_file_path",
            "tasks.yml",
            "-t",
            "3300",
            "-o",
            "/tmp/edf",
        ])
        .unwrap();
        assert_eq!(arg.horizon, 3300);
        assert_eq!(arg.output_dir_path, "/tmp/edf");
    }

    #[test]
    fn test_arg_parser_missing_task_set() {
        assert!(ArgParser::try_parse_from(vec!["uniprocessor_edf", "-t", "10"]).is_err());
    }
}
