use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use ycsb_aggregate::commands::{
    execute_scalability, execute_workloads, ScalabilityArgs, WorkloadsArgs,
};
use ycsb_aggregate::parser::Phase;

const DEFAULT_ONLY_CONFIG: &str = "methods = [\"default\"]\nworkloads = [\"load\", \"b\"]\n";

fn write_log(path: PathBuf, body: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("experiment.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_workloads_default_output_path() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), DEFAULT_ONLY_CONFIG);
    write_log(
        dir.path().join("run1/default_workloadb_ycsb_result.txt"),
        "Load throughput(ops/sec): 50.0\nRun throughput(ops/sec): 100.0\n",
    );

    let args = WorkloadsArgs {
        runs: 1,
        exp_dir: dir.path().to_path_buf(),
        config: Some(config),
        ..Default::default()
    };

    let output = execute_workloads(args).unwrap();
    assert_eq!(output, dir.path().join("ycsb_agg_exp.txt"));
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "workloads,default\nload,25.0\nb,100.0\n"
    );
}

#[test]
fn test_workloads_missing_file_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), DEFAULT_ONLY_CONFIG);
    write_log(
        dir.path().join("run1/default_workloadb_ycsb_result.txt"),
        "Run throughput(ops/sec): 100.0\n",
    );

    let args = WorkloadsArgs {
        runs: 2,
        exp_dir: dir.path().to_path_buf(),
        config: Some(config),
        ..Default::default()
    };

    assert!(execute_workloads(args).is_err());
    assert!(!dir.path().join("ycsb_agg_exp.txt").exists());
}

#[test]
fn test_workloads_strict_rejects_missing_marker() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), DEFAULT_ONLY_CONFIG);
    write_log(
        dir.path().join("run1/default_workloadb_ycsb_result.txt"),
        "Run throughput(ops/sec): 100.0\n",
    );

    let args = WorkloadsArgs {
        runs: 1,
        exp_dir: dir.path().to_path_buf(),
        config: Some(config),
        strict: true,
        ..Default::default()
    };

    assert!(execute_workloads(args).is_err());
}

#[test]
fn test_scalability_untagged_layout() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        dir.path(),
        r#"
methods = ["mnemosyne", "default"]
[[scales]]
name = "scale1x"
label = "10GB"
[[scales]]
name = "scale2x"
label = "20GB"
"#,
    );
    for scale in ["scale1x", "scale2x"] {
        for (method, value) in [("mnemosyne", 300.0), ("default", 100.0)] {
            write_log(
                dir.path()
                    .join(format!("{}/run1/{}_workloadb_ycsb_result.txt", scale, method)),
                &format!("Run throughput(ops/sec): {}\n", value),
            );
        }
    }

    let args = ScalabilityArgs {
        runs: 1,
        exp_dir: dir.path().to_path_buf(),
        dynamic: true,
        config: Some(config),
        ..Default::default()
    };

    let output = execute_scalability(args).unwrap();
    assert_eq!(
        output,
        dir.path().join("ycsb_scalability_workloadb_dynamic_exp.txt")
    );
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "scales,mnemosyne,default\n10GB,300.0,100.0\n20GB,300.0,100.0\n"
    );
}

#[test]
fn test_scalability_tagged_layout_load_phase() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        dir.path(),
        "methods = [\"default\"]\n[[scales]]\nname = \"scale1x\"\nlabel = \"10GB\"\n",
    );
    for run in 1..=2 {
        write_log(
            dir.path().join(format!(
                "scale1x-ycsb-no-dynamic/run{}/default_workloadb_ycsb_result.txt",
                run
            )),
            &format!(
                "Load throughput(ops/sec): {}\nRun throughput(ops/sec): 1.0\n",
                run as f64 * 10.0
            ),
        );
    }

    let args = ScalabilityArgs {
        runs: 2,
        exp_dir: dir.path().to_path_buf(),
        dynamic: false,
        tag: Some("ycsb".to_string()),
        phase: Some(Phase::Load),
        config: Some(config),
        ..Default::default()
    };

    let output = execute_scalability(args).unwrap();
    assert_eq!(
        output,
        dir.path().join("ycsb_scalability_workloadb_no_dynamic_exp.txt")
    );
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "scales,default\n10GB,15.0\n"
    );
}

#[test]
fn test_output_override() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), DEFAULT_ONLY_CONFIG);
    write_log(
        dir.path().join("run1/default_workloadb_ycsb_result.txt"),
        "Run throughput(ops/sec): 12345.678\n",
    );
    let target = dir.path().join("reports/custom.csv");

    let args = WorkloadsArgs {
        runs: 1,
        exp_dir: dir.path().to_path_buf(),
        config: Some(config),
        output: Some(target.clone()),
        ..Default::default()
    };

    assert_eq!(execute_workloads(args).unwrap(), target);
    assert_eq!(
        fs::read_to_string(target).unwrap(),
        "workloads,default\nload,0.0\nb,12345.68\n"
    );
}
