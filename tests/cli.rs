use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const LOAD_CSV: &str = "header1\nheader2\n1000,5,10,3,7\n2000,8,15,4,9\nbadrow,x,y\n3000,12,20,6,11\n";

const REPORT: &str = "Running benchmark...\n\
                      Testing MinimalPerfectHash (static):\n\
                      \n\
                      性能比较结果\n\
                      算法                构建时间    查询时间\n\
                      MinimalPerfectHash  120         35\n\
                      SimpleHash          80          42\n\
                      ElasticHash         95          38\n\
                      FunnelHash          101         40\n";

/// Helper to create a hashviz command running inside `dir`
fn hashviz_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hashviz"));
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    hashviz_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plot hash table benchmark results"));
}

#[test]
fn test_missing_argument() {
    let dir = TempDir::new().unwrap();
    hashviz_cmd(&dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: hashviz <load_results_csv>"));
}

#[test]
fn test_load_chart() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("results.csv"), LOAD_CSV).unwrap();

    hashviz_cmd(&dir)
        .arg("results.csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping invalid line: badrow,x,y"))
        .stdout(predicate::str::contains(
            "Load comparison chart saved as load_comparison.png",
        ));

    assert!(dir.path().join("load_comparison.png").exists());
}

#[test]
fn test_load_subcommand() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("results.csv"), LOAD_CSV).unwrap();

    hashviz_cmd(&dir)
        .args(["load", "results.csv"])
        .assert()
        .success();

    assert!(dir.path().join("load_comparison.png").exists());
}

#[test]
fn test_load_without_data() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("empty.csv"), "header1\nheader2\n").unwrap();

    hashviz_cmd(&dir)
        .arg("empty.csv")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No valid data could be parsed from the CSV file",
        ));

    assert!(!dir.path().join("load_comparison.png").exists());
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    hashviz_cmd(&dir)
        .arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nonexistent.csv"));
}

#[test]
fn test_report_chart() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("benchmark.log"), REPORT).unwrap();

    hashviz_cmd(&dir)
        .args(["report", "benchmark.log"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Performance chart saved as hash_performance_comparison.png",
        ));

    assert!(dir.path().join("hash_performance_comparison.png").exists());
    assert!(!dir.path().join("load_comparison.png").exists());
}

#[test]
fn test_report_english_layout() {
    let dir = TempDir::new().unwrap();
    let report = "Performance Comparison Results\n\
                  Algorithm  Build Time  Lookup Time\n\
                  MinimalPerfectHash 1 2\nSimpleHash 3 4\nElasticHash 5 6\nFunnelHash 7 8\n";
    fs::write(dir.path().join("benchmark.log"), report).unwrap();

    hashviz_cmd(&dir)
        .args(["report", "benchmark.log", "--layout", "v1-en"])
        .assert()
        .success();

    assert!(dir.path().join("hash_performance_comparison.png").exists());
}

#[test]
fn test_report_without_table() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("benchmark.log"), "nothing to see\n").unwrap();

    hashviz_cmd(&dir)
        .args(["report", "benchmark.log"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "no performance comparison table found in benchmark.log",
        ))
        .stderr(predicate::str::contains("Error:").not());

    assert!(!dir.path().join("hash_performance_comparison.png").exists());
}

#[test]
fn test_report_unknown_layout() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("benchmark.log"), REPORT).unwrap();

    hashviz_cmd(&dir)
        .args(["report", "benchmark.log", "--layout", "v9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown report layout"));
}
