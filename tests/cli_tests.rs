use assert_cmd::Command;
use predicates::str::contains as str_contains;
use std::io::Write;
use tempfile::NamedTempFile;

fn project_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

#[allow(deprecated)]
fn run_cli(path: &std::path::Path) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.arg(path).assert()
}

#[test]
fn cli_prints_both_completion_times() {
    let file = project_file(
        ".json",
        r#"{
            "tasks": [
                {"id": "T1", "duration": 5},
                {"id": "T2", "duration": 3, "dependencies": ["T1"]},
                {"id": "T3", "duration": 2, "dependencies": ["T1"]},
                {"id": "T4", "duration": 4, "dependencies": ["T2", "T3"]}
            ]
        }"#,
    );

    run_cli(file.path())
        .success()
        .stdout(str_contains(
            "Earliest time all tasks will be completed: 12",
        ))
        .stdout(str_contains("Latest time all tasks will be completed: 12"));
}

#[test]
fn cli_renders_the_task_table() {
    let file = project_file(
        ".json",
        r#"{"tasks": [{"id": "solo", "duration": 7}]}"#,
    );

    let assert = run_cli(file.path()).success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(output.contains("| id"), "missing header:\n{output}");
    assert!(output.contains("solo"), "missing task row:\n{output}");
    assert!(output.contains("total_float"), "missing column:\n{output}");
}

#[test]
fn cli_fails_with_a_descriptive_message_on_a_cycle() {
    let file = project_file(
        ".json",
        r#"{
            "tasks": [
                {"id": "a", "duration": 1, "dependencies": ["b"]},
                {"id": "b", "duration": 1, "dependencies": ["a"]}
            ]
        }"#,
    );

    run_cli(file.path())
        .failure()
        .code(1)
        .stderr(str_contains("dependency cycle detected through task"));
}

#[test]
fn cli_fails_on_an_undeclared_dependency() {
    let file = project_file(
        ".json",
        r#"{"tasks": [{"id": "a", "duration": 1, "dependencies": ["ghost"]}]}"#,
    );

    run_cli(file.path())
        .failure()
        .code(1)
        .stderr(str_contains("undeclared task 'ghost'"));
}

#[test]
#[allow(deprecated)]
fn cli_without_arguments_prints_usage() {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.assert().failure().code(2).stderr(str_contains("Usage"));
}
