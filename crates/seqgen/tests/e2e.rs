//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn seqgen() -> Command {
    Command::cargo_bin("seqgen").expect("binary not found")
}

#[test]
fn help_flag() {
    seqgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sequence"));
}

#[test]
fn version_flag() {
    seqgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("seqgen"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn default_run() {
    seqgen()
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequence: Fibonacci"))
        .stdout(predicate::str::contains("Fibonacci(10) = 55"));
}

#[test]
fn quiet_f10() {
    seqgen()
        .args(["-n", "10", "-q"])
        .assert()
        .success()
        .stdout("55\n");
}

#[test]
fn quiet_f0() {
    seqgen().args(["-n", "0", "-q"]).assert().success().stdout("0\n");
}

#[test]
fn quiet_f1() {
    seqgen().args(["-n", "1", "-q"]).assert().success().stdout("1\n");
}

#[test]
fn quiet_f100_crosses_u64() {
    seqgen()
        .args(["-n", "100", "-q"])
        .assert()
        .success()
        .stdout("354224848179261915075\n");
}

#[test]
fn lucas_sequence() {
    seqgen()
        .args(["-s", "lucas", "-n", "10", "-q"])
        .assert()
        .success()
        .stdout("123\n");
}

#[test]
fn fib_alias() {
    seqgen()
        .args(["-s", "fib", "-n", "20", "-q"])
        .assert()
        .success()
        .stdout("6765\n");
}

#[test]
fn unknown_sequence_fails_with_config_code() {
    seqgen()
        .args(["-s", "collatz"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("unknown sequence"));
}

#[test]
fn start_after_end_fails_with_config_code() {
    seqgen()
        .args(["--start", "10", "-n", "5"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("start must be <= end"));
}

#[test]
fn start_limits_display() {
    seqgen()
        .args(["--start", "5", "-n", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci(5) = 5"))
        .stdout(predicate::str::contains("Fibonacci(9) = 34"))
        .stdout(predicate::str::contains("Fibonacci(0)").not());
}

#[test]
fn details_mode() {
    seqgen()
        .args(["-n", "10", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Last term digits: 2"));
}

#[test]
fn verbose_mode() {
    seqgen().args(["-n", "100", "-v"]).assert().success();
}

#[test]
fn json_output() {
    let output = seqgen().args(["-n", "10", "--json"]).output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 11);
    assert_eq!(records[0]["n"], 0);
    assert_eq!(records[0]["term"], "0");
    assert_eq!(records[10]["term"], "55");
}

#[test]
fn list_sequences() {
    seqgen()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibonacci"))
        .stdout(predicate::str::contains("lucas"));
}

#[test]
fn env_var_n() {
    seqgen()
        .env("SEQGEN_N", "12")
        .arg("-q")
        .assert()
        .success()
        .stdout("144\n");
}

#[test]
fn env_var_sequence() {
    seqgen()
        .env("SEQGEN_SEQUENCE", "lucas")
        .args(["-n", "7", "-q"])
        .assert()
        .success()
        .stdout("29\n");
}

#[test]
fn output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("terms.txt");
    seqgen()
        .args(["-n", "10", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "0");
    assert_eq!(lines[10], "55");
}

#[test]
fn shell_completion_bash() {
    seqgen()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seqgen"));
}

#[test]
fn shell_completion_zsh() {
    seqgen()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seqgen"));
}
