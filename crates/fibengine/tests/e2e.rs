//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibengine() -> Command {
    let mut cmd = Command::cargo_bin("fibengine").expect("binary not found");
    cmd.env_remove("FIBENGINE_N").env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag() {
    fibengine()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    fibengine()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibengine"));
}

#[test]
fn compute_f100_fast() {
    fibengine()
        .args(["-n", "100", "--algo", "fast", "-q"])
        .assert()
        .success()
        .stdout("354224848179261915075\n");
}

#[test]
fn compute_f100_linear() {
    fibengine()
        .args(["-n", "100", "--algo", "linear", "-q"])
        .assert()
        .success()
        .stdout("354224848179261915075\n");
}

#[test]
fn compute_f0_and_f1() {
    fibengine()
        .args(["-n", "0", "-q"])
        .assert()
        .success()
        .stdout("0\n");
    fibengine()
        .args(["-n", "1", "-q"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn default_index_is_1000() {
    fibengine()
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "43466557686937456435688527675040625802564",
        ));
}

#[test]
fn compute_f10_all_algos() {
    fibengine()
        .args(["-n", "10", "--algo", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LinearAccumulation"))
        .stdout(predicate::str::contains("FastDoubling"))
        .stdout(predicate::str::contains("F(10) = 55"));
}

#[test]
fn verbose_and_details() {
    fibengine()
        .args(["-n", "1000", "-v", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ns"))
        .stdout(predicate::str::contains("Result digits: 209"));
}

#[test]
fn long_result_truncated_without_verbose() {
    fibengine()
        .args(["-n", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(209 digits)"));
}

#[test]
fn invalid_algo_is_config_error() {
    fibengine()
        .args(["-n", "100", "--algo", "matrix"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown algorithm"));
}

#[test]
fn index_beyond_bound_is_config_error() {
    fibengine()
        .args(["-n", "10001"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("exceeds maximum 10000"));
}

#[test]
fn index_beyond_bound_with_clients_is_config_error() {
    fibengine()
        .args(["-n", "20000", "--clients", "4"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("exceeds maximum 10000"))
        .stdout(predicate::str::contains("clients completed").not());
    fibengine()
        .args(["-n", "20000", "--clients", "4", "--wait"])
        .assert()
        .code(4);
}

#[test]
fn compute_f10000() {
    fibengine()
        .args(["-n", "10000", "--algo", "all", "-q", "--verify"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "3364476487643178326662161200510754331030",
        ))
        .stdout(predicate::str::ends_with("059947366875\n"));
}

#[test]
fn output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("result.txt");
    fibengine()
        .args(["-n", "100", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "354224848179261915075\n");
}

#[test]
fn env_var_fibengine_n() {
    fibengine()
        .env("FIBENGINE_N", "42")
        .args(["-q", "--algo", "fast"])
        .assert()
        .success()
        .stdout("267914296\n");
}

#[test]
fn clients_waiting_all_complete() {
    fibengine()
        .args(["-n", "500", "--clients", "16", "--wait", "--algo", "all", "--verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("16/16 clients completed"));
}

#[test]
fn clients_without_wait_report_each_outcome() {
    fibengine()
        .args(["-n", "2000", "--clients", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/8 clients completed"));
}

#[test]
fn shell_completion_bash() {
    fibengine()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibengine"));
}

#[test]
fn shell_completion_zsh() {
    fibengine()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibengine"));
}
