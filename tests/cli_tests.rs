//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DEFAULT_POOL_ID: &str = "96c03ef7-5e00-43b7-9353-2d0b02cfef3e";
const DEFAULT_CONT_ID: &str = "4e3ce803-b4ef-4b26-8166-70189b729269";
const DEFAULT_OBJECT_CONT_ID: &str = "0e2cc7c0-91e6-4810-957d-44b0c5df65f9";

/// Command running in an empty directory with no overrides reachable
fn isolated(tmp: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("daos-test-config"));
    cmd.current_dir(tmp.path())
        .env("HOME", tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path().join("xdg"))
        .env_remove("DAOS_TEST_CONFIG")
        .env_remove("pool_id")
        .env_remove("cont_id")
        .env_remove("object_cont_id")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_version() {
    let tmp = TempDir::new().expect("tmp");
    isolated(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("daos-test-config"));
}

#[test]
fn test_defaults_without_overrides() {
    let tmp = TempDir::new().expect("tmp");
    isolated(&tmp)
        .args(["--format", "properties"])
        .assert()
        .success()
        .stdout(format!(
            "pool_id={}\ncont_id={}\nobject_cont_id={}\n",
            DEFAULT_POOL_ID, DEFAULT_CONT_ID, DEFAULT_OBJECT_CONT_ID
        ));
}

#[test]
fn test_env_override_for_one_key() {
    let tmp = TempDir::new().expect("tmp");
    isolated(&tmp)
        .env("pool_id", "test-pool")
        .assert()
        .success()
        .stdout(predicate::str::contains("pool_id = test-pool (env)"))
        .stdout(predicate::str::contains(format!(
            "cont_id = {} (default)",
            DEFAULT_CONT_ID
        )))
        .stdout(predicate::str::contains(format!(
            "object_cont_id = {} (default)",
            DEFAULT_OBJECT_CONT_ID
        )));
}

#[test]
fn test_empty_env_override_is_ignored() {
    let tmp = TempDir::new().expect("tmp");
    isolated(&tmp)
        .env("cont_id", "")
        .arg("cont_id")
        .assert()
        .success()
        .stdout(format!("{}\n", DEFAULT_CONT_ID));
}

#[test]
fn test_single_key_output() {
    let tmp = TempDir::new().expect("tmp");
    isolated(&tmp)
        .env("object_cont_id", "not-a-uuid")
        .arg("object_cont_id")
        .assert()
        .success()
        .stdout("not-a-uuid\n");
}

#[test]
fn test_unknown_key_fails() {
    let tmp = TempDir::new().expect("tmp");
    isolated(&tmp)
        .arg("svc_ranks")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key: svc_ranks"));
}

#[test]
fn test_define_beats_env_and_file() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(
        tmp.path().join(".daos-test.toml"),
        "pool_id = \"file-pool\"\ncont_id = \"file-cont\"\nobject_cont_id = \"file-obj\"\n",
    )
    .expect("write");

    isolated(&tmp)
        .env("pool_id", "env-pool")
        .env("cont_id", "env-cont")
        .args(["-D", "pool_id=cli-pool", "--format", "properties"])
        .assert()
        .success()
        .stdout("pool_id=cli-pool\ncont_id=env-cont\nobject_cont_id=file-obj\n");
}

#[test]
fn test_config_env_var_file() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("harness.toml");
    fs::write(&path, "cont_id = \"harness-cont\"\n").expect("write");

    isolated(&tmp)
        .env("DAOS_TEST_CONFIG", &path)
        .arg("cont_id")
        .assert()
        .success()
        .stdout("harness-cont\n");
}

#[test]
fn test_json_output() {
    let tmp = TempDir::new().expect("tmp");
    let output = isolated(&tmp)
        .args(["--define", "pool_id=p1", "--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let entries = json.as_array().expect("array");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["key"], "pool_id");
    assert_eq!(entries[0]["value"], "p1");
    assert_eq!(entries[0]["origin"]["kind"], "override");
    assert_eq!(entries[0]["origin"]["source"], "cli");
    assert_eq!(entries[1]["value"], DEFAULT_CONT_ID);
    assert_eq!(entries[1]["origin"]["kind"], "default");
}

#[test]
fn test_malformed_define_fails() {
    let tmp = TempDir::new().expect("tmp");
    isolated(&tmp)
        .args(["-D", "pool_id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid override 'pool_id'"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let tmp = TempDir::new().expect("tmp");
    isolated(&tmp)
        .args(["--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_invalid_discovered_config_fails() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join(".daos-test.toml"), "pool_id = 7\n").expect("write");

    isolated(&tmp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let tmp = TempDir::new().expect("tmp");
    isolated(&tmp)
        .args(["--log-level", "debug", "pool_id"])
        .assert()
        .success()
        .stdout(format!("{}\n", DEFAULT_POOL_ID));
}

#[test]
fn test_multiline_value_stays_on_one_properties_line() {
    let tmp = TempDir::new().expect("tmp");
    isolated(&tmp)
        .env("pool_id", "a\ncont_id=evil")
        .args(["--format", "properties"])
        .assert()
        .success()
        .stdout(format!(
            "pool_id=a\\ncont_id\\=evil\ncont_id={}\nobject_cont_id={}\n",
            DEFAULT_CONT_ID, DEFAULT_OBJECT_CONT_ID
        ));
}

#[test]
fn test_multiline_value_escaped_in_text() {
    let tmp = TempDir::new().expect("tmp");
    isolated(&tmp)
        .env("pool_id", "a\ncont_id = evil")
        .assert()
        .success()
        .stdout(predicate::str::contains("pool_id = a\\ncont_id = evil (env)\n"))
        .stdout(predicate::str::contains(format!(
            "cont_id = {} (default)",
            DEFAULT_CONT_ID
        )));
}

#[test]
fn test_format_conflicts_with_key() {
    let tmp = TempDir::new().expect("tmp");
    isolated(&tmp)
        .args(["--format", "json", "pool_id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
