use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

struct Sandbox {
    dir: tempfile::TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn data_file(&self) -> std::path::PathBuf {
        self.dir.path().join("employees.csv")
    }

    /// A command pinned to this sandbox's records file and a config file
    /// that does not exist, so user configuration never leaks in.
    fn roster(&self) -> Command {
        let mut cmd = Command::cargo_bin("roster").unwrap();
        cmd.env_remove("RUST_LOG")
            .arg("--file")
            .arg(self.data_file())
            .arg("--config")
            .arg(self.dir.path().join("config.json"));
        cmd
    }

    fn add(&self, id: &str, first: &str, last: &str, role: &str) {
        self.roster()
            .args(["add", "--id", id, "--first-name", first, "--last-name", last])
            .args(["--email", &format!("{}@example.com", first.to_lowercase())])
            .args(["--role", role, "--salary", "50000.5"])
            .assert()
            .success();
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn add_then_list() {
    let sandbox = Sandbox::new();
    sandbox.add("1", "Ann", "Doe", "Engineer");

    assert!(read(&sandbox.data_file()).starts_with("ID,FirstName,LastName"));

    sandbox
        .roster()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann Doe"))
        .stdout(predicate::str::contains("Engineer"));
}

#[test]
fn add_duplicate_warns_and_keeps_file() {
    let sandbox = Sandbox::new();
    sandbox.add("1", "Ann", "Doe", "Engineer");
    let before = read(&sandbox.data_file());

    sandbox
        .roster()
        .args(["add", "--id", "1", "--first-name", "Zed", "--last-name", "Q"])
        .args(["--email", "zed@example.com", "--role", "Ops"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already present"));

    assert_eq!(read(&sandbox.data_file()), before);
}

#[test]
fn add_requires_fields() {
    let sandbox = Sandbox::new();

    sandbox
        .roster()
        .args(["add", "--id", "1", "--first-name", "Ann"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required fields"));

    assert!(!sandbox.data_file().exists());
}

#[test]
fn update_then_show_json() {
    let sandbox = Sandbox::new();
    sandbox.add("1", "Ann", "Doe", "Engineer");

    sandbox
        .roster()
        .args(["update", "1", "--salary", "60000", "--first-name", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated successfully"));

    sandbox
        .roster()
        .args(["show", "1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"salary\": 60000.0"))
        .stdout(predicate::str::contains("\"firstName\": \"Ann\""));
}

#[test]
fn search_by_last_name() {
    let sandbox = Sandbox::new();
    sandbox.add("1", "Ann", "Doe", "Engineer");
    sandbox.add("2", "Bob", "Smith", "Manager");

    sandbox
        .roster()
        .args(["search", "--last-name", "DOE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann Doe"))
        .stdout(predicate::str::contains("Bob").not());
}

#[test]
fn delete_unknown_id_fails() {
    let sandbox = Sandbox::new();
    sandbox.add("1", "Ann", "Doe", "Engineer");

    sandbox
        .roster()
        .args(["delete", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("employee with ID 9 not found"));

    sandbox.roster().args(["delete", "1"]).assert().success();
    sandbox
        .roster()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No employees found."));
}
