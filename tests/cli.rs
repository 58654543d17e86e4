mod common;

use common::{cli, files_under, project};
use predicates::prelude::*;

#[test]
fn prints_version() {
    let home = project(None);
    cli(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0.1"));
}

#[test]
fn help_lists_create_command() {
    let home = project(None);
    cli(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("CLI to add global component for applet."));
}

#[test]
fn create_help_describes_destination() {
    let home = project(None);
    cli(home.path())
        .args(["create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DESTINATION]"));
}

#[test]
fn missing_destination_exits_with_one() {
    let home = project(None);
    let root = project(None);
    let dest = root.path().join("does-not-exist");

    cli(home.path())
        .arg("create")
        .arg(&dest)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does-not-exist"))
        .stderr(predicate::str::contains("cannot access"));

    assert!(!dest.exists());
    assert!(files_under(root.path()).is_empty());
}

#[cfg(unix)]
#[test]
fn missing_destination_reports_os_error_once() {
    let home = project(None);
    let root = project(None);
    let dest = root.path().join("nope");

    cli(home.path())
        .arg("create")
        .arg(&dest)
        .assert()
        .code(1)
        .stderr(format!(
            "cannot access '{}': No such file or directory (os error 2)\n",
            dest.display()
        ));
}

#[test]
fn non_interactive_stdin_fails_without_writes() {
    let home = project(None);
    let original = r#"{"pages": ["index"]}"#;
    let proj = project(Some(original));

    cli(home.path())
        .arg("create")
        .arg(proj.path())
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("prompt aborted: "))
        .stderr(predicate::str::contains("not a terminal: not a terminal").not());

    assert!(!proj.path().join("components").exists());
    assert_eq!(
        std::fs::read_to_string(proj.path().join("app.json")).unwrap(),
        original
    );
}

#[test]
fn malformed_user_config_exits_with_one() {
    let home = project(None);
    std::fs::write(home.path().join(".component-for-applet.toml"), "templates = 3").unwrap();
    let proj = project(Some("{}"));

    cli(home.path())
        .arg("create")
        .arg(proj.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to initialize config"));

    assert!(!proj.path().join("components").exists());
}
