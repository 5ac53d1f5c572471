//! Binary-level tests for the command line surface.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn make(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("switchhosts_make").unwrap();
    cmd.current_dir(root)
        .env_remove("IDENTITY")
        .env_remove("MAKE_FOR")
        .arg("--root")
        .arg(root);
    cmd
}

#[test]
fn dry_run_stages_and_writes_descriptor() {
    let (_tmp, root) = common::fixture_project();

    make(&root)
        .env("MAKE_FOR", "win")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("SwitchHosts_installer_x64_4.1.2(6086).exe"));

    let descriptor = fs::read_to_string(root.join("dist/builder-config.json")).unwrap();
    assert!(descriptor.contains("\"nsis\""));
    assert!(descriptor.contains("\"portable\""));
    assert!(root.join("build/package.json").is_file());
    assert!(root.join("build/assets/app.png").is_file());
}

#[test]
fn profile_flag_wins_over_environment() {
    let (_tmp, root) = common::fixture_project();

    make(&root)
        .env("MAKE_FOR", "win")
        .args(["--profile", "linux", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SwitchHosts_linux_armv7l_4.1.2(6086).deb"));

    let descriptor = fs::read_to_string(root.join("dist/builder-config.json")).unwrap();
    assert!(descriptor.contains("\"linux\""));
}

#[test]
fn dotenv_supplies_profile_and_identity() {
    let (_tmp, root) = common::fixture_project();
    fs::write(root.join(".env"), "MAKE_FOR=win\nIDENTITY=\"Dev ID\"\n").unwrap();

    make(&root)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("targets: win: [nsis:ia32, nsis:x64, portable:ia32]"))
        .stdout(predicate::str::contains("mac: [").not())
        .stdout(predicate::str::contains("linux: [").not());

    let descriptor = fs::read_to_string(root.join("dist/builder-config.json")).unwrap();
    assert!(descriptor.contains("\"identity\": \"Dev ID\""));
}

#[test]
fn environment_wins_over_dotenv() {
    let (_tmp, root) = common::fixture_project();
    fs::write(root.join(".env"), "MAKE_FOR=win\n").unwrap();

    make(&root)
        .env("MAKE_FOR", "linux")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("targets: linux: [AppImage:arm64"))
        .stdout(predicate::str::contains("win: [").not());
}

#[test]
fn missing_version_file_fails() {
    let (_tmp, root) = common::fixture_project();
    fs::remove_file(root.join("src/version.json")).unwrap();

    make(&root)
        .arg("--dry-run")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("version.json"));

    assert!(!root.join("dist/builder-config.json").exists());
}

#[test]
fn missing_root_is_rejected() {
    let (tmp, _root) = common::fixture_project();

    Command::cargo_bin("switchhosts_make")
        .unwrap()
        .current_dir(tmp.path())
        .args(["--root", "no-such-project", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project root is not a directory"));
}
