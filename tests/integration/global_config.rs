//! Config file handling.

use anyhow::Result;
use predicates::prelude::*;

use crate::common::TestProject;
use depview_cli::test_utils::ObjectListFixture;

#[test]
fn explicit_config_flag_wins_over_env() -> Result<()> {
    let project = TestProject::new()?;
    let file = project.write_fixture(&ObjectListFixture::envelope())?;
    project.write_config("default_namespace = \"ops\"\n")?;

    let other = project.dir.path().join("other.toml");
    std::fs::write(&other, "default_namespace = \"apps\"\n")?;

    project
        .depview()
        .args(["neighbors", "app", "--file"])
        .arg(&file)
        .arg("--config")
        .arg(&other)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("apps/app\n"));
    Ok(())
}

#[test]
fn invalid_config_is_reported() -> Result<()> {
    let project = TestProject::new()?;
    let file = project.write_fixture(&ObjectListFixture::envelope())?;
    project.write_config("poll_interval_secs = 0\n")?;

    project
        .depview()
        .args(["order", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("poll_interval_secs must be at least 1"));
    Ok(())
}

#[test]
fn unknown_config_key_is_reported() -> Result<()> {
    let project = TestProject::new()?;
    let file = project.write_fixture(&ObjectListFixture::envelope())?;
    project.write_config("endpiont = \"https://example.com\"\n")?;

    project
        .depview()
        .args(["order", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("endpiont"));
    Ok(())
}

#[test]
fn watch_stops_after_count() -> Result<()> {
    let project = TestProject::new()?;
    let file = project.write_fixture(&ObjectListFixture::yaml())?;

    project
        .depview()
        .args(["watch", "infra/app", "--interval", "1", "--count", "2", "--file"])
        .arg(&file)
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout(predicate::str::contains("└── → infra/vpc").count(1));
    Ok(())
}
