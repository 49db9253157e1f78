//! Integration tests for `depview order`.

use anyhow::Result;
use predicates::prelude::*;

use crate::common::TestProject;
use depview_cli::test_utils::ObjectListFixture;

fn position(ids: &[String], id: &str) -> usize {
    ids.iter().position(|i| i == id).unwrap()
}

#[test]
fn whole_snapshot_in_apply_order() -> Result<()> {
    let project = TestProject::new()?;
    let file = project.write_fixture(&ObjectListFixture::envelope())?;

    let output =
        project.depview().args(["order", "--format", "json", "--file"]).arg(&file).output()?;
    assert!(output.status.success());

    let ids: Vec<String> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(ids.len(), 5);
    assert!(position(&ids, "infra/vpc") < position(&ids, "infra/db"));
    assert!(position(&ids, "infra/db") < position(&ids, "apps/app"));
    assert!(position(&ids, "infra/cache") < position(&ids, "apps/app"));
    Ok(())
}

#[test]
fn component_order_is_numbered() -> Result<()> {
    let project = TestProject::new()?;
    let file = project.write_fixture(&ObjectListFixture::yaml())?;

    project
        .depview()
        .args(["order", "infra/app", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout("1. infra/vpc\n2. infra/app\n");
    Ok(())
}

#[test]
fn cycle_fails_with_chain() -> Result<()> {
    let project = TestProject::new()?;
    let file = project.write_fixture(&ObjectListFixture::cyclic())?;

    project
        .depview()
        .args(["order", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Circular dependency detected"))
        .stderr(predicate::str::contains("default/a → default/b → default/a"))
        .stderr(predicate::str::contains("Remove one of the dependsOn references"));
    Ok(())
}
