//! User-facing errors.

use anyhow::Result;
use predicates::prelude::*;

use crate::common::TestProject;
use depview_cli::test_utils::ObjectListFixture;

#[test]
fn unknown_object_suggests_close_matches() -> Result<()> {
    let project = TestProject::new()?;
    let file = project.write_fixture(&ObjectListFixture::envelope())?;

    project
        .depview()
        .args(["graph", "infra/dbb", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Object 'infra/dbb' not found"))
        .stderr(predicate::str::contains("Did you mean: infra/db"));
    Ok(())
}

#[test]
fn missing_source_is_explained() -> Result<()> {
    let project = TestProject::new()?;

    project
        .depview()
        .args(["graph", "apps/app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No object source"));
    Ok(())
}

#[test]
fn missing_file_is_reported() -> Result<()> {
    let project = TestProject::new()?;

    project
        .depview()
        .args(["order", "--file", "absent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.json"));
    Ok(())
}

#[test]
fn malformed_list_is_reported() -> Result<()> {
    let project = TestProject::new()?;
    let file = project.dir.path().join("broken.json");
    std::fs::write(&file, "{\"objects\": 42}")?;

    project
        .depview()
        .args(["order", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid object list"));
    Ok(())
}

#[test]
fn duplicate_objects_are_rejected() -> Result<()> {
    let project = TestProject::new()?;
    let file = project.dir.path().join("dupes.json");
    std::fs::write(
        &file,
        r#"[{"namespace": "a", "name": "x"}, {"namespace": "a", "name": "x"}]"#,
    )?;

    project
        .depview()
        .args(["graph", "a/x", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate object 'a/x'"));
    Ok(())
}

#[test]
fn invalid_reference_is_rejected() -> Result<()> {
    let project = TestProject::new()?;
    let file = project.write_fixture(&ObjectListFixture::envelope())?;

    project
        .depview()
        .args(["graph", "a/b/c", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid object reference 'a/b/c'"));
    Ok(())
}
