//! Loading snapshots from object-list files.

use anyhow::Result;
use tempfile::TempDir;

use depview_cli::core::ObjectRef;
use depview_cli::graph::get_reachable_graph;
use depview_cli::source::ObjectSource;
use depview_cli::test_utils::ObjectListFixture;

#[tokio::test]
async fn envelope_file_builds_snapshot() -> Result<()> {
    let temp = TempDir::new()?;
    let path = ObjectListFixture::envelope().write_to(temp.path())?;

    let map = ObjectSource::File(path).load().await?;
    assert_eq!(map.len(), 5);
    assert_eq!(map.get("infra/vpc").and_then(|n| n.cluster_name.as_deref()), Some("mgmt"));

    let reachable = get_reachable_graph(&map, &ObjectRef::new("apps", "app"));
    let mut ids: Vec<String> = reachable.into_iter().map(|n| n.id).collect();
    ids.sort();
    assert_eq!(ids, vec!["apps/app", "infra/cache", "infra/db", "infra/vpc"]);
    Ok(())
}

#[tokio::test]
async fn yaml_file_builds_snapshot() -> Result<()> {
    let temp = TempDir::new()?;
    let path = ObjectListFixture::yaml().write_to(temp.path())?;

    let map = ObjectSource::File(path).load().await?;
    let app = map.get("infra/app").unwrap();
    assert_eq!(app.dependency_ids().collect::<Vec<_>>(), vec!["infra/vpc"]);
    Ok(())
}

#[tokio::test]
async fn every_load_is_a_fresh_snapshot() -> Result<()> {
    let temp = TempDir::new()?;
    let fixture = ObjectListFixture::cyclic();
    let path = fixture.write_to(temp.path())?;
    let source = ObjectSource::File(path.clone());

    let first = source.load().await?;
    std::fs::write(&path, r#"[{"namespace": "default", "name": "solo"}]"#)?;
    let second = source.load().await?;

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    assert!(second.contains("default/solo"));
    Ok(())
}
