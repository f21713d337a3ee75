//! `mm spread` workflows

use crate::common::TestProject;
use anyhow::Result;

#[test]
fn test_spread_json_offsets_stacked_pair() -> Result<()> {
    let project = TestProject::new().with_listings();

    let result = crate::mm!(project.path(), "spread", "items.json", "--format", "json")
        .assert_success()?;
    let markers = result.json()?;
    let markers = markers.as_array().expect("array output");

    assert_eq!(markers.len(), 4);

    let ids: Vec<&str> = markers.iter().map(|m| m["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["l-1", "t-2", "t-3", "s-4"]);

    // l-1 and t-2 round to the same key: north and south of their raw spots
    let first = &markers[0];
    assert_eq!(first["group_size"], 2);
    let dlat = first["display_latitude"].as_f64().unwrap() - 56.9496;
    assert!((dlat - 0.0008).abs() < 1e-9);

    let second = &markers[1];
    assert_eq!(second["group_size"], 2);
    let dlat = second["display_latitude"].as_f64().unwrap() - 56.94961;
    assert!((dlat + 0.0008).abs() < 1e-9);

    // Singletons stay put
    for marker in &markers[2..] {
        assert_eq!(marker["group_size"], 1);
        assert_eq!(marker["display_latitude"], marker["latitude"]);
        assert_eq!(marker["display_longitude"], marker["longitude"]);
    }

    Ok(())
}

#[test]
fn test_spread_uses_configured_offset() -> Result<()> {
    let project = TestProject::new().with_listings();
    project.write("mm.toml", "[spread]\noffset_degrees = 0.01\n");

    let result = crate::mm!(
        project.path(),
        "spread",
        "items.json",
        "--format",
        "json",
        "--config",
        "mm.toml"
    )
    .assert_success()?;

    let markers = result.json()?;
    let dlat = markers[0]["display_latitude"].as_f64().unwrap() - 56.9496;
    assert!((dlat - 0.01).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_spread_table_summary() -> Result<()> {
    let project = TestProject::new().with_listings();

    let result = crate::mm!(project.path(), "spread", "items.json").assert_success()?;

    assert!(result.contains_stdout("Map Markers"));
    assert!(result.contains_stdout("stack of 2"));
    assert!(result.contains_stdout("4 markers, 3 positions, 1 stacked"));

    Ok(())
}

#[test]
fn test_spread_missing_file_fails() -> Result<()> {
    let project = TestProject::new();

    let result = crate::mm!(project.path(), "spread", "nope.json").assert_failure()?;
    assert!(result.contains_stderr("Failed to read items file"));

    Ok(())
}

#[test]
fn test_spread_rejects_malformed_json() -> Result<()> {
    let project = TestProject::new();
    project.write("items.json", "{ not json");

    let result = crate::mm!(project.path(), "spread", "items.json").assert_failure()?;
    assert!(result.contains_stderr("Failed to parse items file"));

    Ok(())
}

#[test]
fn test_debug_logs_stay_on_stderr() -> Result<()> {
    let project = TestProject::new().with_listings();

    let quiet = crate::mm!(project.path(), "spread", "items.json", "--format", "json")
        .assert_success()?;
    assert!(!quiet.contains_stderr("Loaded listings"));

    let verbose = crate::mm!(project.path(), "spread", "items.json", "--format", "json")
        .env("RUST_LOG", "debug")
        .assert_success()?;

    assert!(verbose.contains_stderr("Loaded listings"));
    assert!(!verbose.contains_stdout("Loaded listings"));
    assert_eq!(verbose.json()?.as_array().map(Vec::len), Some(4));

    Ok(())
}
