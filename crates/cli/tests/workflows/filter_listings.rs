//! `mm filter` workflows

use crate::common::TestProject;
use anyhow::Result;

fn ids(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .expect("array output")
        .iter()
        .map(|l| l["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_no_selection_returns_everything() -> Result<()> {
    let project = TestProject::new().with_listings();

    let result = crate::mm!(project.path(), "filter", "items.json", "--format", "json")
        .assert_success()?;

    assert_eq!(ids(&result.json()?), vec!["l-1", "t-2", "t-3", "s-4"]);
    Ok(())
}

#[test]
fn test_query_is_trimmed_and_case_insensitive() -> Result<()> {
    let project = TestProject::new().with_listings();

    let result = crate::mm!(
        project.path(),
        "filter",
        "items.json",
        "--query",
        "  TABLE ",
        "--format",
        "json"
    )
    .assert_success()?;

    assert_eq!(ids(&result.json()?), vec!["l-1", "s-4"]);
    Ok(())
}

#[test]
fn test_query_matches_description() -> Result<()> {
    let project = TestProject::new().with_listings();

    let result = crate::mm!(
        project.path(),
        "filter",
        "items.json",
        "-q",
        "hedge",
        "--format",
        "json"
    )
    .assert_success()?;

    assert_eq!(ids(&result.json()?), vec!["t-3"]);
    Ok(())
}

#[test]
fn test_category_and_difficulty() -> Result<()> {
    let project = TestProject::new().with_listings();

    let result = crate::mm!(
        project.path(),
        "filter",
        "items.json",
        "--category",
        "tasks",
        "--difficulty",
        "easy",
        "--format",
        "json"
    )
    .assert_success()?;

    assert_eq!(ids(&result.json()?), vec!["t-3"]);
    Ok(())
}

#[test]
fn test_default_radius_applies_near_origin() -> Result<()> {
    let project = TestProject::new().with_listings();

    // Default radius is 25km: Tallinn (~280km) drops out
    let result = crate::mm!(
        project.path(),
        "filter",
        "items.json",
        "--near",
        "56.9496,24.1052",
        "--format",
        "json"
    )
    .assert_success()?;
    assert_eq!(ids(&result.json()?), vec!["l-1", "t-2", "t-3"]);

    let result = crate::mm!(
        project.path(),
        "filter",
        "items.json",
        "--near",
        "56.9496,24.1052",
        "--radius",
        "5",
        "--format",
        "json"
    )
    .assert_success()?;
    assert_eq!(ids(&result.json()?), vec!["l-1", "t-2"]);

    let result = crate::mm!(
        project.path(),
        "filter",
        "items.json",
        "--near",
        "56.9496,24.1052",
        "--any-distance",
        "--format",
        "json"
    )
    .assert_success()?;
    assert_eq!(ids(&result.json()?).len(), 4);

    Ok(())
}

#[test]
fn test_extra_fields_pass_through() -> Result<()> {
    let project = TestProject::new().with_listings();

    let result = crate::mm!(
        project.path(),
        "filter",
        "items.json",
        "--category",
        "furniture",
        "--format",
        "json"
    )
    .assert_success()?;

    let found = result.json()?;
    assert_eq!(found[0]["price"], 180);
    Ok(())
}

#[test]
fn test_bad_origin_fails() -> Result<()> {
    let project = TestProject::new().with_listings();

    let result =
        crate::mm!(project.path(), "filter", "items.json", "--near", "riga").assert_failure()?;
    assert!(result.contains_stderr("Expected LAT,LNG"));

    Ok(())
}

#[test]
fn test_table_output() -> Result<()> {
    let project = TestProject::new().with_listings();

    let result = crate::mm!(
        project.path(),
        "filter",
        "items.json",
        "--category",
        "tasks"
    )
    .assert_success()?;

    assert!(result.contains_stdout("Matching Listings"));
    assert!(result.contains_stdout("2 of 4 listings match"));
    Ok(())
}
