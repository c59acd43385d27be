//! Tests for the catalog registry and solution scanning

use std::fs;

use tempfile::TempDir;

use rskata::application::{ApplicationError, CatalogService};
use rskata::domain::{Difficulty, Kind, Tag};

const CATALOG_TOML: &str = r#"
[problems.p0001]
title = "Two Sum"
description = "Find indices of two numbers adding up to a target."
url = "https://leetcode.com/problems/two-sum/"
difficulty = "easy"
tags = ["array", "hash-table"]
kinds = ["algorithms"]
links = ["https://en.wikipedia.org/wiki/Hash_table"]

[problems.p0002]
title = "Add Two Numbers"
difficulty = "medium"
tags = ["linked-list", "math"]

[problems.p0104]
title = "Maximum Depth of Binary Tree"
difficulty = "easy"
tags = ["tree", "breadth-first-search", "monotone-queue"]
"#;

/// Temp solutions directory seeded with the catalog fixture.
fn solutions_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("catalog.toml"), CATALOG_TOML).unwrap();
    dir
}

// ============================================================
// Load Tests
// ============================================================

#[test]
fn given_catalog_file_when_loading_then_entries_are_keyed_by_id() {
    let dir = solutions_dir();
    let catalog = CatalogService::new()
        .load(&dir.path().join("catalog.toml"))
        .unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog.ids().collect::<Vec<_>>(),
        vec!["p0001", "p0002", "p0104"]
    );

    let meta = catalog.get("p0001").unwrap();
    assert_eq!(meta.title, "Two Sum");
    assert_eq!(meta.difficulty, Difficulty::Easy);
    assert!(meta.tags.contains(&Tag::HashTable));
    assert_eq!(meta.kinds, vec![Kind::Algorithms]);
    assert_eq!(meta.links.len(), 1);
}

#[test]
fn given_unknown_tag_string_when_loading_then_it_round_trips_as_custom() {
    let dir = solutions_dir();
    let catalog = CatalogService::new()
        .load(&dir.path().join("catalog.toml"))
        .unwrap();

    let meta = catalog.get("p0104").unwrap();
    assert!(meta
        .tags
        .contains(&Tag::Custom("monotone-queue".to_string())));
    assert_eq!(meta.tag_line(), "tree, breadth-first-search, monotone-queue");
}

#[test]
fn given_missing_catalog_file_when_loading_then_fails_with_context() {
    let dir = TempDir::new().unwrap();
    let err = CatalogService::new()
        .load(&dir.path().join("catalog.toml"))
        .unwrap_err();
    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
}

#[test]
fn given_invalid_difficulty_when_loading_then_fails_with_config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("catalog.toml"),
        "[problems.p0001]\ntitle = \"Broken\"\ndifficulty = \"brutal\"\n",
    )
    .unwrap();

    let err = CatalogService::new()
        .load(&dir.path().join("catalog.toml"))
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));
}

// ============================================================
// Filter Tests
// ============================================================

#[test]
fn given_filters_when_listing_then_matches_tag_and_difficulty() {
    let dir = solutions_dir();
    let catalog = CatalogService::new()
        .load(&dir.path().join("catalog.toml"))
        .unwrap();

    let easy = catalog.filtered(None, Some(Difficulty::Easy));
    assert_eq!(
        easy.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
        vec!["p0001", "p0104"]
    );

    let trees = catalog.filtered(Some(&Tag::Tree), None);
    assert_eq!(
        trees.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
        vec!["p0104"]
    );

    let none = catalog.filtered(Some(&Tag::Graph), Some(Difficulty::Hard));
    assert!(none.is_empty());
}

// ============================================================
// Scan Tests
// ============================================================

#[test]
fn given_solutions_on_disk_when_scanning_then_pairs_files_with_entries() {
    let dir = solutions_dir();
    fs::write(dir.path().join("p0001_two_sum.rs"), "// solution\n").unwrap();
    fs::create_dir(dir.path().join("trees")).unwrap();
    fs::write(
        dir.path().join("trees/p0104_maximum_depth_of_binary_tree.rs"),
        "// solution\n",
    )
    .unwrap();
    fs::write(dir.path().join("p9999_not_in_catalog.rs"), "// orphan\n").unwrap();
    fs::write(dir.path().join("notes.md"), "ignored\n").unwrap();

    let service = CatalogService::new();
    let catalog = service.load(&dir.path().join("catalog.toml")).unwrap();
    let status = service.scan_solutions(&catalog, dir.path()).unwrap();

    let solved_ids: Vec<&str> = status.solved.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(solved_ids, vec!["p0001", "p0104"]);
    assert_eq!(status.missing, vec!["p0002".to_string()]);
    assert_eq!(status.orphans.len(), 1);
    assert!(status.orphans[0].ends_with("p9999_not_in_catalog.rs"));
}

#[test]
fn given_missing_directory_when_scanning_then_reports_it() {
    let service = CatalogService::new();
    let catalog = rskata::domain::Catalog::new();
    let err = service
        .scan_solutions(&catalog, std::path::Path::new("/nonexistent/rskata-solutions"))
        .unwrap_err();
    assert!(matches!(err, ApplicationError::SolutionsDirMissing(_)));
}

// ============================================================
// Solution Lookup Tests
// ============================================================

#[test]
fn given_problem_id_when_locating_solution_then_returns_its_file() {
    let dir = solutions_dir();
    fs::create_dir(dir.path().join("trees")).unwrap();
    fs::write(
        dir.path().join("trees/p0104_maximum_depth_of_binary_tree.rs"),
        "// solution\n",
    )
    .unwrap();

    let file = CatalogService::new()
        .solution_file(dir.path(), "p0104")
        .unwrap();
    assert!(file.ends_with("p0104_maximum_depth_of_binary_tree.rs"));
}

#[test]
fn given_unsolved_problem_id_when_locating_solution_then_reports_missing() {
    let dir = solutions_dir();
    let err = CatalogService::new()
        .solution_file(dir.path(), "p0002")
        .unwrap_err();
    assert!(matches!(err, ApplicationError::SolutionMissing(id) if id == "p0002"));
}
