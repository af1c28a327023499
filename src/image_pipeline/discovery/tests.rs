use std::fs;

use tempfile::TempDir;
use crate::image_pipeline::common::error::PipelineError;
use crate::image_pipeline::discovery::{GlobDiscovery, WorkUnit};

fn touch(dir: &std::path::Path, name: &str) {
    fs::write(dir.join(name), b"x").unwrap();
}

fn fixture() -> TempDir {
    let root = TempDir::new().unwrap();

    let a = root.path().join("match_a");
    fs::create_dir(&a).unwrap();
    touch(&a, "out_2.png");
    touch(&a, "out_1.png");
    touch(&a, "out_10.png");
    touch(&a, "median.png");
    touch(&a, "notes.txt");

    let b = root.path().join("match_b");
    fs::create_dir(&b).unwrap();

    // matches the group pattern but is a file
    touch(root.path(), "match_file");

    let other = root.path().join("other");
    fs::create_dir(&other).unwrap();
    touch(&other, "out_1.png");

    root
}

#[test]
fn test_discover_sorted_groups_and_members() {
    let root = fixture();
    let units = GlobDiscovery::default()
        .rooted_at(root.path())
        .unwrap()
        .discover()
        .unwrap();

    let a = root.path().join("match_a");
    let b = root.path().join("match_b");
    assert_eq!(
        units,
        vec![
            WorkUnit::new(
                vec![a.join("out_1.png"), a.join("out_10.png"), a.join("out_2.png")],
                a.join("median.png"),
            ),
            WorkUnit::new(Vec::new(), b.join("median.png")),
        ]
    );
}

#[test]
fn test_output_file_is_never_a_member() {
    let root = fixture();
    let discovery = GlobDiscovery::new("match_*", "*.png", "median.png")
        .rooted_at(root.path())
        .unwrap();

    let unit = discovery.discover_in(&root.path().join("match_a")).unwrap();
    assert_eq!(unit.members.len(), 3);
    assert!(unit.members.iter().all(|m| !m.ends_with("median.png")));
}

#[test]
fn test_custom_output_name() {
    let root = fixture();
    let discovery = GlobDiscovery::new("match_a", "out_*.png", "stack.tiff")
        .rooted_at(root.path())
        .unwrap();

    let units = discovery.discover().unwrap();
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].output, root.path().join("match_a").join("stack.tiff"));
}

#[test]
fn test_invalid_pattern_is_discovery_error() {
    let discovery = GlobDiscovery::new("match_[", "out_*.png", "median.png");
    let result = discovery.discover();
    assert!(matches!(result, Err(PipelineError::DiscoveryError(_))));
}

#[test]
fn test_no_matching_groups() {
    let root = TempDir::new().unwrap();
    let units = GlobDiscovery::default()
        .rooted_at(root.path())
        .unwrap()
        .discover()
        .unwrap();
    assert!(units.is_empty());
}
