use std::collections::BTreeSet;
use std::path::PathBuf;

use proptest::prelude::*;
use pollwatch::engine::{PassOutcome, Stage};
use pollwatch_test_utils::builders::MockTreeBuilder;

/// A tree of `files` top-level files and one directory per entry of `dirs`,
/// each holding that many children.
#[derive(Debug, Clone)]
struct Layout {
    files: usize,
    dirs: Vec<usize>,
}

fn layout_strategy() -> impl Strategy<Value = Layout> {
    (0..5usize, proptest::collection::vec(0..4usize, 0..4))
        .prop_map(|(files, dirs)| Layout { files, dirs })
}

fn file_path(i: usize) -> String {
    format!("/w/file_{i}")
}

fn dir_path(d: usize) -> String {
    format!("/w/dir_{d}")
}

fn child_path(d: usize, c: usize) -> String {
    format!("/w/dir_{d}/child_{c}")
}

/// Every leaf path (top-level files, then children) in detection order.
fn leaves(layout: &Layout) -> Vec<(Stage, String)> {
    let mut out: Vec<(Stage, String)> = (0..layout.files)
        .map(|i| (Stage::Files, file_path(i)))
        .collect();
    for (d, &n) in layout.dirs.iter().enumerate() {
        for c in 0..n {
            out.push((Stage::DirContents, child_path(d, c)));
        }
    }
    out
}

fn build(layout: &Layout) -> (pollwatch::fs::mock::MockFileSystem, pollwatch::engine::WatchCore) {
    let mut builder = MockTreeBuilder::new();
    for i in 0..layout.files {
        builder = builder.watched_file(&file_path(i));
    }
    for (d, &n) in layout.dirs.iter().enumerate() {
        let names: Vec<String> = (0..n).map(|c| format!("child_{c}")).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        builder = builder.watched_dir(&dir_path(d), &names);
    }
    builder.build()
}

proptest! {
    #[test]
    fn untouched_trees_stay_idle(layout in layout_strategy(), passes in 1..5usize) {
        let (_fs, mut core) = build(&layout);
        for _ in 0..passes {
            prop_assert_eq!(core.pass().unwrap(), PassOutcome::Idle);
        }
    }

    #[test]
    fn touched_leaves_surface_one_per_pass_in_order(
        layout in layout_strategy(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let leaves = leaves(&layout);
        prop_assume!(!leaves.is_empty());

        let (fs, mut core) = build(&layout);

        let touched: BTreeSet<usize> = picks.iter().map(|ix| ix.index(leaves.len())).collect();
        for &i in &touched {
            fs.touch(&leaves[i].1);
        }

        for &i in &touched {
            let (stage, path) = &leaves[i];
            match core.pass().unwrap() {
                PassOutcome::Changed(change) => {
                    prop_assert_eq!(change.stage, *stage);
                    prop_assert_eq!(change.path, PathBuf::from(path));
                }
                PassOutcome::Idle => prop_assert!(false, "expected a change for {}", path),
            }
        }
        prop_assert_eq!(core.pass().unwrap(), PassOutcome::Idle);
    }
}
