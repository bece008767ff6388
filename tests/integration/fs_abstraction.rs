use std::path::{Path, PathBuf};

use pollwatch::engine::{Change, PassOutcome, Stage};
use pollwatch::fs::mock::MockFileSystem;
use pollwatch::watch::{check_modified, resync, Tracked, TrackedFile};
use pollwatch_test_utils::builders::MockTreeBuilder;

fn changed(stage: Stage, path: &str) -> PassOutcome {
    PassOutcome::Changed(Change {
        stage,
        path: PathBuf::from(path),
    })
}

fn child_paths(children: &[TrackedFile]) -> Vec<PathBuf> {
    children.iter().map(|c| c.path().to_path_buf()).collect()
}

#[test]
fn checking_twice_never_reports_the_same_change() {
    let fs = MockFileSystem::new();
    fs.add_file("/a.txt");
    let mut file = TrackedFile::new("/a.txt", fs.modified("/a.txt").unwrap());
    fs.touch("/a.txt");

    let (changed, stat) = check_modified(&fs, &file).unwrap();
    assert!(changed);
    file.record(stat);

    let (changed, _) = check_modified(&fs, &file).unwrap();
    assert!(!changed);
}

#[test]
fn resync_replaces_rather_than_merges() {
    let fs = MockFileSystem::new();
    fs.add_file("/d/a");
    fs.add_file("/d/b");
    let before = resync(&fs, Path::new("/d")).unwrap();
    assert_eq!(child_paths(&before), vec![PathBuf::from("/d/a"), PathBuf::from("/d/b")]);

    fs.remove("/d/a");
    fs.add_file("/d/c");

    let after = resync(&fs, Path::new("/d")).unwrap();
    assert_eq!(child_paths(&after), vec![PathBuf::from("/d/b"), PathBuf::from("/d/c")]);
}

#[test]
fn file_change_preempts_a_simultaneous_directory_change() {
    let (fs, mut core) = MockTreeBuilder::new()
        .watched_file("/proj/Cargo.toml")
        .watched_dir("/proj/src", &["main.rs"])
        .build();

    fs.touch("/proj/Cargo.toml");
    fs.add_file("/proj/src/lib.rs");

    assert_eq!(core.pass().unwrap(), changed(Stage::Files, "/proj/Cargo.toml"));
    assert_eq!(core.pass().unwrap(), changed(Stage::Dirs, "/proj/src"));
    assert_eq!(core.pass().unwrap(), PassOutcome::Idle);
}

#[test]
fn replaced_child_is_not_reported_after_resync() {
    let (fs, mut core) = MockTreeBuilder::new()
        .watched_dir("/d", &["x"])
        .build();

    fs.remove("/d/x");
    fs.add_file("/d/y");

    assert_eq!(core.pass().unwrap(), changed(Stage::Dirs, "/d"));
    assert_eq!(
        child_paths(core.watch_set().dirs[0].children()),
        vec![PathBuf::from("/d/y")]
    );
    assert_eq!(core.pass().unwrap(), PassOutcome::Idle);

    // A real edit of the new child is still picked up.
    fs.touch("/d/y");
    assert_eq!(core.pass().unwrap(), changed(Stage::DirContents, "/d/y"));
}

#[test]
fn subdirectories_are_opaque() {
    let (fs, mut core) = MockTreeBuilder::new()
        .file("/d/sub/deep.txt")
        .watched_dir("/d", &[])
        .build();
    assert_eq!(
        child_paths(core.watch_set().dirs[0].children()),
        vec![PathBuf::from("/d/sub")]
    );

    // An edit two levels down does not change /d/sub's own timestamp.
    fs.touch("/d/sub/deep.txt");
    assert_eq!(core.pass().unwrap(), PassOutcome::Idle);

    // A membership change inside it does.
    fs.add_file("/d/sub/other.txt");
    assert_eq!(core.pass().unwrap(), changed(Stage::DirContents, "/d/sub"));
}

#[test]
fn touching_a_directory_without_membership_changes_still_triggers() {
    let (fs, mut core) = MockTreeBuilder::new()
        .watched_dir("/d", &["a"])
        .build();

    fs.touch("/d");

    assert_eq!(core.pass().unwrap(), changed(Stage::Dirs, "/d"));
    assert_eq!(core.watch_set().dirs[0].children().len(), 1);
}
