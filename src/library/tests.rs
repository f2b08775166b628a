use std::fs;
use std::path::Path;

use tempfile::tempdir;

use super::*;
use crate::config::LibrarySettings;
use crate::testing::RecordingReporter;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
}

fn dir_names(root: &Path, settings: &LibrarySettings) -> Vec<String> {
    let reporter = RecordingReporter::default();
    walk(root, settings, &reporter, |branch| {
        Ok(vec![
            branch
                .dir
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .into_owned(),
        ])
    })
    .unwrap()
}

#[test]
fn directory_without_chapters_is_not_an_audiobook() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("a.jpg"));
    touch(&dir.path().join("b.m3u"));

    let settings = LibrarySettings::default();
    let reporter = RecordingReporter::default();
    let branch = classify(dir.path(), &settings, &reporter).unwrap();
    assert!(!branch.is_audiobook());
    assert_eq!(branch.entries, vec!["a.jpg", "b.m3u"]);

    touch(&dir.path().join("c.mp3"));
    let branch = classify(dir.path(), &settings, &reporter).unwrap();
    assert!(branch.is_audiobook());
    assert_eq!(branch.chapters, vec!["c.mp3"]);
}

#[test]
fn chapters_are_listed_in_natural_order() {
    let dir = tempdir().unwrap();
    for name in ["ch10.mp3", "ch2.mp3", "ch1.mp3", "cover.jpg"] {
        touch(&dir.path().join(name));
    }
    fs::create_dir(dir.path().join("extras.mp3")).unwrap();

    let settings = LibrarySettings::default();
    let branch = classify(dir.path(), &settings, &RecordingReporter::default()).unwrap();
    assert_eq!(branch.chapters, vec!["ch1.mp3", "ch2.mp3", "ch10.mp3"]);
    assert_eq!(branch.count(), 3);
    assert_eq!(branch.digits(), 1);
    let numbered: Vec<_> = branch.numbered_chapters().collect();
    assert_eq!(
        numbered,
        vec![(1, "ch1.mp3"), (2, "ch2.mp3"), (3, "ch10.mp3")]
    );
}

#[test]
fn file_root_focuses_on_that_file_but_keeps_numbering() {
    let dir = tempdir().unwrap();
    for name in ["1.mp3", "2.mp3", "3.mp3"] {
        touch(&dir.path().join(name));
    }

    let settings = LibrarySettings::default();
    let branch = classify(
        &dir.path().join("2.mp3"),
        &settings,
        &RecordingReporter::default(),
    )
    .unwrap();
    assert_eq!(branch.dir, dir.path());
    assert_eq!(branch.focus.as_deref(), Some("2.mp3"));
    let numbered: Vec<_> = branch.numbered_chapters().collect();
    assert_eq!(numbered, vec![(2, "2.mp3")]);
    assert_eq!(branch.count(), 3);
}

#[test]
fn walk_visits_branches_pre_order_in_natural_order() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("Book 10/a.mp3"));
    touch(&root.join("Book 2/a.mp3"));
    touch(&root.join("Series/Part 1/a.mp3"));
    touch(&root.join("Series/notes.txt"));
    touch(&root.join("Empty/cover.jpg"));

    let visited = dir_names(root, &LibrarySettings::default());
    assert_eq!(visited, vec!["Book 2", "Book 10", "Series/Part 1"]);
}

#[test]
fn walk_does_not_descend_below_an_audiobook() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("Book/a.mp3"));
    touch(&root.join("Book/Bonus/b.mp3"));

    let visited = dir_names(root, &LibrarySettings::default());
    assert_eq!(visited, vec!["Book"]);
}

#[test]
fn walk_treats_root_audiobook_as_single_branch() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("a.mp3"));
    touch(&dir.path().join("Sub/b.mp3"));

    let visited = dir_names(dir.path(), &LibrarySettings::default());
    assert_eq!(visited, vec![""]);
}

#[test]
fn walk_skips_hidden_directories_when_configured() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(&root.join(".trash/Old/a.mp3"));
    touch(&root.join("Book/a.mp3"));

    let settings = LibrarySettings {
        include_hidden: false,
        ..LibrarySettings::default()
    };
    assert_eq!(dir_names(root, &settings), vec!["Book"]);
    assert_eq!(
        dir_names(root, &LibrarySettings::default()),
        vec![".trash/Old", "Book"]
    );
}

#[test]
fn walk_on_file_outside_audiobook_collects_nothing() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("notes.txt");
    touch(&file);

    let reporter = RecordingReporter::default();
    let out: Vec<()> = walk(&file, &LibrarySettings::default(), &reporter, |_| {
        panic!("no branch expected")
    })
    .unwrap();
    assert!(out.is_empty());
}

#[test]
fn walk_rejects_a_root_that_does_not_exist() {
    let dir = tempdir().unwrap();
    let book = dir.path().join("Book");
    touch(&book.join("01.mp3"));

    let missing = book.join("typo.mp3");
    let result: crate::error::Result<Vec<()>> = walk(
        &missing,
        &LibrarySettings::default(),
        &RecordingReporter::default(),
        |_| panic!("no branch expected"),
    );
    match result {
        Err(crate::error::Error::Io { path, source }) => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected a not-found error, got {other:?}"),
    }
}
