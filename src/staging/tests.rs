use std::fs;

use tempfile::tempdir;

use super::*;
use crate::error::Error;
use crate::testing::{JsonTagStore, RecordingReporter, ScriptedConfirm, tags};

fn snapshot(dir: &std::path::Path) -> Vec<(String, Vec<u8>)> {
    let mut out: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| {
            let e = e.unwrap();
            (
                e.file_name().to_string_lossy().into_owned(),
                fs::read(e.path()).unwrap(),
            )
        })
        .collect();
    out.sort();
    out
}

fn three_changes(dir: &std::path::Path) -> Vec<Change> {
    JsonTagStore::write(&dir.join("a.mp3"), &tags("A", "X", "one", (1, 2)));
    JsonTagStore::write(&dir.join("b.mp3"), &tags("A", "X", "two", (2, 2)));
    fs::write(dir.join("cover.jpg"), b"jpeg").unwrap();

    vec![
        Change::RemoveFile {
            path: dir.join("cover.jpg"),
        },
        Change::WriteTags {
            path: dir.join("a.mp3"),
            tags: tags("B", "X", "one", (1, 2)),
            then_rename: Some(dir.join("B -- 1 -- one.mp3")),
        },
        Change::Rename {
            from: dir.join("b.mp3"),
            to: dir.join("renamed.mp3"),
        },
    ]
}

#[test]
fn empty_plan_does_not_prompt() {
    let mut confirm = ScriptedConfirm::answering(&["yes"]);
    let reporter = RecordingReporter::default();
    let outcome = stage_and_run(Vec::new(), &mut confirm, &JsonTagStore, &reporter).unwrap();
    assert_eq!(outcome, Outcome::NothingToChange);
    assert!(confirm.prompts.is_empty());
    assert!(reporter.contains("nothing to change"));
}

#[test]
fn declining_leaves_everything_byte_identical() {
    for answer in ["no", "", "y", "YES", " yes", "yes please"] {
        let dir = tempdir().unwrap();
        let changes = three_changes(dir.path());
        let before = snapshot(dir.path());

        let mut confirm = ScriptedConfirm::answering(&[answer]);
        let outcome = stage_and_run(
            changes,
            &mut confirm,
            &JsonTagStore,
            &RecordingReporter::default(),
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Declined { pending: 3 });
        assert_eq!(confirm.prompts, vec![PROMPT.to_string()]);
        assert_eq!(snapshot(dir.path()), before, "answer {answer:?}");
    }
}

#[test]
fn confirming_applies_changes_in_order() {
    let dir = tempdir().unwrap();
    let changes = three_changes(dir.path());

    let mut confirm = ScriptedConfirm::answering(&["yes\n"]);
    let reporter = RecordingReporter::default();
    let outcome = stage_and_run(changes, &mut confirm, &JsonTagStore, &reporter).unwrap();
    assert_eq!(outcome, Outcome::Applied(3));

    let names: Vec<String> = snapshot(dir.path()).into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["B -- 1 -- one.mp3", "renamed.mp3"]);
    assert_eq!(
        JsonTagStore::read(&dir.path().join("B -- 1 -- one.mp3")),
        tags("B", "X", "one", (1, 2))
    );
    assert!(reporter.contains("[1/3] delete"));
    assert!(reporter.contains("applying change 3/3"));
}

#[test]
fn first_failure_aborts_the_rest() {
    let dir = tempdir().unwrap();
    let d = dir.path();
    fs::write(d.join("a.mp3"), b"a").unwrap();
    fs::write(d.join("taken.mp3"), b"taken").unwrap();
    fs::write(d.join("c.jpg"), b"c").unwrap();

    let changes = vec![
        Change::Rename {
            from: d.join("a.mp3"),
            to: d.join("moved.mp3"),
        },
        Change::Rename {
            from: d.join("moved.mp3"),
            to: d.join("taken.mp3"),
        },
        Change::RemoveFile {
            path: d.join("c.jpg"),
        },
    ];

    let mut confirm = ScriptedConfirm::answering(&["yes"]);
    let reporter = RecordingReporter::default();
    let err = stage_and_run(changes, &mut confirm, &JsonTagStore, &reporter).unwrap_err();

    match err {
        Error::Apply {
            index,
            applied,
            source,
        } => {
            assert_eq!(index, 2);
            assert_eq!(applied, 1);
            assert!(matches!(*source, Error::TargetExists { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(d.join("moved.mp3").exists());
    assert_eq!(fs::read(d.join("taken.mp3")).unwrap(), b"taken");
    assert!(d.join("c.jpg").exists());
    assert!(reporter.contains("1 remaining change(s) skipped"));
}

#[test]
fn change_descriptions_name_the_target() {
    let change = Change::WriteTags {
        path: "/lib/Book/a.mp3".into(),
        tags: tags("Book", "Author", "Intro", (1, 9)),
        then_rename: Some("/lib/Book/Book -- 1 -- Intro.mp3".into()),
    };
    let text = change.to_string();
    assert!(text.contains("album `Book`"));
    assert!(text.contains("track 1/9"));
    assert!(text.ends_with("--> rename to `Book -- 1 -- Intro.mp3`"));
}
