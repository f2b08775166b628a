use super::*;

#[test]
fn sanitize_swaps_every_reserved_character() {
    assert_eq!(
        sanitize(r#"a\b/c:d*e?f"g<h>i|j"#),
        "a＼b／c꞉d＊e？f＂g＜h＞i｜j"
    );
    assert_eq!(sanitize("plain name"), "plain name");
}

#[test]
fn unsanitize_recovers_reserved_characters() {
    let raw = r#"What? "Me" <worried>: a/b\c * d|e"#;
    assert_eq!(unsanitize(&sanitize(raw)), raw);
    assert_eq!(unsanitize("no lookalikes here"), "no lookalikes here");
}

#[test]
fn sanitize_drops_nul_irreversibly() {
    assert_eq!(sanitize("a\0b"), "ab");
    assert_eq!(unsanitize(&sanitize("a\0b")), "ab");
}

#[test]
fn natural_sort_compares_digit_runs_by_value() {
    let mut names = vec![
        "ch2.mp3".to_string(),
        "ch10.mp3".to_string(),
        "ch1.mp3".to_string(),
    ];
    natural_sort(&mut names);
    assert_eq!(names, vec!["ch1.mp3", "ch2.mp3", "ch10.mp3"]);
}

#[test]
fn chapter_name_round_trips_through_the_pattern() {
    let name = format_chapter_name("Foo", 2, "Bar", 2);
    assert_eq!(name, "Foo -- 02 -- Bar.mp3");
    assert_eq!(
        parse_chapter_name(&name),
        Some(ChapterName {
            album: "Foo",
            track: "02",
            title: "Bar",
        })
    );
}

#[test]
fn chapter_name_sanitizes_tag_text() {
    let name = format_chapter_name("Who? Me", 7, "Part 1: Start", 1);
    assert_eq!(name, "Who？ Me -- 7 -- Part 1꞉ Start.mp3");
    let parts = parse_chapter_name(&name).unwrap();
    assert_eq!(unsanitize(parts.album), "Who? Me");
    assert_eq!(unsanitize(parts.title), "Part 1: Start");
}

#[test]
fn parse_chapter_name_rejects_unstructured_names() {
    assert_eq!(parse_chapter_name("01 - Intro.mp3"), None);
    assert_eq!(parse_chapter_name("Foo -- xx -- Bar.mp3"), None);
    assert_eq!(parse_chapter_name("Foo -- 01 -- Bar.m4a"), None);
}

#[test]
fn parse_dir_name_splits_album_and_author() {
    assert_eq!(
        parse_dir_name("The Hobbit -- J.R.R. Tolkien"),
        Some(DirName {
            album: "The Hobbit",
            author: "J.R.R. Tolkien",
        })
    );
    assert_eq!(parse_dir_name("The Hobbit"), None);
}

#[test]
fn format_dir_name_sanitizes_both_parts() {
    assert_eq!(format_dir_name("Why?", "A/B"), "Why？ -- A／B");
}

#[test]
fn digits_and_padding() {
    assert_eq!(digits(9), 1);
    assert_eq!(digits(12), 2);
    assert_eq!(digits(100), 3);
    assert_eq!(format_track(3, 2), "03");
    assert_eq!(format_track(12, 2), "12");
    assert_eq!(format_track(5, 1), "5");
}

#[test]
fn chapter_files_are_recognised_by_suffix() {
    assert!(is_chapter_file("a.mp3"));
    assert!(!is_chapter_file("cover.jpg"));
    assert!(!is_chapter_file("list.m3u"));
}
