//! Structured names used across the library.
//!
//! Chapter files are named `"{album} -- {track} -- {title}.mp3"` and audiobook
//! directories `"{album} -- {author}"`. Tag text is made filesystem safe by
//! swapping reserved characters for unicode lookalikes; `unsanitize` undoes it.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

#[cfg(test)]
mod tests;

/// Suffix that marks a chapter file.
pub const CHAPTER_SUFFIX: &str = ".mp3";

/// Separator between the parts of a structured name.
pub const SEPARATOR: &str = " -- ";

static CHAPTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+) -- (\d+) -- (.+)\.mp3$").expect("valid chapter pattern"));

static DIR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+) -- (.+)$").expect("valid directory pattern"));

// (reserved, lookalike)
const REPLACEMENTS: [(char, char); 9] = [
    ('\\', '＼'),
    ('/', '／'),
    (':', '꞉'),
    ('*', '＊'),
    ('?', '？'),
    ('"', '＂'),
    ('<', '＜'),
    ('>', '＞'),
    ('|', '｜'),
];

/// Replace filesystem-reserved characters with their lookalikes.
///
/// NUL characters are dropped, so they do not survive `unsanitize`.
pub fn sanitize(s: &str) -> String {
    s.chars()
        .filter(|&c| c != '\0')
        .map(|c| {
            REPLACEMENTS
                .iter()
                .find(|(reserved, _)| *reserved == c)
                .map_or(c, |&(_, lookalike)| lookalike)
        })
        .collect()
}

/// Inverse of [`sanitize`] for everything but NUL.
pub fn unsanitize(s: &str) -> String {
    s.chars()
        .map(|c| {
            REPLACEMENTS
                .iter()
                .find(|(_, lookalike)| *lookalike == c)
                .map_or(c, |&(reserved, _)| reserved)
        })
        .collect()
}

/// Parts of a structured chapter file name, still in sanitized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterName<'a> {
    pub album: &'a str,
    pub track: &'a str,
    pub title: &'a str,
}

/// Parts of a structured directory name, still in sanitized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirName<'a> {
    pub album: &'a str,
    pub author: &'a str,
}

pub fn parse_chapter_name(name: &str) -> Option<ChapterName<'_>> {
    let caps = CHAPTER_PATTERN.captures(name)?;
    Some(ChapterName {
        album: caps.get(1)?.as_str(),
        track: caps.get(2)?.as_str(),
        title: caps.get(3)?.as_str(),
    })
}

pub fn parse_dir_name(name: &str) -> Option<DirName<'_>> {
    let caps = DIR_PATTERN.captures(name)?;
    Some(DirName {
        album: caps.get(1)?.as_str(),
        author: caps.get(2)?.as_str(),
    })
}

/// Build a chapter file name from raw tag text.
pub fn format_chapter_name(album: &str, track: u32, title: &str, digits: usize) -> String {
    format!(
        "{}{SEPARATOR}{}{SEPARATOR}{}{CHAPTER_SUFFIX}",
        sanitize(album),
        format_track(track, digits),
        sanitize(title)
    )
}

/// Build a directory name from raw tag text.
pub fn format_dir_name(album: &str, author: &str) -> String {
    sanitize(&format!("{album}{SEPARATOR}{author}"))
}

pub fn format_track(track: u32, digits: usize) -> String {
    format!("{track:0digits$}")
}

/// Decimal width of `count`, used to pad every track index of a branch.
pub fn digits(count: usize) -> usize {
    count.to_string().len()
}

pub fn is_chapter_file(name: &str) -> bool {
    name.ends_with(CHAPTER_SUFFIX)
}

/// Natural ordering: digit runs compare by value, so `ch2` sorts before `ch10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    alphanumeric_sort::compare_str(a, b)
}

pub fn natural_sort(names: &mut [String]) {
    names.sort_by(|a, b| natural_cmp(a, b));
}
