use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LibrarySettings;
use crate::error::{Error, Result};
use crate::naming;
use crate::report::Reporter;

/// One directory as seen by the reconciliation operations.
///
/// `entries` holds the names of all direct child files in natural order and
/// `chapters` the subset that are chapter files. When the walk was rooted at
/// a single file, `focus` names it and operations only touch that entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub dir: PathBuf,
    pub entries: Vec<String>,
    pub chapters: Vec<String>,
    pub focus: Option<String>,
}

impl Branch {
    /// A branch is an audiobook when it holds at least one chapter file.
    pub fn is_audiobook(&self) -> bool {
        !self.chapters.is_empty()
    }

    pub fn count(&self) -> usize {
        self.chapters.len()
    }

    /// Zero-padding width for track numbers in this branch.
    pub fn digits(&self) -> usize {
        naming::digits(self.count())
    }

    pub fn dir_name(&self) -> Option<&str> {
        self.dir.file_name().and_then(|s| s.to_str())
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn in_focus(&self, name: &str) -> bool {
        self.focus.as_deref().is_none_or(|f| f == name)
    }

    /// Chapters with their 1-based position in natural order.
    ///
    /// Positions always count the whole directory, even when a focus hides
    /// the other chapters.
    pub fn numbered_chapters(&self) -> impl Iterator<Item = (u32, &str)> {
        self.chapters
            .iter()
            .enumerate()
            .map(|(i, name)| (i as u32 + 1, name.as_str()))
            .filter(|(_, name)| self.in_focus(name))
    }

    /// Direct child files that operations may act on.
    pub fn visible_entries(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(String::as_str)
            .filter(|name| self.in_focus(name))
    }

    /// The first chapter in natural order, used as the branch's representative.
    pub fn first_chapter(&self) -> Option<&str> {
        self.chapters.first().map(String::as_str)
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Classify `path` with a single directory listing.
///
/// A file path is classified through its parent directory and becomes the
/// branch's focus.
pub fn classify(
    path: &Path,
    settings: &LibrarySettings,
    reporter: &dyn Reporter,
) -> Result<Branch> {
    if path.is_dir() {
        return classify_dir(path, None, settings, reporter);
    }

    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string);
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    classify_dir(&parent, name, settings, reporter)
}

fn classify_dir(
    dir: &Path,
    focus: Option<String>,
    settings: &LibrarySettings,
    reporter: &dyn Reporter,
) -> Result<Branch> {
    let dir = if dir.file_name().is_none() {
        std::path::absolute(dir).map_err(|e| Error::io(dir, e))?
    } else {
        dir.to_path_buf()
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(&dir).map_err(|e| Error::io(&dir, e))? {
        let entry = entry.map_err(|e| Error::io(&dir, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if file_type.is_dir() || (file_type.is_symlink() && entry.path().is_dir()) {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) if settings.include_hidden || !is_hidden(&name) => entries.push(name),
            Ok(_) => {}
            Err(raw) => reporter.warn(&format!(
                "skipping non UTF-8 file name in {}: {:?}",
                dir.display(),
                raw
            )),
        }
    }
    naming::natural_sort(&mut entries);

    let chapters = entries
        .iter()
        .filter(|name| naming::is_chapter_file(name))
        .cloned()
        .collect();

    Ok(Branch {
        dir,
        entries,
        chapters,
        focus,
    })
}
