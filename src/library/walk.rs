use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::{Error, Result};
use crate::report::Reporter;

use super::branch::{Branch, classify};

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Walk `root` and hand every audiobook branch to `on_branch`.
///
/// Directories are visited pre-order, siblings in natural order. An audiobook
/// directory is handed over once and its subdirectories are not visited. A
/// file root is treated as an immediate branch. The walk itself only reads;
/// whatever `on_branch` returns is collected in visiting order.
pub fn walk<T, F>(
    root: &Path,
    settings: &LibrarySettings,
    reporter: &dyn Reporter,
    mut on_branch: F,
) -> Result<Vec<T>>
where
    F: FnMut(&Branch) -> Result<Vec<T>>,
{
    let mut collected = Vec::new();

    // a mistyped file root must not fall back to its parent directory
    if !root.try_exists().map_err(|e| Error::io(root, e))? {
        return Err(Error::io(root, io::Error::from(io::ErrorKind::NotFound)));
    }

    if !root.is_dir() {
        let branch = classify(root, settings, reporter)?;
        if branch.is_audiobook() {
            reporter.debug(&format!("handling single path {}", root.display()));
            collected.extend(on_branch(&branch)?);
        } else {
            reporter.info(&format!(
                "{} is not inside an audiobook directory",
                root.display()
            ));
        }
        return Ok(collected);
    }

    let include_hidden = settings.include_hidden;
    let mut it = WalkDir::new(root)
        .follow_links(settings.follow_links)
        .sort_by(|a, b| alphanumeric_sort::compare_os_str(a.file_name(), b.file_name()))
        .into_iter()
        .filter_entry(move |e| include_hidden || e.depth() == 0 || !is_hidden(e.path()));

    while let Some(entry) = it.next() {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let branch = classify(entry.path(), settings, reporter)?;
        if branch.is_audiobook() {
            reporter.debug(&format!("handling audiobook {}", entry.path().display()));
            collected.extend(on_branch(&branch)?);
            it.skip_current_dir();
        }
    }

    Ok(collected)
}
