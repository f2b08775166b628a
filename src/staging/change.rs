use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::tags::{TagRecord, TagStore};

/// A pending filesystem or tag mutation.
///
/// Changes are only planned while the tree is scanned; nothing happens until
/// [`Change::apply`] runs after confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    RemoveFile {
        path: PathBuf,
    },
    /// Rename a chapter file or an audiobook directory.
    Rename {
        from: PathBuf,
        to: PathBuf,
    },
    /// Write the tag record, then optionally rename the file.
    WriteTags {
        path: PathBuf,
        tags: TagRecord,
        then_rename: Option<PathBuf>,
    },
}

impl Change {
    /// Source and target of the rename this change performs, if any.
    pub fn rename_paths(&self) -> Option<(&Path, &Path)> {
        match self {
            Change::Rename { from, to } => Some((from, to)),
            Change::WriteTags {
                path,
                then_rename: Some(to),
                ..
            } => Some((path, to)),
            _ => None,
        }
    }

    /// This change with its rename removed; `None` when nothing is left.
    pub fn without_rename(self) -> Option<Change> {
        match self {
            Change::Rename { .. } => None,
            Change::WriteTags { path, tags, .. } => Some(Change::WriteTags {
                path,
                tags,
                then_rename: None,
            }),
            other => Some(other),
        }
    }

    pub fn apply(&self, store: &dyn TagStore) -> Result<()> {
        match self {
            Change::RemoveFile { path } => fs::remove_file(path).map_err(|e| Error::io(path, e)),
            Change::Rename { from, to } => rename(from, to),
            Change::WriteTags {
                path,
                tags,
                then_rename,
            } => {
                store.save(path, tags)?;
                match then_rename {
                    Some(to) => rename(path, to),
                    None => Ok(()),
                }
            }
        }
    }
}

fn rename(from: &Path, to: &Path) -> Result<()> {
    if to.symlink_metadata().is_ok() {
        return Err(Error::TargetExists {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }
    fs::rename(from, to).map_err(|e| Error::io(from, e))
}

fn name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::RemoveFile { path } => write!(f, "delete `{}`", path.display()),
            Change::Rename { from, to } => {
                write!(f, "rename `{}`\n--> `{}`", from.display(), name_of(to))
            }
            Change::WriteTags {
                path,
                tags,
                then_rename,
            } => {
                write!(
                    f,
                    "write tags to `{}`: album `{}`, artist `{}`, title `{}`, track {}/{}",
                    path.display(),
                    tags.album,
                    tags.artist,
                    tags.title,
                    tags.track,
                    tags.track_total
                )?;
                if let Some(to) = then_rename {
                    write!(f, "\n--> rename to `{}`", name_of(to))?;
                }
                Ok(())
            }
        }
    }
}
