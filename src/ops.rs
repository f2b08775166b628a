//! The reconciliation operations.
//!
//! Every operation is a per-branch planner: it looks at one audiobook
//! directory and returns the [`Change`]s needed to bring names and tags in
//! line. `plan` runs it over a whole tree; nothing is mutated here.

use std::path::Path;

use crate::config::LibrarySettings;
use crate::error::Result;
use crate::library::{Branch, walk};
use crate::report::Reporter;
use crate::staging::Change;
use crate::tags::TagStore;

mod chapters;
mod collisions;
mod dirs;
mod purge;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Delete non-audio side files (cover art, playlists).
    Purge,
    /// Tags from `"{album} -- {track} -- {title}.mp3"` file names.
    NameToTag { renumber: bool },
    /// File names from tags.
    TagToName { renumber: bool },
    /// Album and artist tags from `"{album} -- {author}"` directory names.
    DirnameToTag { renumber: bool, rename: bool },
    /// Directory name from the first chapter's tags.
    TagToDirname,
    SanitizeDirnames,
    /// Title becomes `"[ n ]"`, optionally with a named intro chapter.
    OverwriteTitleFromTrack {
        renumber: bool,
        intro: Option<String>,
    },
}

/// What the planners need besides the branch itself.
pub struct Context<'a> {
    pub settings: &'a LibrarySettings,
    pub store: &'a dyn TagStore,
    pub reporter: &'a dyn Reporter,
}

impl Operation {
    pub fn plan_branch(&self, branch: &Branch, ctx: &Context<'_>) -> Result<Vec<Change>> {
        match self {
            Operation::Purge => Ok(purge::plan(branch, ctx)),
            Operation::NameToTag { renumber } => chapters::name_to_tag(branch, *renumber, ctx),
            Operation::TagToName { renumber } => chapters::tag_to_name(branch, *renumber, ctx),
            Operation::DirnameToTag { renumber, rename } => {
                dirs::dirname_to_tag(branch, *renumber, *rename, ctx)
            }
            Operation::TagToDirname => dirs::tag_to_dirname(branch, ctx),
            Operation::SanitizeDirnames => Ok(dirs::sanitize_dirname(branch, ctx)),
            Operation::OverwriteTitleFromTrack { renumber, intro } => {
                chapters::overwrite_title_from_track(branch, *renumber, intro.as_deref(), ctx)
            }
        }
    }
}

/// Plan `op` for every audiobook under `root`, in walk order.
///
/// Renames that would collide with another planned rename or an existing
/// file are dropped with a warning before anything is staged.
pub fn plan(root: &Path, op: &Operation, ctx: &Context<'_>) -> Result<Vec<Change>> {
    let changes = walk(root, ctx.settings, ctx.reporter, |branch| {
        op.plan_branch(branch, ctx)
    })?;
    Ok(collisions::drop_colliding_renames(changes, ctx.reporter))
}
