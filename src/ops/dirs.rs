use crate::error::Result;
use crate::library::Branch;
use crate::naming::{self, format_dir_name, sanitize, unsanitize};
use crate::staging::Change;

use super::Context;
use super::chapters::{report_diff, retag};

/// Rename the branch directory to `new_name` next to where it is now.
fn rename_dir(branch: &Branch, new_name: &str, ctx: &Context<'_>) -> Option<Change> {
    let Some(parent) = branch.dir.parent() else {
        ctx.reporter.warn(&format!(
            "cannot rename {}: it has no parent directory",
            branch.dir.display()
        ));
        return None;
    };
    ctx.reporter.info(&format!(
        "renaming directory: `{}`\n--> `{new_name}`",
        branch.dir.display()
    ));
    Some(Change::Rename {
        from: branch.dir.clone(),
        to: parent.join(new_name),
    })
}

pub(super) fn dirname_to_tag(
    branch: &Branch,
    renumber: bool,
    rename: bool,
    ctx: &Context<'_>,
) -> Result<Vec<Change>> {
    let Some(dir_name) = branch.dir_name() else {
        ctx.reporter
            .warn(&format!("{} has no usable directory name", branch.dir.display()));
        return Ok(Vec::new());
    };
    let Some(parts) = naming::parse_dir_name(dir_name) else {
        ctx.reporter
            .info(&format!("directory name does not match pattern: {dir_name}"));
        return Ok(Vec::new());
    };
    let album = unsanitize(parts.album);
    let author = unsanitize(parts.author);

    let mut changes = Vec::new();
    for (index, name) in branch.numbered_chapters() {
        let current = ctx.store.load(&branch.path_of(name))?;
        let mut updated = current.clone();
        updated.album = album.clone();
        updated.artist = author.clone();
        if renumber {
            updated.set_track_num(index, branch.count() as u32);
        }

        report_diff(name, &current, &updated, ctx.reporter);
        changes.extend(retag(
            branch,
            name,
            &current,
            updated,
            rename,
            false,
            ctx.reporter,
        ));
    }

    Ok(changes)
}

pub(super) fn tag_to_dirname(branch: &Branch, ctx: &Context<'_>) -> Result<Vec<Change>> {
    let (Some(dir_name), Some(sample)) = (branch.dir_name(), branch.first_chapter()) else {
        return Ok(Vec::new());
    };

    let tags = ctx.store.load(&branch.path_of(sample))?;
    if tags.album.is_empty() || tags.artist.is_empty() {
        ctx.reporter.warn(&format!(
            "`{sample}` has no album or artist tag, leaving {} as is",
            branch.dir.display()
        ));
        return Ok(Vec::new());
    }

    let new_name = format_dir_name(&tags.album, &tags.artist);
    if new_name == dir_name {
        return Ok(Vec::new());
    }
    Ok(rename_dir(branch, &new_name, ctx).into_iter().collect())
}

pub(super) fn sanitize_dirname(branch: &Branch, ctx: &Context<'_>) -> Vec<Change> {
    let Some(dir_name) = branch.dir_name() else {
        return Vec::new();
    };

    let sanitized = sanitize(dir_name);
    if sanitized == dir_name {
        return Vec::new();
    }
    rename_dir(branch, &sanitized, ctx).into_iter().collect()
}
