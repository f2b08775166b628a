use crate::error::Result;
use crate::library::Branch;
use crate::naming::{self, format_chapter_name, unsanitize};
use crate::report::Reporter;
use crate::staging::Change;
use crate::tags::TagRecord;

use super::Context;

/// Turn the difference between `current` and `updated` into at most one change.
///
/// The tag is written when it differs (or `always_write` is set). With
/// `rename` the file name is derived from `updated`; the write always happens
/// before the rename since renaming changes the directory listing that
/// numbering is derived from.
pub(super) fn retag(
    branch: &Branch,
    name: &str,
    current: &TagRecord,
    updated: TagRecord,
    rename: bool,
    always_write: bool,
    reporter: &dyn Reporter,
) -> Option<Change> {
    let path = branch.path_of(name);
    let then_rename = if rename {
        let target = format_chapter_name(
            &updated.album,
            updated.track,
            &updated.title,
            branch.digits(),
        );
        if target != name {
            reporter.info(&format!("rename: `{name}`\n--> `{target}`"));
            Some(branch.path_of(&target))
        } else {
            None
        }
    } else {
        None
    };

    if always_write || *current != updated {
        Some(Change::WriteTags {
            path,
            tags: updated,
            then_rename,
        })
    } else {
        then_rename.map(|to| Change::Rename { from: path, to })
    }
}

pub(super) fn report_diff(
    name: &str,
    current: &TagRecord,
    updated: &TagRecord,
    reporter: &dyn Reporter,
) {
    let fields = [
        ("album", &current.album, &updated.album),
        ("artist", &current.artist, &updated.artist),
        ("title", &current.title, &updated.title),
    ];
    for (field, old, new) in fields {
        if old != new {
            reporter.info(&format!("`{name}`: updating {field}: `{old}`\n--> `{new}`"));
        }
    }
    if current.track_num() != updated.track_num() {
        reporter.info(&format!(
            "`{name}`: updating track number to: {}/{}",
            updated.track, updated.track_total
        ));
    }
}

fn count(branch: &Branch) -> u32 {
    branch.count() as u32
}

pub(super) fn name_to_tag(
    branch: &Branch,
    renumber: bool,
    ctx: &Context<'_>,
) -> Result<Vec<Change>> {
    let mut changes = Vec::new();

    for (index, name) in branch.numbered_chapters() {
        let Some(parts) = naming::parse_chapter_name(name) else {
            ctx.reporter
                .info(&format!("`{name}` does not match the chapter name pattern, skipping"));
            continue;
        };

        let current = ctx.store.load(&branch.path_of(name))?;
        let mut updated = current.clone();
        updated.title = unsanitize(parts.title);
        updated.album = unsanitize(parts.album);
        if renumber {
            updated.set_track_num(index, count(branch));
        }

        report_diff(name, &current, &updated, ctx.reporter);
        changes.extend(retag(
            branch,
            name,
            &current,
            updated,
            false,
            false,
            ctx.reporter,
        ));
    }

    Ok(changes)
}

pub(super) fn tag_to_name(
    branch: &Branch,
    renumber: bool,
    ctx: &Context<'_>,
) -> Result<Vec<Change>> {
    ctx.reporter.debug(&format!("digits: {}", branch.digits()));
    let mut changes = Vec::new();

    for (index, name) in branch.numbered_chapters() {
        let current = ctx.store.load(&branch.path_of(name))?;
        let mut updated = current.clone();
        if renumber {
            updated.set_track_num(index, count(branch));
        }

        report_diff(name, &current, &updated, ctx.reporter);
        changes.extend(retag(
            branch,
            name,
            &current,
            updated,
            true,
            false,
            ctx.reporter,
        ));
    }

    Ok(changes)
}

fn placeholder_title(index: u32, intro: Option<&str>) -> String {
    match intro {
        Some(intro) if index == 1 => intro.to_string(),
        Some(_) => format!("[ {} ]", index - 1),
        None => format!("[ {index} ]"),
    }
}

pub(super) fn overwrite_title_from_track(
    branch: &Branch,
    renumber: bool,
    intro: Option<&str>,
    ctx: &Context<'_>,
) -> Result<Vec<Change>> {
    let mut changes = Vec::new();

    for (index, name) in branch.numbered_chapters() {
        let current = ctx.store.load(&branch.path_of(name))?;
        let mut updated = current.clone();
        updated.title = placeholder_title(index, intro);
        if renumber {
            updated.set_track_num(index, count(branch));
        }

        report_diff(name, &current, &updated, ctx.reporter);
        changes.extend(retag(
            branch,
            name,
            &current,
            updated,
            true,
            true,
            ctx.reporter,
        ));
    }

    Ok(changes)
}
