use std::path::Path;

use crate::library::Branch;
use crate::staging::Change;

use super::Context;

fn is_clutter(name: &str, extensions: &[String]) -> bool {
    Path::new(name)
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .map(|e| e.trim().trim_start_matches('.'))
                .any(|e| !e.is_empty() && e.eq_ignore_ascii_case(ext))
        })
}

pub(super) fn plan(branch: &Branch, ctx: &Context<'_>) -> Vec<Change> {
    branch
        .visible_entries()
        .filter(|name| is_clutter(name, &ctx.settings.clutter_extensions))
        .map(|name| {
            let path = branch.path_of(name);
            ctx.reporter.debug(&format!("clutter: {}", path.display()));
            Change::RemoveFile { path }
        })
        .collect()
}
