use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::report::Reporter;
use crate::staging::Change;

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Drop every rename that would fail or clobber when the plan is applied in
/// order. Tag writes that carried such a rename are kept without it.
///
/// A rename is dropped when another change renames to the same target, or
/// when the target still exists at the point the rename would run.
pub(super) fn drop_colliding_renames(
    changes: Vec<Change>,
    reporter: &dyn Reporter,
) -> Vec<Change> {
    let mut claims: HashMap<PathBuf, usize> = HashMap::new();
    for (_, to) in changes.iter().filter_map(Change::rename_paths) {
        *claims.entry(to.to_path_buf()).or_default() += 1;
    }

    // sources of renames already accepted; they are gone by the time later
    // changes run
    let mut vacated: HashSet<PathBuf> = HashSet::new();

    changes
        .into_iter()
        .filter_map(|change| {
            let Some((from, to)) = change
                .rename_paths()
                .map(|(from, to)| (from.to_path_buf(), to.to_path_buf()))
            else {
                return Some(change);
            };

            let conflict = if claims.get(&to).copied().unwrap_or(0) > 1 {
                Some("is the target of more than one rename")
            } else if !vacated.contains(&to) && to.symlink_metadata().is_ok() {
                Some("already exists")
            } else {
                None
            };

            match conflict {
                None => {
                    vacated.remove(&to);
                    vacated.insert(from);
                    Some(change)
                }
                Some(reason) => {
                    reporter.warn(&format!(
                        "not renaming `{}`: `{}` {reason}",
                        from.display(),
                        display_name(&to)
                    ));
                    change.without_rename()
                }
            }
        })
        .collect()
}
