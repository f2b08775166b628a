use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::AudibleSettings;
use crate::error::{Error, Result};
use crate::report::Reporter;

use super::export::LibraryItem;
use super::pool::run_bounded;

/// Codec assumed for legacy `.aax` downloads when none is known.
pub(super) const LEGACY_CODEC: &str = "LC_128_44100_stereo";

/// Naming scheme handed to the decoder for its output directories.
pub(super) const DIR_NAMING_SCHEME: &str = "$title -- $artist";

/// Find the codec of an already downloaded `.aaxc` for `base` in `dir`.
fn discover_codec(dir: &Path, base: &str) -> Option<String> {
    let prefix = format!("{base}-");
    let mut codecs: Vec<String> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok()?.file_name().into_string().ok())
        .filter_map(|name| {
            name.strip_prefix(&prefix)?
                .strip_suffix(".aaxc")
                .map(str::to_string)
        })
        .collect();
    codecs.sort();
    codecs.pop()
}

/// Candidate container paths for `item`, encrypted `.aaxc` first.
pub(super) fn candidate_paths(dir: &Path, item: &LibraryItem) -> Vec<PathBuf> {
    let base = item.base_filename();
    let mut candidates = Vec::with_capacity(2);

    let codec = item.codec.clone().or_else(|| discover_codec(dir, &base));
    if let Some(codec) = &codec {
        candidates.push(dir.join(format!("{base}-{codec}.aaxc")));
    }
    let legacy = item.codec.as_deref().unwrap_or(LEGACY_CODEC);
    candidates.push(dir.join(format!("{base}-{legacy}.aax")));
    candidates
}

/// The downloaded container for `item`, or `NotDownloaded`.
pub fn locate_container(dir: &Path, item: &LibraryItem) -> Result<PathBuf> {
    candidate_paths(dir, item)
        .into_iter()
        .find(|p| p.is_file())
        .ok_or_else(|| Error::NotDownloaded(item.base_filename()))
}

pub(super) fn decode_command(decoder: &str, container: &Path) -> Command {
    let mut cmd = Command::new(decoder);
    cmd.arg("--dir-naming-scheme")
        .arg(DIR_NAMING_SCHEME)
        .arg(container);
    cmd
}

fn convert_one(dir: &Path, decoder: &str, item: &LibraryItem) -> Result<()> {
    let container = locate_container(dir, item)?;
    let status = decode_command(decoder, &container)
        .status()
        .map_err(|source| Error::Spawn {
            tool: decoder.to_string(),
            source,
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(Error::ToolFailed {
            tool: decoder.to_string(),
            status,
        })
    }
}

/// Decode every item with at most `jobs` decoder processes at a time.
///
/// Progress and failures are reported per item; the call fails when at
/// least one item did not convert.
pub fn convert(
    items: &[LibraryItem],
    dir: &Path,
    settings: &AudibleSettings,
    jobs: usize,
    reporter: &(dyn Reporter + Sync),
) -> Result<()> {
    reporter.info("items to convert:");
    for item in items {
        reporter.info(&item.base_filename());
    }
    reporter.info("starting conversion");
    reporter.debug(&format!("using {jobs} worker(s)"));

    let results = run_bounded(items, jobs, |index, item| {
        let base = item.base_filename();
        reporter.info(&format!("converting {index}: {base}"));
        let result = convert_one(dir, &settings.decoder, item);
        match &result {
            Ok(()) => reporter.info(&format!("conversion {index} finished: {base}")),
            Err(e) => reporter.warn(&format!("conversion {index} failed: {base}: {e}")),
        }
        result.is_ok()
    })?;

    let total = items.len();
    let failed = results.iter().filter(|ok| !**ok).count();
    if failed > 0 {
        return Err(Error::Conversions { failed, total });
    }
    Ok(())
}
