use std::path::Path;
use std::process::Command;

use crate::config::AudibleSettings;
use crate::error::{Error, Result};
use crate::report::Reporter;

use super::DateWindow;

pub(super) fn download_command(
    settings: &AudibleSettings,
    dir: &Path,
    window: &DateWindow,
) -> Command {
    let mut cmd = Command::new(&settings.cli);
    cmd.arg("download")
        .arg("--output-dir")
        .arg(dir)
        .args(["--pdf", "--cover", "--annotation", "--chapter"])
        .args(["--chapter-type", "Flat"])
        .arg("--quality")
        .arg(&settings.quality)
        .args(["--aaxc", "--all"])
        .args(window.args());
    cmd
}

/// Download every title not yet present in `dir`.
pub fn download(
    settings: &AudibleSettings,
    dir: &Path,
    window: &DateWindow,
    reporter: &dyn Reporter,
) -> Result<()> {
    reporter.info(&format!("downloading library into {}", dir.display()));
    let status = download_command(settings, dir, window)
        .status()
        .map_err(|source| Error::Spawn {
            tool: settings.cli.clone(),
            source,
        })?;
    if !status.success() {
        return Err(Error::ToolFailed {
            tool: settings.cli.clone(),
            status,
        });
    }
    reporter.info("download finished");
    Ok(())
}
