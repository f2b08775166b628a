use std::path::PathBuf;

use serde::Deserialize;

use crate::config::AudibleSettings;
use crate::error::{Error, Result};
use crate::report::Reporter;

use super::DateWindow;

/// One title of the account library, as written by `audible library export`.
///
/// Only the fields that name the downloaded files are kept; the export carries
/// many more, which are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LibraryItem {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Codec of the downloaded container, when the export carries it.
    #[serde(default)]
    pub codec: Option<String>,
}

impl LibraryItem {
    pub fn full_title(&self) -> String {
        match self.subtitle.as_deref().map(str::trim) {
            Some(sub) if !sub.is_empty() => format!("{}: {sub}", self.title),
            _ => self.title.clone(),
        }
    }

    /// ASCII-only base name the download tool gives this title's files.
    pub fn base_filename(&self) -> String {
        any_ascii::any_ascii(&self.full_title())
            .replace(' ', "_")
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || "-_.()".contains(*c))
            .collect()
    }
}

pub(super) fn parse_export(bytes: &[u8]) -> Result<Vec<LibraryItem>> {
    Ok(serde_json::from_slice(bytes)?)
}

fn export_path() -> PathBuf {
    std::env::temp_dir().join(format!("kaudiobooks-library-{}.json", std::process::id()))
}

/// Fetch the library listing in a single round trip.
pub async fn fetch_library(
    settings: &AudibleSettings,
    window: &DateWindow,
    reporter: &dyn Reporter,
) -> Result<Vec<LibraryItem>> {
    let out = export_path();
    reporter.debug(&format!("exporting library to {}", out.display()));

    let status = tokio::process::Command::new(&settings.cli)
        .args(["library", "export", "--format", "json", "--output"])
        .arg(&out)
        .args(window.args())
        .status()
        .await
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

    let bytes = tokio::fs::read(&out).await.map_err(|e| Error::io(&out, e))?;
    if let Err(e) = tokio::fs::remove_file(&out).await {
        reporter.debug(&format!("could not remove {}: {e}", out.display()));
    }
    parse_export(&bytes)
}
