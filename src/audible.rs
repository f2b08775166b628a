//! Audible side of the library: downloading containers and turning them into
//! chapter files.
//!
//! The `audible` command line client does the account work (listing and
//! downloading); an external decoder (`aaxtomp3`) writes the chapters.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::AudibleSettings;
use crate::error::{Error, Result};

mod convert;
mod download;
mod export;
mod pool;

pub use convert::convert;
pub use download::download;
pub use export::fetch_library;


/// Optional inclusive `[start, end]` window on the date a title was added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl DateWindow {
    /// Flags understood by the `audible` client.
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(start) = self.start {
            args.push("--start-date".to_string());
            args.push(start.format("%Y-%m-%dT%H:%M:%S").to_string());
        }
        if let Some(end) = self.end {
            args.push("--end-date".to_string());
            args.push(end.format("%Y-%m-%dT%H:%M:%S").to_string());
        }
        args
    }
}

/// Accepts `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_date(value: &str) -> Result<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| Error::InvalidDate(value.to_string()))
}

/// The audible directory from the command line, falling back to settings.
pub fn audible_dir(flag: Option<&Path>, settings: &AudibleSettings) -> Result<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| settings.dir.clone())
        .ok_or(Error::MissingAudibleDir)
}
