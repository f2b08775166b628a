//! The four tag fields this tool reconciles, and where they are stored.
//!
//! Tag text is always kept raw here; `naming::sanitize` is only applied when
//! a name is derived from it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

mod lofty_store;

pub use lofty_store::LoftyTagStore;


/// Album, artist, title and track number of one chapter file.
///
/// Missing text fields are empty strings; a missing track number is `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub album: String,
    pub artist: String,
    pub title: String,
    pub track: u32,
    pub track_total: u32,
}

impl TagRecord {
    pub fn track_num(&self) -> (u32, u32) {
        (self.track, self.track_total)
    }

    pub fn set_track_num(&mut self, index: u32, total: u32) {
        self.track = index;
        self.track_total = total;
    }
}

/// Reads and writes the [`TagRecord`] of a chapter file.
pub trait TagStore {
    fn load(&self, path: &Path) -> Result<TagRecord>;
    fn save(&self, path: &Path, tags: &TagRecord) -> Result<()>;
}
