use std::fs::File;
use std::path::Path;

use lofty::config::{ParseOptions, WriteOptions};
use lofty::id3::v2::Id3v2Tag;
use lofty::mpeg::MpegFile;
use lofty::prelude::*;

use crate::error::{Error, Result};

use super::{TagRecord, TagStore};

/// ID3v2-only tag access backed by `lofty`.
///
/// ID3v1 data is never read, and frames other than album, artist, title and
/// track number are left as they are on save.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagStore;

impl LoftyTagStore {
    fn read_id3v2(path: &Path) -> Result<Option<Id3v2Tag>> {
        let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
        let options = ParseOptions::new().read_properties(false);
        let mpeg = MpegFile::read_from(&mut file, options).map_err(|source| Error::Tag {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(mpeg.id3v2().cloned())
    }
}

impl TagStore for LoftyTagStore {
    fn load(&self, path: &Path) -> Result<TagRecord> {
        let Some(tag) = Self::read_id3v2(path)? else {
            return Ok(TagRecord::default());
        };

        Ok(TagRecord {
            album: tag.album().map(|v| v.into_owned()).unwrap_or_default(),
            artist: tag.artist().map(|v| v.into_owned()).unwrap_or_default(),
            title: tag.title().map(|v| v.into_owned()).unwrap_or_default(),
            track: tag.track().unwrap_or(0),
            track_total: tag.track_total().unwrap_or(0),
        })
    }

    fn save(&self, path: &Path, tags: &TagRecord) -> Result<()> {
        let mut tag = Self::read_id3v2(path)?.unwrap_or_default();

        if tags.album.is_empty() {
            tag.remove_album();
        } else {
            tag.set_album(tags.album.clone());
        }
        if tags.artist.is_empty() {
            tag.remove_artist();
        } else {
            tag.set_artist(tags.artist.clone());
        }
        if tags.title.is_empty() {
            tag.remove_title();
        } else {
            tag.set_title(tags.title.clone());
        }
        if tags.track == 0 {
            tag.remove_track();
        } else {
            tag.set_track(tags.track);
        }
        if tags.track_total == 0 {
            tag.remove_track_total();
        } else {
            tag.set_track_total(tags.track_total);
        }

        tag.save_to_path(path, WriteOptions::default())
            .map_err(|source| Error::Tag {
                path: path.to_path_buf(),
                source,
            })
    }
}
