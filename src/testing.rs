//! Test doubles shared by the unit tests.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::report::Reporter;
use crate::staging::Confirm;
use crate::tags::{TagRecord, TagStore};

/// Keeps the tag record as JSON inside the file itself, so renames carry
/// tags along and file bytes show whether anything was written.
#[derive(Debug, Default)]
pub struct JsonTagStore;

impl JsonTagStore {
    pub fn write(path: &Path, tags: &TagRecord) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, serde_json::to_vec(tags).unwrap()).unwrap();
    }

    pub fn read(path: &Path) -> TagRecord {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }
}

impl TagStore for JsonTagStore {
    fn load(&self, path: &Path) -> Result<TagRecord> {
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        if bytes.is_empty() {
            return Ok(TagRecord::default());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn save(&self, path: &Path, tags: &TagRecord) -> Result<()> {
        let bytes = serde_json::to_vec(tags)?;
        fs::write(path, bytes).map_err(|e| Error::io(path, e))
    }
}

/// Collects every reported line, prefixed with its level.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.contains(needle))
    }

    fn push(&self, level: &str, message: &str) {
        self.lines.lock().unwrap().push(format!("{level}: {message}"));
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.push("info", message);
    }

    fn debug(&self, message: &str) {
        self.push("debug", message);
    }

    fn warn(&self, message: &str) {
        self.push("warn", message);
    }
}

/// Answers prompts from a fixed script and remembers what was asked.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl ScriptedConfirm {
    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            prompts: Vec::new(),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn read_answer(&mut self, prompt: &str) -> std::io::Result<String> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

pub fn tags(album: &str, artist: &str, title: &str, track: (u32, u32)) -> TagRecord {
    TagRecord {
        album: album.to_string(),
        artist: artist.to_string(),
        title: title.to_string(),
        track: track.0,
        track_total: track.1,
    }
}
