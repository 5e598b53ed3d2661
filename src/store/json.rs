//! File-backed record store.
//!
//! One JSON document holds every grid size's best score and the theme:
//!
//! ```json
//! { "best": { "4": 12, "6": 57 }, "theme": "dark" }
//! ```
//!
//! Loading is lenient: a missing or unreadable file starts an empty
//! store. Every change is written straight back.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::record::{PreferenceStore, ScoreRecord};
use super::theme::Theme;
use crate::core::Result;

/// File name used by `JsonStore::in_dir`.
pub const RECORDS_FILE_NAME: &str = "records.json";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct RecordsFile {
    #[serde(default)]
    best: BTreeMap<usize, u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<Theme>,
}

/// Score and preference store persisted as JSON.
#[derive(Clone, Debug)]
pub struct JsonStore {
    path: PathBuf,
    data: RecordsFile,
}

impl JsonStore {
    /// Open the store at `path`, reading whatever is already there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(data) => data,
                Err(err) => {
                    warn!(target: "memo.store", path = %path.display(), error = %err, "unreadable records file; starting empty");
                    RecordsFile::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => RecordsFile::default(),
            Err(err) => {
                warn!(target: "memo.store", path = %path.display(), error = %err, "cannot read records file; starting empty");
                RecordsFile::default()
            }
        };
        debug!(target: "memo.store", path = %path.display(), entries = data.best.len(), "records loaded");
        Self { path, data }
    }

    /// Open `records.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::open(dir.as_ref().join(RECORDS_FILE_NAME))
    }

    /// Where this store lives.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, raw)?;
        debug!(target: "memo.store", path = %self.path.display(), "records saved");
        Ok(())
    }
}

impl ScoreRecord for JsonStore {
    fn best(&self, grid_size: usize) -> Option<u32> {
        self.data.best.get(&grid_size).copied()
    }

    fn set_best(&mut self, grid_size: usize, moves: u32) -> Result<()> {
        self.data.best.insert(grid_size, moves);
        self.save()
    }
}

impl PreferenceStore for JsonStore {
    fn theme(&self) -> Option<Theme> {
        self.data.theme
    }

    fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.data.theme = Some(theme);
        self.save()
    }
}
