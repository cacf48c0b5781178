//! JSON file storage
//!
//! Documents are pretty-printed UTF-8 JSON. Each save writes a sibling
//! temporary file and renames it over the target, so a reader sees either
//! the old document or the new one.

use crate::models::{Ledger, UsageHistory};
use crate::store::{ClockDocument, DraftStorage, LedgerDocument, StoreError};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CURRENT_YEAR_FILE: &str = "current_year.json";
pub const DRAFT_WEIGHTS_FILE: &str = "draft_weights.json";

/// File-backed storage rooted at a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open storage in `dir`, creating the directory if needed
    ///
    /// A directory that cannot be created is logged; later writes will fail
    /// and be handled by the caller.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(e) = fs::create_dir_all(&dir) {
            warn!("Cannot create data directory {}: {}", dir.display(), e);
        }
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn clock_path(&self) -> PathBuf {
        self.dir.join(CURRENT_YEAR_FILE)
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.dir.join(DRAFT_WEIGHTS_FILE)
    }
}

impl DraftStorage for FileStore {
    fn load_year(&self) -> Option<i32> {
        read_document::<ClockDocument>(&self.clock_path()).and_then(|doc| doc.current_year)
    }

    fn save_year(&mut self, year: i32) -> Result<(), StoreError> {
        write_document(&self.clock_path(), &ClockDocument::new(year))
    }

    fn load_usage(&self) -> UsageHistory {
        read_document::<LedgerDocument>(&self.ledger_path())
            .map(|doc| doc.usage())
            .unwrap_or_default()
    }

    fn save_ledger(&mut self, ledger: &Ledger) -> Result<(), StoreError> {
        write_document(&self.ledger_path(), &LedgerDocument::from(ledger))
    }
}

/// Read a JSON document, treating missing or corrupt files as absent
fn read_document<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!("Cannot read {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&contents) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!("Ignoring unparsable {}: {}", path.display(), e);
            None
        }
    }
}

/// Replace a JSON document atomically (temp file + rename)
fn write_document<T: Serialize>(path: &Path, doc: &T) -> Result<(), StoreError> {
    let mut json = serde_json::to_string_pretty(doc)?;
    json.push('\n');

    let tmp_path = temp_path_for(path);
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Err(e) = fs::write(&tmp_path, json.as_bytes()) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_err(e));
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_err(e));
    }

    debug!("Wrote {}", path.display());
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_is_sibling() {
        let tmp = temp_path_for(Path::new("/data/draft_weights.json"));
        assert_eq!(tmp, PathBuf::from("/data/draft_weights.json.tmp"));
    }
}
