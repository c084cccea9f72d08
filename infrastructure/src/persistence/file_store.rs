//! JSON file adapter for the history store port.
//!
//! The full thread list is serialized as one versioned JSON record at a
//! fixed path. The adapter never raises to the caller: a missing, unreadable,
//! or corrupt record loads as "no data", and write failures are logged and
//! swallowed so the in-memory state stays authoritative for the session.

use haichat_application::HistoryStore;
use haichat_domain::Thread;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Current on-disk record version. Records with any other version are
/// treated as no data.
const HISTORY_VERSION: u32 = 1;

/// Versioned persistence envelope for the thread list.
#[derive(Debug, Serialize, Deserialize)]
struct HistoryRecord {
    version: u32,
    threads: Vec<Thread>,
}

/// History store writing a single JSON record to disk.
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default record location: `{data_dir}/haichat/history.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("haichat").join("history.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_record(&self, record: &HistoryRecord) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| std::io::Error::other(e.to_string()))?;

        // Write-then-rename so a crash mid-write cannot corrupt the record.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Option<Vec<Thread>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Could not read history at {}: {}", self.path.display(), e);
                return None;
            }
        };

        let record: HistoryRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                warn!("Ignoring corrupt history at {}: {}", self.path.display(), e);
                return None;
            }
        };

        if record.version != HISTORY_VERSION {
            warn!(
                "Ignoring history record with unknown version {} at {}",
                record.version,
                self.path.display()
            );
            return None;
        }

        debug!("Loaded {} thread(s) from {}", record.threads.len(), self.path.display());
        Some(record.threads)
    }

    fn save(&self, threads: &[Thread]) {
        let record = HistoryRecord {
            version: HISTORY_VERSION,
            threads: threads.to_vec(),
        };
        if let Err(e) = self.write_record(&record) {
            warn!("Could not persist history to {}: {}", self.path.display(), e);
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Could not remove history at {}: {}", self.path.display(), e),
        }
    }
}
