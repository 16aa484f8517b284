//! File-based payload store for persistent storage.
//!
//! Layout of a store directory:
//!
//! ```text
//! <store>/
//! ├─ LOCK                 # Advisory lock for single-process ownership
//! ├─ <sha256(id)>.rec     # One CBOR record per request id
//! └─ <sha256(id)>.rec.tmp # Transient, only during a write
//! ```
//!
//! File names are derived from a digest of the request id because ids are
//! opaque caller-supplied strings and may contain path separators.

use crate::config::StoreConfig;
use crate::error::{StorageError, StorageResult};
use crate::record::RequestRecord;
use crate::slot::Slot;
use crate::store::{validate_id, PayloadStore};
use bindiff_codec::{decode_record, encode_record, RecordFrame};
use fs2::FileExt;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

const LOCK_FILE: &str = "LOCK";
const RECORD_EXT: &str = "rec";
const TEMP_EXT: &str = "rec.tmp";

/// A file-based payload store.
///
/// Each request id is stored as its own record file. Data survives process
/// restarts.
///
/// # Durability
///
/// A write goes to a temporary file which is then renamed over the record,
/// so a failed `put` never leaves a torn record behind. With
/// [`StoreConfig::sync_on_write`] the file and directory are fsynced too.
///
/// A write is reported once the rename succeeds. The record is visible to
/// readers from that point, so a failing directory fsync afterwards is
/// logged rather than returned as an error.
///
/// # Thread Safety
///
/// Writes to the same id are serialized by a per-id mutex held across the
/// whole load-modify-write sequence. Writes to different ids proceed
/// independently. A per-id mutex is dropped from the lock table as soon as
/// no writer holds or waits on it.
///
/// # Example
///
/// ```no_run
/// use bindiff_storage::{FileStore, PayloadStore, Slot, StoreConfig};
/// use std::path::Path;
///
/// let store = FileStore::open(Path::new("bindiff-data"), StoreConfig::default()).unwrap();
/// store.put("1", Slot::Left, "AAAA").unwrap();
/// ```
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    config: StoreConfig,
    id_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    _lock_file: Option<File>,
}

impl FileStore {
    /// Opens or creates a store directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory doesn't exist and `create_if_missing` is false
    /// - The path is not a directory
    /// - Another process holds the lock (returns [`StorageError::Locked`])
    /// - I/O errors occur
    pub fn open(path: &Path, config: StoreConfig) -> StorageResult<Self> {
        if !path.exists() {
            if config.create_if_missing {
                fs::create_dir_all(path)?;
            } else {
                return Err(StorageError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("store directory does not exist: {}", path.display()),
                )));
            }
        }

        if !path.is_dir() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path is not a directory: {}", path.display()),
            )));
        }

        let lock_file = if config.exclusive {
            let lock_file = OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .truncate(false)
                .open(path.join(LOCK_FILE))?;

            if lock_file.try_lock_exclusive().is_err() {
                return Err(StorageError::Locked {
                    path: path.to_path_buf(),
                });
            }
            Some(lock_file)
        } else {
            None
        };

        debug!(path = %path.display(), "opened file store");

        Ok(Self {
            root: path.to_path_buf(),
            config,
            id_locks: Mutex::new(HashMap::new()),
            _lock_file: lock_file,
        })
    }

    /// Returns the store directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the record file for `id`.
    #[must_use]
    pub fn record_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.{RECORD_EXT}", id_digest(id)))
    }

    fn temp_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.{TEMP_EXT}", id_digest(id)))
    }

    fn lock_for(&self, id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.id_locks.lock();
        Arc::clone(locks.entry(id.to_string()).or_default())
    }

    /// Drops the table entry for `id` unless another writer still holds a
    /// handle to it. Clones only happen under the table lock, so the count
    /// cannot grow while it is checked.
    fn release_lock(&self, id: &str, lock: Arc<Mutex<()>>) {
        let mut locks = self.id_locks.lock();
        // One reference in the table, one in `lock`.
        if Arc::strong_count(&lock) == 2 {
            locks.remove(id);
        }
    }

    /// Loads the record for `id`, or `None` if there is no record file.
    fn load(&self, id: &str) -> StorageResult<Option<RequestRecord>> {
        let bytes = match fs::read(self.record_path(id)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let frame = decode_record(&bytes)?;
        if frame.id != id {
            return Err(StorageError::Corrupted(format!(
                "record file for {id:?} holds id {:?}",
                frame.id
            )));
        }
        Ok(Some(RequestRecord::from(frame)))
    }

    /// Writes a record using write-then-rename:
    /// 1. Write to a temporary file
    /// 2. Sync the temporary file (if configured)
    /// 3. Rename it over the record file
    /// 4. Fsync the directory (if configured, failures are only logged)
    fn save(&self, record: &RequestRecord) -> StorageResult<()> {
        let data = encode_record(&record.to_frame())?;
        let temp_path = self.temp_path(record.id());
        let record_path = self.record_path(record.id());

        let result = self
            .write_temp(&temp_path, &data)
            .and_then(|()| fs::rename(&temp_path, &record_path));

        if let Err(e) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        if self.config.sync_on_write {
            if let Err(e) = self.sync_directory() {
                warn!(id = record.id(), error = %e, "directory fsync failed after rename");
            }
        }
        Ok(())
    }

    fn write_temp(&self, temp_path: &Path, data: &[u8]) -> io::Result<()> {
        let mut file = File::create(temp_path)?;
        file.write_all(data)?;
        if self.config.sync_on_write {
            file.sync_all()?;
        }
        Ok(())
    }

    #[cfg(unix)]
    fn sync_directory(&self) -> io::Result<()> {
        File::open(&self.root)?.sync_all()
    }

    #[cfg(not(unix))]
    fn sync_directory(&self) -> io::Result<()> {
        // NTFS journaling covers rename durability
        Ok(())
    }

    fn put_locked(&self, id: &str, slot: Slot, content: &str) -> StorageResult<()> {
        let mut record = match self.load(id)? {
            Some(record) => record,
            None => {
                debug!(id, "creating record");
                RequestRecord::new(id)
            }
        };
        record.set(slot, content);

        self.save(&record).map_err(|e| {
            warn!(id, %slot, error = %e, "failed to write record");
            e
        })?;

        debug!(id, %slot, len = content.len(), "stored slot");
        Ok(())
    }
}

impl PayloadStore for FileStore {
    fn put(&self, id: &str, slot: Slot, content: &str) -> StorageResult<()> {
        validate_id(id)?;

        let lock = self.lock_for(id);
        let result = {
            let _guard = lock.lock();
            self.put_locked(id, slot, content)
        };
        self.release_lock(id, lock);
        result
    }

    fn get(&self, id: &str) -> StorageResult<(String, String)> {
        validate_id(id)?;
        match self.load(id)? {
            Some(record) => Ok(record.into_pair()),
            None => Err(StorageError::not_found(id)),
        }
    }

    fn contains(&self, id: &str) -> StorageResult<bool> {
        if id.is_empty() {
            return Ok(false);
        }
        Ok(self.record_path(id).is_file())
    }

    fn ids(&self) -> StorageResult<Vec<String>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXT) {
                continue;
            }
            // A stray or damaged file must not hide the valid records.
            match read_frame(&path) {
                Ok(frame) => ids.push(frame.id),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable record"),
            }
        }
        ids.sort();
        Ok(ids)
    }
}

fn read_frame(path: &Path) -> StorageResult<RecordFrame> {
    Ok(decode_record(&fs::read(path)?)?)
}

/// Hex SHA-256 of a request id.
fn id_digest(id: &str) -> String {
    let digest = Sha256::digest(id.as_bytes());
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}
