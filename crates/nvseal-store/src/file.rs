use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::Medium;

/// Byte value of an erased cell, matching EEPROM/NOR-flash parts.
const ERASED: u8 = 0xFF;

/// Sync/flush strategy for a file-backed medium.
#[derive(Clone, Copy, Debug)]
pub enum SyncMode {
    /// `fsync` after every write (safest, highest latency).
    EveryWrite,
    /// Rely on OS page-cache buffering (fastest, least durable).
    OsDefault,
}

impl Default for SyncMode {
    fn default() -> Self {
        Self::OsDefault
    }
}

/// File-backed medium emulating a fixed-size EEPROM image on the host.
///
/// Opening creates the image if missing and pads it to `capacity` with
/// erased bytes, so never-written regions read back as erased hardware
/// would. An existing image longer than `capacity` is left untouched;
/// access is bounded by `capacity` either way.
pub struct FileMedium {
    path: PathBuf,
    file: File,
    capacity: usize,
    sync_mode: SyncMode,
}

impl FileMedium {
    /// Open or create an image of `capacity` bytes at `path`.
    pub fn open(path: impl AsRef<Path>, capacity: usize, sync_mode: SyncMode) -> StoreResult<Self> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        let len = file.metadata()?.len();
        if len < capacity as u64 {
            file.seek(SeekFrom::End(0))?;
            file.write_all(&vec![ERASED; capacity - len as usize])?;
            file.sync_all()?;
        }

        debug!(path = %path.display(), capacity, "opened medium image");
        Ok(Self {
            path: path.to_path_buf(),
            file,
            capacity,
            sync_mode,
        })
    }

    /// Path of the backing image.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn check_span(&self, address: u32, len: usize) -> StoreResult<()> {
        (address as usize)
            .checked_add(len)
            .filter(|&end| end <= self.capacity)
            .ok_or(StoreError::OutOfBounds {
                address,
                len,
                capacity: self.capacity,
            })?;
        Ok(())
    }
}

impl Medium for FileMedium {
    fn put(&mut self, address: u32, bytes: &[u8]) -> StoreResult<()> {
        self.check_span(address, bytes.len())?;
        self.file.seek(SeekFrom::Start(u64::from(address)))?;
        self.file.write_all(bytes)?;
        if matches!(self.sync_mode, SyncMode::EveryWrite) {
            self.file.sync_all()?;
        }
        debug!(address, len = bytes.len(), "medium put");
        Ok(())
    }

    fn get(&mut self, address: u32, out: &mut [u8]) -> StoreResult<()> {
        self.check_span(address, out.len())?;
        self.file.seek(SeekFrom::Start(u64::from(address)))?;
        self.file.read_exact(out)?;
        Ok(())
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.capacity)
    }
}

impl std::fmt::Debug for FileMedium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileMedium")
            .field("path", &self.path)
            .field("capacity", &self.capacity)
            .field("sync_mode", &self.sync_mode)
            .finish()
    }
}
