//! Overwrite-then-remove file destruction.
//!
//! Shredding is a best-effort mitigation. On SSDs, flash media and
//! copy-on-write or journaling filesystems the overwritten blocks are not
//! guaranteed to be the blocks that held the original content.

use crate::app::config::ShredConfig;
use crate::error::{FsError, FsResult};
use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_PASSES: u32 = 3;
pub const DEFAULT_CHUNK_SIZE: usize = 4096;
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;

/// Something an overwrite pass can be written to
pub trait ShredTarget: Write + Seek {
    /// Push written data down to the storage device
    fn sync(&mut self) -> io::Result<()>;
}

impl ShredTarget for File {
    fn sync(&mut self) -> io::Result<()> {
        self.sync_all()
    }
}

/// Destroys files by overwriting them with random data before unlinking
#[derive(Debug, Clone)]
pub struct Shredder {
    passes: u32,
    chunk_size: usize,
    sync_each_pass: bool,
}

impl Shredder {
    /// `passes == 0` is accepted here and rejected by [`Shredder::shred`]
    pub fn new(passes: u32) -> Self {
        Self {
            passes,
            chunk_size: DEFAULT_CHUNK_SIZE,
            sync_each_pass: true,
        }
    }

    pub fn from_config(config: &ShredConfig) -> Self {
        Self::new(config.passes)
            .chunk_size(config.chunk_size)
            .sync_each_pass(config.sync_each_pass)
    }

    /// Size of the reusable random buffer, clamped to `1..=MAX_CHUNK_SIZE`
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.clamp(1, MAX_CHUNK_SIZE);
        self
    }

    /// Whether to fsync after every pass
    pub fn sync_each_pass(mut self, sync: bool) -> Self {
        self.sync_each_pass = sync;
        self
    }

    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Overwrite `path` with random data `passes` times, then remove it.
    ///
    /// The file is never removed unless every pass succeeded. A missing file,
    /// anything that is not a regular file, a file that cannot be opened for
    /// writing, or any failed write leaves the entry in place and returns the
    /// error.
    pub fn shred(&self, path: impl AsRef<Path>) -> FsResult<()> {
        let path = path.as_ref();
        if self.passes == 0 {
            return Err(FsError::InvalidPasses(self.passes));
        }

        tracing::debug!("Shredding {:?} with {} passes", path, self.passes);

        // Type check before open: opening a FIFO for writing blocks until a
        // reader appears
        let metadata = std::fs::metadata(path).map_err(|e| FsError::metadata(path, e))?;
        if !metadata.is_file() {
            return Err(FsError::NotRegularFile(path.to_path_buf()));
        }

        // No create, no truncate: the existing blocks are what gets overwritten
        let file = OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|e| FsError::open(path, e))?;

        // The entry may have been swapped between the stat and the open
        let metadata = file.metadata().map_err(|e| FsError::metadata(path, e))?;
        if !metadata.is_file() {
            return Err(FsError::NotRegularFile(path.to_path_buf()));
        }

        self.shred_target(file, metadata.len(), path)
    }

    /// Overwrite `target` (the open handle of `path`), release it, then
    /// remove `path`. Nothing is removed if a pass fails.
    pub(crate) fn shred_target<T: ShredTarget>(
        &self,
        mut target: T,
        len: u64,
        path: &Path,
    ) -> FsResult<()> {
        if let Err(e) = self.overwrite(&mut target, len, path) {
            tracing::warn!("Shredding {:?} aborted, file left in place: {}", path, e);
            return Err(e);
        }
        drop(target);

        std::fs::remove_file(path).map_err(|e| FsError::Remove {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!("Shredded {:?}", path);
        Ok(())
    }

    /// Run [`Shredder::shred`] on the blocking pool and stop waiting after
    /// `timeout`.
    ///
    /// The blocking work is abandoned rather than cancelled, so on timeout the
    /// file may be left partially overwritten or removed later.
    pub async fn shred_with_timeout(
        self,
        path: impl Into<PathBuf>,
        timeout: Duration,
    ) -> FsResult<()> {
        let path = path.into();
        let task_path = path.clone();
        let handle = tokio::task::spawn_blocking(move || self.shred(&task_path));

        match tokio::time::timeout(timeout, handle).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => Err(FsError::Task(e.to_string())),
            Err(_) => {
                tracing::warn!("Shredding {:?} did not finish within {:?}", path, timeout);
                Err(FsError::Timeout {
                    path,
                    timeout_ms: timeout.as_millis() as u64,
                })
            }
        }
    }

    /// Write `len` random bytes from the start of `target`, `passes` times.
    pub(crate) fn overwrite<T: ShredTarget>(
        &self,
        target: &mut T,
        len: u64,
        path: &Path,
    ) -> FsResult<()> {
        let mut buf = vec![0u8; self.buffer_len(len)];

        for pass in 1..=self.passes {
            target
                .seek(SeekFrom::Start(0))
                .map_err(|e| FsError::overwrite(path, pass, e))?;

            let mut remaining = len;
            while remaining > 0 {
                let n = remaining.min(buf.len() as u64) as usize;
                let chunk = &mut buf[..n];
                getrandom::fill(chunk).map_err(|e| FsError::Random {
                    path: path.to_path_buf(),
                    pass,
                    message: e.to_string(),
                })?;
                target
                    .write_all(chunk)
                    .map_err(|e| FsError::overwrite(path, pass, e))?;
                remaining -= n as u64;
            }

            target
                .flush()
                .map_err(|e| FsError::overwrite(path, pass, e))?;
            if self.sync_each_pass {
                target.sync().map_err(|e| FsError::Sync {
                    path: path.to_path_buf(),
                    pass,
                    source: e,
                })?;
            }

            tracing::trace!("Pass {}/{} over {:?} complete ({} bytes)", pass, self.passes, path, len);
        }

        Ok(())
    }

    /// Random buffer size for a target of `len` bytes
    fn buffer_len(&self, len: u64) -> usize {
        usize::try_from(len).map_or(self.chunk_size, |len| self.chunk_size.min(len))
    }
}

impl Default for Shredder {
    fn default() -> Self {
        Self::new(DEFAULT_PASSES)
    }
}

/// Shred `path` with `passes` overwrite passes and default settings
pub fn shred(path: impl AsRef<Path>, passes: u32) -> FsResult<()> {
    Shredder::new(passes).shred(path)
}
