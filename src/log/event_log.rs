use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use crate::foundation::error::{TrackError, TrackResult};
use crate::log::record::LogRecord;

/// Working cache written next to the host process.
pub const CACHE_FILE_NAME: &str = "temp_track_data.csv";

/// Buffered, append-only pose log over a backing file.
///
/// Every lifecycle operation (resize, truncate, export) closes the stream first, which
/// flushes pending records, and always tries to reopen in append mode afterwards.
pub struct EventLog {
    path: PathBuf,
    capacity: usize,
    writer: Option<BufWriter<File>>,
}

impl EventLog {
    /// Create a closed log; call [`EventLog::reopen`] to attach the file.
    pub fn new(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity,
            writer: None,
        }
    }

    /// Allocate the write buffer and open `path` for appending, creating it if absent.
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> TrackResult<Self> {
        let mut log = Self::new(path, capacity);
        log.reopen()?;
        Ok(log)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    /// Open the backing file in append mode with a fresh buffer of the current capacity.
    ///
    /// Any stream still attached is closed first.
    pub fn reopen(&mut self) -> TrackResult<()> {
        let closed = self.close();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| TrackError::io("open", &self.path, e))?;
        self.writer = Some(BufWriter::with_capacity(self.capacity, file));
        tracing::debug!(path = %self.path.display(), capacity = self.capacity, "pose log opened");
        closed
    }

    /// Write one `frame,x,y,w,h,angle` line.
    pub fn append(&mut self, rec: &LogRecord) -> TrackResult<()> {
        let w = self
            .writer
            .as_mut()
            .ok_or_else(|| TrackError::LogClosed(self.path.clone()))?;
        writeln!(w, "{rec}").map_err(|e| TrackError::io("append to", &self.path, e))
    }

    pub fn flush(&mut self) -> TrackResult<()> {
        match self.writer.as_mut() {
            Some(w) => w
                .flush()
                .map_err(|e| TrackError::io("flush", &self.path, e)),
            None => Ok(()),
        }
    }

    /// Flush and detach the stream. Closing an already closed log is a no-op.
    pub fn close(&mut self) -> TrackResult<()> {
        let Some(mut w) = self.writer.take() else {
            return Ok(());
        };
        w.flush()
            .map_err(|e| TrackError::io("flush", &self.path, e))?;
        tracing::debug!(path = %self.path.display(), "pose log closed");
        Ok(())
    }

    /// Swap in a write buffer of `capacity` bytes. Pending records are flushed first.
    pub fn resize(&mut self, capacity: usize) -> TrackResult<()> {
        let closed = self.close();
        self.capacity = capacity;
        let reopened = self.reopen();
        closed.and(reopened)
    }

    /// Discard all logged content. The file is left empty and open for appending.
    pub fn truncate(&mut self) -> TrackResult<()> {
        let closed = self.close();
        let cleared = File::create(&self.path)
            .map(drop)
            .map_err(|e| TrackError::io("truncate", &self.path, e));
        let reopened = self.reopen();
        closed.and(cleared).and(reopened)
    }

    /// Copy the flushed log verbatim to `dest` and return the number of bytes copied.
    ///
    /// The log is reopened whether or not the copy succeeds; a failed reopen is reported
    /// through `tracing` only. A `dest` that resolves to the log file itself is rejected.
    pub fn export(&mut self, dest: &Path) -> TrackResult<u64> {
        let copied = self.close().and_then(|()| {
            if self.is_same_file(dest) {
                return Err(TrackError::validation(format!(
                    "cannot export pose log onto itself ('{}')",
                    dest.display()
                )));
            }
            std::fs::copy(&self.path, dest).map_err(|e| TrackError::io("copy to", dest, e))
        });
        if let Err(e) = self.reopen() {
            tracing::warn!(error = %e, "pose log could not be reopened after export");
        }
        copied
    }

    fn is_same_file(&self, other: &Path) -> bool {
        match (std::fs::canonicalize(&self.path), std::fs::canonicalize(other)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!(error = %e, "pose log lost buffered records on drop");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/log/event_log.rs"]
mod tests;
