//! Append-only plain text sink for accepted records.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::paths::{self, PathError};

#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes one record per line to `<target_dir>/<target>.txt`.
///
/// The file is opened in append mode so repeated runs accumulate records.
/// Writes are buffered; call [`TextSink::close`] to flush before dropping.
#[derive(Debug)]
pub struct TextSink {
    writer: BufWriter<File>,
    path: PathBuf,
    written: u64,
}

impl TextSink {
    /// Open the sink for `target`, creating `target_dir` when missing.
    pub async fn open_target(target_dir: &Path, target: &str) -> Result<Self, SinkError> {
        let path = paths::target_file(target_dir, target)?;
        paths::ensure_dir(target_dir)?;
        Self::open(path).await
    }

    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, SinkError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|source| SinkError::Open {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
            written: 0,
        })
    }

    pub async fn write(&mut self, record: &str) -> Result<(), SinkError> {
        debug_assert!(!record.contains('\n'));
        self.writer
            .write_all(record.as_bytes())
            .await
            .map_err(|source| self.write_error(source))?;
        self.writer
            .write_all(b"\n")
            .await
            .map_err(|source| self.write_error(source))?;
        self.written += 1;
        Ok(())
    }

    pub async fn flush(&mut self) -> Result<(), SinkError> {
        self.writer
            .flush()
            .await
            .map_err(|source| self.write_error(source))
    }

    /// Records written through this handle.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn close(mut self) -> Result<(), SinkError> {
        self.flush().await
    }

    fn write_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[tokio::test]
    async fn appends_across_reopen() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join("source");

        let mut sink = TextSink::open_target(&dir, "ja").await.expect("open");
        sink.write("一行目").await.expect("write");
        assert_eq!(sink.written(), 1);
        sink.close().await.expect("close");

        let mut sink = TextSink::open_target(&dir, "ja").await.expect("reopen");
        sink.write("二行目").await.expect("write");
        sink.close().await.expect("close");

        let contents = fs::read_to_string(dir.join("ja.txt")).expect("read output");
        assert_eq!(contents, "一行目\n二行目\n");
    }

    #[tokio::test]
    async fn invalid_target_is_rejected_before_touching_disk() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join("never");
        let err = TextSink::open_target(&dir, "../escape").await.unwrap_err();
        assert!(matches!(err, SinkError::Path(PathError::InvalidTarget { .. })));
        assert!(!dir.exists());
    }
}
