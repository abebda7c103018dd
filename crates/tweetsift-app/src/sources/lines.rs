use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};

use super::SourceError;

/// One record per line of a UTF-8 text file, surrounding whitespace trimmed.
#[derive(Debug)]
pub struct LinesSource {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    limit: Option<usize>,
    yielded: usize,
}

impl LinesSource {
    pub async fn open<P: AsRef<Path>>(path: P, limit: Option<usize>) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)
            .await
            .map_err(|source| SourceError::Open {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            lines: BufReader::new(file).lines(),
            limit,
            yielded: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn next_record(&mut self) -> Result<Option<String>, SourceError> {
        if self.limit.is_some_and(|limit| self.yielded >= limit) {
            return Ok(None);
        }

        let line = self
            .lines
            .next_line()
            .await
            .map_err(|source| SourceError::Read {
                path: self.path.clone(),
                source,
            })?;

        Ok(line.map(|line| {
            self.yielded += 1;
            line.trim().to_string()
        }))
    }
}
