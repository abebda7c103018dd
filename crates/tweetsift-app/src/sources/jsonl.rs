use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};

use super::SourceError;

pub const DEFAULT_TEXT_FIELD: &str = "text";

/// Newline-delimited JSON documents, as exported from a document store.
///
/// Each document contributes the string value of one field. Documents where
/// the field is absent or not a string are skipped and do not count towards
/// the limit.
#[derive(Debug)]
pub struct JsonLinesSource {
    path: PathBuf,
    field: String,
    lines: Lines<BufReader<File>>,
    limit: Option<usize>,
    line_no: usize,
    yielded: usize,
    skipped: usize,
}

impl JsonLinesSource {
    pub async fn open<P: AsRef<Path>>(
        path: P,
        field: impl Into<String>,
        limit: Option<usize>,
    ) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)
            .await
            .map_err(|source| SourceError::Open {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            field: field.into(),
            lines: BufReader::new(file).lines(),
            limit,
            line_no: 0,
            yielded: 0,
            skipped: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Documents skipped so far because the field was missing or not a string.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub async fn next_record(&mut self) -> Result<Option<String>, SourceError> {
        if self.limit.is_some_and(|limit| self.yielded >= limit) {
            return Ok(None);
        }

        loop {
            let Some(line) = self
                .lines
                .next_line()
                .await
                .map_err(|source| SourceError::Read {
                    path: self.path.clone(),
                    source,
                })?
            else {
                if self.skipped > 0 {
                    tracing::debug!(
                        path = %self.path.display(),
                        field = %self.field,
                        skipped = self.skipped,
                        "documents without a text field were skipped"
                    );
                }
                return Ok(None);
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }

            let document: Value =
                serde_json::from_str(&line).map_err(|source| SourceError::Json {
                    path: self.path.clone(),
                    line: self.line_no,
                    source,
                })?;

            match document.get(&self.field).and_then(Value::as_str) {
                Some(text) => {
                    self.yielded += 1;
                    return Ok(Some(text.to_string()));
                }
                None => {
                    self.skipped += 1;
                    tracing::trace!(line = self.line_no, "document has no string field");
                }
            }
        }
    }
}
