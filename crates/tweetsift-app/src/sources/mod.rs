//! Readers that yield raw text records for the extraction pipeline.

pub mod jsonl;
pub mod lines;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use jsonl::JsonLinesSource;
pub use lines::LinesSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to open source {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read source {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON document at {path}:{line}: {source}")]
    Json {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Interpret a CLI-style record limit where `0` means unlimited.
pub fn record_limit(limit: usize) -> Option<usize> {
    (limit > 0).then_some(limit)
}

/// Any supported record source.
#[derive(Debug)]
pub enum RecordSource {
    Lines(LinesSource),
    JsonLines(JsonLinesSource),
}

impl RecordSource {
    /// Next raw record, or `None` once the source or its limit is exhausted.
    pub async fn next_record(&mut self) -> Result<Option<String>, SourceError> {
        match self {
            RecordSource::Lines(source) => source.next_record().await,
            RecordSource::JsonLines(source) => source.next_record().await,
        }
    }

    /// Human-readable origin used in logs.
    pub fn label(&self) -> String {
        match self {
            RecordSource::Lines(source) => source.path().display().to_string(),
            RecordSource::JsonLines(source) => {
                format!("{}#{}", source.path().display(), source.field())
            }
        }
    }
}

impl From<LinesSource> for RecordSource {
    fn from(source: LinesSource) -> Self {
        RecordSource::Lines(source)
    }
}

impl From<JsonLinesSource> for RecordSource {
    fn from(source: JsonLinesSource) -> Self {
        RecordSource::JsonLines(source)
    }
}
