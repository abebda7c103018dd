//! Application-level error type shared by the binary and the record pipeline.

use thiserror::Error;

use crate::config;
use crate::paths::PathError;
use crate::pipeline::ConvertError;
use crate::sink::SinkError;
use crate::sources::SourceError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    ConfigLoad(#[from] config::AppConfigError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Paths(#[from] PathError),
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("failed to write standard output: {0}")]
    Stdout(#[source] std::io::Error),
}
