//! Record pipeline: drains a source through the normalizer and script filter
//! into a sink. IO lives in `crate::sources` and `crate::sink`; the text
//! transforms stay in `crate::text`.

pub mod converter;

pub use converter::{ConvertError, ConvertSummary, DEFAULT_PROGRESS_EVERY, SourceConverter};
