use std::num::NonZeroU64;

use thiserror::Error;

use crate::sink::{SinkError, TextSink};
use crate::sources::{RecordSource, SourceError};
use crate::text::{JapaneseClassifier, Normalizer, ScriptClassifier, ScriptFilter};

pub const DEFAULT_PROGRESS_EVERY: NonZeroU64 = match NonZeroU64::new(10_000) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Counts reported after a source has been drained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub total: u64,
    pub accepted: u64,
}

impl ConvertSummary {
    pub fn rejected(&self) -> u64 {
        self.total - self.accepted
    }
}

/// Normalizes raw records and keeps the ones the script filter admits.
#[derive(Debug, Clone)]
pub struct SourceConverter<C = JapaneseClassifier> {
    normalizer: Normalizer,
    filter: ScriptFilter<C>,
    progress_every: NonZeroU64,
}

impl Default for SourceConverter<JapaneseClassifier> {
    fn default() -> Self {
        Self::new(Normalizer::default(), ScriptFilter::default())
    }
}

impl<C: ScriptClassifier> SourceConverter<C> {
    /// The filter is used as given. Callers pairing it with the tokenizer
    /// variant should allow [`NormalizerVariant::introduced_chars`] first.
    ///
    /// [`NormalizerVariant::introduced_chars`]: crate::text::NormalizerVariant::introduced_chars
    pub fn new(normalizer: Normalizer, filter: ScriptFilter<C>) -> Self {
        Self {
            normalizer,
            filter,
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }

    pub fn with_progress_every(mut self, every: NonZeroU64) -> Self {
        self.progress_every = every;
        self
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn filter(&self) -> &ScriptFilter<C> {
        &self.filter
    }

    /// Normalized record, or `None` when the filter rejects it.
    pub fn accept(&self, raw: &str) -> Option<String> {
        let converted = self.normalizer.convert(raw);
        self.filter.is_admissible(&converted).then_some(converted)
    }

    /// Lazily normalize and filter an in-memory sequence of records.
    pub fn convert_all<I>(&self, records: I) -> impl Iterator<Item = String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let normalized = records
            .into_iter()
            .map(move |raw| self.normalizer.convert(raw.as_ref()));
        self.filter.filter(normalized)
    }

    /// Drain `source` into `sink`, returning how many records were seen and kept.
    ///
    /// Records accepted before a source error are flushed to the sink before
    /// the error is returned.
    pub async fn write(
        &self,
        source: &mut RecordSource,
        sink: &mut TextSink,
    ) -> Result<ConvertSummary, ConvertError> {
        let label = source.label();
        let mut summary = ConvertSummary::default();

        loop {
            let raw = match source.next_record().await {
                Ok(Some(raw)) => raw,
                Ok(None) => break,
                Err(err) => {
                    sink.flush().await?;
                    tracing::warn!(
                        event = "convert_aborted",
                        total = summary.total,
                        accepted = summary.accepted,
                        error = %err,
                        "source failed after {} records",
                        summary.total
                    );
                    return Err(err.into());
                }
            };
            summary.total += 1;
            if let Some(text) = self.accept(&raw) {
                sink.write(&text).await?;
                summary.accepted += 1;
            }
            if summary.total % self.progress_every.get() == 0 {
                tracing::debug!(total = summary.total, "text extracted: {}", summary.total);
            }
        }
        sink.flush().await?;

        tracing::info!(
            event = "convert_finished",
            total = summary.total,
            accepted = summary.accepted,
            "{}/{} texts extracted from {} in {}",
            summary.accepted,
            summary.total,
            label,
            sink.path().display()
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use crate::text::NormalizerVariant;

    use super::*;

    #[test]
    fn accept_normalizes_before_filtering() {
        let converter: SourceConverter = SourceConverter::default();
        assert_eq!(
            converter.accept("RT @user: こんにちは http://t.co/x #tag"),
            Some("こんにちは".to_string())
        );
        assert_eq!(converter.accept("@only_a_mention"), None);
        assert_eq!(converter.accept("Ça va"), None);
    }

    #[test]
    fn convert_all_preserves_order() {
        let variant = NormalizerVariant::Tokenizer;
        let filter = ScriptFilter::default().allow_all(variant.introduced_chars().iter().copied());
        let converter: SourceConverter = SourceConverter::new(Normalizer::new(variant), filter);
        let out: Vec<String> = converter
            .convert_all(["は い", "ü", "a/b です", ""])
            .collect();
        assert_eq!(out, vec!["はい", "a／bです"]);
    }

    #[test]
    fn injected_filter_is_not_widened() {
        let converter: SourceConverter = SourceConverter::new(
            Normalizer::new(NormalizerVariant::Tokenizer),
            ScriptFilter::default(),
        );
        assert!(!converter.filter().whitelist().any(|c| c == '／'));
        assert_eq!(converter.accept("a/b です"), None);
    }

    #[test]
    fn summary_reports_rejections() {
        let summary = ConvertSummary {
            total: 5,
            accepted: 2,
        };
        assert_eq!(summary.rejected(), 3);
    }
}
