//! Per-character script admission filter.

use std::collections::BTreeSet;

use thiserror::Error;

use super::japanese::JapaneseClassifier;

/// Punctuation admitted regardless of the classifier.
pub const DEFAULT_WHITELIST: [char; 2] = ['！', '？'];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("character U+{0:04X} has no Unicode name")]
    Unnamed(u32),
    #[error("{0}")]
    Message(String),
}

impl ClassifyError {
    pub fn msg(msg: impl Into<String>) -> Self {
        ClassifyError::Message(msg.into())
    }
}

/// Character classification capability injected into [`ScriptFilter`].
///
/// Either method may fail for characters the implementation cannot
/// categorize; the filter treats such failures as rejection.
pub trait ScriptClassifier: Send + Sync {
    fn is_allowed_script(&self, c: char) -> Result<bool, ClassifyError>;

    fn is_ascii(&self, c: char) -> Result<bool, ClassifyError>;
}

impl<T: ScriptClassifier + ?Sized> ScriptClassifier for &T {
    fn is_allowed_script(&self, c: char) -> Result<bool, ClassifyError> {
        (**self).is_allowed_script(c)
    }

    fn is_ascii(&self, c: char) -> Result<bool, ClassifyError> {
        (**self).is_ascii(c)
    }
}

/// Why a character was admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharKind {
    Script,
    Ascii,
    Whitelisted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharClass {
    Allowed(CharKind),
    Rejected,
    Unclassifiable(ClassifyError),
}

impl CharClass {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CharClass::Allowed(_))
    }
}

/// Admits strings made only of allowed-script, ASCII, or whitelisted characters.
#[derive(Debug, Clone)]
pub struct ScriptFilter<C = JapaneseClassifier> {
    classifier: C,
    whitelist: BTreeSet<char>,
}

impl Default for ScriptFilter<JapaneseClassifier> {
    fn default() -> Self {
        Self::new(JapaneseClassifier)
    }
}

impl<C: ScriptClassifier> ScriptFilter<C> {
    /// Filter with [`DEFAULT_WHITELIST`].
    pub fn new(classifier: C) -> Self {
        Self::with_whitelist(classifier, DEFAULT_WHITELIST)
    }

    pub fn with_whitelist(classifier: C, whitelist: impl IntoIterator<Item = char>) -> Self {
        Self {
            classifier,
            whitelist: whitelist.into_iter().collect(),
        }
    }

    /// Add `chars` to the whitelist.
    pub fn allow_all(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.whitelist.extend(chars);
        self
    }

    pub fn whitelist(&self) -> impl Iterator<Item = char> + '_ {
        self.whitelist.iter().copied()
    }

    /// Checks allowed script, then ASCII, then the whitelist. A classifier
    /// failure on an earlier check short-circuits the later ones.
    pub fn classify_character(&self, c: char) -> CharClass {
        match self.classifier.is_allowed_script(c) {
            Ok(true) => return CharClass::Allowed(CharKind::Script),
            Ok(false) => {}
            Err(err) => return CharClass::Unclassifiable(err),
        }
        match self.classifier.is_ascii(c) {
            Ok(true) => return CharClass::Allowed(CharKind::Ascii),
            Ok(false) => {}
            Err(err) => return CharClass::Unclassifiable(err),
        }
        if self.whitelist.contains(&c) {
            CharClass::Allowed(CharKind::Whitelisted)
        } else {
            CharClass::Rejected
        }
    }

    /// True iff `text` is non-empty and every character is allowed.
    pub fn is_admissible(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        text.chars().all(|c| {
            let class = self.classify_character(c);
            if let CharClass::Unclassifiable(err) = &class {
                tracing::trace!(error = %err, "unclassifiable character; rejecting record");
            }
            class.is_allowed()
        })
    }

    /// Lazily keeps the admissible records, in input order.
    pub fn filter<I>(&self, records: I) -> impl Iterator<Item = I::Item>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        records
            .into_iter()
            .filter(move |record| self.is_admissible(record.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Allows lowercase `a`..=`z` as the "script" and fails on `!`.
    struct Letters;

    impl ScriptClassifier for Letters {
        fn is_allowed_script(&self, c: char) -> Result<bool, ClassifyError> {
            if c == '!' {
                return Err(ClassifyError::msg("bang"));
            }
            Ok(c.is_ascii_lowercase())
        }

        fn is_ascii(&self, c: char) -> Result<bool, ClassifyError> {
            Ok(c.is_ascii())
        }
    }

    #[test]
    fn classification_order_is_script_ascii_whitelist() {
        let filter = ScriptFilter::new(Letters);
        assert_eq!(
            filter.classify_character('q'),
            CharClass::Allowed(CharKind::Script)
        );
        assert_eq!(
            filter.classify_character('Q'),
            CharClass::Allowed(CharKind::Ascii)
        );
        assert_eq!(
            filter.classify_character('？'),
            CharClass::Allowed(CharKind::Whitelisted)
        );
        assert_eq!(filter.classify_character('€'), CharClass::Rejected);
        assert!(matches!(
            filter.classify_character('!'),
            CharClass::Unclassifiable(_)
        ));
    }

    #[test]
    fn only_allowed_classes_count_as_allowed() {
        let filter = ScriptFilter::new(Letters);
        assert!(filter.classify_character('q').is_allowed());
        assert!(filter.classify_character('？').is_allowed());
        assert!(!filter.classify_character('€').is_allowed());
        assert!(!filter.classify_character('!').is_allowed());
    }

    #[test]
    fn allow_all_extends_the_whitelist() {
        let filter = ScriptFilter::with_whitelist(Letters, []).allow_all(['€', '£']);
        assert!(filter.is_admissible("a€b£"));
        assert_eq!(filter.whitelist().collect::<Vec<_>>(), vec!['£', '€']);
    }

    #[test]
    fn failure_rejects_otherwise_admissible_text() {
        let filter = ScriptFilter::new(Letters);
        assert!(filter.is_admissible("hello"));
        assert!(!filter.is_admissible("hello!"));
    }

    #[test]
    fn empty_whitelist_rejects_fullwidth_marks() {
        let filter = ScriptFilter::with_whitelist(Letters, []);
        assert!(!filter.is_admissible("hi！"));
        assert_eq!(filter.whitelist().count(), 0);
    }

    #[test]
    fn filter_borrows_classifier_by_reference() {
        let classifier = Letters;
        let filter = ScriptFilter::new(&classifier);
        let kept: Vec<&str> = filter.filter(["ok", "", "no€"]).collect();
        assert_eq!(kept, vec!["ok"]);
    }
}
