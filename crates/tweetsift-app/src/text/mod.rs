//! Text utilities kept pure for reuse across the record pipeline and tests.
//!
//! Nothing here touches IO or holds mutable state, so normalizers and filters
//! can be shared freely between callers.

pub mod japanese;
pub mod normalize;
pub mod rules;
pub mod script;

pub use japanese::JapaneseClassifier;
pub use normalize::{Normalizer, NormalizerVariant, normalize};
pub use rules::{FULLWIDTH_SLASH, Rule};
pub use script::{
    CharClass, CharKind, ClassifyError, DEFAULT_WHITELIST, ScriptClassifier, ScriptFilter,
};
