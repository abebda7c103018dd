use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::rules::{FULLWIDTH_SLASH, Rule};

const BASE_PIPELINE: &[Rule] = &[
    Rule::RemoveNewline,
    Rule::RemoveLink,
    Rule::CollapseSpaces,
    Rule::Strip,
];

const PLATFORM_PIPELINE: &[Rule] = &[
    Rule::RemoveNewline,
    Rule::RemoveLink,
    Rule::RemoveRetweet,
    Rule::RemoveMention,
    Rule::RemoveTag,
    Rule::CollapseSpaces,
    Rule::Strip,
];

const TOKENIZER_PIPELINE: &[Rule] = &[
    Rule::RemoveNewline,
    Rule::RemoveLink,
    Rule::RemoveRetweet,
    Rule::RemoveMention,
    Rule::RemoveTag,
    Rule::CollapseSpaces,
    Rule::Strip,
    Rule::RemoveSpaces,
    Rule::ConvertSlash,
];

/// Named normalization pipelines.
///
/// Each variant declares its complete rule sequence; nothing is inherited
/// from a less specific variant at runtime.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    AsRefStr,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizerVariant {
    /// Newlines, links and whitespace.
    Base,
    /// Base plus reshare markers, mentions and tags.
    #[default]
    Platform,
    /// Platform plus whitespace removal and slash substitution for
    /// slash-delimited word segmenters.
    Tokenizer,
}

impl NormalizerVariant {
    pub fn pipeline(self) -> &'static [Rule] {
        match self {
            NormalizerVariant::Base => BASE_PIPELINE,
            NormalizerVariant::Platform => PLATFORM_PIPELINE,
            NormalizerVariant::Tokenizer => TOKENIZER_PIPELINE,
        }
    }

    /// Characters this variant writes into its output that were not in the
    /// input. A filter applied after this variant has to whitelist them.
    pub fn introduced_chars(self) -> &'static [char] {
        match self {
            NormalizerVariant::Tokenizer => &[FULLWIDTH_SLASH],
            NormalizerVariant::Base | NormalizerVariant::Platform => &[],
        }
    }
}

/// Runs `raw` through every rule of `variant` in declaration order.
pub fn normalize(raw: &str, variant: NormalizerVariant) -> String {
    variant
        .pipeline()
        .iter()
        .fold(raw.to_string(), |text, rule| rule.apply(&text))
}

/// A normalizer bound to one variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    variant: NormalizerVariant,
}

impl Normalizer {
    pub const fn new(variant: NormalizerVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> NormalizerVariant {
        self.variant
    }

    pub fn convert(&self, raw: &str) -> String {
        normalize(raw, self.variant)
    }
}
