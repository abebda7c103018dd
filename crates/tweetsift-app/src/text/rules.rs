//! Individual normalization steps.
//!
//! Every step is a total `&str -> String` function. Pipelines are built from
//! [`Rule`] identifiers in `crate::text::normalize`; the free functions stay
//! public so callers can recombine them.

use once_cell::sync::Lazy;
use regex::Regex;
use strum::AsRefStr;

/// Full-width solidus substituted for `/` in tokenizer output.
pub const FULLWIDTH_SLASH: char = '\u{FF0F}';

static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r##"(?:http|https)://[a-zA-Z0-9\-./"#$%&':?=_]+"##).expect("link pattern is valid")
});

/// Unicode whitespace plus the information separators U+001C..=U+001F.
static SPACES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x1C-\x1F]+").expect("space pattern is valid"));

static RETWEET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"RT @[a-zA-Z0-9_]+:").expect("retweet pattern is valid"));

static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@[a-zA-Z0-9_]+").expect("mention pattern is valid"));

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[a-zA-Z0-9_]+").expect("tag pattern is valid"));

/// Identifier of a single normalization step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Rule {
    RemoveNewline,
    RemoveLink,
    RemoveRetweet,
    RemoveMention,
    RemoveTag,
    CollapseSpaces,
    RemoveSpaces,
    Strip,
    ConvertSlash,
}

impl Rule {
    pub fn apply(self, text: &str) -> String {
        match self {
            Rule::RemoveNewline => remove_newline(text),
            Rule::RemoveLink => remove_link(text),
            Rule::RemoveRetweet => remove_retweet(text),
            Rule::RemoveMention => remove_mention(text),
            Rule::RemoveTag => remove_tag(text),
            Rule::CollapseSpaces => collapse_spaces(text),
            Rule::RemoveSpaces => remove_spaces(text),
            Rule::Strip => strip(text),
            Rule::ConvertSlash => convert_slash(text),
        }
    }
}

/// Deletes `\n` without inserting a separator.
pub fn remove_newline(text: &str) -> String {
    text.replace('\n', "")
}

/// Deletes `http://` and `https://` links.
pub fn remove_link(text: &str) -> String {
    LINK_RE.replace_all(text, "").into_owned()
}

/// Deletes `RT @user:` reshare markers as a single unit.
pub fn remove_retweet(text: &str) -> String {
    RETWEET_RE.replace_all(text, "").into_owned()
}

pub fn remove_mention(text: &str) -> String {
    MENTION_RE.replace_all(text, "").into_owned()
}

pub fn remove_tag(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

/// Replaces each whitespace run with one ASCII space.
pub fn collapse_spaces(text: &str) -> String {
    SPACES_RE.replace_all(text, " ").into_owned()
}

/// Deletes every whitespace run.
pub fn remove_spaces(text: &str) -> String {
    SPACES_RE.replace_all(text, "").into_owned()
}

pub fn strip(text: &str) -> String {
    text.trim_matches(is_space).to_string()
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

pub fn convert_slash(text: &str) -> String {
    text.replace('/', &FULLWIDTH_SLASH.to_string())
}
