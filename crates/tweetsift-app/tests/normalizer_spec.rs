use proptest::prelude::*;
use strum::IntoEnumIterator;

use tweetsift_app::text::rules::{collapse_spaces, strip};
use tweetsift_app::text::{FULLWIDTH_SLASH, NormalizerVariant, normalize};

fn has_whitespace_run(text: &str) -> bool {
    text.chars()
        .zip(text.chars().skip(1))
        .any(|(a, b)| a.is_whitespace() && b.is_whitespace())
}

fn noisy_post() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("RT @alice: ".to_string()),
            Just("@bob".to_string()),
            Just("#tag".to_string()),
            Just("http://x.co/a/b".to_string()),
            Just("\n".to_string()),
            Just("\t ".to_string()),
            Just("\u{3000}".to_string()),
            Just("path/to".to_string()),
            "[a-zあ-ん]{1,4}",
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn base_output_has_no_newlines_runs_or_padding(raw in any::<String>()) {
        let out = normalize(&raw, NormalizerVariant::Base);
        prop_assert!(!out.contains('\n'));
        prop_assert!(!has_whitespace_run(&out));
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn collapse_and_strip_are_idempotent(raw in any::<String>()) {
        let once = collapse_spaces(&raw);
        prop_assert_eq!(collapse_spaces(&once), once.clone());
        let stripped = strip(&raw);
        prop_assert_eq!(strip(&stripped), stripped);
    }

    #[test]
    fn every_variant_is_idempotent_on_posts(raw in noisy_post()) {
        for variant in NormalizerVariant::iter() {
            let once = normalize(&raw, variant);
            prop_assert_eq!(normalize(&once, variant), once.clone(), "{}", variant);
        }
    }

    #[test]
    fn platform_output_has_no_mentions_or_tags(raw in noisy_post()) {
        let out = normalize(&raw, NormalizerVariant::Platform);
        prop_assert!(!out.contains('@'));
        prop_assert!(!out.contains('#'));
        prop_assert!(!out.contains("http://"));
    }

    #[test]
    fn tokenizer_output_has_no_whitespace_or_slash(raw in noisy_post()) {
        let out = normalize(&raw, NormalizerVariant::Tokenizer);
        prop_assert!(!out.chars().any(char::is_whitespace));
        prop_assert!(!out.contains('/'));
    }
}

#[test]
fn platform_strips_retweet_marker_mentions_and_tags() {
    assert_eq!(
        normalize("RT @alice: hello @bob #greet", NormalizerVariant::Platform),
        "hello"
    );
}

#[test]
fn retweet_removal_runs_before_mention_removal() {
    // With mentions removed first, "RT :" would survive.
    let out = normalize("RT @alice: おはよう", NormalizerVariant::Platform);
    assert_eq!(out, "おはよう");
    assert!(!out.contains("RT"));
}

#[test]
fn link_removal_runs_before_whitespace_collapse() {
    assert_eq!(
        normalize("a https://example.com/x b", NormalizerVariant::Base),
        "a b"
    );
}

#[test]
fn newlines_are_deleted_not_spaced() {
    assert_eq!(normalize("こんにち\nは", NormalizerVariant::Base), "こんにちは");
    assert_eq!(normalize("word\nword", NormalizerVariant::Base), "wordword");
}

#[test]
fn tokenizer_removes_links_and_spaces_and_replaces_slashes() {
    assert_eq!(
        normalize("check http://x.co/a/b now", NormalizerVariant::Tokenizer),
        "checknow"
    );
    assert_eq!(
        normalize("go path/to/x now", NormalizerVariant::Tokenizer),
        format!("gopath{FULLWIDTH_SLASH}to{FULLWIDTH_SLASH}xnow")
    );
}

#[test]
fn base_keeps_platform_tokens() {
    assert_eq!(
        normalize("RT @alice: hi #tag", NormalizerVariant::Base),
        "RT @alice: hi #tag"
    );
}

#[test]
fn information_separators_collapse_like_spaces() {
    assert_eq!(
        normalize("a\u{1c}\u{1c}b", NormalizerVariant::Base),
        "a b"
    );
    assert_eq!(
        normalize("\u{1f}あ\u{1d}い\u{1e}", NormalizerVariant::Tokenizer),
        "あい"
    );
}
