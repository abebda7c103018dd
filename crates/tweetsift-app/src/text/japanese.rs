//! Japanese script classifier backed by Unicode block ranges.

use super::script::{ClassifyError, ScriptClassifier};

/// Treats kana, kanji, and CJK punctuation as the allowed script.
///
/// Characters without a Unicode character name (controls, private use,
/// noncharacters) cannot be classified and fail both checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JapaneseClassifier;

impl ScriptClassifier for JapaneseClassifier {
    fn is_allowed_script(&self, c: char) -> Result<bool, ClassifyError> {
        ensure_named(c)?;
        Ok(is_japanese(c))
    }

    fn is_ascii(&self, c: char) -> Result<bool, ClassifyError> {
        ensure_named(c)?;
        Ok(c.is_ascii())
    }
}

fn ensure_named(c: char) -> Result<(), ClassifyError> {
    if c.is_control() || is_private_use(c) || is_noncharacter(c) {
        return Err(ClassifyError::Unnamed(c as u32));
    }
    Ok(())
}

#[inline]
pub fn is_japanese(c: char) -> bool {
    is_hiragana(c) || is_katakana(c) || is_kanji(c) || is_cjk_punctuation(c)
}

#[inline]
pub fn is_hiragana(c: char) -> bool {
    matches!(c as u32, 0x3040..=0x309F)
}

#[inline]
pub fn is_katakana(c: char) -> bool {
    matches!(c as u32,
        0x30A0..=0x30FF | // Katakana
        0x31F0..=0x31FF | // Phonetic Extensions
        0xFF65..=0xFF9F   // Halfwidth forms
    )
}

#[inline]
pub fn is_kanji(c: char) -> bool {
    matches!(c as u32,
        0x3400..=0x4DBF   | // Ext A
        0x4E00..=0x9FFF   | // Unified
        0xF900..=0xFAFF   | // Compatibility
        0x20000..=0x2FA1F   // Ext B onwards + compatibility supplement
    )
}

/// Ideographic space, `、`, `。`, brackets, and iteration marks.
#[inline]
pub fn is_cjk_punctuation(c: char) -> bool {
    matches!(c as u32, 0x3000..=0x303F)
}

fn is_private_use(c: char) -> bool {
    matches!(c as u32, 0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD)
}

fn is_noncharacter(c: char) -> bool {
    let cp = c as u32;
    (0xFDD0..=0xFDEF).contains(&cp) || (cp & 0xFFFE) == 0xFFFE
}
