//! Code-point key encoding
//!
//! Derives the lowercase hyphen-joined hexadecimal code-point key the
//! remote asset collection uses as its file naming scheme. Glyphs are
//! NFC-normalized first so that combining-sequence and precomposed input
//! produce the same key.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::{EmojiconError, EmojiconResult};

/// Lexical form of a code-point key: one or more lowercase hex segments
/// joined by `-`. Each segment may span multiple digits (flags, skin
/// tones, and ZWJ sequences all produce multi-digit segments).
static CODE_POINT_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]+(-[0-9a-f]+)*$").expect("code point pattern is valid"));

/// Encode a glyph to its code-point key, e.g. `"😀"` to `"1f600"` or
/// `"🇺🇸"` to `"1f1fa-1f1f8"`.
///
/// Iterates the NFC-normalized glyph by Unicode scalar value, in
/// left-to-right order, one hex segment per scalar value.
pub fn encode(glyph: &str) -> EmojiconResult<String> {
    let normalized: String = glyph.nfc().collect();
    let key = normalized
        .chars()
        .map(|c| format!("{:x}", c as u32))
        .collect::<Vec<_>>()
        .join("-");

    if !CODE_POINT_KEY.is_match(&key) {
        return Err(EmojiconError::InvalidCodePoints {
            key,
            glyph: glyph.to_string(),
        });
    }
    Ok(key)
}
