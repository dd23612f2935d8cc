//! Shortcode resolution
//!
//! Maps user input (a literal glyph or a textual shortcode such as
//! `:smile:`) to an emoji glyph string. Matching is insensitive to case,
//! surrounding whitespace, `:` delimiters, and `_`/`-` separators.
//!
//! Resolution never fails: input that matches nothing is returned with
//! whitespace and `:` delimiters stripped, so that downstream code-point
//! validation (or the remote asset lookup) rejects it with a precise
//! error instead of guessing here.

use crate::shortcodes;

/// Shortcode table entry: `(name, glyph)`, name stored without `:`.
pub type ShortcodeTable = &'static [(&'static str, &'static str)];

/// Resolves shortcodes against an injected, immutable table.
pub struct ShortcodeResolver {
    table: ShortcodeTable,
}

impl ShortcodeResolver {
    /// Create a resolver over a custom table.
    pub fn new(table: ShortcodeTable) -> Self {
        Self { table }
    }

    /// Create a resolver over the builtin table.
    pub fn builtin() -> Self {
        Self::new(shortcodes::BUILTIN)
    }

    /// Resolve `input` to a glyph string.
    ///
    /// Glyph input passes through untouched (it matches no table name).
    pub fn resolve(&self, input: &str) -> String {
        let trimmed = input.trim();
        let wanted = normalize(trimmed);
        for (name, glyph) in self.table {
            if normalize(name) == wanted {
                return (*glyph).to_string();
            }
        }

        // No normalized match: treat the bare token as a shortcode name
        // and try an exact lookup before giving up.
        let token = trimmed.trim_matches(':');
        for (name, glyph) in self.table {
            if *name == token {
                return (*glyph).to_string();
            }
        }
        token.to_string()
    }
}

impl Default for ShortcodeResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Build the comparison key: lowercase, strip `:` delimiters, drop `_`/`-`.
fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .trim_matches(':')
        .chars()
        .filter(|c| !matches!(c, '_' | '-'))
        .collect()
}
