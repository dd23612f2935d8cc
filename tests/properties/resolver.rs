//! Property tests for shortcode resolution.

use proptest::prelude::*;

use emojicon::shortcodes::BUILTIN;
use emojicon::ShortcodeResolver;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `resolve` never panics on arbitrary input.
    #[test]
    fn property_resolve_never_panics(input in "(?s).{0,64}") {
        let resolver = ShortcodeResolver::builtin();
        let _ = resolver.resolve(&input);
    }

    /// PROPERTY: surrounding whitespace never changes the result.
    #[test]
    fn property_resolve_trims_whitespace(input in "(?s).{0,32}") {
        let resolver = ShortcodeResolver::builtin();
        let padded = format!("  {input}\t");
        prop_assert_eq!(resolver.resolve(&padded), resolver.resolve(&input));
    }

    /// PROPERTY: every builtin shortcode resolves to its glyph through
    /// the delimiter/case variants.
    #[test]
    fn property_builtin_names_resolve(index in 0..BUILTIN.len()) {
        let (name, glyph) = BUILTIN[index];
        let resolver = ShortcodeResolver::builtin();
        prop_assert_eq!(resolver.resolve(name), glyph);
        prop_assert_eq!(resolver.resolve(&format!(":{name}:")), glyph);
        prop_assert_eq!(resolver.resolve(&format!(" :{}: ", name.to_uppercase())), glyph);
    }

    /// PROPERTY: results carry no surrounding whitespace or delimiters.
    #[test]
    fn property_resolve_output_is_stripped(input in "(?s).{0,32}") {
        let resolver = ShortcodeResolver::builtin();
        let resolved = resolver.resolve(&input);
        prop_assert_eq!(resolved.trim(), resolved.as_str());
        prop_assert!(!resolved.starts_with(':'));
        prop_assert!(!resolved.ends_with(':'));
    }
}
