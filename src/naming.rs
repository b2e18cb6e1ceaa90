//! Display names and package names.
//!
//! Every stylesheet gets a short label derived from its filename, and every
//! package name is built from two of those labels:
//!
//! - `accent/ocean.css` → "Ocean"
//! - `scheme/dark.css` → "Dark"
//! - (ocean, dark) → `Sheet-Ocean-Dark`
//!
//! Capitalization title-cases the first character and lowercases the rest,
//! so `darkBLUE.css` becomes "Darkblue". Two files whose names differ only in
//! case therefore map to the same label; such collisions are not detected.

use std::path::Path;

/// Capitalize a string: first character title-cased, remainder lowercased.
///
/// Title case differs from uppercase for a handful of characters: `ß` becomes
/// `Ss`, the digraph `ǆ` becomes `ǅ`, and ligatures such as `ﬁ` become `Fi`.
/// The remainder is lowercased as a whole, so a word-final `Σ` becomes `ς`.
pub fn capitalize(s: &str) -> String {
    let Some(first) = s.chars().next() else {
        return String::new();
    };
    let mut out = titlecase(first);
    out.extend(s.to_lowercase().chars().skip(first.to_lowercase().count()));
    out
}

/// Title-case mapping of a single character.
///
/// Only characters whose title case differs from `char::to_uppercase` are
/// listed; everything else falls through to uppercase.
fn titlecase(c: char) -> String {
    let mapped = match c {
        // DŽ, LJ, NJ, DZ digraphs
        '\u{01C4}'..='\u{01C6}' => "\u{01C5}",
        '\u{01C7}'..='\u{01C9}' => "\u{01C8}",
        '\u{01CA}'..='\u{01CC}' => "\u{01CB}",
        '\u{01F1}'..='\u{01F3}' => "\u{01F2}",
        'ß' => "Ss",
        'ﬀ' => "Ff",
        'ﬁ' => "Fi",
        'ﬂ' => "Fl",
        'ﬃ' => "Ffi",
        'ﬄ' => "Ffl",
        'ﬅ' | 'ﬆ' => "St",
        'և' => "Եւ",
        'ﬓ' => "Մն",
        'ﬔ' => "Մե",
        'ﬕ' => "Մի",
        'ﬖ' => "Վն",
        'ﬗ' => "Մխ",
        // Greek with ypogegrammeni keeps the iota subscript
        '\u{1F80}'..='\u{1FAF}' => {
            return char::from_u32(u32::from(c) | 0x08)
                .unwrap_or(c)
                .to_string();
        }
        '\u{1FB3}' | '\u{1FBC}' => "\u{1FBC}",
        '\u{1FC3}' | '\u{1FCC}' => "\u{1FCC}",
        '\u{1FF3}' | '\u{1FFC}' => "\u{1FFC}",
        '\u{1FB2}' => "\u{1FBA}\u{0345}",
        '\u{1FB4}' => "\u{0386}\u{0345}",
        '\u{1FB7}' => "\u{0391}\u{0342}\u{0345}",
        '\u{1FC2}' => "\u{1FCA}\u{0345}",
        '\u{1FC4}' => "\u{0389}\u{0345}",
        '\u{1FC7}' => "\u{0397}\u{0342}\u{0345}",
        '\u{1FF2}' => "\u{1FFA}\u{0345}",
        '\u{1FF4}' => "\u{038F}\u{0345}",
        '\u{1FF7}' => "\u{03A9}\u{0342}\u{0345}",
        // Georgian Mkhedruli is its own title case
        '\u{10D0}'..='\u{10FA}' | '\u{10FD}'..='\u{10FF}' => return c.to_string(),
        _ => return c.to_uppercase().collect(),
    };
    mapped.to_string()
}

/// Display name for a stylesheet: its capitalized filename stem.
pub fn display_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    capitalize(&stem)
}

/// Package directory name for one accent/scheme pairing.
pub fn package_name(prefix: &str, accent: &str, scheme: &str) -> String {
    format!("{prefix}-{accent}-{scheme}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_lowercase_word() {
        assert_eq!(capitalize("ocean"), "Ocean");
    }

    #[test]
    fn capitalize_lowers_the_rest() {
        assert_eq!(capitalize("darkBLUE"), "Darkblue");
        assert_eq!(capitalize("OCEAN"), "Ocean");
    }

    #[test]
    fn capitalize_empty() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_non_letter_first() {
        assert_eq!(capitalize("2tone"), "2tone");
        assert_eq!(capitalize("-Dim"), "-dim");
    }

    #[test]
    fn capitalize_unicode() {
        assert_eq!(capitalize("été"), "Été");
    }

    #[test]
    fn capitalize_uses_title_case() {
        assert_eq!(capitalize("ßig"), "Ssig");
        assert_eq!(capitalize("ǆemal"), "ǅemal");
        assert_eq!(capitalize("ǄEMAL"), "ǅemal");
        assert_eq!(capitalize("ﬁne"), "Fine");
        assert_eq!(capitalize("ᾳ"), "ᾼ");
        assert_eq!(capitalize("თბილისი"), "თბილისი");
    }

    #[test]
    fn capitalize_lowers_final_sigma() {
        assert_eq!(capitalize("ΟΔΟΣ"), "Οδος");
        assert_eq!(capitalize("ΑΣ"), "Ας");
    }

    #[test]
    fn display_name_strips_extension() {
        assert_eq!(display_name(Path::new("gtk-3.0/accent/ocean.css")), "Ocean");
    }

    #[test]
    fn display_name_only_last_extension() {
        assert_eq!(display_name(Path::new("high.contrast.css")), "High.contrast");
    }

    #[test]
    fn display_name_keeps_dashes() {
        assert_eq!(display_name(Path::new("solar-flare.css")), "Solar-flare");
    }

    #[test]
    fn package_name_joins_with_dashes() {
        assert_eq!(package_name("Sheet", "Ocean", "Dark"), "Sheet-Ocean-Dark");
    }

    #[test]
    fn package_name_custom_prefix() {
        assert_eq!(package_name("Paper", "Forest", "Light"), "Paper-Forest-Light");
    }
}
