use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    High,
    Rising,
    Low,
    Falling,
}

impl Tone {
    pub fn digit(self) -> char {
        match self {
            Tone::Neutral => '0',
            Tone::High => '1',
            Tone::Rising => '2',
            Tone::Low => '3',
            Tone::Falling => '4',
        }
    }
}

impl Display for Tone {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}

/// Marked vowel -> (plain vowel, tone). Scanned front to back, so the order
/// decides which mark wins in a syllable carrying more than one.
pub static PINYIN_MAP: [(char, char, Tone); 24] = [
    ('ā', 'a', Tone::High),
    ('á', 'a', Tone::Rising),
    ('ǎ', 'a', Tone::Low),
    ('à', 'a', Tone::Falling),
    ('ō', 'o', Tone::High),
    ('ó', 'o', Tone::Rising),
    ('ǒ', 'o', Tone::Low),
    ('ò', 'o', Tone::Falling),
    ('ē', 'e', Tone::High),
    ('é', 'e', Tone::Rising),
    ('ě', 'e', Tone::Low),
    ('è', 'e', Tone::Falling),
    ('ī', 'i', Tone::High),
    ('í', 'i', Tone::Rising),
    ('ǐ', 'i', Tone::Low),
    ('ì', 'i', Tone::Falling),
    ('ū', 'u', Tone::High),
    ('ú', 'u', Tone::Rising),
    ('ǔ', 'u', Tone::Low),
    ('ù', 'u', Tone::Falling),
    ('ü', 'ü', Tone::Neutral),
    ('ǘ', 'ü', Tone::Rising),
    ('ǚ', 'ü', Tone::Low),
    ('ǜ', 'ü', Tone::Falling),
];

/// Rewrites one syllable into tone-number form.
///
/// Only the first table entry found in the syllable is substituted; a
/// second mark (`āí`) is left as is and yields `a1í`. Syllables without
/// any mark pass through untouched.
pub fn standardize_syllable(syllable: &str) -> String {
    let Some(&(marked, plain, tone)) = PINYIN_MAP
        .iter()
        .find(|(marked, _, _)| syllable.contains(*marked))
    else {
        return syllable.to_owned();
    };

    let mut standardized = syllable.replace(marked, &plain.to_string());
    standardized.push(tone.digit());
    standardized
}

/// Splits on single spaces, standardizes each syllable and joins them back.
pub fn standardize_pinyin(pinyin: &str) -> String {
    pinyin
        .split(' ')
        .map(standardize_syllable)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether any tone-marked vowel (anything in the table except plain `ü`)
/// is still present.
pub fn has_tone_mark(syllable: &str) -> bool {
    syllable
        .chars()
        .any(|c| PINYIN_MAP.iter().any(|(marked, plain, _)| *marked == c && marked != plain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_syllables() {
        assert_eq!(standardize_syllable("ā"), "a1");
        assert_eq!(standardize_syllable("bí"), "bi2");
        assert_eq!(standardize_syllable("zhǒng"), "zhong3");
        assert_eq!(standardize_syllable("lǜ"), "lü4");
        assert_eq!(standardize_syllable("nǚ"), "nü3");
    }

    #[test]
    fn test_plain_umlaut_is_neutral() {
        assert_eq!(standardize_syllable("ü"), "ü0");
        assert_eq!(standardize_syllable("lü"), "lü0");
    }

    #[test]
    fn test_unmarked_syllable_passes_through() {
        assert_eq!(standardize_syllable("de"), "de");
        assert_eq!(standardize_syllable(""), "");
    }

    #[test]
    fn test_only_first_table_entry_is_substituted() {
        // `ā` precedes `í` in the table regardless of position in the syllable
        assert_eq!(standardize_syllable("āí"), "a1í");
        assert_eq!(standardize_syllable("íā"), "ía1");
    }

    #[test]
    fn test_every_occurrence_of_the_matched_mark_is_replaced() {
        assert_eq!(standardize_syllable("āā"), "aa1");
    }

    #[test]
    fn test_whole_pinyin() {
        assert_eq!(standardize_pinyin("ā bí dì yù"), "a1 bi2 di4 yu4");
        assert_eq!(standardize_pinyin("ē dǎng bǐ zhōu"), "e1 dang3 bi3 zhou1");
    }

    #[test]
    fn test_spacing_is_kept() {
        assert_eq!(standardize_pinyin("ā  bí"), "a1  bi2");
        assert_eq!(standardize_pinyin(""), "");
    }

    #[test]
    fn test_table_order() {
        assert_eq!(PINYIN_MAP[0].0, 'ā');
        assert_eq!(PINYIN_MAP[20], ('ü', 'ü', Tone::Neutral));
        assert!(!PINYIN_MAP.iter().any(|(marked, _, _)| *marked == 'ǖ'));
    }

    #[test]
    fn test_has_tone_mark() {
        assert!(has_tone_mark("a1í"));
        assert!(!has_tone_mark("lü4"));
        assert!(!has_tone_mark("a1"));
        assert!(!has_tone_mark("ǖ"));
    }

    #[test]
    fn test_tone_display() {
        assert_eq!(Tone::Neutral.to_string(), "0");
        assert_eq!(Tone::Falling.to_string(), "4");
    }
}
