//! Spanish collation at primary strength.
//!
//! Strings compare on base letters only: case and accents are ignored, so
//! `"Ábaco"` and `"abaco"` are equal. `ñ` is a letter of its own, sorted
//! between `n` and `o`. Characters order as whitespace, then punctuation and
//! symbols, then digits, then letters; combining marks are ignored.

use std::cmp::Ordering;

/// Character class; classes order before anything within them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Whitespace,
    Punctuation,
    Digit,
    LatinLetter,
    OtherLetter,
}

/// Compare two strings under Spanish primary-strength collation.
pub fn compare(a: &str, b: &str) -> Ordering {
    primary_weights(a).cmp(primary_weights(b))
}

/// Compare by `primary`, breaking ties with `secondary`.
pub fn compare_then(primary: (&str, &str), secondary: (&str, &str)) -> Ordering {
    compare(primary.0, primary.1).then_with(|| compare(secondary.0, secondary.1))
}

fn primary_weights(text: &str) -> impl Iterator<Item = (Class, u32)> + '_ {
    text.chars().filter_map(primary_weight)
}

fn primary_weight(ch: char) -> Option<(Class, u32)> {
    if is_combining_mark(ch) {
        return None;
    }
    if ch.is_whitespace() {
        return Some((Class::Whitespace, ch as u32));
    }
    if let Some(digit) = ch.to_digit(10) {
        return Some((Class::Digit, digit));
    }
    if let Some(base) = latin_base(ch) {
        return Some((Class::LatinLetter, base));
    }
    if ch.is_alphabetic() {
        let lower = ch.to_lowercase().next().unwrap_or(ch);
        return Some((Class::OtherLetter, lower as u32));
    }
    Some((Class::Punctuation, ch as u32))
}

/// Letter slot for Latin letters: `a`=0, `b`=2, ... with `ñ` at `n`+1.
fn latin_base(ch: char) -> Option<u32> {
    let base = match ch {
        'a'..='z' => ch,
        'A'..='Z' => ch.to_ascii_lowercase(),
        'ñ' | 'Ñ' => return Some(slot('n') + 1),
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ý' | 'ÿ' | 'Ý' => 'y',
        _ => return None,
    };
    Some(slot(base))
}

fn slot(letter: char) -> u32 {
    (letter as u32 - 'a' as u32) * 2
}

fn is_combining_mark(ch: char) -> bool {
    matches!(ch, '\u{0300}'..='\u{036f}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_and_accents() {
        assert_eq!(compare("Ábaco", "abaco"), Ordering::Equal);
        assert_eq!(compare("BUDESONIDA", "budesónida"), Ordering::Equal);
    }

    #[test]
    fn decomposed_accents_match_precomposed() {
        assert_eq!(compare("a\u{0301}baco", "ábaco"), Ordering::Equal);
    }

    #[test]
    fn enye_sorts_after_n() {
        assert_eq!(compare("ñu", "nu"), Ordering::Greater);
        assert_eq!(compare("ñu", "ou"), Ordering::Less);
        assert_eq!(compare("Ñ", "ñ"), Ordering::Equal);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare("", "a"), Ordering::Less);
        assert_eq!(compare("Seretide", "Seretide Accuhaler"), Ordering::Less);
    }

    #[test]
    fn digits_before_letters_and_spaces_first() {
        assert_eq!(compare("Z", "9"), Ordering::Greater);
        assert_eq!(compare("a b", "ab"), Ordering::Less);
        assert_eq!(compare("a-b", "a b"), Ordering::Greater);
    }

    #[test]
    fn astral_symbols_stay_before_digits_and_letters() {
        assert_eq!(compare("\u{1F600}", "0"), Ordering::Less);
        assert_eq!(compare("\u{10FFFD}", "a"), Ordering::Less);
        assert_eq!(compare("\u{10FFFD}", "\u{3b1}"), Ordering::Less);
        assert_eq!(compare(" ", "\u{1F600}"), Ordering::Less);
    }

    #[test]
    fn secondary_breaks_ties() {
        assert_eq!(
            compare_then(("Ventolin", "VENTOLIN"), ("GSK", "Aldo")),
            Ordering::Greater
        );
    }
}
