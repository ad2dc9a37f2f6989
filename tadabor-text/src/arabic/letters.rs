//! Arabic Letter Segmentation
//!
//! Splits Arabic text into letter units: one base letter followed by the
//! diacritics and combining marks written on it.

use std::ops::Range;

/// The 29 base letters of the Arabic alphabet.
pub static ARABIC_ALPHABET: &[char] = &[
    'ا', 'ب', 'ت', 'ث', 'ج', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'س', 'ش', 'ص', 'ض',
    'ط', 'ظ', 'ع', 'غ', 'ف', 'ق', 'ك', 'ل', 'م', 'ن', 'ه', 'و', 'ى', 'ي',
];

/// Hamza-bearing forms and taa marbuta.
pub static EXTENDED_LETTERS: &[char] = &['أ', 'إ', 'آ', 'ة', 'ء', 'ؤ', 'ئ'];

/// Check if a character starts a new letter unit.
pub fn is_valid_letter(ch: char) -> bool {
    ARABIC_ALPHABET.contains(&ch) || EXTENDED_LETTERS.contains(&ch)
}

/// Byte ranges of the letter units in `text`.
///
/// Whitespace characters and recognized letters open a new unit; any other
/// character is appended to the unit before it. A mark at the very start of
/// the text has nothing to attach to and opens a unit of its own, which the
/// marks following it then join.
pub fn segment_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans: Vec<Range<usize>> = Vec::new();

    for (offset, ch) in text.char_indices() {
        let end = offset + ch.len_utf8();
        let opens_unit = ch.is_whitespace() || is_valid_letter(ch);

        match spans.last_mut() {
            Some(last) if !opens_unit => last.end = end,
            _ => spans.push(offset..end),
        }
    }

    spans
}

/// Split `text` into letter units, each carrying its own diacritics.
pub fn segment(text: &str) -> Vec<String> {
    segment_spans(text)
        .into_iter()
        .map(|span| text[span].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attaches_diacritics_to_letters() {
        let units = segment("بِسْمِ");
        assert_eq!(units, vec!["بِ", "سْ", "مِ"]);
    }

    #[test]
    fn whitespace_is_its_own_unit() {
        let units = segment("بِسْمِ  اللَّهِ");
        assert_eq!(units, vec!["بِ", "سْ", "مِ", " ", " ", "ا", "ل", "لَّ", "هِ"]);
    }

    #[test]
    fn every_unit_starts_with_letter_or_whitespace() {
        let text = "الرَّحْمَـٰنِ الرَّحِيمِ مَالِكِ يَوْمِ الدِّينِ";
        for unit in segment(text) {
            let first = unit.chars().next().unwrap();
            assert!(is_valid_letter(first) || first.is_whitespace(), "{unit}");
        }
    }

    #[test]
    fn tatweel_and_superscript_alef_stay_with_their_letter() {
        let units = segment("الرَّحْمَـٰنِ");
        assert_eq!(units, vec!["ا", "ل", "رَّ", "حْ", "مَـٰ", "نِ"]);
    }

    #[test]
    fn leading_mark_opens_standalone_unit() {
        let units = segment("\u{064E}\u{0651}بَ");
        assert_eq!(units, vec!["\u{064E}\u{0651}", "بَ"]);
    }

    #[test]
    fn spans_cover_the_whole_text() {
        let text = "قُلْ هُوَ اللَّهُ أَحَدٌ";
        let joined: String = segment_spans(text)
            .into_iter()
            .map(|span| &text[span])
            .collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn empty_text_has_no_units() {
        assert!(segment("").is_empty());
    }
}
