//! Arabic Text Normalizer
//!
//! Provides the two transforms used for orthography-insensitive comparison:
//! - Diacritics (tashkeel) and tatweel removal
//! - Alif variant folding, in one of three modes
//!
//! Both transforms work one character at a time, so normalizing a text gives
//! the same result as normalizing each of its letter units and joining them.

use serde::{Deserialize, Serialize};

const ALIF: char = '\u{0627}';
const ALIF_MADDA: char = '\u{0622}';
const ALIF_HAMZA_ABOVE: char = '\u{0623}';
const ALIF_HAMZA_BELOW: char = '\u{0625}';
const HAMZA: char = '\u{0621}';
const TATWEEL: char = '\u{0640}';

/// How alif variants are folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlifMode {
    /// آ إ أ -> ا
    #[default]
    Default,
    /// آ إ أ ء -> ا
    IncludeHamza,
    /// آ إ ا ء -> أ
    Reverse,
}

impl AlifMode {
    fn fold(self, ch: char) -> char {
        match self {
            AlifMode::Default => match ch {
                ALIF_MADDA | ALIF_HAMZA_BELOW | ALIF_HAMZA_ABOVE => ALIF,
                _ => ch,
            },
            AlifMode::IncludeHamza => match ch {
                ALIF_MADDA | ALIF_HAMZA_BELOW | ALIF_HAMZA_ABOVE | HAMZA => ALIF,
                _ => ch,
            },
            AlifMode::Reverse => match ch {
                ALIF_MADDA | ALIF_HAMZA_BELOW | ALIF | HAMZA => ALIF_HAMZA_ABOVE,
                _ => ch,
            },
        }
    }
}

/// Arabic text normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArabicNormalizer {
    /// Remove diacritical marks (tashkeel) and tatweel
    pub remove_diacritics: bool,
    /// Fold alif variants, when set
    pub alif: Option<AlifMode>,
}

impl Default for ArabicNormalizer {
    fn default() -> Self {
        Self {
            remove_diacritics: true,
            alif: Some(AlifMode::Default),
        }
    }
}

impl ArabicNormalizer {
    /// Create the normalizer used for search comparison.
    pub fn new() -> Self {
        Self::default()
    }

    /// A normalizer that leaves text untouched.
    pub fn identity() -> Self {
        Self {
            remove_diacritics: false,
            alif: None,
        }
    }

    /// Normalize Arabic text.
    pub fn normalize(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        for ch in text.chars() {
            if let Some(normalized) = self.normalize_char(ch) {
                result.push(normalized);
            }
        }
        result
    }

    /// Normalize a single character; `None` means it is dropped.
    pub fn normalize_char(&self, ch: char) -> Option<char> {
        if self.remove_diacritics && is_diacritic(ch) {
            return None;
        }

        Some(match self.alif {
            Some(mode) => mode.fold(ch),
            None => ch,
        })
    }
}

/// Check if a character is a diacritical mark or tatweel.
pub fn is_diacritic(ch: char) -> bool {
    matches!(ch,
        '\u{064B}'..='\u{0652}' | // Fathatan to Sukun
        '\u{0670}' |              // Superscript alef
        TATWEEL
    )
}

/// Delete diacritics and tatweel.
pub fn remove_diacritics(text: &str) -> String {
    text.chars().filter(|ch| !is_diacritic(*ch)).collect()
}

/// Fold alif variants according to `mode`.
pub fn normalize_alif(text: &str, mode: AlifMode) -> String {
    text.chars().map(|ch| mode.fold(ch)).collect()
}

/// Diacritics removal followed by default alif folding.
pub fn normalize_for_search(text: &str) -> String {
    ArabicNormalizer::new().normalize(text)
}

/// True for empty or whitespace-only text.
pub fn only_spaces(text: &str) -> bool {
    text.trim().is_empty()
}
