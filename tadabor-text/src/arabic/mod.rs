//! Arabic Text Processing
//!
//! Letter segmentation, normalization, boundary-aware patterns and match
//! annotation for diacritized Arabic text.

mod annotate;
mod letters;
mod normalizer;
mod pattern;

pub use annotate::{annotate_matches, join_fragments, Fragment};
pub use letters::{is_valid_letter, segment, segment_spans, ARABIC_ALPHABET, EXTENDED_LETTERS};
pub use normalizer::{
    is_diacritic, normalize_alif, normalize_for_search, only_spaces, remove_diacritics, AlifMode,
    ArabicNormalizer,
};
pub use pattern::{MatchMode, Pattern, Piece};
