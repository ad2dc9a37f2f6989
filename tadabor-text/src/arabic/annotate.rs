//! Match annotation.
//!
//! Finds a token in (optionally normalized) text and cuts the original text
//! into fragments flagged as matched or not. Matching may run on stripped
//! text, but fragments always carry the original letters with their marks.

use serde::{Deserialize, Serialize};

use super::letters::segment_spans;
use super::normalizer::{only_spaces, ArabicNormalizer};
use super::pattern::{Pattern, Piece};
use crate::config::WordSearchOptions;

/// One piece of a verse, inside or outside a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    pub text: String,
    pub is_match: bool,
}

impl Fragment {
    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: true,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: false,
        }
    }
}

/// Concatenate fragment texts in order.
pub fn join_fragments(fragments: &[Fragment]) -> String {
    fragments.iter().map(|fragment| fragment.text.as_str()).collect()
}

/// Annotate every occurrence of `token` in `text`.
///
/// When `options.diacritics` is off the token must already be normalized the
/// way [`normalize_for_search`](super::normalize_for_search) does it. Returns
/// `None` when either side is blank or nothing matches.
pub fn annotate_matches(
    text: &str,
    token: &str,
    options: &WordSearchOptions,
) -> Option<Vec<Fragment>> {
    if only_spaces(token) || only_spaces(text) {
        return None;
    }

    let pattern = Pattern::new(token, options.mode()).ok()?;

    if options.diacritics {
        let chars: Vec<char> = text.chars().collect();
        let pieces = pattern.split(&chars);
        if !pieces.iter().any(|piece| piece.is_match) {
            return None;
        }
        return Some(
            pieces
                .into_iter()
                .map(|piece| Fragment {
                    text: chars[piece.range].iter().collect(),
                    is_match: piece.is_match,
                })
                .collect(),
        );
    }

    let skeleton = Skeleton::build(text, &ArabicNormalizer::new());
    let pieces = pattern.split(&skeleton.chars);
    if !pieces.iter().any(|piece| piece.is_match) {
        return None;
    }

    Some(skeleton.restore(text, pieces))
}

/// Normalized text plus, for each normalized char, its own byte offset in
/// the original text. Stripped marks have no entry and stay with the kept
/// character before them.
struct Skeleton {
    chars: Vec<char>,
    offsets: Vec<usize>,
}

impl Skeleton {
    fn build(text: &str, normalizer: &ArabicNormalizer) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut offsets = Vec::with_capacity(text.len());

        for span in segment_spans(text) {
            for (offset, ch) in text[span.clone()].char_indices() {
                if let Some(normalized) = normalizer.normalize_char(ch) {
                    chars.push(normalized);
                    offsets.push(span.start + offset);
                }
            }
        }

        Self { chars, offsets }
    }

    /// Original byte offset for a piece boundary at normalized index `index`.
    ///
    /// Index 0 maps to the text start so leading stripped marks are kept.
    fn boundary(&self, index: usize, text_len: usize) -> usize {
        if index == 0 {
            return 0;
        }
        self.offsets.get(index).copied().unwrap_or(text_len)
    }

    fn restore(&self, text: &str, pieces: Vec<Piece>) -> Vec<Fragment> {
        pieces
            .into_iter()
            .map(|piece| {
                let start = self.boundary(piece.range.start, text.len());
                let end = self.boundary(piece.range.end, text.len());
                Fragment {
                    text: text[start..end].to_string(),
                    is_match: piece.is_match,
                }
            })
            .collect()
    }
}
