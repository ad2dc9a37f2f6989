//! Boundary-aware token patterns.
//!
//! Word boundaries are checked explicitly against the characters around a
//! candidate position, so every token character is matched literally.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::TextError;

/// How a token must sit inside the text to count as a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Anywhere in the text.
    #[default]
    Substring,
    /// A whole word: whitespace or text edge on both sides.
    Identical,
    /// A word prefix: whitespace or text start before it.
    StartOnly,
}

impl MatchMode {
    /// `identical` wins over `start_only` when both are set.
    pub fn from_flags(identical: bool, start_only: bool) -> Self {
        if identical {
            MatchMode::Identical
        } else if start_only {
            MatchMode::StartOnly
        } else {
            MatchMode::Substring
        }
    }
}

/// A contiguous piece of split text, as char indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub range: Range<usize>,
    pub is_match: bool,
}

/// A compiled token matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    token: Vec<char>,
    left_boundary: bool,
    right_boundary: bool,
}

impl Pattern {
    pub fn new(token: &str, mode: MatchMode) -> Result<Self, TextError> {
        let token: Vec<char> = token.chars().collect();
        let (first, last) = match (token.first(), token.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(TextError::EmptyToken),
        };

        // A token that already carries the adjacent space supplies its own boundary.
        let left_boundary = mode != MatchMode::Substring && first != ' ';
        let right_boundary = mode == MatchMode::Identical && last != ' ';

        Ok(Self {
            token,
            left_boundary,
            right_boundary,
        })
    }

    fn matches_at(&self, text: &[char], start: usize) -> bool {
        let end = start + self.token.len();
        if end > text.len() || text[start..end] != self.token[..] {
            return false;
        }
        if self.left_boundary && start > 0 && !text[start - 1].is_whitespace() {
            return false;
        }
        if self.right_boundary && end < text.len() && !text[end].is_whitespace() {
            return false;
        }
        true
    }

    /// Non-overlapping matches, scanning left to right.
    pub fn find_all(&self, text: &[char]) -> Vec<Range<usize>> {
        let mut matches = Vec::new();
        let mut start = 0;
        while start + self.token.len() <= text.len() {
            if self.matches_at(text, start) {
                let end = start + self.token.len();
                matches.push(start..end);
                start = end;
            } else {
                start += 1;
            }
        }
        matches
    }

    pub fn is_found(&self, text: &[char]) -> bool {
        (0..text.len()).any(|start| self.matches_at(text, start))
    }

    pub fn is_found_in(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        self.is_found(&chars)
    }

    /// Split `text` into alternating unmatched and matched pieces.
    ///
    /// Pieces are in text order, cover the whole text and are never empty.
    pub fn split(&self, text: &[char]) -> Vec<Piece> {
        let mut pieces = Vec::new();
        let mut cursor = 0;

        for found in self.find_all(text) {
            if found.start > cursor {
                pieces.push(Piece {
                    range: cursor..found.start,
                    is_match: false,
                });
            }
            cursor = found.end;
            pieces.push(Piece {
                range: found,
                is_match: true,
            });
        }

        if cursor < text.len() {
            pieces.push(Piece {
                range: cursor..text.len(),
                is_match: false,
            });
        }

        pieces
    }
}
