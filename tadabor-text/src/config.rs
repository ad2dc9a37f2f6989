//! Search option sets.

use serde::{Deserialize, Serialize};

use crate::arabic::MatchMode;

/// Options for word search. Every switch defaults to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WordSearchOptions {
    /// Compare against the text as written, diacritics included
    pub diacritics: bool,
    /// Only whole-word matches
    pub identical: bool,
    /// Only matches at the start of a word
    pub start_only: bool,
}

impl WordSearchOptions {
    /// Whole-word search on normalized text.
    pub fn identical() -> Self {
        Self {
            identical: true,
            ..Self::default()
        }
    }

    /// Word-prefix search on normalized text.
    pub fn start_only() -> Self {
        Self {
            start_only: true,
            ..Self::default()
        }
    }

    pub fn with_diacritics(mut self) -> Self {
        self.diacritics = true;
        self
    }

    pub fn mode(&self) -> MatchMode {
        MatchMode::from_flags(self.identical, self.start_only)
    }
}
