//! Scripture corpus, root occurrence decoding and search.
//!
//! A [`Corpus`] is loaded once from the chapter, verse and root documents and
//! then only read. Text matching is delegated to `tadabor-text`; root
//! highlighting is driven by the word positions stored in the root catalog.

use std::path::PathBuf;

mod config;
mod corpus;
mod loader;
pub mod model;
pub mod occurrence;
pub mod search;

pub use config::{ChapterScope, CorpusSource, RootSearchOptions};
pub use corpus::{Corpus, CorpusPart};
pub use model::{
    Chapter, ChapterRecord, Derivation, LetterKey, Root, Verse, VerseKey, VerseMatch,
    VerseRecord, CHAPTER_COUNT,
};
pub use occurrence::{
    build_position_fragments, decode_occurrence, derive_in_verse, Occurrence, VerseDerivations,
};
pub use search::{has_all_letters, match_word, RootSearchResult, CONJUNCTION_ROOT};
pub use tadabor_text::{Fragment, WordSearchOptions};

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("{0} not loaded")]
    NotLoaded(CorpusPart),

    #[error("chapter {0} not found")]
    ChapterNotFound(u32),

    #[error("verse {0} not found")]
    VerseNotFound(VerseKey),

    #[error("no verse at rank {0}")]
    RankNotFound(usize),

    #[error("root id {0} not found")]
    RootIdNotFound(u32),

    #[error("root {0} not found")]
    RootNotFound(String),

    #[error("verse {key} has no word at position {position}")]
    WordNotFound { key: VerseKey, position: usize },

    #[error("verse {key} has no letter {letter} in word {word}")]
    LetterNotFound {
        key: VerseKey,
        word: usize,
        letter: usize,
    },

    #[error("malformed key {0:?}")]
    MalformedKey(String),

    #[error("malformed occurrence {0:?}")]
    MalformedOccurrence(String),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
