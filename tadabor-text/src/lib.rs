//! Text layer of the tadabor search engine.
//!
//! Everything here works on plain strings; corpus types live in `tadabor-core`.

pub mod arabic;
mod config;

pub use arabic::{
    annotate_matches, join_fragments, normalize_alif, normalize_for_search, only_spaces,
    remove_diacritics, segment, AlifMode, ArabicNormalizer, Fragment, MatchMode, Pattern,
};
pub use config::WordSearchOptions;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    #[error("search token cannot be empty")]
    EmptyToken,
}
