//! Search over the loaded corpus.
//!
//! Every search is a linear scan. Finding nothing is not an error: word and
//! root searches return `Ok(None)` and list-shaped searches an empty list.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use tadabor_text::{
    annotate_matches, normalize_alif, normalize_for_search, only_spaces, AlifMode,
    WordSearchOptions,
};
use tracing::debug;

use crate::config::{ChapterScope, RootSearchOptions};
use crate::corpus::Corpus;
use crate::model::{Derivation, Root, Verse, VerseKey, VerseMatch};
use crate::occurrence::{build_position_fragments, derive_in_verse, Occurrence};
use crate::CorpusError;

/// Name of the conjunction root.
pub const CONJUNCTION_ROOT: &str = "و";

/// Highlighted verses and flat derivation list for a root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootSearchResult {
    pub verses: Vec<VerseMatch>,
    pub derivations: Vec<Derivation>,
}

/// Annotate the matches of `token` in one verse.
///
/// With `options.diacritics` off, `token` must already be normalized.
pub fn match_word(verse: &Verse, token: &str, options: &WordSearchOptions) -> Option<VerseMatch> {
    let fragments = annotate_matches(&verse.text, token, options)?;
    Some(VerseMatch::new(verse, fragments))
}

/// True when every character of `token` occurs in `name` at least as often.
pub fn has_all_letters(name: &str, token: &str) -> bool {
    let mut available: HashMap<char, usize> = HashMap::new();
    for ch in name.chars() {
        *available.entry(ch).or_insert(0) += 1;
    }

    token.chars().all(|ch| match available.get_mut(&ch) {
        Some(count) if *count > 0 => {
            *count -= 1;
            true
        }
        _ => false,
    })
}

impl Corpus {
    /// Find a word across the corpus or the chapters in `scope`.
    pub fn search_by_word(
        &self,
        token: &str,
        scope: &ChapterScope,
        options: &WordSearchOptions,
    ) -> Result<Option<Vec<VerseMatch>>, CorpusError> {
        let token = if options.diacritics {
            token.to_string()
        } else {
            normalize_for_search(token)
        };

        if only_spaces(&token) {
            return Ok(None);
        }

        let mut matches = Vec::new();
        let mut scan = |verses: &[Verse]| {
            matches.extend(
                verses
                    .iter()
                    .filter_map(|verse| match_word(verse, &token, options)),
            );
        };

        match scope {
            ChapterScope::Chapters(ids) if !scope.covers_all() => {
                for id in ids {
                    scan(self.chapter_verses(*id)?);
                }
            }
            _ => scan(self.verses()?),
        }

        debug!(token = %token, matches = matches.len(), "word search finished");
        Ok((!matches.is_empty()).then_some(matches))
    }

    /// Every derivation of the root named `name` within `scope`, in
    /// occurrence order.
    pub fn search_by_root(
        &self,
        name: &str,
        scope: &ChapterScope,
    ) -> Result<Option<RootSearchResult>, CorpusError> {
        if only_spaces(name) {
            return Ok(None);
        }

        let Some(root) = self.roots()?.iter().find(|root| root.name == name) else {
            debug!(root = name, "root not in catalog");
            return Ok(None);
        };

        let mut result = RootSearchResult::default();
        for occurrence in &root.occurrences {
            let verse = self.verse_by_rank(occurrence.rank)?;
            if !scope.includes(verse.chapter_id()) {
                continue;
            }
            let chapter_name = self.chapter_name(verse.chapter_id())?;
            let found = derive_in_verse(&occurrence.positions, verse, chapter_name)?;
            result.derivations.extend(found.derivations);
            result.verses.push(found.verse);
        }

        debug!(
            root = name,
            verses = result.verses.len(),
            derivations = result.derivations.len(),
            "root search finished"
        );
        Ok((!result.verses.is_empty()).then_some(result))
    }

    /// Highlight every verse holding a derivation of any of `root_ids`.
    ///
    /// Verses reached through several roots or occurrences appear once, with
    /// the union of their word positions. Unknown ids are skipped. With
    /// `sort` the output is ordered by chapter then verse, otherwise by first
    /// appearance.
    pub fn search_by_root_ids(
        &self,
        root_ids: &[u32],
        sort: bool,
    ) -> Result<Vec<VerseMatch>, CorpusError> {
        let roots = self.roots()?;
        let mut merged: Vec<(&Verse, Vec<usize>)> = Vec::new();
        let mut slots: HashMap<VerseKey, usize> = HashMap::new();

        for id in root_ids {
            let Some(root) = roots.iter().find(|root| root.id == *id) else {
                debug!(root_id = id, "skipping unknown root id");
                continue;
            };

            for occurrence in &root.occurrences {
                let verse = self.verse_by_rank(occurrence.rank)?;
                let slot = *slots.entry(verse.key).or_insert_with(|| {
                    merged.push((verse, Vec::new()));
                    merged.len() - 1
                });
                let positions = &mut merged[slot].1;
                for position in &occurrence.positions {
                    if !positions.contains(position) {
                        positions.push(*position);
                    }
                }
            }
        }

        let mut verses: Vec<VerseMatch> = merged
            .into_iter()
            .map(|(verse, positions)| {
                VerseMatch::new(verse, build_position_fragments(&verse.words(), &positions))
            })
            .collect();

        if sort {
            verses.sort_by_key(|verse| verse.key);
        }

        debug!(roots = root_ids.len(), verses = verses.len(), "root id search finished");
        Ok(verses)
    }

    /// Filter the root catalog by name. A blank query returns the whole catalog.
    pub fn search_roots(
        &self,
        query: &str,
        options: &RootSearchOptions,
    ) -> Result<Vec<&Root>, CorpusError> {
        let roots = self.roots()?;
        if only_spaces(query) {
            return Ok(roots.iter().collect());
        }

        let token = if options.normalize_token {
            normalize_alif(query, AlifMode::IncludeHamza)
        } else {
            query.to_string()
        };

        let found: Vec<&Root> = roots
            .iter()
            .filter(|root| {
                let name = if options.normalize_root {
                    normalize_alif(&root.name, AlifMode::IncludeHamza)
                } else {
                    root.name.clone()
                };

                name.starts_with(&token)
                    || (options.normalize_root && root.name.starts_with(&token))
                    || (options.search_inclusive && has_all_letters(&name, &token))
            })
            .collect();

        debug!(query, roots = found.len(), "root catalog search finished");
        Ok(found)
    }

    /// Roots with a derivation at word `position` (1-based) of the verse at `rank`.
    pub fn word_roots(&self, rank: usize, position: usize) -> Result<Vec<&Root>, CorpusError> {
        Ok(self
            .roots()?
            .iter()
            .filter(|root| occurs_at(&root.occurrences, rank, position))
            .collect())
    }

    /// Whether the word at `position` of the verse at `rank` carries the conjunction.
    pub fn has_conjunction(&self, rank: usize, position: usize) -> Result<bool, CorpusError> {
        let root = self.root_by_name(CONJUNCTION_ROOT)?;
        Ok(occurs_at(&root.occurrences, rank, position))
    }

    /// Derivations and highlighted verses for an explicit occurrence list,
    /// one verse entry per occurrence.
    pub fn occurrences_data(
        &self,
        occurrences: &[Occurrence],
    ) -> Result<RootSearchResult, CorpusError> {
        let mut result = RootSearchResult::default();
        for occurrence in occurrences {
            let verse = self.verse_by_rank(occurrence.rank)?;
            let chapter_name = self.chapter_name(verse.chapter_id())?;
            let found = derive_in_verse(&occurrence.positions, verse, chapter_name)?;
            result.derivations.extend(found.derivations);
            result.verses.push(found.verse);
        }
        Ok(result)
    }
}

fn occurs_at(occurrences: &[Occurrence], rank: usize, position: usize) -> bool {
    occurrences
        .iter()
        .any(|occurrence| occurrence.rank == rank && occurrence.contains(position))
}
