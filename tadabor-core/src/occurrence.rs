//! Root occurrence decoding.
//!
//! A root's occurrences are stored as `"<rank>:<w1>,<w2>,..."`: the global
//! rank of a verse followed by the 1-based positions of the words in that
//! verse derived from the root. Highlighting here is driven by positions
//! only; no text comparison takes place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use tadabor_text::Fragment;

use crate::model::{Derivation, Verse, VerseMatch};
use crate::CorpusError;

/// A decoded occurrence token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Occurrence {
    pub rank: usize,
    pub positions: Vec<usize>,
}

impl Occurrence {
    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }
}

impl FromStr for Occurrence {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CorpusError::MalformedOccurrence(s.to_string());

        let (rank, positions) = s.split_once(':').ok_or_else(malformed)?;
        if rank.is_empty() || positions.is_empty() {
            return Err(malformed());
        }

        let rank = rank.trim().parse().map_err(|_| malformed())?;
        let positions = positions
            .split(',')
            .map(|position| match position.trim().parse::<usize>() {
                Ok(position) if position > 0 => Ok(position),
                _ => Err(malformed()),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rank, positions })
    }
}

impl TryFrom<String> for Occurrence {
    type Error = CorpusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Occurrence> for String {
    fn from(occurrence: Occurrence) -> Self {
        occurrence.to_string()
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.rank)?;
        for (i, position) in self.positions.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{position}")?;
        }
        Ok(())
    }
}

/// Decode `"<rank>:<pos>,<pos>,..."`.
pub fn decode_occurrence(token: &str) -> Result<Occurrence, CorpusError> {
    token.parse()
}

/// Derivations of a root inside one verse, plus the highlighted verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseDerivations {
    pub derivations: Vec<Derivation>,
    pub verse: VerseMatch,
}

/// Cut a tokenized verse into fragments, flagging the words at `positions`.
///
/// Runs of unmatched words become one fragment. Two adjacent matched words
/// are separated by a single-space fragment so they do not run together.
pub fn build_position_fragments(words: &[&str], positions: &[usize]) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut pending = String::new();
    let last = words.len().saturating_sub(1);

    for (i, word) in words.iter().enumerate() {
        if positions.contains(&(i + 1)) {
            if !pending.is_empty() {
                fragments.push(Fragment::plain(std::mem::take(&mut pending)));
            } else if !fragments.is_empty() {
                fragments.push(Fragment::plain(" "));
            }
            fragments.push(Fragment::matched(*word));
        } else {
            if pending.is_empty() && i != 0 {
                pending.push(' ');
            }
            pending.push_str(word);
            if i != last {
                pending.push(' ');
            }
        }
    }

    if !pending.is_empty() {
        fragments.push(Fragment::plain(pending));
    }

    fragments
}

/// Derivation records and the highlighted verse for the words at `positions`.
///
/// Location labels read `"<chapter_label>:<verse number>"`.
pub fn derive_in_verse(
    positions: &[usize],
    verse: &Verse,
    chapter_label: &str,
) -> Result<VerseDerivations, CorpusError> {
    let words = verse.words();
    let location_label = format!("{}:{}", chapter_label, verse.verse_num());

    let derivations = positions
        .iter()
        .map(|&position| {
            let word = position
                .checked_sub(1)
                .and_then(|index| words.get(index))
                .ok_or(CorpusError::WordNotFound {
                    key: verse.key,
                    position,
                })?;
            Ok(Derivation {
                word: word.to_string(),
                verse_key: verse.key,
                location_label: location_label.clone(),
                word_position: position,
            })
        })
        .collect::<Result<Vec<_>, CorpusError>>()?;

    let fragments = build_position_fragments(&words, positions);

    Ok(VerseDerivations {
        derivations,
        verse: VerseMatch::new(verse, fragments),
    })
}
