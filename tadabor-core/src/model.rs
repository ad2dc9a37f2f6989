//! Corpus records and search result types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use tadabor_text::Fragment;

use crate::occurrence::Occurrence;
use crate::CorpusError;

/// Number of chapters in a complete corpus.
pub const CHAPTER_COUNT: usize = 114;

/// Identifies a verse by chapter and verse number. Wire form: `"<chapter>-<verse>"`.
///
/// Ordering is numeric, chapter first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VerseKey {
    pub chapter: u32,
    pub verse: u32,
}

impl VerseKey {
    pub fn new(chapter: u32, verse: u32) -> Self {
        Self { chapter, verse }
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.chapter, self.verse)
    }
}

impl FromStr for VerseKey {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chapter, verse) =
            parse_pair(s).ok_or_else(|| CorpusError::MalformedKey(s.to_string()))?;
        Ok(Self { chapter, verse })
    }
}

impl Serialize for VerseKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VerseKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Addresses one letter unit inside a verse. Wire form: `"<word>-<letter>"`,
/// both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterKey {
    pub word: usize,
    pub letter: usize,
}

impl FromStr for LetterKey {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, letter) =
            parse_pair(s).ok_or_else(|| CorpusError::MalformedKey(s.to_string()))?;
        Ok(Self { word, letter })
    }
}

fn parse_pair<T: FromStr>(s: &str) -> Option<(T, T)> {
    let (left, right) = s.split_once('-')?;
    Some((left.trim().parse().ok()?, right.trim().parse().ok()?))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub transliteration: String,
}

/// A verse as it appears in the per-chapter verse document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub key: VerseKey,
    #[serde(rename = "versetext")]
    pub text: String,
}

/// One chapter's entry in the verse document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChapterRecord {
    pub verses: Vec<VerseRecord>,
}

/// A loaded verse. `rank` is its zero-based position across the whole corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub key: VerseKey,
    pub text: String,
    pub rank: usize,
}

impl Verse {
    pub fn chapter_id(&self) -> u32 {
        self.key.chapter
    }

    pub fn verse_num(&self) -> u32 {
        self.key.verse
    }

    /// Words as separated by single spaces; word positions count from 1 over this list.
    pub fn words(&self) -> Vec<&str> {
        self.text.split(' ').collect()
    }
}

/// A morphological root and every place a derived form of it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    pub id: u32,
    pub name: String,
    pub count: String,
    #[serde(rename = "occurences")]
    pub occurrences: Vec<Occurrence>,
}

/// A verse cut into highlighted fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseMatch {
    pub key: VerseKey,
    pub chapter_id: u32,
    pub verse_num: u32,
    pub fragments: Vec<Fragment>,
}

impl VerseMatch {
    pub fn new(verse: &Verse, fragments: Vec<Fragment>) -> Self {
        Self {
            key: verse.key,
            chapter_id: verse.chapter_id(),
            verse_num: verse.verse_num(),
            fragments,
        }
    }
}

/// One derived word of a root, for flat listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Derivation {
    pub word: String,
    pub verse_key: VerseKey,
    pub location_label: String,
    pub word_position: usize,
}
