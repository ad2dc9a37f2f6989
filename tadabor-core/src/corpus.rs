use std::fmt;
use std::ops::Range;

use tadabor_text::{remove_diacritics, segment};
use tracing::{debug, info};

use crate::model::{Chapter, ChapterRecord, LetterKey, Root, Verse, VerseKey};
use crate::CorpusError;

/// The three independently loaded pieces of a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusPart {
    Chapters,
    Verses,
    Roots,
}

impl fmt::Display for CorpusPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CorpusPart::Chapters => "chapters",
            CorpusPart::Verses => "verses",
            CorpusPart::Roots => "roots",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
struct VerseTable {
    /// All verses in rank order.
    verses: Vec<Verse>,
    /// Range of `verses` held by each chapter, indexed by chapter id - 1.
    chapters: Vec<Range<usize>>,
}

/// Handle over the loaded scripture corpus.
///
/// Built once through the `set_*` methods (or the loaders), then read-only:
/// every lookup and search takes `&self`.
#[derive(Debug, Default)]
pub struct Corpus {
    chapters: Option<Vec<Chapter>>,
    verses: Option<VerseTable>,
    roots: Option<Vec<Root>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        chapters: Vec<Chapter>,
        verses: Vec<ChapterRecord>,
        roots: Vec<Root>,
    ) -> Self {
        let mut corpus = Self::new();
        corpus.set_chapters(chapters);
        corpus.set_verses(verses);
        corpus.set_roots(roots);
        corpus
    }

    pub fn set_chapters(&mut self, chapters: Vec<Chapter>) {
        info!(count = chapters.len(), "chapters loaded");
        self.chapters = Some(chapters);
    }

    /// Load per-chapter verse lists, assigning global ranks in order.
    ///
    /// Verses are only loaded once; later calls leave the table untouched.
    pub fn set_verses(&mut self, chapters: Vec<ChapterRecord>) {
        if self.verses.is_some() {
            debug!("verses already loaded, ignoring new verse data");
            return;
        }

        let mut verses = Vec::new();
        let mut ranges = Vec::with_capacity(chapters.len());
        for chapter in chapters {
            let start = verses.len();
            for record in chapter.verses {
                let rank = verses.len();
                verses.push(Verse {
                    key: record.key,
                    text: record.text,
                    rank,
                });
            }
            ranges.push(start..verses.len());
        }

        info!(
            chapters = ranges.len(),
            verses = verses.len(),
            "verses loaded"
        );
        self.verses = Some(VerseTable {
            verses,
            chapters: ranges,
        });
    }

    pub fn set_roots(&mut self, roots: Vec<Root>) {
        info!(count = roots.len(), "roots loaded");
        self.roots = Some(roots);
    }

    pub fn is_chapters_loaded(&self) -> bool {
        self.chapters.is_some()
    }

    pub fn is_verses_loaded(&self) -> bool {
        self.verses.is_some()
    }

    pub fn is_roots_loaded(&self) -> bool {
        self.roots.is_some()
    }

    pub fn chapters(&self) -> Result<&[Chapter], CorpusError> {
        self.chapters
            .as_deref()
            .ok_or(CorpusError::NotLoaded(CorpusPart::Chapters))
    }

    pub fn chapter(&self, id: u32) -> Result<&Chapter, CorpusError> {
        let chapters = self.chapters()?;
        chapter_index(id)
            .and_then(|index| chapters.get(index))
            .ok_or(CorpusError::ChapterNotFound(id))
    }

    pub fn chapter_name(&self, id: u32) -> Result<&str, CorpusError> {
        Ok(&self.chapter(id)?.name)
    }

    fn verse_table(&self) -> Result<&VerseTable, CorpusError> {
        self.verses
            .as_ref()
            .ok_or(CorpusError::NotLoaded(CorpusPart::Verses))
    }

    /// Every verse in rank order.
    pub fn verses(&self) -> Result<&[Verse], CorpusError> {
        Ok(&self.verse_table()?.verses)
    }

    pub fn chapter_verses(&self, id: u32) -> Result<&[Verse], CorpusError> {
        let table = self.verse_table()?;
        let range = chapter_index(id)
            .and_then(|index| table.chapters.get(index))
            .ok_or(CorpusError::ChapterNotFound(id))?;
        Ok(&table.verses[range.clone()])
    }

    pub fn verse(&self, chapter: u32, verse: u32) -> Result<&Verse, CorpusError> {
        let key = VerseKey::new(chapter, verse);
        let verses = self.chapter_verses(chapter)?;
        (verse as usize)
            .checked_sub(1)
            .and_then(|index| verses.get(index))
            .ok_or(CorpusError::VerseNotFound(key))
    }

    pub fn verse_at(&self, key: VerseKey) -> Result<&Verse, CorpusError> {
        self.verse(key.chapter, key.verse)
    }

    /// Look up a verse by its `"<chapter>-<verse>"` key.
    pub fn verse_by_key(&self, key: &str) -> Result<&Verse, CorpusError> {
        self.verse_at(key.parse()?)
    }

    pub fn verse_text(&self, key: &str) -> Result<&str, CorpusError> {
        Ok(&self.verse_by_key(key)?.text)
    }

    pub fn verse_by_rank(&self, rank: usize) -> Result<&Verse, CorpusError> {
        self.verses()?
            .get(rank)
            .ok_or(CorpusError::RankNotFound(rank))
    }

    /// `"<chapter name>:<verse>"` for a verse key.
    pub fn location_label(&self, key: &str) -> Result<String, CorpusError> {
        let key: VerseKey = key.parse()?;
        Ok(format!("{}:{}", self.chapter_name(key.chapter)?, key.verse))
    }

    pub fn roots(&self) -> Result<&[Root], CorpusError> {
        self.roots
            .as_deref()
            .ok_or(CorpusError::NotLoaded(CorpusPart::Roots))
    }

    pub fn root_by_id(&self, id: u32) -> Result<&Root, CorpusError> {
        self.roots()?
            .iter()
            .find(|root| root.id == id)
            .ok_or(CorpusError::RootIdNotFound(id))
    }

    pub fn root_name_by_id(&self, id: u32) -> Result<&str, CorpusError> {
        Ok(&self.root_by_id(id)?.name)
    }

    pub fn root_by_name(&self, name: &str) -> Result<&Root, CorpusError> {
        self.roots()?
            .iter()
            .find(|root| root.name == name)
            .ok_or_else(|| CorpusError::RootNotFound(name.to_string()))
    }

    /// The bare letter addressed by a `"<word>-<letter>"` key, diacritics removed.
    pub fn letter_by_key(&self, verse_key: &str, letter_key: &str) -> Result<String, CorpusError> {
        let verse = self.verse_by_key(verse_key)?;
        let letter_key: LetterKey = letter_key.parse()?;
        let not_found = || CorpusError::LetterNotFound {
            key: verse.key,
            word: letter_key.word,
            letter: letter_key.letter,
        };

        let word = verse
            .words()
            .get(letter_key.word)
            .copied()
            .ok_or_else(not_found)?;
        let unit = segment(word)
            .into_iter()
            .nth(letter_key.letter)
            .ok_or_else(not_found)?;

        Ok(remove_diacritics(&unit))
    }
}

fn chapter_index(id: u32) -> Option<usize> {
    (id as usize).checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VerseRecord;

    fn record(key: &str, text: &str) -> VerseRecord {
        VerseRecord {
            key: key.parse().unwrap(),
            text: text.to_string(),
        }
    }

    fn sample_corpus() -> Corpus {
        let chapters = vec![
            Chapter {
                id: 1,
                name: "الفاتحة".to_string(),
                transliteration: "Al-Fatiha".to_string(),
            },
            Chapter {
                id: 2,
                name: "البقرة".to_string(),
                transliteration: "Al-Baqara".to_string(),
            },
        ];
        let verses = vec![
            ChapterRecord {
                verses: vec![
                    record("1-1", "بِسْمِ اللَّهِ الرَّحْمَـٰنِ الرَّحِيمِ"),
                    record("1-2", "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ"),
                ],
            },
            ChapterRecord {
                verses: vec![record("2-1", "الم")],
            },
        ];
        Corpus::from_parts(chapters, verses, Vec::new())
    }

    #[test]
    fn accessors_fail_before_loading() {
        let corpus = Corpus::new();
        assert!(matches!(
            corpus.chapter_name(1),
            Err(CorpusError::NotLoaded(CorpusPart::Chapters))
        ));
        assert!(matches!(
            corpus.verse_by_rank(0),
            Err(CorpusError::NotLoaded(CorpusPart::Verses))
        ));
        assert!(matches!(
            corpus.root_by_id(1),
            Err(CorpusError::NotLoaded(CorpusPart::Roots))
        ));
        assert!(!corpus.is_verses_loaded());
    }

    #[test]
    fn assigns_dense_ranks_across_chapters() {
        let corpus = sample_corpus();
        let ranks: Vec<usize> = corpus.verses().unwrap().iter().map(|v| v.rank).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
        assert_eq!(corpus.verse_by_rank(2).unwrap().key, VerseKey::new(2, 1));
        assert_eq!(corpus.chapter_verses(1).unwrap().len(), 2);
    }

    #[test]
    fn second_verse_load_is_ignored() {
        let mut corpus = sample_corpus();
        corpus.set_verses(vec![ChapterRecord::default()]);
        assert_eq!(corpus.verses().unwrap().len(), 3);
    }

    #[test]
    fn looks_up_verses_by_key() {
        let corpus = sample_corpus();
        assert_eq!(
            corpus.verse_text("1-1").unwrap(),
            "بِسْمِ اللَّهِ الرَّحْمَـٰنِ الرَّحِيمِ"
        );
        assert_eq!(corpus.verse_by_key("1-2").unwrap().rank, 1);
        assert!(matches!(
            corpus.verse_by_key("1-9"),
            Err(CorpusError::VerseNotFound(_))
        ));
        assert!(matches!(
            corpus.verse_by_key("1-0"),
            Err(CorpusError::VerseNotFound(_))
        ));
        assert!(matches!(
            corpus.verse_by_key("1"),
            Err(CorpusError::MalformedKey(_))
        ));
        assert!(matches!(
            corpus.verse_by_rank(3),
            Err(CorpusError::RankNotFound(3))
        ));
    }

    #[test]
    fn rejects_unknown_chapters() {
        let corpus = sample_corpus();
        assert_eq!(corpus.chapter_name(2).unwrap(), "البقرة");
        assert!(matches!(
            corpus.chapter_name(0),
            Err(CorpusError::ChapterNotFound(0))
        ));
        assert!(matches!(
            corpus.chapter_verses(115),
            Err(CorpusError::ChapterNotFound(115))
        ));
    }

    #[test]
    fn builds_location_labels() {
        let corpus = sample_corpus();
        assert_eq!(corpus.location_label("2-1").unwrap(), "البقرة:1");
    }

    #[test]
    fn reads_letters_without_diacritics() {
        let corpus = sample_corpus();
        assert_eq!(corpus.letter_by_key("1-1", "0-0").unwrap(), "ب");
        assert_eq!(corpus.letter_by_key("1-1", "1-2").unwrap(), "ل");
        assert!(matches!(
            corpus.letter_by_key("1-1", "9-0"),
            Err(CorpusError::LetterNotFound { word: 9, .. })
        ));
        assert!(matches!(
            corpus.letter_by_key("1-1", "0"),
            Err(CorpusError::MalformedKey(_))
        ));
    }
}
