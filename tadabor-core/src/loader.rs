//! Loading the corpus from its JSON documents.
//!
//! - chapters: `[{"id", "name", "transliteration"}]`
//! - verses: `[{"verses": [{"key", "versetext", ...}]}]`, one entry per chapter
//! - roots: `[{"id", "name", "count", "occurences": ["<rank>:<pos>,..."]}]`

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::CorpusSource;
use crate::corpus::Corpus;
use crate::model::{Chapter, ChapterRecord, Root};
use crate::CorpusError;

impl Corpus {
    /// Build a corpus from the text of the three documents.
    pub fn from_json_strs(chapters: &str, verses: &str, roots: &str) -> Result<Self, CorpusError> {
        let chapters: Vec<Chapter> = serde_json::from_str(chapters)?;
        let verses: Vec<ChapterRecord> = serde_json::from_str(verses)?;
        let roots: Vec<Root> = serde_json::from_str(roots)?;
        Ok(Self::from_parts(chapters, verses, roots))
    }

    /// Read and parse the three documents named by `source`.
    pub fn load(source: &CorpusSource) -> Result<Self, CorpusError> {
        info!(
            chapters = %source.chapters.display(),
            verses = %source.verses.display(),
            roots = %source.roots.display(),
            "loading corpus"
        );
        let chapters = read(&source.chapters)?;
        let verses = read(&source.verses)?;
        let roots = read(&source.roots)?;
        Self::from_json_strs(&chapters, &verses, &roots)
    }

    /// Load the default file names from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, CorpusError> {
        Self::load(&CorpusSource::in_dir(dir))
    }
}

/// Read a document, naming its path on failure.
pub(crate) fn read(path: &Path) -> Result<String, CorpusError> {
    fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })
}
