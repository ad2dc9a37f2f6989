use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::loader::read;
use crate::model::CHAPTER_COUNT;
use crate::CorpusError;

/// Options for filtering the root catalog by name. Every switch defaults to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RootSearchOptions {
    /// Fold alif and hamza forms in the query
    pub normalize_token: bool,
    /// Fold alif and hamza forms in root names
    pub normalize_root: bool,
    /// Also match roots containing every query letter, in any order
    pub search_inclusive: bool,
}

/// Which chapters a search covers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChapterScope {
    #[default]
    All,
    Chapters(Vec<u32>),
}

impl ChapterScope {
    pub fn includes(&self, chapter: u32) -> bool {
        match self {
            ChapterScope::All => true,
            ChapterScope::Chapters(ids) => ids.contains(&chapter),
        }
    }

    /// True for `All` and for an explicit list naming every chapter.
    pub fn covers_all(&self) -> bool {
        match self {
            ChapterScope::All => true,
            ChapterScope::Chapters(ids) => ids.len() == CHAPTER_COUNT,
        }
    }
}

/// Locations of the three JSON documents a corpus is loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSource {
    pub chapters: PathBuf,
    pub verses: PathBuf,
    pub roots: PathBuf,
}

impl Default for CorpusSource {
    fn default() -> Self {
        Self {
            chapters: PathBuf::from("chapters.json"),
            verses: PathBuf::from("quran.json"),
            roots: PathBuf::from("roots.json"),
        }
    }
}

impl CorpusSource {
    /// The default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let defaults = Self::default();
        Self {
            chapters: dir.join(defaults.chapters),
            verses: dir.join(defaults.verses),
            roots: dir.join(defaults.roots),
        }
    }

    /// Read a JSON source description. Relative paths resolve against the
    /// directory holding the description.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let content = read(path)?;
        let source: Self = serde_json::from_str(&content)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(Self {
            chapters: base.join(source.chapters),
            verses: base.join(source.verses),
            roots: base.join(source.roots),
        })
    }
}
