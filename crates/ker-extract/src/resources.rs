// Static resources: IDF tables, word lists and model file locations.
//
// Everything here is loaded once before any text is processed and never
// mutated afterwards; the handle shares it between requests behind `Arc`.

use std::collections::HashMap as StdHashMap;
use std::io;
use std::path::{Path, PathBuf};

use hashbrown::{HashMap, HashSet};
use ker_core::enums::Language;
use serde::Deserialize;

/// Stopword list file name within a model directory.
pub const STOPWORDS_FILE: &str = "stopwords.txt";

/// Canonical (display-as-written) word list file name within a model directory.
pub const CANONICAL_FILE: &str = "protowords.txt";

/// Error type for resource loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// The IDF file is not valid JSON of the expected shape.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A tagger model line could not be understood.
    #[error("{}:{line}: {reason}", path.display())]
    Model {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The IDF table parsed but cannot be used for scoring.
    #[error("invalid IDF table {}: {reason}", path.display())]
    InvalidIdf { path: PathBuf, reason: String },
}

fn read_file(path: &Path) -> Result<String, ResourceError> {
    std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Model paths
// ---------------------------------------------------------------------------

/// Locations of every resource file, derived from one model directory.
///
/// Layout:
/// - `stopwords.txt`, `protowords.txt` -- shared word lists
/// - `<lang>.tagger` -- tagger model per language
/// - `<lang>_idf_table.json` -- IDF table per language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    pub dir: PathBuf,
    pub stopwords: PathBuf,
    pub canonical: PathBuf,
}

impl ModelPaths {
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            stopwords: dir.join(STOPWORDS_FILE),
            canonical: dir.join(CANONICAL_FILE),
            dir,
        }
    }

    /// Tagger model for `lang`.
    pub fn tagger(&self, lang: Language) -> PathBuf {
        self.dir.join(format!("{}.tagger", lang.code()))
    }

    /// IDF table for `lang`.
    pub fn idf(&self, lang: Language) -> PathBuf {
        self.dir.join(format!("{}_idf_table.json", lang.code()))
    }
}

// ---------------------------------------------------------------------------
// Word sets
// ---------------------------------------------------------------------------

/// A set of lowercase words loaded from a newline-delimited list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from list text: one word per line, trimmed and lowercased,
    /// blank lines ignored.
    pub fn from_lines(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect()
    }

    /// Load a word list file.
    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        Ok(Self::from_lines(&read_file(path)?))
    }

    /// Exact membership test; callers lowercase the probe.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }
}

/// The stopword and canonical-form lists shared by every language.
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    /// Lemmas never reported as keywords.
    pub stopwords: WordSet,
    /// Words displayed in their surface form instead of the lemma.
    pub canonical: WordSet,
}

impl WordLists {
    pub fn new(stopwords: WordSet, canonical: WordSet) -> Self {
        Self {
            stopwords,
            canonical,
        }
    }

    pub fn load(paths: &ModelPaths) -> Result<Self, ResourceError> {
        Ok(Self {
            stopwords: WordSet::load(&paths.stopwords)?,
            canonical: WordSet::load(&paths.canonical)?,
        })
    }
}

// ---------------------------------------------------------------------------
// IDF table
// ---------------------------------------------------------------------------

/// On-disk IDF layouts: a keyed object or a bare `[doc_count, table]` pair.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdfFile {
    Keyed {
        doc_count: f64,
        table: StdHashMap<String, u64>,
    },
    Pair(f64, StdHashMap<String, u64>),
}

/// Corpus document frequencies for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct IdfTable {
    doc_count: f64,
    table: HashMap<String, u64>,
}

impl IdfTable {
    /// Create a table from the corpus size and per-lemma document counts.
    pub fn new(doc_count: f64, table: impl IntoIterator<Item = (String, u64)>) -> Self {
        Self {
            doc_count,
            table: table.into_iter().collect(),
        }
    }

    /// Parse the JSON form. `path` is only used in errors.
    pub fn from_json_str(content: &str, path: &Path) -> Result<Self, ResourceError> {
        let file: IdfFile = serde_json::from_str(content).map_err(|source| ResourceError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let (doc_count, table) = match file {
            IdfFile::Keyed { doc_count, table } => (doc_count, table),
            IdfFile::Pair(doc_count, table) => (doc_count, table),
        };
        if !doc_count.is_finite() || doc_count < 1.0 {
            return Err(ResourceError::InvalidIdf {
                path: path.to_path_buf(),
                reason: format!("document count must be at least 1, got {doc_count}"),
            });
        }
        Ok(Self::new(doc_count, table))
    }

    /// Load an IDF table file.
    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        Self::from_json_str(&read_file(path)?, path)
    }

    /// Number of documents in the reference corpus.
    pub fn doc_count(&self) -> f64 {
        self.doc_count
    }

    /// Number of corpus documents containing `lemma`, if it was seen.
    pub fn document_frequency(&self, lemma: &str) -> Option<u64> {
        self.table.get(lemma).copied()
    }

    /// Inverse document frequency of `lemma`.
    ///
    /// A lemma missing from the table (or recorded with a zero count) is
    /// scored as if it occurred in exactly one document: `ln(doc_count)`.
    pub fn idf(&self, lemma: &str) -> f64 {
        match self.document_frequency(lemma) {
            Some(df) if df > 0 => (self.doc_count / df as f64).ln(),
            _ => self.doc_count.ln(),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
