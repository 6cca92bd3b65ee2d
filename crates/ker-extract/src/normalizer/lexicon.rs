// Lexicon-backed lemma normalizer.
//
// The model is a tab-separated full-form lexicon, one `form<TAB>lemma<TAB>tag`
// entry per line. Lookup tries the exact form first, then its lowercase, so
// sentence-initial capitals resolve to the common-noun entry while proper
// nouns listed with a capital keep their own lemma. When guessing is enabled,
// unknown alphabetic words are treated as nouns with the lowercased form as
// lemma; unknown numbers and symbols are never candidates.

use std::path::Path;

use hashbrown::HashMap;
use ker_core::enums::{PartOfSpeech, TokenType};
use ker_core::token::{Normalized, NormalizedToken};

use super::{LemmaNormalizer, raw_lemma};
use crate::resources::ResourceError;
use crate::tokenizer;

/// One lexicon entry: the dictionary lemma and its positional tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLemma {
    pub lemma: String,
    pub tag: String,
}

/// Normalizer driven by a full-form lexicon.
#[derive(Debug, Clone)]
pub struct LexiconNormalizer {
    entries: HashMap<String, TaggedLemma>,
    guess_unknown: bool,
}

impl LexiconNormalizer {
    /// Create an empty lexicon with guessing enabled.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            guess_unknown: true,
        }
    }

    /// Enable or disable the unknown-word guesser.
    pub fn with_guessing(mut self, guess_unknown: bool) -> Self {
        self.guess_unknown = guess_unknown;
        self
    }

    /// Add an entry. The first entry for a form wins, so lexicons list the
    /// preferred reading first.
    pub fn insert(
        &mut self,
        form: impl Into<String>,
        lemma: impl Into<String>,
        tag: impl Into<String>,
    ) {
        self.entries.entry(form.into()).or_insert_with(|| TaggedLemma {
            lemma: lemma.into(),
            tag: tag.into(),
        });
    }

    /// Parse a lexicon from its text form. `path` is only used in errors.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ResourceError> {
        let mut lexicon = Self::new();
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let (Some(form), Some(lemma), Some(tag)) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(ResourceError::Model {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    reason: "expected form<TAB>lemma<TAB>tag".to_string(),
                });
            };
            if form.is_empty() || lemma.is_empty() || tag.is_empty() {
                return Err(ResourceError::Model {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    reason: "empty field".to_string(),
                });
            }
            lexicon.insert(form, lemma, tag);
        }
        Ok(lexicon)
    }

    /// Load a lexicon model file.
    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        let content = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Number of distinct forms in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a word form and return its raw lemma and category.
    pub fn tag(&self, form: &str) -> Option<(String, PartOfSpeech)> {
        let entry = self
            .entries
            .get(form)
            .or_else(|| self.entries.get(form.to_lowercase().as_str()));
        if let Some(entry) = entry {
            return Some((
                raw_lemma(&entry.lemma).to_string(),
                PartOfSpeech::from_tag(&entry.tag),
            ));
        }
        if self.guess_unknown && form.chars().any(char::is_alphabetic) {
            return Some((form.to_lowercase(), PartOfSpeech::Noun));
        }
        None
    }
}

impl Default for LexiconNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LemmaNormalizer for LexiconNormalizer {
    fn normalize(&mut self, text: &str) -> Normalized {
        let mut result = Normalized::default();
        for sentence in tokenizer::sentences(text) {
            for token in sentence {
                if token.is_tagged() {
                    result.token_count += 1;
                }
                if token.token_type != TokenType::Word {
                    continue;
                }
                if let Some((lemma, pos)) = self.tag(&token.text) {
                    if pos.is_candidate() {
                        result.tokens.push(NormalizedToken::new(lemma, token.text));
                    }
                }
            }
        }
        result
    }
}
