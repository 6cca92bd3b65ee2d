// KeywordExtractor: top-level integration point for keyword extraction.
//
// Owns one bundle per loaded language (a normalizer plus its IDF table) and
// the word lists shared by every language, and exposes the pipeline as a
// request-level API.
//
// Design notes:
// - Normalizers are stateful, so each sits behind its own Mutex. Requests for
//   one language are serialized; different languages run in parallel.
// - IDF tables and word lists are immutable after load and shared via Arc.
// - A language whose files fail to load is recorded and left out; requests
//   for it are rejected as unsupported. Missing word lists abort loading since
//   every language needs them.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use ker_core::enums::{Language, UnknownLanguage};
use ker_core::keyword::ScoredKeyword;
use tracing::{info, warn};

use crate::cleaner::split_lines;
use crate::normalizer::{LemmaNormalizer, LexiconNormalizer};
use crate::pipeline::get_keywords;
use crate::rank::RankOptions;
use crate::resources::{IdfTable, ModelPaths, ResourceError, WordLists};

/// Error type for extractor construction and requests.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A word list could not be loaded.
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(#[from] ResourceError),

    /// The language is unknown or its bundle did not load.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The request body is not UTF-8 text.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] std::str::Utf8Error),

    /// No language bundle could be loaded.
    #[error("no language could be loaded")]
    NoLanguages,
}

impl From<UnknownLanguage> for ExtractError {
    fn from(err: UnknownLanguage) -> Self {
        ExtractError::UnsupportedLanguage(err.0)
    }
}

/// Settings for [`KeywordExtractor::load`].
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Where the resource files live.
    pub models: ModelPaths,
    /// Languages to load.
    pub languages: Vec<Language>,
    /// Default ranking limits for requests.
    pub rank: RankOptions,
    /// Whether the lexicon normalizer guesses unknown words as nouns.
    pub guess_unknown: bool,
}

impl ExtractorConfig {
    /// Load every supported language from `model_dir` with default limits.
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            models: ModelPaths::from_dir(model_dir),
            languages: Language::ALL.to_vec(),
            rank: RankOptions::default(),
            guess_unknown: true,
        }
    }

    pub fn with_languages(mut self, languages: &[Language]) -> Self {
        self.languages = languages.to_vec();
        self
    }

    pub fn with_rank_options(mut self, rank: RankOptions) -> Self {
        self.rank = rank;
        self
    }

    pub fn with_guessing(mut self, guess_unknown: bool) -> Self {
        self.guess_unknown = guess_unknown;
        self
    }
}

/// A loaded language: its normalizer and IDF table.
struct LanguageBundle {
    normalizer: Mutex<Box<dyn LemmaNormalizer + Send>>,
    idf: Arc<IdfTable>,
}

/// Thread-safe keyword extractor over a set of loaded languages.
pub struct KeywordExtractor {
    lists: Arc<WordLists>,
    bundles: BTreeMap<Language, LanguageBundle>,
    failures: Vec<(Language, ResourceError)>,
    options: RankOptions,
}

impl KeywordExtractor {
    /// Create an extractor with no languages. Add them with
    /// [`add_language`](Self::add_language).
    pub fn new(lists: Arc<WordLists>, options: RankOptions) -> Self {
        Self {
            lists,
            bundles: BTreeMap::new(),
            failures: Vec::new(),
            options,
        }
    }

    /// Load word lists and every configured language from disk.
    ///
    /// Fails if the word lists cannot be read or if no language loads.
    /// Individual language failures are kept in [`failures`](Self::failures).
    pub fn load(config: &ExtractorConfig) -> Result<Self, ExtractError> {
        let lists = WordLists::load(&config.models)?;
        info!(
            stopwords = lists.stopwords.len(),
            canonical = lists.canonical.len(),
            "loaded word lists"
        );

        let mut extractor = Self::new(Arc::new(lists), config.rank);
        for &lang in &config.languages {
            match load_bundle(&config.models, lang, config.guess_unknown) {
                Ok((normalizer, idf)) => {
                    info!(
                        language = %lang,
                        forms = normalizer.len(),
                        idf_entries = idf.len(),
                        documents = idf.doc_count(),
                        "loaded language bundle"
                    );
                    extractor.add_language(lang, normalizer, Arc::new(idf));
                }
                Err(err) => {
                    warn!(language = %lang, error = %err, "language unavailable");
                    extractor.failures.push((lang, err));
                }
            }
        }

        if extractor.bundles.is_empty() {
            return Err(ExtractError::NoLanguages);
        }
        Ok(extractor)
    }

    /// Register a language with its normalizer and IDF table, replacing any
    /// previous bundle for it.
    pub fn add_language<N>(&mut self, lang: Language, normalizer: N, idf: Arc<IdfTable>)
    where
        N: LemmaNormalizer + Send + 'static,
    {
        self.failures.retain(|(failed, _)| *failed != lang);
        self.bundles.insert(
            lang,
            LanguageBundle {
                normalizer: Mutex::new(Box::new(normalizer)),
                idf,
            },
        );
    }

    /// Languages ready to serve requests, in a stable order.
    pub fn languages(&self) -> Vec<Language> {
        self.bundles.keys().copied().collect()
    }

    /// Whether requests for `lang` can be served.
    pub fn is_available(&self, lang: Language) -> bool {
        self.bundles.contains_key(&lang)
    }

    /// Languages that failed to load, with the reason.
    pub fn failures(&self) -> &[(Language, ResourceError)] {
        &self.failures
    }

    /// Extract keywords from `text` with the default limits.
    pub fn extract(&self, lang: Language, text: &str) -> Result<Vec<ScoredKeyword>, ExtractError> {
        self.extract_with(lang, text, &self.options)
    }

    /// Extract keywords from `text` with explicit limits.
    pub fn extract_with(
        &self,
        lang: Language,
        text: &str,
        options: &RankOptions,
    ) -> Result<Vec<ScoredKeyword>, ExtractError> {
        self.extract_lines(lang, split_lines(text), options)
    }

    /// Extract keywords from already split lines.
    pub fn extract_lines<I>(
        &self,
        lang: Language,
        lines: I,
        options: &RankOptions,
    ) -> Result<Vec<ScoredKeyword>, ExtractError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let bundle = self
            .bundles
            .get(&lang)
            .ok_or_else(|| ExtractError::UnsupportedLanguage(lang.code().to_string()))?;
        let mut normalizer = bundle
            .normalizer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(get_keywords(
            lines,
            &mut **normalizer,
            &self.lists,
            &bundle.idf,
            options,
        ))
    }

    /// Extract keywords from a raw request body. Rejects non-UTF-8 input
    /// before any processing.
    pub fn extract_bytes(
        &self,
        lang: Language,
        body: &[u8],
    ) -> Result<Vec<ScoredKeyword>, ExtractError> {
        let text = std::str::from_utf8(body)?;
        self.extract(lang, text)
    }

    /// Extract keywords for a language given by its code (`"cs"`, `"en"`).
    pub fn extract_code(&self, code: &str, text: &str) -> Result<Vec<ScoredKeyword>, ExtractError> {
        let lang: Language = code.parse()?;
        self.extract(lang, text)
    }
}

fn load_bundle(
    models: &ModelPaths,
    lang: Language,
    guess_unknown: bool,
) -> Result<(LexiconNormalizer, IdfTable), ResourceError> {
    let normalizer = LexiconNormalizer::load(&models.tagger(lang))?.with_guessing(guess_unknown);
    let idf = IdfTable::load(&models.idf(lang))?;
    Ok((normalizer, idf))
}
