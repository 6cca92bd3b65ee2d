//! TF-IDF keyword extraction over lemmatized text.
//!
//! The pipeline runs clean -> normalize -> aggregate -> rank:
//!
//! - [`cleaner`] -- Strip enumeration markers, annotations and dot-leaders
//! - [`tokenizer`] -- Sentence and token boundaries
//! - [`normalizer`] -- The lemma normalizer boundary and a lexicon backend
//! - [`aggregate`] -- Per-lemma counting with stopword filtering
//! - [`rank`] -- TF-IDF scoring, ordering and truncation
//! - [`resources`] -- IDF tables, word lists and model paths
//! - [`pipeline`] -- The whole pipeline as one function
//! - [`handle`] -- Per-language bundles behind a thread-safe handle

pub mod aggregate;
pub mod cleaner;
pub mod handle;
pub mod normalizer;
pub mod pipeline;
pub mod rank;
pub mod resources;
pub mod tokenizer;

pub use handle::{ExtractError, ExtractorConfig, KeywordExtractor};
pub use pipeline::get_keywords;
pub use rank::RankOptions;
