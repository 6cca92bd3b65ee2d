//! Shared types for KER keyword extraction.
//!
//! - [`enums`] -- Supported languages and part-of-speech categories
//! - [`character`] -- Character classification used by the tokenizer
//! - [`token`] -- Normalizer output (lemma/surface pairs)
//! - [`keyword`] -- Per-lemma statistics and scored keywords

pub mod character;
pub mod enums;
pub mod keyword;
pub mod token;
