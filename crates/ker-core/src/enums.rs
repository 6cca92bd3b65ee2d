// Shared enums: Language, PartOfSpeech, TokenType

use std::fmt;
use std::str::FromStr;

/// Languages with a keyword extraction bundle.
///
/// The set is closed: a request for anything else is rejected before the
/// pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    /// Czech (`cs`).
    Czech,
    /// English (`en`).
    English,
}

impl Language {
    /// Every supported language, in a stable order.
    pub const ALL: [Language; 2] = [Language::Czech, Language::English];

    /// ISO 639-1 code used in requests and resource file names.
    pub fn code(self) -> &'static str {
        match self {
            Language::Czech => "cs",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing a language code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language code: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cs" => Ok(Language::Czech),
            "en" => Ok(Language::English),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Coarse part-of-speech category derived from a tagger tag.
///
/// Only nouns and adjectives are keyword candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Adjective,
    Other,
}

impl PartOfSpeech {
    /// Classify a positional tag by its first character (`N...` noun,
    /// `A...` adjective). With Penn-style English tags only the `NN*`
    /// family matches; `JJ` adjectives fall into `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.chars().next() {
            Some('N') => PartOfSpeech::Noun,
            Some('A') => PartOfSpeech::Adjective,
            _ => PartOfSpeech::Other,
        }
    }

    /// Whether tokens of this category are keyword candidates.
    pub fn is_candidate(self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::Adjective)
    }
}

/// Token types produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// End of text.
    None,
    /// Word or number.
    Word,
    /// Punctuation character (or an ellipsis).
    Punctuation,
    /// Run of whitespace.
    Whitespace,
    /// Symbol outside the other classes.
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn language_parse_is_case_insensitive() {
        assert_eq!("CS".parse::<Language>(), Ok(Language::Czech));
        assert_eq!(" en ".parse::<Language>(), Ok(Language::English));
    }

    #[test]
    fn language_parse_rejects_unknown() {
        let err = "de".parse::<Language>().unwrap_err();
        assert_eq!(err, UnknownLanguage("de".to_string()));
        assert_eq!(err.to_string(), "unknown language code: de");
    }

    #[test]
    fn language_display() {
        assert_eq!(Language::Czech.to_string(), "cs");
        assert_eq!(format!("{}", Language::English), "en");
    }

    #[test]
    fn pos_from_tag() {
        assert_eq!(PartOfSpeech::from_tag("NNFS1-----A----"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::from_tag("NNS"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::from_tag("AAFS1----1A----"), PartOfSpeech::Adjective);
        assert_eq!(PartOfSpeech::from_tag("VB"), PartOfSpeech::Other);
        assert_eq!(PartOfSpeech::from_tag(""), PartOfSpeech::Other);
    }

    #[test]
    fn pos_candidates() {
        assert!(PartOfSpeech::Noun.is_candidate());
        assert!(PartOfSpeech::Adjective.is_candidate());
        assert!(!PartOfSpeech::Other.is_candidate());
    }
}
