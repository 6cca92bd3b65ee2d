// Per-lemma statistics and ranked keywords

use serde::ser::{Serialize, SerializeTuple, Serializer};

/// Display forms of this many characters or more are never returned.
pub const MAX_DISPLAY_CHARS: usize = 20;

/// Occurrence counter for one lemma within a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStat {
    /// The lemma this entry is keyed by (case-sensitive).
    pub lemma: String,

    /// Number of accepted occurrences.
    pub count: u64,

    /// Form shown to the user. Fixed at the first occurrence.
    pub display_form: String,
}

impl WordStat {
    /// Create an entry with a zero count.
    pub fn new(lemma: impl Into<String>, display_form: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            count: 0,
            display_form: display_form.into(),
        }
    }
}

/// A keyword with its TF-IDF score.
///
/// Serializes as a two-element array `["form", score]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredKeyword {
    pub display_form: String,
    pub score: f64,
}

impl ScoredKeyword {
    pub fn new(display_form: impl Into<String>, score: f64) -> Self {
        Self {
            display_form: display_form.into(),
            score,
        }
    }

    /// Whether the display form is short enough to be returned.
    pub fn fits_display(&self) -> bool {
        fits_display(&self.display_form)
    }
}

/// Whether `form` has fewer than [`MAX_DISPLAY_CHARS`] characters.
pub fn fits_display(form: &str) -> bool {
    form.chars().count() < MAX_DISPLAY_CHARS
}

impl Serialize for ScoredKeyword {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.display_form)?;
        tup.serialize_element(&self.score)?;
        tup.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_stat_starts_at_zero() {
        let ws = WordStat::new("praha", "Praha");
        assert_eq!(ws.count, 0);
        assert_eq!(ws.lemma, "praha");
        assert_eq!(ws.display_form, "Praha");
    }

    #[test]
    fn display_limit_counts_characters() {
        assert!(fits_display("a".repeat(19).as_str()));
        assert!(!fits_display("a".repeat(20).as_str()));
        // 19 two-byte characters is still 19 characters
        assert!(fits_display("\u{0159}".repeat(19).as_str()));
    }

    #[test]
    fn scored_keyword_serializes_as_pair() {
        let kw = ScoredKeyword::new("search", 0.5);
        let json = serde_json::to_string(&kw).unwrap();
        assert_eq!(json, r#"["search",0.5]"#);
    }

    #[test]
    fn scored_keyword_fits_display() {
        assert!(ScoredKeyword::new("short", 1.0).fits_display());
        assert!(!ScoredKeyword::new("x".repeat(25), 1.0).fits_display());
    }
}
