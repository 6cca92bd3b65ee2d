// Lemma normalizer boundary
//
// The keyword pipeline never tags text itself. It asks a normalizer for the
// nouns and adjectives of a line, reduced to raw lemmas, together with the
// number of tokens the tagger looked at.

mod lexicon;

pub use lexicon::{LexiconNormalizer, TaggedLemma};

use ker_core::token::Normalized;

/// A morphological backend for one language.
///
/// Implementations may keep tokenizer or tagger state between calls, so a
/// single instance must not be used from two threads at once; `&mut self`
/// enforces that at compile time.
pub trait LemmaNormalizer {
    /// Tag `text` and return its nouns and adjectives as
    /// `(raw lemma, surface form)` pairs in order of appearance.
    ///
    /// `token_count` in the result counts every token the tagger saw.
    fn normalize(&mut self, text: &str) -> Normalized;
}

impl<N: LemmaNormalizer + ?Sized> LemmaNormalizer for Box<N> {
    fn normalize(&mut self, text: &str) -> Normalized {
        (**self).normalize(text)
    }
}

/// Strip disambiguation markers from a dictionary lemma.
///
/// Everything from the first `_` or `` ` `` is dropped (comments and
/// derivation links), then a trailing `-<digits>` sense number:
/// `pes_^(zvíře)` becomes `pes`, `být-1` becomes `být`.
pub fn raw_lemma(lemma: &str) -> &str {
    let end = lemma.find(['_', '`']).unwrap_or(lemma.len());
    let lemma = &lemma[..end];
    match lemma.rfind('-') {
        Some(dash)
            if dash > 0
                && dash + 1 < lemma.len()
                && lemma[dash + 1..].bytes().all(|b| b.is_ascii_digit()) =>
        {
            &lemma[..dash]
        }
        _ => lemma,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lemma_is_unchanged() {
        assert_eq!(raw_lemma("search"), "search");
        assert_eq!(raw_lemma("state-of-the-art"), "state-of-the-art");
    }

    #[test]
    fn sense_number_is_stripped() {
        assert_eq!(raw_lemma("být-1"), "být");
        assert_eq!(raw_lemma("stát-2_^(zem\u{011B})"), "stát");
    }

    #[test]
    fn comments_are_stripped() {
        assert_eq!(raw_lemma("pes_^(zv\u{00ED}\u{0159}e)"), "pes");
        assert_eq!(raw_lemma("Praha_;G"), "Praha");
        assert_eq!(raw_lemma("rychlý`rychle"), "rychlý");
    }

    #[test]
    fn lone_or_trailing_dash_is_kept() {
        assert_eq!(raw_lemma("-"), "-");
        assert_eq!(raw_lemma("x-"), "x-");
        assert_eq!(raw_lemma("-1"), "-1");
    }

    #[test]
    fn boxed_normalizer_delegates() {
        struct Count;
        impl LemmaNormalizer for Count {
            fn normalize(&mut self, text: &str) -> Normalized {
                Normalized::new(Vec::new(), text.split_whitespace().count())
            }
        }
        let mut boxed: Box<dyn LemmaNormalizer> = Box::new(Count);
        assert_eq!(boxed.normalize("a b c").token_count, 3);
    }
}
