// Frequency aggregation over normalized lines.

use hashbrown::HashMap;
use ker_core::keyword::WordStat;

use crate::normalizer::LemmaNormalizer;
use crate::resources::WordLists;

/// Per-lemma counts for one document, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct WordStats {
    entries: Vec<WordStat>,
    index: HashMap<String, usize>,
    total_word_count: u64,
    total_token_count: u64,
}

impl WordStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one `(lemma, surface)` occurrence.
    ///
    /// Returns `false` when the lemma is rejected: a stopword (compared
    /// lowercased) or a lemma containing a dot. A new lemma takes the surface
    /// form as display form if that form is canonical, otherwise the lemma;
    /// later occurrences never change it.
    pub fn add(&mut self, lemma: &str, surface: &str, lists: &WordLists) -> bool {
        if lists.stopwords.contains(&lemma.to_lowercase()) || lemma.contains('.') {
            return false;
        }
        let idx = match self.index.get(lemma) {
            Some(&idx) => idx,
            None => {
                let display = if lists.canonical.contains(&surface.to_lowercase()) {
                    surface
                } else {
                    lemma
                };
                self.entries.push(WordStat::new(lemma, display));
                self.index.insert(lemma.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        self.entries[idx].count += 1;
        self.total_word_count += 1;
        true
    }

    /// Record the normalizer's token count for one line.
    pub fn record_tokens(&mut self, token_count: usize) {
        self.total_token_count += token_count as u64;
    }

    pub fn get(&self, lemma: &str) -> Option<&WordStat> {
        self.index.get(lemma).map(|&idx| &self.entries[idx])
    }

    /// Entries in the order their lemma was first seen.
    pub fn iter(&self) -> impl Iterator<Item = &WordStat> {
        self.entries.iter()
    }

    /// Number of distinct lemmas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Accepted occurrences across the whole document; the tf denominator.
    pub fn total_word_count(&self) -> u64 {
        self.total_word_count
    }

    /// Sum of every token the normalizer tagged. Reported, not scored.
    pub fn total_token_count(&self) -> u64 {
        self.total_token_count
    }
}

/// Normalize each clean line and accumulate per-lemma statistics.
pub fn aggregate<I, N>(clean_lines: I, normalizer: &mut N, lists: &WordLists) -> WordStats
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    N: LemmaNormalizer + ?Sized,
{
    let mut stats = WordStats::new();
    for line in clean_lines {
        let normalized = normalizer.normalize(line.as_ref());
        stats.record_tokens(normalized.token_count);
        for token in &normalized.tokens {
            stats.add(&token.lemma, &token.surface, lists);
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::WordSet;
    use ker_core::token::{Normalized, NormalizedToken};

    /// Splits on whitespace; `lemma/surface` words give both parts, anything
    /// else uses the word for both. Every word counts as one token.
    struct Split;

    impl LemmaNormalizer for Split {
        fn normalize(&mut self, text: &str) -> Normalized {
            let tokens: Vec<NormalizedToken> = text
                .split_whitespace()
                .map(|w| match w.split_once('/') {
                    Some((lemma, surface)) => NormalizedToken::new(lemma, surface),
                    None => NormalizedToken::new(w, w),
                })
                .collect();
            let count = tokens.len() + 1;
            Normalized::new(tokens, count)
        }
    }

    fn lists() -> WordLists {
        WordLists::new(
            WordSet::from_lines("the\nand\nof"),
            WordSet::from_lines("nasa\nprague"),
        )
    }

    #[test]
    fn counts_occurrences_per_lemma() {
        let stats = aggregate(["search engine", "search"], &mut Split, &lists());
        assert_eq!(stats.len(), 2);
        assert_eq!(stats.get("search").unwrap().count, 2);
        assert_eq!(stats.get("engine").unwrap().count, 1);
        assert_eq!(stats.total_word_count(), 3);
    }

    #[test]
    fn stopwords_are_case_insensitive() {
        let stats = aggregate(["The and OF search"], &mut Split, &lists());
        assert_eq!(stats.len(), 1);
        assert_eq!(stats.total_word_count(), 1);
    }

    #[test]
    fn dotted_lemmas_are_rejected() {
        let mut stats = WordStats::new();
        assert!(!stats.add("e.g", "e.g", &lists()));
        assert!(!stats.add("U.S.", "U.S.", &lists()));
        assert!(stats.add("usa", "USA", &lists()));
        assert_eq!(stats.len(), 1);
    }

    #[test]
    fn canonical_surface_becomes_display_form() {
        let stats = aggregate(["nasa/NASA mission/missions"], &mut Split, &lists());
        assert_eq!(stats.get("nasa").unwrap().display_form, "NASA");
        assert_eq!(stats.get("mission").unwrap().display_form, "mission");
    }

    #[test]
    fn first_occurrence_fixes_display_form() {
        // First sighting is a non-canonical surface; the later canonical one
        // does not replace the lemma.
        let stats = aggregate(["prague/Prahy", "prague/Prague"], &mut Split, &lists());
        let ws = stats.get("prague").unwrap();
        assert_eq!(ws.display_form, "prague");
        assert_eq!(ws.count, 2);
    }

    #[test]
    fn lemmas_are_case_sensitive_keys() {
        let stats = aggregate(["Apple apple"], &mut Split, &lists());
        assert_eq!(stats.len(), 2);
    }

    #[test]
    fn iteration_follows_first_seen_order() {
        let stats = aggregate(["zeta alpha", "mid zeta"], &mut Split, &lists());
        let order: Vec<&str> = stats.iter().map(|w| w.lemma.as_str()).collect();
        assert_eq!(order, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn token_count_is_tracked_separately() {
        let stats = aggregate(["the search", "engine"], &mut Split, &lists());
        // Split reports words + 1 per line: 3 + 2
        assert_eq!(stats.total_token_count(), 5);
        assert_eq!(stats.total_word_count(), 2);
    }

    #[test]
    fn empty_input_gives_empty_stats() {
        let stats = aggregate(Vec::<String>::new(), &mut Split, &lists());
        assert!(stats.is_empty());
        assert_eq!(stats.total_word_count(), 0);
    }
}
