// TF-IDF ranking of aggregated lemmas.

use ker_core::keyword::ScoredKeyword;

use crate::aggregate::WordStats;
use crate::resources::IdfTable;

/// Default number of keywords returned per document.
pub const DEFAULT_MAX_WORDS: usize = 15;

/// Ranking limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOptions {
    /// Minimum score a keyword needs. `None` disables the filter.
    pub threshold: Option<f64>,
    /// Maximum number of keywords returned.
    pub max_words: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            threshold: None,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

impl RankOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }
}

/// Term frequency component: `ln(1 + count / total)`.
pub fn term_frequency(count: u64, total_word_count: u64) -> f64 {
    (1.0 + count as f64 / total_word_count as f64).ln()
}

/// Score every lemma and return the best keywords.
///
/// Scores are `tf * idf`. Entries are ordered by descending score with ties
/// left in first-seen order, then display forms of 20 or more characters and
/// scores under the threshold are dropped, then the list is cut to
/// `max_words`.
pub fn rank(stats: &WordStats, idf: &IdfTable, options: &RankOptions) -> Vec<ScoredKeyword> {
    let total = stats.total_word_count();
    if total == 0 {
        return Vec::new();
    }

    let mut scored: Vec<ScoredKeyword> = stats
        .iter()
        .map(|ws| {
            let score = term_frequency(ws.count, total) * idf.idf(&ws.lemma);
            ScoredKeyword::new(ws.display_form.clone(), score)
        })
        .collect();

    // sort_by is stable, so equal scores keep insertion order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    scored
        .into_iter()
        .filter(ScoredKeyword::fits_display)
        .filter(|kw| options.threshold.is_none_or(|t| kw.score >= t))
        .take(options.max_words)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{WordLists, WordSet};

    fn stats_from(words: &[(&str, &str)]) -> WordStats {
        let lists = WordLists::default();
        let mut stats = WordStats::new();
        for (lemma, surface) in words {
            stats.add(lemma, surface, &lists);
        }
        stats
    }

    fn idf() -> IdfTable {
        IdfTable::new(
            100.0,
            [
                ("search".to_string(), 5),
                ("machine".to_string(), 50),
                ("learning".to_string(), 20),
            ],
        )
    }

    #[test]
    fn score_matches_formula() {
        let stats = stats_from(&[
            ("machine", "machine"),
            ("learning", "learning"),
            ("search", "search"),
        ]);
        let out = rank(&stats, &idf(), &RankOptions::default());
        let search = out.iter().find(|k| k.display_form == "search").unwrap();
        let expected = (1.0 + 1.0 / 3.0f64).ln() * 20f64.ln();
        assert!((search.score - expected).abs() < 1e-12);
    }

    #[test]
    fn unseen_lemma_uses_corpus_size() {
        let stats = stats_from(&[("tokenizer", "tokenizer")]);
        let out = rank(&stats, &idf(), &RankOptions::default());
        let expected = 2f64.ln() * 100f64.ln();
        assert_eq!(out.len(), 1);
        assert!((out[0].score - expected).abs() < 1e-12);
    }

    #[test]
    fn sorted_by_descending_score() {
        let stats = stats_from(&[
            ("machine", "machine"),
            ("search", "search"),
            ("learning", "learning"),
        ]);
        let out = rank(&stats, &idf(), &RankOptions::default());
        let forms: Vec<&str> = out.iter().map(|k| k.display_form.as_str()).collect();
        assert_eq!(forms, vec!["search", "learning", "machine"]);
        assert!(out.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let stats = stats_from(&[("gamma", "gamma"), ("alpha", "alpha"), ("beta", "beta")]);
        let out = rank(&stats, &idf(), &RankOptions::default());
        let forms: Vec<&str> = out.iter().map(|k| k.display_form.as_str()).collect();
        assert_eq!(forms, vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn frequency_raises_score() {
        let stats = stats_from(&[("alpha", "alpha"), ("beta", "beta"), ("beta", "beta")]);
        let out = rank(&stats, &idf(), &RankOptions::default());
        assert_eq!(out[0].display_form, "beta");
    }

    #[test]
    fn long_display_forms_are_dropped_not_truncated() {
        let long = "a".repeat(20);
        let ok = "b".repeat(19);
        let stats = stats_from(&[(long.as_str(), long.as_str()), (ok.as_str(), ok.as_str())]);
        let out = rank(&stats, &idf(), &RankOptions::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].display_form, ok);
    }

    #[test]
    fn length_filter_applies_before_truncation() {
        let long = "x".repeat(30);
        // the long lemma is the most frequent, so it ranks first
        let stats = stats_from(&[
            (long.as_str(), long.as_str()),
            (long.as_str(), long.as_str()),
            ("short", "short"),
            ("other", "other"),
        ]);
        let out = rank(&stats, &idf(), &RankOptions::default().with_max_words(2));
        let forms: Vec<&str> = out.iter().map(|k| k.display_form.as_str()).collect();
        assert_eq!(forms, vec!["short", "other"]);
    }

    #[test]
    fn truncates_to_max_words() {
        let stats = stats_from(&[("a", "a"), ("b", "b"), ("c", "c"), ("d", "d")]);
        let out = rank(&stats, &idf(), &RankOptions::default().with_max_words(3));
        assert_eq!(out.len(), 3);
        let none = rank(&stats, &idf(), &RankOptions::default().with_max_words(0));
        assert!(none.is_empty());
    }

    #[test]
    fn threshold_filters_low_scores() {
        let stats = stats_from(&[("machine", "machine"), ("search", "search")]);
        let all = rank(&stats, &idf(), &RankOptions::default());
        assert_eq!(all.len(), 2);
        let cut = all[0].score - 1e-9;
        let out = rank(&stats, &idf(), &RankOptions::default().with_threshold(cut));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].display_form, "search");
    }

    #[test]
    fn display_form_is_reported() {
        let lists = WordLists::new(WordSet::new(), WordSet::from_lines("nasa"));
        let mut stats = WordStats::new();
        stats.add("nasa", "NASA", &lists);
        let out = rank(&stats, &idf(), &RankOptions::default());
        assert_eq!(out[0].display_form, "NASA");
    }

    #[test]
    fn empty_stats_give_empty_result() {
        let out = rank(&WordStats::new(), &idf(), &RankOptions::default());
        assert!(out.is_empty());
    }

    #[test]
    fn term_frequency_formula() {
        assert!((term_frequency(1, 3) - (4.0f64 / 3.0).ln()).abs() < 1e-15);
        assert_eq!(term_frequency(2, 2), 2f64.ln());
    }
}
