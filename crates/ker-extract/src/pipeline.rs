// The keyword pipeline: clean -> normalize -> aggregate -> rank.

use ker_core::keyword::ScoredKeyword;
use tracing::debug;

use crate::aggregate::aggregate;
use crate::cleaner::clean_lines;
use crate::normalizer::LemmaNormalizer;
use crate::rank::{RankOptions, rank};
use crate::resources::{IdfTable, WordLists};

/// Find the keywords of a document given as raw lines.
///
/// Pure apart from the normalizer's internal state: the same lines with the
/// same resources always produce the same list. Empty input, or input that
/// cleans down to nothing, yields an empty list.
pub fn get_keywords<I, N>(
    lines: I,
    normalizer: &mut N,
    lists: &WordLists,
    idf: &IdfTable,
    options: &RankOptions,
) -> Vec<ScoredKeyword>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    N: LemmaNormalizer + ?Sized,
{
    let stats = aggregate(clean_lines(lines), normalizer, lists);
    let keywords = rank(&stats, idf, options);
    debug!(
        lemmas = stats.len(),
        words = stats.total_word_count(),
        tokens = stats.total_token_count(),
        keywords = keywords.len(),
        "extracted keywords"
    );
    keywords
}
