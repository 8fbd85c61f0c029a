//! Ranking documents against a free-text query

use rayon::prelude::*;
use serde::Serialize;

use super::bag::SemanticBag;
use super::scorer::score;
use super::synonyms::SynonymRegistry;

/// Threshold for using parallel scoring (document count)
const PARALLEL_RANK_THRESHOLD: usize = 1000;

/// A document paired with its score against a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult<T> {
    #[serde(flatten)]
    pub document: T,
    pub score: f64,
}

impl<T> ScoredResult<T> {
    pub fn new(document: T, score: f64) -> Self {
        Self { document, score }
    }

    /// Transform the document, keeping the score
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ScoredResult<U> {
        ScoredResult {
            document: f(self.document),
            score: self.score,
        }
    }
}

/// Score, filter, sort and truncate `documents` against `query`
///
/// `text_of` selects the text each document is matched on. Documents scoring
/// exactly 0 are dropped. Equal scores keep their input order, so callers
/// passing newest-first documents get newest-first ties.
pub fn rank<'a, D, F>(
    registry: &SynonymRegistry,
    query: &str,
    documents: &'a [D],
    text_of: F,
    limit: Option<usize>,
) -> Vec<ScoredResult<&'a D>>
where
    D: Sync,
    F: Fn(&D) -> String + Sync,
{
    let query_bag = SemanticBag::from_text(query, registry);

    let score_one = |doc: &'a D| {
        let target = SemanticBag::from_text(&text_of(doc), registry);
        ScoredResult::new(doc, score(&query_bag, &target))
    };

    // Indexed parallel collect keeps input order
    let scored: Vec<ScoredResult<&'a D>> = if documents.len() > PARALLEL_RANK_THRESHOLD {
        documents.par_iter().map(score_one).collect()
    } else {
        documents.iter().map(score_one).collect()
    };

    let mut matches: Vec<ScoredResult<&'a D>> =
        scored.into_iter().filter(|r| r.score > 0.0).collect();

    // `sort_by` is stable
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));

    if let Some(lim) = limit {
        matches.truncate(lim);
    }

    tracing::debug!(
        query = %query,
        candidates = documents.len(),
        matches = matches.len(),
        "ranked documents"
    );

    matches
}
