//! Query/target overlap scoring

use super::bag::SemanticBag;
use super::synonyms::SynonymRegistry;

/// Fraction of query concepts found in the target, in `[0, 1]`
///
/// Asymmetric on purpose: a short query matched entirely scores 1.0 no
/// matter how long the target is. An empty query scores 0.
pub fn score(query: &SemanticBag, target: &SemanticBag) -> f64 {
    query.overlap(target) as f64 / query.len().max(1) as f64
}

/// Score two raw texts against each other
pub fn score_text(registry: &SynonymRegistry, query: &str, target: &str) -> f64 {
    score(
        &SemanticBag::from_text(query, registry),
        &SemanticBag::from_text(target, registry),
    )
}
