//! Answer composition

use crate::search::{rank, SynonymRegistry};
use crate::types::{Document, QaAnswer, QaReference};

/// Returned when there is nothing to answer from
pub const NO_ANSWER_TEXT: &str = "暂无可用答案。";

/// First line of every composed answer
pub const ANSWER_HEADER: &str = "以下是社区的热门建议：";

/// Body characters quoted per reference
pub const SNIPPET_CHARS: usize = 120;

/// Answer a question from a window of recent documents
///
/// Cites the top `limit` documents scoring above zero. When nothing matches,
/// the answer summarizes the first `limit` documents of the window instead,
/// and `references` stays empty.
pub fn answer_question<D>(
    registry: &SynonymRegistry,
    question: &str,
    recent: &[D],
    limit: usize,
) -> QaAnswer
where
    D: Document + Sync,
{
    let ranked = rank(registry, question, recent, |d| d.searchable_text(), Some(limit));

    let references = ranked
        .iter()
        .map(|r| QaReference {
            id: r.document.id().to_string(),
            title: r.document.title().to_string(),
            score: r.score,
        })
        .collect();

    let answer = if ranked.is_empty() {
        tracing::debug!(question = %question, "no matching documents, using most recent");
        compose(recent.iter().take(limit))
    } else {
        compose(ranked.iter().map(|r| r.document))
    };

    QaAnswer { answer, references }
}

fn compose<'a, D: Document + 'a>(documents: impl Iterator<Item = &'a D>) -> String {
    let lines: Vec<String> = documents
        .enumerate()
        .map(|(i, doc)| format!("{}. {}: {}", i + 1, doc.title(), snippet(doc.body())))
        .collect();

    if lines.is_empty() {
        return NO_ANSWER_TEXT.to_string();
    }

    format!("{}\n{}", ANSWER_HEADER, lines.join("\n"))
}

/// First `SNIPPET_CHARS` characters of a body, with `...` when cut
pub fn snippet(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(SNIPPET_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
