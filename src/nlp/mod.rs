//! Question answering over recent community posts
//!
//! Ranks a recency-ordered window of documents against a question and
//! summarizes the best matches as an enumerated answer.

mod qa;

pub use qa::{answer_question, snippet, ANSWER_HEADER, NO_ANSWER_TEXT, SNIPPET_CHARS};
