//! Question answering result types

use serde::{Deserialize, Serialize};

/// A document cited by an answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaReference {
    pub id: String,
    pub title: String,
    pub score: f64,
}

/// Composed answer with the documents it was built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaAnswer {
    pub answer: String,
    pub references: Vec<QaReference>,
}
