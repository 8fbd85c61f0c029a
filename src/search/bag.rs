//! Semantic bags: token sets expanded through the synonym registry

use std::collections::BTreeSet;

use super::synonyms::SynonymRegistry;
use super::tokenizer::tokenize;

/// De-duplicated set of a text's tokens plus every synonym reachable from them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemanticBag {
    tokens: BTreeSet<String>,
}

impl SemanticBag {
    /// Build the bag for a text
    ///
    /// Every distinct token goes in as-is. Each token then pulls in all
    /// members of every class containing it; registry terms from
    /// unsegmented scripts found inside a longer token are expanded the same
    /// way, since such text has no spaces to split on.
    pub fn from_text(text: &str, registry: &SynonymRegistry) -> Self {
        let raw = tokenize(text);
        let mut tokens: BTreeSet<String> = raw.iter().cloned().collect();

        for token in &raw {
            expand(&mut tokens, registry, token);

            for term in registry.embedded_terms(token) {
                tokens.insert(term.to_string());
                expand(&mut tokens, registry, term);
            }
        }

        Self { tokens }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in lexical order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.as_str())
    }

    /// Number of tokens shared with another bag
    pub fn overlap(&self, other: &SemanticBag) -> usize {
        self.tokens.intersection(&other.tokens).count()
    }
}

fn expand(tokens: &mut BTreeSet<String>, registry: &SynonymRegistry, token: &str) {
    for class in registry.classes_containing(token) {
        tokens.extend(class.members.iter().cloned());
    }
}
