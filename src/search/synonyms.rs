//! Synonym dictionary for semantic matching
//!
//! The registry is built once at startup and only read afterwards, so it is
//! shared behind an `Arc` without any locking.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::tokenizer::is_unsegmented;
use crate::error::ConfigError;

/// Built-in synonym classes - words in same class are considered interchangeable
pub const DEFAULT_SYNONYM_CLASSES: &[(&str, &[&str])] = &[
    // Dining
    (
        "吃饭",
        &[
            "吃饭", "用餐", "就餐", "餐馆", "餐饮", "烹饪", "饭堂", "dining", "restaurant",
            "canteen", "meal",
        ],
    ),
    // Housing
    (
        "租房",
        &[
            "租房", "住宿", "公寓", "房源", "宿舍", "housing", "rent", "apartment", "dorm",
            "accommodation",
        ],
    ),
    // Coursework
    (
        "课程",
        &[
            "课程", "课表", "课堂", "教学", "选课", "course", "courses", "class", "lecture",
            "syllabus",
        ],
    ),
    // Visa / immigration
    (
        "签证",
        &[
            "签证", "移民", "入境", "海关", "居留证", "visa", "immigration", "customs",
            "residence",
        ],
    ),
    // Secondhand trading
    (
        "二手",
        &[
            "二手", "闲置", "转卖", "交易", "secondhand", "resale", "trade", "marketplace",
        ],
    ),
];

/// A named set of tokens treated as interchangeable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymClass {
    pub name: String,
    pub members: Vec<String>,
}

impl SynonymClass {
    /// Create a class, normalizing and de-duplicating members
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let mut normalized: Vec<String> = Vec::new();
        for member in members {
            let member = member.as_ref().trim().to_lowercase();
            if !member.is_empty() && !normalized.contains(&member) {
                normalized.push(member);
            }
        }

        Self {
            name: name.into(),
            members: normalized,
        }
    }

    /// Check if the class contains a token
    pub fn contains(&self, token: &str) -> bool {
        self.members.iter().any(|m| m == token)
    }
}

/// Immutable, ordered collection of synonym classes
#[derive(Debug, Clone, Default)]
pub struct SynonymRegistry {
    classes: Vec<SynonymClass>,
    /// member → indices of every class containing it
    lookup: HashMap<String, Vec<usize>>,
    /// members written in unsegmented scripts, recognised inside longer tokens
    embeddable: Vec<String>,
}

impl SynonymRegistry {
    /// Build a registry from classes
    pub fn new(classes: Vec<SynonymClass>) -> Self {
        let mut lookup: HashMap<String, Vec<usize>> = HashMap::new();
        let mut embeddable: Vec<String> = Vec::new();

        for (idx, class) in classes.iter().enumerate() {
            for member in &class.members {
                let indices = lookup.entry(member.clone()).or_default();
                if !indices.contains(&idx) {
                    indices.push(idx);
                }
                if is_unsegmented(member) && !embeddable.contains(member) {
                    embeddable.push(member.clone());
                }
            }
        }

        Self {
            classes,
            lookup,
            embeddable,
        }
    }

    /// Registry with the built-in classes
    pub fn builtin() -> Self {
        Self::new(
            DEFAULT_SYNONYM_CLASSES
                .iter()
                .map(|(name, members)| SynonymClass::new(*name, members.iter()))
                .collect(),
        )
    }

    /// Load classes from a JSON file: `[{"name": "...", "members": [...]}]`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let raw: Vec<SynonymClass> =
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.display().to_string(),
                source,
            })?;

        let classes = raw
            .into_iter()
            .map(|c| SynonymClass::new(c.name, c.members))
            .filter(|c| !c.members.is_empty())
            .collect();

        Ok(Self::new(classes))
    }

    /// Every class containing the token, in registry order
    pub fn classes_containing<'a>(&'a self, token: &str) -> impl Iterator<Item = &'a SynonymClass> + 'a {
        self.lookup
            .get(token)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.classes[idx])
    }

    /// Registry terms in unsegmented scripts occurring strictly inside `token`
    pub fn embedded_terms<'a>(&'a self, token: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.embeddable
            .iter()
            .filter(move |term| term.as_str() != token && token.contains(term.as_str()))
            .map(|term| term.as_str())
    }

    /// Look up a class by name
    pub fn class(&self, name: &str) -> Option<&SynonymClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn classes(&self) -> &[SynonymClass] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
