//! Problem metadata registry.
//!
//! Metadata is attached to a problem by explicit association: a registry
//! maps problem identifier to its record. The record is pure data and
//! never drives control flow.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Problem difficulty, the closed three-level scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(DomainError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

/// Algorithmic topic tag: a closed set of common topics plus an
/// open-ended custom escape. Unknown strings round-trip as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    Array,
    Strings,
    HashTable,
    LinkedList,
    Tree,
    BinarySearch,
    DynamicProgramming,
    TwoPointers,
    Stack,
    Queue,
    Graph,
    Greedy,
    Math,
    Sorting,
    Backtracking,
    BreadthFirstSearch,
    DepthFirstSearch,
    Custom(String),
}

impl Tag {
    pub fn parse(s: &str) -> Self {
        match s {
            "array" => Self::Array,
            "string" => Self::Strings,
            "hash-table" => Self::HashTable,
            "linked-list" => Self::LinkedList,
            "tree" => Self::Tree,
            "binary-search" => Self::BinarySearch,
            "dynamic-programming" => Self::DynamicProgramming,
            "two-pointers" => Self::TwoPointers,
            "stack" => Self::Stack,
            "queue" => Self::Queue,
            "graph" => Self::Graph,
            "greedy" => Self::Greedy,
            "math" => Self::Math,
            "sorting" => Self::Sorting,
            "backtracking" => Self::Backtracking,
            "breadth-first-search" => Self::BreadthFirstSearch,
            "depth-first-search" => Self::DepthFirstSearch,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Array => "array",
            Self::Strings => "string",
            Self::HashTable => "hash-table",
            Self::LinkedList => "linked-list",
            Self::Tree => "tree",
            Self::BinarySearch => "binary-search",
            Self::DynamicProgramming => "dynamic-programming",
            Self::TwoPointers => "two-pointers",
            Self::Stack => "stack",
            Self::Queue => "queue",
            Self::Graph => "graph",
            Self::Greedy => "greedy",
            Self::Math => "math",
            Self::Sorting => "sorting",
            Self::Backtracking => "backtracking",
            Self::BreadthFirstSearch => "breadth-first-search",
            Self::DepthFirstSearch => "depth-first-search",
            Self::Custom(name) => name,
        };
        write!(f, "{}", name)
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Tag::parse(&s)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.to_string()
    }
}

/// Problem kind (judge category), closed set plus custom strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Kind {
    Algorithms,
    Database,
    Shell,
    Concurrency,
    Custom(String),
}

impl Kind {
    pub fn parse(s: &str) -> Self {
        match s {
            "algorithms" => Self::Algorithms,
            "database" => Self::Database,
            "shell" => Self::Shell,
            "concurrency" => Self::Concurrency,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Algorithms => "algorithms",
            Self::Database => "database",
            Self::Shell => "shell",
            Self::Concurrency => "concurrency",
            Self::Custom(name) => name,
        };
        write!(f, "{}", name)
    }
}

impl From<String> for Kind {
    fn from(s: String) -> Self {
        Kind::parse(&s)
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> Self {
        kind.to_string()
    }
}

/// Metadata record for a single problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemMeta {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub kinds: Vec<Kind>,
    /// Reference links (editorials, discussions)
    #[serde(default)]
    pub links: Vec<String>,
}

impl ProblemMeta {
    /// Tags as a single comma-separated line for listings.
    pub fn tag_line(&self) -> String {
        self.tags.iter().map(ToString::to_string).join(", ")
    }
}

/// Registry mapping problem identifier (e.g. `p0001`) to its metadata.
/// BTreeMap keeps iteration order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub problems: BTreeMap<String, ProblemMeta>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, meta: ProblemMeta) {
        self.problems.insert(id.into(), meta);
    }

    pub fn get(&self, id: &str) -> Option<&ProblemMeta> {
        self.problems.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.problems.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProblemMeta)> {
        self.problems.iter().map(|(id, meta)| (id.as_str(), meta))
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Entries matching all given filters, in id order.
    pub fn filtered(
        &self,
        tag: Option<&Tag>,
        difficulty: Option<Difficulty>,
    ) -> Vec<(&str, &ProblemMeta)> {
        self.iter()
            .filter(|(_, meta)| tag.map_or(true, |t| meta.tags.contains(t)))
            .filter(|(_, meta)| difficulty.map_or(true, |d| meta.difficulty == d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(difficulty: Difficulty, tags: &[&str]) -> ProblemMeta {
        ProblemMeta {
            title: "sample".to_string(),
            description: String::new(),
            url: None,
            difficulty,
            tags: tags.iter().map(|t| Tag::parse(t)).collect(),
            kinds: vec![Kind::Algorithms],
            links: vec![],
        }
    }

    #[test]
    fn test_unknown_tag_becomes_custom() {
        assert_eq!(
            Tag::parse("segment-tree"),
            Tag::Custom("segment-tree".to_string())
        );
        assert_eq!(Tag::parse("segment-tree").to_string(), "segment-tree");
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("brutal".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_filtered_by_tag_and_difficulty() {
        let mut catalog = Catalog::new();
        catalog.insert("p0001", sample(Difficulty::Easy, &["array", "hash-table"]));
        catalog.insert("p0002", sample(Difficulty::Medium, &["linked-list", "math"]));
        catalog.insert("p0015", sample(Difficulty::Medium, &["array", "two-pointers"]));

        let arrays = catalog.filtered(Some(&Tag::Array), None);
        assert_eq!(
            arrays.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            vec!["p0001", "p0015"]
        );

        let medium_arrays = catalog.filtered(Some(&Tag::Array), Some(Difficulty::Medium));
        assert_eq!(
            medium_arrays.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            vec!["p0015"]
        );
    }

    #[test]
    fn test_tag_line_joins_in_order() {
        let meta = sample(Difficulty::Hard, &["tree", "breadth-first-search"]);
        assert_eq!(meta.tag_line(), "tree, breadth-first-search");
    }
}
