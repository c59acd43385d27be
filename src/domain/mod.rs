//! Domain layer: fixtures, codecs, and the problem registry
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod catalog;
pub mod error;
pub mod list;
pub mod tree;

pub use catalog::{Catalog, Difficulty, Kind, ProblemMeta, Tag};
pub use error::{DomainError, DomainResult};
pub use list::ListNode;
pub use tree::{TreeNode, TreeNodeConvert};
