//! Binary tree fixture and its level-order codec.
//!
//! The wire form is the flat breadth-first listing used by online judges:
//! node values left-to-right per level, with placeholder tokens for the
//! missing children of present nodes (`null`, `#`, or an empty token).
//! Sequences shorter than a fully specified tree are tolerated: the
//! reconstruction simply stops when the tokens run out.

use std::collections::VecDeque;
use std::fmt;

use termtree::Tree;

use crate::domain::error::{DomainError, DomainResult};

/// Canonical absence marker emitted when converting nullable values.
pub const ABSENT_TOKEN: &str = "null";

/// Node count of the reference fixture: a complete tree of 4 levels.
const FIXTURE_NODE_COUNT: i32 = 15;

/// Binary tree node. Each child slot exclusively owns its subtree, so the
/// structure is acyclic and finite by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Reconstructs a tree from its level-order token sequence.
    ///
    /// Token 0 becomes the root; a queue of pending parents then consumes
    /// the next two tokens per dequeued node as its left and right slots.
    /// An absence marker leaves the slot empty, any other token must parse
    /// as a decimal integer. Running out of tokens mid-tree is not an
    /// error: reconstruction stops and later pending parents keep their
    /// empty slots.
    ///
    /// # Errors
    ///
    /// [`DomainError::Parse`] if a non-absent token is not a valid integer.
    /// No partial tree is returned in that case.
    pub fn from_level_order<S: AsRef<str>>(tokens: &[S]) -> DomainResult<Option<Box<TreeNode>>> {
        let mut remaining = tokens.iter().map(AsRef::as_ref);

        let mut root = match remaining.next() {
            None => return Ok(None),
            Some(token) if is_absent(token) => return Ok(None),
            Some(token) => Box::new(TreeNode::new(parse_token(token)?)),
        };

        let mut pending: VecDeque<&mut TreeNode> = VecDeque::new();
        pending.push_back(&mut root);

        // Terminates: every iteration consumes a token or drains a parent.
        'fill: while let Some(parent) = pending.pop_front() {
            let TreeNode { left, right, .. } = parent;
            for slot in [left, right] {
                let Some(token) = remaining.next() else {
                    break 'fill;
                };
                if is_absent(token) {
                    continue;
                }
                let child = slot.insert(Box::new(TreeNode::new(parse_token(token)?)));
                pending.push_back(child);
            }
        }

        Ok(Some(root))
    }

    /// Reconstructs a tree from a nullable-integer sequence.
    ///
    /// Values are converted token-for-token into the textual form (absent
    /// becomes the `null` marker) and reconstruction proceeds identically
    /// to [`TreeNode::from_level_order`].
    pub fn from_level_order_values(values: &[Option<i32>]) -> DomainResult<Option<Box<TreeNode>>> {
        let tokens: Vec<String> = values
            .iter()
            .map(|value| match value {
                Some(n) => n.to_string(),
                None => ABSENT_TOKEN.to_string(),
            })
            .collect();
        Self::from_level_order(&tokens)
    }

    /// The canonical demo tree: 15 nodes on 4 levels, values 0-14 assigned
    /// in level-order. Deterministic, identical on every invocation.
    pub fn reference_fixture() -> Box<TreeNode> {
        fn subtree(index: i32) -> Option<Box<TreeNode>> {
            if index >= FIXTURE_NODE_COUNT {
                return None;
            }
            Some(Box::new(TreeNode {
                val: index,
                left: subtree(2 * index + 1),
                right: subtree(2 * index + 2),
            }))
        }

        Box::new(TreeNode {
            val: 0,
            left: subtree(1),
            right: subtree(2),
        })
    }

    /// Returns the values of present nodes in breadth-first order,
    /// left-to-right within each level.
    pub fn level_order(&self) -> Vec<i32> {
        let mut values = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(self);

        while let Some(node) = queue.pop_front() {
            values.push(node.val);
            if let Some(left) = &node.left {
                queue.push_back(left);
            }
            if let Some(right) = &node.right {
                queue.push_back(right);
            }
        }

        values
    }

    /// Calculates the depth of the tree using a breadth-first traversal.
    /// Each element in the queue is a pair (node, depth).
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        queue.push_back((self, 1));

        while let Some((node, depth)) = queue.pop_front() {
            if depth > max_depth {
                max_depth = depth;
            }
            if let Some(left) = &node.left {
                queue.push_back((left, depth + 1));
            }
            if let Some(right) = &node.right {
                queue.push_back((right, depth + 1));
            }
        }

        max_depth
    }

    pub fn node_count(&self) -> usize {
        self.level_order().len()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreeNode[val={}]", self.val)
    }
}

/// Single-node display form: the node's value string, or `null` for the
/// absent case. Not an inverse of the level-order codec.
pub fn render(node: Option<&TreeNode>) -> String {
    match node {
        Some(node) => node.to_string(),
        None => ABSENT_TOKEN.to_string(),
    }
}

fn is_absent(token: &str) -> bool {
    token.is_empty() || token == ABSENT_TOKEN || token == "#"
}

fn parse_token(token: &str) -> DomainResult<i32> {
    token.parse().map_err(|source| DomainError::Parse {
        token: token.to_string(),
        source,
    })
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for TreeNode {
    fn to_tree_string(&self) -> Tree<String> {
        let root = self.val.to_string();

        // Keep both slots visible whenever one is present, otherwise a
        // lone child would be ambiguous between left and right.
        let leaves: Vec<_> = if self.is_leaf() {
            Vec::new()
        } else {
            [self.left.as_deref(), self.right.as_deref()]
                .into_iter()
                .map(|slot| match slot {
                    Some(child) => child.to_tree_string(),
                    None => Tree::new(ABSENT_TOKEN.to_string()),
                })
                .collect()
        };

        Tree::new(root).with_leaves(leaves)
    }
}
