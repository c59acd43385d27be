//! Singly linked list fixture.

use std::fmt;

/// Linked list node; `next` exclusively owns the rest of the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub val: i32,
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    pub fn new(val: i32) -> Self {
        Self { val, next: None }
    }

    /// Builds a chain preserving the order of `values`.
    /// An empty slice yields no list at all.
    pub fn from_values(values: &[i32]) -> Option<Box<ListNode>> {
        let mut head: Option<Box<ListNode>> = None;
        let mut cursor = &mut head;
        for &val in values {
            cursor = &mut cursor.insert(Box::new(ListNode::new(val))).next;
        }
        head
    }

    pub fn values(&self) -> Vec<i32> {
        let mut values = vec![self.val];
        let mut next = self.next.as_deref();
        while let Some(node) = next {
            values.push(node.val);
            next = node.next.as_deref();
        }
        values
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }
}

impl fmt::Display for ListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.val)?;
        let mut next = self.next.as_deref();
        while let Some(node) = next {
            write!(f, " -> {}", node.val)?;
            next = node.next.as_deref();
        }
        Ok(())
    }
}

/// Chain display form, or `null` when there is no list.
pub fn render(list: Option<&ListNode>) -> String {
    match list {
        Some(head) => head.to_string(),
        None => "null".to_string(),
    }
}
