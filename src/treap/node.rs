use crate::treap::summary::Summary;
use std::rc::Rc;

pub type Tree<T, S> = Option<Rc<Node<T, S>>>;

/// A struct representing an internal node of an implicit treap.
#[derive(Clone)]
pub struct Node<T, S> {
    pub value: T,
    pub summary: S,
    pub len: usize,
    pub left: Tree<T, S>,
    pub right: Tree<T, S>,
}

impl<T, S> Node<T, S>
where
    S: Summary<T>,
{
    pub fn new(value: T, left: Tree<T, S>, right: Tree<T, S>) -> Self {
        let mut node = Node {
            summary: S::summarize(&value),
            value,
            len: 1,
            left,
            right,
        };
        node.update();
        node
    }

    pub fn update(&mut self) {
        let Node {
            ref value,
            ref mut summary,
            ref mut len,
            ref left,
            ref right,
        } = self;
        *len = 1;
        *summary = S::summarize(value);
        if let Some(ref left_node) = left {
            *len += left_node.len;
            *summary = S::combine(&left_node.summary, summary);
        }
        if let Some(ref right_node) = right {
            *len += right_node.len;
            *summary = S::combine(summary, &right_node.summary);
        }
    }
}

impl<T, S> Node<T, S> {
    /// Number of elements that precede this node within its own subtree.
    pub fn left_len(&self) -> usize {
        match self.left {
            Some(ref left_node) => left_node.len,
            None => 0,
        }
    }
}

/// Takes a node apart, moving its fields out if `node` is the only reference to it and cloning
/// them otherwise.
pub fn into_parts<T, S>(node: Rc<Node<T, S>>) -> (T, Tree<T, S>, Tree<T, S>)
where
    T: Clone,
    S: Clone,
{
    let Node {
        value, left, right, ..
    } = Rc::try_unwrap(node).unwrap_or_else(|shared| (*shared).clone());
    (value, left, right)
}
