use crate::treap::node::{into_parts, Node, Tree};
use crate::treap::summary::Summary;
use rand::Rng;
use std::rc::Rc;

fn join<T, S>(value: T, left: Tree<T, S>, right: Tree<T, S>) -> Tree<T, S>
where
    S: Summary<T>,
{
    Some(Rc::new(Node::new(value, left, right)))
}

pub fn singleton<T, S>(value: T) -> Tree<T, S>
where
    S: Summary<T>,
{
    join(value, None, None)
}

pub fn merge<T, S, R>(l_tree: Tree<T, S>, r_tree: Tree<T, S>, rng: &mut R) -> Tree<T, S>
where
    T: Clone,
    S: Summary<T>,
    R: Rng,
{
    match (l_tree, r_tree) {
        (Some(l_node), Some(r_node)) => {
            let l_len = l_node.len;
            let r_len = r_node.len;
            if rng.gen_range(0, l_len + r_len) < l_len {
                let (value, left, right) = into_parts(l_node);
                let right = merge(right, Some(r_node), rng);
                join(value, left, right)
            } else {
                let (value, left, right) = into_parts(r_node);
                let left = merge(Some(l_node), left, rng);
                join(value, left, right)
            }
        },
        (new_tree, None) | (None, new_tree) => new_tree,
    }
}

/// Splits `tree` into its first `index` elements and the rest.
pub fn split<T, S>(tree: Tree<T, S>, index: usize) -> (Tree<T, S>, Tree<T, S>)
where
    T: Clone,
    S: Summary<T>,
{
    match tree {
        Some(node) => {
            if index == 0 {
                return (None, Some(node));
            }
            if index >= node.len {
                return (Some(node), None);
            }
            let key = node.left_len();
            let (value, left, right) = into_parts(node);
            if index <= key {
                let (l_res, r_res) = split(left, index);
                (l_res, join(value, r_res, right))
            } else {
                let (l_res, r_res) = split(right, index - key - 1);
                (join(value, left, l_res), r_res)
            }
        },
        None => (None, None),
    }
}

/// Cuts `tree` into `[0, start)`, `[start, end)` and `[end, len)`.
pub fn cut<T, S>(tree: Tree<T, S>, start: usize, end: usize) -> (Tree<T, S>, Tree<T, S>, Tree<T, S>)
where
    T: Clone,
    S: Summary<T>,
{
    let (rest, suffix) = split(tree, end);
    let (prefix, middle) = split(rest, start);
    (prefix, middle, suffix)
}

/// Inserts `new_tree` so that its first element ends up at `index`.
pub fn insert<T, S, R>(tree: Tree<T, S>, index: usize, new_tree: Tree<T, S>, rng: &mut R) -> Tree<T, S>
where
    T: Clone,
    S: Summary<T>,
    R: Rng,
{
    let (left, right) = split(tree, index);
    let left = merge(left, new_tree, rng);
    merge(left, right, rng)
}

/// Removes the element at `index`, returning the remaining tree and the removed value.
pub fn remove<T, S, R>(tree: Tree<T, S>, index: usize, rng: &mut R) -> (Tree<T, S>, Option<T>)
where
    T: Clone,
    S: Summary<T>,
    R: Rng,
{
    let (prefix, middle, suffix) = cut(tree, index, index + 1);
    let value = middle.map(|node| into_parts(node).0);
    (merge(prefix, suffix, rng), value)
}

/// Builds a balanced tree from the next `len` values of `iter`.
pub fn build<T, S, I>(iter: &mut I, len: usize) -> Tree<T, S>
where
    S: Summary<T>,
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }
    let left_len = len / 2;
    let left = build(iter, left_len);
    let value = match iter.next() {
        Some(value) => value,
        None => return left,
    };
    let right = build(iter, len - left_len - 1);
    join(value, left, right)
}

pub fn get<T, S>(tree: &Tree<T, S>, mut index: usize) -> Option<&T> {
    let mut curr = tree;
    while let Some(ref node) = curr {
        let key = node.left_len();
        if index < key {
            curr = &node.left;
        } else if index == key {
            return Some(&node.value);
        } else {
            index -= key + 1;
            curr = &node.right;
        }
    }
    None
}

/// Returns a mutable reference to the value at `index`, copying every shared node on the path.
///
/// Only summary-free trees can hand out references, since a caller could otherwise invalidate the
/// summaries on the path.
pub fn make_mut<T>(tree: &mut Tree<T, ()>, index: usize) -> Option<&mut T>
where
    T: Clone,
{
    if index >= len(tree) {
        return None;
    }
    let node = Rc::make_mut(tree.as_mut()?);
    let key = node.left_len();
    if index < key {
        make_mut(&mut node.left, index)
    } else if index == key {
        Some(&mut node.value)
    } else {
        make_mut(&mut node.right, index - key - 1)
    }
}

/// Applies `f` to the value at `index` and refreshes the summaries on the path. Returns `false` if
/// `index` is out of bounds.
pub fn modify<T, S, F>(tree: &mut Tree<T, S>, index: usize, f: F) -> bool
where
    T: Clone,
    S: Summary<T>,
    F: FnOnce(&mut T),
{
    if index >= len(tree) {
        return false;
    }
    let node = match tree.as_mut() {
        Some(node) => Rc::make_mut(node),
        None => return false,
    };
    let key = node.left_len();
    if index < key {
        modify(&mut node.left, index, f);
    } else if index == key {
        f(&mut node.value);
    } else {
        modify(&mut node.right, index - key - 1, f);
    }
    node.update();
    true
}

/// Summarizes the elements in `[start, end)`.
pub fn fold<T, S>(tree: &Tree<T, S>, start: usize, end: usize) -> Option<S>
where
    S: Summary<T>,
{
    let node = tree.as_ref()?;
    if start >= end {
        return None;
    }
    if start == 0 && end >= node.len {
        return Some(node.summary.clone());
    }

    let key = node.left_len();
    let mut ret = if start < key {
        fold(&node.left, start, end.min(key))
    } else {
        None
    };
    if start <= key && key < end {
        let mid = S::summarize(&node.value);
        ret = Some(match ret {
            Some(left) => S::combine(&left, &mid),
            None => mid,
        });
    }
    if end > key + 1 {
        let right = fold(&node.right, start.saturating_sub(key + 1), end - key - 1);
        ret = match (ret, right) {
            (Some(left), Some(right)) => Some(S::combine(&left, &right)),
            (ret, None) | (None, ret) => ret,
        };
    }
    ret
}

pub fn len<T, S>(tree: &Tree<T, S>) -> usize {
    match tree {
        Some(ref node) => node.len,
        None => 0,
    }
}

pub fn height<T, S>(tree: &Tree<T, S>) -> usize {
    match tree {
        Some(ref node) => 1 + height(&node.left).max(height(&node.right)),
        None => 0,
    }
}
