//! Implicit treaps with structural sharing.
//!
//! Two handles are provided over the same node representation:
//!
//! - [`Treap`](treap::Treap) is a mutable list. Nodes are reference counted and copied only when
//!   another handle still points at them, so clones and snapshots are `O(1)`.
//! - [`PersistentTreap`](treap::PersistentTreap) is an immutable list where every update returns
//!   a new version and leaves the old one intact.
//!
//! # Examples
//!
//! ```
//! use persistent_treap::treap::{PersistentTreap, Treap};
//!
//! let mut list: Treap<u32> = (0..5).collect();
//! let before = list.snapshot();
//!
//! list.set(0, 10).unwrap();
//! assert_eq!(list[0], 10);
//! assert_eq!(before[0], 0);
//!
//! let v1: PersistentTreap<u32> = (0..3).collect();
//! let v2 = v1.push_back(3);
//! assert_eq!(v1.len(), 3);
//! assert_eq!(v2.len(), 4);
//! ```

pub mod demo;
pub mod treap;
