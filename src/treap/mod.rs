//! Implicit treaps whose nodes are shared between versions.
//!
//! An implicit treap is a treap where the key of a node is implicitly determined by the size of
//! its left subtree. Instead of storing a random priority in every node, merging picks the root
//! of the larger side with probability proportional to its size. This keeps the expected height
//! logarithmic even when the same subtree is merged with itself, which happens whenever a shared
//! version is concatenated or repeated.

mod implicit_tree;
mod iter;
mod list;
mod node;
mod persistent;
mod serialize;
mod summary;
mod traits;

pub use self::iter::{IntoIter, Iter};
pub use self::list::Treap;
pub use self::persistent::PersistentTreap;
pub use self::summary::{Max, Min, Sum, Summary};

use std::error;
use std::fmt;
use std::io;
use std::ops::{Bound, RangeBounds};
use std::result;

/// An error returned by fallible treap operations.
#[derive(Debug)]
pub enum Error {
    /// An index did not address an element (or, for insertion, a position) of the treap.
    IndexOutOfBounds { index: usize, len: usize },
    IOError(io::Error),
    SerdeError(bincode::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Error {
        Error::SerdeError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IndexOutOfBounds { .. } => None,
            Error::IOError(error) => Some(error),
            Error::SerdeError(error) => Some(error),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            },
            Error::IOError(error) => write!(f, "{}", error),
            Error::SerdeError(error) => write!(f, "{}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Resolves a range against a list of length `len`. Both ends are clamped to `len` and an
/// inverted range resolves to an empty one.
fn clamp_range<R>(range: R, len: usize) -> (usize, usize)
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    let end = end.min(len);
    (start.min(end), end)
}
