//! Errors returned by [`Tree`][crate::Tree] and [`OrderedTree`][crate::OrderedTree].

use std::fmt;

use crate::tree::Tree;

/// An operation that needs a node was called on an empty tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("operation requires a non-empty tree")]
pub struct EmptyTreeError;

/// Errors from the validated attach of an [`OrderedTree`][crate::OrderedTree].
///
/// Whatever the failure, the receiver is left exactly as it was before the call.
#[derive(thiserror::Error)]
pub enum AttachError<T> {
    /// The receiver has no node to attach to.
    #[error(transparent)]
    EmptyTree(#[from] EmptyTreeError),
    /// The combined tree would not be ordered. The rejected subtree is handed back.
    #[error("the attached subtree breaks the ordering invariant of the combined tree")]
    OrderViolation(Tree<T>),
    /// No node holds the value the attach was aimed at. The subtree is handed back.
    #[error("no node holds the anchor value")]
    AnchorNotFound(Tree<T>),
}

// Written by hand so `T` does not need to be `Debug` for the error to be.
impl<T> fmt::Debug for AttachError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTree(e) => f.debug_tuple("EmptyTree").field(e).finish(),
            Self::OrderViolation(rejected) => f
                .debug_struct("OrderViolation")
                .field("rejected_size", &rejected.size())
                .finish(),
            Self::AnchorNotFound(rejected) => f
                .debug_struct("AnchorNotFound")
                .field("rejected_size", &rejected.size())
                .finish(),
        }
    }
}

impl<T> AttachError<T> {
    /// Takes back the rejected subtree, if the attach got far enough to have one.
    pub fn into_rejected(self) -> Option<Tree<T>> {
        match self {
            Self::EmptyTree(_) => None,
            Self::OrderViolation(rejected) | Self::AnchorNotFound(rejected) => Some(rejected),
        }
    }
}

/// A [`Tree`] could not become an [`OrderedTree`][crate::OrderedTree] because its
/// in-order values are not strictly increasing. The tree is handed back.
#[derive(thiserror::Error)]
#[error("tree does not satisfy the ordering invariant")]
pub struct UnorderedTree<T>(pub Tree<T>);

impl<T> fmt::Debug for UnorderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnorderedTree")
            .field("size", &self.0.size())
            .finish()
    }
}
