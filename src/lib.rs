//! This crate exposes a plain binary tree and an ordered binary tree
//! (a Binary Search Tree) built on top of it.
//!
//! ## Binary Tree
//!
//! A [`Tree`] is defined recursively: it is either empty, or a `Node`
//! holding a value and two children which are themselves `Tree`s. The empty
//! tree is a real value, not a missing one, so queries like
//! [`height`][Tree::height] or [`in_order`][Tree::in_order] are defined on
//! it and return 0 or nothing. Anything that needs a node (reading the
//! value, reading or replacing a child) returns [`EmptyTreeError`] instead.
//!
//! A node owns its children. Attaching a subtree moves it into the tree, so
//! a subtree can never hang off two parents at once and there are no cycles.
//!
//! ## Ordered Binary Tree
//!
//! An [`OrderedTree`] additionally keeps the Binary Search Tree invariant:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than its own value.
//!
//! Equivalently, its in-order traversal is strictly increasing. Duplicate
//! values are not stored.
//!
//! Besides [`insert`][OrderedTree::insert], whole subtrees can be attached
//! with [`attach_left`][OrderedTree::attach_left] and
//! [`attach_right`][OrderedTree::attach_right]. The subtree is put in place,
//! the whole tree is checked, and if the check fails the previous child is
//! put back and the subtree is returned inside an [`AttachError`]. The tree
//! is never observably out of order.
//!
//! ## Drawing
//!
//! [`Tree::export_shape`] converts a tree to nested [`Shape`] records, which
//! is all a renderer needs. With the `serde` feature, `Shape` is
//! serializable.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod ordered;
pub mod shape;
pub mod tree;

pub use error::{AttachError, EmptyTreeError, UnorderedTree};
pub use ordered::OrderedTree;
pub use shape::Shape;
pub use tree::{Node, Tree};
