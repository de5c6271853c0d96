//! A plain binary tree. Any value type can be stored and nodes can be
//! attached anywhere; no ordering is enforced at this level (see
//! [`OrderedTree`][crate::OrderedTree] for that).
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! //       1
//! //      / \
//! //     2   3
//! //    /
//! //   4
//! let mut tree = Tree::leaf(1);
//! tree.attach_left(Tree::node(2, Tree::leaf(4), Tree::new())).unwrap();
//! tree.attach_right(Tree::leaf(3)).unwrap();
//!
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.size(), 4);
//! assert_eq!(tree.in_order(), vec![&4, &2, &1, &3]);
//! assert_eq!(tree.level_order(), vec![&1, &2, &3, &4]);
//! assert_eq!(tree.level_of(&4), 3);
//!
//! // An empty tree is still a tree.
//! let empty: Tree<i32> = Tree::new();
//! assert_eq!(empty.height(), 0);
//! assert!(empty.value().is_err());
//! ```

use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::mem;

use crate::error::EmptyTreeError;
use crate::shape::Shape;

/// A binary tree that is either empty or a [`Node`] owning two subtrees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree<T> {
    /// The tree with no value and no children.
    Empty,
    /// A value and two children (which are both `Tree`s, possibly empty).
    Node(Node<T>),
}

/// A `Node` has a value and always has two children, although those
/// children may be [`Empty`][Tree::Empty].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Box<Tree<T>>,
    right: Box<Tree<T>>,
}

impl<T> Node<T> {
    /// The value stored at this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left subtree.
    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    /// The right subtree.
    pub fn right(&self) -> &Tree<T> {
        &self.right
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Tree<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Which child of a node an operation is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// A tree holding a single value and no children.
    pub fn leaf(value: T) -> Self {
        Self::node(value, Self::Empty, Self::Empty)
    }

    /// A tree whose root holds `value` with the given children.
    pub fn node(value: T, left: Self, right: Self) -> Self {
        Self::Node(Node {
            value,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Returns `true` if there is no node in this tree.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if this tree is a single node with two empty children.
    pub fn is_leaf(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Node(n) => n.left.is_empty() && n.right.is_empty(),
        }
    }

    /// Every accessor that needs a node goes through here.
    fn root(&self) -> Result<&Node<T>, EmptyTreeError> {
        match self {
            Self::Empty => Err(EmptyTreeError),
            Self::Node(n) => Ok(n),
        }
    }

    fn root_mut(&mut self) -> Result<&mut Node<T>, EmptyTreeError> {
        match self {
            Self::Empty => Err(EmptyTreeError),
            Self::Node(n) => Ok(n),
        }
    }

    /// The value at the root of this tree.
    pub fn value(&self) -> Result<&T, EmptyTreeError> {
        self.root().map(Node::value)
    }

    /// The left subtree of the root.
    pub fn left(&self) -> Result<&Self, EmptyTreeError> {
        self.root().map(Node::left)
    }

    /// The right subtree of the root.
    pub fn right(&self) -> Result<&Self, EmptyTreeError> {
        self.root().map(Node::right)
    }

    /// Mutable access to the left subtree, e.g. to attach further down the tree.
    pub fn left_mut(&mut self) -> Result<&mut Self, EmptyTreeError> {
        self.root_mut().map(|n| n.child_mut(Side::Left))
    }

    /// Mutable access to the right subtree.
    pub fn right_mut(&mut self) -> Result<&mut Self, EmptyTreeError> {
        self.root_mut().map(|n| n.child_mut(Side::Right))
    }

    /// Replaces the left subtree of the root with `subtree` and returns the
    /// subtree that was there before.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{EmptyTreeError, Tree};
    ///
    /// let mut tree = Tree::leaf(1);
    /// let old = tree.attach_left(Tree::leaf(2)).unwrap();
    /// assert!(old.is_empty());
    /// assert_eq!(tree.left().unwrap().value(), Ok(&2));
    ///
    /// let mut empty = Tree::new();
    /// assert_eq!(empty.attach_left(Tree::leaf(2)), Err(EmptyTreeError));
    /// ```
    pub fn attach_left(&mut self, subtree: Self) -> Result<Self, EmptyTreeError> {
        self.attach(Side::Left, subtree)
    }

    /// Replaces the right subtree of the root with `subtree` and returns the
    /// subtree that was there before.
    pub fn attach_right(&mut self, subtree: Self) -> Result<Self, EmptyTreeError> {
        self.attach(Side::Right, subtree)
    }

    pub(crate) fn attach(&mut self, side: Side, subtree: Self) -> Result<Self, EmptyTreeError> {
        let node = self.root_mut()?;
        Ok(mem::replace(node.child_mut(side), subtree))
    }

    /// The number of levels in this tree. An empty tree has height 0 and a
    /// single node has height 1.
    pub fn height(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => 1 + n.left.height().max(n.right.height()),
        }
    }

    /// The number of nodes in this tree.
    pub fn size(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => 1 + n.left.size() + n.right.size(),
        }
    }

    /// Values in left subtree, root, right subtree order.
    pub fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size());
        self.walk_in_order(&mut out);
        out
    }

    fn walk_in_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Self::Node(n) = self {
            n.left.walk_in_order(out);
            out.push(&n.value);
            n.right.walk_in_order(out);
        }
    }

    /// Values in root, left subtree, right subtree order.
    pub fn pre_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size());
        self.walk_pre_order(&mut out);
        out
    }

    fn walk_pre_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Self::Node(n) = self {
            out.push(&n.value);
            n.left.walk_pre_order(out);
            n.right.walk_pre_order(out);
        }
    }

    /// Values in left subtree, right subtree, root order.
    pub fn post_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.size());
        self.walk_post_order(&mut out);
        out
    }

    fn walk_post_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Self::Node(n) = self {
            n.left.walk_post_order(out);
            n.right.walk_post_order(out);
            out.push(&n.value);
        }
    }

    /// The values of the tree grouped by depth, shallowest first and left to
    /// right within a depth. The root is alone at depth 1.
    pub fn levels(&self) -> Vec<Vec<&T>> {
        let mut by_depth = BTreeMap::new();
        self.collect_levels(1, &mut by_depth);
        by_depth.into_values().collect()
    }

    fn collect_levels<'a>(&'a self, depth: usize, by_depth: &mut BTreeMap<usize, Vec<&'a T>>) {
        if let Self::Node(n) = self {
            by_depth.entry(depth).or_default().push(&n.value);
            n.left.collect_levels(depth + 1, by_depth);
            n.right.collect_levels(depth + 1, by_depth);
        }
    }

    /// All values, level by level. See [`levels`][Self::levels].
    pub fn level_order(&self) -> Vec<&T> {
        self.levels().into_iter().flatten().collect()
    }

    /// The depth (root = 1) of the shallowest node holding a value equal to
    /// `x`. If there is none, returns `self.height() + 1`, which no node can
    /// be at.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Tree;
    ///
    /// let tree = Tree::node(1, Tree::leaf(2), Tree::node(3, Tree::leaf(4), Tree::new()));
    /// assert_eq!(tree.level_of(&1), 1);
    /// assert_eq!(tree.level_of(&4), 3);
    /// assert_eq!(tree.level_of(&99), 4);
    /// ```
    pub fn level_of(&self, x: &T) -> usize
    where
        T: PartialEq,
    {
        let mut queue = VecDeque::new();
        queue.push_back((self, 1));
        while let Some((tree, depth)) = queue.pop_front() {
            if let Self::Node(n) = tree {
                if n.value == *x {
                    return depth;
                }
                queue.push_back((&*n.left, depth + 1));
                queue.push_back((&*n.right, depth + 1));
            }
        }

        self.height() + 1
    }

    /// A deep copy with left and right swapped at every node.
    pub fn mirror(&self) -> Self
    where
        T: Clone,
    {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(n) => Self::node(n.value.clone(), n.right.mirror(), n.left.mirror()),
        }
    }

    /// A deep copy with every leaf removed. Nodes that only become leaves
    /// because their children were removed are kept.
    pub fn without_leaves(&self) -> Self
    where
        T: Clone,
    {
        match self {
            Self::Node(n) if !self.is_leaf() => Self::node(
                n.value.clone(),
                n.left.without_leaves(),
                n.right.without_leaves(),
            ),
            _ => Self::Empty,
        }
    }

    /// The nested `{value, left, right}` shape of this tree for renderers.
    /// `None` for an empty tree.
    pub fn export_shape(&self) -> Option<Shape<&T>> {
        match self {
            Self::Empty => None,
            Self::Node(n) => Some(Shape {
                value: &n.value,
                left: n.left.export_shape().map(Box::new),
                right: n.right.export_shape().map(Box::new),
            }),
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result
    where
        T: fmt::Display,
    {
        let indent = "....".repeat(depth);
        match self {
            Self::Empty => writeln!(f, "{}AV", indent),
            Self::Node(n) => {
                writeln!(f, "{}{}", indent, n.value)?;
                n.left.fmt_indented(f, depth + 1)?;
                n.right.fmt_indented(f, depth + 1)
            }
        }
    }
}

/// One line per position, indented four dots per level, with `AV` marking
/// an empty subtree.
///
/// ```
/// use bintree::Tree;
///
/// let tree = Tree::node(1, Tree::leaf(2), Tree::new());
/// assert_eq!(tree.to_string(), "1\n....2\n........AV\n........AV\n....AV\n");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
