//! An ordered binary tree (a Binary Search Tree without rebalancing).
//!
//! An [`OrderedTree`] dereferences to the underlying [`Tree`] so every
//! read-only query is available on it. Anything that changes the shape goes
//! through the methods here, and those keep the tree ordered: its in-order
//! traversal is strictly increasing after every call.
//!
//! # Examples
//!
//! ```
//! use bintree::{AttachError, OrderedTree};
//!
//! let mut tree: OrderedTree<_> = [10, 5, 15, 2, 7, 12, 17].into_iter().collect();
//!
//! assert_eq!(tree.minimum(), Some(&2));
//! assert_eq!(tree.maximum(), Some(&17));
//! assert_eq!(tree.height(), 3);
//! assert!(tree.contains(&12));
//!
//! // Attaching a subtree is only kept if the whole tree stays ordered.
//! let small: OrderedTree<_> = [8, 6].into_iter().collect();
//! tree.attach_left(small).unwrap();
//!
//! let bad: OrderedTree<_> = [11].into_iter().collect();
//! let err = tree.attach_left(bad).unwrap_err();
//! assert!(matches!(err, AttachError::OrderViolation(_)));
//! assert_eq!(tree.left().unwrap().in_order(), vec![&6, &8]);
//! ```

use std::cmp;
use std::ops::Deref;

use crate::error::{AttachError, UnorderedTree};
use crate::tree::{Side, Tree};

/// A binary tree whose in-order traversal is strictly increasing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderedTree<T> {
    root: Tree<T>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for OrderedTree<T> {
    type Target = Tree<T>;

    fn deref(&self) -> &Tree<T> {
        &self.root
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: Tree::new() }
    }

    /// Gives up the ordering guarantee and returns the plain tree.
    pub fn into_inner(self) -> Tree<T> {
        self.root
    }
}

impl<T> OrderedTree<T>
where
    T: Ord,
{
    /// Checks that every value lies strictly between the bounds set by its
    /// ancestors. Always `true` for a tree only changed through this type.
    pub fn is_ordered(&self) -> bool {
        is_ordered(&self.root)
    }

    /// Inserts `value` below the first node that has room for it, without
    /// rebalancing. Returns `false` and leaves the tree alone if an equal
    /// value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    ///
    /// assert_eq!(tree.in_order(), vec![&1, &2]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        insert(&mut self.root, value)
    }

    /// Replaces the left subtree of the root, keeping the change only if the
    /// whole tree is still ordered afterwards. Returns the previous left
    /// subtree on success.
    ///
    /// On failure the tree is exactly as it was before the call, and
    /// [`AttachError::OrderViolation`] hands the rejected subtree back.
    pub fn attach_left(
        &mut self,
        subtree: impl Into<Tree<T>>,
    ) -> Result<Tree<T>, AttachError<T>> {
        self.attach_checked(None, Side::Left, subtree.into())
    }

    /// Replaces the right subtree of the root. See
    /// [`attach_left`][Self::attach_left].
    pub fn attach_right(
        &mut self,
        subtree: impl Into<Tree<T>>,
    ) -> Result<Tree<T>, AttachError<T>> {
        self.attach_checked(None, Side::Right, subtree.into())
    }

    /// Replaces the left subtree of the node holding `anchor`, keeping the
    /// change only if the whole tree is still ordered afterwards. The subtree
    /// has to fit between the bounds every ancestor of that node sets, not
    /// just below `anchor`.
    ///
    /// Fails with [`AttachError::AnchorNotFound`] if no node holds `anchor`.
    /// Either way a failure leaves the tree as it was and hands the subtree
    /// back.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{AttachError, OrderedTree, Tree};
    ///
    /// let mut tree: OrderedTree<_> = [10, 5, 15, 2, 7].into_iter().collect();
    ///
    /// let previous = tree.attach_left_at(&5, Tree::leaf(3)).unwrap();
    /// assert_eq!(previous, Tree::leaf(2));
    ///
    /// // 6 is not below 5.
    /// let err = tree.attach_left_at(&5, Tree::leaf(6)).unwrap_err();
    /// assert!(matches!(err, AttachError::OrderViolation(_)));
    /// assert_eq!(tree.in_order(), vec![&3, &5, &7, &10, &15]);
    /// ```
    pub fn attach_left_at(
        &mut self,
        anchor: &T,
        subtree: impl Into<Tree<T>>,
    ) -> Result<Tree<T>, AttachError<T>> {
        self.attach_checked(Some(anchor), Side::Left, subtree.into())
    }

    /// Replaces the right subtree of the node holding `anchor`. See
    /// [`attach_left_at`][Self::attach_left_at].
    pub fn attach_right_at(
        &mut self,
        anchor: &T,
        subtree: impl Into<Tree<T>>,
    ) -> Result<Tree<T>, AttachError<T>> {
        self.attach_checked(Some(anchor), Side::Right, subtree.into())
    }

    /// Attach speculatively, verify the whole tree, and swap the old child
    /// back in if the check fails. `None` targets the root.
    fn attach_checked(
        &mut self,
        anchor: Option<&T>,
        side: Side,
        subtree: Tree<T>,
    ) -> Result<Tree<T>, AttachError<T>> {
        let target = match locate(&mut self.root, anchor) {
            Some(target) => target,
            None => return Err(AttachError::AnchorNotFound(subtree)),
        };
        let previous = target.attach(side, subtree)?;
        if is_ordered(&self.root) {
            return Ok(previous);
        }

        // Only the anchor's child changed, so the path down to it is the same.
        let target = locate(&mut self.root, anchor).expect("anchor was found before the attach");
        let rejected = target.attach(side, previous)?;
        Err(AttachError::OrderViolation(rejected))
    }

    /// Returns `true` if a value equal to `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        let mut current = &self.root;
        while let Tree::Node(n) = current {
            current = match value.cmp(n.value()) {
                cmp::Ordering::Less => n.left(),
                cmp::Ordering::Equal => return true,
                cmp::Ordering::Greater => n.right(),
            };
        }
        false
    }

    /// The smallest value, found by following left children to the end.
    pub fn minimum(&self) -> Option<&T> {
        let mut current = match &self.root {
            Tree::Empty => return None,
            Tree::Node(n) => n,
        };
        while let Tree::Node(left) = current.left() {
            current = left;
        }
        Some(current.value())
    }

    /// The largest value, found by following right children to the end.
    pub fn maximum(&self) -> Option<&T> {
        let mut current = match &self.root {
            Tree::Empty => return None,
            Tree::Node(n) => n,
        };
        while let Tree::Node(right) = current.right() {
            current = right;
        }
        Some(current.value())
    }

    /// Every value strictly less than `bound`, in no particular order.
    pub fn values_less_than(&self, bound: &T) -> Vec<&T> {
        let mut out = Vec::new();
        collect_less_than(&self.root, bound, &mut out);
        out
    }
}

/// Right subtrees of nodes at or above `bound` only hold larger values and
/// are skipped.
fn collect_less_than<'a, T: Ord>(tree: &'a Tree<T>, bound: &T, out: &mut Vec<&'a T>) {
    if let Tree::Node(n) = tree {
        collect_less_than(n.left(), bound, out);
        if n.value() < bound {
            out.push(n.value());
            collect_less_than(n.right(), bound, out);
        }
    }
}

fn insert<T: Ord>(tree: &mut Tree<T>, value: T) -> bool {
    match tree {
        Tree::Empty => {
            *tree = Tree::leaf(value);
            true
        }
        Tree::Node(n) => match value.cmp(n.value()) {
            cmp::Ordering::Less => insert(n.child_mut(Side::Left), value),
            cmp::Ordering::Equal => false,
            cmp::Ordering::Greater => insert(n.child_mut(Side::Right), value),
        },
    }
}

/// The subtree rooted at the node holding `anchor`, or the whole tree for
/// `None`.
fn locate<'a, T: Ord>(tree: &'a mut Tree<T>, anchor: Option<&T>) -> Option<&'a mut Tree<T>> {
    match anchor {
        None => Some(tree),
        Some(anchor) => find_mut(tree, anchor),
    }
}

fn find_mut<'a, T: Ord>(tree: &'a mut Tree<T>, anchor: &T) -> Option<&'a mut Tree<T>> {
    let ordering = match &*tree {
        Tree::Empty => return None,
        Tree::Node(n) => anchor.cmp(n.value()),
    };
    let side = match ordering {
        cmp::Ordering::Less => Side::Left,
        cmp::Ordering::Equal => return Some(tree),
        cmp::Ordering::Greater => Side::Right,
    };
    match tree {
        Tree::Empty => None,
        Tree::Node(n) => find_mut(n.child_mut(side), anchor),
    }
}

fn is_ordered<T: Ord>(tree: &Tree<T>) -> bool {
    within(tree, None, None)
}

/// Checks `lower < value < upper` at every node, narrowing the bounds on
/// the way down. `None` is unbounded.
fn within<T: Ord>(tree: &Tree<T>, lower: Option<&T>, upper: Option<&T>) -> bool {
    match tree {
        Tree::Empty => true,
        Tree::Node(n) => {
            let value = n.value();
            lower.map_or(true, |lower| lower < value)
                && upper.map_or(true, |upper| value < upper)
                && within(n.left(), lower, Some(value))
                && within(n.right(), Some(value), upper)
        }
    }
}

impl<T> From<OrderedTree<T>> for Tree<T> {
    fn from(tree: OrderedTree<T>) -> Self {
        tree.into_inner()
    }
}

/// Adopts a plain tree if it is already ordered.
///
/// ```
/// use bintree::{OrderedTree, Tree};
///
/// let tree = Tree::node(2, Tree::leaf(1), Tree::leaf(3));
/// assert!(OrderedTree::try_from(tree).is_ok());
///
/// let tree = Tree::node(2, Tree::leaf(3), Tree::leaf(1));
/// let rejected = OrderedTree::try_from(tree).unwrap_err();
/// assert_eq!(rejected.0.size(), 3);
/// ```
impl<T> TryFrom<Tree<T>> for OrderedTree<T>
where
    T: Ord,
{
    type Error = UnorderedTree<T>;

    fn try_from(root: Tree<T>) -> Result<Self, Self::Error> {
        if is_ordered(&root) {
            Ok(Self { root })
        } else {
            Err(UnorderedTree(root))
        }
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
