//! The plain nested form of a tree, for handing to something that draws it.

/// One node of an exported tree: its value and its (possibly absent)
/// children, nested exactly as in the tree it was exported from.
///
/// With the `serde` feature enabled this serializes as
/// `{"value": .., "left": .., "right": ..}` with `null` for a missing child.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Shape<T> {
    /// The node's value.
    pub value: T,
    /// The left child, if there is one.
    pub left: Option<Box<Shape<T>>>,
    /// The right child, if there is one.
    pub right: Option<Box<Shape<T>>>,
}

impl<T> Shape<T> {
    /// Applies `f` to every value, keeping the structure.
    pub fn map<U, F>(self, f: F) -> Shape<U>
    where
        F: Fn(T) -> U,
    {
        self.map_with(&f)
    }

    fn map_with<U, F>(self, f: &F) -> Shape<U>
    where
        F: Fn(T) -> U,
    {
        Shape {
            value: f(self.value),
            left: self.left.map(|l| Box::new(l.map_with(f))),
            right: self.right.map(|r| Box::new(r.map_with(f))),
        }
    }
}
