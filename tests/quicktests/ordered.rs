use bintree::{AttachError, OrderedTree, Tree};

use std::collections::BTreeSet;

quickcheck::quickcheck! {
    fn ordered_after_every_insert(xs: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        xs.into_iter().all(|x| {
            tree.insert(x);
            tree.is_ordered()
        })
    }
}

quickcheck::quickcheck! {
    fn in_order_is_sorted_and_deduplicated(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let set: BTreeSet<_> = xs.iter().collect();

        tree.in_order() == set.into_iter().collect::<Vec<_>>()
    }
}

quickcheck::quickcheck! {
    fn contains_iff_in_order(xs: Vec<i8>, probes: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let in_order = tree.in_order();

        xs.iter().chain(&probes).all(|x| tree.contains(x) == in_order.contains(&x))
    }
}

quickcheck::quickcheck! {
    fn level_of_absent_is_past_height(xs: Vec<i8>, probe: i8) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let level = tree.level_of(&probe);

        if tree.contains(&probe) {
            level >= 1 && level <= tree.height()
        } else {
            level > tree.height()
        }
    }
}

quickcheck::quickcheck! {
    // Attach a subtree built from `xs` on the left of a single-node tree.
    // It sticks exactly when every value is below the root.
    fn attach_left_keeps_or_restores(root: i8, xs: Vec<i8>) -> bool {
        let mut tree: OrderedTree<_> = std::iter::once(root).collect();
        let subtree: OrderedTree<_> = xs.iter().copied().collect();
        let fits = xs.iter().all(|x| *x < root);

        match tree.attach_left(subtree) {
            Ok(previous) => fits && previous.is_empty() && tree.is_ordered(),
            Err(AttachError::OrderViolation(rejected)) => {
                let distinct = xs.iter().collect::<BTreeSet<_>>().len();
                !fits && tree.is_leaf() && rejected.size() == distinct
            }
            Err(_) => false,
        }
    }
}

/// The open interval a new child of the node holding `anchor` has to fit in,
/// tracked down from the root. `None` is unbounded.
fn child_bounds(tree: &Tree<i8>, anchor: i8, left: bool) -> (Option<i8>, Option<i8>) {
    let (mut lower, mut upper) = (None, None);
    let mut current = tree;
    while let Ok(&value) = current.value() {
        if anchor < value {
            upper = Some(value);
            current = current.left().unwrap();
        } else if anchor > value {
            lower = Some(value);
            current = current.right().unwrap();
        } else if left {
            return (lower, Some(value));
        } else {
            return (Some(value), upper);
        }
    }
    (lower, upper)
}

quickcheck::quickcheck! {
    // Attach a subtree built from `ys` below some node already in the tree.
    // It sticks exactly when every value fits the bounds the node's
    // ancestors set for that child.
    fn attach_at_keeps_or_restores(xs: Vec<i8>, pick: usize, left: bool, ys: Vec<i8>) -> bool {
        if xs.is_empty() {
            return true;
        }
        let mut tree: OrderedTree<_> = xs.iter().copied().collect();
        let anchor = xs[pick % xs.len()];
        let (lower, upper) = child_bounds(&tree, anchor, left);
        let fits = ys
            .iter()
            .all(|y| lower.map_or(true, |l| l < *y) && upper.map_or(true, |u| *y < u));

        let subtree: OrderedTree<_> = ys.iter().copied().collect();
        let before = tree.clone();
        let result = if left {
            tree.attach_left_at(&anchor, subtree.clone())
        } else {
            tree.attach_right_at(&anchor, subtree.clone())
        };

        match result {
            Ok(_) => fits && tree.is_ordered() && ys.iter().all(|y| tree.contains(y)),
            Err(AttachError::OrderViolation(rejected)) => {
                !fits && tree == before && rejected == subtree.into_inner()
            }
            Err(_) => false,
        }
    }
}

quickcheck::quickcheck! {
    fn copy_is_independent(xs: Vec<i8>) -> bool {
        if xs.is_empty() {
            return true;
        }
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let mut copy: Tree<_> = tree.clone().into_inner();

        let same = copy.in_order() == tree.in_order()
            && copy.height() == tree.height()
            && copy.size() == tree.size();
        let cut = copy.attach_left(Tree::new()).is_ok() && copy.attach_right(Tree::new()).is_ok();

        same && cut
            && copy.size() == 1
            && tree.size() == xs.iter().collect::<BTreeSet<_>>().len()
            && tree.is_ordered()
    }
}
