use bintree::{AttachError, OrderedTree, Tree};

fn sample() -> OrderedTree<i32> {
    let mut tree = OrderedTree::new();
    for x in [10, 5, 15, 2, 7, 12, 17] {
        assert!(tree.insert(x));
    }
    tree
}

#[test]
fn insert_scenario() {
    let tree = sample();

    assert_eq!(tree.minimum(), Some(&2));
    assert_eq!(tree.maximum(), Some(&17));
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.size(), 7);
    assert!(tree.is_ordered());
    assert_eq!(tree.level_of(&12), 3);
    assert!(tree.level_of(&99) > 3);
}

#[test]
fn attach_scenario() {
    let mut tree = sample();

    let mut small = OrderedTree::new();
    small.insert(8);
    small.insert(6);
    assert!(tree.attach_left(small).is_ok());
    assert!(tree.is_ordered());

    let before = tree.clone();
    let mut bad = OrderedTree::new();
    bad.insert(11);
    match tree.attach_left(bad) {
        Err(AttachError::OrderViolation(rejected)) => assert_eq!(rejected, Tree::leaf(11)),
        other => panic!("expected an order violation, got {:?}", other),
    }
    assert_eq!(tree, before);
    assert_eq!(tree.left().unwrap().in_order(), vec![&6, &8]);
}

#[test]
fn plain_tree_walkthrough() {
    //        1
    //      /   \
    //     2     3
    //    / \   / \
    //   4   5 6   7
    //      /
    //     8
    let mut root = Tree::leaf(1);
    let mut n2 = Tree::leaf(2);
    let mut n3 = Tree::leaf(3);
    let mut n5 = Tree::leaf(5);
    n5.attach_left(Tree::leaf(8)).unwrap();
    n2.attach_left(Tree::leaf(4)).unwrap();
    n2.attach_right(n5).unwrap();
    n3.attach_left(Tree::leaf(6)).unwrap();
    n3.attach_right(Tree::leaf(7)).unwrap();
    root.attach_left(n2).unwrap();
    root.attach_right(n3).unwrap();

    assert_eq!(root.height(), 4);
    assert_eq!(root.size(), 8);
    assert_eq!(root.level_order(), vec![&1, &2, &3, &4, &5, &6, &7, &8]);
    assert_eq!(root.level_of(&8), 4);

    let copy = root.clone();
    assert_eq!(copy.level_of(&8), 4);
    assert_eq!(copy.in_order(), root.in_order());
}
