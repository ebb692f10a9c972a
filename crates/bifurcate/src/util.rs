//! Whole-tree queries built on [`Traversal`].
//!
//! None of these recurse, so they are safe on arbitrarily skewed trees.

use crate::traversal::{Traversal, Visit};
use crate::types::{Bifurcate, Coordinate, NodeId};

/// Leftmost node of the tree.
pub fn first<S: Bifurcate + ?Sized>(store: &S, root: Coordinate) -> Coordinate {
    let mut curr = root;
    while let Some(c) = curr {
        match store.left(c) {
            Some(l) => curr = Some(l),
            None => return Some(c),
        }
    }
    curr
}

/// Rightmost node of the tree.
pub fn last<S: Bifurcate + ?Sized>(store: &S, root: Coordinate) -> Coordinate {
    let mut curr = root;
    while let Some(c) = curr {
        match store.right(c) {
            Some(r) => curr = Some(r),
            None => return Some(c),
        }
    }
    curr
}

pub fn for_each<S, F>(store: &S, root: Coordinate, order: Visit, mut f: F)
where
    S: Bifurcate + ?Sized,
    F: FnMut(NodeId, &S::Value),
{
    for c in Traversal::new(store, root, order) {
        f(c, store.value(c));
    }
}

/// Values of the tree, cloned, in `order`.
pub fn values<S>(store: &S, root: Coordinate, order: Visit) -> Vec<S::Value>
where
    S: Bifurcate + ?Sized,
    S::Value: Clone,
{
    Traversal::new(store, root, order)
        .map(|c| store.value(c).clone())
        .collect()
}

/// First node in pre-order whose value satisfies `pred`.
pub fn find_if<S, P>(store: &S, root: Coordinate, mut pred: P) -> Coordinate
where
    S: Bifurcate + ?Sized,
    P: FnMut(&S::Value) -> bool,
{
    Traversal::new(store, root, Visit::Pre).find(|&c| pred(store.value(c)))
}

/// First node in pre-order holding `value`.
pub fn find<S>(store: &S, root: Coordinate, value: &S::Value) -> Coordinate
where
    S: Bifurcate + ?Sized,
    S::Value: PartialEq,
{
    find_if(store, root, |v| v == value)
}

pub fn count_if<S, P>(store: &S, root: Coordinate, mut pred: P) -> usize
where
    S: Bifurcate + ?Sized,
    P: FnMut(&S::Value) -> bool,
{
    Traversal::new(store, root, Visit::Pre)
        .filter(|&c| pred(store.value(c)))
        .count()
}

/// Number of nodes in the tree.
pub fn weight<S: Bifurcate + ?Sized>(store: &S, root: Coordinate) -> usize {
    Traversal::new(store, root, Visit::Pre).count()
}

/// Nodes on the longest root-to-leaf path; 0 for the empty tree.
pub fn height<S: Bifurcate + ?Sized>(store: &S, root: Coordinate) -> usize {
    let mut walk = Traversal::new(store, root, Visit::Pre);
    let mut max = 0;
    while walk.next().is_some() {
        max = max.max(walk.depth() + 1);
    }
    max
}

/// Same shape and equal values at every position.
///
/// The two trees may live in different stores.
pub fn isomorphic<A, B>(a: &A, a_root: Coordinate, b: &B, b_root: Coordinate) -> bool
where
    A: Bifurcate + ?Sized,
    B: Bifurcate<Value = A::Value> + ?Sized,
    A::Value: PartialEq,
{
    let mut lhs = Traversal::new(a, a_root, Visit::Pre);
    let mut rhs = Traversal::new(b, b_root, Visit::Pre);
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) => {
                if a.has_left(x) != b.has_left(y)
                    || a.has_right(x) != b.has_right(y)
                    || a.value(x) != b.value(y)
                {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;
    use crate::types::NodeStore;

    fn fixture(arena: &mut Arena<i32>) -> NodeId {
        //      10
        //     /  \
        //    5    20
        //     \
        //      7
        let n7 = arena.leaf(7).unwrap();
        let n5 = arena.construct(5, None, Some(n7)).unwrap();
        let n20 = arena.leaf(20).unwrap();
        arena.construct(10, Some(n5), Some(n20)).unwrap()
    }

    #[test]
    fn first_and_last() {
        let mut arena = Arena::new();
        let root = fixture(&mut arena);
        assert_eq!(first(&arena, Some(root)).map(|c| *arena.value(c)), Some(5));
        assert_eq!(last(&arena, Some(root)).map(|c| *arena.value(c)), Some(20));
        assert_eq!(first(&arena, None), None);
        assert_eq!(last(&arena, None), None);
    }

    #[test]
    fn weight_height_and_search() {
        let mut arena = Arena::new();
        let root = fixture(&mut arena);
        assert_eq!(weight(&arena, Some(root)), 4);
        assert_eq!(height(&arena, Some(root)), 3);
        assert_eq!(height(&arena, None), 0);
        let seven = find(&arena, Some(root), &7).unwrap();
        assert_eq!(*arena.value(seven), 7);
        assert_eq!(find(&arena, Some(root), &8), None);
        assert_eq!(count_if(&arena, Some(root), |v| v % 2 == 0), 2);
        assert_eq!(
            find_if(&arena, Some(root), |v| *v > 6).map(|c| *arena.value(c)),
            Some(10)
        );
    }

    #[test]
    fn for_each_visits_in_order() {
        let mut arena = Arena::new();
        let root = fixture(&mut arena);
        let mut seen = Vec::new();
        for_each(&arena, Some(root), Visit::In, |_, v| seen.push(*v));
        assert_eq!(seen, vec![5, 7, 10, 20]);
        assert_eq!(values(&arena, Some(root), Visit::Post), vec![7, 5, 20, 10]);
    }

    #[test]
    fn isomorphic_checks_shape_not_just_values() {
        let mut arena = Arena::new();
        let a = arena.construct(1, None, None).unwrap();
        let a_child = arena.leaf(2).unwrap();
        arena.set_left(a, Some(a_child));
        let b_child = arena.leaf(2).unwrap();
        let b = arena.construct(1, None, Some(b_child)).unwrap();
        assert!(!isomorphic(&arena, Some(a), &arena, Some(b)));
        assert!(isomorphic(&arena, Some(a), &arena, Some(a)));
        assert!(isomorphic(&arena, None, &arena, None));
        assert!(!isomorphic(&arena, None, &arena, Some(b)));
    }
}
