use std::fmt;

use crate::arena::Arena;
use crate::copy::copy_into;
use crate::destroy::destroy;
use crate::error::StoreError;
use crate::print::print_tree;
use crate::traversal::{Traversal, Visit};
use crate::types::{Bifurcate, Coordinate, NodeId, NodeStore};
use crate::util::{find, height, isomorphic, values};

/// Binary tree with value semantics.
///
/// Owns its nodes in a private [`Arena`] that holds exactly the nodes of the
/// tree. Cloning deep-copies with [`copy_into`], [`Tree::clear`] reclaims
/// with [`destroy`], and moving out with [`Tree::take`] leaves an empty tree
/// behind. Dropping releases the arena in one go.
///
/// Allocation failure is fatal for the operations that build nodes: they
/// panic with the [`StoreError`].
pub struct Tree<T> {
    root: Coordinate,
    arena: Arena<T>,
}

#[cold]
fn fatal(err: StoreError) -> ! {
    panic!("tree allocation failed: {err}")
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            arena: Arena::new(),
        }
    }

    pub fn leaf(value: T) -> Self {
        let mut arena = Arena::with_capacity(1);
        let root = arena.leaf(value).unwrap_or_else(|err| fatal(err));
        Self {
            root: Some(root),
            arena,
        }
    }

    pub fn root(&self) -> Coordinate {
        self.root
    }

    /// The backing store, for coordinate-level access.
    pub fn store(&self) -> &Arena<T> {
        &self.arena
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Node count.
    pub fn weight(&self) -> usize {
        self.arena.len()
    }

    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    pub fn get(&self, c: NodeId) -> &T {
        self.arena.value(c)
    }

    /// Node values in `order`.
    pub fn iter(&self, order: Visit) -> impl Iterator<Item = &T> + '_ {
        Traversal::new(&self.arena, self.root, order).map(move |c| self.arena.value(c))
    }

    /// Moves the tree out, leaving an empty one behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Reclaims every node; the arena is kept for reuse.
    pub fn clear(&mut self) {
        destroy(&mut self.arena, self.root.take());
    }

    pub fn to_string(&self, tab: &str) -> String
    where
        T: fmt::Display,
    {
        match self.root {
            Some(_) => format!(
                "Tree{}",
                print_tree(&self.arena, self.root, tab, |v| v.to_string())
            ),
            None => "Tree ∅".to_string(),
        }
    }
}

impl<T: Clone> Tree<T> {
    /// Builds `value` with `left` and `right` as subtrees.
    ///
    /// The nodes of the smaller subtree are copied into the larger one's
    /// arena, so the cost is linear in the smaller side.
    pub fn join(value: T, left: Tree<T>, right: Tree<T>) -> Self {
        let left_larger = left.weight() >= right.weight();
        let (mut base, other) = if left_larger {
            (left, right)
        } else {
            (right, left)
        };
        let grafted = copy_into(&other.arena, other.root, &mut base.arena)
            .unwrap_or_else(|err| fatal(err));
        let (l, r) = if left_larger {
            (base.root, grafted)
        } else {
            (grafted, base.root)
        };
        let root = base
            .arena
            .construct(value, l, r)
            .unwrap_or_else(|err| fatal(err));
        Self {
            root: Some(root),
            arena: base.arena,
        }
    }

    pub fn values(&self, order: Visit) -> Vec<T> {
        values(&self.arena, self.root, order)
    }
}

impl<T: PartialEq> Tree<T> {
    pub fn find(&self, value: &T) -> Coordinate {
        find(&self.arena, self.root, value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        let mut arena = Arena::with_capacity(self.weight());
        let root = copy_into(&self.arena, self.root, &mut arena).unwrap_or_else(|err| fatal(err));
        Self { root, arena }
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        isomorphic(&self.arena, self.root, &other.arena, other.root)
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dump = print_tree(&self.arena, self.root, "", |v| format!("{v:?}"));
        write!(f, "Tree{dump}")
    }
}
