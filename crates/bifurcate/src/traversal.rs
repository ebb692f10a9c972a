//! Non-recursive pre/in/post-order walk.
//!
//! Nodes carry no parent link, so the walk keeps the ancestors of the current
//! node in an explicit path. Every node is reached in three roles
//! ([`Visit::Pre`], [`Visit::In`], [`Visit::Post`]) and [`step`] moves from
//! one `(node, role)` state to the next:
//!
//! | state | has child on that side | otherwise |
//! |-------|------------------------|-----------|
//! | `(c, Pre)`  | `(c.left, Pre)`, push `c`  | `(c, In)` |
//! | `(c, In)`   | `(c.right, Pre)`, push `c` | `(c, Post)` |
//! | `(c, Post)` | - | pop `p`: `(p, In)` if `c` was `p.left`, else `(p, Post)` |
//!
//! The walk ends after `(root, Post)`: the path is empty at that point.

use crate::types::{Bifurcate, Coordinate, NodeId};

/// Role of a node at a point of the walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visit {
    /// Before the left subtree.
    Pre,
    /// Between the subtrees.
    In,
    /// After both subtrees.
    Post,
}

/// Advances the walk by one state.
///
/// `path` holds the ancestors of `c`, nearest last. Returns `None` once `c`
/// is left in the `Post` role with no ancestor remaining.
pub fn step<S: Bifurcate + ?Sized>(
    store: &S,
    c: NodeId,
    tag: Visit,
    path: &mut Vec<NodeId>,
) -> Option<(NodeId, Visit)> {
    match tag {
        Visit::Pre => match store.left(c) {
            Some(l) => {
                path.push(c);
                Some((l, Visit::Pre))
            }
            None => Some((c, Visit::In)),
        },
        Visit::In => match store.right(c) {
            Some(r) => {
                path.push(c);
                Some((r, Visit::Pre))
            }
            None => Some((c, Visit::Post)),
        },
        Visit::Post => {
            let parent = path.pop()?;
            if store.left(parent) == Some(c) {
                Some((parent, Visit::In))
            } else {
                Some((parent, Visit::Post))
            }
        }
    }
}

/// A one-shot walk over the tree rooted at a coordinate.
///
/// As an [`Iterator`] it yields the nodes reached in the requested role,
/// which gives pre-, in- or post-order. [`Traversal::step`] exposes every
/// state instead.
pub struct Traversal<'a, S: Bifurcate + ?Sized> {
    store: &'a S,
    root: Coordinate,
    order: Visit,
    current: Option<(NodeId, Visit)>,
    started: bool,
    path: Vec<NodeId>,
}

impl<'a, S: Bifurcate + ?Sized> Traversal<'a, S> {
    pub fn new(store: &'a S, root: Coordinate, order: Visit) -> Self {
        Self {
            store,
            root,
            order,
            current: None,
            started: false,
            path: Vec::new(),
        }
    }

    /// Moves to the next `(node, role)` state and returns it.
    pub fn step(&mut self) -> Option<(NodeId, Visit)> {
        if !self.started {
            self.started = true;
            self.current = self.root.map(|r| (r, Visit::Pre));
        } else if let Some((c, tag)) = self.current {
            self.current = step(self.store, c, tag, &mut self.path);
        }
        self.current
    }

    /// Number of ancestors of the current node.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Nearest ancestor of the current node.
    pub fn parent(&self) -> Coordinate {
        self.path.last().copied()
    }

    pub fn order(&self) -> Visit {
        self.order
    }
}

impl<S: Bifurcate + ?Sized> Iterator for Traversal<'_, S> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some((c, tag)) = self.step() {
            if tag == self.order {
                return Some(c);
            }
        }
        None
    }
}

/// Calls `visitor` on every node of the tree, in `order`.
pub fn visit_all<S, F>(store: &S, root: Coordinate, order: Visit, mut visitor: F)
where
    S: Bifurcate + ?Sized,
    F: FnMut(NodeId),
{
    for c in Traversal::new(store, root, order) {
        visitor(c);
    }
}
