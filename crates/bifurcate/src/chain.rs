//! Worklist threaded through the left links of the nodes it holds.
//!
//! Copy and destroy both need a stack of "nodes whose right side is still
//! owed work". Instead of allocating one, the left link of each such node
//! stores the next entry. While a node is on the chain its left link means
//! "next pending", never "left child"; its right link is untouched and is
//! only readable through the [`Pending`] token handed out by [`PendingChain::pop`].

use crate::types::{Bifurcate, Coordinate, NodeId};

pub(crate) struct PendingChain {
    head: Coordinate,
}

impl PendingChain {
    pub(crate) fn new() -> Self {
        Self { head: None }
    }

    /// Threads `c` on top of the chain. Overwrites `c`'s left link, so the
    /// caller must have read it already.
    pub(crate) fn push<S: Bifurcate + ?Sized>(&mut self, store: &mut S, c: NodeId) {
        store.set_left(c, self.head);
        self.head = Some(c);
    }

    /// Unthreads the top node. Its left link is reset to empty.
    pub(crate) fn pop<S: Bifurcate + ?Sized>(&mut self, store: &mut S) -> Option<Pending> {
        let top = self.head?;
        self.head = store.left(top);
        store.set_left(top, None);
        Some(Pending(top))
    }
}

/// A node just taken off a [`PendingChain`].
///
/// Its left link is empty and its right link still carries whatever the
/// owning algorithm parked there.
#[must_use]
pub(crate) struct Pending(NodeId);

impl Pending {
    pub(crate) fn id(&self) -> NodeId {
        self.0
    }

    /// Reads and clears the parked right link.
    pub(crate) fn take_right<S: Bifurcate + ?Sized>(&self, store: &mut S) -> Coordinate {
        let r = store.right(self.0);
        store.set_right(self.0, None);
        r
    }

    /// Writes both final links; the node is no longer pending.
    pub(crate) fn finish<S: Bifurcate + ?Sized>(
        self,
        store: &mut S,
        left: Coordinate,
        right: Coordinate,
    ) {
        store.set_left(self.0, left);
        store.set_right(self.0, right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;
    use crate::types::NodeStore;

    #[test]
    fn pop_returns_nodes_last_in_first_out() {
        let mut arena = Arena::new();
        let a = arena.leaf('a').unwrap();
        let b = arena.leaf('b').unwrap();
        let mut chain = PendingChain::new();
        chain.push(&mut arena, a);
        chain.push(&mut arena, b);
        assert_eq!(arena.left(b), Some(a));
        assert_eq!(chain.pop(&mut arena).map(|p| p.id()), Some(b));
        assert_eq!(arena.left(b), None);
        assert_eq!(chain.pop(&mut arena).map(|p| p.id()), Some(a));
        assert!(chain.pop(&mut arena).is_none());
    }

    #[test]
    fn right_link_survives_the_chain() {
        let mut arena = Arena::new();
        let r = arena.leaf(2).unwrap();
        let l = arena.leaf(1).unwrap();
        let root = arena.construct(0, Some(l), Some(r)).unwrap();
        let mut chain = PendingChain::new();
        chain.push(&mut arena, root);
        let pending = chain.pop(&mut arena).unwrap();
        assert_eq!(pending.take_right(&mut arena), Some(r));
        assert_eq!(arena.right(root), None);
        pending.finish(&mut arena, Some(l), Some(r));
        assert_eq!(arena.left(root), Some(l));
        assert_eq!(arena.right(root), Some(r));
    }
}
