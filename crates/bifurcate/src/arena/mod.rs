//! Slot-vector node store.
//!
//! Nodes are kept in a `Vec` of slots. Destroyed slots go on a free list and
//! bump their generation, so a [`NodeId`] that outlived its node no longer
//! resolves. Resolving a stale id panics: it is a caller bug, not a
//! recoverable condition. A slot whose generation reaches `u32::MAX` is
//! retired instead of reused, so generations never wrap.

mod node;

pub use node::ArenaNode;

use crate::error::StoreError;
use crate::types::{Bifurcate, Coordinate, NodeId, NodeStore};

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied { generation: u32, node: ArenaNode<T> },
    Vacant { generation: u32, next_free: Option<u32> },
    Retired,
}

/// Default [`NodeStore`]: individually reclaimable nodes in one allocation.
#[derive(Clone, Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<u32>,
    len: usize,
    constructed: usize,
    destroyed: usize,
    limit: Option<usize>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
            constructed: 0,
            destroyed: 0,
            limit: None,
        }
    }

    /// Pre-sizes the slot vector for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Bounded arena: `construct` fails once `limit` nodes are live.
    /// Nothing is reserved up front.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new()
        }
    }

    /// Live node count.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total successful `construct` calls over the arena's lifetime.
    pub fn constructed(&self) -> usize {
        self.constructed
    }

    /// Total nodes reclaimed, by `destroy` or `clear`.
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    pub fn capacity_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Whether `c` still names a live node of this arena.
    pub fn contains(&self, c: NodeId) -> bool {
        matches!(
            self.slots.get(c.index as usize),
            Some(Slot::Occupied { generation, .. }) if *generation == c.generation
        )
    }

    pub fn node(&self, c: NodeId) -> &ArenaNode<T> {
        match self.slots.get(c.index as usize) {
            Some(Slot::Occupied { generation, node }) if *generation == c.generation => node,
            _ => panic!("coordinate {c:?} does not name a live node"),
        }
    }

    pub fn node_mut(&mut self, c: NodeId) -> &mut ArenaNode<T> {
        match self.slots.get_mut(c.index as usize) {
            Some(Slot::Occupied { generation, node }) if *generation == c.generation => node,
            _ => panic!("coordinate {c:?} does not name a live node"),
        }
    }

    pub fn value_mut(&mut self, c: NodeId) -> &mut T {
        &mut self.node_mut(c).v
    }

    /// Bulk release: every live node is reclaimed and every id handed out so
    /// far goes stale. Slots are kept for reuse.
    pub fn clear(&mut self) {
        let mut free = None;
        for (i, slot) in self.slots.iter_mut().enumerate().rev() {
            let next = match slot {
                Slot::Occupied { generation, .. } => generation.checked_add(1),
                Slot::Vacant { generation, .. } => Some(*generation),
                Slot::Retired => None,
            };
            *slot = match next {
                Some(generation) => {
                    let vacant = Slot::Vacant {
                        generation,
                        next_free: free,
                    };
                    free = Some(i as u32);
                    vacant
                }
                None => Slot::Retired,
            };
        }
        self.free = free;
        self.destroyed += self.len;
        self.len = 0;
    }
}

impl<T> Bifurcate for Arena<T> {
    type Value = T;

    #[inline]
    fn value(&self, c: NodeId) -> &T {
        &self.node(c).v
    }

    #[inline]
    fn left(&self, c: NodeId) -> Coordinate {
        self.node(c).l
    }

    #[inline]
    fn right(&self, c: NodeId) -> Coordinate {
        self.node(c).r
    }

    #[inline]
    fn set_left(&mut self, c: NodeId, child: Coordinate) {
        self.node_mut(c).l = child;
    }

    #[inline]
    fn set_right(&mut self, c: NodeId, child: Coordinate) {
        self.node_mut(c).r = child;
    }
}

impl<T> NodeStore for Arena<T> {
    fn construct(
        &mut self,
        value: T,
        left: Coordinate,
        right: Coordinate,
    ) -> Result<NodeId, StoreError> {
        if let Some(limit) = self.limit {
            if self.len >= limit {
                return Err(StoreError::Exhausted { limit });
            }
        }
        let node = ArenaNode::new(value, left, right);
        let id = match self.free {
            Some(index) => {
                let generation = match self.slots[index as usize] {
                    Slot::Vacant {
                        generation,
                        next_free,
                    } => {
                        self.free = next_free;
                        generation
                    }
                    _ => unreachable!("free list points at a live or retired slot"),
                };
                self.slots[index as usize] = Slot::Occupied { generation, node };
                NodeId::new(index, generation)
            }
            None => {
                let index = u32::try_from(self.slots.len()).map_err(|_| StoreError::Exhausted {
                    limit: u32::MAX as usize,
                })?;
                self.slots.push(Slot::Occupied {
                    generation: 0,
                    node,
                });
                NodeId::new(index, 0)
            }
        };
        self.len += 1;
        self.constructed += 1;
        Ok(id)
    }

    fn destroy(&mut self, c: NodeId) -> T {
        let index = c.index as usize;
        let live = matches!(
            self.slots.get(index),
            Some(Slot::Occupied { generation, .. }) if *generation == c.generation
        );
        if !live {
            panic!("coordinate {c:?} destroyed twice or never constructed");
        }
        let vacant = match c.generation.checked_add(1) {
            Some(generation) => Slot::Vacant {
                generation,
                next_free: self.free,
            },
            None => Slot::Retired,
        };
        let reusable = matches!(vacant, Slot::Vacant { .. });
        let Slot::Occupied { node, .. } = std::mem::replace(&mut self.slots[index], vacant) else {
            unreachable!("slot checked occupied above")
        };
        if reusable {
            self.free = Some(c.index);
        }
        self.len -= 1;
        self.destroyed += 1;
        node.v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_wires_children() {
        let mut arena = Arena::new();
        let l = arena.leaf(1).unwrap();
        let r = arena.leaf(2).unwrap();
        let root = arena.construct(3, Some(l), Some(r)).unwrap();
        assert_eq!(arena.left(root), Some(l));
        assert_eq!(arena.right(root), Some(r));
        assert!(arena.has_left(root));
        assert!(!arena.has_left(l));
        assert_eq!(*arena.value(root), 3);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn destroyed_slot_is_reused_with_new_generation() {
        let mut arena = Arena::new();
        let a = arena.leaf("a").unwrap();
        assert_eq!(arena.destroy(a), "a");
        assert!(!arena.contains(a));
        let b = arena.leaf("b").unwrap();
        assert_eq!(a.index(), b.index());
        assert_ne!(a, b);
        assert!(arena.contains(b));
        assert_eq!(arena.constructed(), 2);
        assert_eq!(arena.destroyed(), 1);
    }

    #[test]
    #[should_panic(expected = "destroyed twice")]
    fn double_destroy_panics() {
        let mut arena = Arena::new();
        let a = arena.leaf(0).unwrap();
        arena.destroy(a);
        arena.destroy(a);
    }

    #[test]
    #[should_panic(expected = "does not name a live node")]
    fn stale_read_panics() {
        let mut arena = Arena::new();
        let a = arena.leaf(0).unwrap();
        arena.destroy(a);
        let _ = arena.left(a);
    }

    #[test]
    fn limit_is_enforced_on_live_nodes() {
        let mut arena = Arena::with_limit(2);
        let a = arena.leaf(1).unwrap();
        arena.leaf(2).unwrap();
        assert_eq!(arena.leaf(3), Err(StoreError::Exhausted { limit: 2 }));
        arena.destroy(a);
        assert!(arena.leaf(3).is_ok());
        assert_eq!(arena.capacity_limit(), Some(2));
    }

    #[test]
    fn clear_invalidates_every_id() {
        let mut arena = Arena::new();
        let a = arena.leaf(1).unwrap();
        let b = arena.leaf(2).unwrap();
        arena.destroy(b);
        arena.clear();
        assert!(arena.is_empty());
        assert!(!arena.contains(a));
        assert_eq!(arena.destroyed(), 2);
        let c = arena.leaf(3).unwrap();
        assert_eq!(c.index(), 0);
        assert_ne!(c, a);
    }

    #[test]
    fn limit_does_not_reserve_memory() {
        let mut arena = Arena::with_limit(usize::MAX);
        assert_eq!(arena.capacity_limit(), Some(usize::MAX));
        let a = arena.leaf(1u8).unwrap();
        assert_eq!(arena.destroy(a), 1);
        assert!(arena.is_empty());
    }

    fn last_generation_arena() -> (Arena<u8>, NodeId) {
        let mut arena = Arena::new();
        arena.slots.push(Slot::Occupied {
            generation: u32::MAX,
            node: ArenaNode::new(7, None, None),
        });
        arena.len = 1;
        (arena, NodeId::new(0, u32::MAX))
    }

    #[test]
    fn exhausted_generation_retires_slot_on_destroy() {
        let (mut arena, old) = last_generation_arena();
        assert_eq!(arena.destroy(old), 7);
        assert!(!arena.contains(old));
        let fresh = arena.leaf(8).unwrap();
        assert_eq!(fresh.index(), 1);
        assert!(!arena.contains(NodeId::new(0, 0)));
        arena.destroy(fresh);
        assert_eq!(arena.leaf(9).unwrap().index(), 1);
    }

    #[test]
    fn exhausted_generation_retires_slot_on_clear() {
        let (mut arena, old) = last_generation_arena();
        arena.clear();
        assert!(!arena.contains(old));
        assert_eq!(arena.destroyed(), 1);
        assert_eq!(arena.leaf(8).unwrap().index(), 1);
    }

    #[test]
    #[should_panic(expected = "destroyed twice")]
    fn retired_slot_rejects_stale_destroy() {
        let (mut arena, old) = last_generation_arena();
        arena.destroy(old);
        arena.destroy(old);
    }
}
