//! Coordinate and node-store traits.
//!
//! Nodes live in a store and are addressed by [`NodeId`] handles. A
//! [`Coordinate`] is an optional handle: `None` is the empty coordinate, a
//! first-class value rather than a failure. Operations with a "not empty"
//! precondition take a [`NodeId`] so the precondition is carried by the type.

use std::fmt;

use crate::error::StoreError;

/// Handle to a single node inside a store.
///
/// The generation distinguishes a live node from a former occupant of the
/// same slot, so a stale handle is caught instead of silently aliasing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Stores other than [`crate::Arena`] mint their own ids; a store that
    /// never reuses slots can leave `generation` at 0.
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index inside the owning store.
    pub fn index(self) -> u32 {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// A node handle or the empty coordinate.
pub type Coordinate = Option<NodeId>;

/// Returns `true` for the empty coordinate.
#[inline]
pub fn is_empty(c: Coordinate) -> bool {
    c.is_none()
}

/// Read/write surface of a binary-tree-shaped node graph.
///
/// Reading an absent child is not an error: it is the empty coordinate.
/// `set_left`/`set_right` only rewire a link; keeping the graph a tree is the
/// caller's job.
pub trait Bifurcate {
    type Value;

    fn value(&self, c: NodeId) -> &Self::Value;
    fn left(&self, c: NodeId) -> Coordinate;
    fn right(&self, c: NodeId) -> Coordinate;
    fn set_left(&mut self, c: NodeId, child: Coordinate);
    fn set_right(&mut self, c: NodeId, child: Coordinate);

    #[inline]
    fn has_left(&self, c: NodeId) -> bool {
        self.left(c).is_some()
    }

    #[inline]
    fn has_right(&self, c: NodeId) -> bool {
        self.right(c).is_some()
    }
}

/// Node allocation strategy.
///
/// Node-granular: `construct` adopts the given children without copying them
/// and `destroy` reclaims exactly one node, never its subtree. Whole-tree
/// work is done by [`crate::copy`] and [`crate::destroy`].
pub trait NodeStore: Bifurcate {
    /// Allocates one node wired to already-owned children.
    fn construct(
        &mut self,
        value: Self::Value,
        left: Coordinate,
        right: Coordinate,
    ) -> Result<NodeId, StoreError>;

    /// Reclaims the single node `c` and hands back its value.
    ///
    /// Panics if `c` was already destroyed.
    fn destroy(&mut self, c: NodeId) -> Self::Value;

    #[inline]
    fn leaf(&mut self, value: Self::Value) -> Result<NodeId, StoreError> {
        self.construct(value, None, None)
    }
}
