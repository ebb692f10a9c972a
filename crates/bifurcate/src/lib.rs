//! Binary-tree coordinates and stack-free structural algorithms.
//!
//! A tree is a graph of nodes, each with a value and optional left/right
//! links, kept in a [`NodeStore`]. Nodes are addressed by [`NodeId`] handles;
//! a [`Coordinate`] is an optional handle, `None` being the empty tree.
//!
//! On top of that surface the crate provides:
//!
//! - [`Traversal`] / [`visit_all`]: pre-, in- and post-order walks driven by
//!   an explicit `(node, role)` state machine instead of recursion.
//! - [`copy`] / [`copy_into`]: linear-time deep copy using O(1) extra
//!   coordinates. The worklist is threaded through the copy being built.
//! - [`destroy`]: linear-time reclamation with the same workspace bound.
//!
//! Neither algorithm recurses, so a tree that degenerates into a list of any
//! length is handled without growing the call stack.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Bifurcate`], [`NodeStore`], [`NodeId`], [`Coordinate`] |
//! [`arena`] | [`Arena`], the default slot-vector store |
//! [`traversal`] | [`Visit`], [`step`], [`Traversal`], [`visit_all`] |
//! [`copy`](mod@copy) | [`copy`], [`copy_into`] |
//! [`destroy`](mod@destroy) | [`destroy`] |
//! [`util`] | `weight`, `height`, `find`, `first`, … |
//! [`print`] | [`print_tree`] |
//! [`tree`] | [`Tree`], a value-semantics wrapper |
//!
//! # Example
//!
//! ```
//! use bifurcate::{copy, destroy, Arena, NodeStore, Traversal, Visit};
//!
//! let mut arena = Arena::new();
//! let l = arena.leaf(1).unwrap();
//! let r = arena.leaf(2).unwrap();
//! let root = arena.construct(0, Some(l), Some(r)).unwrap();
//!
//! let dup = copy(&mut arena, Some(root)).unwrap();
//! assert_eq!(destroy(&mut arena, Some(root)), 3);
//!
//! let values: Vec<i32> = Traversal::new(&arena, dup, Visit::In)
//!     .map(|c| arena.node(c).v)
//!     .collect();
//! assert_eq!(values, vec![1, 0, 2]);
//! ```

pub mod arena;
mod chain;
pub mod copy;
pub mod destroy;
pub mod error;
pub mod print;
pub mod traversal;
pub mod tree;
pub mod types;
pub mod util;

pub use arena::{Arena, ArenaNode};
pub use copy::{copy, copy_into};
pub use destroy::destroy;
pub use error::StoreError;
pub use print::print_tree;
pub use traversal::{step, visit_all, Traversal, Visit};
pub use tree::Tree;
pub use types::{is_empty, Bifurcate, Coordinate, NodeId, NodeStore};
