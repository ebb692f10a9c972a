//! Bounded-workspace tree copy.
//!
//! After Lee (1980). Every copy node starts out *pending*: its left link
//! threads the worklist and its right link points at the source node it
//! mirrors. Popping a pending node reads the source's children, builds their
//! (pending) copies, writes the popped node's final links and pushes the new
//! copies. The worklist lives entirely in the copy being built, so the only
//! extra state is a handful of coordinates.
//!
//! ```text
//!  source        copy, mid-way
//!    a              a'
//!   / \            /  \
//!  b   c   ->    b'    c'        b'.l = next pending (c'), b'.r = b
//!                                c'.l = None,              c'.r = c
//! ```

use tracing::{debug, warn};

use crate::chain::PendingChain;
use crate::destroy::destroy;
use crate::error::StoreError;
use crate::types::{Bifurcate, Coordinate, NodeId, NodeStore};

/// Where the nodes being copied live, relative to the destination store.
trait Source<D: Bifurcate + ?Sized> {
    fn children(&self, dst: &D, c: NodeId) -> (Coordinate, Coordinate);
    fn value(&self, dst: &D, c: NodeId) -> D::Value;
}

/// Source tree shares the destination store.
struct Local;

impl<D> Source<D> for Local
where
    D: Bifurcate + ?Sized,
    D::Value: Clone,
{
    fn children(&self, dst: &D, c: NodeId) -> (Coordinate, Coordinate) {
        (dst.left(c), dst.right(c))
    }

    fn value(&self, dst: &D, c: NodeId) -> D::Value {
        dst.value(c).clone()
    }
}

/// Source tree lives in another store.
struct Foreign<'a, S: ?Sized>(&'a S);

impl<S, D> Source<D> for Foreign<'_, S>
where
    S: Bifurcate<Value = D::Value> + ?Sized,
    D: Bifurcate + ?Sized,
    D::Value: Clone,
{
    fn children(&self, _dst: &D, c: NodeId) -> (Coordinate, Coordinate) {
        (self.0.left(c), self.0.right(c))
    }

    fn value(&self, _dst: &D, c: NodeId) -> D::Value {
        self.0.value(c).clone()
    }
}

/// Copies the tree rooted at `root` into the same store.
///
/// The result shares no node with the source; destroying either leaves the
/// other intact. The source is only read. On store exhaustion the partial
/// copy is reclaimed and the error returned.
pub fn copy<S>(store: &mut S, root: Coordinate) -> Result<Coordinate, StoreError>
where
    S: NodeStore + ?Sized,
    S::Value: Clone,
{
    copy_with(&Local, root, store)
}

/// Copies the tree rooted at `root` in `src` into `dst`.
pub fn copy_into<S, D>(src: &S, root: Coordinate, dst: &mut D) -> Result<Coordinate, StoreError>
where
    S: Bifurcate<Value = D::Value> + ?Sized,
    D: NodeStore + ?Sized,
    D::Value: Clone,
{
    copy_with(&Foreign(src), root, dst)
}

fn copy_with<D, Src>(src: &Src, root: Coordinate, dst: &mut D) -> Result<Coordinate, StoreError>
where
    D: NodeStore + ?Sized,
    Src: Source<D>,
{
    let Some(root) = root else {
        return Ok(None);
    };
    let _span = tracing::debug_span!("copy").entered();
    let value = src.value(dst, root);
    let new_root = dst.construct(value, None, Some(root))?;
    let mut worklist = PendingChain::new();
    worklist.push(dst, new_root);
    let mut constructed = 1usize;

    while let Some(top) = worklist.pop(dst) {
        let Some(source) = top.take_right(dst) else {
            unreachable!("pending copy {:?} has no source node", top.id());
        };
        let (l, r) = src.children(dst, source);
        let left = match mirror(src, dst, l) {
            Ok(c) => c,
            Err(err) => {
                top.finish(dst, None, None);
                return Err(abandon(dst, worklist, new_root, err));
            }
        };
        let right = match mirror(src, dst, r) {
            Ok(c) => c,
            Err(err) => {
                if let Some(orphan) = left {
                    dst.destroy(orphan);
                }
                top.finish(dst, None, None);
                return Err(abandon(dst, worklist, new_root, err));
            }
        };
        top.finish(dst, left, right);
        for child in [left, right].into_iter().flatten() {
            worklist.push(dst, child);
            constructed += 1;
        }
    }

    debug!(constructed, "tree copied");
    Ok(Some(new_root))
}

/// Builds a pending copy of `source`: no left link yet, right link parked on
/// the source node.
fn mirror<D, Src>(src: &Src, dst: &mut D, source: Coordinate) -> Result<Coordinate, StoreError>
where
    D: NodeStore + ?Sized,
    Src: Source<D>,
{
    match source {
        None => Ok(None),
        Some(s) => {
            let value = src.value(dst, s);
            dst.construct(value, None, Some(s)).map(Some)
        }
    }
}

/// Turns every still-pending copy into a leaf, then reclaims the partial
/// copy. Pending right links point into the source, so they are cleared
/// before anything is destroyed.
fn abandon<D: NodeStore + ?Sized>(
    dst: &mut D,
    mut worklist: PendingChain,
    new_root: NodeId,
    err: StoreError,
) -> StoreError {
    while let Some(pending) = worklist.pop(dst) {
        let _source = pending.take_right(dst);
        pending.finish(dst, None, None);
    }
    let reclaimed = destroy(dst, Some(new_root));
    warn!(%err, reclaimed, "copy abandoned");
    err
}
