use tracing::debug;

use crate::chain::PendingChain;
use crate::types::{Coordinate, NodeStore};

/// Reclaims every node reachable from `root`, each exactly once.
///
/// Runs in linear time without recursion and without an auxiliary stack:
/// nodes with two children are parked on a [`PendingChain`] threaded through
/// their own left links until their right subtree is reached. Returns the
/// number of nodes reclaimed. `root` and every coordinate into the tree are
/// stale afterwards.
pub fn destroy<S: NodeStore + ?Sized>(store: &mut S, root: Coordinate) -> usize {
    let Some(mut c) = root else {
        return 0;
    };
    let _span = tracing::debug_span!("destroy").entered();
    let mut pending = PendingChain::new();
    let mut reclaimed = 0usize;
    loop {
        match (store.left(c), store.right(c)) {
            (Some(l), Some(_)) => {
                pending.push(store, c);
                c = l;
            }
            (Some(next), None) | (None, Some(next)) => {
                store.destroy(c);
                reclaimed += 1;
                c = next;
            }
            (None, None) => {
                store.destroy(c);
                reclaimed += 1;
                let Some(parked) = pending.pop(store) else {
                    break;
                };
                let Some(r) = parked.take_right(store) else {
                    unreachable!("parked node {:?} lost its right subtree", parked.id());
                };
                store.destroy(parked.id());
                reclaimed += 1;
                c = r;
            }
        }
    }
    debug!(reclaimed, "tree destroyed");
    reclaimed
}
