use thiserror::Error;

/// Failure of a [`NodeStore`](crate::NodeStore) to allocate a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("node store exhausted: {limit} live nodes allowed")]
    Exhausted { limit: usize },
}
