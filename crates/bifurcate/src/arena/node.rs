use crate::types::Coordinate;

/// A value with two child links.
#[derive(Clone, Debug)]
pub struct ArenaNode<T> {
    pub l: Coordinate,
    pub r: Coordinate,
    pub v: T,
}

impl<T> ArenaNode<T> {
    pub fn new(v: T, l: Coordinate, r: Coordinate) -> Self {
        Self { l, r, v }
    }
}
