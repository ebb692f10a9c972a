use bifurcate::{destroy, Coordinate, NodeId, NodeStore, StoreError};
use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Overall form of a generated tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Each node lands in a uniformly chosen free child slot.
    Random,
    /// Slots are filled level by level.
    Balanced,
    /// Every node is the left child of the previous one.
    LeftSpine,
    /// Every node is the right child of the previous one.
    RightSpine,
    /// Alternates left and right children down a single path.
    ZigZag,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::Random,
        Shape::Balanced,
        Shape::LeftSpine,
        Shape::RightSpine,
        Shape::ZigZag,
    ];
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Reproducible generator of random tree shapes.
///
/// Uses the xoshiro256** PRNG, so the same seed always yields the same trees.
///
/// # Examples
///
/// ```
/// use bifurcate::{util::weight, Arena};
/// use bifurcate_util::{Fuzzer, Shape};
///
/// let mut fuzzer = Fuzzer::new(Some(7));
/// let mut arena = Arena::new();
/// let root = fuzzer.tree(&mut arena, Shape::Random, 100, |i| i).unwrap();
/// assert_eq!(weight(&arena, root), 100);
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: u64,
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Creates a fuzzer; without a seed one is drawn from `OsRng`.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| OsRng.next_u64());
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// Random integer in `[min, max]`.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    pub fn random_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    /// Picks a random element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, elements: &'a [T]) -> &'a T {
        let idx = self.rng.gen_range(0..elements.len());
        &elements[idx]
    }

    pub fn random_shape(&mut self) -> Shape {
        *self.pick(&Shape::ALL)
    }

    /// Builds a tree of exactly `size` nodes in `store`.
    ///
    /// `value(i)` supplies the value of the `i`-th node created; node 0 is
    /// the root. Nodes are attached one at a time, so any size is built
    /// without recursion. If the store runs out, the nodes built so far are
    /// reclaimed and the error returned.
    pub fn tree<S, F>(
        &mut self,
        store: &mut S,
        shape: Shape,
        size: usize,
        mut value: F,
    ) -> Result<Coordinate, StoreError>
    where
        S: NodeStore + ?Sized,
        F: FnMut(usize) -> S::Value,
    {
        if size == 0 {
            return Ok(None);
        }
        let root = store.leaf(value(0))?;
        match self.grow(store, root, shape, size, &mut value) {
            Ok(()) => Ok(Some(root)),
            Err(err) => {
                destroy(store, Some(root));
                Err(err)
            }
        }
    }

    fn grow<S, F>(
        &mut self,
        store: &mut S,
        root: NodeId,
        shape: Shape,
        size: usize,
        value: &mut F,
    ) -> Result<(), StoreError>
    where
        S: NodeStore + ?Sized,
        F: FnMut(usize) -> S::Value,
    {
        let tracks_slots = matches!(shape, Shape::Random | Shape::Balanced);
        let mut slots: Vec<(NodeId, Side)> = Vec::new();
        if tracks_slots {
            slots.push((root, Side::Left));
            slots.push((root, Side::Right));
        }
        let mut cursor = 0;
        let mut last = root;
        for i in 1..size {
            let (parent, side) = match shape {
                Shape::Random => slots.swap_remove(self.rng.gen_range(0..slots.len())),
                Shape::Balanced => {
                    cursor += 1;
                    slots[cursor - 1]
                }
                Shape::LeftSpine => (last, Side::Left),
                Shape::RightSpine => (last, Side::Right),
                Shape::ZigZag if i % 2 == 1 => (last, Side::Left),
                Shape::ZigZag => (last, Side::Right),
            };
            let node = store.leaf(value(i))?;
            match side {
                Side::Left => store.set_left(parent, Some(node)),
                Side::Right => store.set_right(parent, Some(node)),
            }
            if tracks_slots {
                slots.push((node, Side::Left));
                slots.push((node, Side::Right));
            }
            last = node;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bifurcate::util::{height, values, weight};
    use bifurcate::{Arena, Bifurcate, Visit};

    #[test]
    fn test_fuzzer_random_int() {
        let mut fuzzer = Fuzzer::new(None);
        for _ in 0..100 {
            let n = fuzzer.random_int(1, 10);
            assert!((1..=10).contains(&n));
        }
    }

    #[test]
    fn test_fuzzer_reproducible() {
        let mut a = Fuzzer::new(Some(99));
        let mut b = Fuzzer::new(Some(99));
        let mut arena_a = Arena::new();
        let mut arena_b = Arena::new();
        let ra = a.tree(&mut arena_a, Shape::Random, 50, |i| i).unwrap();
        let rb = b.tree(&mut arena_b, Shape::Random, 50, |i| i).unwrap();
        assert_eq!(
            values(&arena_a, ra, Visit::In),
            values(&arena_b, rb, Visit::In)
        );
    }

    #[test]
    fn test_shapes_have_expected_heights() {
        let mut fuzzer = Fuzzer::new(Some(1));
        let mut arena = Arena::new();
        for (shape, expected) in [
            (Shape::Balanced, 4),
            (Shape::LeftSpine, 15),
            (Shape::RightSpine, 15),
            (Shape::ZigZag, 15),
        ] {
            let root = fuzzer.tree(&mut arena, shape, 15, |i| i).unwrap();
            assert_eq!(weight(&arena, root), 15, "{shape:?}");
            assert_eq!(height(&arena, root), expected, "{shape:?}");
        }
    }

    #[test]
    fn test_zig_zag_alternates() {
        let mut fuzzer = Fuzzer::new(Some(1));
        let mut arena = Arena::new();
        let root = fuzzer.tree(&mut arena, Shape::ZigZag, 3, |i| i).unwrap().unwrap();
        let l = arena.left(root).unwrap();
        assert!(!arena.has_right(root));
        assert!(arena.has_right(l));
        assert!(!arena.has_left(l));
    }

    #[test]
    fn test_empty_tree() {
        let mut fuzzer = Fuzzer::new(Some(1));
        let mut arena: Arena<usize> = Arena::new();
        assert_eq!(fuzzer.tree(&mut arena, Shape::Random, 0, |i| i), Ok(None));
        assert!(arena.is_empty());
    }

    #[test]
    fn test_exhaustion_reclaims_partial_tree() {
        let mut fuzzer = Fuzzer::new(Some(3));
        let mut arena = Arena::with_limit(10);
        assert_eq!(
            fuzzer.tree(&mut arena, Shape::Random, 11, |i| i),
            Err(StoreError::Exhausted { limit: 10 })
        );
        assert!(arena.is_empty());
    }
}
