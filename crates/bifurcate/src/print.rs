use crate::traversal::{Traversal, Visit};
use crate::types::{Bifurcate, Coordinate};

/// Renders the tree one node per line, children indented under their parent.
///
/// ```text
///
/// └─ 3
///   ← 1
///     → 4
///   → 2
///     ← 5
/// ```
///
/// The empty tree renders as `∅`. Walks with [`Traversal`], so deep trees do
/// not recurse.
pub fn print_tree<S, F>(store: &S, root: Coordinate, tab: &str, mut label: F) -> String
where
    S: Bifurcate + ?Sized,
    F: FnMut(&S::Value) -> String,
{
    if root.is_none() {
        return "∅".to_string();
    }
    let mut out = String::new();
    let mut walk = Traversal::new(store, root, Visit::Pre);
    while let Some(c) = walk.next() {
        let side = match walk.parent() {
            None => "└─",
            Some(p) if store.left(p) == Some(c) => "←",
            Some(_) => "→",
        };
        out.push_str(&format!(
            "\n{tab}{}{side} {}",
            "  ".repeat(walk.depth()),
            label(store.value(c))
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;
    use crate::types::NodeStore;

    #[test]
    fn renders_sides_and_indentation() {
        let mut arena = Arena::new();
        let n4 = arena.leaf(4).unwrap();
        let n1 = arena.construct(1, None, Some(n4)).unwrap();
        let n5 = arena.leaf(5).unwrap();
        let n2 = arena.construct(2, Some(n5), None).unwrap();
        let n3 = arena.construct(3, Some(n1), Some(n2)).unwrap();
        let out = print_tree(&arena, Some(n3), "", |v| v.to_string());
        assert_eq!(out, "\n└─ 3\n  ← 1\n    → 4\n  → 2\n    ← 5");
    }

    #[test]
    fn empty_tree() {
        let arena: Arena<i32> = Arena::new();
        assert_eq!(print_tree(&arena, None, "  ", |v| v.to_string()), "∅");
    }
}
