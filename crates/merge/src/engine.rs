//! Merge operations over ordered sequences of mappings.
//!
//! Both entry points fold their inputs left to right into a fresh
//! [`BTreeMap`] and never mutate the borrowed sources. [`merge_override`] is
//! [`merge_with`] specialized to the override combiner, so there is a single
//! accumulation path to reason about.

use std::collections::BTreeMap;
use tracing::trace;

/// Merges mappings left to right; the rightmost mapping containing a key
/// wins.
///
/// The result contains the union of all keys, each exactly once. An empty
/// input sequence yields an empty map. Inputs are borrowed and left
/// unmodified.
///
/// # Example
///
/// ```rust
/// use lattice_merge::merge_override;
/// use std::collections::BTreeMap;
///
/// let defaults = BTreeMap::from([("a", 1), ("b", 2)]);
/// let overrides = BTreeMap::from([("b", 3), ("c", 4)]);
///
/// let merged = merge_override([&defaults, &overrides]);
/// assert_eq!(merged, BTreeMap::from([("a", 1), ("b", 3), ("c", 4)]));
/// ```
pub fn merge_override<'a, K, V, I>(mappings: I) -> BTreeMap<K, V>
where
    K: Ord + Clone + 'a,
    V: Clone + 'a,
    I: IntoIterator<Item = &'a BTreeMap<K, V>>,
{
    merge_with(|_, new| new, mappings)
}

/// Merges mappings left to right, resolving overlapping keys with
/// `combiner`.
///
/// The mappings are folded into a running result. A key absent from the
/// accumulated result is inserted with its value unchanged; a key already
/// present is replaced with `combiner(accumulated, new)`. Keys appearing in
/// only one input are carried through untouched and the combiner is never
/// invoked for them.
///
/// Application order is exactly pairwise left to right. Whether the result
/// is order-independent depends entirely on `combiner`: a non-commutative
/// combiner such as string concatenation produces different results under
/// different input orderings, and this function preserves the given order
/// for reproducibility.
///
/// Deep merging of nested mappings is a combiner pattern, not a separate
/// primitive: recurse when both operands are tables, fall back to override
/// for scalars.
///
/// # Examples
///
/// Summing overlaps:
///
/// ```rust
/// use lattice_merge::merge_with;
/// use std::collections::BTreeMap;
///
/// let base = BTreeMap::from([("x", 1), ("y", 2)]);
/// let extra = BTreeMap::from([("x", 10)]);
///
/// let merged = merge_with(|old, new| old + new, [&base, &extra]);
/// assert_eq!(merged, BTreeMap::from([("x", 11), ("y", 2)]));
/// ```
///
/// Recursive deep merge of nested tables:
///
/// ```rust
/// use lattice_merge::merge_with;
/// use std::collections::BTreeMap;
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Node {
///     Leaf(i64),
///     Table(BTreeMap<String, Node>),
/// }
///
/// fn deep(old: Node, new: Node) -> Node {
///     match (old, new) {
///         (Node::Table(old), Node::Table(new)) => Node::Table(merge_with(deep, [&old, &new])),
///         (_, new) => new,
///     }
/// }
///
/// let base = BTreeMap::from([(
///     "server".to_owned(),
///     Node::Table(BTreeMap::from([
///         ("port".to_owned(), Node::Leaf(80)),
///         ("workers".to_owned(), Node::Leaf(4)),
///     ])),
/// )]);
/// let patch = BTreeMap::from([(
///     "server".to_owned(),
///     Node::Table(BTreeMap::from([("port".to_owned(), Node::Leaf(443))])),
/// )]);
///
/// let merged = merge_with(deep, [&base, &patch]);
/// let Some(Node::Table(server)) = merged.get("server").cloned() else {
///     unreachable!()
/// };
/// assert_eq!(server["port"], Node::Leaf(443));
/// assert_eq!(server["workers"], Node::Leaf(4));
/// ```
pub fn merge_with<'a, K, V, F, I>(mut combiner: F, mappings: I) -> BTreeMap<K, V>
where
    K: Ord + Clone + 'a,
    V: Clone + 'a,
    F: FnMut(V, V) -> V,
    I: IntoIterator<Item = &'a BTreeMap<K, V>>,
{
    let mut merged = BTreeMap::new();

    for mapping in mappings {
        for (key, value) in mapping {
            let resolved = match merged.remove(key) {
                Some(accumulated) => combiner(accumulated, value.clone()),
                None => value.clone(),
            };
            merged.insert(key.clone(), resolved);
        }
    }

    trace!(keys = merged.len(), "Mappings merged");
    merged
}
