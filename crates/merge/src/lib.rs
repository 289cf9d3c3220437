//! Combining ordered sequences of key-value mappings into one.
//!
//! Two entry points cover the two conflict policies:
//!
//! - [`merge_override`] — union of all keys, rightmost mapping wins on
//!   overlap (the layered-configuration policy: defaults first, overrides
//!   last).
//! - [`merge_with`] — union of all keys, overlaps resolved by a
//!   caller-supplied combiner `(accumulated, new) -> merged`.
//!
//! Results are [`BTreeMap`](std::collections::BTreeMap)s, so output
//! iteration order is deterministic regardless of input order. Inputs are
//! borrowed and never mutated; every call produces a fresh map. Nothing here
//! blocks, allocates shared state, or performs I/O, so both functions are
//! safe under arbitrary concurrent callers.
//!
//! ## Examples
//!
//! ```rust
//! use lattice_merge::{merge_override, merge_with};
//! use std::collections::BTreeMap;
//!
//! let defaults = BTreeMap::from([("host", "localhost"), ("port", "80")]);
//! let overrides = BTreeMap::from([("port", "443")]);
//!
//! let config = merge_override([&defaults, &overrides]);
//! assert_eq!(config["host"], "localhost");
//! assert_eq!(config["port"], "443");
//!
//! let a = BTreeMap::from([("x", 1), ("y", 2)]);
//! let b = BTreeMap::from([("x", 10)]);
//! let sums = merge_with(|old, new| old + new, [&a, &b]);
//! assert_eq!(sums, BTreeMap::from([("x", 11), ("y", 2)]));
//! ```

mod engine;

pub use engine::{merge_override, merge_with};

pub mod prelude {
    pub use crate::engine::{merge_override, merge_with};
}
