//! Facade crate for the `Lattice` utility toolkit.
//! Re-exports the mapping-merge and flag-encoding primitives from the member crates.
//! Keep this crate thin: it should compose other crates, not implement logic.
//!
//! ## Usage
//! - Depend on `lattice` and pull the common items through [`prelude`], or
//! - reach into [`merge`] / [`flags`] directly for the full per-crate API.
//!
//! ```rust
//! use lattice::prelude::*;
//! use std::collections::BTreeMap;
//!
//! # fn main() -> Result<(), FlagsError> {
//! let defaults = BTreeMap::from([("port", 80)]);
//! let overrides = BTreeMap::from([("port", 443)]);
//! assert_eq!(merge_override([&defaults, &overrides])["port"], 443);
//!
//! let universe = FlagUniverse::define(["read", "write"])?;
//! assert_eq!(universe.encode(["read"])?.bits(), 0b01);
//! # Ok(())
//! # }
//! ```

pub use lattice_flags as flags;
pub use lattice_merge as merge;

pub mod prelude {
    pub use lattice_flags::{FlagUniverse, Flags, FlagsError, FlagsErrorExt};
    pub use lattice_merge::{merge_override, merge_with};
}
