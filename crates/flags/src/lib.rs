//! Named boolean flag sets encoded into a single fixed-width integer.
//!
//! A [`FlagUniverse`] fixes an ordered list of distinct flag names at
//! construction; each name's list position is its bit index. Subsets of the
//! universe are encoded as [`Flags`], a `u64` newtype whose set bits mark
//! membership, so a whole permission-style flag set travels as one integer.
//!
//! ## Stability Contract
//!
//! Bit positions are stable for the lifetime of a given universe. A value
//! encoded under `["read", "write"]` means something else under
//! `["write", "read"]`; persist the universe (its serde form is the ordered
//! name list) alongside any persisted values.
//!
//! ## Purity
//!
//! Every operation is a pure, total function over immutable inputs: no
//! operation mutates its receiver or arguments, and all of them are safely
//! callable from any number of concurrent callers without synchronization.
//!
//! ## Examples
//!
//! ```rust
//! use lattice_flags::{FlagUniverse, Flags, FlagsError};
//!
//! # fn main() -> Result<(), FlagsError> {
//! let universe = FlagUniverse::define(["read", "write", "execute"])?;
//!
//! let rx = universe.encode(["read", "execute"])?;
//! assert_eq!(rx.bits(), 0b101);
//!
//! let w = universe.bit("write")?;
//! assert_eq!(rx.union(w), universe.mask());
//! assert_eq!(rx.intersect(w), Flags::EMPTY);
//!
//! assert_eq!(universe.decode(rx), ["read", "execute"]);
//! # Ok(())
//! # }
//! ```

mod error;
mod universe;
mod value;

pub use error::{FlagsError, FlagsErrorExt};
pub use universe::FlagUniverse;
pub use value::Flags;

pub mod prelude {
    pub use crate::error::{FlagsError, FlagsErrorExt};
    pub use crate::universe::FlagUniverse;
    pub use crate::value::Flags;
}
