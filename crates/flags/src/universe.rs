//! Flag universe construction and name-based operations.
//!
//! A [`FlagUniverse`] fixes an ordered list of distinct flag names and assigns
//! each name its zero-based list position as bit index. Every name-keyed
//! operation resolves through the universe; the produced [`Flags`] values are
//! only meaningful under a universe with the same name order.

use crate::error::FlagsError;
use crate::value::Flags;
use fxhash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// A fixed, ordered list of named boolean flags defining bit positions.
///
/// Bit positions are stable for the lifetime of a universe. Reordering the
/// names produces a different universe that invalidates previously encoded
/// values, which is why deserialization re-validates the full name list
/// instead of patching an existing instance.
///
/// # Example
///
/// ```rust
/// use lattice_flags::{FlagUniverse, FlagsError};
///
/// # fn main() -> Result<(), FlagsError> {
/// let universe = FlagUniverse::define(["read", "write", "execute"])?;
///
/// let value = universe.encode(["read", "execute"])?;
/// assert_eq!(value.bits(), 0b101);
/// assert!(universe.test(value, "read")?);
/// assert!(!universe.test(value, "write")?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagUniverse {
    /// Names in definition order; position is bit index.
    names: Vec<Box<str>>,
    /// Name lookup: resolves a flag to its bit position.
    index: FxHashMap<Box<str>, u8>,
}

impl FlagUniverse {
    /// Defines a universe from an ordered sequence of distinct names.
    ///
    /// Each name receives its zero-based position as bit index. Names are
    /// compared byte-for-byte; `"Read"` and `"read"` are distinct flags.
    ///
    /// # Errors
    ///
    /// Returns [`FlagsError::Overflow`] if more than [`Flags::WIDTH`] names
    /// are supplied and [`FlagsError::DuplicateFlag`] if a name repeats.
    pub fn define<I, N>(names: I) -> Result<Self, FlagsError>
    where
        I: IntoIterator<Item = N>,
        N: Into<Box<str>>,
    {
        let names: Vec<Box<str>> = names.into_iter().map(Into::into).collect();

        if names.len() > usize::from(Flags::WIDTH) {
            return Err(FlagsError::Overflow {
                message: format!("{} flags exceed the {}-bit width", names.len(), Flags::WIDTH)
                    .into(),
                context: None,
            });
        }

        let mut index = FxHashMap::default();
        for (position, name) in (0u8..).zip(&names) {
            if index.insert(name.clone(), position).is_some() {
                return Err(FlagsError::DuplicateFlag {
                    message: name.clone().into_string().into(),
                    context: None,
                });
            }
        }

        debug!(flags = names.len(), "Flag universe defined");
        Ok(Self { names, index })
    }

    /// Resolves a name to its bit position.
    ///
    /// # Errors
    ///
    /// Returns [`FlagsError::UnknownFlag`] if the universe does not define
    /// `name`.
    pub fn index(&self, name: &str) -> Result<u8, FlagsError> {
        self.index.get(name).copied().ok_or_else(|| FlagsError::UnknownFlag {
            message: name.to_owned().into(),
            context: None,
        })
    }

    /// Single-flag value for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FlagsError::UnknownFlag`] if the universe does not define
    /// `name`.
    pub fn bit(&self, name: &str) -> Result<Flags, FlagsError> {
        Ok(Flags::from_bits(1u64 << self.index(name)?))
    }

    /// Encodes a set of names into a single value.
    ///
    /// The result is the bitwise OR of the single-flag values; an empty set
    /// encodes to [`Flags::EMPTY`].
    ///
    /// # Errors
    ///
    /// Returns [`FlagsError::UnknownFlag`] for the first name the universe
    /// does not define. No partial value is produced on error.
    pub fn encode<I, N>(&self, flags: I) -> Result<Flags, FlagsError>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut value = Flags::EMPTY;
        for name in flags {
            value |= self.bit(name.as_ref())?;
        }
        Ok(value)
    }

    /// Returns `true` iff the bit for `flag` is set in `value`.
    ///
    /// # Errors
    ///
    /// Returns [`FlagsError::UnknownFlag`] if the universe does not define
    /// `flag`.
    pub fn test(&self, value: Flags, flag: &str) -> Result<bool, FlagsError> {
        Ok(value.contains(self.bit(flag)?))
    }

    /// Returns `value` with the bit for `flag` set. The input is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`FlagsError::UnknownFlag`] if the universe does not define
    /// `flag`.
    pub fn set(&self, value: Flags, flag: &str) -> Result<Flags, FlagsError> {
        Ok(value.union(self.bit(flag)?))
    }

    /// Returns `value` with the bit for `flag` cleared.
    ///
    /// # Errors
    ///
    /// Returns [`FlagsError::UnknownFlag`] if the universe does not define
    /// `flag`.
    pub fn clear(&self, value: Flags, flag: &str) -> Result<Flags, FlagsError> {
        Ok(value.difference(self.bit(flag)?))
    }

    /// Returns `value` with the bit for `flag` flipped.
    ///
    /// # Errors
    ///
    /// Returns [`FlagsError::UnknownFlag`] if the universe does not define
    /// `flag`.
    pub fn toggle(&self, value: Flags, flag: &str) -> Result<Flags, FlagsError> {
        Ok(value ^ self.bit(flag)?)
    }

    /// Names of the universe flags present in `value`, in universe order.
    ///
    /// Bits beyond the universe carry no name and are ignored.
    #[must_use]
    pub fn decode(&self, value: Flags) -> Vec<&str> {
        (0u8..)
            .zip(&self.names)
            .filter(|&(position, _)| (value.bits() >> position) & 1 == 1)
            .map(|(_, name)| name.as_ref())
            .collect()
    }

    /// Value with every universe bit set.
    ///
    /// The universe-bounded complement of `value` is
    /// `mask().difference(value)`.
    #[must_use]
    pub fn mask(&self) -> Flags {
        if self.names.len() == usize::from(Flags::WIDTH) {
            Flags::from_bits(u64::MAX)
        } else {
            Flags::from_bits((1u64 << self.names.len()) - 1)
        }
    }

    /// Number of defined flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the universe defines no flags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(AsRef::as_ref)
    }
}

// --- Serde ---

impl Serialize for FlagUniverse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.names)
    }
}

impl<'de> Deserialize<'de> for FlagUniverse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<Box<str>>::deserialize(deserializer)?;
        Self::define(names).map_err(serde::de::Error::custom)
    }
}
