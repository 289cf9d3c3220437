//! # Flag Errors
//!
//! This module defines the [`FlagsError`] enum used throughout the flags
//! crate for reporting universe construction and lookup failures.

use std::borrow::Cow;

/// A specialized [`FlagsError`] enum for flag-related failures.
#[derive(Debug, thiserror::Error)]
pub enum FlagsError {
    /// A universe was defined with the same name more than once.
    #[error("Duplicate flag{}: {message}", format_context(.context))]
    DuplicateFlag { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A name was referenced that the universe does not define.
    #[error("Unknown flag{}: {message}", format_context(.context))]
    UnknownFlag { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The universe does not fit the fixed encoding width.
    #[error("Universe overflow{}: {message}", format_context(.context))]
    Overflow { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Adds `.context(...)` to any `Result` carrying a [`FlagsError`].
pub trait FlagsErrorExt<T> {
    /// Attaches a context note, rendered in parentheses after the error kind.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, FlagsError>;
}

impl<T> FlagsErrorExt<T> for Result<T, FlagsError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                FlagsError::DuplicateFlag { context: c, .. }
                | FlagsError::UnknownFlag { context: c, .. }
                | FlagsError::Overflow { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
