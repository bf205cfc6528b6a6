//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - None of these report the absence of a plan --- an exhausted search is a result, reported through a [Report](crate::reports::Report), not an error.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The general error enum, wrapping errors from specific parts of the library.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    State(StateError),

    /// A plan was requested from a context which holds none.
    MissingPlan,
}

/// Noted errors when revising a configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The requested value falls outside the permitted bounds of the option.
    OutsideBounds,
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Noted errors in the state of a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// A search was requested of a context still marked as searching.
    ///
    /// As searches run to completion this indicates an earlier search unwound without concluding.
    SearchInProgress,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
