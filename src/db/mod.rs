//! Databases for the data considered during a search or a query.
//!
//! - [state] --- the states discovered during a single search invocation.
//! - [symbol] --- the external names of atoms.
//! - [kb] --- a knowledge base of Horn clauses.
//! - [keys] --- the index types used to access database elements.
//!
//! A state database is private to a single search invocation, and a reasoner's indices are private to the reasoner, so independent searches and queries never share mutable state.

pub mod kb;
pub mod keys;
pub mod state;
pub mod symbol;

pub use keys::{ClauseIndex, StateIndex};
