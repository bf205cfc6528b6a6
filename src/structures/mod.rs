//! Abstract elements of a search or a query, and their representations.
//!
//! - [problem] --- the capability contract describing an implicit state graph.
//! - [plan] --- ordered sequences of actions, and helpers to evaluate them.
//! - [atom] --- propositional variables, represented as indices.
//! - [clause] --- Horn clauses, a premise set paired with a single conclusion.

pub mod atom;
pub mod clause;
pub mod plan;
pub mod problem;
