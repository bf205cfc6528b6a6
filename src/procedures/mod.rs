//! Procedures to search a problem or query a knowledge base.
//!
//! The search procedures are methods on a [context](crate::context::SearchContext):
//! - [breadth_first](crate::context::SearchContext::breadth_first) --- first-in first-out expansion, fewest actions first.
//! - [depth_first](crate::context::SearchContext::depth_first) --- committed descent with backtracking, bounded by a depth limit.
//! - [astar](crate::context::SearchContext::astar) --- best-first expansion by accumulated cost plus a heuristic estimate.
//!
//! The inference procedures are structures built from a [knowledge base](crate::db::kb):
//! - [ForwardChaining] --- bottom-up materialization of every entailed atom.
//! - [BackwardChaining] --- top-down, goal-directed proof of single atoms.

pub mod astar;
pub mod bfs;
pub mod dfs;

pub mod backward;
pub mod forward;

pub use backward::BackwardChaining;
pub use forward::ForwardChaining;
