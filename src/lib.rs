//! A library for state-space search and Horn-clause inference over implicitly defined problems.
//!
//! heron_search is a library for answering two families of questions which share a single algorithmic shape --- the exploration of an implicitly defined structure with bookkeeping sufficient to guarantee termination:
//! - Given a [problem](crate::structures::problem) describing an implicit state graph, is there a plan of actions which reaches a goal state, and if so, which?
//! - Given a [knowledge base](crate::db::kb) of propositional Horn clauses, is a given atom entailed?
//!
//! heron_search is developed to help students, developers, or anyone curious, to investigate classic search and inference algorithms, whether as a novice or through implementing novel ideas.
//!
//! # Orientation
//!
//! Search is designed around the core structure of a [context](crate::context).
//!
//! Contexts are built from a configuration and a problem --- any structure implementing the [Problem](crate::structures::problem::Problem) trait.
//! A problem is a generative description of a graph: states and actions are produced on demand, and no graph is ever materialized.
//!
//! Three [procedures] operate on a context:
//! - [breadth_first](crate::context::SearchContext::breadth_first), which returns a plan of the fewest actions, when every action counts the same.
//! - [depth_first](crate::context::SearchContext::depth_first), which commits to a branch and backtracks, bounded by a configurable depth limit.
//! - [astar](crate::context::SearchContext::astar), which orders the frontier by accumulated cost plus a heuristic estimate.
//!
//! Inference is designed around a [knowledge base](crate::db::kb) of Horn clauses and a pair of reasoners:
//! - [ForwardChaining](crate::procedures::ForwardChaining), which materializes every entailed atom once, bottom-up.
//! - [BackwardChaining](crate::procedures::BackwardChaining), which proves single atoms top-down, guarded against cyclic clause dependencies.
//!
//! Both reasoners implement the same minimal-model semantics, and for any knowledge base and atom the two agree.
//!
//! Useful starting points, then, may be:
//! - The [problem trait](crate::structures::problem) to see what a search requires of a domain.
//! - The [procedures] to inspect the dynamics of a search or a query.
//! - The [databases](crate::db) to inspect the data considered during a search or a query.
//! - The [configuration](crate::config) to see what may be adjusted.
//!
//! # Examples
//!
//! + Search a corridor for a plan to the far end.
//!
//! ```rust
//! # use heron_search::config::Config;
//! # use heron_search::context::SearchContext;
//! # use heron_search::reports::Report;
//! # use heron_search::structures::problem::Problem;
//! struct Corridor {
//!     length: u8,
//! }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Step {
//!     Left,
//!     Right,
//! }
//!
//! impl Problem for Corridor {
//!     type State = u8;
//!     type Action = Step;
//!
//!     fn initial_state(&self) -> u8 {
//!         0
//!     }
//!
//!     fn actions(&self, _state: &u8) -> Vec<Step> {
//!         vec![Step::Left, Step::Right]
//!     }
//!
//!     fn act(&self, state: &u8, action: &Step) -> u8 {
//!         match action {
//!             Step::Left => state.saturating_sub(1),
//!             Step::Right => (state + 1).min(self.length),
//!         }
//!     }
//!
//!     fn is_goal(&self, state: &u8) -> bool {
//!         *state == self.length
//!     }
//! }
//!
//! let mut the_context = SearchContext::from_config(Corridor { length: 3 }, Config::default());
//!
//! assert_eq!(the_context.breadth_first(), Ok(Report::PlanFound));
//! assert_eq!(the_context.the_plan().unwrap().len(), 3);
//! ```
//!
//! + Build a knowledge base and ask whether the grass is wet.
//!
//! ```rust
//! # use heron_search::db::kb::KnowledgeBase;
//! # use heron_search::procedures::{BackwardChaining, ForwardChaining};
//! let mut kb = KnowledgeBase::default();
//!
//! let rain = kb.atom("rain");
//! let sprinkler = kb.atom("sprinkler");
//! let wet_grass = kb.atom("wet_grass");
//!
//! kb.fact(rain);
//! kb.add([rain], wet_grass);
//!
//! let forward = ForwardChaining::new(&kb);
//! assert!(forward.query(wet_grass));
//! assert!(!forward.query(sprinkler));
//!
//! let mut backward = BackwardChaining::new(&kb);
//! assert!(backward.query(wet_grass));
//! assert!(!backward.query(sprinkler));
//! ```
//!
//! # Guiding principles
//!
//! ## Modularity
//!
//! + The library is built of small interconnected parts, and where possible (and reasonable) interaction between parts happens through documented access points. For example:
//!   - Discovered states are held in a [state database](crate::db::state) and are accessed through [indices](crate::db::keys), with the structure of the database private to the library.
//!   - Domains are defined first as a trait ([Problem](crate::structures::problem::Problem)) and concrete domains live entirely outside the library.
//!   - The algorithms are factored into a collection of [procedures].
//!   - Use of external crates is limited to crates which help support modularity, such as [log](https://docs.rs/log/latest/log/).
//!
//! ## Termination
//!
//! + Every procedure carries an explicit termination guarantee, and the bookkeeping supporting the guarantee is documented where it is maintained:
//!   - Breadth-first search never enqueues a state twice.
//!   - Depth-first search never revisits a state on its current path, and carries a configurable depth bound as a separate safety valve.
//!   - A* pushes a state only when its recorded cost improves.
//!   - Forward chaining decrements each clause count at most once per contributing premise atom.
//!   - Backward chaining guards every in-progress goal against cyclic reduction.
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to frontier management can be filtered with `RUST_LOG=frontier …` or,
//! - Logs of the forward chaining agenda can be found with `RUST_LOG=agenda=trace …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;

pub mod reports;
