/*!
The context --- to which a problem is given and within which searches take place.

A [SearchContext] pairs a [problem](crate::structures::problem::Problem) with a [configuration](crate::config), and owns the [counters](Counters) and the plan produced by the most recent search.

# Example
```rust
# use heron_search::config::Config;
# use heron_search::context::SearchContext;
# use heron_search::reports::Report;
# use heron_search::structures::problem::Problem;
struct Countdown;

impl Problem for Countdown {
    type State = u8;
    type Action = u8;

    fn initial_state(&self) -> u8 {
        8
    }

    fn actions(&self, _state: &u8) -> Vec<u8> {
        vec![1, 2]
    }

    fn act(&self, state: &u8, action: &u8) -> u8 {
        state.saturating_sub(*action)
    }

    fn is_goal(&self, state: &u8) -> bool {
        *state == 0
    }
}

let mut the_context = SearchContext::from_config(Countdown, Config::default());

assert_eq!(the_context.astar(), Ok(Report::PlanFound));
assert_eq!(the_context.the_plan().unwrap().len(), 4);
assert_eq!(the_context.report(), Report::PlanFound);
```
*/

mod core;
mod counters;
pub use self::core::SearchContext;
pub use counters::Counters;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows configuration --- no search has been made.
    Configuration,

    /// A search is in progress.
    Search,

    /// The most recent search concluded with a plan.
    Plan,

    /// The most recent search concluded without a plan.
    Exhausted,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Search => write!(f, "Search"),
            Self::Plan => write!(f, "Plan"),
            Self::Exhausted => write!(f, "Exhausted"),
        }
    }
}
