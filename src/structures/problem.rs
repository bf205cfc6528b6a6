/*!
The problem trait --- a generative description of an implicit state graph.

A problem is never asked for its graph.
Instead, states and actions are produced on demand: the initial state, the actions available from a given state, and the state an action leads to.
The graph is implicit in these answers, and may be far too large to materialize, or infinite.

Implementations of the trait are expected to be small adapters for a concrete domain (a vacuum world, a tile puzzle, a route network) and live entirely outside the library.

# Structural equality

States are compared and hashed by value.
Two states reached by different action sequences but representing identical configurations must compare equal, as the search procedures rely on this to avoid revisiting configurations.
For compound states a derived implementation of [Eq] and [Hash](std::hash::Hash) is sufficient.

# Purity

[act](Problem::act) must be a pure function: the same state and action always yield the same successor.
Likewise [actions](Problem::actions) must enumerate the same actions in the same order for the same state, as the enumeration order determines which of several plans is found first.
*/

/// A scalar cost, used for action costs and heuristic estimates.
pub type Cost = f64;

/// The problem trait: a capability contract over an implicit state graph.
pub trait Problem {
    /// A node in the implicit graph.
    ///
    /// Equality and hashing must be structural --- see the [module documentation](crate::structures::problem).
    type State: Clone + std::cmp::Eq + std::hash::Hash;

    /// A labeled transition available from some state.
    type Action: Clone;

    /// The state from which every search begins.
    fn initial_state(&self) -> Self::State;

    /// The actions available from `state`, in a fixed order.
    ///
    /// The order is preserved by every search procedure, and so determines which goal is found first.
    /// An empty enumeration marks a dead end (unless the state is a goal).
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by taking `action` in `state`.
    ///
    /// Must be pure: the same inputs always yield the same output state.
    ///
    /// # Panics
    /// `action` must be one of the actions enumerated by [actions](Problem::actions) for `state`.
    /// Passing any other action is a contract violation by the caller, and implementations are expected to panic rather than silently return a wrong state.
    /// The search procedures only ever apply enumerated actions.
    fn act(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// True if `state` is a goal, false otherwise.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// The (nonnegative) cost of taking `action` in `state`.
    ///
    /// The default gives every action unit cost, under which [astar](crate::context::SearchContext::astar) minimizes the number of actions.
    fn action_cost(&self, _state: &Self::State, _action: &Self::Action) -> Cost {
        1.0
    }

    /// An estimate of the remaining cost from `state` to the nearest goal.
    ///
    /// [astar](crate::context::SearchContext::astar) returns a cost-minimal plan when the estimate is admissible (never exceeding the true remaining cost) and consistent.
    /// An inadmissible estimate costs only optimality --- a plan is still found whenever one exists in a finite space.
    ///
    /// The default estimate of zero makes [astar](crate::context::SearchContext::astar) a uniform-cost search.
    fn heuristic(&self, _state: &Self::State) -> Cost {
        0.0
    }
}
