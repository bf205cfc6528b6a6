/*!
The state database --- the states discovered during a single search invocation.

States are interned on discovery: the first time a state is seen it receives the next free [StateIndex], and every later occurrence of a structurally equal state resolves to the same index.
Interning doubles as the visited set --- a state is marked the moment it is discovered, not when it is expanded --- and guarantees no state is enqueued twice.

Alongside each state the database records:
- The link through which the state was first (or most cheaply) discovered: the index of its parent and the action taken, used to [reconstruct a plan](StateDB::plan_to) by walking links back to the origin.
- The best known path cost from the origin, used by [astar](crate::context::SearchContext::astar) and left at infinity by the uninformed procedures.

A state database is local to a single search invocation and dropped when the search returns, so independent searches never share one.
*/

use std::collections::{hash_map::Entry, HashMap};

use crate::{
    db::keys::StateIndex,
    structures::{
        plan::Plan,
        problem::{Cost, Problem},
    },
};

/// The link through which a state was discovered: its parent and the action taken.
type Link<Action> = (StateIndex, Action);

/// The state database struct.
pub struct StateDB<P: Problem> {
    /// Discovered states, indexed by [StateIndex].
    states: Vec<P::State>,

    /// The index of each discovered state.
    index_of: HashMap<P::State, StateIndex>,

    /// The discovery link of each state, if any --- the origin has none.
    links: Vec<Option<Link<P::Action>>>,

    /// The best known path cost from the origin to each state.
    costs: Vec<Cost>,
}

impl<P: Problem> Default for StateDB<P> {
    fn default() -> Self {
        StateDB {
            states: Vec::default(),
            index_of: HashMap::default(),
            links: Vec::default(),
            costs: Vec::default(),
        }
    }
}

impl<P: Problem> StateDB<P> {
    /// The index of `state`, interning `state` if it is fresh.
    /// Returns the index paired with true if `state` was fresh, false otherwise.
    ///
    /// A fresh state has no link and a path cost of infinity.
    pub fn intern(&mut self, state: P::State) -> (StateIndex, bool) {
        match self.index_of.entry(state) {
            Entry::Occupied(occupied) => (*occupied.get(), false),

            Entry::Vacant(vacant) => {
                let index = self.states.len() as StateIndex;
                self.states.push(vacant.key().clone());
                self.links.push(None);
                self.costs.push(Cost::INFINITY);
                vacant.insert(index);

                (index, true)
            }
        }
    }

    /// The state at `index`.
    ///
    /// # Panics
    /// `index` must have been returned by [intern](StateDB::intern) on this database.
    pub fn state(&self, index: StateIndex) -> &P::State {
        &self.states[index as usize]
    }

    /// Records that `index` was reached from `parent` by `action`, replacing any earlier link.
    pub fn set_link(&mut self, index: StateIndex, parent: StateIndex, action: P::Action) {
        self.links[index as usize] = Some((parent, action));
    }

    /// The best known path cost from the origin to `index`.
    pub fn cost(&self, index: StateIndex) -> Cost {
        self.costs[index as usize]
    }

    /// Revises the best known path cost of `index` to `cost`.
    pub fn set_cost(&mut self, index: StateIndex, cost: Cost) {
        self.costs[index as usize] = cost;
    }

    /// The plan from the origin to `index`, reconstructed by walking links back to the origin.
    pub fn plan_to(&self, index: StateIndex) -> Plan<P::Action> {
        let mut plan: Plan<P::Action> = Vec::default();
        let mut focus = index;

        while let Some((parent, action)) = &self.links[focus as usize] {
            plan.push(action.clone());
            focus = *parent;
        }

        plan.reverse();
        plan
    }

    /// A count of discovered states.
    pub fn count(&self) -> usize {
        self.states.len()
    }
}
