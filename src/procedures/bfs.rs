/*!
Breadth-first search over the implicit graph of a problem.

See [SearchContext::breadth_first] for the relevant context method.

# Overview

A first-in first-out frontier of discovered states, expanded in discovery order.
As every expansion happens at the shallowest remaining depth, the first goal dequeued is reached by a plan of the fewest possible actions --- under the (implicit) unit cost of counting actions.

# Bookkeeping

A state is marked as visited the moment it is discovered --- when it is interned into the [state database](crate::db::state) --- not when it is expanded.
This is a deliberate memory-saving relaxation of textbook breadth-first search: the frontier never holds two entries for one state, and the invariant that no state is enqueued twice follows directly.

The goal test is applied when a state is dequeued.
In particular, an initial state which is a goal concludes the search with the empty plan and no expansions.

# Termination

Termination is guaranteed only if the reachable state space is finite.
This is a precondition, not an enforced bound: on an infinite space with no reachable goal the search does not return.
*/

use std::collections::VecDeque;

use crate::{
    context::SearchContext,
    db::state::StateDB,
    misc::log::targets::{self},
    reports::Report,
    structures::problem::Problem,
    types::err::ErrorKind,
};

impl<P: Problem> SearchContext<P> {
    /// Searches for a plan by breadth-first traversal, concluding with [Report::PlanFound] or [Report::NoPlan].
    ///
    /// Under uniform action costs the plan found has the minimum possible number of actions.
    ///
    /// # Preconditions
    /// The reachable state space must be finite for the search to terminate in the absence of a reachable goal.
    pub fn breadth_first(&mut self) -> Result<Report, ErrorKind> {
        self.begin_search()?;
        let total_time = std::time::Instant::now();

        let mut state_db = StateDB::<P>::default();
        let mut frontier: VecDeque<crate::db::StateIndex> = VecDeque::default();

        let (origin, _) = state_db.intern(self.problem.initial_state());
        frontier.push_back(origin);

        while let Some(index) = frontier.pop_front() {
            if self.problem.is_goal(state_db.state(index)) {
                self.counters.time = total_time.elapsed();
                log::info!(target: targets::FRONTIER, "Goal dequeued after {} expansions.", self.counters.expansions);

                let plan = state_db.plan_to(index);
                return Ok(self.conclude_plan(plan));
            }

            self.counters.expansions += 1;
            log::trace!(target: targets::EXPANSION, "Expanding state {index}.");

            let state = state_db.state(index).clone();

            for action in self.problem.actions(&state) {
                let successor = self.problem.act(&state, &action);
                let (successor_index, fresh) = state_db.intern(successor);

                if !fresh {
                    continue;
                }

                self.counters.generated += 1;
                state_db.set_link(successor_index, index, action);
                frontier.push_back(successor_index);
                log::trace!(target: targets::FRONTIER, "Enqueued state {successor_index}.");
            }
        }

        self.counters.time = total_time.elapsed();
        log::info!(target: targets::FRONTIER, "Frontier exhausted after {} expansions.", self.counters.expansions);

        Ok(self.conclude_exhausted())
    }
}
