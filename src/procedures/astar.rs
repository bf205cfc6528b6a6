/*!
A* search over the implicit graph of a problem.

See [SearchContext::astar] for the relevant context method.

# Overview

Best-first expansion: the open set is ordered by `f = g + h`, where `g` is the accumulated action cost from the origin and `h` is the problem's [heuristic](crate::structures::problem::Problem::heuristic) estimate of the remaining cost.
The goal test is applied when a state is popped --- with an admissible and consistent heuristic the first goal popped closes a cost-minimal plan.

# Relaxation

The [state database](crate::db::state) records the best known `g` of every discovered state.
A successor is pushed when it is fresh, or when the newly computed cost improves on the recorded one --- in which case its link and cost are revised and its position on the open set restored ([revalue](crate::generic::index_heap::IndexHeap::revalue) followed by [activate](crate::generic::index_heap::IndexHeap::activate), a decrease-key).
Otherwise the successor is skipped, and no duplicate entry is made.

As the open set supports revising priorities in place there are no stale entries to lazily discard, and a state popped once may return to the open set only if its recorded cost later improves --- which cannot happen under a consistent heuristic, and under an inadmissible heuristic costs only repeated work, not completeness.

# Tie-breaking

Ties between equal-`f` entries fall to the heap order, which is arbitrary.
Which of several cost-minimal plans is returned is therefore unspecified, though deterministic for a fixed problem.

# Guarantees

- With a nonnegative, admissible, and consistent heuristic: the plan returned is cost-minimal.
- With any heuristic: a plan is returned whenever one exists in a finite reachable space.
*/

use crate::{
    context::SearchContext,
    db::{state::StateDB, StateIndex},
    generic::index_heap::IndexHeap,
    misc::log::targets::{self},
    reports::Report,
    structures::problem::{Cost, Problem},
    types::err::ErrorKind,
};

impl<P: Problem> SearchContext<P> {
    /// Searches for a plan by best-first traversal on `f = g + h`, concluding with [Report::PlanFound] or [Report::NoPlan].
    ///
    /// The count of expansions is recorded in the [counters](crate::context::Counters) --- the observable for comparing heuristics.
    ///
    /// # Preconditions
    /// Action costs must be nonnegative.
    /// The reachable state space must be finite for the search to terminate in the absence of a reachable goal.
    pub fn astar(&mut self) -> Result<Report, ErrorKind> {
        self.begin_search()?;
        let total_time = std::time::Instant::now();

        let mut state_db = StateDB::<P>::default();
        let mut open: IndexHeap<Cost> = IndexHeap::default();

        let (origin, _) = state_db.intern(self.problem.initial_state());
        state_db.set_cost(origin, 0.0);

        let estimate = self.problem.heuristic(state_db.state(origin));
        open.add(origin as usize, estimate);
        open.activate(origin as usize);

        while let Some(popped) = open.pop_min() {
            let index = popped as StateIndex;

            if self.problem.is_goal(state_db.state(index)) {
                self.counters.time = total_time.elapsed();
                log::info!(target: targets::RELAXATION, "Goal popped after {} expansions.", self.counters.expansions);

                let plan = state_db.plan_to(index);
                return Ok(self.conclude_plan(plan));
            }

            self.counters.expansions += 1;
            log::trace!(target: targets::EXPANSION, "Expanding state {index} at cost {}.", state_db.cost(index));

            let state = state_db.state(index).clone();
            let cost = state_db.cost(index);

            for action in self.problem.actions(&state) {
                let successor = self.problem.act(&state, &action);
                let successor_cost = cost + self.problem.action_cost(&state, &action);

                let (successor_index, fresh) = state_db.intern(successor);

                if fresh || successor_cost < state_db.cost(successor_index) {
                    if fresh {
                        self.counters.generated += 1;
                    } else {
                        log::trace!(target: targets::RELAXATION, "Relaxed state {successor_index} to cost {successor_cost}.");
                    }

                    state_db.set_cost(successor_index, successor_cost);
                    state_db.set_link(successor_index, index, action);

                    let estimate = self.problem.heuristic(state_db.state(successor_index));
                    open.add(successor_index as usize, successor_cost + estimate);
                    open.activate(successor_index as usize);
                }
            }
        }

        self.counters.time = total_time.elapsed();
        log::info!(target: targets::RELAXATION, "Open set exhausted after {} expansions.", self.counters.expansions);

        Ok(self.conclude_exhausted())
    }
}
