/*!
Depth-first search over the implicit graph of a problem.

See [SearchContext::depth_first] for the relevant context method.

# Overview

Recursive descent: commit to the first enumerated action, descend until a goal, a dead end, a cycle, or the depth limit, and backtrack.
Actions are tried in the order the problem enumerates them, so the enumeration order determines which goal is found first --- a property tests may rely on.

# Bookkeeping

Two guards, with distinct purposes:

- The *on-path* set holds exactly the states of the current descent.
  A successor already on the path closes a cycle and is skipped, and a state is removed from the set when its branch is exhausted --- so states abandoned by backtracking may be reached again along other paths.
  States on a path which reached a goal are never removed: the descent returns without unwinding its bookkeeping, and the plan built along the path remains valid.
- The [depth limit](crate::config::Config::depth_limit) cuts descent past a configured number of actions.
  This is a safety valve against runaway recursion in deep or infinite spaces, not a principled bound: a plan may exist beyond the limit, and a clipped search reports no plan all the same.
  Clips are counted in [Counters::depth_clips](crate::context::Counters) and logged, so a depth-limited exhaustion is distinguishable from a genuine one.
*/

use std::collections::HashSet;

use crate::{
    context::SearchContext,
    misc::log::targets::{self},
    reports::Report,
    structures::plan::Plan,
    structures::problem::Problem,
    types::err::ErrorKind,
};

/// The conclusion of a descent into some branch.
enum Dive {
    /// A goal was found --- the plan so far reaches it.
    Plan,

    /// The branch was exhausted without a goal.
    Exhausted,

    /// Some descent in the branch was cut by the depth limit.
    Clipped,
}

impl<P: Problem> SearchContext<P> {
    /// Searches for a plan by depth-first descent, concluding with [Report::PlanFound] or [Report::NoPlan].
    ///
    /// Descent is bounded by [Config::depth_limit](crate::config::Config::depth_limit); plans beyond the bound are not found, and any clip is noted in the counters.
    pub fn depth_first(&mut self) -> Result<Report, ErrorKind> {
        self.begin_search()?;
        let total_time = std::time::Instant::now();

        let mut on_path: HashSet<P::State> = HashSet::default();
        let mut plan: Plan<P::Action> = Vec::default();

        let origin = self.problem.initial_state();
        let fuel = self.config.depth_limit.value;

        let outcome = self.dive(origin, fuel, &mut on_path, &mut plan);

        self.counters.time = total_time.elapsed();

        match outcome {
            Dive::Plan => Ok(self.conclude_plan(plan)),

            Dive::Exhausted => {
                log::info!(target: targets::BACKTRACK, "Search space exhausted after {} expansions.", self.counters.expansions);
                Ok(self.conclude_exhausted())
            }

            Dive::Clipped => {
                log::info!(target: targets::BACKTRACK, "Exhausted up to the depth limit, with {} branches clipped.", self.counters.depth_clips);
                Ok(self.conclude_exhausted())
            }
        }
    }

    /// Descends from `state` with `fuel` actions remaining, extending `plan` in place.
    ///
    /// On [Dive::Plan] the method returns without unwinding: `plan` holds the actions of the successful path, and `on_path` keeps the states of that path marked.
    /// Otherwise `plan` and `on_path` are restored before returning.
    fn dive(
        &mut self,
        state: P::State,
        fuel: usize,
        on_path: &mut HashSet<P::State>,
        plan: &mut Plan<P::Action>,
    ) -> Dive {
        if self.problem.is_goal(&state) {
            return Dive::Plan;
        }

        if fuel == 0 {
            self.counters.depth_clips += 1;
            log::trace!(target: targets::BACKTRACK, "Depth limit reached, clipping the branch.");
            return Dive::Clipped;
        }

        self.counters.expansions += 1;
        log::trace!(target: targets::EXPANSION, "Descending at depth {}.", plan.len());

        on_path.insert(state.clone());

        let mut clipped = false;

        for action in self.problem.actions(&state) {
            let successor = self.problem.act(&state, &action);

            if on_path.contains(&successor) {
                continue;
            }

            self.counters.generated += 1;
            plan.push(action);

            match self.dive(successor, fuel - 1, on_path, plan) {
                Dive::Plan => return Dive::Plan,

                Dive::Clipped => clipped = true,

                Dive::Exhausted => {}
            }

            plan.pop();
        }

        on_path.remove(&state);

        match clipped {
            true => Dive::Clipped,
            false => Dive::Exhausted,
        }
    }
}
