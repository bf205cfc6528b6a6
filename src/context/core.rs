use crate::{
    config::Config,
    reports::Report,
    structures::{plan::Plan, problem::Problem},
    types::err::{self, ErrorKind},
};

use super::{ContextState, Counters};

/// A search context, parameterized to a problem.
///
/// The context owns the problem for the duration of its searches, together with the configuration, counters, and the plan of the most recent successful search.
///
/// Frontiers, visited sets, and cost maps are *not* part of a context --- each belongs to a single search invocation and is dropped when the invocation returns.
pub struct SearchContext<P: Problem> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the most recent search.
    pub counters: Counters,

    /// The problem searched.
    pub problem: P,

    /// The status of the context.
    pub state: ContextState,

    /// The plan of the most recent successful search, if any.
    plan: Option<Plan<P::Action>>,
}

impl<P: Problem> SearchContext<P> {
    /// Creates a context for `problem` from some given configuration.
    pub fn from_config(problem: P, config: Config) -> Self {
        SearchContext {
            config,
            counters: Counters::default(),
            problem,
            state: ContextState::Configuration,
            plan: None,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The plan with which the most recent search concluded.
    pub fn the_plan(&self) -> Result<&Plan<P::Action>, ErrorKind> {
        match &self.plan {
            Some(plan) => Ok(plan),
            None => Err(ErrorKind::MissingPlan),
        }
    }

    /// The plan with which the most recent search concluded, taken out of the context.
    pub fn take_plan(&mut self) -> Result<Plan<P::Action>, ErrorKind> {
        match self.plan.take() {
            Some(plan) => Ok(plan),
            None => Err(ErrorKind::MissingPlan),
        }
    }

    /// Gives the problem back, consuming the context.
    pub fn dissolve(self) -> P {
        self.problem
    }
}

// Methods to steer a search, used by the procedures.
impl<P: Problem> SearchContext<P> {
    /// Marks the start of a search, resetting the counters and clearing any held plan.
    pub(crate) fn begin_search(&mut self) -> Result<(), ErrorKind> {
        if matches!(self.state, ContextState::Search) {
            return Err(err::StateError::SearchInProgress.into());
        }

        self.counters = Counters::default();
        self.plan = None;
        self.state = ContextState::Search;

        Ok(())
    }

    /// Concludes a search with `plan`.
    pub(crate) fn conclude_plan(&mut self, plan: Plan<P::Action>) -> Report {
        self.plan = Some(plan);
        self.state = ContextState::Plan;

        Report::PlanFound
    }

    /// Concludes a search with an exhausted frontier.
    pub(crate) fn conclude_exhausted(&mut self) -> Report {
        self.state = ContextState::Exhausted;

        Report::NoPlan
    }
}
