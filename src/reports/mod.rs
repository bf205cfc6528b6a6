/*!
Reports for the context.
*/

use crate::context::ContextState;

/// High-level reports regarding a search.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// A plan reaching a goal was found, and is held by the context.
    PlanFound,

    /// The search concluded without a plan.
    ///
    /// Either no plan exists, or (for [depth_first](crate::context::SearchContext::depth_first)) every plan lies beyond the configured depth limit --- the distinction is visible in the [counters](crate::context::Counters).
    NoPlan,

    /// No search has concluded, for some reason.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(value: &ContextState) -> Self {
        match value {
            ContextState::Configuration | ContextState::Search => Self::Unknown,
            ContextState::Plan => Self::PlanFound,
            ContextState::Exhausted => Self::NoPlan,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlanFound => write!(f, "PlanFound"),
            Self::NoPlan => write!(f, "NoPlan"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
