/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the expansion of states during a search.
    pub const EXPANSION: &str = "expansion";

    /// Logs related to frontier management.
    pub const FRONTIER: &str = "frontier";

    /// Logs related to backtracking during [depth_first](crate::context::SearchContext::depth_first).
    pub const BACKTRACK: &str = "backtrack";

    /// Logs related to cost relaxation during [astar](crate::context::SearchContext::astar).
    pub const RELAXATION: &str = "relaxation";

    /// Logs related to the [knowledge base](crate::db::kb).
    pub const KNOWLEDGE: &str = "knowledge";

    /// Logs related to the forward chaining agenda.
    pub const AGENDA: &str = "agenda";

    /// Logs related to backward chaining.
    pub const CHAINING: &str = "chaining";
}
