use std::time::Duration;

/// Counts for various things which count, roughly.
///
/// Counters describe the most recent search made on a context, and are reset when a search begins.
pub struct Counters {
    /// A count of every state expanded --- popped from the frontier (or descended into) and asked for its successors.
    ///
    /// A search which finds the initial state to be a goal expands nothing.
    pub expansions: usize,

    /// A count of every fresh state generated --- discovered for the first time as a successor.
    pub generated: usize,

    /// A count of branches cut by the [depth limit](crate::config::Config::depth_limit) during [depth_first](crate::context::SearchContext::depth_first).
    ///
    /// Nonzero clips distinguish a depth-limited exhaustion from a genuine one.
    pub depth_clips: usize,

    /// The time taken by the search.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            expansions: 0,
            generated: 0,

            depth_clips: 0,
            time: Duration::from_secs(0),
        }
    }
}
