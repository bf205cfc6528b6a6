/*!
Configuration of a context.

All configuration for a context is contained within the context, set when the context is built.
Options are represented as [ConfigOption]s, carrying their bounds alongside their value.
*/

mod config_option;
pub use config_option::ConfigOption;

use crate::context::ContextState;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The path-length bound on [depth_first](crate::context::SearchContext::depth_first) descent.
    ///
    /// A safety valve against runaway recursion in deep or infinite spaces, distinct from the on-path cycle guard.
    /// Plans longer than the bound are not found: the search reports no plan, and notes the clip in its [counters](crate::context::Counters).
    pub depth_limit: ConfigOption<usize>,
}

impl Default for Config {
    /// The default configuration is (roughly) set to provide quick, deterministic results on toy problems.
    fn default() -> Self {
        Config {
            depth_limit: ConfigOption {
                name: "depth_limit",
                min: 1,
                max: usize::MAX,
                max_state: ContextState::Configuration,
                value: 100,
            },
        }
    }
}
