use crate::{context::ContextState, types::err::ConfigError};

/// A configuration option: a named value together with its permitted bounds.
#[derive(Clone)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    /// The latest context state at which the option may be revised.
    pub max_state: ContextState,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Set the value of the option, so long as the value respects the bounds of the option.
    pub fn set_value(&mut self, value: T) -> Result<(), ConfigError> {
        if self.min <= value && value <= self.max {
            self.value = value;
            Ok(())
        } else {
            Err(ConfigError::OutsideBounds)
        }
    }
}
