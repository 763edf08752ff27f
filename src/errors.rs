use std::error;
use std::fmt;

/// Error type for failures when configuring or operating a simulation.
///
/// Configuration problems are caught eagerly at construction time, never
/// mid-run; lifecycle misuse (operating on an uninitialized population, or
/// initializing one twice) is surfaced immediately as a precondition failure
/// rather than silently operating on undefined state.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A configuration parameter was outside its valid range. Carries the
    /// parameter name and the rejected value, formatted for display.
    Configuration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// The rejected value, rendered as text
        value: String,
    },

    /// An operation requiring an initialized population was called before
    /// `initialize()` completed.
    Uninitialized {
        /// Name of the operation that was attempted
        operation: &'static str,
    },

    /// `initialize()` was called twice on the same population.
    AlreadyInitialized,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { parameter, value } => {
                write!(f, "Invalid configuration: {parameter} = {value}")
            }
            Self::Uninitialized { operation } => {
                write!(f, "Cannot {operation}: population is not initialized")
            }
            Self::AlreadyInitialized => {
                write!(f, "Population is already initialized")
            }
        }
    }
}

impl error::Error for SimulationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_configuration() {
        let err = SimulationError::Configuration {
            parameter: "popsize",
            value: "0".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid configuration: popsize = 0");
    }

    #[test]
    fn test_display_uninitialized() {
        let err = SimulationError::Uninitialized { operation: "tabulate" };
        assert!(err.to_string().contains("tabulate"));
    }
}
