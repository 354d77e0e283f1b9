use std::error::Error;
use std::fmt;

/// Error type returned by trajectory solver implementations
#[derive(Debug, Clone, PartialEq)]
pub struct SolverError {
    message: String,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SolverError {}

impl From<String> for SolverError {
    fn from(msg: String) -> Self {
        SolverError { message: msg }
    }
}

impl From<&str> for SolverError {
    fn from(msg: &str) -> Self {
        SolverError {
            message: msg.to_string(),
        }
    }
}

/// Error type for range-card generation
#[derive(Debug, Clone, PartialEq)]
pub enum RangeCardError {
    /// Malformed or missing configuration; raised before any scenario is computed
    Configuration(String),
    /// The trajectory solver failed for one scenario; fatal for the whole run
    Solver { scenario: String, message: String },
    /// A scenario trajectory carries fewer samples than the baseline sweep
    IncompleteTrajectory {
        scenario: String,
        expected: usize,
        actual: usize,
    },
    /// A scenario sample sits at a different distance than the baseline sample
    MisalignedSample { scenario: String, index: usize },
    /// Placeholder/template mismatch at the rendering boundary
    Render(String),
}

impl RangeCardError {
    pub(crate) fn solver(scenario: String, err: SolverError) -> Self {
        RangeCardError::Solver {
            scenario,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for RangeCardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RangeCardError::Configuration(msg) => write!(f, "invalid configuration: {msg}"),
            RangeCardError::Solver { scenario, message } => {
                write!(f, "trajectory solver failed for scenario {scenario}: {message}")
            }
            RangeCardError::IncompleteTrajectory {
                scenario,
                expected,
                actual,
            } => write!(
                f,
                "incomplete trajectory for scenario {scenario}: {actual} samples, baseline has {expected}"
            ),
            RangeCardError::MisalignedSample { scenario, index } => write!(
                f,
                "scenario {scenario} sample {index} is not at the baseline distance"
            ),
            RangeCardError::Render(msg) => write!(f, "render failed: {msg}"),
        }
    }
}

impl Error for RangeCardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = RangeCardError::IncompleteTrajectory {
            scenario: "wind 0x03".to_string(),
            expected: 21,
            actual: 17,
        };
        let msg = err.to_string();
        assert!(msg.contains("wind 0x03"));
        assert!(msg.contains("17"));
        assert!(msg.contains("21"));

        let err = RangeCardError::solver("baseline".to_string(), SolverError::from("bad BC"));
        assert_eq!(
            err,
            RangeCardError::Solver {
                scenario: "baseline".to_string(),
                message: "bad BC".to_string(),
            }
        );
    }
}
