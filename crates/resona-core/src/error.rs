//! Error types for the engine boundary.

use thiserror::Error;

/// Errors that can occur while crossing the engine boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine has no algorithm with the requested name.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The engine failed to instantiate an algorithm it does know about.
    #[error("failed to instantiate algorithm '{name}': {reason}")]
    InstantiationFailed {
        /// Canonical name of the algorithm that failed to instantiate.
        name: String,
        /// Engine-reported reason for the failure.
        reason: String,
    },

    /// The engine produced a handle for a different algorithm than requested.
    ///
    /// This indicates a bug in the engine's instantiation path; a handle with
    /// an untruthful tag must never be constructed from it.
    #[error("engine produced handle for '{produced}' when '{requested}' was requested")]
    NameMismatch {
        /// Algorithm name that was requested.
        requested: String,
        /// Algorithm name the produced handle reports.
        produced: String,
    },
}

impl EngineError {
    /// Create an instantiation failure error.
    pub fn instantiation_failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        EngineError::InstantiationFailed {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_algorithm_display() {
        let err = EngineError::UnknownAlgorithm("Nope".to_string());
        assert_eq!(err.to_string(), "unknown algorithm: Nope");
    }

    #[test]
    fn instantiation_failed_factory_and_display() {
        let err = EngineError::instantiation_failed("MFCC", "out of memory");
        assert!(matches!(err, EngineError::InstantiationFailed { ref name, .. } if name == "MFCC"));
        assert_eq!(
            err.to_string(),
            "failed to instantiate algorithm 'MFCC': out of memory"
        );
    }

    #[test]
    fn name_mismatch_display() {
        let err = EngineError::NameMismatch {
            requested: "MFCC".to_string(),
            produced: "RMS".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "engine produced handle for 'RMS' when 'MFCC' was requested"
        );
    }
}
