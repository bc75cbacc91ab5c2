//! Traits implemented by the external analysis engine.

use crate::error::EngineError;

/// Opaque runtime handle to an algorithm instantiated by the engine.
///
/// The registry never looks inside a handle; the one thing it relies on is
/// the handle reporting which algorithm it was instantiated for, so that the
/// tag on a wrapped handle can be established truthfully at the factory
/// boundary instead of being taken on faith.
pub trait EngineHandle: core::fmt::Debug {
    /// Canonical name of the algorithm this handle was instantiated for.
    ///
    /// Must be stable for the lifetime of the handle and must match the name
    /// the factory was given when the handle was created.
    fn algorithm_name(&self) -> &str;
}

/// The engine's factory capability.
///
/// Given the canonical textual name of an algorithm, produces a fresh handle
/// for it. The factory is string-keyed because that is the engine's native
/// interface; resolving strings to the closed identifier catalog happens on
/// the registry side, before the factory is consulted.
pub trait AlgorithmFactory {
    /// Instantiates the algorithm with the given canonical name.
    fn instantiate(&self, name: &str) -> Result<Box<dyn EngineHandle>, EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Named(&'static str);

    impl EngineHandle for Named {
        fn algorithm_name(&self) -> &str {
            self.0
        }
    }

    struct OneAlgorithm;

    impl AlgorithmFactory for OneAlgorithm {
        fn instantiate(&self, name: &str) -> Result<Box<dyn EngineHandle>, EngineError> {
            if name == "RMS" {
                Ok(Box::new(Named("RMS")))
            } else {
                Err(EngineError::UnknownAlgorithm(name.to_string()))
            }
        }
    }

    #[test]
    fn factory_produces_named_handle() {
        let handle = OneAlgorithm.instantiate("RMS").unwrap();
        assert_eq!(handle.algorithm_name(), "RMS");
    }

    #[test]
    fn factory_reports_unknown_algorithm() {
        let err = OneAlgorithm.instantiate("Nope").unwrap_err();
        assert!(matches!(err, EngineError::UnknownAlgorithm(ref n) if n == "Nope"));
    }
}
