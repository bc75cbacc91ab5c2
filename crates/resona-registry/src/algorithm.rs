//! Generic and typed algorithm handles.
//!
//! The engine hands out opaque [`EngineHandle`]s; this module wraps them in
//! two layers. [`GenericAlgorithm`] pairs a handle with the identifier it was
//! instantiated for, established once at the factory boundary.
//! [`TypedAlgorithm`] is the statically typed view, recovered from the
//! generic one by checking that tag against the specification's identifier.
//! The check turns what would otherwise be a silent mistyping into a single,
//! attributable failure at the downcast site.
//!
//! The registry takes no ownership stake in algorithm instances: both handle
//! types are plain owned values, and lifecycle management of the underlying
//! engine objects stays with the engine and its caller.

use core::marker::PhantomData;

use resona_core::{AlgorithmFactory, EngineError, EngineHandle};

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// A type-erased handle to an instantiated algorithm.
///
/// Carries the identifier the algorithm was instantiated for alongside the
/// engine's opaque handle. The tag is what makes a later
/// [`TypedAlgorithm::downcast`] checkable instead of a blind reinterpretation.
pub struct GenericAlgorithm {
    id: AlgorithmId,
    handle: Box<dyn EngineHandle>,
}

impl GenericAlgorithm {
    /// Wraps an engine handle, tagging it with the identifier it was
    /// instantiated for.
    ///
    /// The caller must supply the identifier the engine actually used;
    /// prefer [`GenericAlgorithm::instantiate`], which establishes the tag
    /// itself and verifies it against the handle.
    pub fn new(id: AlgorithmId, handle: Box<dyn EngineHandle>) -> Self {
        Self { id, handle }
    }

    /// Instantiates an algorithm through the engine's factory and wraps the
    /// resulting handle with a verified tag.
    ///
    /// The factory is keyed by the canonical textual name. If the handle the
    /// engine produces reports a different algorithm name than requested,
    /// this returns [`EngineError::NameMismatch`] rather than constructing a
    /// handle whose tag lies.
    pub fn instantiate(
        factory: &dyn AlgorithmFactory,
        id: AlgorithmId,
    ) -> Result<Self, EngineError> {
        let handle = factory.instantiate(id.name())?;
        if handle.algorithm_name() != id.name() {
            return Err(EngineError::NameMismatch {
                requested: id.name().to_string(),
                produced: handle.algorithm_name().to_string(),
            });
        }
        Ok(Self { id, handle })
    }

    /// The identifier this handle was instantiated for.
    pub fn id(&self) -> AlgorithmId {
        self.id
    }

    /// The engine's opaque handle.
    pub fn engine_handle(&self) -> &dyn EngineHandle {
        self.handle.as_ref()
    }

    /// Consumes the wrapper and returns the engine's handle.
    pub fn into_engine_handle(self) -> Box<dyn EngineHandle> {
        self.handle
    }
}

impl core::fmt::Debug for GenericAlgorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GenericAlgorithm")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// A handle statically known to wrap the algorithm for specification `S`.
///
/// Obtained by downcasting a [`GenericAlgorithm`]; once constructed, all
/// further interaction with the algorithm is statically matched to `S`.
pub struct TypedAlgorithm<S: Specification> {
    inner: GenericAlgorithm,
    _spec: PhantomData<S>,
}

impl<S: Specification> TypedAlgorithm<S> {
    /// Recovers the typed handle from a type-erased one.
    ///
    /// # Panics
    ///
    /// Panics if `algorithm` was instantiated for an identifier other than
    /// `S::ID`. That situation is a contract violation by the caller or a
    /// bug in the engine's instantiation path, and the handle's shape cannot
    /// be trusted, so there is no recoverable variant of this operation.
    pub fn downcast(algorithm: GenericAlgorithm) -> Self {
        assert_eq!(
            algorithm.id(),
            S::ID,
            "downcast mismatch: handle instantiated for `{}` downcast as `{}`",
            algorithm.id(),
            S::ID,
        );
        Self {
            inner: algorithm,
            _spec: PhantomData,
        }
    }

    /// Instantiates the algorithm for `S` through the engine's factory and
    /// returns it already typed.
    pub fn instantiate(factory: &dyn AlgorithmFactory) -> Result<Self, EngineError> {
        GenericAlgorithm::instantiate(factory, S::ID).map(Self::downcast)
    }

    /// The identifier of the wrapped algorithm. Always equals `S::ID`.
    pub fn id(&self) -> AlgorithmId {
        S::ID
    }

    /// Canonical textual name of the wrapped algorithm.
    pub fn name(&self) -> &'static str {
        S::NAME
    }

    /// The engine's opaque handle.
    pub fn engine_handle(&self) -> &dyn EngineHandle {
        self.inner.engine_handle()
    }

    /// Gives up the static typing and returns the generic handle.
    pub fn into_generic(self) -> GenericAlgorithm {
        self.inner
    }
}

impl<S: Specification> core::fmt::Debug for TypedAlgorithm<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypedAlgorithm")
            .field("id", &S::ID)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs;

    #[derive(Debug)]
    struct StubHandle {
        name: &'static str,
    }

    impl EngineHandle for StubHandle {
        fn algorithm_name(&self) -> &str {
            self.name
        }
    }

    /// Factory that honors the requested name.
    struct StubFactory;

    impl AlgorithmFactory for StubFactory {
        fn instantiate(&self, name: &str) -> Result<Box<dyn EngineHandle>, EngineError> {
            match AlgorithmId::from_name(name) {
                Some(id) => Ok(Box::new(StubHandle { name: id.name() })),
                None => Err(EngineError::UnknownAlgorithm(name.to_string())),
            }
        }
    }

    /// Factory with a broken instantiation path: always produces `RMS`.
    struct ConfusedFactory;

    impl AlgorithmFactory for ConfusedFactory {
        fn instantiate(&self, _name: &str) -> Result<Box<dyn EngineHandle>, EngineError> {
            Ok(Box::new(StubHandle { name: "RMS" }))
        }
    }

    #[test]
    fn instantiate_tags_handle_with_id() {
        let generic = GenericAlgorithm::instantiate(&StubFactory, AlgorithmId::Mfcc).unwrap();
        assert_eq!(generic.id(), AlgorithmId::Mfcc);
        assert_eq!(generic.engine_handle().algorithm_name(), "MFCC");
    }

    #[test]
    fn instantiate_rejects_name_mismatch() {
        let err = GenericAlgorithm::instantiate(&ConfusedFactory, AlgorithmId::Mfcc).unwrap_err();
        assert!(matches!(
            err,
            EngineError::NameMismatch { ref requested, ref produced }
                if requested == "MFCC" && produced == "RMS"
        ));
    }

    #[test]
    fn downcast_accepts_matching_tag() {
        let generic = GenericAlgorithm::instantiate(&StubFactory, AlgorithmId::Rms).unwrap();
        let typed = specs::Rms::downcast(generic);
        assert_eq!(typed.id(), AlgorithmId::Rms);
        assert_eq!(typed.name(), "RMS");
    }

    #[test]
    #[should_panic(expected = "downcast mismatch")]
    fn downcast_panics_on_mismatched_tag() {
        let generic = GenericAlgorithm::instantiate(&StubFactory, AlgorithmId::Rms).unwrap();
        let _ = TypedAlgorithm::<specs::Mfcc>::downcast(generic);
    }

    #[test]
    fn typed_instantiate_round_trips() {
        let typed = TypedAlgorithm::<specs::PitchYin>::instantiate(&StubFactory).unwrap();
        assert_eq!(typed.id(), AlgorithmId::PitchYin);
        let generic = typed.into_generic();
        assert_eq!(generic.id(), AlgorithmId::PitchYin);
    }
}
