//! End-to-end tests for the catalog, dispatcher, and handle downcasting,
//! driven through a stub engine standing in for the external collaborator.

use std::marker::PhantomData;

use resona_core::{AlgorithmFactory, EngineError, EngineHandle};
use resona_registry::{
    AlgorithmId, GenericAlgorithm, SpecVisitor, Specification, TypedAlgorithm, specs, typed,
};

/// Minimal engine handle that remembers which algorithm it was built for.
#[derive(Debug)]
struct StubHandle {
    name: &'static str,
}

impl EngineHandle for StubHandle {
    fn algorithm_name(&self) -> &str {
        self.name
    }
}

/// Engine stub that can instantiate every catalog member.
struct StubEngine;

impl AlgorithmFactory for StubEngine {
    fn instantiate(&self, name: &str) -> Result<Box<dyn EngineHandle>, EngineError> {
        match AlgorithmId::from_name(name) {
            Some(id) => Ok(Box::new(StubHandle { name: id.name() })),
            None => Err(EngineError::UnknownAlgorithm(name.to_string())),
        }
    }
}

#[test]
fn every_identifier_instantiates_and_downcasts() {
    struct Downcast(GenericAlgorithm);

    impl SpecVisitor for Downcast {
        type Output = AlgorithmId;

        fn visit<S: Specification>(self) -> AlgorithmId {
            S::downcast(self.0).id()
        }
    }

    for id in AlgorithmId::all() {
        let generic = GenericAlgorithm::instantiate(&StubEngine, id)
            .unwrap_or_else(|err| panic!("instantiation failed for {id}: {err}"));
        assert_eq!(generic.id(), id);
        let recovered = id.with_spec(Downcast(generic));
        assert_eq!(recovered, id, "downcast changed identity for {id}");
    }
}

#[test]
#[should_panic(expected = "downcast mismatch")]
fn cross_identifier_downcast_is_fatal() {
    // Handle truthfully tagged `PitchYin`, downcast as `Mfcc`.
    let generic = GenericAlgorithm::instantiate(&StubEngine, AlgorithmId::PitchYin).unwrap();
    let _ = specs::Mfcc::downcast(generic);
}

#[test]
fn factory_rejects_unknown_textual_identifier() {
    let err = StubEngine.instantiate("NotARealAlgorithm").unwrap_err();
    assert!(matches!(err, EngineError::UnknownAlgorithm(_)));
}

#[test]
fn typed_shortcut_instantiates_directly() {
    let windowing = typed::Windowing::instantiate(&StubEngine).unwrap();
    assert_eq!(windowing.id(), AlgorithmId::Windowing);
    assert_eq!(windowing.engine_handle().algorithm_name(), "Windowing");
}

#[test]
fn textual_boundary_round_trip() {
    // Simulates boundary code: a configuration string becomes an identifier,
    // the identifier becomes a typed handle.
    let raw = "SpectralCentroidTime";
    assert!(AlgorithmId::is_valid(raw));
    let id: AlgorithmId = raw.parse().unwrap();
    let generic = GenericAlgorithm::instantiate(&StubEngine, id).unwrap();
    let handle = specs::SpectralCentroidTime::downcast(generic);
    assert_eq!(handle.name(), raw);
}

// The shortcut aliases must denote exactly the same types as the category
// paths and the dispatcher. Type equality is checked at compile time.
fn same_type<T>(_: PhantomData<T>, _: PhantomData<T>) {}

#[test]
fn aliases_denote_the_registered_types() {
    same_type(
        PhantomData::<specs::Mfcc>,
        PhantomData::<specs::spectral::Mfcc>,
    );
    same_type(
        PhantomData::<specs::BeatTrackerDegara>,
        PhantomData::<specs::rhythm::BeatTrackerDegara>,
    );
    same_type(
        PhantomData::<typed::Rms>,
        PhantomData::<TypedAlgorithm<specs::statistics::Rms>>,
    );
    same_type(
        PhantomData::<typed::SBic>,
        PhantomData::<TypedAlgorithm<specs::segmentation::SBic>>,
    );
}
