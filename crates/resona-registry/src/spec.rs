//! The `Specification` trait and supporting types.
//!
//! A specification is a zero-sized type standing for one algorithm in the
//! catalog. It carries the identifier it denotes as an associated constant
//! and knows how to recover a strongly typed handle from a type-erased one.
//! Every specification type lives in [`crate::specs`] and is wired to its
//! identifier by the dispatcher in [`crate::dispatch`].

use crate::algorithm::{GenericAlgorithm, TypedAlgorithm};
use crate::id::{AlgorithmId, Category};

/// A statically known description of one algorithm.
///
/// Implemented once per catalog member. The only required item is [`ID`];
/// everything else is derived from it, which keeps each impl down to a single
/// line and makes it impossible for a specification's name or category to
/// disagree with its identifier.
///
/// [`ID`]: Specification::ID
pub trait Specification: Copy + Default + Send + Sync + 'static {
    /// The identifier this specification denotes.
    const ID: AlgorithmId;

    /// The canonical textual name of the algorithm.
    const NAME: &'static str = Self::ID.name();

    /// Runtime-value form of the specification.
    const DESCRIPTOR: SpecDescriptor = SpecDescriptor {
        id: Self::ID,
        name: Self::NAME,
        category: Self::ID.category(),
    };

    /// Recovers the strongly typed handle for this specification from a
    /// type-erased one.
    ///
    /// # Panics
    ///
    /// Panics if `algorithm` was instantiated for a different identifier.
    /// A mistyped handle must never escape this boundary: downstream code
    /// trusts the static type without further checks.
    fn downcast(algorithm: GenericAlgorithm) -> TypedAlgorithm<Self> {
        TypedAlgorithm::downcast(algorithm)
    }
}

/// Runtime-value description of a specification.
///
/// Produced by [`AlgorithmId::descriptor`] for callers that want to inspect
/// a registry entry without going generic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecDescriptor {
    /// The identifier the specification denotes.
    pub id: AlgorithmId,
    /// Canonical textual name of the algorithm.
    pub name: &'static str,
    /// Category the algorithm is documented under.
    pub category: Category,
}

/// Visitor invoked by [`AlgorithmId::with_spec`] with the specification type
/// registered for an identifier.
///
/// This is how a call site that only has a runtime identifier gets its hands
/// on the static type: implement the visitor, do the typed work inside
/// `visit`, and let the dispatcher pick the instantiation.
///
/// # Example
///
/// ```rust
/// use resona_registry::{AlgorithmId, SpecVisitor, Specification};
///
/// struct CanonicalName;
///
/// impl SpecVisitor for CanonicalName {
///     type Output = &'static str;
///
///     fn visit<S: Specification>(self) -> &'static str {
///         S::NAME
///     }
/// }
///
/// assert_eq!(AlgorithmId::Mfcc.with_spec(CanonicalName), "MFCC");
/// ```
pub trait SpecVisitor {
    /// Value produced by the visit.
    type Output;

    /// Called with the specification type registered for the dispatched
    /// identifier.
    fn visit<S: Specification>(self) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs;

    #[test]
    fn name_and_descriptor_derive_from_id() {
        assert_eq!(specs::Rms::ID, AlgorithmId::Rms);
        assert_eq!(specs::Rms::NAME, "RMS");
        assert_eq!(specs::Rms::DESCRIPTOR.id, AlgorithmId::Rms);
        assert_eq!(specs::Rms::DESCRIPTOR.category, Category::Statistics);
    }

    #[test]
    fn visitor_receives_registered_spec() {
        struct Name;

        impl SpecVisitor for Name {
            type Output = &'static str;

            fn visit<S: Specification>(self) -> &'static str {
                S::NAME
            }
        }

        assert_eq!(AlgorithmId::PitchYin.with_spec(Name), "PitchYin");
        assert_eq!(AlgorithmId::Fftc.with_spec(Name), "FFTC");
    }
}
