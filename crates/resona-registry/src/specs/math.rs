//! Elementary math algorithm specifications.

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// Specification for the `CartesianToPolar` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartesianToPolar;

impl Specification for CartesianToPolar {
    const ID: AlgorithmId = AlgorithmId::CartesianToPolar;
}

/// Specification for the `Magnitude` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Magnitude;

impl Specification for Magnitude {
    const ID: AlgorithmId = AlgorithmId::Magnitude;
}

/// Specification for the `PolarToCartesian` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolarToCartesian;

impl Specification for PolarToCartesian {
    const ID: AlgorithmId = AlgorithmId::PolarToCartesian;
}
