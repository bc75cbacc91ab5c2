//! Statistical descriptor algorithm specifications.

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// Specification for the `CentralMoments` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CentralMoments;

impl Specification for CentralMoments {
    const ID: AlgorithmId = AlgorithmId::CentralMoments;
}

/// Specification for the `Centroid` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Centroid;

impl Specification for Centroid {
    const ID: AlgorithmId = AlgorithmId::Centroid;
}

/// Specification for the `Crest` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Crest;

impl Specification for Crest {
    const ID: AlgorithmId = AlgorithmId::Crest;
}

/// Specification for the `Decrease` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decrease;

impl Specification for Decrease {
    const ID: AlgorithmId = AlgorithmId::Decrease;
}

/// Specification for the `DistributionShape` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistributionShape;

impl Specification for DistributionShape {
    const ID: AlgorithmId = AlgorithmId::DistributionShape;
}

/// Specification for the `Energy` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Energy;

impl Specification for Energy {
    const ID: AlgorithmId = AlgorithmId::Energy;
}

/// Specification for the `Entropy` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Entropy;

impl Specification for Entropy {
    const ID: AlgorithmId = AlgorithmId::Entropy;
}

/// Specification for the `Flatness` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flatness;

impl Specification for Flatness {
    const ID: AlgorithmId = AlgorithmId::Flatness;
}

/// Specification for the `GeometricMean` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeometricMean;

impl Specification for GeometricMean {
    const ID: AlgorithmId = AlgorithmId::GeometricMean;
}

/// Specification for the `InstantPower` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstantPower;

impl Specification for InstantPower {
    const ID: AlgorithmId = AlgorithmId::InstantPower;
}

/// Specification for the `Mean` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mean;

impl Specification for Mean {
    const ID: AlgorithmId = AlgorithmId::Mean;
}

/// Specification for the `Median` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Median;

impl Specification for Median {
    const ID: AlgorithmId = AlgorithmId::Median;
}

/// Specification for the `PoolAggregator` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolAggregator;

impl Specification for PoolAggregator {
    const ID: AlgorithmId = AlgorithmId::PoolAggregator;
}

/// Specification for the `PowerMean` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerMean;

impl Specification for PowerMean {
    const ID: AlgorithmId = AlgorithmId::PowerMean;
}

/// Specification for the `RMS` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rms;

impl Specification for Rms {
    const ID: AlgorithmId = AlgorithmId::Rms;
}

/// Specification for the `RawMoments` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawMoments;

impl Specification for RawMoments {
    const ID: AlgorithmId = AlgorithmId::RawMoments;
}

/// Specification for the `SingleGaussian` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleGaussian;

impl Specification for SingleGaussian {
    const ID: AlgorithmId = AlgorithmId::SingleGaussian;
}

/// Specification for the `Variance` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Variance;

impl Specification for Variance {
    const ID: AlgorithmId = AlgorithmId::Variance;
}
