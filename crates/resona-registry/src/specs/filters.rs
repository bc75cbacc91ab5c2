//! Digital filter algorithm specifications.

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// Specification for the `AllPass` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllPass;

impl Specification for AllPass {
    const ID: AlgorithmId = AlgorithmId::AllPass;
}

/// Specification for the `BandPass` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BandPass;

impl Specification for BandPass {
    const ID: AlgorithmId = AlgorithmId::BandPass;
}

/// Specification for the `BandReject` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BandReject;

impl Specification for BandReject {
    const ID: AlgorithmId = AlgorithmId::BandReject;
}

/// Specification for the `DCRemoval` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DcRemoval;

impl Specification for DcRemoval {
    const ID: AlgorithmId = AlgorithmId::DcRemoval;
}

/// Specification for the `EqualLoudness` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualLoudness;

impl Specification for EqualLoudness {
    const ID: AlgorithmId = AlgorithmId::EqualLoudness;
}

/// Specification for the `HighPass` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighPass;

impl Specification for HighPass {
    const ID: AlgorithmId = AlgorithmId::HighPass;
}

/// Specification for the `IIR` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iir;

impl Specification for Iir {
    const ID: AlgorithmId = AlgorithmId::Iir;
}

/// Specification for the `LowPass` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowPass;

impl Specification for LowPass {
    const ID: AlgorithmId = AlgorithmId::LowPass;
}

/// Specification for the `MaxFilter` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFilter;

impl Specification for MaxFilter {
    const ID: AlgorithmId = AlgorithmId::MaxFilter;
}

/// Specification for the `MovingAverage` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovingAverage;

impl Specification for MovingAverage {
    const ID: AlgorithmId = AlgorithmId::MovingAverage;
}
