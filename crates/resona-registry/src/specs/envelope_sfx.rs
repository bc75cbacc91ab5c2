//! Envelope and sound-effects descriptor algorithm specifications.

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// Specification for the `AfterMaxToBeforeMaxEnergyRatio` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AfterMaxToBeforeMaxEnergyRatio;

impl Specification for AfterMaxToBeforeMaxEnergyRatio {
    const ID: AlgorithmId = AlgorithmId::AfterMaxToBeforeMaxEnergyRatio;
}

/// Specification for the `DerivativeSFX` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerivativeSfx;

impl Specification for DerivativeSfx {
    const ID: AlgorithmId = AlgorithmId::DerivativeSfx;
}

/// Specification for the `Envelope` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Envelope;

impl Specification for Envelope {
    const ID: AlgorithmId = AlgorithmId::Envelope;
}

/// Specification for the `FlatnessSFX` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatnessSfx;

impl Specification for FlatnessSfx {
    const ID: AlgorithmId = AlgorithmId::FlatnessSfx;
}

/// Specification for the `LogAttackTime` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogAttackTime;

impl Specification for LogAttackTime {
    const ID: AlgorithmId = AlgorithmId::LogAttackTime;
}

/// Specification for the `MaxToTotal` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxToTotal;

impl Specification for MaxToTotal {
    const ID: AlgorithmId = AlgorithmId::MaxToTotal;
}

/// Specification for the `MinToTotal` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinToTotal;

impl Specification for MinToTotal {
    const ID: AlgorithmId = AlgorithmId::MinToTotal;
}

/// Specification for the `StrongDecay` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrongDecay;

impl Specification for StrongDecay {
    const ID: AlgorithmId = AlgorithmId::StrongDecay;
}

/// Specification for the `TCToTotal` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TcToTotal;

impl Specification for TcToTotal {
    const ID: AlgorithmId = AlgorithmId::TcToTotal;
}
