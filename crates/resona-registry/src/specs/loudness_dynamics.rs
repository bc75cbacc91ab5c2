//! Loudness and dynamics algorithm specifications.

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// Specification for the `DynamicComplexity` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DynamicComplexity;

impl Specification for DynamicComplexity {
    const ID: AlgorithmId = AlgorithmId::DynamicComplexity;
}

/// Specification for the `Intensity` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intensity;

impl Specification for Intensity {
    const ID: AlgorithmId = AlgorithmId::Intensity;
}

/// Specification for the `Larm` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Larm;

impl Specification for Larm {
    const ID: AlgorithmId = AlgorithmId::Larm;
}

/// Specification for the `Leq` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Leq;

impl Specification for Leq {
    const ID: AlgorithmId = AlgorithmId::Leq;
}

/// Specification for the `LevelExtractor` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelExtractor;

impl Specification for LevelExtractor {
    const ID: AlgorithmId = AlgorithmId::LevelExtractor;
}

/// Specification for the `Loudness` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loudness;

impl Specification for Loudness {
    const ID: AlgorithmId = AlgorithmId::Loudness;
}

/// Specification for the `LoudnessEBUR128` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoudnessEbur128;

impl Specification for LoudnessEbur128 {
    const ID: AlgorithmId = AlgorithmId::LoudnessEbur128;
}

/// Specification for the `LoudnessVickers` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoudnessVickers;

impl Specification for LoudnessVickers {
    const ID: AlgorithmId = AlgorithmId::LoudnessVickers;
}

/// Specification for the `ReplayGain` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayGain;

impl Specification for ReplayGain {
    const ID: AlgorithmId = AlgorithmId::ReplayGain;
}
