//! Duration and silence detection algorithm specifications.

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// Specification for the `Duration` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Duration;

impl Specification for Duration {
    const ID: AlgorithmId = AlgorithmId::Duration;
}

/// Specification for the `EffectiveDuration` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectiveDuration;

impl Specification for EffectiveDuration {
    const ID: AlgorithmId = AlgorithmId::EffectiveDuration;
}

/// Specification for the `FadeDetection` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FadeDetection;

impl Specification for FadeDetection {
    const ID: AlgorithmId = AlgorithmId::FadeDetection;
}

/// Specification for the `SilenceRate` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SilenceRate;

impl Specification for SilenceRate {
    const ID: AlgorithmId = AlgorithmId::SilenceRate;
}

/// Specification for the `StartStopSilence` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartStopSilence;

impl Specification for StartStopSilence {
    const ID: AlgorithmId = AlgorithmId::StartStopSilence;
}
