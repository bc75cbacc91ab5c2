//! Tonal feature algorithm specifications.

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// Specification for the `ChordsDescriptors` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChordsDescriptors;

impl Specification for ChordsDescriptors {
    const ID: AlgorithmId = AlgorithmId::ChordsDescriptors;
}

/// Specification for the `ChordsDetection` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChordsDetection;

impl Specification for ChordsDetection {
    const ID: AlgorithmId = AlgorithmId::ChordsDetection;
}

/// Specification for the `ChordsDetectionBeats` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChordsDetectionBeats;

impl Specification for ChordsDetectionBeats {
    const ID: AlgorithmId = AlgorithmId::ChordsDetectionBeats;
}

/// Specification for the `Chromagram` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chromagram;

impl Specification for Chromagram {
    const ID: AlgorithmId = AlgorithmId::Chromagram;
}

/// Specification for the `Dissonance` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dissonance;

impl Specification for Dissonance {
    const ID: AlgorithmId = AlgorithmId::Dissonance;
}

/// Specification for the `HPCP` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hpcp;

impl Specification for Hpcp {
    const ID: AlgorithmId = AlgorithmId::Hpcp;
}

/// Specification for the `HarmonicPeaks` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarmonicPeaks;

impl Specification for HarmonicPeaks {
    const ID: AlgorithmId = AlgorithmId::HarmonicPeaks;
}

/// Specification for the `HighResolutionFeatures` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighResolutionFeatures;

impl Specification for HighResolutionFeatures {
    const ID: AlgorithmId = AlgorithmId::HighResolutionFeatures;
}

/// Specification for the `Inharmonicity` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inharmonicity;

impl Specification for Inharmonicity {
    const ID: AlgorithmId = AlgorithmId::Inharmonicity;
}

/// Specification for the `Key` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Key;

impl Specification for Key {
    const ID: AlgorithmId = AlgorithmId::Key;
}

/// Specification for the `KeyExtractor` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyExtractor;

impl Specification for KeyExtractor {
    const ID: AlgorithmId = AlgorithmId::KeyExtractor;
}

/// Specification for the `OddToEvenHarmonicEnergyRatio` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OddToEvenHarmonicEnergyRatio;

impl Specification for OddToEvenHarmonicEnergyRatio {
    const ID: AlgorithmId = AlgorithmId::OddToEvenHarmonicEnergyRatio;
}

/// Specification for the `PitchSalience` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PitchSalience;

impl Specification for PitchSalience {
    const ID: AlgorithmId = AlgorithmId::PitchSalience;
}

/// Specification for the `SpectrumCQ` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpectrumCq;

impl Specification for SpectrumCq {
    const ID: AlgorithmId = AlgorithmId::SpectrumCq;
}

/// Specification for the `TonalExtractor` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TonalExtractor;

impl Specification for TonalExtractor {
    const ID: AlgorithmId = AlgorithmId::TonalExtractor;
}

/// Specification for the `TonicIndianArtMusic` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TonicIndianArtMusic;

impl Specification for TonicIndianArtMusic {
    const ID: AlgorithmId = AlgorithmId::TonicIndianArtMusic;
}

/// Specification for the `Tristimulus` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tristimulus;

impl Specification for Tristimulus {
    const ID: AlgorithmId = AlgorithmId::Tristimulus;
}

/// Specification for the `TuningFrequency` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TuningFrequency;

impl Specification for TuningFrequency {
    const ID: AlgorithmId = AlgorithmId::TuningFrequency;
}

/// Specification for the `TuningFrequencyExtractor` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TuningFrequencyExtractor;

impl Specification for TuningFrequencyExtractor {
    const ID: AlgorithmId = AlgorithmId::TuningFrequencyExtractor;
}
