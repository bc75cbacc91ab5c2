//! Rhythm and tempo analysis algorithm specifications.

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// Specification for the `BeatTrackerDegara` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeatTrackerDegara;

impl Specification for BeatTrackerDegara {
    const ID: AlgorithmId = AlgorithmId::BeatTrackerDegara;
}

/// Specification for the `BeatTrackerMultiFeature` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeatTrackerMultiFeature;

impl Specification for BeatTrackerMultiFeature {
    const ID: AlgorithmId = AlgorithmId::BeatTrackerMultiFeature;
}

/// Specification for the `Beatogram` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Beatogram;

impl Specification for Beatogram {
    const ID: AlgorithmId = AlgorithmId::Beatogram;
}

/// Specification for the `BeatsLoudness` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeatsLoudness;

impl Specification for BeatsLoudness {
    const ID: AlgorithmId = AlgorithmId::BeatsLoudness;
}

/// Specification for the `BpmHistogram` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BpmHistogram;

impl Specification for BpmHistogram {
    const ID: AlgorithmId = AlgorithmId::BpmHistogram;
}

/// Specification for the `BpmHistogramDescriptors` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BpmHistogramDescriptors;

impl Specification for BpmHistogramDescriptors {
    const ID: AlgorithmId = AlgorithmId::BpmHistogramDescriptors;
}

/// Specification for the `BpmRubato` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BpmRubato;

impl Specification for BpmRubato {
    const ID: AlgorithmId = AlgorithmId::BpmRubato;
}

/// Specification for the `Danceability` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Danceability;

impl Specification for Danceability {
    const ID: AlgorithmId = AlgorithmId::Danceability;
}

/// Specification for the `HarmonicBpm` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarmonicBpm;

impl Specification for HarmonicBpm {
    const ID: AlgorithmId = AlgorithmId::HarmonicBpm;
}

/// Specification for the `LoopBpmConfidence` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopBpmConfidence;

impl Specification for LoopBpmConfidence {
    const ID: AlgorithmId = AlgorithmId::LoopBpmConfidence;
}

/// Specification for the `LoopBpmEstimator` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopBpmEstimator;

impl Specification for LoopBpmEstimator {
    const ID: AlgorithmId = AlgorithmId::LoopBpmEstimator;
}

/// Specification for the `Meter` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Meter;

impl Specification for Meter {
    const ID: AlgorithmId = AlgorithmId::Meter;
}

/// Specification for the `NoveltyCurve` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoveltyCurve;

impl Specification for NoveltyCurve {
    const ID: AlgorithmId = AlgorithmId::NoveltyCurve;
}

/// Specification for the `NoveltyCurveFixedBpmEstimator` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoveltyCurveFixedBpmEstimator;

impl Specification for NoveltyCurveFixedBpmEstimator {
    const ID: AlgorithmId = AlgorithmId::NoveltyCurveFixedBpmEstimator;
}

/// Specification for the `OnsetDetection` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnsetDetection;

impl Specification for OnsetDetection {
    const ID: AlgorithmId = AlgorithmId::OnsetDetection;
}

/// Specification for the `OnsetDetectionGlobal` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnsetDetectionGlobal;

impl Specification for OnsetDetectionGlobal {
    const ID: AlgorithmId = AlgorithmId::OnsetDetectionGlobal;
}

/// Specification for the `OnsetRate` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnsetRate;

impl Specification for OnsetRate {
    const ID: AlgorithmId = AlgorithmId::OnsetRate;
}

/// Specification for the `Onsets` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Onsets;

impl Specification for Onsets {
    const ID: AlgorithmId = AlgorithmId::Onsets;
}

/// Specification for the `PercivalBpmEstimator` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PercivalBpmEstimator;

impl Specification for PercivalBpmEstimator {
    const ID: AlgorithmId = AlgorithmId::PercivalBpmEstimator;
}

/// Specification for the `PercivalEnhanceHarmonics` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PercivalEnhanceHarmonics;

impl Specification for PercivalEnhanceHarmonics {
    const ID: AlgorithmId = AlgorithmId::PercivalEnhanceHarmonics;
}

/// Specification for the `PercivalEvaluatePulseTrains` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PercivalEvaluatePulseTrains;

impl Specification for PercivalEvaluatePulseTrains {
    const ID: AlgorithmId = AlgorithmId::PercivalEvaluatePulseTrains;
}

/// Specification for the `RhythmDescriptors` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RhythmDescriptors;

impl Specification for RhythmDescriptors {
    const ID: AlgorithmId = AlgorithmId::RhythmDescriptors;
}

/// Specification for the `RhythmExtractor` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RhythmExtractor;

impl Specification for RhythmExtractor {
    const ID: AlgorithmId = AlgorithmId::RhythmExtractor;
}

/// Specification for the `RhythmExtractor2013` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RhythmExtractor2013;

impl Specification for RhythmExtractor2013 {
    const ID: AlgorithmId = AlgorithmId::RhythmExtractor2013;
}

/// Specification for the `RhythmTransform` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RhythmTransform;

impl Specification for RhythmTransform {
    const ID: AlgorithmId = AlgorithmId::RhythmTransform;
}

/// Specification for the `SingleBeatLoudness` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleBeatLoudness;

impl Specification for SingleBeatLoudness {
    const ID: AlgorithmId = AlgorithmId::SingleBeatLoudness;
}

/// Specification for the `SuperFluxExtractor` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuperFluxExtractor;

impl Specification for SuperFluxExtractor {
    const ID: AlgorithmId = AlgorithmId::SuperFluxExtractor;
}

/// Specification for the `SuperFluxNovelty` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuperFluxNovelty;

impl Specification for SuperFluxNovelty {
    const ID: AlgorithmId = AlgorithmId::SuperFluxNovelty;
}

/// Specification for the `SuperFluxPeaks` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuperFluxPeaks;

impl Specification for SuperFluxPeaks {
    const ID: AlgorithmId = AlgorithmId::SuperFluxPeaks;
}

/// Specification for the `TempoScaleBands` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TempoScaleBands;

impl Specification for TempoScaleBands {
    const ID: AlgorithmId = AlgorithmId::TempoScaleBands;
}

/// Specification for the `TempoTap` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TempoTap;

impl Specification for TempoTap {
    const ID: AlgorithmId = AlgorithmId::TempoTap;
}

/// Specification for the `TempoTapDegara` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TempoTapDegara;

impl Specification for TempoTapDegara {
    const ID: AlgorithmId = AlgorithmId::TempoTapDegara;
}

/// Specification for the `TempoTapMaxAgreement` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TempoTapMaxAgreement;

impl Specification for TempoTapMaxAgreement {
    const ID: AlgorithmId = AlgorithmId::TempoTapMaxAgreement;
}

/// Specification for the `TempoTapTicks` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TempoTapTicks;

impl Specification for TempoTapTicks {
    const ID: AlgorithmId = AlgorithmId::TempoTapTicks;
}
