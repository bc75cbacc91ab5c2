//! Total dispatch from runtime identifiers to static specification types.
//!
//! A caller usually holds an [`AlgorithmId`] recovered from configuration or
//! some other textual boundary, but wants the statically typed specification
//! registered for it. [`AlgorithmId::with_spec`] bridges the two worlds: it
//! matches exhaustively over the closed catalog and invokes a [`SpecVisitor`]
//! with the specification type for the given identifier. Exhaustiveness is
//! checked by the compiler, so a catalog member without a registry entry (or
//! the reverse) fails the build rather than surfacing at runtime.

use crate::id::AlgorithmId;
use crate::spec::{SpecDescriptor, SpecVisitor, Specification};
use crate::specs;

impl AlgorithmId {
    /// Dispatches `visitor` to the specification type registered for this
    /// identifier.
    ///
    /// This is a total function: every catalog member has exactly one arm,
    /// and no arm is reachable from more than one identifier. Adding a
    /// variant without registering its specification is a compile error.
    pub fn with_spec<V: SpecVisitor>(self, visitor: V) -> V::Output {
        match self {
            Self::BeatTrackerDegara => visitor.visit::<specs::BeatTrackerDegara>(),
            Self::BeatTrackerMultiFeature => visitor.visit::<specs::BeatTrackerMultiFeature>(),
            Self::Beatogram => visitor.visit::<specs::Beatogram>(),
            Self::BeatsLoudness => visitor.visit::<specs::BeatsLoudness>(),
            Self::BpmHistogram => visitor.visit::<specs::BpmHistogram>(),
            Self::BpmHistogramDescriptors => visitor.visit::<specs::BpmHistogramDescriptors>(),
            Self::BpmRubato => visitor.visit::<specs::BpmRubato>(),
            Self::Danceability => visitor.visit::<specs::Danceability>(),
            Self::HarmonicBpm => visitor.visit::<specs::HarmonicBpm>(),
            Self::LoopBpmConfidence => visitor.visit::<specs::LoopBpmConfidence>(),
            Self::LoopBpmEstimator => visitor.visit::<specs::LoopBpmEstimator>(),
            Self::Meter => visitor.visit::<specs::Meter>(),
            Self::NoveltyCurve => visitor.visit::<specs::NoveltyCurve>(),
            Self::NoveltyCurveFixedBpmEstimator => visitor.visit::<specs::NoveltyCurveFixedBpmEstimator>(),
            Self::OnsetDetection => visitor.visit::<specs::OnsetDetection>(),
            Self::OnsetDetectionGlobal => visitor.visit::<specs::OnsetDetectionGlobal>(),
            Self::OnsetRate => visitor.visit::<specs::OnsetRate>(),
            Self::Onsets => visitor.visit::<specs::Onsets>(),
            Self::PercivalBpmEstimator => visitor.visit::<specs::PercivalBpmEstimator>(),
            Self::PercivalEnhanceHarmonics => visitor.visit::<specs::PercivalEnhanceHarmonics>(),
            Self::PercivalEvaluatePulseTrains => visitor.visit::<specs::PercivalEvaluatePulseTrains>(),
            Self::RhythmDescriptors => visitor.visit::<specs::RhythmDescriptors>(),
            Self::RhythmExtractor => visitor.visit::<specs::RhythmExtractor>(),
            Self::RhythmExtractor2013 => visitor.visit::<specs::RhythmExtractor2013>(),
            Self::RhythmTransform => visitor.visit::<specs::RhythmTransform>(),
            Self::SingleBeatLoudness => visitor.visit::<specs::SingleBeatLoudness>(),
            Self::SuperFluxExtractor => visitor.visit::<specs::SuperFluxExtractor>(),
            Self::SuperFluxNovelty => visitor.visit::<specs::SuperFluxNovelty>(),
            Self::SuperFluxPeaks => visitor.visit::<specs::SuperFluxPeaks>(),
            Self::TempoScaleBands => visitor.visit::<specs::TempoScaleBands>(),
            Self::TempoTap => visitor.visit::<specs::TempoTap>(),
            Self::TempoTapDegara => visitor.visit::<specs::TempoTapDegara>(),
            Self::TempoTapMaxAgreement => visitor.visit::<specs::TempoTapMaxAgreement>(),
            Self::TempoTapTicks => visitor.visit::<specs::TempoTapTicks>(),
            Self::MultiPitchKlapuri => visitor.visit::<specs::MultiPitchKlapuri>(),
            Self::MultiPitchMelodia => visitor.visit::<specs::MultiPitchMelodia>(),
            Self::PitchContourSegmentation => visitor.visit::<specs::PitchContourSegmentation>(),
            Self::PitchContours => visitor.visit::<specs::PitchContours>(),
            Self::PitchContoursMelody => visitor.visit::<specs::PitchContoursMelody>(),
            Self::PitchContoursMonoMelody => visitor.visit::<specs::PitchContoursMonoMelody>(),
            Self::PitchContoursMultiMelody => visitor.visit::<specs::PitchContoursMultiMelody>(),
            Self::PitchFilter => visitor.visit::<specs::PitchFilter>(),
            Self::PitchMelodia => visitor.visit::<specs::PitchMelodia>(),
            Self::PitchSalienceFunction => visitor.visit::<specs::PitchSalienceFunction>(),
            Self::PitchSalienceFunctionPeaks => visitor.visit::<specs::PitchSalienceFunctionPeaks>(),
            Self::PitchYin => visitor.visit::<specs::PitchYin>(),
            Self::PitchYinFft => visitor.visit::<specs::PitchYinFft>(),
            Self::PredominantPitchMelodia => visitor.visit::<specs::PredominantPitchMelodia>(),
            Self::Vibrato => visitor.visit::<specs::Vibrato>(),
            Self::HarmonicMask => visitor.visit::<specs::HarmonicMask>(),
            Self::HarmonicModelAnal => visitor.visit::<specs::HarmonicModelAnal>(),
            Self::HprModelAnal => visitor.visit::<specs::HprModelAnal>(),
            Self::HpsModelAnal => visitor.visit::<specs::HpsModelAnal>(),
            Self::ResampleFft => visitor.visit::<specs::ResampleFft>(),
            Self::SineModelAnal => visitor.visit::<specs::SineModelAnal>(),
            Self::SineModelSynth => visitor.visit::<specs::SineModelSynth>(),
            Self::SineSubtraction => visitor.visit::<specs::SineSubtraction>(),
            Self::SprModelAnal => visitor.visit::<specs::SprModelAnal>(),
            Self::SprModelSynth => visitor.visit::<specs::SprModelSynth>(),
            Self::SpsModelAnal => visitor.visit::<specs::SpsModelAnal>(),
            Self::SpsModelSynth => visitor.visit::<specs::SpsModelSynth>(),
            Self::StochasticModelAnal => visitor.visit::<specs::StochasticModelAnal>(),
            Self::StochasticModelSynth => visitor.visit::<specs::StochasticModelSynth>(),
            Self::AudioOnsetsMarker => visitor.visit::<specs::AudioOnsetsMarker>(),
            Self::Duration => visitor.visit::<specs::Duration>(),
            Self::EffectiveDuration => visitor.visit::<specs::EffectiveDuration>(),
            Self::FadeDetection => visitor.visit::<specs::FadeDetection>(),
            Self::SilenceRate => visitor.visit::<specs::SilenceRate>(),
            Self::StartStopSilence => visitor.visit::<specs::StartStopSilence>(),
            Self::DynamicComplexity => visitor.visit::<specs::DynamicComplexity>(),
            Self::Intensity => visitor.visit::<specs::Intensity>(),
            Self::Larm => visitor.visit::<specs::Larm>(),
            Self::Leq => visitor.visit::<specs::Leq>(),
            Self::LevelExtractor => visitor.visit::<specs::LevelExtractor>(),
            Self::Loudness => visitor.visit::<specs::Loudness>(),
            Self::LoudnessEbur128 => visitor.visit::<specs::LoudnessEbur128>(),
            Self::LoudnessVickers => visitor.visit::<specs::LoudnessVickers>(),
            Self::ReplayGain => visitor.visit::<specs::ReplayGain>(),
            Self::AllPass => visitor.visit::<specs::AllPass>(),
            Self::BandPass => visitor.visit::<specs::BandPass>(),
            Self::BandReject => visitor.visit::<specs::BandReject>(),
            Self::DcRemoval => visitor.visit::<specs::DcRemoval>(),
            Self::EqualLoudness => visitor.visit::<specs::EqualLoudness>(),
            Self::HighPass => visitor.visit::<specs::HighPass>(),
            Self::Iir => visitor.visit::<specs::Iir>(),
            Self::LowPass => visitor.visit::<specs::LowPass>(),
            Self::MaxFilter => visitor.visit::<specs::MaxFilter>(),
            Self::MovingAverage => visitor.visit::<specs::MovingAverage>(),
            Self::AutoCorrelation => visitor.visit::<specs::AutoCorrelation>(),
            Self::Bpf => visitor.visit::<specs::Bpf>(),
            Self::BinaryOperator => visitor.visit::<specs::BinaryOperator>(),
            Self::BinaryOperatorStream => visitor.visit::<specs::BinaryOperatorStream>(),
            Self::Clipper => visitor.visit::<specs::Clipper>(),
            Self::ConstantQ => visitor.visit::<specs::ConstantQ>(),
            Self::CrossCorrelation => visitor.visit::<specs::CrossCorrelation>(),
            Self::CubicSpline => visitor.visit::<specs::CubicSpline>(),
            Self::Dct => visitor.visit::<specs::Dct>(),
            Self::Derivative => visitor.visit::<specs::Derivative>(),
            Self::Fft => visitor.visit::<specs::Fft>(),
            Self::Fftc => visitor.visit::<specs::Fftc>(),
            Self::FrameCutter => visitor.visit::<specs::FrameCutter>(),
            Self::FrameToReal => visitor.visit::<specs::FrameToReal>(),
            Self::Idct => visitor.visit::<specs::Idct>(),
            Self::Ifft => visitor.visit::<specs::Ifft>(),
            Self::Ifftc => visitor.visit::<specs::Ifftc>(),
            Self::MonoMixer => visitor.visit::<specs::MonoMixer>(),
            Self::Multiplexer => visitor.visit::<specs::Multiplexer>(),
            Self::NoiseAdder => visitor.visit::<specs::NoiseAdder>(),
            Self::OverlapAdd => visitor.visit::<specs::OverlapAdd>(),
            Self::PeakDetection => visitor.visit::<specs::PeakDetection>(),
            Self::Scale => visitor.visit::<specs::Scale>(),
            Self::Slicer => visitor.visit::<specs::Slicer>(),
            Self::Spline => visitor.visit::<specs::Spline>(),
            Self::StereoDemuxer => visitor.visit::<specs::StereoDemuxer>(),
            Self::StereoMuxer => visitor.visit::<specs::StereoMuxer>(),
            Self::StereoTrimmer => visitor.visit::<specs::StereoTrimmer>(),
            Self::Trimmer => visitor.visit::<specs::Trimmer>(),
            Self::UnaryOperator => visitor.visit::<specs::UnaryOperator>(),
            Self::UnaryOperatorStream => visitor.visit::<specs::UnaryOperatorStream>(),
            Self::WarpedAutoCorrelation => visitor.visit::<specs::WarpedAutoCorrelation>(),
            Self::Windowing => visitor.visit::<specs::Windowing>(),
            Self::ZeroCrossingRate => visitor.visit::<specs::ZeroCrossingRate>(),
            Self::Pca => visitor.visit::<specs::Pca>(),
            Self::Bfcc => visitor.visit::<specs::Bfcc>(),
            Self::BarkBands => visitor.visit::<specs::BarkBands>(),
            Self::ErbBands => visitor.visit::<specs::ErbBands>(),
            Self::EnergyBand => visitor.visit::<specs::EnergyBand>(),
            Self::EnergyBandRatio => visitor.visit::<specs::EnergyBandRatio>(),
            Self::FlatnessDb => visitor.visit::<specs::FlatnessDb>(),
            Self::Flux => visitor.visit::<specs::Flux>(),
            Self::FrequencyBands => visitor.visit::<specs::FrequencyBands>(),
            Self::Gfcc => visitor.visit::<specs::Gfcc>(),
            Self::Hfc => visitor.visit::<specs::Hfc>(),
            Self::Lpc => visitor.visit::<specs::Lpc>(),
            Self::Mfcc => visitor.visit::<specs::Mfcc>(),
            Self::MaxMagFreq => visitor.visit::<specs::MaxMagFreq>(),
            Self::MelBands => visitor.visit::<specs::MelBands>(),
            Self::Panning => visitor.visit::<specs::Panning>(),
            Self::PowerSpectrum => visitor.visit::<specs::PowerSpectrum>(),
            Self::RollOff => visitor.visit::<specs::RollOff>(),
            Self::SpectralCentroidTime => visitor.visit::<specs::SpectralCentroidTime>(),
            Self::SpectralComplexity => visitor.visit::<specs::SpectralComplexity>(),
            Self::SpectralContrast => visitor.visit::<specs::SpectralContrast>(),
            Self::SpectralPeaks => visitor.visit::<specs::SpectralPeaks>(),
            Self::SpectralWhitening => visitor.visit::<specs::SpectralWhitening>(),
            Self::Spectrum => visitor.visit::<specs::Spectrum>(),
            Self::SpectrumToCent => visitor.visit::<specs::SpectrumToCent>(),
            Self::StrongPeak => visitor.visit::<specs::StrongPeak>(),
            Self::TriangularBands => visitor.visit::<specs::TriangularBands>(),
            Self::TriangularBarkBands => visitor.visit::<specs::TriangularBarkBands>(),
            Self::Extractor => visitor.visit::<specs::Extractor>(),
            Self::LowLevelSpectralEqloudExtractor => visitor.visit::<specs::LowLevelSpectralEqloudExtractor>(),
            Self::LowLevelSpectralExtractor => visitor.visit::<specs::LowLevelSpectralExtractor>(),
            Self::AfterMaxToBeforeMaxEnergyRatio => visitor.visit::<specs::AfterMaxToBeforeMaxEnergyRatio>(),
            Self::DerivativeSfx => visitor.visit::<specs::DerivativeSfx>(),
            Self::Envelope => visitor.visit::<specs::Envelope>(),
            Self::FlatnessSfx => visitor.visit::<specs::FlatnessSfx>(),
            Self::LogAttackTime => visitor.visit::<specs::LogAttackTime>(),
            Self::MaxToTotal => visitor.visit::<specs::MaxToTotal>(),
            Self::MinToTotal => visitor.visit::<specs::MinToTotal>(),
            Self::StrongDecay => visitor.visit::<specs::StrongDecay>(),
            Self::TcToTotal => visitor.visit::<specs::TcToTotal>(),
            Self::CartesianToPolar => visitor.visit::<specs::CartesianToPolar>(),
            Self::Magnitude => visitor.visit::<specs::Magnitude>(),
            Self::PolarToCartesian => visitor.visit::<specs::PolarToCartesian>(),
            Self::CentralMoments => visitor.visit::<specs::CentralMoments>(),
            Self::Centroid => visitor.visit::<specs::Centroid>(),
            Self::Crest => visitor.visit::<specs::Crest>(),
            Self::Decrease => visitor.visit::<specs::Decrease>(),
            Self::DistributionShape => visitor.visit::<specs::DistributionShape>(),
            Self::Energy => visitor.visit::<specs::Energy>(),
            Self::Entropy => visitor.visit::<specs::Entropy>(),
            Self::Flatness => visitor.visit::<specs::Flatness>(),
            Self::GeometricMean => visitor.visit::<specs::GeometricMean>(),
            Self::InstantPower => visitor.visit::<specs::InstantPower>(),
            Self::Mean => visitor.visit::<specs::Mean>(),
            Self::Median => visitor.visit::<specs::Median>(),
            Self::PoolAggregator => visitor.visit::<specs::PoolAggregator>(),
            Self::PowerMean => visitor.visit::<specs::PowerMean>(),
            Self::Rms => visitor.visit::<specs::Rms>(),
            Self::RawMoments => visitor.visit::<specs::RawMoments>(),
            Self::SingleGaussian => visitor.visit::<specs::SingleGaussian>(),
            Self::Variance => visitor.visit::<specs::Variance>(),
            Self::ChordsDescriptors => visitor.visit::<specs::ChordsDescriptors>(),
            Self::ChordsDetection => visitor.visit::<specs::ChordsDetection>(),
            Self::ChordsDetectionBeats => visitor.visit::<specs::ChordsDetectionBeats>(),
            Self::Chromagram => visitor.visit::<specs::Chromagram>(),
            Self::Dissonance => visitor.visit::<specs::Dissonance>(),
            Self::Hpcp => visitor.visit::<specs::Hpcp>(),
            Self::HarmonicPeaks => visitor.visit::<specs::HarmonicPeaks>(),
            Self::HighResolutionFeatures => visitor.visit::<specs::HighResolutionFeatures>(),
            Self::Inharmonicity => visitor.visit::<specs::Inharmonicity>(),
            Self::Key => visitor.visit::<specs::Key>(),
            Self::KeyExtractor => visitor.visit::<specs::KeyExtractor>(),
            Self::OddToEvenHarmonicEnergyRatio => visitor.visit::<specs::OddToEvenHarmonicEnergyRatio>(),
            Self::PitchSalience => visitor.visit::<specs::PitchSalience>(),
            Self::SpectrumCq => visitor.visit::<specs::SpectrumCq>(),
            Self::TonalExtractor => visitor.visit::<specs::TonalExtractor>(),
            Self::TonicIndianArtMusic => visitor.visit::<specs::TonicIndianArtMusic>(),
            Self::Tristimulus => visitor.visit::<specs::Tristimulus>(),
            Self::TuningFrequency => visitor.visit::<specs::TuningFrequency>(),
            Self::TuningFrequencyExtractor => visitor.visit::<specs::TuningFrequencyExtractor>(),
            Self::SBic => visitor.visit::<specs::SBic>(),
        }
    }

    /// Returns the descriptor of the specification registered for this
    /// identifier.
    pub fn descriptor(self) -> SpecDescriptor {
        struct Descriptor;

        impl SpecVisitor for Descriptor {
            type Output = SpecDescriptor;

            fn visit<S: Specification>(self) -> SpecDescriptor {
                S::DESCRIPTOR
            }
        }

        self.with_spec(Descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Category;
    use std::collections::HashSet;

    #[test]
    fn dispatch_is_total() {
        for id in AlgorithmId::all() {
            let descriptor = id.descriptor();
            assert_eq!(descriptor.id, id);
            assert_eq!(descriptor.name, id.name());
            assert_eq!(descriptor.category, id.category());
        }
    }

    #[test]
    fn every_specification_reachable_from_exactly_one_identifier() {
        let reached: HashSet<AlgorithmId> =
            AlgorithmId::all().map(|id| id.descriptor().id).collect();
        assert_eq!(reached.len(), AlgorithmId::COUNT);
    }

    #[test]
    fn dispatch_is_idempotent() {
        for id in AlgorithmId::all() {
            assert_eq!(id.descriptor(), id.descriptor());
        }
    }

    #[test]
    fn descriptor_spot_checks() {
        let rms = AlgorithmId::Rms.descriptor();
        assert_eq!(rms.name, "RMS");
        assert_eq!(rms.category, Category::Statistics);

        let degara = AlgorithmId::BeatTrackerDegara.descriptor();
        assert_eq!(degara.name, "BeatTrackerDegara");
        assert_eq!(degara.category, Category::Rhythm);
    }
}
