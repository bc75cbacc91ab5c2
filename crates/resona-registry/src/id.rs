//! The closed catalog of algorithm identifiers.
//!
//! [`AlgorithmId`] enumerates every algorithm exposed by the analysis engine.
//! The catalog is fixed at build time: the engine underneath is a versioned
//! native library whose algorithm set does not change within a build, so there
//! is no runtime registration or removal API.
//!
//! Each identifier has a canonical textual form ([`AlgorithmId::name`]) that
//! matches the engine's own naming (`"MFCC"`, `"RMS"`, ...). Boundary code
//! that receives identifiers as strings goes through
//! [`AlgorithmId::from_name`] or the [`FromStr`] impl; everything past that
//! boundary works with the closed enum, which is what lets the dispatcher in
//! [`crate::dispatch`] stay total.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Category an algorithm is documented under.
///
/// Categories exist purely for documentation and navigation; they carry no
/// runtime meaning and play no part in dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Rhythm and tempo analysis algorithms.
    Rhythm,
    /// Pitch estimation and melody analysis algorithms.
    Pitch,
    /// Sinusoidal and stochastic model analysis/synthesis algorithms.
    Synthesis,
    /// Audio input/output algorithms.
    Io,
    /// Duration and silence detection algorithms.
    DurationSilence,
    /// Loudness and dynamics algorithms.
    LoudnessDynamics,
    /// Digital filter algorithms.
    Filters,
    /// General-purpose signal processing algorithms.
    Standard,
    /// Feature-space transformation algorithms.
    Transformations,
    /// Spectral feature algorithms.
    Spectral,
    /// Composite feature extractor algorithms.
    Extractors,
    /// Envelope and sound-effects descriptor algorithms.
    EnvelopeSfx,
    /// Elementary math algorithms.
    Math,
    /// Statistical descriptor algorithms.
    Statistics,
    /// Tonal feature algorithms.
    Tonal,
    /// Audio segmentation algorithms.
    Segmentation,
}

impl Category {
    /// Returns a human-readable name for the category.
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Rhythm => "Rhythm",
            Category::Pitch => "Pitch",
            Category::Synthesis => "Synthesis",
            Category::Io => "Input/Output",
            Category::DurationSilence => "Duration & Silence",
            Category::LoudnessDynamics => "Loudness & Dynamics",
            Category::Filters => "Filters",
            Category::Standard => "Standard",
            Category::Transformations => "Transformations",
            Category::Spectral => "Spectral",
            Category::Extractors => "Extractors",
            Category::EnvelopeSfx => "Envelope & SFX",
            Category::Math => "Math",
            Category::Statistics => "Statistics",
            Category::Tonal => "Tonal",
            Category::Segmentation => "Segmentation",
        }
    }
}

/// Identifier for one algorithm in the analysis engine's catalog.
///
/// The enum is the closed counterpart of the engine's string-keyed factory:
/// once a string has been resolved through [`AlgorithmId::from_name`], the
/// "unknown algorithm" case no longer exists and every consumer downstream
/// of the boundary can rely on total, exhaustively-checked lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    // --- Rhythm ---
    /// The `BeatTrackerDegara` algorithm.
    BeatTrackerDegara,
    /// The `BeatTrackerMultiFeature` algorithm.
    BeatTrackerMultiFeature,
    /// The `Beatogram` algorithm.
    Beatogram,
    /// The `BeatsLoudness` algorithm.
    BeatsLoudness,
    /// The `BpmHistogram` algorithm.
    BpmHistogram,
    /// The `BpmHistogramDescriptors` algorithm.
    BpmHistogramDescriptors,
    /// The `BpmRubato` algorithm.
    BpmRubato,
    /// The `Danceability` algorithm.
    Danceability,
    /// The `HarmonicBpm` algorithm.
    HarmonicBpm,
    /// The `LoopBpmConfidence` algorithm.
    LoopBpmConfidence,
    /// The `LoopBpmEstimator` algorithm.
    LoopBpmEstimator,
    /// The `Meter` algorithm.
    Meter,
    /// The `NoveltyCurve` algorithm.
    NoveltyCurve,
    /// The `NoveltyCurveFixedBpmEstimator` algorithm.
    NoveltyCurveFixedBpmEstimator,
    /// The `OnsetDetection` algorithm.
    OnsetDetection,
    /// The `OnsetDetectionGlobal` algorithm.
    OnsetDetectionGlobal,
    /// The `OnsetRate` algorithm.
    OnsetRate,
    /// The `Onsets` algorithm.
    Onsets,
    /// The `PercivalBpmEstimator` algorithm.
    PercivalBpmEstimator,
    /// The `PercivalEnhanceHarmonics` algorithm.
    PercivalEnhanceHarmonics,
    /// The `PercivalEvaluatePulseTrains` algorithm.
    PercivalEvaluatePulseTrains,
    /// The `RhythmDescriptors` algorithm.
    RhythmDescriptors,
    /// The `RhythmExtractor` algorithm.
    RhythmExtractor,
    /// The `RhythmExtractor2013` algorithm.
    RhythmExtractor2013,
    /// The `RhythmTransform` algorithm.
    RhythmTransform,
    /// The `SingleBeatLoudness` algorithm.
    SingleBeatLoudness,
    /// The `SuperFluxExtractor` algorithm.
    SuperFluxExtractor,
    /// The `SuperFluxNovelty` algorithm.
    SuperFluxNovelty,
    /// The `SuperFluxPeaks` algorithm.
    SuperFluxPeaks,
    /// The `TempoScaleBands` algorithm.
    TempoScaleBands,
    /// The `TempoTap` algorithm.
    TempoTap,
    /// The `TempoTapDegara` algorithm.
    TempoTapDegara,
    /// The `TempoTapMaxAgreement` algorithm.
    TempoTapMaxAgreement,
    /// The `TempoTapTicks` algorithm.
    TempoTapTicks,
    // --- Pitch ---
    /// The `MultiPitchKlapuri` algorithm.
    MultiPitchKlapuri,
    /// The `MultiPitchMelodia` algorithm.
    MultiPitchMelodia,
    /// The `PitchContourSegmentation` algorithm.
    PitchContourSegmentation,
    /// The `PitchContours` algorithm.
    PitchContours,
    /// The `PitchContoursMelody` algorithm.
    PitchContoursMelody,
    /// The `PitchContoursMonoMelody` algorithm.
    PitchContoursMonoMelody,
    /// The `PitchContoursMultiMelody` algorithm.
    PitchContoursMultiMelody,
    /// The `PitchFilter` algorithm.
    PitchFilter,
    /// The `PitchMelodia` algorithm.
    PitchMelodia,
    /// The `PitchSalienceFunction` algorithm.
    PitchSalienceFunction,
    /// The `PitchSalienceFunctionPeaks` algorithm.
    PitchSalienceFunctionPeaks,
    /// The `PitchYin` algorithm.
    PitchYin,
    /// The `PitchYinFFT` algorithm.
    PitchYinFft,
    /// The `PredominantPitchMelodia` algorithm.
    PredominantPitchMelodia,
    /// The `Vibrato` algorithm.
    Vibrato,
    // --- Synthesis ---
    /// The `HarmonicMask` algorithm.
    HarmonicMask,
    /// The `HarmonicModelAnal` algorithm.
    HarmonicModelAnal,
    /// The `HprModelAnal` algorithm.
    HprModelAnal,
    /// The `HpsModelAnal` algorithm.
    HpsModelAnal,
    /// The `ResampleFFT` algorithm.
    ResampleFft,
    /// The `SineModelAnal` algorithm.
    SineModelAnal,
    /// The `SineModelSynth` algorithm.
    SineModelSynth,
    /// The `SineSubtraction` algorithm.
    SineSubtraction,
    /// The `SprModelAnal` algorithm.
    SprModelAnal,
    /// The `SprModelSynth` algorithm.
    SprModelSynth,
    /// The `SpsModelAnal` algorithm.
    SpsModelAnal,
    /// The `SpsModelSynth` algorithm.
    SpsModelSynth,
    /// The `StochasticModelAnal` algorithm.
    StochasticModelAnal,
    /// The `StochasticModelSynth` algorithm.
    StochasticModelSynth,
    // --- Input/Output ---
    /// The `AudioOnsetsMarker` algorithm.
    AudioOnsetsMarker,
    // --- Duration & Silence ---
    /// The `Duration` algorithm.
    Duration,
    /// The `EffectiveDuration` algorithm.
    EffectiveDuration,
    /// The `FadeDetection` algorithm.
    FadeDetection,
    /// The `SilenceRate` algorithm.
    SilenceRate,
    /// The `StartStopSilence` algorithm.
    StartStopSilence,
    // --- Loudness & Dynamics ---
    /// The `DynamicComplexity` algorithm.
    DynamicComplexity,
    /// The `Intensity` algorithm.
    Intensity,
    /// The `Larm` algorithm.
    Larm,
    /// The `Leq` algorithm.
    Leq,
    /// The `LevelExtractor` algorithm.
    LevelExtractor,
    /// The `Loudness` algorithm.
    Loudness,
    /// The `LoudnessEBUR128` algorithm.
    LoudnessEbur128,
    /// The `LoudnessVickers` algorithm.
    LoudnessVickers,
    /// The `ReplayGain` algorithm.
    ReplayGain,
    // --- Filters ---
    /// The `AllPass` algorithm.
    AllPass,
    /// The `BandPass` algorithm.
    BandPass,
    /// The `BandReject` algorithm.
    BandReject,
    /// The `DCRemoval` algorithm.
    DcRemoval,
    /// The `EqualLoudness` algorithm.
    EqualLoudness,
    /// The `HighPass` algorithm.
    HighPass,
    /// The `IIR` algorithm.
    Iir,
    /// The `LowPass` algorithm.
    LowPass,
    /// The `MaxFilter` algorithm.
    MaxFilter,
    /// The `MovingAverage` algorithm.
    MovingAverage,
    // --- Standard ---
    /// The `AutoCorrelation` algorithm.
    AutoCorrelation,
    /// The `BPF` algorithm.
    Bpf,
    /// The `BinaryOperator` algorithm.
    BinaryOperator,
    /// The `BinaryOperatorStream` algorithm.
    BinaryOperatorStream,
    /// The `Clipper` algorithm.
    Clipper,
    /// The `ConstantQ` algorithm.
    ConstantQ,
    /// The `CrossCorrelation` algorithm.
    CrossCorrelation,
    /// The `CubicSpline` algorithm.
    CubicSpline,
    /// The `DCT` algorithm.
    Dct,
    /// The `Derivative` algorithm.
    Derivative,
    /// The `FFT` algorithm.
    Fft,
    /// The `FFTC` algorithm.
    Fftc,
    /// The `FrameCutter` algorithm.
    FrameCutter,
    /// The `FrameToReal` algorithm.
    FrameToReal,
    /// The `IDCT` algorithm.
    Idct,
    /// The `IFFT` algorithm.
    Ifft,
    /// The `IFFTC` algorithm.
    Ifftc,
    /// The `MonoMixer` algorithm.
    MonoMixer,
    /// The `Multiplexer` algorithm.
    Multiplexer,
    /// The `NoiseAdder` algorithm.
    NoiseAdder,
    /// The `OverlapAdd` algorithm.
    OverlapAdd,
    /// The `PeakDetection` algorithm.
    PeakDetection,
    /// The `Scale` algorithm.
    Scale,
    /// The `Slicer` algorithm.
    Slicer,
    /// The `Spline` algorithm.
    Spline,
    /// The `StereoDemuxer` algorithm.
    StereoDemuxer,
    /// The `StereoMuxer` algorithm.
    StereoMuxer,
    /// The `StereoTrimmer` algorithm.
    StereoTrimmer,
    /// The `Trimmer` algorithm.
    Trimmer,
    /// The `UnaryOperator` algorithm.
    UnaryOperator,
    /// The `UnaryOperatorStream` algorithm.
    UnaryOperatorStream,
    /// The `WarpedAutoCorrelation` algorithm.
    WarpedAutoCorrelation,
    /// The `Windowing` algorithm.
    Windowing,
    /// The `ZeroCrossingRate` algorithm.
    ZeroCrossingRate,
    // --- Transformations ---
    /// The `PCA` algorithm.
    Pca,
    // --- Spectral ---
    /// The `BFCC` algorithm.
    Bfcc,
    /// The `BarkBands` algorithm.
    BarkBands,
    /// The `ERBBands` algorithm.
    ErbBands,
    /// The `EnergyBand` algorithm.
    EnergyBand,
    /// The `EnergyBandRatio` algorithm.
    EnergyBandRatio,
    /// The `FlatnessDB` algorithm.
    FlatnessDb,
    /// The `Flux` algorithm.
    Flux,
    /// The `FrequencyBands` algorithm.
    FrequencyBands,
    /// The `GFCC` algorithm.
    Gfcc,
    /// The `HFC` algorithm.
    Hfc,
    /// The `LPC` algorithm.
    Lpc,
    /// The `MFCC` algorithm.
    Mfcc,
    /// The `MaxMagFreq` algorithm.
    MaxMagFreq,
    /// The `MelBands` algorithm.
    MelBands,
    /// The `Panning` algorithm.
    Panning,
    /// The `PowerSpectrum` algorithm.
    PowerSpectrum,
    /// The `RollOff` algorithm.
    RollOff,
    /// The `SpectralCentroidTime` algorithm.
    SpectralCentroidTime,
    /// The `SpectralComplexity` algorithm.
    SpectralComplexity,
    /// The `SpectralContrast` algorithm.
    SpectralContrast,
    /// The `SpectralPeaks` algorithm.
    SpectralPeaks,
    /// The `SpectralWhitening` algorithm.
    SpectralWhitening,
    /// The `Spectrum` algorithm.
    Spectrum,
    /// The `SpectrumToCent` algorithm.
    SpectrumToCent,
    /// The `StrongPeak` algorithm.
    StrongPeak,
    /// The `TriangularBands` algorithm.
    TriangularBands,
    /// The `TriangularBarkBands` algorithm.
    TriangularBarkBands,
    // --- Extractors ---
    /// The `Extractor` algorithm.
    Extractor,
    /// The `LowLevelSpectralEqloudExtractor` algorithm.
    LowLevelSpectralEqloudExtractor,
    /// The `LowLevelSpectralExtractor` algorithm.
    LowLevelSpectralExtractor,
    // --- Envelope & SFX ---
    /// The `AfterMaxToBeforeMaxEnergyRatio` algorithm.
    AfterMaxToBeforeMaxEnergyRatio,
    /// The `DerivativeSFX` algorithm.
    DerivativeSfx,
    /// The `Envelope` algorithm.
    Envelope,
    /// The `FlatnessSFX` algorithm.
    FlatnessSfx,
    /// The `LogAttackTime` algorithm.
    LogAttackTime,
    /// The `MaxToTotal` algorithm.
    MaxToTotal,
    /// The `MinToTotal` algorithm.
    MinToTotal,
    /// The `StrongDecay` algorithm.
    StrongDecay,
    /// The `TCToTotal` algorithm.
    TcToTotal,
    // --- Math ---
    /// The `CartesianToPolar` algorithm.
    CartesianToPolar,
    /// The `Magnitude` algorithm.
    Magnitude,
    /// The `PolarToCartesian` algorithm.
    PolarToCartesian,
    // --- Statistics ---
    /// The `CentralMoments` algorithm.
    CentralMoments,
    /// The `Centroid` algorithm.
    Centroid,
    /// The `Crest` algorithm.
    Crest,
    /// The `Decrease` algorithm.
    Decrease,
    /// The `DistributionShape` algorithm.
    DistributionShape,
    /// The `Energy` algorithm.
    Energy,
    /// The `Entropy` algorithm.
    Entropy,
    /// The `Flatness` algorithm.
    Flatness,
    /// The `GeometricMean` algorithm.
    GeometricMean,
    /// The `InstantPower` algorithm.
    InstantPower,
    /// The `Mean` algorithm.
    Mean,
    /// The `Median` algorithm.
    Median,
    /// The `PoolAggregator` algorithm.
    PoolAggregator,
    /// The `PowerMean` algorithm.
    PowerMean,
    /// The `RMS` algorithm.
    Rms,
    /// The `RawMoments` algorithm.
    RawMoments,
    /// The `SingleGaussian` algorithm.
    SingleGaussian,
    /// The `Variance` algorithm.
    Variance,
    // --- Tonal ---
    /// The `ChordsDescriptors` algorithm.
    ChordsDescriptors,
    /// The `ChordsDetection` algorithm.
    ChordsDetection,
    /// The `ChordsDetectionBeats` algorithm.
    ChordsDetectionBeats,
    /// The `Chromagram` algorithm.
    Chromagram,
    /// The `Dissonance` algorithm.
    Dissonance,
    /// The `HPCP` algorithm.
    Hpcp,
    /// The `HarmonicPeaks` algorithm.
    HarmonicPeaks,
    /// The `HighResolutionFeatures` algorithm.
    HighResolutionFeatures,
    /// The `Inharmonicity` algorithm.
    Inharmonicity,
    /// The `Key` algorithm.
    Key,
    /// The `KeyExtractor` algorithm.
    KeyExtractor,
    /// The `OddToEvenHarmonicEnergyRatio` algorithm.
    OddToEvenHarmonicEnergyRatio,
    /// The `PitchSalience` algorithm.
    PitchSalience,
    /// The `SpectrumCQ` algorithm.
    SpectrumCq,
    /// The `TonalExtractor` algorithm.
    TonalExtractor,
    /// The `TonicIndianArtMusic` algorithm.
    TonicIndianArtMusic,
    /// The `Tristimulus` algorithm.
    Tristimulus,
    /// The `TuningFrequency` algorithm.
    TuningFrequency,
    /// The `TuningFrequencyExtractor` algorithm.
    TuningFrequencyExtractor,
    // --- Segmentation ---
    /// The `SBic` algorithm.
    SBic,
}

impl AlgorithmId {
    /// Number of algorithms in the catalog.
    pub const COUNT: usize = 203;

    /// Every identifier in the catalog, in catalog order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::BeatTrackerDegara, Self::BeatTrackerMultiFeature, Self::Beatogram, Self::BeatsLoudness,
        Self::BpmHistogram, Self::BpmHistogramDescriptors, Self::BpmRubato, Self::Danceability,
        Self::HarmonicBpm, Self::LoopBpmConfidence, Self::LoopBpmEstimator, Self::Meter,
        Self::NoveltyCurve, Self::NoveltyCurveFixedBpmEstimator, Self::OnsetDetection,
        Self::OnsetDetectionGlobal, Self::OnsetRate, Self::Onsets, Self::PercivalBpmEstimator,
        Self::PercivalEnhanceHarmonics, Self::PercivalEvaluatePulseTrains, Self::RhythmDescriptors,
        Self::RhythmExtractor, Self::RhythmExtractor2013, Self::RhythmTransform,
        Self::SingleBeatLoudness, Self::SuperFluxExtractor, Self::SuperFluxNovelty,
        Self::SuperFluxPeaks, Self::TempoScaleBands, Self::TempoTap, Self::TempoTapDegara,
        Self::TempoTapMaxAgreement, Self::TempoTapTicks, Self::MultiPitchKlapuri,
        Self::MultiPitchMelodia, Self::PitchContourSegmentation, Self::PitchContours,
        Self::PitchContoursMelody, Self::PitchContoursMonoMelody, Self::PitchContoursMultiMelody,
        Self::PitchFilter, Self::PitchMelodia, Self::PitchSalienceFunction,
        Self::PitchSalienceFunctionPeaks, Self::PitchYin, Self::PitchYinFft,
        Self::PredominantPitchMelodia, Self::Vibrato, Self::HarmonicMask, Self::HarmonicModelAnal,
        Self::HprModelAnal, Self::HpsModelAnal, Self::ResampleFft, Self::SineModelAnal,
        Self::SineModelSynth, Self::SineSubtraction, Self::SprModelAnal, Self::SprModelSynth,
        Self::SpsModelAnal, Self::SpsModelSynth, Self::StochasticModelAnal, Self::StochasticModelSynth,
        Self::AudioOnsetsMarker, Self::Duration, Self::EffectiveDuration, Self::FadeDetection,
        Self::SilenceRate, Self::StartStopSilence, Self::DynamicComplexity, Self::Intensity, Self::Larm,
        Self::Leq, Self::LevelExtractor, Self::Loudness, Self::LoudnessEbur128, Self::LoudnessVickers,
        Self::ReplayGain, Self::AllPass, Self::BandPass, Self::BandReject, Self::DcRemoval,
        Self::EqualLoudness, Self::HighPass, Self::Iir, Self::LowPass, Self::MaxFilter,
        Self::MovingAverage, Self::AutoCorrelation, Self::Bpf, Self::BinaryOperator,
        Self::BinaryOperatorStream, Self::Clipper, Self::ConstantQ, Self::CrossCorrelation,
        Self::CubicSpline, Self::Dct, Self::Derivative, Self::Fft, Self::Fftc, Self::FrameCutter,
        Self::FrameToReal, Self::Idct, Self::Ifft, Self::Ifftc, Self::MonoMixer, Self::Multiplexer,
        Self::NoiseAdder, Self::OverlapAdd, Self::PeakDetection, Self::Scale, Self::Slicer,
        Self::Spline, Self::StereoDemuxer, Self::StereoMuxer, Self::StereoTrimmer, Self::Trimmer,
        Self::UnaryOperator, Self::UnaryOperatorStream, Self::WarpedAutoCorrelation, Self::Windowing,
        Self::ZeroCrossingRate, Self::Pca, Self::Bfcc, Self::BarkBands, Self::ErbBands,
        Self::EnergyBand, Self::EnergyBandRatio, Self::FlatnessDb, Self::Flux, Self::FrequencyBands,
        Self::Gfcc, Self::Hfc, Self::Lpc, Self::Mfcc, Self::MaxMagFreq, Self::MelBands, Self::Panning,
        Self::PowerSpectrum, Self::RollOff, Self::SpectralCentroidTime, Self::SpectralComplexity,
        Self::SpectralContrast, Self::SpectralPeaks, Self::SpectralWhitening, Self::Spectrum,
        Self::SpectrumToCent, Self::StrongPeak, Self::TriangularBands, Self::TriangularBarkBands,
        Self::Extractor, Self::LowLevelSpectralEqloudExtractor, Self::LowLevelSpectralExtractor,
        Self::AfterMaxToBeforeMaxEnergyRatio, Self::DerivativeSfx, Self::Envelope, Self::FlatnessSfx,
        Self::LogAttackTime, Self::MaxToTotal, Self::MinToTotal, Self::StrongDecay, Self::TcToTotal,
        Self::CartesianToPolar, Self::Magnitude, Self::PolarToCartesian, Self::CentralMoments,
        Self::Centroid, Self::Crest, Self::Decrease, Self::DistributionShape, Self::Energy,
        Self::Entropy, Self::Flatness, Self::GeometricMean, Self::InstantPower, Self::Mean,
        Self::Median, Self::PoolAggregator, Self::PowerMean, Self::Rms, Self::RawMoments,
        Self::SingleGaussian, Self::Variance, Self::ChordsDescriptors, Self::ChordsDetection,
        Self::ChordsDetectionBeats, Self::Chromagram, Self::Dissonance, Self::Hpcp, Self::HarmonicPeaks,
        Self::HighResolutionFeatures, Self::Inharmonicity, Self::Key, Self::KeyExtractor,
        Self::OddToEvenHarmonicEnergyRatio, Self::PitchSalience, Self::SpectrumCq, Self::TonalExtractor,
        Self::TonicIndianArtMusic, Self::Tristimulus, Self::TuningFrequency,
        Self::TuningFrequencyExtractor, Self::SBic,
    ];

    /// Iterates over every identifier in the catalog.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// The canonical textual form of the identifier, as the engine spells it.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BeatTrackerDegara => "BeatTrackerDegara",
            Self::BeatTrackerMultiFeature => "BeatTrackerMultiFeature",
            Self::Beatogram => "Beatogram",
            Self::BeatsLoudness => "BeatsLoudness",
            Self::BpmHistogram => "BpmHistogram",
            Self::BpmHistogramDescriptors => "BpmHistogramDescriptors",
            Self::BpmRubato => "BpmRubato",
            Self::Danceability => "Danceability",
            Self::HarmonicBpm => "HarmonicBpm",
            Self::LoopBpmConfidence => "LoopBpmConfidence",
            Self::LoopBpmEstimator => "LoopBpmEstimator",
            Self::Meter => "Meter",
            Self::NoveltyCurve => "NoveltyCurve",
            Self::NoveltyCurveFixedBpmEstimator => "NoveltyCurveFixedBpmEstimator",
            Self::OnsetDetection => "OnsetDetection",
            Self::OnsetDetectionGlobal => "OnsetDetectionGlobal",
            Self::OnsetRate => "OnsetRate",
            Self::Onsets => "Onsets",
            Self::PercivalBpmEstimator => "PercivalBpmEstimator",
            Self::PercivalEnhanceHarmonics => "PercivalEnhanceHarmonics",
            Self::PercivalEvaluatePulseTrains => "PercivalEvaluatePulseTrains",
            Self::RhythmDescriptors => "RhythmDescriptors",
            Self::RhythmExtractor => "RhythmExtractor",
            Self::RhythmExtractor2013 => "RhythmExtractor2013",
            Self::RhythmTransform => "RhythmTransform",
            Self::SingleBeatLoudness => "SingleBeatLoudness",
            Self::SuperFluxExtractor => "SuperFluxExtractor",
            Self::SuperFluxNovelty => "SuperFluxNovelty",
            Self::SuperFluxPeaks => "SuperFluxPeaks",
            Self::TempoScaleBands => "TempoScaleBands",
            Self::TempoTap => "TempoTap",
            Self::TempoTapDegara => "TempoTapDegara",
            Self::TempoTapMaxAgreement => "TempoTapMaxAgreement",
            Self::TempoTapTicks => "TempoTapTicks",
            Self::MultiPitchKlapuri => "MultiPitchKlapuri",
            Self::MultiPitchMelodia => "MultiPitchMelodia",
            Self::PitchContourSegmentation => "PitchContourSegmentation",
            Self::PitchContours => "PitchContours",
            Self::PitchContoursMelody => "PitchContoursMelody",
            Self::PitchContoursMonoMelody => "PitchContoursMonoMelody",
            Self::PitchContoursMultiMelody => "PitchContoursMultiMelody",
            Self::PitchFilter => "PitchFilter",
            Self::PitchMelodia => "PitchMelodia",
            Self::PitchSalienceFunction => "PitchSalienceFunction",
            Self::PitchSalienceFunctionPeaks => "PitchSalienceFunctionPeaks",
            Self::PitchYin => "PitchYin",
            Self::PitchYinFft => "PitchYinFFT",
            Self::PredominantPitchMelodia => "PredominantPitchMelodia",
            Self::Vibrato => "Vibrato",
            Self::HarmonicMask => "HarmonicMask",
            Self::HarmonicModelAnal => "HarmonicModelAnal",
            Self::HprModelAnal => "HprModelAnal",
            Self::HpsModelAnal => "HpsModelAnal",
            Self::ResampleFft => "ResampleFFT",
            Self::SineModelAnal => "SineModelAnal",
            Self::SineModelSynth => "SineModelSynth",
            Self::SineSubtraction => "SineSubtraction",
            Self::SprModelAnal => "SprModelAnal",
            Self::SprModelSynth => "SprModelSynth",
            Self::SpsModelAnal => "SpsModelAnal",
            Self::SpsModelSynth => "SpsModelSynth",
            Self::StochasticModelAnal => "StochasticModelAnal",
            Self::StochasticModelSynth => "StochasticModelSynth",
            Self::AudioOnsetsMarker => "AudioOnsetsMarker",
            Self::Duration => "Duration",
            Self::EffectiveDuration => "EffectiveDuration",
            Self::FadeDetection => "FadeDetection",
            Self::SilenceRate => "SilenceRate",
            Self::StartStopSilence => "StartStopSilence",
            Self::DynamicComplexity => "DynamicComplexity",
            Self::Intensity => "Intensity",
            Self::Larm => "Larm",
            Self::Leq => "Leq",
            Self::LevelExtractor => "LevelExtractor",
            Self::Loudness => "Loudness",
            Self::LoudnessEbur128 => "LoudnessEBUR128",
            Self::LoudnessVickers => "LoudnessVickers",
            Self::ReplayGain => "ReplayGain",
            Self::AllPass => "AllPass",
            Self::BandPass => "BandPass",
            Self::BandReject => "BandReject",
            Self::DcRemoval => "DCRemoval",
            Self::EqualLoudness => "EqualLoudness",
            Self::HighPass => "HighPass",
            Self::Iir => "IIR",
            Self::LowPass => "LowPass",
            Self::MaxFilter => "MaxFilter",
            Self::MovingAverage => "MovingAverage",
            Self::AutoCorrelation => "AutoCorrelation",
            Self::Bpf => "BPF",
            Self::BinaryOperator => "BinaryOperator",
            Self::BinaryOperatorStream => "BinaryOperatorStream",
            Self::Clipper => "Clipper",
            Self::ConstantQ => "ConstantQ",
            Self::CrossCorrelation => "CrossCorrelation",
            Self::CubicSpline => "CubicSpline",
            Self::Dct => "DCT",
            Self::Derivative => "Derivative",
            Self::Fft => "FFT",
            Self::Fftc => "FFTC",
            Self::FrameCutter => "FrameCutter",
            Self::FrameToReal => "FrameToReal",
            Self::Idct => "IDCT",
            Self::Ifft => "IFFT",
            Self::Ifftc => "IFFTC",
            Self::MonoMixer => "MonoMixer",
            Self::Multiplexer => "Multiplexer",
            Self::NoiseAdder => "NoiseAdder",
            Self::OverlapAdd => "OverlapAdd",
            Self::PeakDetection => "PeakDetection",
            Self::Scale => "Scale",
            Self::Slicer => "Slicer",
            Self::Spline => "Spline",
            Self::StereoDemuxer => "StereoDemuxer",
            Self::StereoMuxer => "StereoMuxer",
            Self::StereoTrimmer => "StereoTrimmer",
            Self::Trimmer => "Trimmer",
            Self::UnaryOperator => "UnaryOperator",
            Self::UnaryOperatorStream => "UnaryOperatorStream",
            Self::WarpedAutoCorrelation => "WarpedAutoCorrelation",
            Self::Windowing => "Windowing",
            Self::ZeroCrossingRate => "ZeroCrossingRate",
            Self::Pca => "PCA",
            Self::Bfcc => "BFCC",
            Self::BarkBands => "BarkBands",
            Self::ErbBands => "ERBBands",
            Self::EnergyBand => "EnergyBand",
            Self::EnergyBandRatio => "EnergyBandRatio",
            Self::FlatnessDb => "FlatnessDB",
            Self::Flux => "Flux",
            Self::FrequencyBands => "FrequencyBands",
            Self::Gfcc => "GFCC",
            Self::Hfc => "HFC",
            Self::Lpc => "LPC",
            Self::Mfcc => "MFCC",
            Self::MaxMagFreq => "MaxMagFreq",
            Self::MelBands => "MelBands",
            Self::Panning => "Panning",
            Self::PowerSpectrum => "PowerSpectrum",
            Self::RollOff => "RollOff",
            Self::SpectralCentroidTime => "SpectralCentroidTime",
            Self::SpectralComplexity => "SpectralComplexity",
            Self::SpectralContrast => "SpectralContrast",
            Self::SpectralPeaks => "SpectralPeaks",
            Self::SpectralWhitening => "SpectralWhitening",
            Self::Spectrum => "Spectrum",
            Self::SpectrumToCent => "SpectrumToCent",
            Self::StrongPeak => "StrongPeak",
            Self::TriangularBands => "TriangularBands",
            Self::TriangularBarkBands => "TriangularBarkBands",
            Self::Extractor => "Extractor",
            Self::LowLevelSpectralEqloudExtractor => "LowLevelSpectralEqloudExtractor",
            Self::LowLevelSpectralExtractor => "LowLevelSpectralExtractor",
            Self::AfterMaxToBeforeMaxEnergyRatio => "AfterMaxToBeforeMaxEnergyRatio",
            Self::DerivativeSfx => "DerivativeSFX",
            Self::Envelope => "Envelope",
            Self::FlatnessSfx => "FlatnessSFX",
            Self::LogAttackTime => "LogAttackTime",
            Self::MaxToTotal => "MaxToTotal",
            Self::MinToTotal => "MinToTotal",
            Self::StrongDecay => "StrongDecay",
            Self::TcToTotal => "TCToTotal",
            Self::CartesianToPolar => "CartesianToPolar",
            Self::Magnitude => "Magnitude",
            Self::PolarToCartesian => "PolarToCartesian",
            Self::CentralMoments => "CentralMoments",
            Self::Centroid => "Centroid",
            Self::Crest => "Crest",
            Self::Decrease => "Decrease",
            Self::DistributionShape => "DistributionShape",
            Self::Energy => "Energy",
            Self::Entropy => "Entropy",
            Self::Flatness => "Flatness",
            Self::GeometricMean => "GeometricMean",
            Self::InstantPower => "InstantPower",
            Self::Mean => "Mean",
            Self::Median => "Median",
            Self::PoolAggregator => "PoolAggregator",
            Self::PowerMean => "PowerMean",
            Self::Rms => "RMS",
            Self::RawMoments => "RawMoments",
            Self::SingleGaussian => "SingleGaussian",
            Self::Variance => "Variance",
            Self::ChordsDescriptors => "ChordsDescriptors",
            Self::ChordsDetection => "ChordsDetection",
            Self::ChordsDetectionBeats => "ChordsDetectionBeats",
            Self::Chromagram => "Chromagram",
            Self::Dissonance => "Dissonance",
            Self::Hpcp => "HPCP",
            Self::HarmonicPeaks => "HarmonicPeaks",
            Self::HighResolutionFeatures => "HighResolutionFeatures",
            Self::Inharmonicity => "Inharmonicity",
            Self::Key => "Key",
            Self::KeyExtractor => "KeyExtractor",
            Self::OddToEvenHarmonicEnergyRatio => "OddToEvenHarmonicEnergyRatio",
            Self::PitchSalience => "PitchSalience",
            Self::SpectrumCq => "SpectrumCQ",
            Self::TonalExtractor => "TonalExtractor",
            Self::TonicIndianArtMusic => "TonicIndianArtMusic",
            Self::Tristimulus => "Tristimulus",
            Self::TuningFrequency => "TuningFrequency",
            Self::TuningFrequencyExtractor => "TuningFrequencyExtractor",
            Self::SBic => "SBic",
        }
    }

    /// Looks up an identifier from its canonical textual form.
    ///
    /// Returns `None` for strings that name no catalog member.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "BeatTrackerDegara" => Some(Self::BeatTrackerDegara),
            "BeatTrackerMultiFeature" => Some(Self::BeatTrackerMultiFeature),
            "Beatogram" => Some(Self::Beatogram),
            "BeatsLoudness" => Some(Self::BeatsLoudness),
            "BpmHistogram" => Some(Self::BpmHistogram),
            "BpmHistogramDescriptors" => Some(Self::BpmHistogramDescriptors),
            "BpmRubato" => Some(Self::BpmRubato),
            "Danceability" => Some(Self::Danceability),
            "HarmonicBpm" => Some(Self::HarmonicBpm),
            "LoopBpmConfidence" => Some(Self::LoopBpmConfidence),
            "LoopBpmEstimator" => Some(Self::LoopBpmEstimator),
            "Meter" => Some(Self::Meter),
            "NoveltyCurve" => Some(Self::NoveltyCurve),
            "NoveltyCurveFixedBpmEstimator" => Some(Self::NoveltyCurveFixedBpmEstimator),
            "OnsetDetection" => Some(Self::OnsetDetection),
            "OnsetDetectionGlobal" => Some(Self::OnsetDetectionGlobal),
            "OnsetRate" => Some(Self::OnsetRate),
            "Onsets" => Some(Self::Onsets),
            "PercivalBpmEstimator" => Some(Self::PercivalBpmEstimator),
            "PercivalEnhanceHarmonics" => Some(Self::PercivalEnhanceHarmonics),
            "PercivalEvaluatePulseTrains" => Some(Self::PercivalEvaluatePulseTrains),
            "RhythmDescriptors" => Some(Self::RhythmDescriptors),
            "RhythmExtractor" => Some(Self::RhythmExtractor),
            "RhythmExtractor2013" => Some(Self::RhythmExtractor2013),
            "RhythmTransform" => Some(Self::RhythmTransform),
            "SingleBeatLoudness" => Some(Self::SingleBeatLoudness),
            "SuperFluxExtractor" => Some(Self::SuperFluxExtractor),
            "SuperFluxNovelty" => Some(Self::SuperFluxNovelty),
            "SuperFluxPeaks" => Some(Self::SuperFluxPeaks),
            "TempoScaleBands" => Some(Self::TempoScaleBands),
            "TempoTap" => Some(Self::TempoTap),
            "TempoTapDegara" => Some(Self::TempoTapDegara),
            "TempoTapMaxAgreement" => Some(Self::TempoTapMaxAgreement),
            "TempoTapTicks" => Some(Self::TempoTapTicks),
            "MultiPitchKlapuri" => Some(Self::MultiPitchKlapuri),
            "MultiPitchMelodia" => Some(Self::MultiPitchMelodia),
            "PitchContourSegmentation" => Some(Self::PitchContourSegmentation),
            "PitchContours" => Some(Self::PitchContours),
            "PitchContoursMelody" => Some(Self::PitchContoursMelody),
            "PitchContoursMonoMelody" => Some(Self::PitchContoursMonoMelody),
            "PitchContoursMultiMelody" => Some(Self::PitchContoursMultiMelody),
            "PitchFilter" => Some(Self::PitchFilter),
            "PitchMelodia" => Some(Self::PitchMelodia),
            "PitchSalienceFunction" => Some(Self::PitchSalienceFunction),
            "PitchSalienceFunctionPeaks" => Some(Self::PitchSalienceFunctionPeaks),
            "PitchYin" => Some(Self::PitchYin),
            "PitchYinFFT" => Some(Self::PitchYinFft),
            "PredominantPitchMelodia" => Some(Self::PredominantPitchMelodia),
            "Vibrato" => Some(Self::Vibrato),
            "HarmonicMask" => Some(Self::HarmonicMask),
            "HarmonicModelAnal" => Some(Self::HarmonicModelAnal),
            "HprModelAnal" => Some(Self::HprModelAnal),
            "HpsModelAnal" => Some(Self::HpsModelAnal),
            "ResampleFFT" => Some(Self::ResampleFft),
            "SineModelAnal" => Some(Self::SineModelAnal),
            "SineModelSynth" => Some(Self::SineModelSynth),
            "SineSubtraction" => Some(Self::SineSubtraction),
            "SprModelAnal" => Some(Self::SprModelAnal),
            "SprModelSynth" => Some(Self::SprModelSynth),
            "SpsModelAnal" => Some(Self::SpsModelAnal),
            "SpsModelSynth" => Some(Self::SpsModelSynth),
            "StochasticModelAnal" => Some(Self::StochasticModelAnal),
            "StochasticModelSynth" => Some(Self::StochasticModelSynth),
            "AudioOnsetsMarker" => Some(Self::AudioOnsetsMarker),
            "Duration" => Some(Self::Duration),
            "EffectiveDuration" => Some(Self::EffectiveDuration),
            "FadeDetection" => Some(Self::FadeDetection),
            "SilenceRate" => Some(Self::SilenceRate),
            "StartStopSilence" => Some(Self::StartStopSilence),
            "DynamicComplexity" => Some(Self::DynamicComplexity),
            "Intensity" => Some(Self::Intensity),
            "Larm" => Some(Self::Larm),
            "Leq" => Some(Self::Leq),
            "LevelExtractor" => Some(Self::LevelExtractor),
            "Loudness" => Some(Self::Loudness),
            "LoudnessEBUR128" => Some(Self::LoudnessEbur128),
            "LoudnessVickers" => Some(Self::LoudnessVickers),
            "ReplayGain" => Some(Self::ReplayGain),
            "AllPass" => Some(Self::AllPass),
            "BandPass" => Some(Self::BandPass),
            "BandReject" => Some(Self::BandReject),
            "DCRemoval" => Some(Self::DcRemoval),
            "EqualLoudness" => Some(Self::EqualLoudness),
            "HighPass" => Some(Self::HighPass),
            "IIR" => Some(Self::Iir),
            "LowPass" => Some(Self::LowPass),
            "MaxFilter" => Some(Self::MaxFilter),
            "MovingAverage" => Some(Self::MovingAverage),
            "AutoCorrelation" => Some(Self::AutoCorrelation),
            "BPF" => Some(Self::Bpf),
            "BinaryOperator" => Some(Self::BinaryOperator),
            "BinaryOperatorStream" => Some(Self::BinaryOperatorStream),
            "Clipper" => Some(Self::Clipper),
            "ConstantQ" => Some(Self::ConstantQ),
            "CrossCorrelation" => Some(Self::CrossCorrelation),
            "CubicSpline" => Some(Self::CubicSpline),
            "DCT" => Some(Self::Dct),
            "Derivative" => Some(Self::Derivative),
            "FFT" => Some(Self::Fft),
            "FFTC" => Some(Self::Fftc),
            "FrameCutter" => Some(Self::FrameCutter),
            "FrameToReal" => Some(Self::FrameToReal),
            "IDCT" => Some(Self::Idct),
            "IFFT" => Some(Self::Ifft),
            "IFFTC" => Some(Self::Ifftc),
            "MonoMixer" => Some(Self::MonoMixer),
            "Multiplexer" => Some(Self::Multiplexer),
            "NoiseAdder" => Some(Self::NoiseAdder),
            "OverlapAdd" => Some(Self::OverlapAdd),
            "PeakDetection" => Some(Self::PeakDetection),
            "Scale" => Some(Self::Scale),
            "Slicer" => Some(Self::Slicer),
            "Spline" => Some(Self::Spline),
            "StereoDemuxer" => Some(Self::StereoDemuxer),
            "StereoMuxer" => Some(Self::StereoMuxer),
            "StereoTrimmer" => Some(Self::StereoTrimmer),
            "Trimmer" => Some(Self::Trimmer),
            "UnaryOperator" => Some(Self::UnaryOperator),
            "UnaryOperatorStream" => Some(Self::UnaryOperatorStream),
            "WarpedAutoCorrelation" => Some(Self::WarpedAutoCorrelation),
            "Windowing" => Some(Self::Windowing),
            "ZeroCrossingRate" => Some(Self::ZeroCrossingRate),
            "PCA" => Some(Self::Pca),
            "BFCC" => Some(Self::Bfcc),
            "BarkBands" => Some(Self::BarkBands),
            "ERBBands" => Some(Self::ErbBands),
            "EnergyBand" => Some(Self::EnergyBand),
            "EnergyBandRatio" => Some(Self::EnergyBandRatio),
            "FlatnessDB" => Some(Self::FlatnessDb),
            "Flux" => Some(Self::Flux),
            "FrequencyBands" => Some(Self::FrequencyBands),
            "GFCC" => Some(Self::Gfcc),
            "HFC" => Some(Self::Hfc),
            "LPC" => Some(Self::Lpc),
            "MFCC" => Some(Self::Mfcc),
            "MaxMagFreq" => Some(Self::MaxMagFreq),
            "MelBands" => Some(Self::MelBands),
            "Panning" => Some(Self::Panning),
            "PowerSpectrum" => Some(Self::PowerSpectrum),
            "RollOff" => Some(Self::RollOff),
            "SpectralCentroidTime" => Some(Self::SpectralCentroidTime),
            "SpectralComplexity" => Some(Self::SpectralComplexity),
            "SpectralContrast" => Some(Self::SpectralContrast),
            "SpectralPeaks" => Some(Self::SpectralPeaks),
            "SpectralWhitening" => Some(Self::SpectralWhitening),
            "Spectrum" => Some(Self::Spectrum),
            "SpectrumToCent" => Some(Self::SpectrumToCent),
            "StrongPeak" => Some(Self::StrongPeak),
            "TriangularBands" => Some(Self::TriangularBands),
            "TriangularBarkBands" => Some(Self::TriangularBarkBands),
            "Extractor" => Some(Self::Extractor),
            "LowLevelSpectralEqloudExtractor" => Some(Self::LowLevelSpectralEqloudExtractor),
            "LowLevelSpectralExtractor" => Some(Self::LowLevelSpectralExtractor),
            "AfterMaxToBeforeMaxEnergyRatio" => Some(Self::AfterMaxToBeforeMaxEnergyRatio),
            "DerivativeSFX" => Some(Self::DerivativeSfx),
            "Envelope" => Some(Self::Envelope),
            "FlatnessSFX" => Some(Self::FlatnessSfx),
            "LogAttackTime" => Some(Self::LogAttackTime),
            "MaxToTotal" => Some(Self::MaxToTotal),
            "MinToTotal" => Some(Self::MinToTotal),
            "StrongDecay" => Some(Self::StrongDecay),
            "TCToTotal" => Some(Self::TcToTotal),
            "CartesianToPolar" => Some(Self::CartesianToPolar),
            "Magnitude" => Some(Self::Magnitude),
            "PolarToCartesian" => Some(Self::PolarToCartesian),
            "CentralMoments" => Some(Self::CentralMoments),
            "Centroid" => Some(Self::Centroid),
            "Crest" => Some(Self::Crest),
            "Decrease" => Some(Self::Decrease),
            "DistributionShape" => Some(Self::DistributionShape),
            "Energy" => Some(Self::Energy),
            "Entropy" => Some(Self::Entropy),
            "Flatness" => Some(Self::Flatness),
            "GeometricMean" => Some(Self::GeometricMean),
            "InstantPower" => Some(Self::InstantPower),
            "Mean" => Some(Self::Mean),
            "Median" => Some(Self::Median),
            "PoolAggregator" => Some(Self::PoolAggregator),
            "PowerMean" => Some(Self::PowerMean),
            "RMS" => Some(Self::Rms),
            "RawMoments" => Some(Self::RawMoments),
            "SingleGaussian" => Some(Self::SingleGaussian),
            "Variance" => Some(Self::Variance),
            "ChordsDescriptors" => Some(Self::ChordsDescriptors),
            "ChordsDetection" => Some(Self::ChordsDetection),
            "ChordsDetectionBeats" => Some(Self::ChordsDetectionBeats),
            "Chromagram" => Some(Self::Chromagram),
            "Dissonance" => Some(Self::Dissonance),
            "HPCP" => Some(Self::Hpcp),
            "HarmonicPeaks" => Some(Self::HarmonicPeaks),
            "HighResolutionFeatures" => Some(Self::HighResolutionFeatures),
            "Inharmonicity" => Some(Self::Inharmonicity),
            "Key" => Some(Self::Key),
            "KeyExtractor" => Some(Self::KeyExtractor),
            "OddToEvenHarmonicEnergyRatio" => Some(Self::OddToEvenHarmonicEnergyRatio),
            "PitchSalience" => Some(Self::PitchSalience),
            "SpectrumCQ" => Some(Self::SpectrumCq),
            "TonalExtractor" => Some(Self::TonalExtractor),
            "TonicIndianArtMusic" => Some(Self::TonicIndianArtMusic),
            "Tristimulus" => Some(Self::Tristimulus),
            "TuningFrequency" => Some(Self::TuningFrequency),
            "TuningFrequencyExtractor" => Some(Self::TuningFrequencyExtractor),
            "SBic" => Some(Self::SBic),
            _ => None,
        }
    }

    /// Whether `name` is the canonical textual form of a catalog member.
    pub fn is_valid(name: &str) -> bool {
        Self::from_name(name).is_some()
    }

    /// The category the algorithm is documented under.
    pub const fn category(self) -> Category {
        match self {
            Self::BeatTrackerDegara
            | Self::BeatTrackerMultiFeature
            | Self::Beatogram
            | Self::BeatsLoudness
            | Self::BpmHistogram
            | Self::BpmHistogramDescriptors
            | Self::BpmRubato
            | Self::Danceability
            | Self::HarmonicBpm
            | Self::LoopBpmConfidence
            | Self::LoopBpmEstimator
            | Self::Meter
            | Self::NoveltyCurve
            | Self::NoveltyCurveFixedBpmEstimator
            | Self::OnsetDetection
            | Self::OnsetDetectionGlobal
            | Self::OnsetRate
            | Self::Onsets
            | Self::PercivalBpmEstimator
            | Self::PercivalEnhanceHarmonics
            | Self::PercivalEvaluatePulseTrains
            | Self::RhythmDescriptors
            | Self::RhythmExtractor
            | Self::RhythmExtractor2013
            | Self::RhythmTransform
            | Self::SingleBeatLoudness
            | Self::SuperFluxExtractor
            | Self::SuperFluxNovelty
            | Self::SuperFluxPeaks
            | Self::TempoScaleBands
            | Self::TempoTap
            | Self::TempoTapDegara
            | Self::TempoTapMaxAgreement
            | Self::TempoTapTicks => Category::Rhythm,
            Self::MultiPitchKlapuri
            | Self::MultiPitchMelodia
            | Self::PitchContourSegmentation
            | Self::PitchContours
            | Self::PitchContoursMelody
            | Self::PitchContoursMonoMelody
            | Self::PitchContoursMultiMelody
            | Self::PitchFilter
            | Self::PitchMelodia
            | Self::PitchSalienceFunction
            | Self::PitchSalienceFunctionPeaks
            | Self::PitchYin
            | Self::PitchYinFft
            | Self::PredominantPitchMelodia
            | Self::Vibrato => Category::Pitch,
            Self::HarmonicMask
            | Self::HarmonicModelAnal
            | Self::HprModelAnal
            | Self::HpsModelAnal
            | Self::ResampleFft
            | Self::SineModelAnal
            | Self::SineModelSynth
            | Self::SineSubtraction
            | Self::SprModelAnal
            | Self::SprModelSynth
            | Self::SpsModelAnal
            | Self::SpsModelSynth
            | Self::StochasticModelAnal
            | Self::StochasticModelSynth => Category::Synthesis,
            Self::AudioOnsetsMarker => Category::Io,
            Self::Duration
            | Self::EffectiveDuration
            | Self::FadeDetection
            | Self::SilenceRate
            | Self::StartStopSilence => Category::DurationSilence,
            Self::DynamicComplexity
            | Self::Intensity
            | Self::Larm
            | Self::Leq
            | Self::LevelExtractor
            | Self::Loudness
            | Self::LoudnessEbur128
            | Self::LoudnessVickers
            | Self::ReplayGain => Category::LoudnessDynamics,
            Self::AllPass
            | Self::BandPass
            | Self::BandReject
            | Self::DcRemoval
            | Self::EqualLoudness
            | Self::HighPass
            | Self::Iir
            | Self::LowPass
            | Self::MaxFilter
            | Self::MovingAverage => Category::Filters,
            Self::AutoCorrelation
            | Self::Bpf
            | Self::BinaryOperator
            | Self::BinaryOperatorStream
            | Self::Clipper
            | Self::ConstantQ
            | Self::CrossCorrelation
            | Self::CubicSpline
            | Self::Dct
            | Self::Derivative
            | Self::Fft
            | Self::Fftc
            | Self::FrameCutter
            | Self::FrameToReal
            | Self::Idct
            | Self::Ifft
            | Self::Ifftc
            | Self::MonoMixer
            | Self::Multiplexer
            | Self::NoiseAdder
            | Self::OverlapAdd
            | Self::PeakDetection
            | Self::Scale
            | Self::Slicer
            | Self::Spline
            | Self::StereoDemuxer
            | Self::StereoMuxer
            | Self::StereoTrimmer
            | Self::Trimmer
            | Self::UnaryOperator
            | Self::UnaryOperatorStream
            | Self::WarpedAutoCorrelation
            | Self::Windowing
            | Self::ZeroCrossingRate => Category::Standard,
            Self::Pca => Category::Transformations,
            Self::Bfcc
            | Self::BarkBands
            | Self::ErbBands
            | Self::EnergyBand
            | Self::EnergyBandRatio
            | Self::FlatnessDb
            | Self::Flux
            | Self::FrequencyBands
            | Self::Gfcc
            | Self::Hfc
            | Self::Lpc
            | Self::Mfcc
            | Self::MaxMagFreq
            | Self::MelBands
            | Self::Panning
            | Self::PowerSpectrum
            | Self::RollOff
            | Self::SpectralCentroidTime
            | Self::SpectralComplexity
            | Self::SpectralContrast
            | Self::SpectralPeaks
            | Self::SpectralWhitening
            | Self::Spectrum
            | Self::SpectrumToCent
            | Self::StrongPeak
            | Self::TriangularBands
            | Self::TriangularBarkBands => Category::Spectral,
            Self::Extractor
            | Self::LowLevelSpectralEqloudExtractor
            | Self::LowLevelSpectralExtractor => Category::Extractors,
            Self::AfterMaxToBeforeMaxEnergyRatio
            | Self::DerivativeSfx
            | Self::Envelope
            | Self::FlatnessSfx
            | Self::LogAttackTime
            | Self::MaxToTotal
            | Self::MinToTotal
            | Self::StrongDecay
            | Self::TcToTotal => Category::EnvelopeSfx,
            Self::CartesianToPolar
            | Self::Magnitude
            | Self::PolarToCartesian => Category::Math,
            Self::CentralMoments
            | Self::Centroid
            | Self::Crest
            | Self::Decrease
            | Self::DistributionShape
            | Self::Energy
            | Self::Entropy
            | Self::Flatness
            | Self::GeometricMean
            | Self::InstantPower
            | Self::Mean
            | Self::Median
            | Self::PoolAggregator
            | Self::PowerMean
            | Self::Rms
            | Self::RawMoments
            | Self::SingleGaussian
            | Self::Variance => Category::Statistics,
            Self::ChordsDescriptors
            | Self::ChordsDetection
            | Self::ChordsDetectionBeats
            | Self::Chromagram
            | Self::Dissonance
            | Self::Hpcp
            | Self::HarmonicPeaks
            | Self::HighResolutionFeatures
            | Self::Inharmonicity
            | Self::Key
            | Self::KeyExtractor
            | Self::OddToEvenHarmonicEnergyRatio
            | Self::PitchSalience
            | Self::SpectrumCq
            | Self::TonalExtractor
            | Self::TonicIndianArtMusic
            | Self::Tristimulus
            | Self::TuningFrequency
            | Self::TuningFrequencyExtractor => Category::Tonal,
            Self::SBic => Category::Segmentation,
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no catalog member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm identifier: {0}")]
pub struct ParseAlgorithmIdError(String);

impl ParseAlgorithmIdError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for AlgorithmId {
    type Err = ParseAlgorithmIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseAlgorithmIdError(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AlgorithmId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AlgorithmId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl serde::de::Visitor<'_> for IdVisitor {
            type Value = AlgorithmId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an algorithm identifier string")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
                AlgorithmId::from_name(value).ok_or_else(|| {
                    E::custom(format_args!("unknown algorithm identifier: {value}"))
                })
            }
        }

        deserializer.deserialize_str(IdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_size() {
        assert_eq!(AlgorithmId::ALL.len(), AlgorithmId::COUNT);
        assert_eq!(AlgorithmId::all().count(), AlgorithmId::COUNT);
    }

    #[test]
    fn identifiers_are_distinct() {
        let unique: HashSet<AlgorithmId> = AlgorithmId::all().collect();
        assert_eq!(unique.len(), AlgorithmId::COUNT);
    }

    #[test]
    fn names_are_distinct() {
        let unique: HashSet<&str> = AlgorithmId::all().map(AlgorithmId::name).collect();
        assert_eq!(unique.len(), AlgorithmId::COUNT);
    }

    #[test]
    fn name_round_trips() {
        for id in AlgorithmId::all() {
            assert_eq!(AlgorithmId::from_name(id.name()), Some(id));
        }
    }

    #[test]
    fn validation() {
        assert!(AlgorithmId::is_valid("RMS"));
        assert!(AlgorithmId::is_valid("MFCC"));
        assert!(!AlgorithmId::is_valid("NotARealAlgorithm"));
        assert!(!AlgorithmId::is_valid(""));
        // Lookup is case-sensitive; only the canonical spelling is valid.
        assert!(!AlgorithmId::is_valid("rms"));
    }

    #[test]
    fn from_str_matches_from_name() {
        assert_eq!("PitchYin".parse::<AlgorithmId>(), Ok(AlgorithmId::PitchYin));
        let err = "Nope".parse::<AlgorithmId>().unwrap_err();
        assert_eq!(err.input(), "Nope");
        assert_eq!(err.to_string(), "unknown algorithm identifier: Nope");
    }

    #[test]
    fn display_is_canonical_name() {
        assert_eq!(AlgorithmId::Mfcc.to_string(), "MFCC");
        assert_eq!(AlgorithmId::BeatTrackerDegara.to_string(), "BeatTrackerDegara");
    }

    #[test]
    fn category_counts() {
        let rhythm = AlgorithmId::all()
            .filter(|id| id.category() == Category::Rhythm)
            .count();
        assert_eq!(rhythm, 34);
        let spectral = AlgorithmId::all()
            .filter(|id| id.category() == Category::Spectral)
            .count();
        assert_eq!(spectral, 27);
        assert_eq!(AlgorithmId::SBic.category(), Category::Segmentation);
        assert_eq!(AlgorithmId::Pca.category(), Category::Transformations);
    }

    #[test]
    fn category_names() {
        assert_eq!(Category::Rhythm.name(), "Rhythm");
        assert_eq!(Category::DurationSilence.name(), "Duration & Silence");
        assert_eq!(Category::EnvelopeSfx.name(), "Envelope & SFX");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_canonical_name() {
        let json = serde_json::to_string(&AlgorithmId::Mfcc).unwrap();
        assert_eq!(json, "\"MFCC\"");
    }

    #[test]
    fn deserializes_from_canonical_name() {
        let id: AlgorithmId = serde_json::from_str("\"PitchYinFFT\"").unwrap();
        assert_eq!(id, AlgorithmId::PitchYinFft);
    }

    #[test]
    fn rejects_unknown_name() {
        let err = serde_json::from_str::<AlgorithmId>("\"NotARealAlgorithm\"").unwrap_err();
        assert!(err.to_string().contains("unknown algorithm identifier"));
    }

    #[test]
    fn round_trips_every_identifier() {
        for id in AlgorithmId::all() {
            let json = serde_json::to_string(&id).unwrap();
            let back: AlgorithmId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, id);
        }
    }
}
