//! Per-identifier aliases for typed algorithm handles.
//!
//! One alias per catalog member, pairing [`TypedAlgorithm`] with the matching
//! specification type so the handle for a given algorithm can be named
//! directly (`typed::Mfcc` rather than
//! `TypedAlgorithm<specs::spectral::Mfcc>`). Pure aliasing: each name here
//! resolves at compile time to exactly the same type as the dispatcher
//! produces for the corresponding identifier.

use crate::algorithm::TypedAlgorithm;
use crate::specs;

/// Typed handle for the `BeatTrackerDegara` algorithm.
pub type BeatTrackerDegara = TypedAlgorithm<specs::BeatTrackerDegara>;

/// Typed handle for the `BeatTrackerMultiFeature` algorithm.
pub type BeatTrackerMultiFeature = TypedAlgorithm<specs::BeatTrackerMultiFeature>;

/// Typed handle for the `Beatogram` algorithm.
pub type Beatogram = TypedAlgorithm<specs::Beatogram>;

/// Typed handle for the `BeatsLoudness` algorithm.
pub type BeatsLoudness = TypedAlgorithm<specs::BeatsLoudness>;

/// Typed handle for the `BpmHistogram` algorithm.
pub type BpmHistogram = TypedAlgorithm<specs::BpmHistogram>;

/// Typed handle for the `BpmHistogramDescriptors` algorithm.
pub type BpmHistogramDescriptors = TypedAlgorithm<specs::BpmHistogramDescriptors>;

/// Typed handle for the `BpmRubato` algorithm.
pub type BpmRubato = TypedAlgorithm<specs::BpmRubato>;

/// Typed handle for the `Danceability` algorithm.
pub type Danceability = TypedAlgorithm<specs::Danceability>;

/// Typed handle for the `HarmonicBpm` algorithm.
pub type HarmonicBpm = TypedAlgorithm<specs::HarmonicBpm>;

/// Typed handle for the `LoopBpmConfidence` algorithm.
pub type LoopBpmConfidence = TypedAlgorithm<specs::LoopBpmConfidence>;

/// Typed handle for the `LoopBpmEstimator` algorithm.
pub type LoopBpmEstimator = TypedAlgorithm<specs::LoopBpmEstimator>;

/// Typed handle for the `Meter` algorithm.
pub type Meter = TypedAlgorithm<specs::Meter>;

/// Typed handle for the `NoveltyCurve` algorithm.
pub type NoveltyCurve = TypedAlgorithm<specs::NoveltyCurve>;

/// Typed handle for the `NoveltyCurveFixedBpmEstimator` algorithm.
pub type NoveltyCurveFixedBpmEstimator = TypedAlgorithm<specs::NoveltyCurveFixedBpmEstimator>;

/// Typed handle for the `OnsetDetection` algorithm.
pub type OnsetDetection = TypedAlgorithm<specs::OnsetDetection>;

/// Typed handle for the `OnsetDetectionGlobal` algorithm.
pub type OnsetDetectionGlobal = TypedAlgorithm<specs::OnsetDetectionGlobal>;

/// Typed handle for the `OnsetRate` algorithm.
pub type OnsetRate = TypedAlgorithm<specs::OnsetRate>;

/// Typed handle for the `Onsets` algorithm.
pub type Onsets = TypedAlgorithm<specs::Onsets>;

/// Typed handle for the `PercivalBpmEstimator` algorithm.
pub type PercivalBpmEstimator = TypedAlgorithm<specs::PercivalBpmEstimator>;

/// Typed handle for the `PercivalEnhanceHarmonics` algorithm.
pub type PercivalEnhanceHarmonics = TypedAlgorithm<specs::PercivalEnhanceHarmonics>;

/// Typed handle for the `PercivalEvaluatePulseTrains` algorithm.
pub type PercivalEvaluatePulseTrains = TypedAlgorithm<specs::PercivalEvaluatePulseTrains>;

/// Typed handle for the `RhythmDescriptors` algorithm.
pub type RhythmDescriptors = TypedAlgorithm<specs::RhythmDescriptors>;

/// Typed handle for the `RhythmExtractor` algorithm.
pub type RhythmExtractor = TypedAlgorithm<specs::RhythmExtractor>;

/// Typed handle for the `RhythmExtractor2013` algorithm.
pub type RhythmExtractor2013 = TypedAlgorithm<specs::RhythmExtractor2013>;

/// Typed handle for the `RhythmTransform` algorithm.
pub type RhythmTransform = TypedAlgorithm<specs::RhythmTransform>;

/// Typed handle for the `SingleBeatLoudness` algorithm.
pub type SingleBeatLoudness = TypedAlgorithm<specs::SingleBeatLoudness>;

/// Typed handle for the `SuperFluxExtractor` algorithm.
pub type SuperFluxExtractor = TypedAlgorithm<specs::SuperFluxExtractor>;

/// Typed handle for the `SuperFluxNovelty` algorithm.
pub type SuperFluxNovelty = TypedAlgorithm<specs::SuperFluxNovelty>;

/// Typed handle for the `SuperFluxPeaks` algorithm.
pub type SuperFluxPeaks = TypedAlgorithm<specs::SuperFluxPeaks>;

/// Typed handle for the `TempoScaleBands` algorithm.
pub type TempoScaleBands = TypedAlgorithm<specs::TempoScaleBands>;

/// Typed handle for the `TempoTap` algorithm.
pub type TempoTap = TypedAlgorithm<specs::TempoTap>;

/// Typed handle for the `TempoTapDegara` algorithm.
pub type TempoTapDegara = TypedAlgorithm<specs::TempoTapDegara>;

/// Typed handle for the `TempoTapMaxAgreement` algorithm.
pub type TempoTapMaxAgreement = TypedAlgorithm<specs::TempoTapMaxAgreement>;

/// Typed handle for the `TempoTapTicks` algorithm.
pub type TempoTapTicks = TypedAlgorithm<specs::TempoTapTicks>;

/// Typed handle for the `MultiPitchKlapuri` algorithm.
pub type MultiPitchKlapuri = TypedAlgorithm<specs::MultiPitchKlapuri>;

/// Typed handle for the `MultiPitchMelodia` algorithm.
pub type MultiPitchMelodia = TypedAlgorithm<specs::MultiPitchMelodia>;

/// Typed handle for the `PitchContourSegmentation` algorithm.
pub type PitchContourSegmentation = TypedAlgorithm<specs::PitchContourSegmentation>;

/// Typed handle for the `PitchContours` algorithm.
pub type PitchContours = TypedAlgorithm<specs::PitchContours>;

/// Typed handle for the `PitchContoursMelody` algorithm.
pub type PitchContoursMelody = TypedAlgorithm<specs::PitchContoursMelody>;

/// Typed handle for the `PitchContoursMonoMelody` algorithm.
pub type PitchContoursMonoMelody = TypedAlgorithm<specs::PitchContoursMonoMelody>;

/// Typed handle for the `PitchContoursMultiMelody` algorithm.
pub type PitchContoursMultiMelody = TypedAlgorithm<specs::PitchContoursMultiMelody>;

/// Typed handle for the `PitchFilter` algorithm.
pub type PitchFilter = TypedAlgorithm<specs::PitchFilter>;

/// Typed handle for the `PitchMelodia` algorithm.
pub type PitchMelodia = TypedAlgorithm<specs::PitchMelodia>;

/// Typed handle for the `PitchSalienceFunction` algorithm.
pub type PitchSalienceFunction = TypedAlgorithm<specs::PitchSalienceFunction>;

/// Typed handle for the `PitchSalienceFunctionPeaks` algorithm.
pub type PitchSalienceFunctionPeaks = TypedAlgorithm<specs::PitchSalienceFunctionPeaks>;

/// Typed handle for the `PitchYin` algorithm.
pub type PitchYin = TypedAlgorithm<specs::PitchYin>;

/// Typed handle for the `PitchYinFFT` algorithm.
pub type PitchYinFft = TypedAlgorithm<specs::PitchYinFft>;

/// Typed handle for the `PredominantPitchMelodia` algorithm.
pub type PredominantPitchMelodia = TypedAlgorithm<specs::PredominantPitchMelodia>;

/// Typed handle for the `Vibrato` algorithm.
pub type Vibrato = TypedAlgorithm<specs::Vibrato>;

/// Typed handle for the `HarmonicMask` algorithm.
pub type HarmonicMask = TypedAlgorithm<specs::HarmonicMask>;

/// Typed handle for the `HarmonicModelAnal` algorithm.
pub type HarmonicModelAnal = TypedAlgorithm<specs::HarmonicModelAnal>;

/// Typed handle for the `HprModelAnal` algorithm.
pub type HprModelAnal = TypedAlgorithm<specs::HprModelAnal>;

/// Typed handle for the `HpsModelAnal` algorithm.
pub type HpsModelAnal = TypedAlgorithm<specs::HpsModelAnal>;

/// Typed handle for the `ResampleFFT` algorithm.
pub type ResampleFft = TypedAlgorithm<specs::ResampleFft>;

/// Typed handle for the `SineModelAnal` algorithm.
pub type SineModelAnal = TypedAlgorithm<specs::SineModelAnal>;

/// Typed handle for the `SineModelSynth` algorithm.
pub type SineModelSynth = TypedAlgorithm<specs::SineModelSynth>;

/// Typed handle for the `SineSubtraction` algorithm.
pub type SineSubtraction = TypedAlgorithm<specs::SineSubtraction>;

/// Typed handle for the `SprModelAnal` algorithm.
pub type SprModelAnal = TypedAlgorithm<specs::SprModelAnal>;

/// Typed handle for the `SprModelSynth` algorithm.
pub type SprModelSynth = TypedAlgorithm<specs::SprModelSynth>;

/// Typed handle for the `SpsModelAnal` algorithm.
pub type SpsModelAnal = TypedAlgorithm<specs::SpsModelAnal>;

/// Typed handle for the `SpsModelSynth` algorithm.
pub type SpsModelSynth = TypedAlgorithm<specs::SpsModelSynth>;

/// Typed handle for the `StochasticModelAnal` algorithm.
pub type StochasticModelAnal = TypedAlgorithm<specs::StochasticModelAnal>;

/// Typed handle for the `StochasticModelSynth` algorithm.
pub type StochasticModelSynth = TypedAlgorithm<specs::StochasticModelSynth>;

/// Typed handle for the `AudioOnsetsMarker` algorithm.
pub type AudioOnsetsMarker = TypedAlgorithm<specs::AudioOnsetsMarker>;

/// Typed handle for the `Duration` algorithm.
pub type Duration = TypedAlgorithm<specs::Duration>;

/// Typed handle for the `EffectiveDuration` algorithm.
pub type EffectiveDuration = TypedAlgorithm<specs::EffectiveDuration>;

/// Typed handle for the `FadeDetection` algorithm.
pub type FadeDetection = TypedAlgorithm<specs::FadeDetection>;

/// Typed handle for the `SilenceRate` algorithm.
pub type SilenceRate = TypedAlgorithm<specs::SilenceRate>;

/// Typed handle for the `StartStopSilence` algorithm.
pub type StartStopSilence = TypedAlgorithm<specs::StartStopSilence>;

/// Typed handle for the `DynamicComplexity` algorithm.
pub type DynamicComplexity = TypedAlgorithm<specs::DynamicComplexity>;

/// Typed handle for the `Intensity` algorithm.
pub type Intensity = TypedAlgorithm<specs::Intensity>;

/// Typed handle for the `Larm` algorithm.
pub type Larm = TypedAlgorithm<specs::Larm>;

/// Typed handle for the `Leq` algorithm.
pub type Leq = TypedAlgorithm<specs::Leq>;

/// Typed handle for the `LevelExtractor` algorithm.
pub type LevelExtractor = TypedAlgorithm<specs::LevelExtractor>;

/// Typed handle for the `Loudness` algorithm.
pub type Loudness = TypedAlgorithm<specs::Loudness>;

/// Typed handle for the `LoudnessEBUR128` algorithm.
pub type LoudnessEbur128 = TypedAlgorithm<specs::LoudnessEbur128>;

/// Typed handle for the `LoudnessVickers` algorithm.
pub type LoudnessVickers = TypedAlgorithm<specs::LoudnessVickers>;

/// Typed handle for the `ReplayGain` algorithm.
pub type ReplayGain = TypedAlgorithm<specs::ReplayGain>;

/// Typed handle for the `AllPass` algorithm.
pub type AllPass = TypedAlgorithm<specs::AllPass>;

/// Typed handle for the `BandPass` algorithm.
pub type BandPass = TypedAlgorithm<specs::BandPass>;

/// Typed handle for the `BandReject` algorithm.
pub type BandReject = TypedAlgorithm<specs::BandReject>;

/// Typed handle for the `DCRemoval` algorithm.
pub type DcRemoval = TypedAlgorithm<specs::DcRemoval>;

/// Typed handle for the `EqualLoudness` algorithm.
pub type EqualLoudness = TypedAlgorithm<specs::EqualLoudness>;

/// Typed handle for the `HighPass` algorithm.
pub type HighPass = TypedAlgorithm<specs::HighPass>;

/// Typed handle for the `IIR` algorithm.
pub type Iir = TypedAlgorithm<specs::Iir>;

/// Typed handle for the `LowPass` algorithm.
pub type LowPass = TypedAlgorithm<specs::LowPass>;

/// Typed handle for the `MaxFilter` algorithm.
pub type MaxFilter = TypedAlgorithm<specs::MaxFilter>;

/// Typed handle for the `MovingAverage` algorithm.
pub type MovingAverage = TypedAlgorithm<specs::MovingAverage>;

/// Typed handle for the `AutoCorrelation` algorithm.
pub type AutoCorrelation = TypedAlgorithm<specs::AutoCorrelation>;

/// Typed handle for the `BPF` algorithm.
pub type Bpf = TypedAlgorithm<specs::Bpf>;

/// Typed handle for the `BinaryOperator` algorithm.
pub type BinaryOperator = TypedAlgorithm<specs::BinaryOperator>;

/// Typed handle for the `BinaryOperatorStream` algorithm.
pub type BinaryOperatorStream = TypedAlgorithm<specs::BinaryOperatorStream>;

/// Typed handle for the `Clipper` algorithm.
pub type Clipper = TypedAlgorithm<specs::Clipper>;

/// Typed handle for the `ConstantQ` algorithm.
pub type ConstantQ = TypedAlgorithm<specs::ConstantQ>;

/// Typed handle for the `CrossCorrelation` algorithm.
pub type CrossCorrelation = TypedAlgorithm<specs::CrossCorrelation>;

/// Typed handle for the `CubicSpline` algorithm.
pub type CubicSpline = TypedAlgorithm<specs::CubicSpline>;

/// Typed handle for the `DCT` algorithm.
pub type Dct = TypedAlgorithm<specs::Dct>;

/// Typed handle for the `Derivative` algorithm.
pub type Derivative = TypedAlgorithm<specs::Derivative>;

/// Typed handle for the `FFT` algorithm.
pub type Fft = TypedAlgorithm<specs::Fft>;

/// Typed handle for the `FFTC` algorithm.
pub type Fftc = TypedAlgorithm<specs::Fftc>;

/// Typed handle for the `FrameCutter` algorithm.
pub type FrameCutter = TypedAlgorithm<specs::FrameCutter>;

/// Typed handle for the `FrameToReal` algorithm.
pub type FrameToReal = TypedAlgorithm<specs::FrameToReal>;

/// Typed handle for the `IDCT` algorithm.
pub type Idct = TypedAlgorithm<specs::Idct>;

/// Typed handle for the `IFFT` algorithm.
pub type Ifft = TypedAlgorithm<specs::Ifft>;

/// Typed handle for the `IFFTC` algorithm.
pub type Ifftc = TypedAlgorithm<specs::Ifftc>;

/// Typed handle for the `MonoMixer` algorithm.
pub type MonoMixer = TypedAlgorithm<specs::MonoMixer>;

/// Typed handle for the `Multiplexer` algorithm.
pub type Multiplexer = TypedAlgorithm<specs::Multiplexer>;

/// Typed handle for the `NoiseAdder` algorithm.
pub type NoiseAdder = TypedAlgorithm<specs::NoiseAdder>;

/// Typed handle for the `OverlapAdd` algorithm.
pub type OverlapAdd = TypedAlgorithm<specs::OverlapAdd>;

/// Typed handle for the `PeakDetection` algorithm.
pub type PeakDetection = TypedAlgorithm<specs::PeakDetection>;

/// Typed handle for the `Scale` algorithm.
pub type Scale = TypedAlgorithm<specs::Scale>;

/// Typed handle for the `Slicer` algorithm.
pub type Slicer = TypedAlgorithm<specs::Slicer>;

/// Typed handle for the `Spline` algorithm.
pub type Spline = TypedAlgorithm<specs::Spline>;

/// Typed handle for the `StereoDemuxer` algorithm.
pub type StereoDemuxer = TypedAlgorithm<specs::StereoDemuxer>;

/// Typed handle for the `StereoMuxer` algorithm.
pub type StereoMuxer = TypedAlgorithm<specs::StereoMuxer>;

/// Typed handle for the `StereoTrimmer` algorithm.
pub type StereoTrimmer = TypedAlgorithm<specs::StereoTrimmer>;

/// Typed handle for the `Trimmer` algorithm.
pub type Trimmer = TypedAlgorithm<specs::Trimmer>;

/// Typed handle for the `UnaryOperator` algorithm.
pub type UnaryOperator = TypedAlgorithm<specs::UnaryOperator>;

/// Typed handle for the `UnaryOperatorStream` algorithm.
pub type UnaryOperatorStream = TypedAlgorithm<specs::UnaryOperatorStream>;

/// Typed handle for the `WarpedAutoCorrelation` algorithm.
pub type WarpedAutoCorrelation = TypedAlgorithm<specs::WarpedAutoCorrelation>;

/// Typed handle for the `Windowing` algorithm.
pub type Windowing = TypedAlgorithm<specs::Windowing>;

/// Typed handle for the `ZeroCrossingRate` algorithm.
pub type ZeroCrossingRate = TypedAlgorithm<specs::ZeroCrossingRate>;

/// Typed handle for the `PCA` algorithm.
pub type Pca = TypedAlgorithm<specs::Pca>;

/// Typed handle for the `BFCC` algorithm.
pub type Bfcc = TypedAlgorithm<specs::Bfcc>;

/// Typed handle for the `BarkBands` algorithm.
pub type BarkBands = TypedAlgorithm<specs::BarkBands>;

/// Typed handle for the `ERBBands` algorithm.
pub type ErbBands = TypedAlgorithm<specs::ErbBands>;

/// Typed handle for the `EnergyBand` algorithm.
pub type EnergyBand = TypedAlgorithm<specs::EnergyBand>;

/// Typed handle for the `EnergyBandRatio` algorithm.
pub type EnergyBandRatio = TypedAlgorithm<specs::EnergyBandRatio>;

/// Typed handle for the `FlatnessDB` algorithm.
pub type FlatnessDb = TypedAlgorithm<specs::FlatnessDb>;

/// Typed handle for the `Flux` algorithm.
pub type Flux = TypedAlgorithm<specs::Flux>;

/// Typed handle for the `FrequencyBands` algorithm.
pub type FrequencyBands = TypedAlgorithm<specs::FrequencyBands>;

/// Typed handle for the `GFCC` algorithm.
pub type Gfcc = TypedAlgorithm<specs::Gfcc>;

/// Typed handle for the `HFC` algorithm.
pub type Hfc = TypedAlgorithm<specs::Hfc>;

/// Typed handle for the `LPC` algorithm.
pub type Lpc = TypedAlgorithm<specs::Lpc>;

/// Typed handle for the `MFCC` algorithm.
pub type Mfcc = TypedAlgorithm<specs::Mfcc>;

/// Typed handle for the `MaxMagFreq` algorithm.
pub type MaxMagFreq = TypedAlgorithm<specs::MaxMagFreq>;

/// Typed handle for the `MelBands` algorithm.
pub type MelBands = TypedAlgorithm<specs::MelBands>;

/// Typed handle for the `Panning` algorithm.
pub type Panning = TypedAlgorithm<specs::Panning>;

/// Typed handle for the `PowerSpectrum` algorithm.
pub type PowerSpectrum = TypedAlgorithm<specs::PowerSpectrum>;

/// Typed handle for the `RollOff` algorithm.
pub type RollOff = TypedAlgorithm<specs::RollOff>;

/// Typed handle for the `SpectralCentroidTime` algorithm.
pub type SpectralCentroidTime = TypedAlgorithm<specs::SpectralCentroidTime>;

/// Typed handle for the `SpectralComplexity` algorithm.
pub type SpectralComplexity = TypedAlgorithm<specs::SpectralComplexity>;

/// Typed handle for the `SpectralContrast` algorithm.
pub type SpectralContrast = TypedAlgorithm<specs::SpectralContrast>;

/// Typed handle for the `SpectralPeaks` algorithm.
pub type SpectralPeaks = TypedAlgorithm<specs::SpectralPeaks>;

/// Typed handle for the `SpectralWhitening` algorithm.
pub type SpectralWhitening = TypedAlgorithm<specs::SpectralWhitening>;

/// Typed handle for the `Spectrum` algorithm.
pub type Spectrum = TypedAlgorithm<specs::Spectrum>;

/// Typed handle for the `SpectrumToCent` algorithm.
pub type SpectrumToCent = TypedAlgorithm<specs::SpectrumToCent>;

/// Typed handle for the `StrongPeak` algorithm.
pub type StrongPeak = TypedAlgorithm<specs::StrongPeak>;

/// Typed handle for the `TriangularBands` algorithm.
pub type TriangularBands = TypedAlgorithm<specs::TriangularBands>;

/// Typed handle for the `TriangularBarkBands` algorithm.
pub type TriangularBarkBands = TypedAlgorithm<specs::TriangularBarkBands>;

/// Typed handle for the `Extractor` algorithm.
pub type Extractor = TypedAlgorithm<specs::Extractor>;

/// Typed handle for the `LowLevelSpectralEqloudExtractor` algorithm.
pub type LowLevelSpectralEqloudExtractor = TypedAlgorithm<specs::LowLevelSpectralEqloudExtractor>;

/// Typed handle for the `LowLevelSpectralExtractor` algorithm.
pub type LowLevelSpectralExtractor = TypedAlgorithm<specs::LowLevelSpectralExtractor>;

/// Typed handle for the `AfterMaxToBeforeMaxEnergyRatio` algorithm.
pub type AfterMaxToBeforeMaxEnergyRatio = TypedAlgorithm<specs::AfterMaxToBeforeMaxEnergyRatio>;

/// Typed handle for the `DerivativeSFX` algorithm.
pub type DerivativeSfx = TypedAlgorithm<specs::DerivativeSfx>;

/// Typed handle for the `Envelope` algorithm.
pub type Envelope = TypedAlgorithm<specs::Envelope>;

/// Typed handle for the `FlatnessSFX` algorithm.
pub type FlatnessSfx = TypedAlgorithm<specs::FlatnessSfx>;

/// Typed handle for the `LogAttackTime` algorithm.
pub type LogAttackTime = TypedAlgorithm<specs::LogAttackTime>;

/// Typed handle for the `MaxToTotal` algorithm.
pub type MaxToTotal = TypedAlgorithm<specs::MaxToTotal>;

/// Typed handle for the `MinToTotal` algorithm.
pub type MinToTotal = TypedAlgorithm<specs::MinToTotal>;

/// Typed handle for the `StrongDecay` algorithm.
pub type StrongDecay = TypedAlgorithm<specs::StrongDecay>;

/// Typed handle for the `TCToTotal` algorithm.
pub type TcToTotal = TypedAlgorithm<specs::TcToTotal>;

/// Typed handle for the `CartesianToPolar` algorithm.
pub type CartesianToPolar = TypedAlgorithm<specs::CartesianToPolar>;

/// Typed handle for the `Magnitude` algorithm.
pub type Magnitude = TypedAlgorithm<specs::Magnitude>;

/// Typed handle for the `PolarToCartesian` algorithm.
pub type PolarToCartesian = TypedAlgorithm<specs::PolarToCartesian>;

/// Typed handle for the `CentralMoments` algorithm.
pub type CentralMoments = TypedAlgorithm<specs::CentralMoments>;

/// Typed handle for the `Centroid` algorithm.
pub type Centroid = TypedAlgorithm<specs::Centroid>;

/// Typed handle for the `Crest` algorithm.
pub type Crest = TypedAlgorithm<specs::Crest>;

/// Typed handle for the `Decrease` algorithm.
pub type Decrease = TypedAlgorithm<specs::Decrease>;

/// Typed handle for the `DistributionShape` algorithm.
pub type DistributionShape = TypedAlgorithm<specs::DistributionShape>;

/// Typed handle for the `Energy` algorithm.
pub type Energy = TypedAlgorithm<specs::Energy>;

/// Typed handle for the `Entropy` algorithm.
pub type Entropy = TypedAlgorithm<specs::Entropy>;

/// Typed handle for the `Flatness` algorithm.
pub type Flatness = TypedAlgorithm<specs::Flatness>;

/// Typed handle for the `GeometricMean` algorithm.
pub type GeometricMean = TypedAlgorithm<specs::GeometricMean>;

/// Typed handle for the `InstantPower` algorithm.
pub type InstantPower = TypedAlgorithm<specs::InstantPower>;

/// Typed handle for the `Mean` algorithm.
pub type Mean = TypedAlgorithm<specs::Mean>;

/// Typed handle for the `Median` algorithm.
pub type Median = TypedAlgorithm<specs::Median>;

/// Typed handle for the `PoolAggregator` algorithm.
pub type PoolAggregator = TypedAlgorithm<specs::PoolAggregator>;

/// Typed handle for the `PowerMean` algorithm.
pub type PowerMean = TypedAlgorithm<specs::PowerMean>;

/// Typed handle for the `RMS` algorithm.
pub type Rms = TypedAlgorithm<specs::Rms>;

/// Typed handle for the `RawMoments` algorithm.
pub type RawMoments = TypedAlgorithm<specs::RawMoments>;

/// Typed handle for the `SingleGaussian` algorithm.
pub type SingleGaussian = TypedAlgorithm<specs::SingleGaussian>;

/// Typed handle for the `Variance` algorithm.
pub type Variance = TypedAlgorithm<specs::Variance>;

/// Typed handle for the `ChordsDescriptors` algorithm.
pub type ChordsDescriptors = TypedAlgorithm<specs::ChordsDescriptors>;

/// Typed handle for the `ChordsDetection` algorithm.
pub type ChordsDetection = TypedAlgorithm<specs::ChordsDetection>;

/// Typed handle for the `ChordsDetectionBeats` algorithm.
pub type ChordsDetectionBeats = TypedAlgorithm<specs::ChordsDetectionBeats>;

/// Typed handle for the `Chromagram` algorithm.
pub type Chromagram = TypedAlgorithm<specs::Chromagram>;

/// Typed handle for the `Dissonance` algorithm.
pub type Dissonance = TypedAlgorithm<specs::Dissonance>;

/// Typed handle for the `HPCP` algorithm.
pub type Hpcp = TypedAlgorithm<specs::Hpcp>;

/// Typed handle for the `HarmonicPeaks` algorithm.
pub type HarmonicPeaks = TypedAlgorithm<specs::HarmonicPeaks>;

/// Typed handle for the `HighResolutionFeatures` algorithm.
pub type HighResolutionFeatures = TypedAlgorithm<specs::HighResolutionFeatures>;

/// Typed handle for the `Inharmonicity` algorithm.
pub type Inharmonicity = TypedAlgorithm<specs::Inharmonicity>;

/// Typed handle for the `Key` algorithm.
pub type Key = TypedAlgorithm<specs::Key>;

/// Typed handle for the `KeyExtractor` algorithm.
pub type KeyExtractor = TypedAlgorithm<specs::KeyExtractor>;

/// Typed handle for the `OddToEvenHarmonicEnergyRatio` algorithm.
pub type OddToEvenHarmonicEnergyRatio = TypedAlgorithm<specs::OddToEvenHarmonicEnergyRatio>;

/// Typed handle for the `PitchSalience` algorithm.
pub type PitchSalience = TypedAlgorithm<specs::PitchSalience>;

/// Typed handle for the `SpectrumCQ` algorithm.
pub type SpectrumCq = TypedAlgorithm<specs::SpectrumCq>;

/// Typed handle for the `TonalExtractor` algorithm.
pub type TonalExtractor = TypedAlgorithm<specs::TonalExtractor>;

/// Typed handle for the `TonicIndianArtMusic` algorithm.
pub type TonicIndianArtMusic = TypedAlgorithm<specs::TonicIndianArtMusic>;

/// Typed handle for the `Tristimulus` algorithm.
pub type Tristimulus = TypedAlgorithm<specs::Tristimulus>;

/// Typed handle for the `TuningFrequency` algorithm.
pub type TuningFrequency = TypedAlgorithm<specs::TuningFrequency>;

/// Typed handle for the `TuningFrequencyExtractor` algorithm.
pub type TuningFrequencyExtractor = TypedAlgorithm<specs::TuningFrequencyExtractor>;

/// Typed handle for the `SBic` algorithm.
pub type SBic = TypedAlgorithm<specs::SBic>;
