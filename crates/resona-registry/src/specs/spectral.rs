//! Spectral feature algorithm specifications.

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// Specification for the `BFCC` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bfcc;

impl Specification for Bfcc {
    const ID: AlgorithmId = AlgorithmId::Bfcc;
}

/// Specification for the `BarkBands` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BarkBands;

impl Specification for BarkBands {
    const ID: AlgorithmId = AlgorithmId::BarkBands;
}

/// Specification for the `ERBBands` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErbBands;

impl Specification for ErbBands {
    const ID: AlgorithmId = AlgorithmId::ErbBands;
}

/// Specification for the `EnergyBand` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnergyBand;

impl Specification for EnergyBand {
    const ID: AlgorithmId = AlgorithmId::EnergyBand;
}

/// Specification for the `EnergyBandRatio` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnergyBandRatio;

impl Specification for EnergyBandRatio {
    const ID: AlgorithmId = AlgorithmId::EnergyBandRatio;
}

/// Specification for the `FlatnessDB` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatnessDb;

impl Specification for FlatnessDb {
    const ID: AlgorithmId = AlgorithmId::FlatnessDb;
}

/// Specification for the `Flux` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flux;

impl Specification for Flux {
    const ID: AlgorithmId = AlgorithmId::Flux;
}

/// Specification for the `FrequencyBands` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyBands;

impl Specification for FrequencyBands {
    const ID: AlgorithmId = AlgorithmId::FrequencyBands;
}

/// Specification for the `GFCC` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gfcc;

impl Specification for Gfcc {
    const ID: AlgorithmId = AlgorithmId::Gfcc;
}

/// Specification for the `HFC` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hfc;

impl Specification for Hfc {
    const ID: AlgorithmId = AlgorithmId::Hfc;
}

/// Specification for the `LPC` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lpc;

impl Specification for Lpc {
    const ID: AlgorithmId = AlgorithmId::Lpc;
}

/// Specification for the `MFCC` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mfcc;

impl Specification for Mfcc {
    const ID: AlgorithmId = AlgorithmId::Mfcc;
}

/// Specification for the `MaxMagFreq` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxMagFreq;

impl Specification for MaxMagFreq {
    const ID: AlgorithmId = AlgorithmId::MaxMagFreq;
}

/// Specification for the `MelBands` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MelBands;

impl Specification for MelBands {
    const ID: AlgorithmId = AlgorithmId::MelBands;
}

/// Specification for the `Panning` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Panning;

impl Specification for Panning {
    const ID: AlgorithmId = AlgorithmId::Panning;
}

/// Specification for the `PowerSpectrum` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerSpectrum;

impl Specification for PowerSpectrum {
    const ID: AlgorithmId = AlgorithmId::PowerSpectrum;
}

/// Specification for the `RollOff` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RollOff;

impl Specification for RollOff {
    const ID: AlgorithmId = AlgorithmId::RollOff;
}

/// Specification for the `SpectralCentroidTime` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpectralCentroidTime;

impl Specification for SpectralCentroidTime {
    const ID: AlgorithmId = AlgorithmId::SpectralCentroidTime;
}

/// Specification for the `SpectralComplexity` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpectralComplexity;

impl Specification for SpectralComplexity {
    const ID: AlgorithmId = AlgorithmId::SpectralComplexity;
}

/// Specification for the `SpectralContrast` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpectralContrast;

impl Specification for SpectralContrast {
    const ID: AlgorithmId = AlgorithmId::SpectralContrast;
}

/// Specification for the `SpectralPeaks` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpectralPeaks;

impl Specification for SpectralPeaks {
    const ID: AlgorithmId = AlgorithmId::SpectralPeaks;
}

/// Specification for the `SpectralWhitening` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpectralWhitening;

impl Specification for SpectralWhitening {
    const ID: AlgorithmId = AlgorithmId::SpectralWhitening;
}

/// Specification for the `Spectrum` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spectrum;

impl Specification for Spectrum {
    const ID: AlgorithmId = AlgorithmId::Spectrum;
}

/// Specification for the `SpectrumToCent` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpectrumToCent;

impl Specification for SpectrumToCent {
    const ID: AlgorithmId = AlgorithmId::SpectrumToCent;
}

/// Specification for the `StrongPeak` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrongPeak;

impl Specification for StrongPeak {
    const ID: AlgorithmId = AlgorithmId::StrongPeak;
}

/// Specification for the `TriangularBands` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriangularBands;

impl Specification for TriangularBands {
    const ID: AlgorithmId = AlgorithmId::TriangularBands;
}

/// Specification for the `TriangularBarkBands` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriangularBarkBands;

impl Specification for TriangularBarkBands {
    const ID: AlgorithmId = AlgorithmId::TriangularBarkBands;
}
