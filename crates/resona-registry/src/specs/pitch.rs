//! Pitch estimation and melody analysis algorithm specifications.

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// Specification for the `MultiPitchKlapuri` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiPitchKlapuri;

impl Specification for MultiPitchKlapuri {
    const ID: AlgorithmId = AlgorithmId::MultiPitchKlapuri;
}

/// Specification for the `MultiPitchMelodia` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiPitchMelodia;

impl Specification for MultiPitchMelodia {
    const ID: AlgorithmId = AlgorithmId::MultiPitchMelodia;
}

/// Specification for the `PitchContourSegmentation` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PitchContourSegmentation;

impl Specification for PitchContourSegmentation {
    const ID: AlgorithmId = AlgorithmId::PitchContourSegmentation;
}

/// Specification for the `PitchContours` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PitchContours;

impl Specification for PitchContours {
    const ID: AlgorithmId = AlgorithmId::PitchContours;
}

/// Specification for the `PitchContoursMelody` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PitchContoursMelody;

impl Specification for PitchContoursMelody {
    const ID: AlgorithmId = AlgorithmId::PitchContoursMelody;
}

/// Specification for the `PitchContoursMonoMelody` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PitchContoursMonoMelody;

impl Specification for PitchContoursMonoMelody {
    const ID: AlgorithmId = AlgorithmId::PitchContoursMonoMelody;
}

/// Specification for the `PitchContoursMultiMelody` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PitchContoursMultiMelody;

impl Specification for PitchContoursMultiMelody {
    const ID: AlgorithmId = AlgorithmId::PitchContoursMultiMelody;
}

/// Specification for the `PitchFilter` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PitchFilter;

impl Specification for PitchFilter {
    const ID: AlgorithmId = AlgorithmId::PitchFilter;
}

/// Specification for the `PitchMelodia` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PitchMelodia;

impl Specification for PitchMelodia {
    const ID: AlgorithmId = AlgorithmId::PitchMelodia;
}

/// Specification for the `PitchSalienceFunction` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PitchSalienceFunction;

impl Specification for PitchSalienceFunction {
    const ID: AlgorithmId = AlgorithmId::PitchSalienceFunction;
}

/// Specification for the `PitchSalienceFunctionPeaks` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PitchSalienceFunctionPeaks;

impl Specification for PitchSalienceFunctionPeaks {
    const ID: AlgorithmId = AlgorithmId::PitchSalienceFunctionPeaks;
}

/// Specification for the `PitchYin` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PitchYin;

impl Specification for PitchYin {
    const ID: AlgorithmId = AlgorithmId::PitchYin;
}

/// Specification for the `PitchYinFFT` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PitchYinFft;

impl Specification for PitchYinFft {
    const ID: AlgorithmId = AlgorithmId::PitchYinFft;
}

/// Specification for the `PredominantPitchMelodia` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredominantPitchMelodia;

impl Specification for PredominantPitchMelodia {
    const ID: AlgorithmId = AlgorithmId::PredominantPitchMelodia;
}

/// Specification for the `Vibrato` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vibrato;

impl Specification for Vibrato {
    const ID: AlgorithmId = AlgorithmId::Vibrato;
}
