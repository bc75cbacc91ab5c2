//! Sinusoidal and stochastic model analysis/synthesis algorithm specifications.

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// Specification for the `HarmonicMask` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarmonicMask;

impl Specification for HarmonicMask {
    const ID: AlgorithmId = AlgorithmId::HarmonicMask;
}

/// Specification for the `HarmonicModelAnal` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarmonicModelAnal;

impl Specification for HarmonicModelAnal {
    const ID: AlgorithmId = AlgorithmId::HarmonicModelAnal;
}

/// Specification for the `HprModelAnal` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HprModelAnal;

impl Specification for HprModelAnal {
    const ID: AlgorithmId = AlgorithmId::HprModelAnal;
}

/// Specification for the `HpsModelAnal` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HpsModelAnal;

impl Specification for HpsModelAnal {
    const ID: AlgorithmId = AlgorithmId::HpsModelAnal;
}

/// Specification for the `ResampleFFT` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResampleFft;

impl Specification for ResampleFft {
    const ID: AlgorithmId = AlgorithmId::ResampleFft;
}

/// Specification for the `SineModelAnal` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SineModelAnal;

impl Specification for SineModelAnal {
    const ID: AlgorithmId = AlgorithmId::SineModelAnal;
}

/// Specification for the `SineModelSynth` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SineModelSynth;

impl Specification for SineModelSynth {
    const ID: AlgorithmId = AlgorithmId::SineModelSynth;
}

/// Specification for the `SineSubtraction` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SineSubtraction;

impl Specification for SineSubtraction {
    const ID: AlgorithmId = AlgorithmId::SineSubtraction;
}

/// Specification for the `SprModelAnal` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SprModelAnal;

impl Specification for SprModelAnal {
    const ID: AlgorithmId = AlgorithmId::SprModelAnal;
}

/// Specification for the `SprModelSynth` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SprModelSynth;

impl Specification for SprModelSynth {
    const ID: AlgorithmId = AlgorithmId::SprModelSynth;
}

/// Specification for the `SpsModelAnal` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpsModelAnal;

impl Specification for SpsModelAnal {
    const ID: AlgorithmId = AlgorithmId::SpsModelAnal;
}

/// Specification for the `SpsModelSynth` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpsModelSynth;

impl Specification for SpsModelSynth {
    const ID: AlgorithmId = AlgorithmId::SpsModelSynth;
}

/// Specification for the `StochasticModelAnal` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StochasticModelAnal;

impl Specification for StochasticModelAnal {
    const ID: AlgorithmId = AlgorithmId::StochasticModelAnal;
}

/// Specification for the `StochasticModelSynth` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StochasticModelSynth;

impl Specification for StochasticModelSynth {
    const ID: AlgorithmId = AlgorithmId::StochasticModelSynth;
}
