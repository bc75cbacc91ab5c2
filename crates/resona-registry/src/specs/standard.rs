//! General-purpose signal processing algorithm specifications.

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// Specification for the `AutoCorrelation` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoCorrelation;

impl Specification for AutoCorrelation {
    const ID: AlgorithmId = AlgorithmId::AutoCorrelation;
}

/// Specification for the `BPF` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bpf;

impl Specification for Bpf {
    const ID: AlgorithmId = AlgorithmId::Bpf;
}

/// Specification for the `BinaryOperator` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryOperator;

impl Specification for BinaryOperator {
    const ID: AlgorithmId = AlgorithmId::BinaryOperator;
}

/// Specification for the `BinaryOperatorStream` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryOperatorStream;

impl Specification for BinaryOperatorStream {
    const ID: AlgorithmId = AlgorithmId::BinaryOperatorStream;
}

/// Specification for the `Clipper` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clipper;

impl Specification for Clipper {
    const ID: AlgorithmId = AlgorithmId::Clipper;
}

/// Specification for the `ConstantQ` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantQ;

impl Specification for ConstantQ {
    const ID: AlgorithmId = AlgorithmId::ConstantQ;
}

/// Specification for the `CrossCorrelation` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrossCorrelation;

impl Specification for CrossCorrelation {
    const ID: AlgorithmId = AlgorithmId::CrossCorrelation;
}

/// Specification for the `CubicSpline` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubicSpline;

impl Specification for CubicSpline {
    const ID: AlgorithmId = AlgorithmId::CubicSpline;
}

/// Specification for the `DCT` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dct;

impl Specification for Dct {
    const ID: AlgorithmId = AlgorithmId::Dct;
}

/// Specification for the `Derivative` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Derivative;

impl Specification for Derivative {
    const ID: AlgorithmId = AlgorithmId::Derivative;
}

/// Specification for the `FFT` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fft;

impl Specification for Fft {
    const ID: AlgorithmId = AlgorithmId::Fft;
}

/// Specification for the `FFTC` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fftc;

impl Specification for Fftc {
    const ID: AlgorithmId = AlgorithmId::Fftc;
}

/// Specification for the `FrameCutter` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCutter;

impl Specification for FrameCutter {
    const ID: AlgorithmId = AlgorithmId::FrameCutter;
}

/// Specification for the `FrameToReal` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameToReal;

impl Specification for FrameToReal {
    const ID: AlgorithmId = AlgorithmId::FrameToReal;
}

/// Specification for the `IDCT` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Idct;

impl Specification for Idct {
    const ID: AlgorithmId = AlgorithmId::Idct;
}

/// Specification for the `IFFT` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ifft;

impl Specification for Ifft {
    const ID: AlgorithmId = AlgorithmId::Ifft;
}

/// Specification for the `IFFTC` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ifftc;

impl Specification for Ifftc {
    const ID: AlgorithmId = AlgorithmId::Ifftc;
}

/// Specification for the `MonoMixer` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonoMixer;

impl Specification for MonoMixer {
    const ID: AlgorithmId = AlgorithmId::MonoMixer;
}

/// Specification for the `Multiplexer` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Multiplexer;

impl Specification for Multiplexer {
    const ID: AlgorithmId = AlgorithmId::Multiplexer;
}

/// Specification for the `NoiseAdder` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoiseAdder;

impl Specification for NoiseAdder {
    const ID: AlgorithmId = AlgorithmId::NoiseAdder;
}

/// Specification for the `OverlapAdd` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlapAdd;

impl Specification for OverlapAdd {
    const ID: AlgorithmId = AlgorithmId::OverlapAdd;
}

/// Specification for the `PeakDetection` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeakDetection;

impl Specification for PeakDetection {
    const ID: AlgorithmId = AlgorithmId::PeakDetection;
}

/// Specification for the `Scale` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scale;

impl Specification for Scale {
    const ID: AlgorithmId = AlgorithmId::Scale;
}

/// Specification for the `Slicer` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slicer;

impl Specification for Slicer {
    const ID: AlgorithmId = AlgorithmId::Slicer;
}

/// Specification for the `Spline` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spline;

impl Specification for Spline {
    const ID: AlgorithmId = AlgorithmId::Spline;
}

/// Specification for the `StereoDemuxer` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StereoDemuxer;

impl Specification for StereoDemuxer {
    const ID: AlgorithmId = AlgorithmId::StereoDemuxer;
}

/// Specification for the `StereoMuxer` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StereoMuxer;

impl Specification for StereoMuxer {
    const ID: AlgorithmId = AlgorithmId::StereoMuxer;
}

/// Specification for the `StereoTrimmer` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StereoTrimmer;

impl Specification for StereoTrimmer {
    const ID: AlgorithmId = AlgorithmId::StereoTrimmer;
}

/// Specification for the `Trimmer` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trimmer;

impl Specification for Trimmer {
    const ID: AlgorithmId = AlgorithmId::Trimmer;
}

/// Specification for the `UnaryOperator` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnaryOperator;

impl Specification for UnaryOperator {
    const ID: AlgorithmId = AlgorithmId::UnaryOperator;
}

/// Specification for the `UnaryOperatorStream` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnaryOperatorStream;

impl Specification for UnaryOperatorStream {
    const ID: AlgorithmId = AlgorithmId::UnaryOperatorStream;
}

/// Specification for the `WarpedAutoCorrelation` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarpedAutoCorrelation;

impl Specification for WarpedAutoCorrelation {
    const ID: AlgorithmId = AlgorithmId::WarpedAutoCorrelation;
}

/// Specification for the `Windowing` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Windowing;

impl Specification for Windowing {
    const ID: AlgorithmId = AlgorithmId::Windowing;
}

/// Specification for the `ZeroCrossingRate` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroCrossingRate;

impl Specification for ZeroCrossingRate {
    const ID: AlgorithmId = AlgorithmId::ZeroCrossingRate;
}
