//! Composite feature extractor algorithm specifications.

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// Specification for the `Extractor` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extractor;

impl Specification for Extractor {
    const ID: AlgorithmId = AlgorithmId::Extractor;
}

/// Specification for the `LowLevelSpectralEqloudExtractor` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowLevelSpectralEqloudExtractor;

impl Specification for LowLevelSpectralEqloudExtractor {
    const ID: AlgorithmId = AlgorithmId::LowLevelSpectralEqloudExtractor;
}

/// Specification for the `LowLevelSpectralExtractor` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowLevelSpectralExtractor;

impl Specification for LowLevelSpectralExtractor {
    const ID: AlgorithmId = AlgorithmId::LowLevelSpectralExtractor;
}
