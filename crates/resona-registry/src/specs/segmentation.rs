//! Audio segmentation algorithm specifications.

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// Specification for the `SBic` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SBic;

impl Specification for SBic {
    const ID: AlgorithmId = AlgorithmId::SBic;
}
