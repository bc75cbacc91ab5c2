//! Audio input/output algorithm specifications.

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// Specification for the `AudioOnsetsMarker` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioOnsetsMarker;

impl Specification for AudioOnsetsMarker {
    const ID: AlgorithmId = AlgorithmId::AudioOnsetsMarker;
}
