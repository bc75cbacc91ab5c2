//! Feature-space transformation algorithm specifications.

use crate::id::AlgorithmId;
use crate::spec::Specification;

/// Specification for the `PCA` algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pca;

impl Specification for Pca {
    const ID: AlgorithmId = AlgorithmId::Pca;
}
