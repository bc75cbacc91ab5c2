//! Specification types for every algorithm in the catalog.
//!
//! One zero-sized type per algorithm, grouped into one module per category.
//! The category modules exist purely for navigation; every type is also
//! re-exported flat from this module so call sites do not need to know which
//! category an algorithm is documented under. The glob re-exports double as a
//! collision check: two categories defining the same specification name would
//! fail to compile.

pub mod rhythm;
pub mod pitch;
pub mod synthesis;
pub mod io;
pub mod duration_silence;
pub mod loudness_dynamics;
pub mod filters;
pub mod standard;
pub mod transformations;
pub mod spectral;
pub mod extractors;
pub mod envelope_sfx;
pub mod math;
pub mod statistics;
pub mod tonal;
pub mod segmentation;

pub use rhythm::*;
pub use pitch::*;
pub use synthesis::*;
pub use io::*;
pub use duration_silence::*;
pub use loudness_dynamics::*;
pub use filters::*;
pub use standard::*;
pub use transformations::*;
pub use spectral::*;
pub use extractors::*;
pub use envelope_sfx::*;
pub use math::*;
pub use statistics::*;
pub use tonal::*;
pub use segmentation::*;
