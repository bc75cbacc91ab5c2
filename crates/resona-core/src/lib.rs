//! Resona Core - engine-facing abstractions for the algorithm registry
//!
//! This crate defines the seam between the registry and the external
//! signal-processing engine that actually runs analysis algorithms:
//!
//! - [`EngineHandle`] - opaque runtime handle to an instantiated algorithm
//! - [`AlgorithmFactory`] - the engine's factory capability, keyed by the
//!   algorithm's canonical textual name
//! - [`EngineError`] - failures crossing the engine boundary
//!
//! The engine itself (parameter binding, buffer I/O, the numeric routines)
//! lives behind these traits and is not part of this workspace. Everything
//! here is deliberately thin: the registry layered on top only needs enough
//! surface to instantiate algorithms and to verify which algorithm a handle
//! was instantiated for.

mod engine;
mod error;

pub use engine::{AlgorithmFactory, EngineHandle};
pub use error::EngineError;
