//! Algorithm identifier catalog and type registry for resona.
//!
//! This crate maps the closed set of algorithm identifiers exposed by the
//! analysis engine onto strongly-typed specification types, and recovers
//! fully-typed algorithm handles from type-erased ones. It is a pure lookup
//! layer: no algorithm is implemented here, no parameter is validated, and
//! no instance is owned or cached.
//!
//! # Features
//!
//! - **Closed catalog**: [`AlgorithmId`] enumerates every algorithm; the set
//!   is fixed at build time and exposed for enumeration and validation
//! - **Total dispatch**: [`AlgorithmId::with_spec`] resolves an identifier to
//!   its specification type through a compiler-checked exhaustive match
//! - **Checked downcast**: [`TypedAlgorithm::downcast`] verifies the handle's
//!   originating identifier before committing to the static type
//! - **Flat shortcuts**: every specification type is reachable from
//!   [`specs`] and every typed handle from [`typed`] without knowing the
//!   algorithm's category
//!
//! # Example
//!
//! ```rust
//! use resona_core::{AlgorithmFactory, EngineError, EngineHandle};
//! use resona_registry::{AlgorithmId, GenericAlgorithm, Specification, specs};
//!
//! // A stand-in for the external engine's factory.
//! struct Engine;
//!
//! #[derive(Debug)]
//! struct Handle(String);
//!
//! impl EngineHandle for Handle {
//!     fn algorithm_name(&self) -> &str {
//!         &self.0
//!     }
//! }
//!
//! impl AlgorithmFactory for Engine {
//!     fn instantiate(&self, name: &str) -> Result<Box<dyn EngineHandle>, EngineError> {
//!         Ok(Box::new(Handle(name.to_string())))
//!     }
//! }
//!
//! // Validate a textual identifier at the boundary, then work typed.
//! let id = AlgorithmId::from_name("MFCC").expect("catalog member");
//! let generic = GenericAlgorithm::instantiate(&Engine, id)?;
//! let mfcc = specs::Mfcc::downcast(generic);
//! assert_eq!(mfcc.name(), "MFCC");
//! # Ok::<(), EngineError>(())
//! ```
//!
//! # Serde support
//!
//! With the optional `serde` feature, [`AlgorithmId`] serializes as its
//! canonical name string and deserialization rejects unknown names:
//!
//! ```toml
//! [dependencies]
//! resona-registry = { version = "0.1", features = ["serde"] }
//! ```

pub mod algorithm;
pub mod dispatch;
pub mod id;
pub mod spec;
pub mod specs;
pub mod typed;

pub use algorithm::{GenericAlgorithm, TypedAlgorithm};
pub use id::{AlgorithmId, Category, ParseAlgorithmIdError};
pub use spec::{SpecDescriptor, SpecVisitor, Specification};
