//! Value-only JSON codec for AAS submodel element trees.
//!
//! The value-only representation is the compact JSON encoding of a submodel
//! element tree that keeps only values, keyed by idShort, and omits all
//! metadata. This crate provides both directions of the mapping:
//!
//! - [`serialize`] walks a typed element tree and produces the value-only
//!   document, bottom-up.
//! - [`deserialize`] applies a value-only document onto an existing typed
//!   tree, mutating value slots in place. The format carries no type
//!   information, so the pre-existing tree supplies the kind of every value;
//!   topology is never restructured.
//!
//! # Quick Start
//!
//! ```rust
//! use aas_valueonly::model::CollectionBuilder;
//! use aas_valueonly::{deserialize, serialize};
//! use serde_json::json;
//!
//! let mut measurements = CollectionBuilder::new("Measurements")
//!     .property("Temp", "21.5")
//!     .property("Pressure", "1013")
//!     .build();
//!
//! let value_only = serialize(&measurements).unwrap();
//! assert_eq!(
//!     value_only,
//!     json!({"Measurements": {"Temp": "21.5", "Pressure": "1013"}})
//! );
//!
//! // Feeding a document back refines values in place.
//! deserialize(
//!     &mut measurements,
//!     &json!({"Measurements": {"Temp": "22.0", "Pressure": "1013"}}),
//! )
//! .unwrap();
//! ```
//!
//! # Modules
//!
//! - [`model`]: The typed element tree (elements, references, builders)
//! - [`codec`]: Serialization and in-place update
//! - [`error`]: Error types
//!
//! # Format rules
//!
//! Every element serialized in a named context is wrapped as a single-field
//! object keyed by its idShort; that key is the format's only addressing
//! mechanism. Named collections merge their children's wrappers into one
//! object (duplicate idShorts are rejected), positional lists emit bare
//! values in child order. Kinds without a value-only representation
//! (operations, capabilities) are skipped on write; on update they are
//! rejected by default, configurable via
//! [`codec::DeserializeOptions`].
//!
//! Errors carry the dot-joined id-short path at which the violation was
//! detected, e.g. `Measurements.Temp`.

pub mod codec;
pub mod error;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{
    deserialize, deserialize_with, serialize, DeserializeOptions, IdShortPath,
    UnrepresentablePolicy,
};
pub use error::ValueOnlyError;
pub use model::{ElementKind, SubmodelElement};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
