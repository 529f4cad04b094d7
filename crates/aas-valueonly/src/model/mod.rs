//! Data model types for submodel element trees.
//!
//! This module contains the typed tree the codec operates on:
//! - Elements (the closed kind set with per-kind payloads)
//! - References (typed key chains)
//! - Builders (ergonomic construction)

pub mod builder;
pub mod element;
pub mod reference;

pub use builder::{CollectionBuilder, EntityBuilder, ListBuilder};
pub use element::{
    AnnotatedRelationshipElement, BasicEventElement, Blob, Capability, ElementKind, Entity,
    EntityType, File, LangString, MultiLanguageProperty, Operation, Property, Range,
    ReferenceElement, RelationshipElement, SubmodelElement, SubmodelElementCollection,
    SubmodelElementList,
};
pub use reference::{Key, KeyType, Reference, ReferenceType};
