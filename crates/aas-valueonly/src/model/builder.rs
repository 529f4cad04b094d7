//! Builder API for ergonomic element tree construction.
//!
//! # Example
//!
//! ```rust
//! use aas_valueonly::model::builder::CollectionBuilder;
//! use aas_valueonly::model::{ElementKind, Range};
//!
//! let measurements = CollectionBuilder::new("Measurements")
//!     .property("Temp", "21.5")
//!     .element(Range::new("Tolerance", "-0.5", "0.5"))
//!     .build();
//!
//! assert_eq!(measurements.kind(), ElementKind::Collection);
//! assert_eq!(measurements.children().map(<[_]>::len), Some(2));
//! ```

use crate::model::{
    Entity, EntityType, Property, SubmodelElement, SubmodelElementCollection, SubmodelElementList,
};

/// Builder for a named collection of elements.
#[derive(Debug, Clone)]
pub struct CollectionBuilder {
    collection: SubmodelElementCollection,
}

impl CollectionBuilder {
    /// Creates a builder for a collection with the given idShort.
    pub fn new(id_short: impl Into<String>) -> Self {
        CollectionBuilder {
            collection: SubmodelElementCollection {
                id_short: Some(id_short.into()),
                value: Vec::new(),
            },
        }
    }

    /// Adds a property child.
    pub fn property(self, id_short: impl Into<String>, value: impl Into<String>) -> Self {
        self.element(Property::new(id_short, value))
    }

    /// Adds an arbitrary child element.
    pub fn element(mut self, element: impl Into<SubmodelElement>) -> Self {
        self.collection.value.push(element.into());
        self
    }

    /// Finishes the collection.
    pub fn build(self) -> SubmodelElement {
        SubmodelElement::Collection(self.collection)
    }
}

/// Builder for a positional list of elements.
#[derive(Debug, Clone)]
pub struct ListBuilder {
    list: SubmodelElementList,
}

impl ListBuilder {
    /// Creates a builder for a list with the given idShort.
    pub fn new(id_short: impl Into<String>) -> Self {
        ListBuilder {
            list: SubmodelElementList {
                id_short: Some(id_short.into()),
                value: Vec::new(),
            },
        }
    }

    /// Appends an item; list members keep their insertion order.
    pub fn item(mut self, element: impl Into<SubmodelElement>) -> Self {
        self.list.value.push(element.into());
        self
    }

    /// Finishes the list.
    pub fn build(self) -> SubmodelElement {
        SubmodelElement::List(self.list)
    }
}

/// Builder for an entity element.
#[derive(Debug, Clone)]
pub struct EntityBuilder {
    entity: Entity,
}

impl EntityBuilder {
    /// Creates a builder for an entity with the given idShort and type.
    pub fn new(id_short: impl Into<String>, entity_type: EntityType) -> Self {
        EntityBuilder {
            entity: Entity {
                id_short: Some(id_short.into()),
                entity_type,
                global_asset_id: None,
                statements: Vec::new(),
            },
        }
    }

    /// Sets the global asset id.
    pub fn global_asset_id(mut self, id: impl Into<String>) -> Self {
        self.entity.global_asset_id = Some(id.into());
        self
    }

    /// Adds a statement element.
    pub fn statement(mut self, element: impl Into<SubmodelElement>) -> Self {
        self.entity.statements.push(element.into());
        self
    }

    /// Finishes the entity.
    pub fn build(self) -> SubmodelElement {
        SubmodelElement::Entity(self.entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;

    #[test]
    fn test_collection_builder_keeps_order() {
        let collection = CollectionBuilder::new("C")
            .property("A", "1")
            .property("B", "2")
            .build();

        let names: Vec<_> = collection
            .children()
            .unwrap()
            .iter()
            .map(|e| e.id_short().unwrap().to_string())
            .collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_entity_builder() {
        let entity = EntityBuilder::new("Motor", EntityType::SelfManagedEntity)
            .global_asset_id("urn:example:motor-1")
            .statement(Property::new("MaxRotations", "5000"))
            .build();

        assert_eq!(entity.kind(), ElementKind::Entity);
        let SubmodelElement::Entity(inner) = entity else {
            panic!("expected entity");
        };
        assert_eq!(inner.global_asset_id.as_deref(), Some("urn:example:motor-1"));
        assert_eq!(inner.statements.len(), 1);
    }
}
