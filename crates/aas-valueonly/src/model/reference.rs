//! Reference values used by reference, relationship and event elements.

/// Discriminates references into the model from references out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceType {
    /// Reference to an element outside the model (e.g. an IRI or IRDI).
    ExternalReference,
    /// Reference to an element within the model, key by key.
    ModelReference,
}

impl ReferenceType {
    /// Returns the literal used in the value-only representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceType::ExternalReference => "ExternalReference",
            ReferenceType::ModelReference => "ModelReference",
        }
    }

    /// Parses a value-only literal.
    pub fn parse(s: &str) -> Option<ReferenceType> {
        match s {
            "ExternalReference" => Some(ReferenceType::ExternalReference),
            "ModelReference" => Some(ReferenceType::ModelReference),
            _ => None,
        }
    }
}

/// The kind of model element a reference key denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    AssetAdministrationShell,
    ConceptDescription,
    GlobalReference,
    FragmentReference,
    Submodel,
    SubmodelElement,
    SubmodelElementCollection,
    SubmodelElementList,
    Property,
    MultiLanguageProperty,
    Range,
    Blob,
    File,
    ReferenceElement,
    RelationshipElement,
    AnnotatedRelationshipElement,
    Entity,
    BasicEventElement,
    Operation,
    Capability,
}

impl KeyType {
    /// Returns the literal used in the value-only representation.
    pub fn as_str(self) -> &'static str {
        match self {
            KeyType::AssetAdministrationShell => "AssetAdministrationShell",
            KeyType::ConceptDescription => "ConceptDescription",
            KeyType::GlobalReference => "GlobalReference",
            KeyType::FragmentReference => "FragmentReference",
            KeyType::Submodel => "Submodel",
            KeyType::SubmodelElement => "SubmodelElement",
            KeyType::SubmodelElementCollection => "SubmodelElementCollection",
            KeyType::SubmodelElementList => "SubmodelElementList",
            KeyType::Property => "Property",
            KeyType::MultiLanguageProperty => "MultiLanguageProperty",
            KeyType::Range => "Range",
            KeyType::Blob => "Blob",
            KeyType::File => "File",
            KeyType::ReferenceElement => "ReferenceElement",
            KeyType::RelationshipElement => "RelationshipElement",
            KeyType::AnnotatedRelationshipElement => "AnnotatedRelationshipElement",
            KeyType::Entity => "Entity",
            KeyType::BasicEventElement => "BasicEventElement",
            KeyType::Operation => "Operation",
            KeyType::Capability => "Capability",
        }
    }

    /// Parses a value-only literal.
    pub fn parse(s: &str) -> Option<KeyType> {
        match s {
            "AssetAdministrationShell" => Some(KeyType::AssetAdministrationShell),
            "ConceptDescription" => Some(KeyType::ConceptDescription),
            "GlobalReference" => Some(KeyType::GlobalReference),
            "FragmentReference" => Some(KeyType::FragmentReference),
            "Submodel" => Some(KeyType::Submodel),
            "SubmodelElement" => Some(KeyType::SubmodelElement),
            "SubmodelElementCollection" => Some(KeyType::SubmodelElementCollection),
            "SubmodelElementList" => Some(KeyType::SubmodelElementList),
            "Property" => Some(KeyType::Property),
            "MultiLanguageProperty" => Some(KeyType::MultiLanguageProperty),
            "Range" => Some(KeyType::Range),
            "Blob" => Some(KeyType::Blob),
            "File" => Some(KeyType::File),
            "ReferenceElement" => Some(KeyType::ReferenceElement),
            "RelationshipElement" => Some(KeyType::RelationshipElement),
            "AnnotatedRelationshipElement" => Some(KeyType::AnnotatedRelationshipElement),
            "Entity" => Some(KeyType::Entity),
            "BasicEventElement" => Some(KeyType::BasicEventElement),
            "Operation" => Some(KeyType::Operation),
            "Capability" => Some(KeyType::Capability),
            _ => None,
        }
    }
}

/// One step of a reference chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    pub key_type: KeyType,
    pub value: String,
}

impl Key {
    /// Creates a key of the given type.
    pub fn new(key_type: KeyType, value: impl Into<String>) -> Self {
        Key {
            key_type,
            value: value.into(),
        }
    }
}

/// A typed chain of keys addressing a model element or an external resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub reference_type: ReferenceType,
    pub keys: Vec<Key>,
}

impl Reference {
    /// Creates an external reference with a single global-reference key.
    pub fn external(value: impl Into<String>) -> Self {
        Reference {
            reference_type: ReferenceType::ExternalReference,
            keys: vec![Key::new(KeyType::GlobalReference, value)],
        }
    }

    /// Creates a model reference from a key chain.
    pub fn model(keys: Vec<Key>) -> Self {
        Reference {
            reference_type: ReferenceType::ModelReference,
            keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_type_literals_roundtrip() {
        for rt in [ReferenceType::ExternalReference, ReferenceType::ModelReference] {
            assert_eq!(ReferenceType::parse(rt.as_str()), Some(rt));
        }
        assert_eq!(ReferenceType::parse("GlobalReference"), None);
    }

    #[test]
    fn test_key_type_literals_roundtrip() {
        for kt in [
            KeyType::GlobalReference,
            KeyType::Submodel,
            KeyType::Property,
            KeyType::Capability,
        ] {
            assert_eq!(KeyType::parse(kt.as_str()), Some(kt));
        }
        assert_eq!(KeyType::parse("NoSuchKeyType"), None);
    }

    #[test]
    fn test_external_reference_shape() {
        let reference = Reference::external("urn:example:asset");
        assert_eq!(reference.reference_type, ReferenceType::ExternalReference);
        assert_eq!(reference.keys.len(), 1);
        assert_eq!(reference.keys[0].key_type, KeyType::GlobalReference);
        assert_eq!(reference.keys[0].value, "urn:example:asset");
    }
}
