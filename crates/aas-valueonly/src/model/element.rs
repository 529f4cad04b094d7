//! Submodel element tree model.
//!
//! A deliberately minimal rendition of the AAS submodel element hierarchy:
//! each element carries only its idShort, its kind tag and the per-kind value
//! payload the value-only codec reads and writes. Metadata attributes
//! (semantic ids, qualifiers, descriptions) are out of scope.

use crate::model::Reference;

/// Kind tag for a submodel element.
///
/// The variant set is closed; dispatch in the codec is an exhaustive match,
/// so adding a kind here is a compile-time checked change rather than a
/// silent fall-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Property,
    MultiLanguageProperty,
    Range,
    Blob,
    File,
    ReferenceElement,
    RelationshipElement,
    AnnotatedRelationshipElement,
    Collection,
    List,
    Entity,
    BasicEventElement,
    Operation,
    Capability,
}

impl ElementKind {
    /// Returns whether elements of this kind appear in the value-only format.
    ///
    /// Operations and capabilities carry no value; they are skipped on
    /// serialization and rejected (or skipped, per policy) on update.
    pub fn is_value_representable(self) -> bool {
        !matches!(self, ElementKind::Operation | ElementKind::Capability)
    }

    /// Returns the kind name for diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Property => "Property",
            ElementKind::MultiLanguageProperty => "MultiLanguageProperty",
            ElementKind::Range => "Range",
            ElementKind::Blob => "Blob",
            ElementKind::File => "File",
            ElementKind::ReferenceElement => "ReferenceElement",
            ElementKind::RelationshipElement => "RelationshipElement",
            ElementKind::AnnotatedRelationshipElement => "AnnotatedRelationshipElement",
            ElementKind::Collection => "SubmodelElementCollection",
            ElementKind::List => "SubmodelElementList",
            ElementKind::Entity => "Entity",
            ElementKind::BasicEventElement => "BasicEventElement",
            ElementKind::Operation => "Operation",
            ElementKind::Capability => "Capability",
        }
    }
}

/// A string in a specific language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LangString {
    /// Language tag (e.g. "en", "de").
    pub language: String,
    pub text: String,
}

impl LangString {
    /// Creates a language-tagged string.
    pub fn new(language: impl Into<String>, text: impl Into<String>) -> Self {
        LangString {
            language: language.into(),
            text: text.into(),
        }
    }
}

/// Whether an entity is managed together with or independently of its shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    CoManagedEntity,
    SelfManagedEntity,
}

impl EntityType {
    /// Returns the literal used in the value-only representation.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::CoManagedEntity => "CoManagedEntity",
            EntityType::SelfManagedEntity => "SelfManagedEntity",
        }
    }

    /// Parses a value-only literal.
    pub fn parse(s: &str) -> Option<EntityType> {
        match s {
            "CoManagedEntity" => Some(EntityType::CoManagedEntity),
            "SelfManagedEntity" => Some(EntityType::SelfManagedEntity),
            _ => None,
        }
    }
}

/// A single-valued data element; the value is carried as text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Property {
    pub id_short: Option<String>,
    pub value: String,
}

impl Property {
    /// Creates a named property with the given value.
    pub fn new(id_short: impl Into<String>, value: impl Into<String>) -> Self {
        Property {
            id_short: Some(id_short.into()),
            value: value.into(),
        }
    }
}

/// A data element holding one string per language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiLanguageProperty {
    pub id_short: Option<String>,
    pub value: Vec<LangString>,
}

impl MultiLanguageProperty {
    /// Creates a named multi-language property.
    pub fn new(id_short: impl Into<String>, value: Vec<LangString>) -> Self {
        MultiLanguageProperty {
            id_short: Some(id_short.into()),
            value,
        }
    }
}

/// A data element spanning an interval; bounds are carried as text and either
/// side may be open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Range {
    pub id_short: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
}

impl Range {
    /// Creates a named range with both bounds.
    pub fn new(
        id_short: impl Into<String>,
        min: impl Into<String>,
        max: impl Into<String>,
    ) -> Self {
        Range {
            id_short: Some(id_short.into()),
            min: Some(min.into()),
            max: Some(max.into()),
        }
    }
}

/// A data element holding raw bytes plus their content type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blob {
    pub id_short: Option<String>,
    pub content_type: String,
    pub value: Option<Vec<u8>>,
}

impl Blob {
    /// Creates a named blob with content.
    pub fn new(
        id_short: impl Into<String>,
        content_type: impl Into<String>,
        value: Vec<u8>,
    ) -> Self {
        Blob {
            id_short: Some(id_short.into()),
            content_type: content_type.into(),
            value: Some(value),
        }
    }
}

/// A data element pointing at a file by path or URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct File {
    pub id_short: Option<String>,
    pub content_type: String,
    pub value: Option<String>,
}

impl File {
    /// Creates a named file element.
    pub fn new(
        id_short: impl Into<String>,
        content_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        File {
            id_short: Some(id_short.into()),
            content_type: content_type.into(),
            value: Some(value.into()),
        }
    }
}

/// A data element whose value is a reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReferenceElement {
    pub id_short: Option<String>,
    pub value: Option<Reference>,
}

impl ReferenceElement {
    /// Creates a named reference element.
    pub fn new(id_short: impl Into<String>, value: Reference) -> Self {
        ReferenceElement {
            id_short: Some(id_short.into()),
            value: Some(value),
        }
    }
}

/// A directed relationship between two referenced elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipElement {
    pub id_short: Option<String>,
    pub first: Reference,
    pub second: Reference,
}

impl RelationshipElement {
    /// Creates a named relationship.
    pub fn new(id_short: impl Into<String>, first: Reference, second: Reference) -> Self {
        RelationshipElement {
            id_short: Some(id_short.into()),
            first,
            second,
        }
    }
}

/// A relationship annotated with additional data elements.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRelationshipElement {
    pub id_short: Option<String>,
    pub first: Reference,
    pub second: Reference,
    /// Annotation data elements, addressed by idShort like a named collection.
    pub annotation: Vec<SubmodelElement>,
}

/// A set of child elements addressed by idShort.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmodelElementCollection {
    pub id_short: Option<String>,
    pub value: Vec<SubmodelElement>,
}

/// An ordered sequence of child elements addressed by position.
///
/// Members may omit their idShort; the value-only form is a plain array.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmodelElementList {
    pub id_short: Option<String>,
    pub value: Vec<SubmodelElement>,
}

/// A real-world object described by statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id_short: Option<String>,
    pub entity_type: EntityType,
    pub global_asset_id: Option<String>,
    /// Statement elements, addressed by idShort like a named collection.
    pub statements: Vec<SubmodelElement>,
}

/// An event element observing a referenced element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicEventElement {
    pub id_short: Option<String>,
    pub observed: Reference,
}

impl BasicEventElement {
    /// Creates a named event element.
    pub fn new(id_short: impl Into<String>, observed: Reference) -> Self {
        BasicEventElement {
            id_short: Some(id_short.into()),
            observed,
        }
    }
}

/// An invokable operation. Carries no value-only representation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Operation {
    pub id_short: Option<String>,
}

impl Operation {
    /// Creates a named operation.
    pub fn new(id_short: impl Into<String>) -> Self {
        Operation {
            id_short: Some(id_short.into()),
        }
    }
}

/// An asserted capability. Carries no value-only representation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Capability {
    pub id_short: Option<String>,
}

impl Capability {
    /// Creates a named capability.
    pub fn new(id_short: impl Into<String>) -> Self {
        Capability {
            id_short: Some(id_short.into()),
        }
    }
}

/// One node of the typed submodel element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmodelElement {
    Property(Property),
    MultiLanguageProperty(MultiLanguageProperty),
    Range(Range),
    Blob(Blob),
    File(File),
    ReferenceElement(ReferenceElement),
    RelationshipElement(RelationshipElement),
    AnnotatedRelationshipElement(AnnotatedRelationshipElement),
    Collection(SubmodelElementCollection),
    List(SubmodelElementList),
    Entity(Entity),
    BasicEventElement(BasicEventElement),
    Operation(Operation),
    Capability(Capability),
}

impl SubmodelElement {
    /// Returns this element's kind tag.
    pub fn kind(&self) -> ElementKind {
        match self {
            SubmodelElement::Property(_) => ElementKind::Property,
            SubmodelElement::MultiLanguageProperty(_) => ElementKind::MultiLanguageProperty,
            SubmodelElement::Range(_) => ElementKind::Range,
            SubmodelElement::Blob(_) => ElementKind::Blob,
            SubmodelElement::File(_) => ElementKind::File,
            SubmodelElement::ReferenceElement(_) => ElementKind::ReferenceElement,
            SubmodelElement::RelationshipElement(_) => ElementKind::RelationshipElement,
            SubmodelElement::AnnotatedRelationshipElement(_) => {
                ElementKind::AnnotatedRelationshipElement
            }
            SubmodelElement::Collection(_) => ElementKind::Collection,
            SubmodelElement::List(_) => ElementKind::List,
            SubmodelElement::Entity(_) => ElementKind::Entity,
            SubmodelElement::BasicEventElement(_) => ElementKind::BasicEventElement,
            SubmodelElement::Operation(_) => ElementKind::Operation,
            SubmodelElement::Capability(_) => ElementKind::Capability,
        }
    }

    /// Returns this element's idShort, if set.
    pub fn id_short(&self) -> Option<&str> {
        let id = match self {
            SubmodelElement::Property(e) => &e.id_short,
            SubmodelElement::MultiLanguageProperty(e) => &e.id_short,
            SubmodelElement::Range(e) => &e.id_short,
            SubmodelElement::Blob(e) => &e.id_short,
            SubmodelElement::File(e) => &e.id_short,
            SubmodelElement::ReferenceElement(e) => &e.id_short,
            SubmodelElement::RelationshipElement(e) => &e.id_short,
            SubmodelElement::AnnotatedRelationshipElement(e) => &e.id_short,
            SubmodelElement::Collection(e) => &e.id_short,
            SubmodelElement::List(e) => &e.id_short,
            SubmodelElement::Entity(e) => &e.id_short,
            SubmodelElement::BasicEventElement(e) => &e.id_short,
            SubmodelElement::Operation(e) => &e.id_short,
            SubmodelElement::Capability(e) => &e.id_short,
        };
        id.as_deref()
    }

    /// Returns the ordered children of collection-like kinds, if any.
    pub fn children(&self) -> Option<&[SubmodelElement]> {
        match self {
            SubmodelElement::Collection(c) => Some(&c.value),
            SubmodelElement::List(l) => Some(&l.value),
            SubmodelElement::Entity(e) => Some(&e.statements),
            SubmodelElement::AnnotatedRelationshipElement(a) => Some(&a.annotation),
            _ => None,
        }
    }
}

impl From<Property> for SubmodelElement {
    fn from(e: Property) -> Self {
        SubmodelElement::Property(e)
    }
}

impl From<MultiLanguageProperty> for SubmodelElement {
    fn from(e: MultiLanguageProperty) -> Self {
        SubmodelElement::MultiLanguageProperty(e)
    }
}

impl From<Range> for SubmodelElement {
    fn from(e: Range) -> Self {
        SubmodelElement::Range(e)
    }
}

impl From<Blob> for SubmodelElement {
    fn from(e: Blob) -> Self {
        SubmodelElement::Blob(e)
    }
}

impl From<File> for SubmodelElement {
    fn from(e: File) -> Self {
        SubmodelElement::File(e)
    }
}

impl From<ReferenceElement> for SubmodelElement {
    fn from(e: ReferenceElement) -> Self {
        SubmodelElement::ReferenceElement(e)
    }
}

impl From<RelationshipElement> for SubmodelElement {
    fn from(e: RelationshipElement) -> Self {
        SubmodelElement::RelationshipElement(e)
    }
}

impl From<AnnotatedRelationshipElement> for SubmodelElement {
    fn from(e: AnnotatedRelationshipElement) -> Self {
        SubmodelElement::AnnotatedRelationshipElement(e)
    }
}

impl From<SubmodelElementCollection> for SubmodelElement {
    fn from(e: SubmodelElementCollection) -> Self {
        SubmodelElement::Collection(e)
    }
}

impl From<SubmodelElementList> for SubmodelElement {
    fn from(e: SubmodelElementList) -> Self {
        SubmodelElement::List(e)
    }
}

impl From<Entity> for SubmodelElement {
    fn from(e: Entity) -> Self {
        SubmodelElement::Entity(e)
    }
}

impl From<BasicEventElement> for SubmodelElement {
    fn from(e: BasicEventElement) -> Self {
        SubmodelElement::BasicEventElement(e)
    }
}

impl From<Operation> for SubmodelElement {
    fn from(e: Operation) -> Self {
        SubmodelElement::Operation(e)
    }
}

impl From<Capability> for SubmodelElement {
    fn from(e: Capability) -> Self {
        SubmodelElement::Capability(e)
    }
}
