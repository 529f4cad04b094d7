//! Value-only mapping for scalar and referable element kinds.
//!
//! [`element_value`] and [`update_element`] are the mapper factory of the
//! codec: both dispatch exhaustively on the element kind, so a new kind is a
//! compile error here rather than a silently unmapped element. Kinds outside
//! the value-only vocabulary (operations, capabilities) yield `None` on the
//! write side and follow the configured policy on the update side.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{Map, Value};

use crate::codec::path::IdShortPath;
use crate::codec::{collection, single_field, DeserializeOptions, UnrepresentablePolicy};
use crate::error::ValueOnlyError;
use crate::model::{
    AnnotatedRelationshipElement, Blob, Entity, EntityType, File, Key, KeyType, LangString, Range,
    Reference, ReferenceType, SubmodelElement,
};

/// Serializes the bare value-only value of an element.
///
/// Returns `None` for kinds with no value-only representation; write-side
/// callers skip those elements.
pub(crate) fn element_value(
    element: &SubmodelElement,
    path: &IdShortPath,
) -> Result<Option<Value>, ValueOnlyError> {
    let node = match element {
        SubmodelElement::Property(p) => Value::String(p.value.clone()),
        SubmodelElement::MultiLanguageProperty(m) => lang_strings_to_json(&m.value),
        SubmodelElement::Range(r) => range_to_json(r),
        SubmodelElement::Blob(b) => blob_to_json(b),
        SubmodelElement::File(f) => file_to_json(f),
        SubmodelElement::ReferenceElement(r) => match &r.value {
            Some(reference) => reference_to_json(reference),
            None => Value::Null,
        },
        SubmodelElement::RelationshipElement(r) => relationship_to_json(&r.first, &r.second),
        SubmodelElement::AnnotatedRelationshipElement(a) => annotated_to_json(a, path)?,
        SubmodelElement::Collection(c) => collection::elements_to_json(&c.value, path)?,
        SubmodelElement::List(l) => collection::items_to_json(&l.value, path)?,
        SubmodelElement::Entity(e) => entity_to_json(e, path)?,
        SubmodelElement::BasicEventElement(b) => {
            let mut node = Map::new();
            node.insert("observed".to_string(), reference_to_json(&b.observed));
            Value::Object(node)
        }
        SubmodelElement::Operation(_) | SubmodelElement::Capability(_) => return Ok(None),
    };
    Ok(Some(node))
}

/// Serializes an element wrapped as `{idShort: <bare value>}`.
///
/// Returns `None` for kinds with no value-only representation. Elements in a
/// named context must carry an idShort to key the wrapper by.
pub(crate) fn wrapped_element(
    element: &SubmodelElement,
    path: &IdShortPath,
) -> Result<Option<Value>, ValueOnlyError> {
    let Some(id_short) = element.id_short() else {
        return Err(ValueOnlyError::MissingIdShort {
            path: path.to_string(),
        });
    };
    match element_value(element, path)? {
        Some(value) => {
            let mut wrapper = Map::new();
            wrapper.insert(id_short.to_string(), value);
            Ok(Some(Value::Object(wrapper)))
        }
        None => Ok(None),
    }
}

/// Applies a bare value-only value onto an element, in place.
///
/// Only value slots are written; the topology of the tree is never changed.
pub(crate) fn update_element(
    element: &mut SubmodelElement,
    value: &Value,
    path: &IdShortPath,
    options: &DeserializeOptions,
) -> Result<(), ValueOnlyError> {
    match element {
        SubmodelElement::Property(p) => {
            p.value = scalar_text(value, path)?;
        }
        SubmodelElement::MultiLanguageProperty(m) => {
            m.value = lang_strings_from_json(value, path)?;
        }
        SubmodelElement::Range(r) => update_range(r, value, path)?,
        SubmodelElement::Blob(b) => update_blob(b, value, path)?,
        SubmodelElement::File(f) => update_file(f, value, path)?,
        SubmodelElement::ReferenceElement(r) => {
            r.value = match value {
                Value::Null => None,
                _ => Some(reference_from_json(value, path)?),
            };
        }
        SubmodelElement::RelationshipElement(r) => {
            let (first, second) = relationship_from_json(value, path)?;
            r.first = first;
            r.second = second;
        }
        SubmodelElement::AnnotatedRelationshipElement(a) => {
            update_annotated(a, value, path, options)?;
        }
        SubmodelElement::Collection(c) => {
            collection::update_elements(&mut c.value, value, path, options)?;
        }
        SubmodelElement::List(l) => {
            collection::update_items(&mut l.value, value, path, options)?;
        }
        SubmodelElement::Entity(e) => update_entity(e, value, path, options)?,
        SubmodelElement::BasicEventElement(b) => {
            let obj = expect_object(value, path)?;
            for field in obj.keys() {
                if field != "observed" {
                    return Err(ValueOnlyError::UnexpectedField {
                        field: field.clone(),
                        path: path.to_string(),
                    });
                }
            }
            let observed = obj.get("observed").ok_or(ValueOnlyError::MissingField {
                field: "observed",
                path: path.to_string(),
            })?;
            b.observed = reference_from_json(observed, path)?;
        }
        SubmodelElement::Operation(_) | SubmodelElement::Capability(_) => {
            match options.unrepresentable {
                UnrepresentablePolicy::Reject => {
                    return Err(ValueOnlyError::NotRepresentable {
                        path: path.to_string(),
                    });
                }
                UnrepresentablePolicy::Skip => {}
            }
        }
    }
    Ok(())
}

// =============================================================================
// PER-KIND VALUE SHAPES
// =============================================================================

fn lang_strings_to_json(value: &[LangString]) -> Value {
    let items = value
        .iter()
        .map(|ls| {
            let mut node = Map::new();
            node.insert(ls.language.clone(), Value::String(ls.text.clone()));
            Value::Object(node)
        })
        .collect();
    Value::Array(items)
}

fn lang_strings_from_json(
    value: &Value,
    path: &IdShortPath,
) -> Result<Vec<LangString>, ValueOnlyError> {
    let items = expect_array(value, path)?;
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        let (language, text) = single_field(item, "cannot read the language string", path)?;
        result.push(LangString {
            language: language.to_string(),
            text: scalar_text(text, path)?,
        });
    }
    Ok(result)
}

fn range_to_json(range: &Range) -> Value {
    let mut node = Map::new();
    if let Some(min) = &range.min {
        node.insert("min".to_string(), Value::String(min.clone()));
    }
    if let Some(max) = &range.max {
        node.insert("max".to_string(), Value::String(max.clone()));
    }
    Value::Object(node)
}

fn update_range(range: &mut Range, value: &Value, path: &IdShortPath) -> Result<(), ValueOnlyError> {
    let obj = expect_object(value, path)?;
    for (field, field_value) in obj {
        let slot = match field.as_str() {
            "min" => &mut range.min,
            "max" => &mut range.max,
            _ => {
                return Err(ValueOnlyError::UnexpectedField {
                    field: field.clone(),
                    path: path.to_string(),
                });
            }
        };
        *slot = match field_value {
            Value::Null => None,
            _ => Some(scalar_text(field_value, path)?),
        };
    }
    Ok(())
}

fn blob_to_json(blob: &Blob) -> Value {
    let mut node = Map::new();
    node.insert(
        "contentType".to_string(),
        Value::String(blob.content_type.clone()),
    );
    if let Some(bytes) = &blob.value {
        node.insert("value".to_string(), Value::String(BASE64.encode(bytes)));
    }
    Value::Object(node)
}

fn update_blob(blob: &mut Blob, value: &Value, path: &IdShortPath) -> Result<(), ValueOnlyError> {
    let obj = expect_object(value, path)?;
    for (field, field_value) in obj {
        match field.as_str() {
            "contentType" => blob.content_type = expect_string(field_value, path)?,
            "value" => {
                blob.value = match field_value {
                    Value::Null => None,
                    _ => {
                        let encoded = expect_string(field_value, path)?;
                        let bytes = BASE64.decode(encoded).map_err(|e| {
                            ValueOnlyError::InvalidValue {
                                reason: format!("invalid base64 blob content: {e}"),
                                path: path.to_string(),
                            }
                        })?;
                        Some(bytes)
                    }
                };
            }
            _ => {
                return Err(ValueOnlyError::UnexpectedField {
                    field: field.clone(),
                    path: path.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn file_to_json(file: &File) -> Value {
    let mut node = Map::new();
    node.insert(
        "contentType".to_string(),
        Value::String(file.content_type.clone()),
    );
    if let Some(value) = &file.value {
        node.insert("value".to_string(), Value::String(value.clone()));
    }
    Value::Object(node)
}

fn update_file(file: &mut File, value: &Value, path: &IdShortPath) -> Result<(), ValueOnlyError> {
    let obj = expect_object(value, path)?;
    for (field, field_value) in obj {
        match field.as_str() {
            "contentType" => file.content_type = expect_string(field_value, path)?,
            "value" => {
                file.value = match field_value {
                    Value::Null => None,
                    _ => Some(expect_string(field_value, path)?),
                };
            }
            _ => {
                return Err(ValueOnlyError::UnexpectedField {
                    field: field.clone(),
                    path: path.to_string(),
                });
            }
        }
    }
    Ok(())
}

pub(crate) fn reference_to_json(reference: &Reference) -> Value {
    let keys = reference
        .keys
        .iter()
        .map(|key| {
            let mut node = Map::new();
            node.insert(
                "type".to_string(),
                Value::String(key.key_type.as_str().to_string()),
            );
            node.insert("value".to_string(), Value::String(key.value.clone()));
            Value::Object(node)
        })
        .collect();
    let mut node = Map::new();
    node.insert(
        "type".to_string(),
        Value::String(reference.reference_type.as_str().to_string()),
    );
    node.insert("keys".to_string(), Value::Array(keys));
    Value::Object(node)
}

pub(crate) fn reference_from_json(
    value: &Value,
    path: &IdShortPath,
) -> Result<Reference, ValueOnlyError> {
    let obj = expect_object(value, path)?;
    for field in obj.keys() {
        if field != "type" && field != "keys" {
            return Err(ValueOnlyError::UnexpectedField {
                field: field.clone(),
                path: path.to_string(),
            });
        }
    }

    let type_literal = obj
        .get("type")
        .ok_or(ValueOnlyError::MissingField {
            field: "type",
            path: path.to_string(),
        })
        .and_then(|v| expect_string(v, path))?;
    let reference_type =
        ReferenceType::parse(&type_literal).ok_or_else(|| ValueOnlyError::InvalidValue {
            reason: format!("unknown reference type '{type_literal}'"),
            path: path.to_string(),
        })?;

    let keys_node = obj.get("keys").ok_or(ValueOnlyError::MissingField {
        field: "keys",
        path: path.to_string(),
    })?;
    let mut keys = Vec::new();
    for key_node in expect_array(keys_node, path)? {
        keys.push(key_from_json(key_node, path)?);
    }

    Ok(Reference {
        reference_type,
        keys,
    })
}

fn key_from_json(value: &Value, path: &IdShortPath) -> Result<Key, ValueOnlyError> {
    let obj = expect_object(value, path)?;
    for field in obj.keys() {
        if field != "type" && field != "value" {
            return Err(ValueOnlyError::UnexpectedField {
                field: field.clone(),
                path: path.to_string(),
            });
        }
    }

    let type_literal = obj
        .get("type")
        .ok_or(ValueOnlyError::MissingField {
            field: "type",
            path: path.to_string(),
        })
        .and_then(|v| expect_string(v, path))?;
    let key_type = KeyType::parse(&type_literal).ok_or_else(|| ValueOnlyError::InvalidValue {
        reason: format!("unknown key type '{type_literal}'"),
        path: path.to_string(),
    })?;
    let key_value = obj
        .get("value")
        .ok_or(ValueOnlyError::MissingField {
            field: "value",
            path: path.to_string(),
        })
        .and_then(|v| expect_string(v, path))?;

    Ok(Key {
        key_type,
        value: key_value,
    })
}

fn relationship_to_json(first: &Reference, second: &Reference) -> Value {
    let mut node = Map::new();
    node.insert("first".to_string(), reference_to_json(first));
    node.insert("second".to_string(), reference_to_json(second));
    Value::Object(node)
}

/// A relationship update must supply both ends.
fn relationship_from_json(
    value: &Value,
    path: &IdShortPath,
) -> Result<(Reference, Reference), ValueOnlyError> {
    let obj = expect_object(value, path)?;
    for field in obj.keys() {
        if field != "first" && field != "second" {
            return Err(ValueOnlyError::UnexpectedField {
                field: field.clone(),
                path: path.to_string(),
            });
        }
    }
    let first = obj.get("first").ok_or(ValueOnlyError::MissingField {
        field: "first",
        path: path.to_string(),
    })?;
    let second = obj.get("second").ok_or(ValueOnlyError::MissingField {
        field: "second",
        path: path.to_string(),
    })?;
    Ok((
        reference_from_json(first, path)?,
        reference_from_json(second, path)?,
    ))
}

fn annotated_to_json(
    element: &AnnotatedRelationshipElement,
    path: &IdShortPath,
) -> Result<Value, ValueOnlyError> {
    let mut annotation = Vec::with_capacity(element.annotation.len());
    for child in &element.annotation {
        let child_path = match child.id_short() {
            Some(id) => path.child(id),
            None => path.clone(),
        };
        if let Some(wrapper) = wrapped_element(child, &child_path)? {
            annotation.push(wrapper);
        }
    }

    let mut node = Map::new();
    node.insert("first".to_string(), reference_to_json(&element.first));
    node.insert("second".to_string(), reference_to_json(&element.second));
    node.insert("annotation".to_string(), Value::Array(annotation));
    Ok(Value::Object(node))
}

fn update_annotated(
    element: &mut AnnotatedRelationshipElement,
    value: &Value,
    path: &IdShortPath,
    options: &DeserializeOptions,
) -> Result<(), ValueOnlyError> {
    let obj = expect_object(value, path)?;
    for field in obj.keys() {
        if field != "first" && field != "second" && field != "annotation" {
            return Err(ValueOnlyError::UnexpectedField {
                field: field.clone(),
                path: path.to_string(),
            });
        }
    }

    let first = obj.get("first").ok_or(ValueOnlyError::MissingField {
        field: "first",
        path: path.to_string(),
    })?;
    let second = obj.get("second").ok_or(ValueOnlyError::MissingField {
        field: "second",
        path: path.to_string(),
    })?;
    element.first = reference_from_json(first, path)?;
    element.second = reference_from_json(second, path)?;

    // Annotations are addressed by idShort, like a named collection, but the
    // incoming form is an array of single-field wrappers.
    if let Some(annotation) = obj.get("annotation") {
        for wrapper in expect_array(annotation, path)? {
            let (id_short, inner) = single_field(wrapper, "cannot update the annotation", path)?;
            let child = element
                .annotation
                .iter_mut()
                .find(|c| c.id_short() == Some(id_short))
                .ok_or_else(|| ValueOnlyError::MissingElement {
                    id_short: id_short.to_string(),
                    path: path.to_string(),
                })?;
            let child_path = path.child(id_short);
            update_element(child, inner, &child_path, options)?;
        }
    }
    Ok(())
}

fn entity_to_json(entity: &Entity, path: &IdShortPath) -> Result<Value, ValueOnlyError> {
    let mut node = Map::new();
    node.insert(
        "statements".to_string(),
        collection::elements_to_json(&entity.statements, path)?,
    );
    node.insert(
        "entityType".to_string(),
        Value::String(entity.entity_type.as_str().to_string()),
    );
    if let Some(global_asset_id) = &entity.global_asset_id {
        node.insert(
            "globalAssetId".to_string(),
            Value::String(global_asset_id.clone()),
        );
    }
    Ok(Value::Object(node))
}

fn update_entity(
    entity: &mut Entity,
    value: &Value,
    path: &IdShortPath,
    options: &DeserializeOptions,
) -> Result<(), ValueOnlyError> {
    let obj = expect_object(value, path)?;
    for (field, field_value) in obj {
        match field.as_str() {
            "statements" => {
                collection::update_elements(&mut entity.statements, field_value, path, options)?;
            }
            "entityType" => {
                let literal = expect_string(field_value, path)?;
                entity.entity_type =
                    EntityType::parse(&literal).ok_or_else(|| ValueOnlyError::InvalidValue {
                        reason: format!("unknown entity type '{literal}'"),
                        path: path.to_string(),
                    })?;
            }
            "globalAssetId" => {
                entity.global_asset_id = match field_value {
                    Value::Null => None,
                    _ => Some(expect_string(field_value, path)?),
                };
            }
            _ => {
                return Err(ValueOnlyError::UnexpectedField {
                    field: field.clone(),
                    path: path.to_string(),
                });
            }
        }
    }
    Ok(())
}

// =============================================================================
// SHAPE HELPERS
// =============================================================================

/// Describes a JSON value's shape for error messages.
pub(crate) fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub(crate) fn expect_object<'v>(
    value: &'v Value,
    path: &IdShortPath,
) -> Result<&'v Map<String, Value>, ValueOnlyError> {
    value
        .as_object()
        .ok_or_else(|| ValueOnlyError::UnexpectedShape {
            expected: "an object",
            found: shape_of(value),
            path: path.to_string(),
        })
}

pub(crate) fn expect_array<'v>(
    value: &'v Value,
    path: &IdShortPath,
) -> Result<&'v [Value], ValueOnlyError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ValueOnlyError::UnexpectedShape {
            expected: "an array",
            found: shape_of(value),
            path: path.to_string(),
        })
}

fn expect_string(value: &Value, path: &IdShortPath) -> Result<String, ValueOnlyError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ValueOnlyError::UnexpectedShape {
            expected: "a string",
            found: shape_of(value),
            path: path.to_string(),
        })
}

/// Reads a scalar as its textual form.
///
/// Property and range slots store text; incoming numbers and booleans are
/// accepted and canonicalized to their literal rendering.
fn scalar_text(value: &Value, path: &IdShortPath) -> Result<String, ValueOnlyError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(ValueOnlyError::UnexpectedShape {
            expected: "a scalar value",
            found: shape_of(value),
            path: path.to_string(),
        }),
    }
}
