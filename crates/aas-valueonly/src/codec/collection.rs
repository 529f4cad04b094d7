//! Named-collection and positional-list mapping.
//!
//! Named collections flatten each child's single-field wrapper into one
//! object, keyed by idShort; positional lists emit the children's bare values
//! in order. Both directions recurse through the per-kind mappers in
//! [`crate::codec::value`].

use serde_json::{Map, Value};

use crate::codec::path::IdShortPath;
use crate::codec::value::{self, expect_array, expect_object};
use crate::codec::DeserializeOptions;
use crate::error::ValueOnlyError;
use crate::model::SubmodelElement;

/// Serializes named children as one object, flattening their wrappers.
///
/// Children without a value-only representation are skipped. A duplicated
/// idShort is a hard error, even when the earlier bearer was skipped.
pub(crate) fn elements_to_json(
    children: &[SubmodelElement],
    path: &IdShortPath,
) -> Result<Value, ValueOnlyError> {
    let mut node = Map::new();
    let mut seen = Vec::with_capacity(children.len());
    for child in children {
        let Some(id_short) = child.id_short() else {
            return Err(ValueOnlyError::MissingIdShort {
                path: path.to_string(),
            });
        };
        if seen.contains(&id_short) {
            return Err(ValueOnlyError::DuplicateIdShort {
                id_short: id_short.to_string(),
                path: path.to_string(),
            });
        }
        seen.push(id_short);

        let child_path = path.child(id_short);
        match value::element_value(child, &child_path)? {
            Some(child_value) => {
                node.insert(id_short.to_string(), child_value);
            }
            // This kind of submodel element is not serialized in value-only
            // format.
            None => continue,
        }
    }
    Ok(Value::Object(node))
}

/// Serializes positional children as an array of bare values, in child order.
///
/// No flattening and no key checks; members without a value-only
/// representation are skipped.
pub(crate) fn items_to_json(
    children: &[SubmodelElement],
    path: &IdShortPath,
) -> Result<Value, ValueOnlyError> {
    let mut items = Vec::with_capacity(children.len());
    for (index, child) in children.iter().enumerate() {
        let child_path = child_path(path, child, index);
        if let Some(child_value) = value::element_value(child, &child_path)? {
            items.push(child_value);
        }
    }
    Ok(Value::Array(items))
}

/// Applies an incoming object onto named children, matched by idShort.
///
/// Fields are applied in the order supplied. The codec never creates
/// elements: a field without a matching child is an error.
pub(crate) fn update_elements(
    children: &mut [SubmodelElement],
    value_only: &Value,
    path: &IdShortPath,
    options: &DeserializeOptions,
) -> Result<(), ValueOnlyError> {
    let obj = expect_object(value_only, path)?;
    for (id_short, field_value) in obj {
        let child = children
            .iter_mut()
            .find(|c| c.id_short() == Some(id_short.as_str()))
            .ok_or_else(|| ValueOnlyError::MissingElement {
                id_short: id_short.clone(),
                path: path.to_string(),
            })?;
        let child_path = path.child(id_short);
        value::update_element(child, field_value, &child_path, options)?;
    }
    Ok(())
}

/// Applies an incoming array onto positional children, index by index.
///
/// Order is authoritative; there is no matching by value or idShort, and the
/// array must supply exactly one value per existing child.
pub(crate) fn update_items(
    children: &mut [SubmodelElement],
    value_only: &Value,
    path: &IdShortPath,
    options: &DeserializeOptions,
) -> Result<(), ValueOnlyError> {
    let items = expect_array(value_only, path)?;
    if items.len() != children.len() {
        return Err(ValueOnlyError::LengthMismatch {
            expected: children.len(),
            found: items.len(),
            path: path.to_string(),
        });
    }
    for (index, (child, item)) in children.iter_mut().zip(items).enumerate() {
        let child_path = child_path(path, child, index);
        value::update_element(child, item, &child_path, options)?;
    }
    Ok(())
}

fn child_path(path: &IdShortPath, child: &SubmodelElement, index: usize) -> IdShortPath {
    match child.id_short() {
        Some(id_short) => path.child(id_short),
        None => path.index(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::codec::UnrepresentablePolicy;
    use crate::model::{CollectionBuilder, ListBuilder, Operation, Property, SubmodelElement};

    fn measurements() -> SubmodelElement {
        CollectionBuilder::new("Measurements")
            .property("Temp", "21.5")
            .property("Pressure", "1013")
            .build()
    }

    fn children_of(element: &SubmodelElement) -> &[SubmodelElement] {
        element.children().unwrap()
    }

    #[test]
    fn test_named_collection_merges_child_wrappers() {
        let element = measurements();
        let node = elements_to_json(children_of(&element), &IdShortPath::root("Measurements"))
            .unwrap();
        assert_eq!(node, json!({"Temp": "21.5", "Pressure": "1013"}));
    }

    #[test]
    fn test_duplicate_id_short_is_rejected() {
        let element = CollectionBuilder::new("C")
            .property("X", "1")
            .property("X", "2")
            .build();
        let err =
            elements_to_json(children_of(&element), &IdShortPath::root("C")).unwrap_err();
        assert_eq!(
            err,
            ValueOnlyError::DuplicateIdShort {
                id_short: "X".to_string(),
                path: "C".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_detection_covers_skipped_children() {
        // The first "X" has no value-only form, yet the name is taken.
        let element = CollectionBuilder::new("C")
            .element(Operation::new("X"))
            .property("X", "2")
            .build();
        let err =
            elements_to_json(children_of(&element), &IdShortPath::root("C")).unwrap_err();
        assert!(matches!(err, ValueOnlyError::DuplicateIdShort { .. }));
    }

    #[test]
    fn test_unrepresentable_children_are_skipped_on_write() {
        let element = CollectionBuilder::new("C")
            .property("Temp", "21.5")
            .element(Operation::new("Reset"))
            .build();
        let node =
            elements_to_json(children_of(&element), &IdShortPath::root("C")).unwrap();
        assert_eq!(node, json!({"Temp": "21.5"}));
    }

    #[test]
    fn test_update_matches_children_by_id_short() {
        let mut element = measurements();
        let SubmodelElement::Collection(c) = &mut element else {
            panic!("expected collection");
        };
        update_elements(
            &mut c.value,
            &json!({"Temp": "22.0"}),
            &IdShortPath::root("Measurements"),
            &DeserializeOptions::default(),
        )
        .unwrap();

        let SubmodelElement::Property(temp) = &c.value[0] else {
            panic!("expected property");
        };
        let SubmodelElement::Property(pressure) = &c.value[1] else {
            panic!("expected property");
        };
        assert_eq!(temp.value, "22.0");
        assert_eq!(pressure.value, "1013");
    }

    #[test]
    fn test_update_rejects_missing_target() {
        let mut element = measurements();
        let SubmodelElement::Collection(c) = &mut element else {
            panic!("expected collection");
        };
        let err = update_elements(
            &mut c.value,
            &json!({"Humidity": "40"}),
            &IdShortPath::root("Measurements"),
            &DeserializeOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValueOnlyError::MissingElement {
                id_short: "Humidity".to_string(),
                path: "Measurements".to_string(),
            }
        );
    }

    #[test]
    fn test_update_rejects_array_for_named_collection() {
        let mut element = measurements();
        let SubmodelElement::Collection(c) = &mut element else {
            panic!("expected collection");
        };
        let err = update_elements(
            &mut c.value,
            &json!(["21.5"]),
            &IdShortPath::root("Measurements"),
            &DeserializeOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValueOnlyError::UnexpectedShape {
                expected: "an object",
                found: "an array",
                ..
            }
        ));
    }

    #[test]
    fn test_list_preserves_positional_order() {
        let element = ListBuilder::new("Readings")
            .item(Property::new("a", "1"))
            .item(Property::new("b", "2"))
            .item(Property::new("c", "3"))
            .build();
        let node = items_to_json(children_of(&element), &IdShortPath::root("Readings")).unwrap();
        assert_eq!(node, json!(["1", "2", "3"]));
    }

    #[test]
    fn test_list_update_applies_by_position_not_by_value() {
        let mut element = ListBuilder::new("Readings")
            .item(Property::new("a", "1"))
            .item(Property::new("b", "2"))
            .item(Property::new("c", "3"))
            .build();
        let SubmodelElement::List(l) = &mut element else {
            panic!("expected list");
        };
        update_items(
            &mut l.value,
            &json!(["3", "2", "1"]),
            &IdShortPath::root("Readings"),
            &DeserializeOptions::default(),
        )
        .unwrap();

        let values: Vec<_> = l
            .value
            .iter()
            .map(|e| match e {
                SubmodelElement::Property(p) => p.value.clone(),
                _ => panic!("expected property"),
            })
            .collect();
        // Index 0 now holds "3": positions are authoritative.
        assert_eq!(values, ["3", "2", "1"]);
    }

    #[test]
    fn test_list_update_rejects_length_mismatch() {
        let mut element = ListBuilder::new("Readings")
            .item(Property::new("a", "1"))
            .item(Property::new("b", "2"))
            .build();
        let SubmodelElement::List(l) = &mut element else {
            panic!("expected list");
        };
        let err = update_items(
            &mut l.value,
            &json!(["1"]),
            &IdShortPath::root("Readings"),
            &DeserializeOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValueOnlyError::LengthMismatch {
                expected: 2,
                found: 1,
                path: "Readings".to_string(),
            }
        );
    }

    #[test]
    fn test_list_members_without_id_short() {
        let element = SubmodelElement::List(crate::model::SubmodelElementList {
            id_short: Some("Anonymous".to_string()),
            value: vec![
                SubmodelElement::Property(crate::model::Property {
                    id_short: None,
                    value: "1".to_string(),
                }),
                SubmodelElement::Property(crate::model::Property {
                    id_short: None,
                    value: "2".to_string(),
                }),
            ],
        });
        let node = items_to_json(children_of(&element), &IdShortPath::root("Anonymous")).unwrap();
        assert_eq!(node, json!(["1", "2"]));
    }

    #[test]
    fn test_update_of_unrepresentable_target_is_rejected_by_default() {
        let mut element = CollectionBuilder::new("C")
            .element(Operation::new("Reset"))
            .build();
        let SubmodelElement::Collection(c) = &mut element else {
            panic!("expected collection");
        };
        let err = update_elements(
            &mut c.value,
            &json!({"Reset": {}}),
            &IdShortPath::root("C"),
            &DeserializeOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValueOnlyError::NotRepresentable {
                path: "C.Reset".to_string(),
            }
        );
    }

    #[test]
    fn test_update_of_unrepresentable_target_can_be_skipped() {
        let mut element = CollectionBuilder::new("C")
            .element(Operation::new("Reset"))
            .property("Temp", "21.5")
            .build();
        let SubmodelElement::Collection(c) = &mut element else {
            panic!("expected collection");
        };
        let options = DeserializeOptions {
            unrepresentable: UnrepresentablePolicy::Skip,
        };
        update_elements(
            &mut c.value,
            &json!({"Reset": {}, "Temp": "22.0"}),
            &IdShortPath::root("C"),
            &options,
        )
        .unwrap();

        let SubmodelElement::Property(p) = &c.value[1] else {
            panic!("expected property");
        };
        assert_eq!(p.value, "22.0");
    }

    #[test]
    fn test_nested_collection_error_carries_full_path() {
        let element = CollectionBuilder::new("Outer")
            .element(
                CollectionBuilder::new("Inner")
                    .property("X", "1")
                    .property("X", "2")
                    .build(),
            )
            .build();
        let err =
            elements_to_json(children_of(&element), &IdShortPath::root("Outer")).unwrap_err();
        assert_eq!(err.path(), "Outer.Inner");
    }
}
