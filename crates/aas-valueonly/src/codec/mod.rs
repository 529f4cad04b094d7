//! Value-only JSON codec for submodel element trees.
//!
//! The value-only format keeps only element values, keyed by idShort; all
//! metadata is omitted. Because the format carries no type information,
//! deserialization mutates a pre-existing typed tree in place rather than
//! constructing one: the existing instance supplies the kind of every value.
//!
//! The codec is plain synchronous recursion with no shared mutable state;
//! independent calls may run concurrently on unrelated trees. During
//! [`deserialize`] the caller must not mutate the targeted subtree from
//! elsewhere.

pub mod path;

mod collection;
mod value;

use serde_json::{Map, Value};

pub use path::IdShortPath;

use crate::error::ValueOnlyError;
use crate::model::SubmodelElement;

/// How [`deserialize_with`] treats incoming data targeting an element whose
/// kind has no value-only representation.
///
/// The write side silently skips such elements. Rejecting them on the read
/// side treats inbound data claiming to set an unmappable element as a caller
/// bug; skipping restores symmetry with the write side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnrepresentablePolicy {
    /// Fail with [`ValueOnlyError::NotRepresentable`].
    #[default]
    Reject,
    /// Ignore the value, symmetric with serialization.
    Skip,
}

/// Options for [`deserialize_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeserializeOptions {
    pub unrepresentable: UnrepresentablePolicy,
}

/// Serializes an element tree into its value-only representation.
///
/// The result is a single-field object whose key is the root element's
/// idShort. Descendants without a value-only representation are skipped;
/// a root without one is an error, as is a root without an idShort.
pub fn serialize(element: &SubmodelElement) -> Result<Value, ValueOnlyError> {
    let Some(id_short) = element.id_short() else {
        return Err(ValueOnlyError::MissingIdShort {
            path: String::new(),
        });
    };
    let path = IdShortPath::root(id_short);
    value::element_value(element, &path)?
        .map(|inner| {
            let mut wrapper = Map::new();
            wrapper.insert(id_short.to_string(), inner);
            Value::Object(wrapper)
        })
        .ok_or(ValueOnlyError::NotRepresentable {
            path: path.to_string(),
        })
}

/// Applies a value-only document onto an existing element tree, in place.
///
/// `value_only` must be the full single-field wrapper as produced by
/// [`serialize`], keyed by the root element's idShort. Values are refined in
/// place; the tree's topology is never changed and no elements are created or
/// removed. The call aborts on the first violation with no partial-application
/// guarantees for already-visited siblings.
pub fn deserialize(
    element: &mut SubmodelElement,
    value_only: &Value,
) -> Result<(), ValueOnlyError> {
    deserialize_with(element, value_only, DeserializeOptions::default())
}

/// [`deserialize`] with explicit handling of unrepresentable targets.
pub fn deserialize_with(
    element: &mut SubmodelElement,
    value_only: &Value,
    options: DeserializeOptions,
) -> Result<(), ValueOnlyError> {
    let Some(id_short) = element.id_short() else {
        return Err(ValueOnlyError::MissingIdShort {
            path: String::new(),
        });
    };
    let path = IdShortPath::root(id_short);
    let (field, inner) = single_field(value_only, "cannot update the element", &path)?;
    if field != id_short {
        return Err(ValueOnlyError::MissingElement {
            id_short: field.to_string(),
            path: path.to_string(),
        });
    }
    value::update_element(element, inner, &path, &options)
}

/// Extracts the sole field of a value-only wrapper object.
///
/// The single key is the only addressing mechanism of the format, so
/// multiplicity must be exactly one at every wrapping level: zero fields and
/// more than one field are both structural errors.
pub(crate) fn single_field<'v>(
    value: &'v Value,
    context: &str,
    path: &IdShortPath,
) -> Result<(&'v str, &'v Value), ValueOnlyError> {
    let obj = value::expect_object(value, path)?;
    let mut fields = obj.iter();
    let Some((name, inner)) = fields.next() else {
        return Err(ValueOnlyError::EmptyValue {
            context: context.to_string(),
            path: path.to_string(),
        });
    };
    if fields.next().is_some() {
        return Err(ValueOnlyError::AmbiguousValue {
            context: context.to_string(),
            path: path.to_string(),
        });
    }
    Ok((name.as_str(), inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::model::{
        CollectionBuilder, LangString, ListBuilder, MultiLanguageProperty, Operation, Property,
        Range, SubmodelElement,
    };

    #[test]
    fn test_serialize_wraps_root_in_single_field() {
        let element: SubmodelElement = Property::new("Temp", "21.5").into();
        let value_only = serialize(&element).unwrap();
        assert_eq!(value_only, json!({"Temp": "21.5"}));

        let obj = value_only.as_object().unwrap();
        assert_eq!(obj.len(), 1);
    }

    #[test]
    fn test_measurements_scenario() {
        let mut measurements = CollectionBuilder::new("Measurements")
            .property("Temp", "21.5")
            .property("Pressure", "1013")
            .build();

        let value_only = serialize(&measurements).unwrap();
        assert_eq!(
            value_only,
            json!({"Measurements": {"Temp": "21.5", "Pressure": "1013"}})
        );

        deserialize(
            &mut measurements,
            &json!({"Measurements": {"Temp": "22.0", "Pressure": "1013"}}),
        )
        .unwrap();

        let children = measurements.children().unwrap();
        let SubmodelElement::Property(temp) = &children[0] else {
            panic!("expected property");
        };
        assert_eq!(temp.value, "22.0");
    }

    #[test]
    fn test_serialize_rejects_unrepresentable_root() {
        let element: SubmodelElement = Operation::new("Reset").into();
        let err = serialize(&element).unwrap_err();
        assert_eq!(
            err,
            ValueOnlyError::NotRepresentable {
                path: "Reset".to_string(),
            }
        );
    }

    #[test]
    fn test_deserialize_rejects_empty_wrapper() {
        let mut element: SubmodelElement = Property::new("Temp", "21.5").into();
        let err = deserialize(&mut element, &json!({})).unwrap_err();
        assert!(matches!(err, ValueOnlyError::EmptyValue { .. }));
    }

    #[test]
    fn test_deserialize_rejects_multi_field_wrapper() {
        let mut element: SubmodelElement = Property::new("Temp", "21.5").into();
        let err =
            deserialize(&mut element, &json!({"Temp": "1", "Pressure": "2"})).unwrap_err();
        assert!(matches!(err, ValueOnlyError::AmbiguousValue { .. }));
    }

    #[test]
    fn test_deserialize_rejects_mismatched_wrapper_key() {
        let mut element: SubmodelElement = Property::new("Temp", "21.5").into();
        let err = deserialize(&mut element, &json!({"Pressure": "1013"})).unwrap_err();
        assert_eq!(
            err,
            ValueOnlyError::MissingElement {
                id_short: "Pressure".to_string(),
                path: "Temp".to_string(),
            }
        );
    }

    #[test]
    fn test_roundtrip_into_structural_clone() {
        let original = CollectionBuilder::new("Nameplate")
            .property("Manufacturer", "ACME")
            .element(
                MultiLanguageProperty::new("ProductName", vec![LangString::new("en", "pump")]),
            )
            .element(Range::new("Temperature", "-40", "85"))
            .element(
                ListBuilder::new("SerialNumbers")
                    .item(Property::new("S1", "A-001"))
                    .item(Property::new("S2", "A-002"))
                    .build(),
            )
            .build();

        let mut clone = blank_clone(&original);
        assert_ne!(clone, original);

        let value_only = serialize(&original).unwrap();
        deserialize(&mut clone, &value_only).unwrap();
        assert_eq!(clone, original);
    }

    /// Same shape and idShorts, placeholder values.
    fn blank_clone(element: &SubmodelElement) -> SubmodelElement {
        let mut clone = element.clone();
        blank_values(&mut clone);
        clone
    }

    fn blank_values(element: &mut SubmodelElement) {
        match element {
            SubmodelElement::Property(p) => p.value.clear(),
            SubmodelElement::MultiLanguageProperty(m) => m.value.clear(),
            SubmodelElement::Range(r) => {
                r.min = None;
                r.max = None;
            }
            SubmodelElement::Blob(b) => b.value = None,
            SubmodelElement::File(f) => f.value = None,
            SubmodelElement::Collection(c) => {
                c.value.iter_mut().for_each(blank_values);
            }
            SubmodelElement::List(l) => {
                l.value.iter_mut().for_each(blank_values);
            }
            SubmodelElement::Entity(e) => {
                e.statements.iter_mut().for_each(blank_values);
            }
            _ => {}
        }
    }

    mod roundtrip_properties {
        use super::*;
        use proptest::prelude::*;

        fn scalar_element(id_short: String) -> BoxedStrategy<SubmodelElement> {
            prop_oneof![
                "[a-zA-Z0-9 .-]{0,12}".prop_map({
                    let id = id_short.clone();
                    move |value| SubmodelElement::Property(Property::new(id.clone(), value))
                }),
                ("[a-z]{2}", "[a-zA-Z ]{0,8}").prop_map({
                    let id = id_short.clone();
                    move |(language, text)| {
                        SubmodelElement::MultiLanguageProperty(MultiLanguageProperty::new(
                            id.clone(),
                            vec![LangString::new(language, text)],
                        ))
                    }
                }),
                ("[0-9]{1,3}", "[0-9]{1,3}").prop_map({
                    let id = id_short;
                    move |(min, max)| SubmodelElement::Range(Range::new(id.clone(), min, max))
                }),
            ]
            .boxed()
        }

        fn collection_tree() -> impl Strategy<Value = SubmodelElement> {
            proptest::sample::subsequence(
                vec!["Alpha", "Beta", "Gamma", "Delta", "Epsilon"],
                0..=5,
            )
            .prop_flat_map(|names| {
                let children: Vec<_> = names
                    .into_iter()
                    .map(|name| scalar_element(name.to_string()))
                    .collect();
                children.prop_map(|children| {
                    let mut builder = CollectionBuilder::new("Root");
                    for child in children {
                        builder = builder.element(child);
                    }
                    builder.build()
                })
            })
        }

        proptest! {
            #[test]
            fn roundtrip_restores_all_values(original in collection_tree()) {
                let value_only = serialize(&original).unwrap();

                // Single-field invariant at the root.
                prop_assert_eq!(value_only.as_object().unwrap().len(), 1);

                let mut clone = blank_clone(&original);
                deserialize(&mut clone, &value_only).unwrap();
                prop_assert_eq!(clone, original);
            }
        }
    }
}
