//! Walks a configuration alongside its schema and produces the manifest
//! representation of it.
use serde_json::{Map, Value};

use super::{Attributes, ValueSchema, ValueType};
use crate::diagnostics::{AttributePath, Diagnostics};

const INCORRECT_TYPE: &str = "incorrect attribute value type";

pub(super) fn object(
    attributes: &Attributes,
    config: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) -> Value {
    let Value::Object(config) = config else {
        type_mismatch("object", config, path, diagnostics);
        return Value::Null;
    };

    let mut manifest = Map::new();

    for (name, value) in config {
        let attribute_path = path.attribute(name);

        let Some(attribute) = attributes.get(name) else {
            diagnostics.push_attribute_error(
                &attribute_path,
                "unsupported attribute",
                format!("an attribute named {name:?} is not expected here"),
            );
            continue;
        };

        if value.is_null() {
            continue;
        }

        if !attribute.presence.is_configurable() {
            diagnostics.push_attribute_error(
                &attribute_path,
                "invalid configuration",
                format!("{name:?} is computed and cannot be configured"),
            );
            continue;
        }

        let converted = self::value(&attribute.value, value, &attribute_path, diagnostics);
        manifest.insert(attribute.manifest_name.clone(), converted);
    }

    for (name, attribute) in attributes {
        let missing = config.get(name).is_none_or(Value::is_null);
        if attribute.presence.is_required() && missing {
            diagnostics.push_attribute_error(
                &path.attribute(name),
                "missing required attribute",
                format!("the attribute {name:?} is required, but no definition was found"),
            );
        }
    }

    Value::Object(manifest)
}

pub(super) fn value(
    schema: &ValueSchema,
    config: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) -> Value {
    let converted = match (&schema.ty, config) {
        (ValueType::Dynamic, _) => config.clone(),
        (ValueType::String, Value::String(_)) | (ValueType::Bool, Value::Bool(_)) => {
            config.clone()
        }
        (ValueType::Int64, Value::Number(number)) if number.is_i64() => config.clone(),
        (ValueType::Int64, Value::Number(number)) if number.is_u64() => {
            diagnostics.push_attribute_error(
                path,
                "invalid attribute value",
                format!("integer out of range, got: {number}"),
            );
            return Value::Null;
        }
        (ValueType::Float64, Value::Number(_)) => config.clone(),
        (ValueType::List(element), Value::Array(elements)) => Value::Array(
            elements
                .iter()
                .enumerate()
                .map(|(index, config)| {
                    not_null(element, config, &path.index(index), diagnostics)
                })
                .collect(),
        ),
        (ValueType::Map(element), Value::Object(entries)) => Value::Object(
            entries
                .iter()
                .map(|(key, config)| {
                    let converted = not_null(element, config, &path.key(key), diagnostics);
                    (key.clone(), converted)
                })
                .collect(),
        ),
        (ValueType::Object(attributes), _) => object(attributes, config, path, diagnostics),
        (ty, config) => {
            type_mismatch(ty.type_name(), config, path, diagnostics);
            return Value::Null;
        }
    };

    for validator in &schema.validators {
        validator.validate(config, path, diagnostics);
    }

    converted
}

fn not_null(
    schema: &ValueSchema,
    config: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) -> Value {
    if config.is_null() && schema.ty != ValueType::Dynamic {
        diagnostics.push_attribute_error(
            path,
            "invalid configuration",
            "elements of lists and maps cannot be null",
        );
        return Value::Null;
    }

    value(schema, config, path, diagnostics)
}

fn type_mismatch(expected: &str, config: &Value, path: &AttributePath, diagnostics: &mut Diagnostics) {
    let actual = match config {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(number) if number.is_i64() || number.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    };

    diagnostics.push_attribute_error(
        path,
        INCORRECT_TYPE,
        format!("expected a value of type {expected}, got {actual}"),
    );
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::schema::{Attribute, Presence, Validator};

    fn container_schema() -> Attributes {
        Attributes::from([
            (
                "name".to_owned(),
                Attribute::new("name", Presence::Required, ValueSchema::new(ValueType::String)),
            ),
            (
                "image_pull_policy".to_owned(),
                Attribute::new(
                    "imagePullPolicy",
                    Presence::Optional,
                    ValueSchema::new(ValueType::String).with_validator(Validator::OneOf(vec![
                        "Always".to_owned(),
                        "IfNotPresent".to_owned(),
                    ])),
                ),
            ),
            (
                "args".to_owned(),
                Attribute::new(
                    "args",
                    Presence::Optional,
                    ValueSchema::new(ValueType::List(Box::new(ValueSchema::new(
                        ValueType::String,
                    )))),
                ),
            ),
            (
                "node_selector".to_owned(),
                Attribute::new(
                    "nodeSelector",
                    Presence::Optional,
                    ValueSchema::new(ValueType::Map(Box::new(ValueSchema::new(
                        ValueType::String,
                    )))),
                ),
            ),
            (
                "replicas".to_owned(),
                Attribute::new("replicas", Presence::Optional, ValueSchema::new(ValueType::Int64)),
            ),
            (
                "max_unavailable".to_owned(),
                Attribute::new("maxUnavailable", Presence::Optional, ValueSchema::dynamic()),
            ),
            (
                "status".to_owned(),
                Attribute::new("status", Presence::Computed, ValueSchema::new(ValueType::String)),
            ),
        ])
    }

    fn convert(config: Value) -> (Value, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let manifest = object(&container_schema(), &config, &AttributePath::root(), &mut diagnostics);
        (manifest, diagnostics)
    }

    #[test]
    fn renames_attributes_and_keeps_map_keys() {
        let (manifest, diagnostics) = convert(json!({
            "name": "agent",
            "image_pull_policy": "Always",
            "args": ["--mode", "ec2"],
            "node_selector": {"kubernetes.io/os": "linux", "node_type": "worker"},
            "replicas": 3,
            "max_unavailable": "25%",
        }));

        assert!(diagnostics.is_empty(), "{diagnostics}");
        assert_eq!(
            manifest,
            json!({
                "name": "agent",
                "imagePullPolicy": "Always",
                "args": ["--mode", "ec2"],
                "nodeSelector": {"kubernetes.io/os": "linux", "node_type": "worker"},
                "replicas": 3,
                "maxUnavailable": "25%",
            })
        );
    }

    #[test]
    fn drops_null_values_and_keeps_empty_collections() {
        let (manifest, diagnostics) = convert(json!({
            "name": "agent",
            "image_pull_policy": null,
            "args": [],
            "node_selector": {},
        }));

        assert!(diagnostics.is_empty(), "{diagnostics}");
        assert_eq!(
            manifest,
            json!({"name": "agent", "args": [], "nodeSelector": {}})
        );
    }

    #[test]
    fn reports_all_problems() {
        let (_, diagnostics) = convert(json!({
            "args": ["--mode", 1, null],
            "image_pull_policy": "Sometimes",
            "replicas": 1.5,
            "status": "ready",
            "unknown": true,
        }));

        let problems = diagnostics
            .iter()
            .map(|diagnostic| {
                (
                    diagnostic.summary.as_str(),
                    diagnostic
                        .path
                        .as_ref()
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                )
            })
            .collect::<Vec<_>>();

        assert_eq!(problems, [
            ("incorrect attribute value type", "args[1]".to_owned()),
            ("invalid configuration", "args[2]".to_owned()),
            ("invalid attribute value", "image_pull_policy".to_owned()),
            ("incorrect attribute value type", "replicas".to_owned()),
            ("invalid configuration", "status".to_owned()),
            ("unsupported attribute", "unknown".to_owned()),
            ("missing required attribute", "name".to_owned()),
        ]);
    }

    #[test]
    fn reports_integers_beyond_int64() {
        let (_, diagnostics) = convert(json!({"name": "agent", "replicas": u64::MAX}));

        assert_eq!(
            diagnostics.to_string(),
            "error: invalid attribute value (at replicas): integer out of range, got: 18446744073709551615"
        );
    }

    #[test]
    fn rejects_non_objects() {
        let (manifest, diagnostics) = convert(json!(["name", "agent"]));

        assert_eq!(manifest, Value::Null);
        assert_eq!(
            diagnostics.to_string(),
            "error: incorrect attribute value type: expected a value of type object, got list"
        );
    }
}
