//! Translates the OpenAPI v3 schema of a CRD into [`ValueSchema`]s.
use std::collections::BTreeSet;

use convert_case::{Case, Casing};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    JSON, JSONSchemaProps, JSONSchemaPropsOrArray, JSONSchemaPropsOrBool,
};

use super::{Attribute, Attributes, Pattern, Presence, ValueSchema, ValueType, Validator};

const FORMAT_DATE_TIME: &str = "date-time";

/// Returns the range of integer formats narrower than `int64`.
fn format_range(format: Option<&str>) -> (Option<i64>, Option<i64>) {
    match format {
        Some("int8") => (Some(i8::MIN.into()), Some(i8::MAX.into())),
        Some("int16") => (Some(i16::MIN.into()), Some(i16::MAX.into())),
        Some("int32") => (Some(i32::MIN.into()), Some(i32::MAX.into())),
        Some("uint8") => (Some(0), Some(u8::MAX.into())),
        Some("uint16") => (Some(0), Some(u16::MAX.into())),
        Some("uint32") => (Some(0), Some(u32::MAX.into())),
        Some("uint" | "uint64") => (Some(0), None),
        _ => (None, None),
    }
}

/// Returns the `snake_case` attribute name of a manifest field name.
///
/// ```
/// use k8s_manifest_provider::schema::attribute_name;
///
/// assert_eq!(attribute_name("nodeSelector"), "node_selector");
/// assert_eq!(attribute_name("targetCPUUtilization"), "target_cpu_utilization");
/// ```
pub fn attribute_name(manifest_name: &str) -> String {
    manifest_name.to_case(Case::Snake)
}

pub(super) fn value_schema(props: &JSONSchemaProps) -> ValueSchema {
    let mut validators = Vec::new();

    if let Some(values) = &props.enum_ {
        // Optional enums list `null` as an allowed value, which has no
        // representation in a configuration.
        let values = values
            .iter()
            .filter_map(|JSON(value)| value.as_str())
            .map(ToOwned::to_owned)
            .collect::<Vec<_>>();

        if !values.is_empty() {
            validators.push(Validator::OneOf(values));
        }
    }

    if props.x_kubernetes_int_or_string == Some(true) {
        validators.push(Validator::IntOrString);
        return ValueSchema {
            ty: ValueType::Dynamic,
            validators,
        };
    }

    if props.x_kubernetes_preserve_unknown_fields == Some(true) {
        return ValueSchema {
            ty: ValueType::Dynamic,
            validators,
        };
    }

    let ty = match props.type_.as_deref() {
        Some("string") => {
            if props.format.as_deref() == Some(FORMAT_DATE_TIME) {
                validators.push(Validator::DateTime);
            }
            if let Some(pattern) = &props.pattern {
                match Pattern::new(pattern) {
                    Ok(pattern) => validators.push(Validator::Pattern(pattern)),
                    Err(err) => tracing::warn!(
                        %pattern,
                        error = &err as &dyn std::error::Error,
                        "skipping invalid pattern"
                    ),
                }
            }
            ValueType::String
        }
        Some("integer") => {
            let (format_min, format_max) = format_range(props.format.as_deref());
            let min = props.minimum.map(|min| min.ceil() as i64);
            let max = props.maximum.map(|max| max.floor() as i64);

            // The tighter of both bounds wins
            let min = min.max(format_min);
            let max = match (max, format_max) {
                (Some(max), Some(format_max)) => Some(max.min(format_max)),
                (max, format_max) => max.or(format_max),
            };

            if min.is_some() || max.is_some() {
                validators.push(Validator::Int64Range { min, max });
            }
            ValueType::Int64
        }
        Some("number") => ValueType::Float64,
        Some("boolean") => ValueType::Bool,
        Some("array") => {
            let element = match &props.items {
                Some(JSONSchemaPropsOrArray::Schema(items)) => value_schema(items),
                // Tuple schemas are not used by Kubernetes types
                Some(JSONSchemaPropsOrArray::Schemas(_)) | None => ValueSchema::dynamic(),
            };
            ValueType::List(Box::new(element))
        }
        Some("object") | None => object_type(props),
        Some(other) => {
            tracing::warn!(
                schema.openapi_type = other,
                "unknown OpenAPI type, accepting any value"
            );
            ValueType::Dynamic
        }
    };

    ValueSchema { ty, validators }
}

fn object_type(props: &JSONSchemaProps) -> ValueType {
    if props
        .properties
        .as_ref()
        .is_some_and(|properties| !properties.is_empty())
    {
        return ValueType::Object(attributes(props));
    }

    match &props.additional_properties {
        Some(JSONSchemaPropsOrBool::Schema(values)) => {
            ValueType::Map(Box::new(value_schema(values)))
        }
        Some(JSONSchemaPropsOrBool::Bool(true)) => {
            ValueType::Map(Box::new(ValueSchema::dynamic()))
        }
        // Free-form objects
        Some(JSONSchemaPropsOrBool::Bool(false)) | None => ValueType::Dynamic,
    }
}

fn attributes(props: &JSONSchemaProps) -> Attributes {
    let required = props
        .required
        .iter()
        .flatten()
        .map(String::as_str)
        .collect::<BTreeSet<_>>();

    let mut attributes = Attributes::new();

    for (manifest_name, property) in props.properties.iter().flatten() {
        let name = attribute_name(manifest_name);

        if let Some(existing) = attributes.get(&name) {
            tracing::warn!(
                attribute.name = %name,
                attribute.manifest_name = %manifest_name,
                attribute.existing_manifest_name = %existing.manifest_name,
                "attribute name collides with another field, skipping field"
            );
            continue;
        }

        let presence = if required.contains(manifest_name.as_str()) {
            Presence::Required
        } else {
            Presence::Optional
        };

        attributes.insert(name, Attribute {
            manifest_name: manifest_name.clone(),
            description: property.description.clone(),
            presence,
            value: value_schema(property),
        });
    }

    attributes
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use rstest::rstest;

    use super::*;

    fn string() -> JSONSchemaProps {
        JSONSchemaProps {
            type_: Some("string".to_owned()),
            ..Default::default()
        }
    }

    #[rstest]
    #[case("nodeSelector", "node_selector")]
    #[case("targetCPUUtilization", "target_cpu_utilization")]
    #[case("prometheusCR", "prometheus_cr")]
    #[case("DisablePrometheusAnnotations", "disable_prometheus_annotations")]
    #[case("configmaps", "configmaps")]
    #[case("name", "name")]
    fn snake_case_names(#[case] manifest_name: &str, #[case] expected: &str) {
        assert_eq!(attribute_name(manifest_name), expected);
    }

    #[test]
    fn nullable_enum() {
        let props = JSONSchemaProps {
            enum_: Some(vec![
                JSON(serde_json::json!("managed")),
                JSON(serde_json::json!("unmanaged")),
                JSON(serde_json::Value::Null),
            ]),
            nullable: Some(true),
            ..string()
        };

        assert_eq!(
            value_schema(&props),
            ValueSchema::new(ValueType::String).with_validator(Validator::OneOf(vec![
                "managed".to_owned(),
                "unmanaged".to_owned()
            ]))
        );
    }

    #[test]
    fn int_or_string() {
        let props = JSONSchemaProps {
            x_kubernetes_int_or_string: Some(true),
            ..Default::default()
        };

        assert_eq!(
            value_schema(&props),
            ValueSchema::dynamic().with_validator(Validator::IntOrString)
        );
    }

    #[test]
    fn preserve_unknown_fields() {
        let props = JSONSchemaProps {
            type_: Some("object".to_owned()),
            x_kubernetes_preserve_unknown_fields: Some(true),
            ..Default::default()
        };

        assert_eq!(value_schema(&props), ValueSchema::dynamic());
    }

    #[rstest]
    #[case(Some("int32"), Some(0.0), None, Some(0), Some(i32::MAX.into()))]
    #[case(Some("int32"), None, None, Some(i32::MIN.into()), Some(i32::MAX.into()))]
    #[case(Some("int32"), Some(1.0), Some(100.0), Some(1), Some(100))]
    #[case(Some("uint16"), None, Some(1e9), Some(0), Some(u16::MAX.into()))]
    #[case(Some("int64"), None, Some(65535.0), None, Some(65535))]
    fn integer_range(
        #[case] format: Option<&str>,
        #[case] minimum: Option<f64>,
        #[case] maximum: Option<f64>,
        #[case] min: Option<i64>,
        #[case] max: Option<i64>,
    ) {
        let props = JSONSchemaProps {
            type_: Some("integer".to_owned()),
            format: format.map(ToOwned::to_owned),
            minimum,
            maximum,
            ..Default::default()
        };

        assert_eq!(
            value_schema(&props),
            ValueSchema::new(ValueType::Int64).with_validator(Validator::Int64Range { min, max })
        );
    }

    #[test]
    fn unbounded_integer() {
        let props = JSONSchemaProps {
            type_: Some("integer".to_owned()),
            format: Some("int64".to_owned()),
            ..Default::default()
        };

        assert_eq!(value_schema(&props), ValueSchema::new(ValueType::Int64));
    }

    #[rstest]
    #[case(None, ValueType::Dynamic)]
    #[case(Some(JSONSchemaPropsOrBool::Bool(true)), ValueType::Map(Box::new(ValueSchema::dynamic())))]
    #[case(
        Some(JSONSchemaPropsOrBool::Schema(Box::new(string()))),
        ValueType::Map(Box::new(ValueSchema::new(ValueType::String)))
    )]
    fn objects_without_properties(
        #[case] additional_properties: Option<JSONSchemaPropsOrBool>,
        #[case] expected: ValueType,
    ) {
        let props = JSONSchemaProps {
            type_: Some("object".to_owned()),
            additional_properties,
            ..Default::default()
        };

        assert_eq!(value_schema(&props).ty, expected);
    }

    #[test]
    fn object_properties() {
        let props = JSONSchemaProps {
            type_: Some("object".to_owned()),
            required: Some(vec!["mountPath".to_owned()]),
            properties: Some(BTreeMap::from([
                ("mountPath".to_owned(), string()),
                ("readOnly".to_owned(), JSONSchemaProps {
                    type_: Some("boolean".to_owned()),
                    description: Some("Mounted read-only if true.".to_owned()),
                    ..Default::default()
                }),
            ])),
            ..Default::default()
        };

        let ValueType::Object(attributes) = value_schema(&props).ty else {
            panic!("expected an object type");
        };

        assert_eq!(
            attributes["mount_path"],
            Attribute::new(
                "mountPath",
                Presence::Required,
                ValueSchema::new(ValueType::String)
            )
        );
        assert_eq!(
            attributes["read_only"],
            Attribute::new("readOnly", Presence::Optional, ValueSchema::new(ValueType::Bool))
                .with_description("Mounted read-only if true.")
        );
    }

    #[test]
    fn colliding_names_keep_first_field() {
        let props = JSONSchemaProps {
            type_: Some("object".to_owned()),
            properties: Some(BTreeMap::from([
                ("hostIP".to_owned(), string()),
                ("hostIp".to_owned(), JSONSchemaProps {
                    type_: Some("integer".to_owned()),
                    ..Default::default()
                }),
            ])),
            ..Default::default()
        };

        let ValueType::Object(attributes) = value_schema(&props).ty else {
            panic!("expected an object type");
        };

        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes["host_ip"].manifest_name, "hostIP");
    }

    #[test]
    fn date_time_and_pattern() {
        let date_time = JSONSchemaProps {
            format: Some("date-time".to_owned()),
            ..string()
        };
        assert_eq!(value_schema(&date_time).validators, [Validator::DateTime]);

        let pattern = JSONSchemaProps {
            pattern: Some("^[0-9]+[smh]$".to_owned()),
            ..string()
        };
        assert_eq!(value_schema(&pattern).validators, [Validator::Pattern(
            Pattern::new("^[0-9]+[smh]$").unwrap()
        )]);

        let invalid = JSONSchemaProps {
            pattern: Some("^[0-9+$".to_owned()),
            ..string()
        };
        assert!(value_schema(&invalid).validators.is_empty());
    }
}
