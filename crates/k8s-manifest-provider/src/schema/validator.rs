use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::{
    diagnostics::{AttributePath, Diagnostics},
    kvp::{Annotation, Label},
    validation,
};

const INVALID_VALUE: &str = "invalid attribute value";

/// A compiled regular expression, compared and serialized by its source.
#[derive(Clone, Debug)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A check on a configured value, run after its type has been verified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Validator {
    /// The string must be one of the listed values.
    OneOf(Vec<String>),

    /// The string must be an RFC 3339 timestamp.
    DateTime,

    /// The string must match the (unanchored) regular expression.
    Pattern(Pattern),

    /// The value must be a string or an integer within the `int32` range.
    IntOrString,

    Int64Range {
        min: Option<i64>,
        max: Option<i64>,
    },

    /// The string must be a valid object name.
    ResourceName,

    /// The string must be a valid namespace name.
    NamespaceName,

    /// Every entry of the map must be a valid label.
    Labels,

    /// Every entry of the map must be a valid annotation.
    Annotations,
}

impl Validator {
    /// Checks `value`, reporting every violation to `diagnostics`.
    ///
    /// Values of a type the validator does not apply to are ignored, type
    /// checking happens before validators run.
    pub fn validate(&self, value: &Value, path: &AttributePath, diagnostics: &mut Diagnostics) {
        match (self, value) {
            (Self::OneOf(allowed), Value::String(value)) => {
                if !allowed.contains(value) {
                    diagnostics.push_attribute_error(
                        path,
                        INVALID_VALUE,
                        format!(
                            "value must be one of: {allowed}, got: {value:?}",
                            allowed = allowed
                                .iter()
                                .map(|allowed| format!("{allowed:?}"))
                                .collect::<Vec<_>>()
                                .join(", ")
                        ),
                    );
                }
            }
            (Self::DateTime, Value::String(value)) => {
                if let Err(err) = value.parse::<jiff::Timestamp>() {
                    diagnostics.push_attribute_error(
                        path,
                        INVALID_VALUE,
                        format!("value {value:?} must be an RFC 3339 date-time: {err}"),
                    );
                }
            }
            (Self::Pattern(pattern), Value::String(value)) => {
                if !pattern.is_match(value) {
                    diagnostics.push_attribute_error(
                        path,
                        INVALID_VALUE,
                        format!(
                            "value {value:?} must match the regex {pattern:?}",
                            pattern = pattern.as_str()
                        ),
                    );
                }
            }
            (Self::IntOrString, value) => {
                let valid = match value {
                    Value::String(_) | Value::Null => true,
                    Value::Number(number) => number
                        .as_i64()
                        .is_some_and(|number| i32::try_from(number).is_ok()),
                    _ => false,
                };

                if !valid {
                    diagnostics.push_attribute_error(
                        path,
                        INVALID_VALUE,
                        format!("value must be a string or a 32-bit integer, got: {value}"),
                    );
                }
            }
            (Self::Int64Range { min, max }, Value::Number(number)) => {
                let Some(number) = number.as_i64() else {
                    return;
                };
                let below = min.is_some_and(|min| number < min);
                let above = max.is_some_and(|max| number > max);

                if below || above {
                    diagnostics.push_attribute_error(
                        path,
                        INVALID_VALUE,
                        format!(
                            "value must be in the range [{min}, {max}], got: {number}",
                            min = min.map_or_else(|| "-inf".to_owned(), |min| min.to_string()),
                            max = max.map_or_else(|| "inf".to_owned(), |max| max.to_string()),
                        ),
                    );
                }
            }
            (Self::ResourceName, Value::String(value)) => {
                if let Err(errors) = validation::validate_object_name(value) {
                    diagnostics.push_attribute_error(
                        path,
                        INVALID_VALUE,
                        format!("{value:?} is not a valid object name: {errors}"),
                    );
                }
            }
            (Self::NamespaceName, Value::String(value)) => {
                if let Err(errors) = validation::validate_namespace_name(value) {
                    diagnostics.push_attribute_error(
                        path,
                        INVALID_VALUE,
                        format!("{value:?} is not a valid namespace name: {errors}"),
                    );
                }
            }
            (Self::Labels, Value::Object(entries)) => {
                for (key, value) in entries {
                    let Some(value) = value.as_str() else {
                        continue;
                    };
                    if let Err(err) = Label::try_from((key.as_str(), value)) {
                        diagnostics.push_attribute_error(
                            &path.key(key),
                            "invalid label",
                            snafu::Report::from_error(err).to_string(),
                        );
                    }
                }
            }
            (Self::Annotations, Value::Object(entries)) => {
                for (key, value) in entries {
                    let Some(value) = value.as_str() else {
                        continue;
                    };
                    if let Err(err) = Annotation::try_from((key.as_str(), value)) {
                        diagnostics.push_attribute_error(
                            &path.key(key),
                            "invalid annotation",
                            snafu::Report::from_error(err).to_string(),
                        );
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn run(validator: Validator, value: Value) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        validator.validate(&value, &AttributePath::root().attribute("value"), &mut diagnostics);
        diagnostics
    }

    #[rstest]
    #[case(Validator::OneOf(vec!["daemonset".into(), "deployment".into()]), json!("deployment"))]
    #[case(Validator::DateTime, json!("2024-02-29T13:37:00Z"))]
    #[case(Validator::DateTime, json!("2024-02-29T13:37:00.123+02:00"))]
    #[case(Validator::Pattern(Pattern::new("^[0-9]+(ms|s|m|h)$").unwrap()), json!("30s"))]
    #[case(Validator::IntOrString, json!("25%"))]
    #[case(Validator::IntOrString, json!(-1))]
    #[case(Validator::Int64Range { min: Some(1), max: Some(100) }, json!(100))]
    #[case(Validator::Int64Range { min: Some(0), max: None }, json!(i64::MAX))]
    #[case(Validator::ResourceName, json!("cloudwatch-agent.v1"))]
    #[case(Validator::NamespaceName, json!("amazon-cloudwatch"))]
    #[case(Validator::Labels, json!({"app.kubernetes.io/name": "cloudwatch-agent", "empty": ""}))]
    #[case(Validator::Annotations, json!({"prometheus.io/scrape": "true; really"}))]
    // Validators ignore values of other types
    #[case(Validator::DateTime, json!(42))]
    #[case(Validator::Labels, json!("app=agent"))]
    fn valid(#[case] validator: Validator, #[case] value: Value) {
        let diagnostics = run(validator, value);
        assert!(diagnostics.is_empty(), "{diagnostics}");
    }

    #[rstest]
    #[case(Validator::OneOf(vec!["daemonset".into(), "deployment".into()]), json!("Deployment"))]
    #[case(Validator::DateTime, json!("yesterday"))]
    #[case(Validator::DateTime, json!("2024-02-30T13:37:00Z"))]
    #[case(Validator::Pattern(Pattern::new("^[0-9]+(ms|s|m|h)$").unwrap()), json!("30 seconds"))]
    #[case(Validator::IntOrString, json!(true))]
    #[case(Validator::IntOrString, json!(1.5))]
    #[case(Validator::IntOrString, json!(3_000_000_000_i64))]
    #[case(Validator::IntOrString, json!({"percent": 25}))]
    #[case(Validator::Int64Range { min: Some(1), max: Some(100) }, json!(0))]
    #[case(Validator::Int64Range { min: None, max: Some(65535) }, json!(65536))]
    #[case(Validator::ResourceName, json!("CloudWatch"))]
    #[case(Validator::NamespaceName, json!("amazon.cloudwatch"))]
    #[case(Validator::Labels, json!({"app": "not valid"}))]
    #[case(Validator::Annotations, json!({"-app": "value"}))]
    fn invalid(#[case] validator: Validator, #[case] value: Value) {
        let diagnostics = run(validator, value);
        assert_eq!(diagnostics.errors().count(), 1, "{diagnostics}");
    }

    #[test]
    fn reports_invalid_labels_by_key() {
        let diagnostics = run(
            Validator::Labels,
            json!({"app": "not valid", "tier": "also not valid", "ok": "fine"}),
        );

        let paths = diagnostics
            .iter()
            .filter_map(|diagnostic| diagnostic.path.as_ref())
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(paths, [r#"value["app"]"#, r#"value["tier"]"#]);
    }

    #[test]
    fn patterns_serialize_as_source() {
        let pattern = Validator::Pattern(Pattern::new("^[a-z]+$").unwrap());
        assert_eq!(
            serde_json::to_value(pattern).unwrap(),
            json!({"pattern": "^[a-z]+$"})
        );
    }

    #[test]
    fn one_of_lists_allowed_values() {
        let diagnostics = run(
            Validator::OneOf(vec!["managed".into(), "unmanaged".into()]),
            json!("ignored"),
        );

        assert_eq!(
            diagnostics.to_string(),
            r#"error: invalid attribute value (at value): value must be one of: "managed", "unmanaged", got: "ignored""#
        );
    }
}
