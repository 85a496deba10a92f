//! The attribute schema of a manifest data source.
//!
//! The schema mirrors the OpenAPI v3 schema of a CustomResourceDefinition,
//! but uses `snake_case` attribute names the way Terraform configurations do.
//! Each [`Attribute`] remembers the field name it maps to in the manifest, so
//! a configuration can be translated back into a manifest by walking it
//! alongside the schema (see [`Schema::to_manifest`]).
//!
//! Nothing in here is written by hand per resource: [`Schema::for_resource`]
//! generates everything below `spec` from the CRD and only adds the fixed
//! top-level and `metadata` attributes.
use std::collections::BTreeMap;

use kube::{CustomResourceExt, Resource};
use serde::Serialize;

use crate::diagnostics::{AttributePath, Diagnostics};

mod builder;
mod convert;
mod validator;

pub use builder::attribute_name;
pub use validator::{Pattern, Validator};

pub const YAML_ATTRIBUTE: &str = "yaml";
pub const API_VERSION_ATTRIBUTE: &str = "api_version";
pub const KIND_ATTRIBUTE: &str = "kind";
pub const METADATA_ATTRIBUTE: &str = "metadata";
pub const SPEC_ATTRIBUTE: &str = "spec";

/// Attributes of an object, keyed by their `snake_case` name.
pub type Attributes = BTreeMap<String, Attribute>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub description: String,
    pub attributes: Attributes,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// The field name used in the rendered manifest, e.g. `nodeSelector` for
    /// the `node_selector` attribute.
    pub manifest_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub presence: Presence,

    #[serde(flatten)]
    pub value: ValueSchema,
}

/// Whether an attribute has to, may or must not be configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "snake_case")]
pub enum Presence {
    Required,
    Optional,

    /// Set by the data source only, configuring it is an error.
    Computed,

    /// May be configured, but is always overwritten by the data source.
    OptionalComputed,
}

impl Presence {
    pub fn is_required(self) -> bool {
        self == Self::Required
    }

    pub fn is_configurable(self) -> bool {
        self != Self::Computed
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValueSchema {
    #[serde(rename = "type")]
    pub ty: ValueType,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl ValueSchema {
    pub fn new(ty: ValueType) -> Self {
        Self {
            ty,
            validators: Vec::new(),
        }
    }

    pub fn dynamic() -> Self {
        Self::new(ValueType::Dynamic)
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueType {
    String,
    Int64,
    Float64,
    Bool,

    /// Any value is accepted and passed through unchanged, e.g. for
    /// int-or-string fields.
    Dynamic,

    List(Box<ValueSchema>),

    /// A map with arbitrary keys. Keys are never renamed.
    Map(Box<ValueSchema>),

    Object(Attributes),
}

impl ValueType {
    /// A short human readable name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int64 => "integer",
            Self::Float64 => "number",
            Self::Bool => "bool",
            Self::Dynamic => "dynamic",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Object(_) => "object",
        }
    }
}

impl Attribute {
    pub fn new(manifest_name: impl Into<String>, presence: Presence, value: ValueSchema) -> Self {
        Self {
            manifest_name: manifest_name.into(),
            description: None,
            presence,
            value,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Schema {
    /// Generates the data source schema of the custom resource `K`.
    ///
    /// The `spec` attribute is derived from the `spec` property of the
    /// OpenAPI schema of the CRD version matching `K`.
    pub fn for_resource<K>() -> Self
    where
        K: CustomResourceExt + Resource<DynamicType = ()>,
    {
        let crd = K::crd();
        let version = K::version(&());
        let kind = K::kind(&());

        let spec_schema = crd
            .spec
            .versions
            .iter()
            .find(|crd_version| crd_version.name == version)
            .and_then(|crd_version| crd_version.schema.as_ref())
            .and_then(|validation| validation.open_api_v3_schema.as_ref())
            .and_then(|root| root.properties.as_ref())
            .and_then(|properties| properties.get(SPEC_ATTRIBUTE));

        let spec = match spec_schema {
            Some(spec_schema) => {
                let attribute = Attribute::new(
                    SPEC_ATTRIBUTE,
                    Presence::Optional,
                    builder::value_schema(spec_schema),
                );
                match &spec_schema.description {
                    Some(description) => attribute.with_description(description),
                    None => attribute,
                }
            }
            None => {
                tracing::warn!(
                    crd.name = K::crd_name(),
                    crd.version = %version,
                    "CRD has no spec schema, accepting any spec"
                );
                Attribute::new(SPEC_ATTRIBUTE, Presence::Optional, ValueSchema::dynamic())
            }
        };

        let attributes = Attributes::from([
            (
                YAML_ATTRIBUTE.to_owned(),
                Attribute::new(
                    YAML_ATTRIBUTE,
                    Presence::Computed,
                    ValueSchema::new(ValueType::String),
                )
                .with_description("The generated manifest in YAML format."),
            ),
            (
                API_VERSION_ATTRIBUTE.to_owned(),
                Attribute::new(
                    "apiVersion",
                    Presence::OptionalComputed,
                    ValueSchema::new(ValueType::String),
                )
                .with_description(format!(
                    "The API group and version of the resource, always '{api_version}'.",
                    api_version = K::api_version(&())
                )),
            ),
            (
                KIND_ATTRIBUTE.to_owned(),
                Attribute::new(
                    KIND_ATTRIBUTE,
                    Presence::OptionalComputed,
                    ValueSchema::new(ValueType::String),
                )
                .with_description(format!("The kind of the resource, always '{kind}'.")),
            ),
            (METADATA_ATTRIBUTE.to_owned(), metadata_attribute()),
            (SPEC_ATTRIBUTE.to_owned(), spec),
        ]);

        Self {
            description: format!(
                "Creates a YAML manifest for a {kind} ({api_version}) without talking to a cluster.",
                api_version = K::api_version(&())
            ),
            attributes,
        }
    }

    /// Looks up the attribute at the given `snake_case` path, e.g.
    /// `["spec", "target_allocator", "enabled"]`. List and map elements are
    /// stepped through transparently.
    pub fn attribute(&self, path: &[&str]) -> Option<&Attribute> {
        let (first, rest) = path.split_first()?;
        let mut attribute = self.attributes.get(*first)?;

        for name in rest {
            attribute = object_attributes(&attribute.value)?.get(*name)?;
        }

        Some(attribute)
    }

    /// Validates `config` against the schema and translates it into the
    /// manifest representation.
    ///
    /// Attribute names are replaced by their manifest names and `null` values
    /// are dropped. Problems are reported to `diagnostics`, the returned value
    /// must not be used if any error was reported.
    pub fn to_manifest(
        &self,
        config: &serde_json::Value,
        diagnostics: &mut Diagnostics,
    ) -> serde_json::Value {
        convert::object(&self.attributes, config, &AttributePath::root(), diagnostics)
    }
}

fn object_attributes(value: &ValueSchema) -> Option<&Attributes> {
    match &value.ty {
        ValueType::Object(attributes) => Some(attributes),
        ValueType::List(element) | ValueType::Map(element) => object_attributes(element),
        _ => None,
    }
}

fn metadata_attribute() -> Attribute {
    let attributes = Attributes::from([
        (
            "name".to_owned(),
            Attribute::new(
                "name",
                Presence::Required,
                ValueSchema::new(ValueType::String).with_validator(Validator::ResourceName),
            )
            .with_description(
                "Unique identifier for this object. Must be a lowercase RFC 1123 subdomain.",
            ),
        ),
        (
            "namespace".to_owned(),
            Attribute::new(
                "namespace",
                Presence::Optional,
                ValueSchema::new(ValueType::String).with_validator(Validator::NamespaceName),
            )
            .with_description("The namespace of this object. Must be a lowercase RFC 1123 label."),
        ),
        (
            "labels".to_owned(),
            Attribute::new(
                "labels",
                Presence::Optional,
                ValueSchema::new(ValueType::Map(Box::new(ValueSchema::new(ValueType::String))))
                    .with_validator(Validator::Labels),
            )
            .with_description(
                "Map of string keys and values that can be used to organize and categorize objects.",
            ),
        ),
        (
            "annotations".to_owned(),
            Attribute::new(
                "annotations",
                Presence::Optional,
                ValueSchema::new(ValueType::Map(Box::new(ValueSchema::new(ValueType::String))))
                    .with_validator(Validator::Annotations),
            )
            .with_description(
                "Unstructured key value map stored with a resource that may be set by external tools.",
            ),
        ),
    ]);

    Attribute::new(
        METADATA_ATTRIBUTE,
        Presence::Required,
        ValueSchema::new(ValueType::Object(attributes)),
    )
    .with_description("Data that helps uniquely identify the object.")
}
