//! Data sources rendering custom resources as YAML manifests.
//!
//! A data source is read with a configuration (a JSON object using the
//! `snake_case` attribute names of its [`Schema`]) and produces a state: the
//! same configuration plus the computed attributes. No cluster is involved,
//! reading is a pure transformation.
use std::marker::PhantomData;

use convert_case::{Case, Casing};
use k8s_manifest_shared::yaml::{self, SerializeOptions};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{CustomResourceExt, Resource, core::object::HasSpec};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    crd::cloudwatch_agent::v1alpha1,
    diagnostics::{AttributePath, Diagnostics},
    schema::{
        API_VERSION_ATTRIBUTE, KIND_ATTRIBUTE, METADATA_ATTRIBUTE, SPEC_ATTRIBUTE, Schema,
        YAML_ATTRIBUTE,
    },
};

/// The type name prefix used when no provider name is configured.
pub const DEFAULT_PROVIDER_TYPE_NAME: &str = "k8s";

/// Renders `AmazonCloudWatchAgent` manifests.
pub type CloudWatchAgentManifest = ManifestDataSource<v1alpha1::AmazonCloudWatchAgent>;

pub trait DataSource {
    /// The full type name of the data source, prefixed by the type name of
    /// the provider.
    fn type_name(&self, provider_type_name: &str) -> String;

    fn schema(&self) -> &Schema;

    /// Validates `config` without producing a state.
    fn validate(&self, config: &Value) -> Diagnostics;

    fn read(&self, config: &Value) -> ReadResponse;
}

/// The outcome of [`DataSource::read`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadResponse {
    /// The new state, [`None`] if reading failed.
    pub state: Option<Value>,
    pub diagnostics: Diagnostics,
}

impl ReadResponse {
    fn failed(diagnostics: Diagnostics) -> Self {
        Self {
            state: None,
            diagnostics,
        }
    }

    /// Returns the state, or all diagnostics if an error was reported.
    pub fn into_result(self) -> Result<Value, Diagnostics> {
        match self.state {
            Some(state) if !self.diagnostics.has_error() => Ok(state),
            _ => Err(self.diagnostics),
        }
    }
}

/// The document emitted by a [`ManifestDataSource`].
///
/// Fields are serialized in declaration order, which is the conventional
/// order of Kubernetes manifests. An unset `spec` is left out entirely.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest<S> {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<S>,
}

/// A data source for the custom resource `K`.
///
/// The schema is generated once from the CRD of `K`, see
/// [`Schema::for_resource`].
pub struct ManifestDataSource<K> {
    schema: Schema,
    resource: PhantomData<fn() -> K>,
}

impl<K> Default for ManifestDataSource<K>
where
    K: CustomResourceExt + Resource<DynamicType = ()>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ManifestDataSource<K>
where
    K: CustomResourceExt + Resource<DynamicType = ()>,
{
    pub fn new() -> Self {
        Self {
            schema: Schema::for_resource::<K>(),
            resource: PhantomData,
        }
    }
}

impl<K> ManifestDataSource<K>
where
    K: CustomResourceExt + Resource<DynamicType = ()> + HasSpec,
    K::Spec: Serialize + DeserializeOwned,
{
    /// Validates `config` and decodes it into a typed [`Manifest`].
    ///
    /// The returned manifest already carries the `apiVersion` and `kind` of
    /// `K`, whatever the configuration contained.
    pub fn decode(&self, config: &Value) -> Result<Manifest<K::Spec>, Diagnostics> {
        let mut diagnostics = Diagnostics::new();
        let manifest = self.schema.to_manifest(config, &mut diagnostics);

        if diagnostics.has_error() {
            return Err(diagnostics);
        }

        let metadata = decode_field::<ObjectMeta>(&manifest, METADATA_ATTRIBUTE, &mut diagnostics);
        let spec = decode_field::<K::Spec>(&manifest, SPEC_ATTRIBUTE, &mut diagnostics);

        match metadata {
            Some(metadata) if !diagnostics.has_error() => Ok(Manifest {
                api_version: K::api_version(&()).into_owned(),
                kind: K::kind(&()).into_owned(),
                metadata,
                spec,
            }),
            _ => Err(diagnostics),
        }
    }
}

impl<K> DataSource for ManifestDataSource<K>
where
    K: CustomResourceExt + Resource<DynamicType = ()> + HasSpec,
    K::Spec: Serialize + DeserializeOwned,
{
    /// Returns names like
    /// `k8s_cloudwatch_aws_amazon_com_amazon_cloud_watch_agent_v1alpha1_manifest`.
    fn type_name(&self, provider_type_name: &str) -> String {
        format!(
            "{provider_type_name}_{group}_{kind}_{version}_manifest",
            group = K::group(&()).replace(['.', '-'], "_"),
            kind = K::kind(&()).to_case(Case::Snake),
            version = K::version(&()),
        )
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn validate(&self, config: &Value) -> Diagnostics {
        match self.decode(config) {
            Ok(_) => Diagnostics::new(),
            Err(diagnostics) => diagnostics,
        }
    }

    #[tracing::instrument(skip_all, fields(kind = %K::kind(&())))]
    fn read(&self, config: &Value) -> ReadResponse {
        let manifest = match self.decode(config) {
            Ok(manifest) => manifest,
            Err(diagnostics) => {
                tracing::debug!(
                    errors = diagnostics.errors().count(),
                    "configuration is invalid"
                );
                return ReadResponse::failed(diagnostics);
            }
        };

        let rendered = match yaml::to_string(&manifest, SerializeOptions::manifest()) {
            Ok(rendered) => rendered,
            Err(err) => {
                tracing::error!(
                    error = &err as &dyn std::error::Error,
                    "failed to marshal manifest"
                );
                let mut diagnostics = Diagnostics::new();
                diagnostics.push_error(
                    "failed to marshal manifest to YAML",
                    snafu::Report::from_error(err).to_string(),
                );
                return ReadResponse::failed(diagnostics);
            }
        };

        let mut state = config.as_object().cloned().unwrap_or_default();
        state.insert(
            API_VERSION_ATTRIBUTE.to_owned(),
            Value::String(manifest.api_version),
        );
        state.insert(KIND_ATTRIBUTE.to_owned(), Value::String(manifest.kind));
        state.insert(YAML_ATTRIBUTE.to_owned(), Value::String(rendered));

        tracing::debug!(
            name = manifest.metadata.name.as_deref().unwrap_or_default(),
            "rendered manifest"
        );

        ReadResponse {
            state: Some(Value::Object(state)),
            diagnostics: Diagnostics::new(),
        }
    }
}

/// Deserializes the manifest field `name`, [`None`] if it is not set.
fn decode_field<T>(manifest: &Value, name: &str, diagnostics: &mut Diagnostics) -> Option<T>
where
    T: DeserializeOwned,
{
    let value = manifest.as_object().and_then(|manifest| manifest.get(name))?;

    match serde_json::from_value(value.clone()) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            diagnostics.push_attribute_error(
                &AttributePath::root().attribute(name),
                "failed to decode configuration",
                err.to_string(),
            );
            None
        }
    }
}

/// Returns the rendered manifest of a state produced by [`DataSource::read`].
pub fn rendered_yaml(state: &Value) -> Option<&str> {
    state.get(YAML_ATTRIBUTE).and_then(Value::as_str)
}

#[cfg(test)]
mod test {
    use indoc::indoc;
    use serde_json::json;

    use super::*;

    fn data_source() -> CloudWatchAgentManifest {
        CloudWatchAgentManifest::new()
    }

    fn read(config: Value) -> Result<Value, Diagnostics> {
        data_source().read(&config).into_result()
    }

    #[test]
    fn type_name() {
        assert_eq!(
            data_source().type_name(DEFAULT_PROVIDER_TYPE_NAME),
            "k8s_cloudwatch_aws_amazon_com_amazon_cloud_watch_agent_v1alpha1_manifest"
        );
    }

    #[test]
    fn renders_metadata_only_manifest() {
        let state = read(json!({
            "metadata": {"name": "agent1", "namespace": "monitoring"}
        }))
        .unwrap();

        assert_eq!(rendered_yaml(&state), Some(indoc! {"
            apiVersion: cloudwatch.aws.amazon.com/v1alpha1
            kind: AmazonCloudWatchAgent
            metadata:
              name: agent1
              namespace: monitoring
        "}));
        assert_eq!(state["api_version"], "cloudwatch.aws.amazon.com/v1alpha1");
        assert_eq!(state["kind"], "AmazonCloudWatchAgent");
        assert_eq!(state["metadata"]["name"], "agent1");
    }

    #[test]
    fn overwrites_configured_api_version_and_kind() {
        let state = read(json!({
            "api_version": "v1",
            "kind": "ConfigMap",
            "metadata": {"name": "agent1"}
        }))
        .unwrap();

        assert_eq!(state["api_version"], "cloudwatch.aws.amazon.com/v1alpha1");
        assert_eq!(state["kind"], "AmazonCloudWatchAgent");

        let yaml = rendered_yaml(&state).unwrap();
        assert!(yaml.starts_with(
            "apiVersion: cloudwatch.aws.amazon.com/v1alpha1\nkind: AmazonCloudWatchAgent\n"
        ));
    }

    #[test]
    fn renders_spec_with_manifest_names() {
        let state = read(json!({
            "metadata": {
                "name": "cloudwatch-agent",
                "namespace": "amazon-cloudwatch",
                "labels": {"app.kubernetes.io/name": "cloudwatch-agent"}
            },
            "spec": {
                "mode": "daemonset",
                "image": "public.ecr.aws/cloudwatch-agent/cloudwatch-agent:1.300040.0b650",
                "service_account": "cloudwatch-agent",
                "node_selector": {"kubernetes.io/os": "linux"},
                "config": "{\"logs\":{}}",
                "env": [
                    {"name": "K8S_NODE_NAME", "value_from": {"field_ref": {"field_path": "spec.nodeName"}}}
                ],
                "resources": {"limits": {"cpu": "500m", "memory": "512Mi"}},
                "autoscaler": {"target_cpu_utilization": 80}
            }
        }))
        .unwrap();

        let manifest: Manifest<v1alpha1::AmazonCloudWatchAgentSpec> =
            serde_yaml::from_str(rendered_yaml(&state).unwrap()).unwrap();
        let spec = manifest.spec.unwrap();

        assert_eq!(spec.mode, Some(v1alpha1::Mode::DaemonSet));
        assert_eq!(spec.service_account.as_deref(), Some("cloudwatch-agent"));
        assert_eq!(
            spec.node_selector.unwrap()["kubernetes.io/os"],
            "linux".to_owned()
        );
        assert_eq!(spec.env.unwrap()[0].name, "K8S_NODE_NAME");
        assert_eq!(spec.autoscaler.unwrap().target_cpu_utilization, Some(80));

        let yaml = rendered_yaml(&state).unwrap();
        assert!(yaml.contains("serviceAccount: cloudwatch-agent"));
        assert!(yaml.contains("fieldPath: spec.nodeName"));
        assert!(yaml.contains("targetCPUUtilization: 80"));
    }

    #[test]
    fn omits_unset_fields() {
        let state = read(json!({
            "metadata": {"name": "agent1"},
            "spec": {"mode": "deployment", "replicas": null}
        }))
        .unwrap();

        assert_eq!(rendered_yaml(&state), Some(indoc! {"
            apiVersion: cloudwatch.aws.amazon.com/v1alpha1
            kind: AmazonCloudWatchAgent
            metadata:
              name: agent1
            spec:
              mode: deployment
        "}));
    }

    #[test]
    fn state_keeps_configuration() {
        let config = json!({
            "metadata": {"name": "agent1", "labels": {"team": "observability"}},
            "spec": {"replicas": 2}
        });
        let state = read(config.clone()).unwrap();

        assert_eq!(state["metadata"], config["metadata"]);
        assert_eq!(state["spec"], config["spec"]);
    }

    #[test]
    fn configured_yaml_is_rejected() {
        let diagnostics = read(json!({
            "metadata": {"name": "agent1"},
            "yaml": "kind: Pod"
        }))
        .unwrap_err();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics.to_string(),
            r#"error: invalid configuration (at yaml): "yaml" is computed and cannot be configured"#
        );
    }

    #[test]
    fn invalid_configuration_reports_paths() {
        let diagnostics = read(json!({
            "metadata": {
                "name": "Agent_1",
                "namespace": "monitoring.aws",
                "labels": {"app": "not valid"}
            },
            "spec": {
                "mode": "cronjob",
                "replicas": "two",
                "unknown_field": true
            }
        }))
        .unwrap_err();

        let mut paths = diagnostics
            .errors()
            .filter_map(|diagnostic| diagnostic.path.as_ref())
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        paths.sort();

        assert_eq!(paths, [
            r#"metadata.labels["app"]"#,
            "metadata.name",
            "metadata.namespace",
            "spec.mode",
            "spec.replicas",
            "spec.unknown_field",
        ]);
    }

    #[test]
    fn missing_metadata() {
        let diagnostics = data_source().validate(&json!({"spec": {}}));

        assert_eq!(
            diagnostics.to_string(),
            r#"error: missing required attribute (at metadata): the attribute "metadata" is required, but no definition was found"#
        );
    }

    #[test]
    fn validate_accepts_valid_configuration() {
        let diagnostics = data_source().validate(&json!({
            "metadata": {"name": "agent1", "annotations": {"owner": "Team Observability"}},
            "spec": {"management_state": "managed"}
        }));

        assert!(diagnostics.is_empty(), "{diagnostics}");
    }

    #[test]
    fn decode_stamps_identity() {
        let manifest = data_source()
            .decode(&json!({"metadata": {"name": "agent1"}}))
            .unwrap();

        assert_eq!(manifest.api_version, "cloudwatch.aws.amazon.com/v1alpha1");
        assert_eq!(manifest.kind, "AmazonCloudWatchAgent");
        assert_eq!(manifest.metadata.name.as_deref(), Some("agent1"));
        assert_eq!(manifest.spec, None);
    }
}
