//! Terraform-style data sources which render Kubernetes custom resources as YAML manifests.
//!
//! Each data source takes a configuration in the shape of its [`schema::Schema`], validates it,
//! stamps the `apiVersion` and `kind` of its resource and returns the manifest in the computed
//! `yaml` attribute. Nothing is sent to a cluster.
//!
//! ```
//! use k8s_manifest_provider::datasource::{CloudWatchAgentManifest, DataSource, rendered_yaml};
//! use serde_json::json;
//!
//! let data_source = CloudWatchAgentManifest::new();
//! let state = data_source
//!     .read(&json!({"metadata": {"name": "agent1", "namespace": "monitoring"}}))
//!     .into_result()
//!     .unwrap();
//!
//! assert!(rendered_yaml(&state).unwrap().starts_with("apiVersion: cloudwatch.aws.amazon.com/v1alpha1"));
//! ```

pub mod cli;
pub mod crd;
pub mod datasource;
pub mod diagnostics;
pub mod kvp;
pub mod logging;
pub mod schema;
pub mod validation;

// External re-exports
pub use k8s_openapi;
pub use kube;
pub use schemars;
// Internal re-exports
pub use k8s_manifest_shared as shared;
pub use k8s_manifest_shared::{crd::CustomResourceExt, yaml::YamlSchema};
