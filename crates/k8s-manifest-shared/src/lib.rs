//! This crate contains shared helpers used by the manifest data sources in this workspace, most
//! notably YAML serialization of manifests and CustomResourceDefinitions.

pub mod crd;
pub mod yaml;
