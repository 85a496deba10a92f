//! Custom resources a manifest data source can be generated for.
//!
//! Each resource lives in its own module with one submodule per API version,
//! e.g. [`cloudwatch_agent::v1alpha1::AmazonCloudWatchAgent`].

pub mod cloudwatch_agent;
