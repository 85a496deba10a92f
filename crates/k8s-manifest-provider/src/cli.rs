//! Command line interface of the `k8s-manifest-provider` binary.
//!
//! ```
//! use clap::Parser;
//! use k8s_manifest_provider::cli::{Command, Opts};
//!
//! let opts = Opts::parse_from(["k8s-manifest-provider", "render", "--config", "agent.yaml"]);
//! assert!(matches!(opts.command, Command::Render(_)));
//! ```
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use snafu::{ResultExt, Snafu};

use crate::datasource::DEFAULT_PROVIDER_TYPE_NAME;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to read configuration file {path:?}"))]
    ReadConfig {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to parse configuration file {path:?}"))]
    ParseConfig {
        source: serde_yaml::Error,
        path: PathBuf,
    },
}

#[derive(Debug, PartialEq, Eq, Parser)]
#[command(
    name = "k8s-manifest-provider",
    author,
    version,
    about = "Renders AmazonCloudWatchAgent manifests from data source configurations"
)]
pub struct Opts {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub logging: LoggingOptions,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the CustomResourceDefinition the data source is generated from.
    Crd(CrdArguments),

    /// Print the data source schema as JSON.
    Schema(SchemaArguments),

    /// Render a manifest from a data source configuration.
    Render(RenderArguments),
}

#[derive(Debug, PartialEq, Eq, Args)]
pub struct CrdArguments {
    /// Write the CustomResourceDefinition to FILE instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq, Args)]
pub struct SchemaArguments {
    #[command(flatten)]
    pub provider: ProviderOptions,
}

#[derive(Debug, PartialEq, Eq, Args)]
pub struct RenderArguments {
    /// Path to the data source configuration, in YAML or JSON.
    #[arg(long, short = 'c', value_name = "FILE", env = "RENDER_CONFIG")]
    pub config: PathBuf,

    /// Write the rendered manifest to FILE instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", env = "RENDER_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Print the full state as JSON instead of only the rendered manifest.
    #[arg(long)]
    pub state: bool,

    #[command(flatten)]
    pub provider: ProviderOptions,
}

#[derive(Debug, PartialEq, Eq, Args)]
pub struct ProviderOptions {
    /// The provider type name used as prefix of the data source type name.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PROVIDER_TYPE_NAME, env)]
    pub provider_name: String,
}

#[derive(Debug, PartialEq, Eq, Args)]
pub struct LoggingOptions {
    /// Copy log output to rotated files in DIRECTORY.
    #[arg(
        long,
        value_name = "DIRECTORY",
        env = "K8S_MANIFEST_PROVIDER_LOG_DIRECTORY",
        global = true
    )]
    pub log_directory: Option<PathBuf>,
}

impl RenderArguments {
    /// Reads the configuration file. JSON is accepted as well, being a subset of YAML.
    pub fn load_config(&self) -> Result<Value, Error> {
        load_config(&self.config)
    }
}

pub fn load_config(path: &Path) -> Result<Value, Error> {
    let contents = std::fs::read_to_string(path).context(ReadConfigSnafu { path })?;
    serde_yaml::from_str(&contents).context(ParseConfigSnafu { path })
}
