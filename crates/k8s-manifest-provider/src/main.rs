use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use clap::Parser;
use k8s_manifest_provider::{
    CustomResourceExt as _,
    cli::{self, Command, CrdArguments, Opts, RenderArguments, SchemaArguments},
    crd::cloudwatch_agent::v1alpha1::AmazonCloudWatchAgent,
    datasource::{CloudWatchAgentManifest, DataSource, rendered_yaml},
    diagnostics::{Diagnostics, Severity},
    logging,
};
use snafu::{OptionExt, ResultExt, Snafu};

const APP_NAME: &str = "k8s-manifest-provider";

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("failed to initialize logging"))]
    InitializeLogging { source: logging::Error },

    #[snafu(display("failed to print CRD"))]
    PrintCrd {
        source: k8s_manifest_provider::shared::crd::Error,
    },

    #[snafu(display("failed to serialize data source schema"))]
    SerializeSchema { source: serde_json::Error },

    #[snafu(display("failed to load data source configuration"))]
    LoadConfig { source: cli::Error },

    #[snafu(display("failed to render manifest"))]
    Render { source: Diagnostics },

    #[snafu(display("state does not contain a rendered manifest"))]
    MissingManifest,

    #[snafu(display("failed to serialize state"))]
    SerializeState { source: serde_json::Error },

    #[snafu(display("failed to write output to {path:?}"))]
    WriteToFile {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to write output to stdout"))]
    WriteToStdout { source: std::io::Error },
}

#[snafu::report]
fn main() -> Result<(), Error> {
    let opts = Opts::parse();

    logging::initialize_logging(
        logging::LOG_ENV,
        APP_NAME,
        opts.logging.log_directory.as_deref(),
    )
    .context(InitializeLoggingSnafu)?;

    match opts.command {
        Command::Crd(arguments) => print_crd(&arguments),
        Command::Schema(arguments) => print_schema(&arguments),
        Command::Render(arguments) => render(&arguments),
    }
}

fn print_crd(arguments: &CrdArguments) -> Result<(), Error> {
    match &arguments.output {
        Some(path) => {
            AmazonCloudWatchAgent::write_yaml_schema(path).context(PrintCrdSnafu)?;
            tracing::info!(path = %path.display(), "wrote CustomResourceDefinition");
            Ok(())
        }
        None => AmazonCloudWatchAgent::print_yaml_schema().context(PrintCrdSnafu),
    }
}

fn print_schema(arguments: &SchemaArguments) -> Result<(), Error> {
    let data_source = CloudWatchAgentManifest::new();
    let output = serde_json::json!({
        "typeName": data_source.type_name(&arguments.provider.provider_name),
        "schema": data_source.schema(),
    });

    let mut rendered = serde_json::to_string_pretty(&output).context(SerializeSchemaSnafu)?;
    rendered.push('\n');
    write_output(None, &rendered)
}

fn render(arguments: &RenderArguments) -> Result<(), Error> {
    let config = arguments.load_config().context(LoadConfigSnafu)?;
    let data_source = CloudWatchAgentManifest::new();

    tracing::info!(
        data_source = %data_source.type_name(&arguments.provider.provider_name),
        config = %arguments.config.display(),
        "reading data source"
    );

    let response = data_source.read(&config);
    for diagnostic in response.diagnostics.iter() {
        let path = diagnostic
            .path
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        match diagnostic.severity {
            Severity::Error => {
                tracing::error!(%path, detail = %diagnostic.detail, "{}", diagnostic.summary);
            }
            Severity::Warning => {
                tracing::warn!(%path, detail = %diagnostic.detail, "{}", diagnostic.summary);
            }
        }
    }

    let state = response.into_result().context(RenderSnafu)?;
    let output = if arguments.state {
        let mut state = serde_json::to_string_pretty(&state).context(SerializeStateSnafu)?;
        state.push('\n');
        state
    } else {
        rendered_yaml(&state).context(MissingManifestSnafu)?.to_owned()
    };

    write_output(arguments.output.as_deref(), &output)
}

fn write_output(path: Option<&Path>, output: &str) -> Result<(), Error> {
    match path {
        Some(path) => {
            std::fs::write(path, output).context(WriteToFileSnafu { path })?;
            tracing::info!(path = %path.display(), "wrote manifest");
            Ok(())
        }
        None => std::io::stdout()
            .lock()
            .write_all(output.as_bytes())
            .context(WriteToStdoutSnafu),
    }
}
