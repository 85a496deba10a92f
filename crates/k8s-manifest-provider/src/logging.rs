use std::{
    io::{Sink, sink},
    path::{Path, PathBuf},
};

use snafu::{ResultExt, Snafu};
use tracing_appender::rolling::{InitError, RollingFileAppender};
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{
        MakeWriter,
        writer::{EitherWriter, MakeWriterExt as _},
    },
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// The environment variable controlling the log filter.
pub const LOG_ENV: &str = "K8S_MANIFEST_PROVIDER_LOG";

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to parse log filter from {env:?}"))]
    ParseFilter {
        source: tracing_subscriber::filter::ParseError,
        env: String,
    },

    #[snafu(display("failed to initialize rolling file appender in {directory:?}"))]
    InitializeFileAppender { source: InitError, directory: PathBuf },

    #[snafu(display("failed to install global tracing subscriber"))]
    InstallSubscriber { source: TryInitError },
}

/// Initializes `tracing` logging with the filter from the environment variable `env`.
///
/// If `env` is not set, the maximum log level is INFO. Logs are written to stderr, stdout is
/// reserved for rendered output.
///
/// Log output is copied to rotated files in `log_directory` if it is set.
pub fn initialize_logging(
    env: &str,
    app_name: &str,
    log_directory: Option<&Path>,
) -> Result<(), Error> {
    let filter = match std::env::var(env) {
        Ok(directives) => EnvFilter::try_new(directives).context(ParseFilterSnafu { env })?,
        Err(_) => EnvFilter::new(tracing::Level::INFO.to_string()),
    };

    let file_appender = log_directory
        .map(|directory| {
            RollingFileAppender::builder()
                .filename_suffix(format!("{app_name}.log"))
                .max_log_files(6)
                .build(directory)
                .context(InitializeFileAppenderSnafu { directory })
        })
        .transpose()?;

    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr.and(OptionalMakeWriter::from(file_appender)));
    Registry::default()
        .with(filter)
        .with(fmt)
        .try_init()
        .context(InstallSubscriberSnafu)?;

    // need to delay logging until after tracing is initialized
    match log_directory {
        Some(dir) => tracing::info!(directory = %dir.display(), "file logging enabled"),
        None => tracing::debug!("file logging disabled, because no log directory set"),
    }

    Ok(())
}

/// Like [`EitherWriter`] but implements [`MakeWriter`] instead of [`std::io::Write`].
/// For selecting writers depending on dynamic configuration.
enum EitherMakeWriter<A, B> {
    A(A),
    B(B),
}

impl<'a, A, B> MakeWriter<'a> for EitherMakeWriter<A, B>
where
    A: MakeWriter<'a>,
    B: MakeWriter<'a>,
{
    type Writer = EitherWriter<A::Writer, B::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        match self {
            Self::A(a) => EitherWriter::A(a.make_writer()),
            Self::B(b) => EitherWriter::B(b.make_writer()),
        }
    }

    fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
        match self {
            Self::A(a) => EitherWriter::A(a.make_writer_for(meta)),
            Self::B(b) => EitherWriter::B(b.make_writer_for(meta)),
        }
    }
}

type OptionalMakeWriter<T> = EitherMakeWriter<T, fn() -> Sink>;

impl<T> From<Option<T>> for OptionalMakeWriter<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(t) => Self::A(t),
            None => Self::B(sink),
        }
    }
}
