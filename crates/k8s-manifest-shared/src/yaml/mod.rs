//! Utility functions for processing data in the YAML file format
use std::{io::Write, path::Path};

use snafu::{ResultExt, Snafu};

type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents every error which can be encountered during YAML serialization.
#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to serialize YAML"))]
    SerializeYaml { source: serde_yaml::Error },

    #[snafu(display("failed to write YAML document separator"))]
    WriteDocumentSeparator { source: std::io::Error },

    #[snafu(display("failed to write YAML to file"))]
    WriteToFile { source: std::io::Error },

    #[snafu(display("failed to write YAML to stdout"))]
    WriteToStdout { source: std::io::Error },

    #[snafu(display("failed to parse bytes as valid UTF-8 string"))]
    ParseUtf8Bytes { source: std::string::FromUtf8Error },
}

/// Provides configurable options during YAML serialization.
///
/// The default implementation [`SerializeOptions::default()`] enables explicit document and
/// singleton map serialization, which is what printed CustomResourceDefinitions use. Rendered
/// manifests use [`SerializeOptions::manifest()`] instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Adds leading triple dashes (`---`) to the output string.
    pub explicit_document: bool,

    /// Serialize enum variants as YAML maps using the variant name as the key.
    pub singleton_map: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            explicit_document: true,
            singleton_map: true,
        }
    }
}

impl SerializeOptions {
    /// Options for a single rendered manifest: no leading document separator.
    pub fn manifest() -> Self {
        Self {
            explicit_document: false,
            ..Self::default()
        }
    }
}

/// Serializes any type `T` which is [serializable](serde::Serialize) as YAML using the provided
/// [`SerializeOptions`].
pub trait YamlSchema: Sized + serde::Serialize {
    /// Generates the YAML representation of `self` using the provided [`SerializeOptions`].
    fn generate_yaml_schema(&self, options: SerializeOptions) -> Result<String> {
        to_string(self, options)
    }

    /// Generates and writes the YAML representation of `self` to a file at `path` using the
    /// provided [`SerializeOptions`].
    fn write_yaml_schema<P: AsRef<Path>>(&self, path: P, options: SerializeOptions) -> Result<()> {
        let schema = self.generate_yaml_schema(options)?;
        std::fs::write(path, schema).context(WriteToFileSnafu)
    }

    /// Generates and prints the YAML representation of `self` to stdout using the provided
    /// [`SerializeOptions`].
    fn print_yaml_schema(&self, options: SerializeOptions) -> Result<()> {
        let schema = self.generate_yaml_schema(options)?;

        let mut writer = std::io::stdout();
        writer
            .write_all(schema.as_bytes())
            .context(WriteToStdoutSnafu)
    }
}

impl<T> YamlSchema for T where T: serde::ser::Serialize {}

/// Serializes the given data structure into an owned [`String`].
pub fn to_string<T>(value: &T, options: SerializeOptions) -> Result<String>
where
    T: serde::Serialize,
{
    let mut buffer = Vec::new();
    serialize(value, &mut buffer, options)?;

    String::from_utf8(buffer).context(ParseUtf8BytesSnafu)
}

/// Serializes the given data structure and writes it to a [`Writer`](Write).
pub fn serialize<T, W>(value: &T, mut writer: W, options: SerializeOptions) -> Result<()>
where
    T: serde::Serialize,
    W: std::io::Write,
{
    if options.explicit_document {
        writer
            .write_all(b"---\n")
            .context(WriteDocumentSeparatorSnafu)?;
    }

    let mut serializer = serde_yaml::Serializer::new(writer);

    if options.singleton_map {
        serde_yaml::with::singleton_map_recursive::serialize(value, &mut serializer)
            .context(SerializeYamlSnafu)?;
    } else {
        value
            .serialize(&mut serializer)
            .context(SerializeYamlSnafu)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use indoc::indoc;
    use rstest::rstest;

    use super::*;

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Example {
        api_version: &'static str,
        labels: BTreeMap<&'static str, &'static str>,
    }

    fn example() -> Example {
        Example {
            api_version: "v1",
            labels: BTreeMap::from([("app", "agent")]),
        }
    }

    #[rstest]
    #[case(SerializeOptions::default(), "---\napiVersion: v1\nlabels:\n  app: agent\n")]
    #[case(SerializeOptions::manifest(), "apiVersion: v1\nlabels:\n  app: agent\n")]
    fn serialize_with_options(#[case] options: SerializeOptions, #[case] expected: &str) {
        let yaml = to_string(&example(), options).unwrap();
        assert_eq!(yaml, expected);
    }

    #[test]
    fn write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("example.yaml");

        example()
            .write_yaml_schema(&path, SerializeOptions::default())
            .unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(
            written,
            indoc! {"
                ---
                apiVersion: v1
                labels:
                  app: agent
            "}
        );
    }
}
