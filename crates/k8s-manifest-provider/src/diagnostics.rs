//! Diagnostics reported back to the caller of a data source.
//!
//! A [`Diagnostic`] mirrors what a Terraform provider returns: a severity, a
//! short summary, a longer detail and optionally the [`AttributePath`] of the
//! configuration value it is about.
use std::fmt::{Display, Write as _};

use serde::Serialize;

/// A single step into a nested configuration value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PathStep {
    /// Selects a named attribute of an object.
    Attribute(String),

    /// Selects an element of a list by its index.
    ElementKeyInt(usize),

    /// Selects an element of a map by its key.
    ElementKeyString(String),
}

/// The location of a value inside a configuration, e.g. `spec.env[0].name`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AttributePath(Vec<PathStep>);

impl AttributePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: impl Into<String>) -> Self {
        self.with_step(PathStep::Attribute(name.into()))
    }

    pub fn index(&self, index: usize) -> Self {
        self.with_step(PathStep::ElementKeyInt(index))
    }

    pub fn key(&self, key: impl Into<String>) -> Self {
        self.with_step(PathStep::ElementKeyString(key.into()))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    fn with_step(&self, step: PathStep) -> Self {
        let mut steps = self.0.clone();
        steps.push(step);
        Self(steps)
    }
}

impl Display for AttributePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if i == 0 => f.write_str(name)?,
                PathStep::Attribute(name) => write!(f, ".{name}")?,
                PathStep::ElementKeyInt(index) => write!(f, "[{index}]")?,
                PathStep::ElementKeyString(key) => write!(f, "[{key:?}]")?,
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<AttributePath>,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.summary)?;

        if let Some(path) = self.path.as_ref().filter(|path| !path.is_root()) {
            write!(f, " (at {path})")?;
        }

        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }

        Ok(())
    }
}

/// An ordered collection of [`Diagnostic`]s.
///
/// Reading or validating a configuration never stops at the first problem,
/// all findings are collected and reported together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn push_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Diagnostic {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            path: None,
        });
    }

    pub fn push_attribute_error(
        &mut self,
        path: &AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.push(Diagnostic {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            path: Some(path.clone()),
        });
    }

    pub fn push_attribute_warning(
        &mut self,
        path: &AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.push(Diagnostic {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
            path: Some(path.clone()),
        });
    }

    pub fn has_error(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, diagnostic) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(AttributePath::root(), "")]
    #[case(AttributePath::root().attribute("metadata").attribute("name"), "metadata.name")]
    #[case(AttributePath::root().attribute("spec").attribute("env").index(0).attribute("name"), "spec.env[0].name")]
    #[case(AttributePath::root().attribute("metadata").attribute("labels").key("app"), r#"metadata.labels["app"]"#)]
    fn display_path(#[case] path: AttributePath, #[case] expected: &str) {
        assert_eq!(path.to_string(), expected);
    }

    #[test]
    fn errors_and_warnings() {
        let path = AttributePath::root().attribute("spec");
        let mut diagnostics = Diagnostics::new();
        diagnostics.push_attribute_warning(&path, "deprecated attribute", "");
        assert!(!diagnostics.has_error());

        diagnostics.push_error("failed to marshal manifest to YAML", "boom");
        assert!(diagnostics.has_error());
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics.errors().count(), 1);

        assert_eq!(
            diagnostics.to_string(),
            "warning: deprecated attribute (at spec)\nerror: failed to marshal manifest to YAML: boom"
        );
    }
}
