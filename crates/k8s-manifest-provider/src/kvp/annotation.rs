//! Kubernetes annotations are key/value pairs, where the key must meet the
//! same requirements as label keys. The value can contain **any** valid UTF-8
//! data.
//!
//! See <https://kubernetes.io/docs/concepts/overview/working-with-objects/annotations/>
//! for more information on Kubernetes annotations.
use std::{convert::Infallible, fmt::Display, ops::Deref, str::FromStr};

use crate::kvp::{KeyValuePair, KeyValuePairError, Value};

/// A type alias for errors returned when an annotation fails to parse. Only
/// the key can be invalid.
pub type AnnotationError = KeyValuePairError<Infallible>;

/// A validated Kubernetes annotation.
pub type Annotation = KeyValuePair<AnnotationValue>;

/// A Kubernetes annotation value. Parsing can never fail, as [`str`] is
/// guaranteed to only contain valid UTF-8 data.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct AnnotationValue(String);

impl Value for AnnotationValue {
    type Error = Infallible;
}

impl FromStr for AnnotationValue {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self(input.to_owned()))
    }
}

impl Deref for AnnotationValue {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for AnnotationValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
