//! Kubernetes labels are key/value pairs whose value may only contain a
//! limited set of ASCII characters.
//!
//! See <https://kubernetes.io/docs/concepts/overview/working-with-objects/labels/>
//! for more information on Kubernetes labels.
use std::{
    fmt::{Debug, Display},
    ops::Deref,
    str::FromStr,
    sync::LazyLock,
};

use regex::Regex;
use snafu::{Snafu, ensure};

use crate::kvp::{KeyValuePair, KeyValuePairError, Value};

const LABEL_VALUE_MAX_LEN: usize = 63;

// Lazily initialized regular expressions
static LABEL_VALUE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9A-Z]([a-z0-9A-Z-_.]*[a-z0-9A-Z])?$")
        .expect("failed to compile value regex")
});

/// A type alias for errors returned when a label fails to parse.
pub type LabelError = KeyValuePairError<LabelValueError>;

/// A validated Kubernetes label.
///
/// ```
/// # use k8s_manifest_provider::kvp::Label;
/// let label = Label::try_from(("app.kubernetes.io/name", "cloudwatch-agent")).unwrap();
/// assert_eq!(label.to_string(), "app.kubernetes.io/name=cloudwatch-agent");
/// ```
pub type Label = KeyValuePair<LabelValue>;

/// The error type for label value parse/validation operations.
#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum LabelValueError {
    #[snafu(display(
        "value exceeds the maximum length - expected 63 characters or less, got {length}"
    ))]
    ValueTooLong { length: usize },

    #[snafu(display("value contains non-ascii characters"))]
    ValueNotAscii,

    #[snafu(display("value violates kubernetes format"))]
    ValueInvalid,
}

/// A validated Kubernetes label value.
///
/// Instances of this struct are always valid. The value may be empty.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LabelValue(String);

impl Debug for LabelValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Value for LabelValue {
    type Error = LabelValueError;
}

impl FromStr for LabelValue {
    type Err = LabelValueError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        ensure!(
            input.len() <= LABEL_VALUE_MAX_LEN,
            ValueTooLongSnafu {
                length: input.len()
            }
        );
        ensure!(input.is_ascii(), ValueNotAsciiSnafu);
        ensure!(
            input.is_empty() || LABEL_VALUE_REGEX.is_match(input),
            ValueInvalidSnafu
        );

        Ok(Self(input.to_owned()))
    }
}

impl Deref for LabelValue {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for LabelValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
