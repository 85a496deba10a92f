//! Types to validate Kubernetes key/value pairs, like labels and annotations.
use std::{
    fmt::{Debug, Display},
    ops::Deref,
    str::FromStr,
};

use snafu::{ResultExt, Snafu};

mod annotation;
mod key;
mod label;

pub use annotation::{Annotation, AnnotationError, AnnotationValue};
pub use key::*;
pub use label::{Label, LabelError, LabelValue, LabelValueError};

/// The error type for key/value pair parsing/validating operations.
#[derive(Debug, PartialEq, Snafu)]
pub enum KeyValuePairError<E>
where
    E: std::error::Error + 'static,
{
    /// Indicates that the key failed to parse. See [`KeyError`] for more
    /// information about the error causes.
    #[snafu(display("failed to parse key {key:?} of key/value pair"))]
    InvalidKey { source: KeyError, key: String },

    /// Indicates that the value failed to parse.
    #[snafu(display("failed to parse value {value:?} for key {key:?}", key = key.to_string()))]
    InvalidValue { source: E, key: Key, value: String },
}

/// The value half of a [`KeyValuePair`]. Implementors carry their own
/// validation in [`FromStr`].
pub trait Value:
    Deref<Target = str> + FromStr<Err = Self::Error> + Clone + Display + Eq + Ord
{
    type Error: std::error::Error + 'static;
}

/// A validated Kubernetes key/value pair, parsed from a `(str, str)` tuple.
///
/// [`Label`] and [`Annotation`] are the two instantiations used for object
/// metadata.
///
/// - <https://kubernetes.io/docs/concepts/overview/working-with-objects/labels/>
/// - <https://kubernetes.io/docs/concepts/overview/working-with-objects/annotations/>
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyValuePair<V>
where
    V: Value,
{
    pub key: Key,
    pub value: V,
}

impl<V> TryFrom<(&str, &str)> for KeyValuePair<V>
where
    V: Value,
{
    type Error = KeyValuePairError<<V as Value>::Error>;

    fn try_from((key, value): (&str, &str)) -> Result<Self, Self::Error> {
        let key = Key::from_str(key).context(InvalidKeySnafu { key })?;
        let value = V::from_str(value).context(InvalidValueSnafu {
            key: key.clone(),
            value,
        })?;
        Ok(Self { key, value })
    }
}

impl<V: Value> Display for KeyValuePair<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl<V: Value + Debug> Debug for KeyValuePair<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {:?}", self.key, self.value)
    }
}
