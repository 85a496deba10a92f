use std::{fmt::Display, ops::Deref, str::FromStr, sync::LazyLock};

use regex::Regex;
use snafu::{ResultExt, Snafu, ensure};

const KEY_PREFIX_MAX_LEN: usize = 253;
const KEY_NAME_MAX_LEN: usize = 63;

// Lazily initialized regular expressions
static KEY_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("failed to compile key prefix regex")
});

static KEY_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9A-Z]([a-z0-9A-Z-_.]*[a-z0-9A-Z])?$")
        .expect("failed to compile key name regex")
});

/// The error type for key parsing/validation operations.
#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum KeyError {
    /// The key must at least contain a name, the prefix is optional.
    #[snafu(display("key input cannot be empty"))]
    EmptyInput,

    /// Keys only contain one prefix like `app.kubernetes.io/name`, never
    /// `app.kubernetes.io/nested/name`.
    #[snafu(display("key prefixes cannot be nested, only use a single slash"))]
    NestedPrefix,

    #[snafu(display("failed to parse key prefix"))]
    KeyPrefixError { source: KeyPrefixError },

    #[snafu(display("failed to parse key name"))]
    KeyNameError { source: KeyNameError },
}

/// The key of a label or annotation. It contains an optional prefix, and a
/// required name.
///
/// The general format is `(<PREFIX>/)<NAME>`. The Kubernetes documentation
/// defines the format and allowed characters in more detail [here][k8s-labels].
/// A [`Key`] is always validated.
///
/// ```
/// use std::str::FromStr;
/// use k8s_manifest_provider::kvp::Key;
///
/// let key = Key::from_str("app.kubernetes.io/component").unwrap();
///
/// assert_eq!(key.prefix().map(|prefix| &**prefix), Some("app.kubernetes.io"));
/// assert_eq!(&**key.name(), "component");
/// ```
///
/// [k8s-labels]: https://kubernetes.io/docs/concepts/overview/working-with-objects/labels/
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Key {
    prefix: Option<KeyPrefix>,
    name: KeyName,
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        ensure!(!input.is_empty(), EmptyInputSnafu);

        let (prefix, name) = match input.split('/').collect::<Vec<_>>()[..] {
            [name] => (None, name),
            [prefix, name] => (Some(prefix), name),
            _ => return NestedPrefixSnafu.fail(),
        };

        Ok(Self {
            prefix: prefix
                .map(KeyPrefix::from_str)
                .transpose()
                .context(KeyPrefixSnafu)?,
            name: KeyName::from_str(name).context(KeyNameSnafu)?,
        })
    }
}

impl TryFrom<&str> for Key {
    type Error = KeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{}/{}", prefix, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl Key {
    pub fn prefix(&self) -> Option<&KeyPrefix> {
        self.prefix.as_ref()
    }

    pub fn name(&self) -> &KeyName {
        &self.name
    }
}

/// The error type for key prefix parsing/validation operations.
#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum KeyPrefixError {
    /// A slash without a prefix in front of it, like `/name`.
    #[snafu(display("prefix segment of key cannot be empty"))]
    PrefixEmpty,

    #[snafu(display(
        "prefix segment of key exceeds the maximum length - expected 253 characters or less, got {length}"
    ))]
    PrefixTooLong { length: usize },

    #[snafu(display("prefix segment of key contains non-ascii characters"))]
    PrefixNotAscii,

    /// The prefix must be a lowercase DNS subdomain.
    #[snafu(display("prefix segment of key violates kubernetes format"))]
    PrefixInvalid,
}

/// A validated optional prefix segment of a key, like `app.kubernetes.io`.
///
/// Instances of this struct are always valid. [`KeyPrefix`] implements
/// [`Deref`], which enables read-only access to the inner value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyPrefix(String);

impl FromStr for KeyPrefix {
    type Err = KeyPrefixError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        ensure!(!input.is_empty(), PrefixEmptySnafu);
        ensure!(
            input.len() <= KEY_PREFIX_MAX_LEN,
            PrefixTooLongSnafu {
                length: input.len()
            }
        );
        ensure!(input.is_ascii(), PrefixNotAsciiSnafu);
        ensure!(KEY_PREFIX_REGEX.is_match(input), PrefixInvalidSnafu);

        Ok(Self(input.to_owned()))
    }
}

impl Deref for KeyPrefix {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for KeyPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The error type for key name parsing/validation operations.
#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum KeyNameError {
    #[snafu(display("name segment of key cannot be empty"))]
    NameEmpty,

    #[snafu(display(
        "name segment of key exceeds the maximum length - expected 63 characters or less, got {length}"
    ))]
    NameTooLong { length: usize },

    #[snafu(display("name segment of key contains non-ascii characters"))]
    NameNotAscii,

    #[snafu(display("name segment of key violates kubernetes format"))]
    NameInvalid,
}

/// A validated name segment of a key. This part of the key is required.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyName(String);

impl FromStr for KeyName {
    type Err = KeyNameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        ensure!(!input.is_empty(), NameEmptySnafu);
        ensure!(
            input.len() <= KEY_NAME_MAX_LEN,
            NameTooLongSnafu {
                length: input.len()
            }
        );
        ensure!(input.is_ascii(), NameNotAsciiSnafu);
        ensure!(KEY_NAME_REGEX.is_match(input), NameInvalidSnafu);

        Ok(Self(input.to_owned()))
    }
}

impl Deref for KeyName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for KeyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::*;

    #[test]
    fn key_with_prefix() {
        let key = Key::from_str("cloudwatch.aws.amazon.com/agent").unwrap();

        assert_eq!(
            key.prefix,
            Some(KeyPrefix("cloudwatch.aws.amazon.com".into()))
        );
        assert_eq!(key.name, KeyName("agent".into()));
        assert_eq!(key.to_string(), "cloudwatch.aws.amazon.com/agent");
    }

    #[test]
    fn key_without_prefix() {
        let key = Key::from_str("app").unwrap();

        assert_eq!(key.prefix, None);
        assert_eq!(key.name, KeyName("app".into()));
        assert_eq!(key.to_string(), "app");
    }

    #[rstest]
    #[case("foo/bar/baz", KeyError::NestedPrefix)]
    #[case("", KeyError::EmptyInput)]
    #[case("/name", KeyError::KeyPrefixError { source: KeyPrefixError::PrefixEmpty })]
    #[case("prefix/", KeyError::KeyNameError { source: KeyNameError::NameEmpty })]
    fn invalid_key(#[case] input: &str, #[case] error: KeyError) {
        let err = Key::from_str(input).unwrap_err();
        assert_eq!(err, error);
    }

    #[rstest]
    #[case("a".repeat(254), KeyPrefixError::PrefixTooLong { length: 254 })]
    #[case("foo.", KeyPrefixError::PrefixInvalid)]
    #[case("Example.com", KeyPrefixError::PrefixInvalid)]
    #[case("ä", KeyPrefixError::PrefixNotAscii)]
    #[case("", KeyPrefixError::PrefixEmpty)]
    fn invalid_key_prefix(#[case] input: String, #[case] error: KeyPrefixError) {
        let err = KeyPrefix::from_str(&input).unwrap_err();
        assert_eq!(err, error);
    }

    #[rstest]
    #[case("a".repeat(64), KeyNameError::NameTooLong { length: 64 })]
    #[case("foo-", KeyNameError::NameInvalid)]
    #[case("ä", KeyNameError::NameNotAscii)]
    #[case("", KeyNameError::NameEmpty)]
    fn invalid_key_name(#[case] input: String, #[case] error: KeyNameError) {
        let err = KeyName::from_str(&input).unwrap_err();
        assert_eq!(err, error);
    }

    #[rstest]
    #[case("app.kubernetes.io/name")]
    #[case("kubernetes.io/hostname")]
    #[case("prometheus.io/scrape")]
    #[case("Name_with.dots-1")]
    fn valid_key(#[case] input: &str) {
        assert!(Key::from_str(input).is_ok());
    }
}
