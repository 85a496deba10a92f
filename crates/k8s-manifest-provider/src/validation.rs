// This is adapted from Kubernetes.
// See apimachinery/pkg/util/validation/validation.go and apimachinery/pkg/api/validation/generic.go
// in the Kubernetes source

use std::{fmt::Display, sync::LazyLock};

use const_format::concatcp;
use regex::Regex;
use snafu::Snafu;

/// Maximum label length supported by Kubernetes (the minimum required by RFC 1123).
const RFC_1123_LABEL_MAX_LENGTH: usize = 63;
pub const RFC_1123_LABEL_FMT: &str = "[a-z0-9]([-a-z0-9]*[a-z0-9])?";
const RFC_1123_LABEL_ERROR_MSG: &str = "a lowercase RFC 1123 label must consist of lower case alphanumeric characters or '-', and must start and end with an alphanumeric character";

/// This is a subdomain's max length in DNS (RFC 1123)
const RFC_1123_SUBDOMAIN_MAX_LENGTH: usize = 253;
pub const RFC_1123_SUBDOMAIN_FMT: &str =
    concatcp!(RFC_1123_LABEL_FMT, "(\\.", RFC_1123_LABEL_FMT, ")*");
const RFC_1123_SUBDOMAIN_ERROR_MSG: &str = "a lowercase RFC 1123 subdomain must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character";

// Lazily initialized regular expressions
static RFC_1123_LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{RFC_1123_LABEL_FMT}$")).expect("failed to compile RFC 1123 label regex")
});

static RFC_1123_SUBDOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{RFC_1123_SUBDOMAIN_FMT}$"))
        .expect("failed to compile RFC 1123 subdomain regex")
});

type Result<T = (), E = Errors> = std::result::Result<T, E>;

/// A collection of errors discovered during validation.
#[derive(Debug)]
pub struct Errors(Vec<Error>);

impl Errors {
    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        self.0.iter()
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            let prefix = match i {
                0 => "",
                _ => ", ",
            };
            write!(f, "{prefix}{error}")?;
        }
        Ok(())
    }
}
impl std::error::Error for Errors {}

/// A single validation error.
#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(transparent)]
    Regex { source: RegexError },

    #[snafu(display("input is {length} bytes long but must be no more than {max_length}"))]
    TooLong { length: usize, max_length: usize },
}

#[derive(Debug)]
pub struct RegexError {
    /// The primary error message.
    msg: &'static str,

    /// The regex that the input must match.
    regex: &'static str,

    /// Examples of valid inputs (if non-empty).
    examples: &'static [&'static str],
}

impl Display for RegexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            msg,
            regex,
            examples,
        } = self;
        write!(f, "{msg} (")?;
        if !examples.is_empty() {
            for (i, example) in examples.iter().enumerate() {
                let prefix = match i {
                    0 => "e.g.",
                    _ => "or",
                };
                write!(f, "{prefix} {example:?}, ")?;
            }
        }
        write!(f, "regex used for validation is {regex:?})")
    }
}

impl std::error::Error for RegexError {}

/// Returns [`Ok`] if `value`'s length fits within `max_length`.
fn validate_str_length(value: &str, max_length: usize) -> Result<(), Error> {
    if value.len() > max_length {
        TooLongSnafu {
            length: value.len(),
            max_length,
        }
        .fail()
    } else {
        Ok(())
    }
}

/// Returns [`Ok`] if `value` matches `regex`.
fn validate_str_regex(
    value: &str,
    regex: &'static Regex,
    error_msg: &'static str,
    examples: &'static [&'static str],
) -> Result<(), Error> {
    if regex.is_match(value) {
        Ok(())
    } else {
        Err(RegexError {
            msg: error_msg,
            regex: regex
                .as_str()
                // Clean up start/end-of-line markers
                .trim_start_matches('^')
                .trim_end_matches('$'),
            examples,
        }
        .into())
    }
}

/// Returns [`Ok`] if *all* validations are [`Ok`], otherwise returns all errors.
fn validate_all(validations: impl IntoIterator<Item = Result<(), Error>>) -> Result {
    let errors = validations
        .into_iter()
        .filter_map(|res| res.err())
        .collect::<Vec<_>>();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Errors(errors))
    }
}

/// Tests for a string that conforms to the definition of a lowercase label in DNS (RFC 1123),
/// which is what Kubernetes requires for namespace names.
pub fn is_rfc_1123_label(value: &str) -> Result {
    validate_all([
        validate_str_length(value, RFC_1123_LABEL_MAX_LENGTH),
        validate_str_regex(
            value,
            &RFC_1123_LABEL_REGEX,
            RFC_1123_LABEL_ERROR_MSG,
            &["my-name", "123-abc"],
        ),
    ])
}

/// Tests for a string that conforms to the definition of a lowercase subdomain in DNS
/// (RFC 1123), which is what Kubernetes requires for most object names.
pub fn is_rfc_1123_subdomain(value: &str) -> Result {
    validate_all([
        validate_str_length(value, RFC_1123_SUBDOMAIN_MAX_LENGTH),
        validate_str_regex(
            value,
            &RFC_1123_SUBDOMAIN_REGEX,
            RFC_1123_SUBDOMAIN_ERROR_MSG,
            &["example.com"],
        ),
    ])
}

/// Validates an object name, see [`is_rfc_1123_subdomain`].
pub fn validate_object_name(name: &str) -> Result {
    is_rfc_1123_subdomain(name)
}

/// Validates a namespace name, see [`is_rfc_1123_label`].
pub fn validate_namespace_name(name: &str) -> Result {
    is_rfc_1123_label(name)
}
