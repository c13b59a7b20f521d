//! Error types returned by the fallible parts of the crate.

use thiserror::Error;

/// What was wrong with a hex color string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatIssue {
    /// The string (without a leading `#`) did not have 3 or 6 digits.
    Length(usize),
    /// The string contained a character that is not a hexadecimal digit.
    Digit(char),
}

/// A string could not be parsed as a hex color.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("invalid color format {input:?}: {}", describe(.issue))]
pub struct InvalidColorFormat {
    /// The string that failed to parse.
    pub input: String,
    /// Why it failed.
    pub issue: FormatIssue,
}

impl InvalidColorFormat {
    pub(crate) fn new(input: &str, issue: FormatIssue) -> Self {
        Self {
            input: input.to_owned(),
            issue,
        }
    }
}

fn describe(issue: &FormatIssue) -> String {
    match issue {
        FormatIssue::Length(len) => format!("expected 3 or 6 hex digits, found {len}"),
        FormatIssue::Digit(c) => format!("{c:?} is not a hex digit"),
    }
}

/// Errors produced by this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// A hex color string was malformed.
    #[error(transparent)]
    InvalidColorFormat(#[from] InvalidColorFormat),

    /// A validation pattern did not compile.
    #[error("invalid pattern rule: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The key-value store refused a read or write.
    #[error("storage error: {0}")]
    Storage(String),

    /// A stored value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using the crate [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
