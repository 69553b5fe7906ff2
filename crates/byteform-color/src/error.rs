// SPDX-License-Identifier: MIT

use thiserror::Error;

/// A seed color string that no CSS color syntax accepts.
///
/// Carries the rejected input verbatim so callers can report exactly what
/// the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{input}`: {reason}")]
pub struct ColorParseError {
    /// The string that failed to parse.
    pub input: String,
    /// Parser diagnostic.
    pub reason: String,
}

impl ColorParseError {
    pub(crate) fn new(input: &str, reason: impl ToString) -> Self {
        Self {
            input: input.to_owned(),
            reason: reason.to_string(),
        }
    }
}
