// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output comparison under normalization modes.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Unknown comparison mode name
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Invalid comparison mode '{0}': expected one of EXACT, NO_NEW_LINE, NO_MULTIPLE_SPACES, NO_ALL")]
pub struct InvalidModeError(pub String);

/// How actual and expected output are normalized before comparing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ComparisonMode {
    /// Byte-for-byte equality
    #[serde(rename = "EXACT")]
    Exact,
    /// Runs of newlines collapse to single spaces
    #[default]
    #[serde(rename = "NO_NEW_LINE")]
    IgnoreNewlines,
    /// Runs of spaces collapse to single spaces
    #[serde(rename = "NO_MULTIPLE_SPACES")]
    IgnoreRepeatedSpaces,
    /// Newlines collapse first, then spaces
    #[serde(rename = "NO_ALL")]
    IgnoreBoth,
}

impl ComparisonMode {
    pub const ALL: [ComparisonMode; 4] = [
        ComparisonMode::Exact,
        ComparisonMode::IgnoreNewlines,
        ComparisonMode::IgnoreRepeatedSpaces,
        ComparisonMode::IgnoreBoth,
    ];

    /// The literal name accepted on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonMode::Exact => "EXACT",
            ComparisonMode::IgnoreNewlines => "NO_NEW_LINE",
            ComparisonMode::IgnoreRepeatedSpaces => "NO_MULTIPLE_SPACES",
            ComparisonMode::IgnoreBoth => "NO_ALL",
        }
    }

    /// Apply this mode's transform to one side of a comparison.
    pub fn normalize(self, text: &str) -> Cow<'_, str> {
        match self {
            ComparisonMode::Exact => Cow::Borrowed(text),
            ComparisonMode::IgnoreNewlines => Cow::Owned(strip_newlines(text)),
            ComparisonMode::IgnoreRepeatedSpaces => Cow::Owned(strip_spaces(text)),
            ComparisonMode::IgnoreBoth => Cow::Owned(strip_both(text)),
        }
    }

    pub fn matches(self, actual: &str, expected: &str) -> bool {
        match self {
            ComparisonMode::Exact => actual.as_bytes() == expected.as_bytes(),
            _ => self.normalize(actual) == self.normalize(expected),
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComparisonMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| InvalidModeError(s.to_string()))
    }
}

/// Decide whether `actual` output is equivalent to `expected` under `mode`.
pub fn compare(mode: ComparisonMode, actual: &str, expected: &str) -> bool {
    mode.matches(actual, expected)
}

/// Split on `\n`, drop empty pieces, rejoin with single spaces.
///
/// Line boundaries are lost: `"a\n\nb\n"` becomes `"a b"`.
pub fn strip_newlines(text: &str) -> String {
    collapse(text, '\n')
}

/// Split on `' '`, drop empty pieces, rejoin with single spaces.
pub fn strip_spaces(text: &str) -> String {
    collapse(text, ' ')
}

/// [`strip_newlines`] followed by [`strip_spaces`].
pub fn strip_both(text: &str) -> String {
    strip_spaces(&strip_newlines(text))
}

fn collapse(text: &str, sep: char) -> String {
    text.split(sep)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
