// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture file parser.
//!
//! Parses `.iotest` files like:
//!   $test greet in
//!   world
//!   $out
//!   hello world
//!   $end
//!
//!   $unused slow in
//!   ...
//!   $end
//!
//!   # comments are ignored anywhere
//!
//! Control lines are recognized only when their whitespace-separated tokens
//! match exactly. Every other line inside a case is payload and is kept
//! verbatim, line terminator included.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while loading a fixture
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Test file syntax error at line {line}: arbitrary text outside test data: {text:?}")]
    Structural { line: usize, text: String },

    #[error("Test file structure error at line {line}: {reason}")]
    Unbalanced { line: usize, reason: &'static str },

    #[error("Failed to read test file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single named input/output pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub name: String,
    /// Bytes fed to the program's stdin.
    pub input: String,
    /// Expected stdout.
    pub output: String,
}

impl TestCase {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// Parser behavior switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject unbalanced control lines instead of tolerating them.
    ///
    /// The default parser accepts nested opens (last open wins), `$out`
    /// outside a case, `$end` without an open case, and cases left open at
    /// end of input. Strict mode turns each of those into
    /// [`FixtureError::Unbalanced`].
    pub strict: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Ordered test cases parsed from one fixture file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixtureDocument {
    cases: Vec<TestCase>,
    skipped: usize,
}

impl FixtureDocument {
    /// Read and parse a fixture file with default options
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        Self::load_with(path, ParseOptions::default())
    }

    /// Read and parse a fixture file
    pub fn load_with(path: &Path, options: ParseOptions) -> Result<Self, FixtureError> {
        let source = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded test file {} ({} bytes)", path.display(), source.len());
        parse_with(&source, options)
    }

    /// Cases in declaration order
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestCase> {
        self.cases.iter()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Number of `$unused` cases that were parsed and discarded
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn into_cases(self) -> Vec<TestCase> {
        self.cases
    }
}

impl<'a> IntoIterator for &'a FixtureDocument {
    type Item = &'a TestCase;
    type IntoIter = std::slice::Iter<'a, TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

/// Parse fixture text with default (lenient) options.
pub fn parse(source: &str) -> Result<FixtureDocument, FixtureError> {
    parse_with(source, ParseOptions::default())
}

/// Parse fixture text.
///
/// Fails on the first structural error; no partial document is returned.
pub fn parse_with(source: &str, options: ParseOptions) -> Result<FixtureDocument, FixtureError> {
    let mut parser = Parser::new(options);
    for (idx, raw) in source.split_inclusive('\n').enumerate() {
        parser.feed(idx + 1, raw)?;
    }
    parser.finish()
}

/// One fixture line, classified by its whitespace-separated tokens.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Open { name: &'a str, kept: bool },
    Out,
    End,
    Comment,
    Blank,
    Data,
}

fn classify(raw: &str) -> Line<'_> {
    let tokens: Vec<&str> = without_newline(raw).split_whitespace().collect();
    match tokens.as_slice() {
        ["$test", name, "in"] => Line::Open {
            name: *name,
            kept: true,
        },
        ["$unused", name, "in"] => Line::Open {
            name: *name,
            kept: false,
        },
        ["$out"] => Line::Out,
        ["$end"] => Line::End,
        ["#", ..] => Line::Comment,
        [] => Line::Blank,
        _ => Line::Data,
    }
}

fn without_newline(raw: &str) -> &str {
    raw.strip_suffix('\n').unwrap_or(raw)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Outside,
    ReadingInput,
    ReadingOutput,
}

struct Parser {
    options: ParseOptions,
    phase: Phase,
    skip: bool,
    current: TestCase,
    opened_at: usize,
    cases: Vec<TestCase>,
    skipped: usize,
}

impl Parser {
    fn new(options: ParseOptions) -> Self {
        Self {
            options,
            phase: Phase::Outside,
            skip: false,
            current: TestCase::default(),
            opened_at: 0,
            cases: Vec::new(),
            skipped: 0,
        }
    }

    fn feed(&mut self, line: usize, raw: &str) -> Result<(), FixtureError> {
        match classify(raw) {
            Line::Open { name, kept } => {
                if self.phase != Phase::Outside {
                    self.lenient(line, "test case opened while another case is still open")?;
                    warn!(
                        "line {}: '{}' opened before '{}' was closed; dropping '{}'",
                        line, name, self.current.name, self.current.name
                    );
                }
                self.current = TestCase::named(name);
                self.phase = Phase::ReadingInput;
                self.skip = !kept;
                self.opened_at = line;
            }
            Line::Out => {
                match self.phase {
                    Phase::ReadingInput => {}
                    Phase::ReadingOutput => {
                        self.lenient(line, "$out appears twice in one test case")?;
                        warn!("line {}: repeated $out in '{}'", line, self.current.name);
                    }
                    Phase::Outside => {
                        self.lenient(line, "$out outside of a test case")?;
                        warn!("line {}: $out outside of a test case", line);
                        self.opened_at = line;
                    }
                }
                self.phase = Phase::ReadingOutput;
            }
            Line::End => {
                if self.phase == Phase::Outside {
                    self.lenient(line, "$end outside of a test case")?;
                    warn!("line {}: $end outside of a test case", line);
                }
                self.close();
            }
            Line::Comment => {}
            Line::Blank => self.append(raw),
            Line::Data => {
                if self.phase == Phase::Outside {
                    return Err(FixtureError::Structural {
                        line,
                        text: without_newline(raw).to_string(),
                    });
                }
                self.append(raw);
            }
        }
        Ok(())
    }

    /// Fails in strict mode; lets the caller carry on otherwise.
    fn lenient(&self, line: usize, reason: &'static str) -> Result<(), FixtureError> {
        if self.options.strict {
            Err(FixtureError::Unbalanced { line, reason })
        } else {
            Ok(())
        }
    }

    fn append(&mut self, raw: &str) {
        match self.phase {
            Phase::Outside => {}
            Phase::ReadingInput => self.current.input.push_str(raw),
            Phase::ReadingOutput => self.current.output.push_str(raw),
        }
    }

    fn close(&mut self) {
        let case = std::mem::take(&mut self.current);
        if self.skip {
            debug!("skipping unused test case '{}'", case.name);
            self.skipped += 1;
        } else {
            self.cases.push(case);
        }
        self.phase = Phase::Outside;
        self.skip = false;
    }

    fn finish(self) -> Result<FixtureDocument, FixtureError> {
        if self.phase != Phase::Outside {
            self.lenient(self.opened_at, "test case is never closed with $end")?;
            warn!(
                "test case '{}' opened at line {} is never closed; ignoring it",
                self.current.name, self.opened_at
            );
        }
        Ok(FixtureDocument {
            cases: self.cases,
            skipped: self.skipped,
        })
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
