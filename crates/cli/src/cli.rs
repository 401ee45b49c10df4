// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use iotest_core::{ComparisonMode, InvalidModeError};

/// Black-box stdin/stdout test runner
#[derive(Parser, Debug, Clone)]
#[command(
    name = "iotest",
    version,
    about = "Feed recorded stdin to a program and compare its stdout"
)]
pub struct Cli {
    /// Path to the executable to run tests on
    #[arg(value_name = "EXECUTABLE")]
    pub executable: PathBuf,

    /// Path to the file with test data (defaults to <EXECUTABLE>.iotest)
    #[arg(value_name = "TEST_FILE")]
    pub test_file: Option<PathBuf>,

    /// Comparator for outputs: EXACT, NO_NEW_LINE, NO_MULTIPLE_SPACES, NO_ALL
    #[arg(
        short = 'c',
        long = "comp",
        env = "IOTEST_COMP",
        default_value = "NO_NEW_LINE",
        value_parser = parse_mode
    )]
    pub comp: ComparisonMode,

    /// Reject unbalanced $test/$out/$end markers in the test file
    #[arg(long, env = "IOTEST_STRICT")]
    pub strict: bool,

    /// Report format
    #[arg(long, value_enum, env = "IOTEST_OUTPUT_FORMAT", default_value = "text")]
    pub output_format: OutputFormat,

    /// Show a line diff of expected and actual output for failing tests
    #[arg(long)]
    pub diff: bool,

    /// Stop after the first failing test
    #[arg(long)]
    pub fail_fast: bool,
}

/// Report format
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored per-test lines
    #[default]
    Text,
    /// A single JSON summary document
    Json,
}

fn parse_mode(value: &str) -> Result<ComparisonMode, InvalidModeError> {
    value.parse()
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
