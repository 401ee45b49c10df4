// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validated run configuration resolved from CLI arguments.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use iotest_core::{ComparisonMode, ParseOptions};
use log::debug;
use thiserror::Error;

use crate::cli::{Cli, OutputFormat};

/// Extension appended to the executable path when no test file is given
pub const DEFAULT_TEST_EXTENSION: &str = "iotest";

/// Errors in the paths handed to the runner
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("executable doesn't exist: {}", .0.display())]
    MissingExecutable(PathBuf),

    #[error("test file doesn't exist: {}", .0.display())]
    MissingTestFile(PathBuf),

    #[error("Failed to resolve executable path '{}': {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything a run needs, with paths checked up front.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Absolute path to the program under test
    pub executable: PathBuf,
    pub test_file: PathBuf,
    pub mode: ComparisonMode,
    pub strict: bool,
    pub output_format: OutputFormat,
    pub diff: bool,
    pub fail_fast: bool,
}

impl RunConfig {
    /// Resolve and validate CLI arguments.
    ///
    /// The test file defaults to `<EXECUTABLE>.iotest`. Both paths must name
    /// existing files; the executable is made absolute so it is never looked
    /// up on `PATH`.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let test_file = cli
            .test_file
            .unwrap_or_else(|| default_test_file(&cli.executable));

        if !cli.executable.is_file() {
            return Err(ConfigError::MissingExecutable(cli.executable));
        }
        if !test_file.is_file() {
            return Err(ConfigError::MissingTestFile(test_file));
        }

        // Symlinks stay unresolved so the program sees the name it was given
        let executable =
            std::path::absolute(&cli.executable).map_err(|source| ConfigError::Resolve {
                path: cli.executable.clone(),
                source,
            })?;
        debug!(
            "executable {} resolved to {}",
            cli.executable.display(),
            executable.display()
        );

        Ok(Self {
            executable,
            test_file,
            mode: cli.comp,
            strict: cli.strict,
            output_format: cli.output_format,
            diff: cli.diff,
            fail_fast: cli.fail_fast,
        })
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            strict: self.strict,
        }
    }
}

/// `<executable>.iotest`, keeping any extension the executable already has.
pub fn default_test_file(executable: &Path) -> PathBuf {
    let mut path = OsString::from(executable.as_os_str());
    path.push(".");
    path.push(DEFAULT_TEST_EXTENSION);
    PathBuf::from(path)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
