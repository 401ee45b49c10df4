// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test execution: run the program once per case and compare its stdout.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use iotest_core::{ComparisonMode, FixtureDocument, TestCase};
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::config::RunConfig;
use crate::output::Reporter;

/// Errors while invoking the program under test
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to spawn '{}': {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while running test '{case}': {source}")]
    Io {
        case: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Program exited with non-zero status (code: {code:?}) in test '{case}'")]
    NonZeroExit { case: String, code: Option<i32> },
}

/// Result of a single test case
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    pub name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

/// Totals for a whole run
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub executable: String,
    pub mode: ComparisonMode,
    pub passed: usize,
    pub failed: usize,
    /// `$unused` cases in the fixture
    pub skipped: usize,
    /// Cases never reached because of `--fail-fast`
    pub not_run: usize,
    pub cases: Vec<CaseOutcome>,
}

impl RunSummary {
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

/// Runs single cases against one executable.
#[derive(Clone, Debug)]
pub struct Runner {
    executable: PathBuf,
    mode: ComparisonMode,
}

impl Runner {
    pub fn new(executable: impl Into<PathBuf>, mode: ComparisonMode) -> Self {
        Self {
            executable: executable.into(),
            mode,
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Run one case and compare the captured stdout with its expected output
    pub async fn run_case(&self, case: &TestCase) -> Result<CaseOutcome, RunError> {
        let stdout = self.capture(case).await?;
        let actual = String::from_utf8_lossy(&stdout).into_owned();
        // Lossy decoding can merge distinct byte sequences
        let passed = match self.mode {
            ComparisonMode::Exact => stdout == case.output.as_bytes(),
            mode => mode.matches(&actual, &case.output),
        };
        debug!("test '{}': {}", case.name, if passed { "pass" } else { "fail" });

        Ok(CaseOutcome {
            name: case.name.clone(),
            passed,
            expected: case.output.clone(),
            actual,
        })
    }

    /// Feed the case input to a fresh process and collect its stdout.
    ///
    /// Stdin is written from a separate task so a program that prints before
    /// draining its input cannot deadlock on a full pipe. Stderr passes
    /// through to the terminal.
    pub async fn capture(&self, case: &TestCase) -> Result<Vec<u8>, RunError> {
        debug!(
            "spawning {} for test '{}'",
            self.executable.display(),
            case.name
        );
        let mut child = Command::new(&self.executable)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RunError::Spawn {
                program: self.executable.clone(),
                source,
            })?;

        let writer = child.stdin.take().map(|mut stdin| {
            let input = case.input.clone().into_bytes();
            tokio::spawn(async move {
                stdin.write_all(&input).await?;
                stdin.shutdown().await
            })
        });

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| RunError::Io {
                case: case.name.clone(),
                source,
            })?;

        if let Some(writer) = writer {
            let written = writer
                .await
                .unwrap_or_else(|e| Err(std::io::Error::other(e)));
            match written {
                Ok(()) => {}
                // The program exited without reading all of its input
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                    debug!("test '{}': stdin closed early", case.name);
                }
                Err(source) => {
                    return Err(RunError::Io {
                        case: case.name.clone(),
                        source,
                    })
                }
            }
        }

        debug!("test '{}': exited with {}", case.name, output.status);
        if !output.status.success() {
            return Err(RunError::NonZeroExit {
                case: case.name.clone(),
                code: output.status.code(),
            });
        }

        Ok(output.stdout)
    }
}

/// Load the fixture named by `config` and run every case through `reporter`.
///
/// Cases run one at a time in declaration order. The first error aborts the
/// run; test failures do not, unless `fail_fast` is set.
pub async fn run<W: Write>(
    config: &RunConfig,
    mut reporter: Reporter<W>,
) -> Result<RunSummary, crate::Error> {
    let document = FixtureDocument::load_with(&config.test_file, config.parse_options())?;
    info!(
        "{}: {} test(s), {} unused",
        config.test_file.display(),
        document.len(),
        document.skipped()
    );

    let runner = Runner::new(&config.executable, config.mode);
    reporter.begin(runner.executable())?;

    let mut not_run = 0;
    for (idx, case) in document.iter().enumerate() {
        reporter.case_started(case)?;
        let outcome = runner.run_case(case).await?;
        let passed = outcome.passed;
        reporter.case_finished(outcome)?;

        if !passed && config.fail_fast {
            not_run = document.len() - idx - 1;
            break;
        }
    }

    Ok(reporter.finish(document.skipped(), not_run)?)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
