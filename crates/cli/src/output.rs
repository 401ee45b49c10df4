// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run reporting for text and JSON output modes.

use std::io::{self, Write};
use std::path::Path;

use iotest_core::{ComparisonMode, TestCase};
use similar::TextDiff;

use crate::cli::OutputFormat;
use crate::runner::{CaseOutcome, RunSummary};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Streams per-test results to a writer.
///
/// Text mode writes as tests finish; JSON mode stays quiet until
/// [`Reporter::finish`] and then writes one summary document.
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
    color: bool,
    diff: bool,
    mode: ComparisonMode,
    executable: String,
    outcomes: Vec<CaseOutcome>,
}

impl<W: Write> Reporter<W> {
    /// `color` enables ANSI styling; pass whether stdout is a terminal.
    pub fn new(out: W, format: OutputFormat, mode: ComparisonMode, color: bool) -> Self {
        Self {
            out,
            format,
            color,
            diff: false,
            mode,
            executable: String::new(),
            outcomes: Vec::new(),
        }
    }

    /// Also print a line diff for failing tests
    pub fn with_diff(mut self, diff: bool) -> Self {
        self.diff = diff;
        self
    }

    pub fn begin(&mut self, executable: &Path) -> io::Result<()> {
        self.executable = executable.display().to_string();
        if self.format == OutputFormat::Text {
            writeln!(self.out, "Testing {} ... \n", self.executable)?;
        }
        Ok(())
    }

    pub fn case_started(&mut self, case: &TestCase) -> io::Result<()> {
        // Progress line, overwritten by the result on a terminal
        if self.format == OutputFormat::Text && self.color {
            write!(self.out, "Test {}\r", case.name)?;
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn case_finished(&mut self, outcome: CaseOutcome) -> io::Result<()> {
        if self.format == OutputFormat::Text {
            self.write_outcome(&outcome)?;
        }
        self.outcomes.push(outcome);
        Ok(())
    }

    /// Write the closing summary and return the totals.
    pub fn finish(mut self, skipped: usize, not_run: usize) -> io::Result<RunSummary> {
        let passed = self.outcomes.iter().filter(|o| o.passed).count();
        let summary = RunSummary {
            executable: self.executable,
            mode: self.mode,
            passed,
            failed: self.outcomes.len() - passed,
            skipped,
            not_run,
            cases: self.outcomes,
        };

        match self.format {
            OutputFormat::Text => write_totals(&mut self.out, &summary, self.color)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, &summary)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(summary)
    }

    fn write_outcome(&mut self, outcome: &CaseOutcome) -> io::Result<()> {
        let (color, status) = if outcome.passed {
            (GREEN, "ok")
        } else {
            (RED, "FAILED")
        };
        let line = self.paint(color, &format!("Test {} ... {}", outcome.name, status));
        writeln!(self.out, "{}", line)?;

        if outcome.passed {
            return Ok(());
        }

        let expected_heading = self.paint(BOLD, "Expected output:");
        let actual_heading = self.paint(BOLD, &format!("{} output:", self.executable));
        writeln!(self.out, "\n{}", expected_heading)?;
        writeln!(self.out, "{}", outcome.expected)?;
        writeln!(self.out, "{}", actual_heading)?;
        writeln!(self.out, "{}", outcome.actual)?;

        if self.diff {
            let heading = self.paint(BOLD, &format!("Diff ({}, -expected +actual):", self.mode));
            let diff = normalized_diff(self.mode, &outcome.expected, &outcome.actual);
            writeln!(self.out, "{}", heading)?;
            writeln!(self.out, "{}", diff)?;
        }
        Ok(())
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", style, text, RESET)
        } else {
            text.to_string()
        }
    }
}

fn write_totals<W: Write>(out: &mut W, summary: &RunSummary, color: bool) -> io::Result<()> {
    let mut line = format!("{} passed, {} failed", summary.passed, summary.failed);
    if summary.skipped > 0 {
        line.push_str(&format!(", {} unused", summary.skipped));
    }
    if summary.not_run > 0 {
        line.push_str(&format!(", {} not run", summary.not_run));
    }

    if color {
        let style = if summary.success() { GREEN } else { RED };
        writeln!(out, "\n{}{}{}", style, line, RESET)
    } else {
        writeln!(out, "\n{}", line)
    }
}

/// Unified line diff of both sides after `mode` normalization.
pub fn normalized_diff(mode: ComparisonMode, expected: &str, actual: &str) -> String {
    let expected = mode.normalize(expected);
    let actual = mode.normalize(actual);
    let diff = TextDiff::from_lines(&*expected, &*actual);
    diff.unified_diff().header("expected", "actual").to_string()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
