// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box stdin/stdout test runner.
//!
//! Reads an `.iotest` fixture, runs the program under test once per case
//! with the case input on stdin, and compares stdout against the recorded
//! output. Parsing and comparison live in [`iotest_core`]; this crate wires
//! them to the command line, child processes, and the console.
#![doc = include_str!("../README.md")]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod output_diagnostic;
pub mod runner;

pub use error::{exit_codes, Error};
pub use runner::{run, CaseOutcome, RunSummary, Runner};
