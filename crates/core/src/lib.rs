// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture parsing and output comparison for black-box stdin/stdout tests.
//!
//! This crate holds the pure half of iotest: turning `.iotest` fixture text
//! into ordered test cases, and deciding whether a program's captured output
//! matches the recorded expectation under a normalization mode.

pub mod compare;
pub mod fixture;

pub use compare::{
    compare, strip_both, strip_newlines, strip_spaces, ComparisonMode, InvalidModeError,
};
pub use fixture::{parse, parse_with, FixtureDocument, FixtureError, ParseOptions, TestCase};
