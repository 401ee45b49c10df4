// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level error type and process exit codes.

use iotest_core::FixtureError;

use crate::config::ConfigError;
use crate::runner::RunError;

/// Exit codes for the iotest binary
pub mod exit_codes {
    /// Every test passed
    pub const SUCCESS: i32 = 0;
    /// At least one test failed
    pub const FAILED: i32 = 1;
    /// The run was aborted before completing
    pub const ABORTED: i32 = 2;
}

/// Any error that aborts a run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),
}
