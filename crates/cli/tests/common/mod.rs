// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

//! Shared helpers for end-to-end runs of the iotest binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Program that echoes stdin to stdout
pub const CAT: &str = "/bin/cat";

/// A passing fixture for `cat`
pub const ECHO_FIXTURE: &str = "\
# cat echoes its input
$test greet in
hello
$out
hello
$end
";

/// Variables that override command-line defaults
pub const ENV_OVERRIDES: [&str; 3] = ["IOTEST_COMP", "IOTEST_STRICT", "IOTEST_OUTPUT_FORMAT"];

/// Command for the iotest binary under test, isolated from the caller's
/// `IOTEST_*` settings
pub fn iotest() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_iotest"));
    for key in ENV_OVERRIDES {
        cmd.env_remove(key);
    }
    cmd
}

/// Write `content` as `name` inside `dir`
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Write an executable shell script as `name` inside `dir`
pub fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;

    let path = dir.path().join(name);
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(format!("#!/bin/sh\n{body}\n").as_bytes())
            .unwrap();
        file.sync_all().unwrap();
    }
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Copy `cat` next to its fixture so the default `<exe>.iotest` lookup applies
pub fn install_cat(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::copy(Path::new(CAT), &path).unwrap();
    path
}
