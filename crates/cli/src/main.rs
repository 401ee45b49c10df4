// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! iotest binary entry point.

use std::io::IsTerminal;

use clap::Parser;

use iotest::cli::Cli;
use iotest::config::RunConfig;
use iotest::exit_codes;
use iotest::output::Reporter;
use iotest::output_diagnostic::{print_error, print_warning};

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match RunConfig::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::ABORTED);
        }
    };

    let stdout = std::io::stdout();
    let color = stdout.is_terminal();
    let reporter = Reporter::new(stdout, config.output_format, config.mode, color)
        .with_diff(config.diff);

    match iotest::run(&config, reporter).await {
        Ok(summary) => {
            if summary.cases.is_empty() && summary.not_run == 0 {
                if summary.skipped == 0 {
                    print_warning(format_args!(
                        "no tests found in {}",
                        config.test_file.display()
                    ));
                } else {
                    print_warning(format_args!(
                        "no active tests in {} ({} unused)",
                        config.test_file.display(),
                        summary.skipped
                    ));
                }
            }
            if summary.success() {
                std::process::exit(exit_codes::SUCCESS);
            }
            std::process::exit(exit_codes::FAILED);
        }
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::ABORTED);
        }
    }
}
