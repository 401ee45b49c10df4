// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use serde_json::Value;

fn outcome(name: &str, passed: bool, expected: &str, actual: &str) -> CaseOutcome {
    CaseOutcome {
        name: name.to_string(),
        passed,
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

fn test_case(name: &str) -> TestCase {
    TestCase {
        name: name.to_string(),
        ..Default::default()
    }
}

fn run_report(
    format: OutputFormat,
    color: bool,
    diff: bool,
    outcomes: Vec<CaseOutcome>,
) -> (String, RunSummary) {
    let mut buf = Vec::new();
    let summary = {
        let mut reporter =
            Reporter::new(&mut buf, format, ComparisonMode::IgnoreNewlines, color).with_diff(diff);
        reporter.begin(Path::new("/bin/prog")).unwrap();
        for o in outcomes {
            reporter.case_started(&test_case(&o.name)).unwrap();
            reporter.case_finished(o).unwrap();
        }
        reporter.finish(1, 0).unwrap()
    };
    (String::from_utf8(buf).unwrap(), summary)
}

#[test]
fn plain_text_report() {
    let (text, summary) = run_report(
        OutputFormat::Text,
        false,
        false,
        vec![
            outcome("a", true, "ok\n", "ok\n"),
            outcome("b", false, "x\n", "y\n"),
        ],
    );

    assert_eq!(
        text,
        "Testing /bin/prog ... \n\n\
         Test a ... ok\n\
         Test b ... FAILED\n\
         \nExpected output:\nx\n\n\
         /bin/prog output:\ny\n\n\
         \n1 passed, 1 failed, 1 unused\n"
    );
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.failed, 1);
    assert!(!summary.success());
}

#[test]
fn colored_report_uses_ansi_and_progress_line() {
    let (text, summary) = run_report(
        OutputFormat::Text,
        true,
        false,
        vec![outcome("a", true, "", "")],
    );

    assert!(text.contains("Test a\r"));
    assert!(text.contains("\x1b[32mTest a ... ok\x1b[0m\n"));
    assert!(text.ends_with("\x1b[32m1 passed, 0 failed, 1 unused\x1b[0m\n"));
    assert!(summary.success());
}

#[test]
fn colored_failure_is_red() {
    let (text, _) = run_report(
        OutputFormat::Text,
        true,
        false,
        vec![outcome("b", false, "x", "y")],
    );

    assert!(text.contains("\x1b[31mTest b ... FAILED\x1b[0m\n"));
    assert!(text.contains("\x1b[1mExpected output:\x1b[0m"));
    assert!(text.contains("\x1b[1m/bin/prog output:\x1b[0m"));
}

#[test]
fn failure_with_diff() {
    let (text, _) = run_report(
        OutputFormat::Text,
        false,
        true,
        vec![outcome("b", false, "1\n2\n", "1\n3\n")],
    );

    assert!(text.contains("Diff (NO_NEW_LINE, -expected +actual):\n"));
    assert!(text.contains("-1 2"));
    assert!(text.contains("+1 3"));
}

#[test]
fn json_report_is_single_document() {
    let (text, summary) = run_report(
        OutputFormat::Json,
        true,
        false,
        vec![
            outcome("a", true, "ok\n", "ok\n"),
            outcome("b", false, "x\n", "y\n"),
        ],
    );

    let json: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["executable"], "/bin/prog");
    assert_eq!(json["mode"], "NO_NEW_LINE");
    assert_eq!(json["passed"], 1);
    assert_eq!(json["failed"], 1);
    assert_eq!(json["skipped"], 1);
    assert_eq!(json["not_run"], 0);
    assert_eq!(json["cases"][1]["name"], "b");
    assert_eq!(json["cases"][1]["actual"], "y\n");
    assert!(!text.contains('\r'));
    assert!(!text.contains("\x1b["));
    assert_eq!(summary.cases.len(), 2);
}

#[test]
fn totals_mention_cases_not_run() {
    let summary = RunSummary {
        executable: "p".to_string(),
        mode: ComparisonMode::Exact,
        passed: 0,
        failed: 1,
        skipped: 0,
        not_run: 3,
        cases: vec![],
    };
    let mut buf = Vec::new();
    write_totals(&mut buf, &summary, false).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "\n0 passed, 1 failed, 3 not run\n");
}

#[test]
fn exact_diff_shows_changed_lines() {
    let diff = normalized_diff(ComparisonMode::Exact, "a\nb\n", "a\nc\n");
    assert!(diff.contains("--- expected"));
    assert!(diff.contains("+++ actual"));
    assert!(diff.contains("-b\n"));
    assert!(diff.contains("+c\n"));
}

#[test]
fn diff_of_equivalent_output_is_empty() {
    let diff = normalized_diff(ComparisonMode::IgnoreBoth, "a  b\n", "a b");
    assert_eq!(diff, "");
}
