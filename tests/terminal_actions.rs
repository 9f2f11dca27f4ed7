//! Terminal action tests
//!
//! `fatal` ends the process and `panic` unwinds the caller, so each scenario
//! re-runs this test binary filtered to a single test. The child branch does
//! the logging; the parent branch checks the exit status and the log file.
//!
//! These tests verify:
//! - Fatal exits right after dispatch with the configured code
//! - `sync_on_fatal` gets the line into the file before the process exits
//! - Fatal passes every threshold, including through the generic `log`
//! - Panic reports the caller's location even when its line is filtered

use mlog::appenders::file::FileAppender;
use mlog::core::log_context::LogContext;
use mlog::core::log_level::LogLevel;
use mlog::core::logger::Logger;
use mlog::{fatal, DEFAULT_FATAL_EXIT_CODE};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const CHILD_ENV: &str = "MLOG_TERMINAL_CHILD";
const LOG_ENV: &str = "MLOG_TERMINAL_LOG";

/// Log file for the child run of `test`, or `None` in the parent
fn child_log(test: &str) -> Option<PathBuf> {
    if env::var(CHILD_ENV).ok()? != test {
        return None;
    }
    env::var_os(LOG_ENV).map(PathBuf::from)
}

fn run_child(test: &str, log_file: &Path) -> Output {
    let exe = env::current_exe().expect("Failed to locate test binary");
    Command::new(exe)
        .args([test, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, test)
        .env(LOG_ENV, log_file)
        .output()
        .expect("Failed to run child test")
}

/// libtest prints its summary only when the test body returns
fn finished_normally(output: &Output) -> bool {
    String::from_utf8_lossy(&output.stdout).contains("test result:")
}

fn file_logger(path: &Path) -> mlog::LoggerBuilder {
    let appender = FileAppender::new(path).expect("Failed to create appender");
    Logger::builder().persistent(appender).trace_key("userID")
}

#[test]
fn test_fatal_syncs_then_exits_with_default_code() {
    const NAME: &str = "test_fatal_syncs_then_exits_with_default_code";
    if let Some(path) = child_log(NAME) {
        let logger = file_logger(&path)
            .queue_capacity(64)
            .sync_on_fatal(true)
            .build()
            .unwrap();
        let ctx = LogContext::new().with_field("userID", "9527");
        logger.info(&ctx, "before");
        fatal!(logger, &ctx, "disk {}", "full");
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("fatal.log");
    let output = run_child(NAME, &log_file);

    assert_eq!(output.status.code(), Some(DEFAULT_FATAL_EXIT_CODE));
    assert_eq!(DEFAULT_FATAL_EXIT_CODE, 0);
    assert!(!finished_normally(&output), "fatal returned to the test body");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2, "{:?}", content);
    assert_eq!(lines[0], "[INFO] before");
    assert!(lines[1].starts_with(&format!("[FATAL][caller:{}:", file!())));
    assert!(lines[1].ends_with("] disk full"));
}

#[test]
fn test_fatal_is_never_filtered() {
    const NAME: &str = "test_fatal_is_never_filtered";
    if let Some(path) = child_log(NAME) {
        let logger = file_logger(&path)
            .level(LogLevel::Fatal)
            .sync_on_fatal(true)
            .fatal_exit_code(3)
            .build()
            .unwrap();
        logger.error(&(), "filtered");
        logger.log(LogLevel::Fatal, &(), "stop");
        unreachable!("fatal returned");
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("fatal.log");
    let output = run_child(NAME, &log_file);

    assert_eq!(output.status.code(), Some(3));
    assert!(!finished_normally(&output));

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1, "{:?}", content);
    assert!(lines[0].starts_with("[FATAL][caller:"));
    assert!(lines[0].ends_with("] stop"));
}

#[test]
fn test_fatal_direct_mode_writes_stderr() {
    const NAME: &str = "test_fatal_direct_mode_writes_stderr";
    if child_log(NAME).is_some() {
        let logger = Logger::builder()
            .colors(false)
            .fatal_exit_code(7)
            .build()
            .unwrap();
        logger.fatal(&(), "direct stop");
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_child(NAME, &temp_dir.path().join("unused.log"));

    assert_eq!(output.status.code(), Some(7));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[FATAL][caller:"), "{}", stderr);
    assert!(stderr.contains("] direct stop\n"), "{}", stderr);
}

#[test]
fn test_filtered_panic_reports_call_site() {
    const NAME: &str = "test_filtered_panic_reports_call_site";
    if let Some(path) = child_log(NAME) {
        let logger = file_logger(&path).level(LogLevel::Fatal).build().unwrap();
        println!("panic-line={}", line!() + 1);
        logger.panic(&(), "gave up");
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("panic.log");
    let output = run_child(NAME, &log_file);

    // libtest reports a panicking test as a failure
    assert_eq!(output.status.code(), Some(101));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let panic_line: u32 = stdout
        .lines()
        .find_map(|l| l.strip_prefix("panic-line="))
        .and_then(|n| n.trim().parse().ok())
        .expect("child did not report its panic line");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("gave up"), "{}", stderr);
    assert!(
        stderr.contains(&format!("{}:{}:", file!(), panic_line)),
        "panic location is not the call site: {}",
        stderr
    );

    let content = fs::read_to_string(&log_file).unwrap_or_default();
    assert!(content.is_empty(), "{:?}", content);
}
