//! Assertions over captured process output.

use std::process::Output;

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "ghvar exited with {}:\n{}",
        output.status,
        stderr(output)
    );
}

pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "ghvar should have failed, stdout:\n{}",
        stdout(output)
    );
    // Errors exit with 1; clap usage errors exit with 2.
    assert!(matches!(output.status.code(), Some(1) | Some(2)));
}

pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(out.contains(expected), "stdout missing '{}':\n{}", expected, out);
}

pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(err.contains(expected), "stderr missing '{}':\n{}", expected, err);
}

/// Neither stream may contain `secret`.
pub fn assert_no_leak(output: &Output, secret: &str) {
    assert!(!stdout(output).contains(secret), "stdout leaked a secret");
    assert!(!stderr(output).contains(secret), "stderr leaked a secret");
}
