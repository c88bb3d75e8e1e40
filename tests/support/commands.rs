//! CLI command helpers.

use assert_cmd::Command;

/// A `ghvar` command isolated from the caller's environment.
///
/// GitHub credentials and log settings from the outer shell are removed so a
/// test can never reach the real API by accident.
pub fn ghvar() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("ghvar").expect("failed to find ghvar binary");
    cmd.env_remove("GITHUB_TOKEN");
    cmd.env_remove("GITHUB_API_URL");
    cmd.env_remove("GHVAR_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// A command pointed at an address nothing listens on.
///
/// Validation failures must surface before any request, so tests using this
/// endpoint fail fast if a request is attempted.
pub fn ghvar_offline() -> Command {
    let mut cmd = ghvar();
    cmd.env("GITHUB_API_URL", "http://127.0.0.1:9");
    cmd
}
