//! ghvar - Declarative GitHub Actions secrets and variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ghvar::cli::output;
use ghvar::cli::{execute, Cli};
use ghvar::core::constants::LOG_ENV;
use ghvar::error::{Error, ValidationError};

/// Suggest a next step for errors the user can fix.
fn hint_for(error: &Error) -> Option<&'static str> {
    match error {
        Error::InvalidScope(_) => {
            Some("pass --repository OWNER/REPO [--environment ENV] or --organization ORG")
        }
        Error::Validation(ValidationError::MissingToken) => {
            Some("set GITHUB_TOKEN or pass --token")
        }
        Error::Api { status: 401, .. } => Some("check that the token is valid and not expired"),
        Error::Api { status: 403, .. } => {
            Some("the token needs admin access to the repository or organization")
        }
        _ => None,
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ghvar=debug")
        } else {
            EnvFilter::new("ghvar=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        output::error(&e.to_string());
        if let Some(hint) = hint_for(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
