//! Apply and delete commands.

use std::io::{self, IsTerminal, Read};

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{ApplyArgs, DeleteArgs};
use crate::core::config::{Config, Params};
use crate::core::reconcile::{Action, Outcome};
use crate::core::types::{Plaintext, State};
use crate::error::Result;

/// Reconcile one secret or variable.
pub fn apply(args: ApplyArgs) -> Result<()> {
    let state: State = args.state.parse()?;

    let value: Plaintext = match (state, args.value) {
        (State::Present, None) => read_value(&args.name)?,
        (_, value) => value.unwrap_or_default().into(),
    };

    let params = Params {
        pat: args.connection.token.unwrap_or_default().into(),
        name: args.name,
        unencrypted_value: value,
        environment: args.scope.environment,
        repository: args.scope.repository,
        organization: args.scope.organization,
        is_base64_encoded: args.base64,
        visibility: args.visibility,
        selected_repository_ids: args.selected_repository_ids,
        is_secret: !args.variable,
        state: state.to_string(),
        api_ep: args.connection.api_url,
    };

    run(params, args.json)
}

/// Ensure a secret or variable is absent.
pub fn delete(args: DeleteArgs) -> Result<()> {
    let params = Params {
        pat: args.connection.token.unwrap_or_default().into(),
        name: args.name,
        environment: args.scope.environment,
        repository: args.scope.repository,
        organization: args.scope.organization,
        is_secret: !args.variable,
        state: State::Absent.to_string(),
        api_ep: args.connection.api_url,
        ..Params::default()
    };

    run(params, args.json)
}

fn run(params: Params, json: bool) -> Result<()> {
    let config = Config::from_params(params)?;
    let outcome = crate::reconcile(&config)?;
    report(&outcome, json)
}

/// Read the value from piped stdin, or prompt with hidden input.
fn read_value(name: &str) -> Result<Plaintext> {
    if !io::stdin().is_terminal() {
        debug!("reading value from stdin");
        let mut input = Plaintext::default();
        io::stdin().read_to_string(&mut input)?;
        strip_newline(&mut input);
        return Ok(input);
    }

    Ok(Zeroizing::new(
        Password::new()
            .with_prompt(format!("Value for {}", output::key(name)))
            .interact()?,
    ))
}

/// Drop the single trailing newline `echo` adds, in place.
fn strip_newline(input: &mut String) {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
}

fn report(outcome: &Outcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    let subject = format!(
        "{} {} in {}",
        outcome.kind,
        output::key(&outcome.name),
        outcome.scope
    );
    match outcome.action {
        Action::Unchanged => output::dimmed(&format!("{} already absent", subject)),
        action => output::success(&format!("{} {}", action, subject)),
    }
    Ok(())
}
