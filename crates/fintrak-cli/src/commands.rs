//! Runs one CLI command against the client and renders what happened as text

use std::fmt::Write as _;

use anyhow::Context as _;
use fintrak_client_core::{Client, NavigationOutcome};
use fintrak_shared::req_args::{LoginReqArgs, SignupReqArgs};
use secrecy::SecretString;
use tracing::instrument;

use crate::cli::Command;

#[instrument(skip_all)]
pub fn run(command: Command, client: &Client) -> anyhow::Result<String> {
    match command {
        Command::Login {
            work_id,
            role,
            password,
            from,
        } => {
            let mut output = String::new();
            if let Some(from) = from {
                let outcome = client
                    .navigate(&from)
                    .with_context(|| format!("failed to visit {from:?}"))?;
                output.push_str(&describe_outcome(&outcome));
                output.push('\n');
            }
            let args = LoginReqArgs::new(work_id, SecretString::from(password), role);
            let outcome = client.login(args).context("login failed")?;
            output.push_str(&describe_outcome(&outcome));
            Ok(output)
        }
        Command::Signup {
            name,
            work_id,
            email,
            role,
            password,
            confirm_password,
            department,
            position,
            contact_number,
        } => {
            let args = SignupReqArgs::new(name, work_id, email, SecretString::from(password), role)
                .confirm_password(SecretString::from(confirm_password))
                .department(department)
                .position(position)
                .contact_number(contact_number);
            let outcome = client.signup(args).context("signup failed")?;
            Ok(describe_outcome(&outcome))
        }
        Command::Logout => {
            let outcome = client.logout()?;
            Ok(describe_outcome(&outcome))
        }
        Command::Whoami => Ok(whoami(client)),
        Command::Visit { path } => {
            let outcome = client.navigate(&path)?;
            Ok(describe_outcome(&outcome))
        }
        Command::Routes => Ok(list_routes(client)),
    }
}

/// Every renderer leaves off the final newline, `main` prints with `println!`
fn describe_outcome(outcome: &NavigationOutcome) -> String {
    let mut result = String::new();
    for redirect in outcome.redirects.iter() {
        let _ = writeln!(
            result,
            "{} -> {} ({})",
            redirect.from, redirect.to, redirect.reason
        );
    }
    let _ = write!(
        result,
        "Showing {} [{}]",
        outcome.location, outcome.view.access
    );
    result
}

fn whoami(client: &Client) -> String {
    match client.user_info() {
        Some(user_info) => {
            let mut result = format!(
                "{} ({}) logged in as {}",
                user_info.name.as_ref(),
                user_info.work_id.as_ref(),
                user_info.role.label()
            );
            if let Some(email) = &user_info.email {
                let _ = write!(result, "\nEmail: {}", email.as_ref());
            }
            if let Some(department) = &user_info.department {
                let _ = write!(result, "\nDepartment: {department}");
            }
            result
        }
        None => "Not logged in".to_string(),
    }
}

fn list_routes(client: &Client) -> String {
    client
        .routes()
        .iter()
        .map(|spec| format!("{:<32} {}", spec.path, spec.access))
        .collect::<Vec<_>>()
        .join("\n")
}
