//! Executes parsed commands against the shell.

use anyhow::{Result, anyhow, bail};
use serde::Serialize;

use medicare_application::Shell;
use medicare_application::screens::Frame;
use medicare_core::navigation::{RouterState, ViewId};
use medicare_core::search::{AppointmentQuery, PatientQuery};
use medicare_core::session::Credentials;

use crate::command::{Command, ListFilter, help_text};
use crate::render;

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and keep reading.
    Print(String),
    /// Redraw the current frame.
    Redraw,
    Quit,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    authenticated: bool,
    role: Option<String>,
    router: &'a RouterState,
    patient_query: &'a PatientQuery,
    appointment_query: &'a AppointmentQuery,
    frame: Frame,
}

pub async fn execute(shell: &mut Shell, command: Command) -> Result<Outcome> {
    let outcome = match command {
        Command::Login { email, password } => {
            shell.login(Credentials::new(email, password)).await?;
            Outcome::Redraw
        }
        Command::Logout => {
            shell.logout();
            Outcome::Redraw
        }
        Command::Go { view, entity_id } => {
            shell.navigate(view, entity_id).await?;
            Outcome::Redraw
        }
        Command::Menu => {
            let lines: Vec<String> = shell
                .menu()
                .iter()
                .map(|entry| format!("{:<16} go {}", entry.label, entry.view))
                .collect();
            if lines.is_empty() {
                bail!("log in to see the menu");
            }
            Outcome::Print(lines.join("\n"))
        }
        Command::Search(text) => {
            match shell.router().current_view {
                ViewId::PatientList => {
                    let query = PatientQuery {
                        text,
                        ..shell.patient_query().clone()
                    };
                    shell.set_patient_query(query).await?;
                }
                ViewId::AppointmentList => {
                    let query = AppointmentQuery {
                        text,
                        ..shell.appointment_query().clone()
                    };
                    shell.set_appointment_query(query).await?;
                }
                other => bail!("'{}' has no list to search", other),
            }
            Outcome::Redraw
        }
        Command::Filter(filter) => {
            match filter {
                ListFilter::Gender(gender) => {
                    let query = shell.patient_query().clone().with_gender(gender);
                    shell.set_patient_query(query).await?;
                }
                ListFilter::Status(status) => {
                    let query = shell.appointment_query().clone().with_status(status);
                    shell.set_appointment_query(query).await?;
                }
                ListFilter::Date(date) => {
                    let query = shell.appointment_query().clone().with_date(date);
                    shell.set_appointment_query(query).await?;
                }
            }
            Outcome::Redraw
        }
        Command::Set { field, value } => {
            match shell.router().current_view {
                ViewId::PatientCreate => shell.set_patient_field(&field, value)?,
                ViewId::AppointmentCreate => shell.set_appointment_field(&field, value)?,
                other => bail!("'{}' has no form", other),
            }
            Outcome::Redraw
        }
        Command::Submit => {
            match shell.router().current_view {
                ViewId::PatientCreate => {
                    shell.submit_patient().await?;
                }
                ViewId::AppointmentCreate => {
                    shell.submit_appointment().await?;
                }
                other => bail!("'{}' has no form", other),
            }
            Outcome::Redraw
        }
        Command::Press { label, nth } => {
            let frame = shell.render();
            let control = frame
                .find_control(&label, nth)
                .ok_or_else(|| anyhow!("no control labelled '{}'", label))?;
            if !control.enabled {
                bail!("'{}' is disabled", control.label);
            }
            shell.activate(control.intent).await?;
            Outcome::Redraw
        }
        Command::Show => Outcome::Redraw,
        Command::State => {
            let snapshot = Snapshot {
                authenticated: shell.session().is_authenticated(),
                role: shell.session().role().map(|r| r.to_string()),
                router: shell.router(),
                patient_query: shell.patient_query(),
                appointment_query: shell.appointment_query(),
                frame: shell.render(),
            };
            Outcome::Print(serde_json::to_string_pretty(&snapshot)?)
        }
        Command::Help => Outcome::Print(help_text().to_string()),
        Command::Quit => Outcome::Quit,
    };
    Ok(outcome)
}

/// Renders the current frame followed by any pending notifications.
pub fn redraw(shell: &mut Shell) -> String {
    let mut out = render::frame(&shell.render());
    for notification in shell.drain_notifications() {
        out.push('\n');
        out.push_str(&render::notification(&notification));
    }
    out
}
