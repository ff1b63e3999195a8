//! REPL command grammar.

use anyhow::{Result, anyhow, bail};

use medicare_core::navigation::{ViewId, current_screen_for};
use medicare_core::records::{AppointmentStatus, Gender};
use medicare_core::search::{DateFilter, Filter};

/// Command words offered by completion, in help order.
pub const COMMAND_WORDS: &[&str] = &[
    "login", "logout", "go", "menu", "search", "filter", "set", "submit", "press", "show",
    "state", "help", "quit",
];

pub const FILTER_KINDS: &[&str] = &["gender", "status", "date"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    Gender(Filter<Gender>),
    Status(Filter<AppointmentStatus>),
    Date(DateFilter),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { email: String, password: String },
    Logout,
    Go { view: ViewId, entity_id: Option<u32> },
    Menu,
    Search(String),
    Filter(ListFilter),
    Set { field: String, value: String },
    Submit,
    /// Activates the `nth` (zero-based) control with this label.
    Press { label: String, nth: usize },
    Show,
    State,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "login" => {
                let mut parts = rest.split_whitespace();
                Command::Login {
                    email: parts.next().unwrap_or_default().to_string(),
                    password: parts.next().unwrap_or_default().to_string(),
                }
            }
            "logout" => Command::Logout,
            "go" => {
                let mut parts = rest.split_whitespace();
                let view = parts
                    .next()
                    .ok_or_else(|| anyhow!("usage: go <view> [id]"))?;
                let entity_id = parts
                    .next()
                    .map(|id| id.parse().map_err(|_| anyhow!("invalid id '{}'", id)))
                    .transpose()?;
                Command::Go {
                    view: current_screen_for(view),
                    entity_id,
                }
            }
            "menu" => Command::Menu,
            "search" => Command::Search(rest.to_string()),
            "filter" => Command::Filter(parse_filter(rest)?),
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    bail!("usage: set <field> <value>");
                }
                Command::Set {
                    field: field.to_string(),
                    value: value.trim().to_string(),
                }
            }
            "submit" => Command::Submit,
            "press" => parse_press(rest)?,
            "show" | "" => Command::Show,
            "state" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("unknown command '{}' (try 'help')", other),
        };
        Ok(command)
    }
}

fn parse_filter(rest: &str) -> Result<ListFilter> {
    let (kind, value) = rest
        .split_once(char::is_whitespace)
        .ok_or_else(|| anyhow!("usage: filter gender|status|date <value>"))?;
    let value = value.trim();

    match kind {
        "gender" => value
            .parse()
            .map(ListFilter::Gender)
            .map_err(|_| anyhow!("unknown gender '{}'", value)),
        "status" => value
            .parse()
            .map(ListFilter::Status)
            .map_err(|_| anyhow!("unknown status '{}'", value)),
        "date" => value
            .parse()
            .map(ListFilter::Date)
            .map_err(|_| anyhow!("unknown date window '{}'", value)),
        other => bail!("unknown filter '{}'", other),
    }
}

/// `press <label> [n]`, where `n` is one-based.
fn parse_press(rest: &str) -> Result<Command> {
    if rest.is_empty() {
        bail!("usage: press <label> [n]");
    }
    let (label, nth) = rest
        .rsplit_once(char::is_whitespace)
        .and_then(|(label, n)| {
            n.parse::<usize>()
                .ok()
                .map(|n| (label.trim(), n.saturating_sub(1)))
        })
        .unwrap_or((rest, 0));
    Ok(Command::Press {
        label: label.to_string(),
        nth,
    })
}

pub fn help_text() -> &'static str {
    "\
login <email> <password>   sign in (role follows from the email)
logout                     sign out
go <view> [id]             open a view: dashboard, patients, add-patient,
                           patient-profile, appointments, schedule-appointment,
                           medical-records
menu                       list the views you can open
search <text>              search the current list
filter gender|status|date <value>
set <field> <value>        fill a form field
submit                     submit the current form
press <label> [n]          activate the n-th control with that label
show                       redraw the current screen
state                      dump the shell state as JSON
quit                       leave"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_go() {
        assert_eq!(
            Command::parse("go patient-profile 3").unwrap(),
            Command::Go {
                view: ViewId::PatientDetail,
                entity_id: Some(3)
            }
        );
        assert_eq!(
            Command::parse("go nowhere").unwrap(),
            Command::Go {
                view: ViewId::Dashboard,
                entity_id: None
            }
        );
        assert!(Command::parse("go patients x").is_err());
    }

    #[test]
    fn test_parse_login_keeps_missing_password_empty() {
        assert_eq!(
            Command::parse("login admin@x.com").unwrap(),
            Command::Login {
                email: "admin@x.com".to_string(),
                password: String::new()
            }
        );
    }

    #[test]
    fn test_parse_filters() {
        assert_eq!(
            Command::parse("filter status cancelled").unwrap(),
            Command::Filter(ListFilter::Status(Filter::Only(AppointmentStatus::Cancelled)))
        );
        assert_eq!(
            Command::parse("filter gender all").unwrap(),
            Command::Filter(ListFilter::Gender(Filter::All))
        );
        assert_eq!(
            Command::parse("filter date today").unwrap(),
            Command::Filter(ListFilter::Date(DateFilter::Today))
        );
        assert!(Command::parse("filter mood happy").is_err());
    }

    #[test]
    fn test_parse_set_keeps_spaces_in_value() {
        assert_eq!(
            Command::parse("set address 123 Main St").unwrap(),
            Command::Set {
                field: "address".to_string(),
                value: "123 Main St".to_string()
            }
        );
    }

    #[test]
    fn test_parse_press() {
        assert_eq!(
            Command::parse("press View Profile 2").unwrap(),
            Command::Press {
                label: "View Profile".to_string(),
                nth: 1
            }
        );
        assert_eq!(
            Command::parse("press Add New Patient").unwrap(),
            Command::Press {
                label: "Add New Patient".to_string(),
                nth: 0
            }
        );
    }

    #[test]
    fn test_unknown_command() {
        assert!(Command::parse("dance").is_err());
    }
}
