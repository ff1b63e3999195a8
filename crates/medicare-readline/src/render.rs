//! Terminal rendering of shell frames.

use std::fmt::Write;

use colored::Colorize;

use medicare_application::screens::{Control, Frame, NavigationBar, RenderedScreen};
use medicare_application::{Notification, Severity};

pub fn frame(frame: &Frame) -> String {
    let mut out = String::new();
    if let Some(navigation) = frame.navigation() {
        out.push_str(&navigation_bar(navigation));
        out.push('\n');
    }
    out.push_str(&screen(frame.screen()));
    out
}

fn navigation_bar(bar: &NavigationBar) -> String {
    let entries: Vec<String> = bar
        .entries
        .iter()
        .map(|entry| {
            if entry.active {
                format!("[{}]", entry.label).bright_white().bold().to_string()
            } else {
                entry.label.bright_black().to_string()
            }
        })
        .collect();

    format!(
        "{} {} {}\n{}  {}",
        bar.app_title.bright_magenta().bold(),
        "|".bright_black(),
        bar.role_caption.cyan(),
        entries.join("  "),
        control(&bar.logout),
    )
}

fn control(control: &Control) -> String {
    let label = format!("[{}]", control.label);
    if control.enabled {
        label.bright_cyan().to_string()
    } else {
        label.bright_black().to_string()
    }
}

fn controls(controls: &[Control]) -> String {
    controls.iter().map(control).collect::<Vec<_>>().join(" ")
}

pub fn screen(screen: &RenderedScreen) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", screen.title.bold());
    if let Some(subtitle) = &screen.subtitle {
        let _ = writeln!(out, "{}", subtitle.bright_black());
    }
    if !screen.controls.is_empty() {
        let _ = writeln!(out, "{}", controls(&screen.controls));
    }
    if let Some(error) = &screen.error {
        let _ = writeln!(out, "{}", error.red());
    }

    for section in &screen.sections {
        out.push('\n');
        if let Some(heading) = &section.heading {
            let _ = writeln!(out, "{}", heading.yellow().bold());
        }
        if let Some(description) = &section.description {
            let _ = writeln!(out, "{}", description.bright_black());
        }
        for item in &section.items {
            let badge = item
                .badge
                .as_ref()
                .map(|b| format!(" ({})", b).bright_blue().to_string())
                .unwrap_or_default();
            let _ = writeln!(out, "  - {}{}", item.text, badge);
            for detail in &item.details {
                let _ = writeln!(out, "      {}", detail.bright_black());
            }
            if !item.controls.is_empty() {
                let _ = writeln!(out, "      {}", controls(&item.controls));
            }
        }
    }
    out
}

pub fn notification(notification: &Notification) -> String {
    let line = format!("{}: {}", notification.title, notification.description);
    match notification.severity {
        Severity::Success => line.bright_green().to_string(),
        Severity::Error => line.red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medicare_application::screens::{Intent, Item, NavRequest, Section};
    use medicare_core::navigation::ViewId;

    #[test]
    fn test_screen_lists_items_and_controls() {
        colored::control::set_override(false);
        let rendered = RenderedScreen::new("Patients")
            .subtitle("Manage patient records and information")
            .section(
                Section::titled("1 patients").item(
                    Item::new("Sarah Johnson (#1)")
                        .badge("Active")
                        .control(Some(Control::navigate(
                            "View Profile",
                            NavRequest::with_entity(ViewId::PatientDetail, 1),
                        )))
                        .control(Some(Control::new("Save", Intent::Submit).disabled())),
                ),
            );

        let text = screen(&rendered);
        assert!(text.contains("  - Sarah Johnson (#1) (Active)"));
        assert!(text.contains("[View Profile] [Save]"));
    }

    #[test]
    fn test_navigation_bar_draws_logout_control() {
        colored::control::set_override(false);
        let bar = NavigationBar {
            app_title: "MediCare Pro".to_string(),
            role_caption: "Admin Portal".to_string(),
            entries: Vec::new(),
            logout: Control::new("Logout", Intent::Logout),
        };
        let text = navigation_bar(&bar);
        assert!(text.starts_with("MediCare Pro | Admin Portal"));
        assert!(text.ends_with("[Logout]"));
    }

    #[test]
    fn test_notification_line() {
        colored::control::set_override(false);
        let line = notification(&Notification::error("Login Failed", "Please enter valid credentials."));
        assert_eq!(line, "Login Failed: Please enter valid credentials.");
    }
}
