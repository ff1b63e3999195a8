//! Login screen.

use super::model::{Item, RenderedScreen, Section};

/// Demo accounts; the role follows from the email address.
const DEMO_ACCOUNTS: &[(&str, &str)] = &[
    ("Admin", "admin@medicare.com"),
    ("Doctor", "doctor@medicare.com"),
    ("Receptionist", "receptionist@medicare.com"),
];

pub fn render() -> RenderedScreen {
    let demo = DEMO_ACCOUNTS.iter().fold(
        Section::titled("Demo credentials").described("Any password is accepted"),
        |section, (role, email)| section.item(Item::new(format!("{}: {}", role, email))),
    );

    RenderedScreen::new("MediCare Pro")
        .subtitle("Healthcare Management System")
        .section(
            Section::titled("Sign In")
                .described("Enter your credentials to access the system")
                .item(Item::new("login <email> <password>")),
        )
        .section(demo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_screen_lists_demo_accounts() {
        let screen = render();
        assert_eq!(screen.title, "MediCare Pro");
        assert_eq!(screen.sections[1].items.len(), 3);
        assert!(screen.all_controls().is_empty());
    }
}
