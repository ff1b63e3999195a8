//! Navigation chrome.

use medicare_core::navigation::RouterState;
use medicare_core::policy::RolePolicy;
use medicare_core::session::Role;

use super::model::{Control, Intent, NavEntry, NavigationBar};

pub const APP_TITLE: &str = "MediCare Pro";
pub const LOGOUT_LABEL: &str = "Logout";

/// Builds the menu for `role`, marking the entry of the current view.
pub fn navigation_bar(role: Role, router: &RouterState, policy: &RolePolicy) -> NavigationBar {
    let entries = policy
        .menu_for(role)
        .into_iter()
        .map(|entry| NavEntry {
            view: entry.view,
            label: entry.label.to_string(),
            active: entry.view == router.current_view,
        })
        .collect();

    NavigationBar {
        app_title: APP_TITLE.to_string(),
        role_caption: format!("{} Portal", role.display_name()),
        entries,
        logout: Control::new(LOGOUT_LABEL, Intent::Logout),
    }
}
