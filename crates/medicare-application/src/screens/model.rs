//! Renderable screen model.
//!
//! Screens produce plain data; the front end decides how to draw it.

use serde::Serialize;

use medicare_core::navigation::ViewId;
use medicare_core::policy::Action;

/// A request to move the router, emitted by a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavRequest {
    pub view: ViewId,
    pub entity_id: Option<u32>,
}

impl NavRequest {
    pub fn to(view: ViewId) -> Self {
        Self {
            view,
            entity_id: None,
        }
    }

    pub fn with_entity(view: ViewId, entity_id: u32) -> Self {
        Self {
            view,
            entity_id: Some(entity_id),
        }
    }
}

/// What activating a control asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Intent {
    Navigate(NavRequest),
    /// A record action with no navigation of its own (edit, cancel).
    Perform { action: Action, entity_id: u32 },
    Submit,
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Control {
    pub label: String,
    pub intent: Intent,
    pub enabled: bool,
}

impl Control {
    pub fn new(label: impl Into<String>, intent: Intent) -> Self {
        Self {
            label: label.into(),
            intent,
            enabled: true,
        }
    }

    pub fn navigate(label: impl Into<String>, request: NavRequest) -> Self {
        Self::new(label, Intent::Navigate(request))
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// One row inside a section: a record, a stat, or a form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Item {
    pub text: String,
    pub badge: Option<String>,
    pub details: Vec<String>,
    pub controls: Vec<Control>,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    pub fn control(mut self, control: Option<Control>) -> Self {
        self.controls.extend(control);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: Option<String>,
    pub description: Option<String>,
    pub items: Vec<Item>,
}

impl Section {
    pub fn titled(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
            ..Self::default()
        }
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }
}

/// The rendered body of one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedScreen {
    pub title: String,
    pub subtitle: Option<String>,
    /// Header-level controls (e.g. "Add New Patient", "Back to Patients").
    pub controls: Vec<Control>,
    pub sections: Vec<Section>,
    /// Inline error surfaced by the screen (form validation or submission).
    pub error: Option<String>,
}

impl RenderedScreen {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn control(mut self, control: Option<Control>) -> Self {
        self.controls.extend(control);
        self
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Every control on the screen, header first, then section items in order.
    pub fn all_controls(&self) -> Vec<&Control> {
        self.controls
            .iter()
            .chain(
                self.sections
                    .iter()
                    .flat_map(|s| s.items.iter())
                    .flat_map(|i| i.controls.iter()),
            )
            .collect()
    }

    /// Outbound navigation requests this screen can emit.
    pub fn navigation_requests(&self) -> Vec<NavRequest> {
        self.all_controls()
            .into_iter()
            .filter_map(|c| match c.intent {
                Intent::Navigate(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    pub fn has_control(&self, label: &str) -> bool {
        self.all_controls().iter().any(|c| c.label == label)
    }

    /// Finds a control by label (case-insensitive). With several matches the
    /// `nth` one (zero-based) is returned.
    pub fn find_control(&self, label: &str, nth: usize) -> Option<&Control> {
        self.all_controls()
            .into_iter()
            .filter(|c| c.label.eq_ignore_ascii_case(label))
            .nth(nth)
    }
}

/// Left-hand navigation: title, role caption, the permitted menu entries and
/// the logout control at the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationBar {
    pub app_title: String,
    pub role_caption: String,
    pub entries: Vec<NavEntry>,
    pub logout: Control,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub view: ViewId,
    pub label: String,
    pub active: bool,
}

/// Everything the front end draws for one state of the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Frame {
    Login {
        screen: RenderedScreen,
    },
    App {
        navigation: NavigationBar,
        screen: RenderedScreen,
    },
}

impl Frame {
    pub fn screen(&self) -> &RenderedScreen {
        match self {
            Frame::Login { screen } | Frame::App { screen, .. } => screen,
        }
    }

    pub fn navigation(&self) -> Option<&NavigationBar> {
        match self {
            Frame::Login { .. } => None,
            Frame::App { navigation, .. } => Some(navigation),
        }
    }

    /// Screen controls followed by the navigation bar's logout control.
    pub fn all_controls(&self) -> Vec<&Control> {
        let mut controls = self.screen().all_controls();
        if let Some(navigation) = self.navigation() {
            controls.push(&navigation.logout);
        }
        controls
    }

    /// Like [`RenderedScreen::find_control`], but also reaches the
    /// navigation bar.
    pub fn find_control(&self, label: &str, nth: usize) -> Option<&Control> {
        self.all_controls()
            .into_iter()
            .filter(|c| c.label.eq_ignore_ascii_case(label))
            .nth(nth)
    }
}
