//! Medical records placeholder.

use medicare_core::navigation::ViewId;

use super::model::{Item, NavRequest, RenderedScreen, Section};
use super::ScreenContext;

pub(super) fn render(ctx: &ScreenContext<'_>) -> RenderedScreen {
    RenderedScreen::new("Medical Records")
        .subtitle("Access and manage patient medical records")
        .section(
            Section::titled("Medical records management coming soon...").item(
                Item::new("Patient records are available from the patient list")
                    .control(ctx.link("View Patients", NavRequest::to(ViewId::PatientList))),
            ),
        )
}
