//! Patient list, "Add Patient" form and patient profile screens.

use medicare_core::forms::{Draft, FormState, GENDER_OPTIONS, PatientDraft};
use medicare_core::navigation::ViewId;
use medicare_core::policy::Action;
use medicare_core::records::Patient;
use medicare_core::search::RecordFilter;

use super::model::{Control, Intent, Item, NavRequest, RenderedScreen, Section};
use super::{ScreenContext, form_items};

pub(super) fn render_list(ctx: &ScreenContext<'_>) -> RenderedScreen {
    let patients = &ctx.data.patients;

    let section = if patients.is_empty() {
        let hint = if ctx.patient_query.is_unrestricted() {
            "No patients have been added yet."
        } else {
            "Try adjusting your search criteria"
        };
        Section::titled("No patients found").described(hint)
    } else {
        patients.iter().fold(
            Section::titled(format!("{} patients", patients.len())),
            |section, patient| section.item(patient_item(ctx, patient)),
        )
    };

    RenderedScreen::new("Patients")
        .subtitle("Manage patient records and information")
        .control(ctx.gated(
            Action::AddPatient,
            "Add New Patient",
            Intent::Navigate(NavRequest::to(ViewId::PatientCreate)),
        ))
        .section(section)
}

fn patient_item(ctx: &ScreenContext<'_>, patient: &Patient) -> Item {
    let mut item = Item::new(format!("{} (#{})", patient.name, patient.id))
        .badge(patient.status.to_string())
        .detail(format!("{} years, {}", patient.age, patient.gender))
        .detail(format!("{} | {}", patient.email, patient.phone))
        .detail(patient.address.clone())
        .detail(format!("Last visit: {}", patient.last_visit));

    if let Some(next) = patient.next_appointment {
        item = item.detail(format!("Next appointment: {}", next));
    }
    if !patient.medical_conditions.is_empty() {
        item = item.detail(format!("Conditions: {}", patient.medical_conditions.join(", ")));
    }

    item.control(ctx.gated(
        Action::ViewPatientProfile,
        Action::ViewPatientProfile.label(),
        Intent::Navigate(NavRequest::with_entity(ViewId::PatientDetail, patient.id)),
    ))
    .control(ctx.gated(
        Action::EditPatient,
        Action::EditPatient.label(),
        Intent::Perform {
            action: Action::EditPatient,
            entity_id: patient.id,
        },
    ))
}

pub(super) fn render_create(ctx: &ScreenContext<'_>) -> RenderedScreen {
    let form = ctx.patient_form;
    let submitting = form.state() == FormState::Submitting;
    let submit_label = if submitting { "Adding Patient..." } else { "Add Patient" };
    let mut submit = Control::new(submit_label, Intent::Submit);
    if !form.is_submit_enabled() {
        submit = submit.disabled();
    }

    let items = form_items(form.draft(), |field| match field {
        "gender" => GENDER_OPTIONS.iter().map(|g| g.to_string()).collect(),
        _ => Vec::new(),
    });
    let required: Vec<&str> = PatientDraft::fields()
        .iter()
        .filter(|f| f.required)
        .map(|f| f.label)
        .collect();

    let mut screen = RenderedScreen::new("Add New Patient")
        .subtitle("Enter patient information to create a new record")
        .control(ctx.link("Back to Patients", NavRequest::to(ViewId::PatientList)));
    screen.sections.push(Section {
        heading: Some("Patient Information".to_string()),
        description: Some(format!("Required: {}", required.join(", "))),
        items,
    });
    screen.error = form.last_error().map(ToString::to_string);

    screen
        .section(
            Section::titled("Actions")
                .item(
                    Item::new("Discard this form")
                        .control(ctx.link("Cancel", NavRequest::to(ViewId::PatientList))),
                )
                .item(Item::new("Save the new patient record").control(Some(submit))),
        )
}

pub(super) fn render_profile(ctx: &ScreenContext<'_>) -> RenderedScreen {
    let back = ctx.link("Back to Patients", NavRequest::to(ViewId::PatientList));

    let Some(id) = ctx.router.detail_entity() else {
        return RenderedScreen::new("Patient Profile")
            .subtitle("No patient selected")
            .control(back);
    };

    let mut screen = RenderedScreen::new("Patient Profile")
        .subtitle(format!("Patient profile view for ID: {}", id))
        .control(back);

    if let Some(patient) = ctx.data.selected_patient.as_ref().filter(|p| p.id == id) {
        screen = screen.section(
            Section::titled(patient.name.clone())
                .described("Detailed patient profile coming soon...")
                .item(patient_item(ctx, patient)),
        );
    }
    screen
}

#[cfg(test)]
mod tests {
    use medicare_core::navigation::ViewId;
    use medicare_core::policy::Action;
    use medicare_core::search::PatientQuery;
    use medicare_core::session::Role;

    use crate::screens::model::{Intent, NavRequest};
    use crate::screens::testing::Fixture;

    #[test]
    fn test_doctor_has_no_add_or_edit_controls() {
        let screen = Fixture::new(Role::Doctor, ViewId::PatientList).render();

        assert!(!screen.has_control("Add New Patient"));
        assert!(!screen.has_control("Edit"));
        assert!(screen.has_control("View Profile"));
    }

    #[test]
    fn test_view_profile_targets_the_patient() {
        let screen = Fixture::new(Role::Receptionist, ViewId::PatientList).render();
        let control = screen.find_control("View Profile", 1).unwrap();

        assert_eq!(
            control.intent,
            Intent::Navigate(NavRequest::with_entity(ViewId::PatientDetail, 2))
        );
        assert_eq!(
            screen.find_control("Edit", 0).unwrap().intent,
            Intent::Perform {
                action: Action::EditPatient,
                entity_id: 1
            }
        );
    }

    #[test]
    fn test_empty_state_messages() {
        let mut fixture = Fixture::new(Role::Admin, ViewId::PatientList);
        fixture.data.patients.clear();
        let screen = fixture.render();
        assert_eq!(
            screen.sections[0].description.as_deref(),
            Some("No patients have been added yet.")
        );

        fixture.patient_query = PatientQuery::new("zzz");
        let screen = fixture.render();
        assert_eq!(
            screen.sections[0].description.as_deref(),
            Some("Try adjusting your search criteria")
        );
    }

    #[test]
    fn test_create_form_lists_required_fields() {
        let screen = Fixture::new(Role::Receptionist, ViewId::PatientCreate).render();
        let fields = &screen.sections[0].items;

        assert_eq!(fields.len(), 17);
        assert_eq!(fields[0].text, "First Name *: -");
        assert!(fields[5].details[0].contains("Male, Female, Other"));
        assert!(screen.find_control("Add Patient", 0).unwrap().enabled);
        assert!(screen.has_control("Back to Patients"));
    }

    #[test]
    fn test_profile_placeholder() {
        let mut fixture = Fixture::new(Role::Doctor, ViewId::PatientDetail);
        fixture.router.navigate(ViewId::PatientDetail, Some(3));
        fixture.data.selected_patient = fixture.data.patients.iter().find(|p| p.id == 3).cloned();

        let screen = fixture.render();
        assert_eq!(
            screen.subtitle.as_deref(),
            Some("Patient profile view for ID: 3")
        );
        assert_eq!(screen.sections[0].heading.as_deref(), Some("Emily Davis"));
    }
}
