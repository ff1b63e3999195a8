//! Appointment list and "Schedule Appointment" form screens.

use strum::IntoEnumIterator;

use medicare_core::forms::FormState;
use medicare_core::navigation::ViewId;
use medicare_core::policy::Action;
use medicare_core::records::{
    Appointment, AppointmentType, DURATIONS_MINUTES, Priority, TIME_SLOTS,
};
use medicare_core::search::RecordFilter;

use super::model::{Control, Intent, Item, NavRequest, RenderedScreen, Section};
use super::{ScreenContext, form_items};

pub(super) fn render_list(ctx: &ScreenContext<'_>) -> RenderedScreen {
    let appointments = &ctx.data.appointments;

    let section = if appointments.is_empty() {
        let hint = if ctx.appointment_query.is_unrestricted() {
            "No appointments have been scheduled yet."
        } else {
            "Try adjusting your search criteria"
        };
        Section::titled("No appointments found").described(hint)
    } else {
        appointments.iter().fold(
            Section::titled(format!("{} appointments", appointments.len())),
            |section, appointment| section.item(appointment_item(ctx, appointment)),
        )
    };

    RenderedScreen::new("Appointments")
        .subtitle("Manage and schedule patient appointments")
        .control(ctx.gated(
            Action::ScheduleAppointment,
            Action::ScheduleAppointment.label(),
            Intent::Navigate(NavRequest::to(ViewId::AppointmentCreate)),
        ))
        .section(section)
}

fn appointment_item(ctx: &ScreenContext<'_>, appointment: &Appointment) -> Item {
    let perform = |action: Action| {
        ctx.gated(
            action,
            action.label(),
            Intent::Perform {
                action,
                entity_id: appointment.id,
            },
        )
    };

    let mut item = Item::new(format!(
        "{} {}  {}",
        appointment.date, appointment.time, appointment.patient_name
    ))
    .badge(appointment.status.display_name())
    .detail(format!(
        "{} with {} ({} min)",
        appointment.kind, appointment.doctor_name, appointment.duration_minutes
    ))
    .detail(appointment.patient_phone.clone());
    if !appointment.notes.is_empty() {
        item = item.detail(appointment.notes.clone());
    }

    item.control(perform(Action::ViewAppointmentDetails))
        .control(perform(Action::EditAppointment))
        .control(perform(Action::CancelAppointment))
}

pub(super) fn render_create(ctx: &ScreenContext<'_>) -> RenderedScreen {
    let form = ctx.appointment_form;
    let submit_label = match form.state() {
        FormState::Submitting => "Scheduling...",
        FormState::Editing => "Schedule Appointment",
    };
    let mut submit = Control::new(submit_label, Intent::Submit);
    if !form.is_submit_enabled() {
        submit = submit.disabled();
    }

    let data = ctx.data;
    let items = form_items(form.draft(), |field| match field {
        "patientId" => data
            .patient_options
            .iter()
            .map(|p| format!("{}={}", p.id, p.name))
            .collect(),
        "doctorId" => data
            .doctors
            .iter()
            .map(|d| format!("{}={} ({})", d.id, d.name, d.specialty))
            .collect(),
        "appointmentTime" => TIME_SLOTS.iter().map(|s| s.to_string()).collect(),
        "duration" => DURATIONS_MINUTES.iter().map(|m| m.to_string()).collect(),
        "priority" => Priority::iter().map(|p| p.to_string()).collect(),
        "appointmentType" => AppointmentType::iter().map(|t| t.to_string()).collect(),
        _ => Vec::new(),
    });

    let mut screen = RenderedScreen::new("Schedule New Appointment")
        .subtitle("Book a new appointment for a patient")
        .control(ctx.link("Back to Appointments", NavRequest::to(ViewId::AppointmentList)));
    screen.sections.push(Section {
        heading: Some("Appointment Details".to_string()),
        description: Some(format!("Earliest date: {}", ctx.today)),
        items,
    });
    screen.error = form.last_error().map(ToString::to_string);

    screen.section(
        Section::titled("Actions")
            .item(
                Item::new("Discard this form").control(
                    ctx.link("Cancel", NavRequest::to(ViewId::AppointmentList)),
                ),
            )
            .item(Item::new("Book the appointment").control(Some(submit))),
    )
}
