//! Dashboard screen.

use medicare_core::navigation::ViewId;
use medicare_core::policy::{Action, Insight};
use medicare_core::records::AppointmentStatus;

use super::model::{Intent, Item, NavRequest, RenderedScreen, Section};
use super::ScreenContext;

pub(super) fn render(ctx: &ScreenContext<'_>) -> RenderedScreen {
    let summary = &ctx.data.summary;
    let confirmed = summary.count_with_status(AppointmentStatus::Confirmed);
    let pending = summary.count_with_status(AppointmentStatus::Pending);

    let mut stats = Section::titled("Overview")
        .item(
            Item::new(format!("Total Patients: {}", summary.total_patients))
                .detail("+12% from last month")
                .control(ctx.link("View Patients", NavRequest::to(ViewId::PatientList))),
        )
        .item(
            Item::new(format!("Total Appointments: {}", summary.total_appointments))
                .detail("+8% from last week")
                .control(ctx.link("View Appointments", NavRequest::to(ViewId::AppointmentList))),
        );
    if ctx.policy.can_view(ctx.role, Insight::UserCount) {
        stats = stats.item(
            Item::new(format!("Total Users: {}", summary.total_users))
                .detail("+2 new this week"),
        );
    }
    let stats = stats.item(
            Item::new(format!("Today's Appointments: {}", summary.todays_appointments))
                .detail(format!("{} confirmed, {} pending", confirmed, pending)),
        );

    let schedule = summary.schedule.iter().fold(
        Section::titled("Today's Schedule").described("Upcoming appointments for today"),
        |section, entry| {
            section.item(
                Item::new(format!("{}  {}", entry.time, entry.patient))
                    .badge(entry.status.display_name())
                    .detail(format!("{} with {}", entry.kind, entry.doctor)),
            )
        },
    );
    let schedule = schedule.item(
        Item::new("Full schedule")
            .control(ctx.link("View All", NavRequest::to(ViewId::AppointmentList))),
    );

    let quick_actions = Section::titled("Quick Actions")
        .described("Common tasks and shortcuts")
        .item(Item::new("Register a new patient").control(ctx.gated(
            Action::AddPatient,
            Action::AddPatient.label(),
            Intent::Navigate(NavRequest::to(ViewId::PatientCreate)),
        )))
        .item(Item::new("Book an appointment").control(ctx.gated(
            Action::ScheduleAppointment,
            Action::ScheduleAppointment.label(),
            Intent::Navigate(NavRequest::to(ViewId::AppointmentCreate)),
        )))
        .item(Item::new("Browse patient records").control(
            ctx.link("View Patients", NavRequest::to(ViewId::PatientList)),
        ))
        .item(Item::new("Review clinical history").control(
            ctx.link("Medical Records", NavRequest::to(ViewId::MedicalRecords)),
        ));

    RenderedScreen::new(format!("Welcome back, {}", ctx.role.display_name()))
        .subtitle("Here's what's happening in your healthcare system today.")
        .section(stats)
        .section(schedule)
        .section(quick_actions)
}
