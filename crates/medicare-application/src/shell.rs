//! The application shell: session, router and screen state behind one
//! controller.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use medicare_core::clock::Clock;
use medicare_core::error::{MedicareError, Result};
use medicare_core::forms::{AppointmentDraft, CreateForm, PatientDraft, SubmitGateway};
use medicare_core::navigation::{RouterState, ViewId};
use medicare_core::policy::{MenuEntry, RolePolicy};
use medicare_core::records::{AppointmentRepository, DirectoryRepository, PatientRepository};
use medicare_core::search::{AppointmentQuery, PatientQuery};
use medicare_core::session::{AuthGateway, Credentials, Role, Session};

use crate::notification::Notification;
use crate::screens::{self, Frame, Intent, ScreenContext, ScreenData};

/// External collaborators of the shell.
#[derive(Clone)]
pub struct ShellServices {
    pub auth: Arc<dyn AuthGateway>,
    pub patients: Arc<dyn PatientRepository>,
    pub appointments: Arc<dyn AppointmentRepository>,
    pub directory: Arc<dyn DirectoryRepository>,
    pub patient_gateway: Arc<dyn SubmitGateway<PatientDraft>>,
    pub appointment_gateway: Arc<dyn SubmitGateway<AppointmentDraft>>,
    pub clock: Arc<dyn Clock>,
}

/// Owns all mutable front-end state.
///
/// Session and router only change through `login`, `logout` and `navigate`.
/// Every operation takes `&mut self`, so at most one login or submission is
/// in flight at a time.
pub struct Shell {
    services: ShellServices,
    policy: RolePolicy,
    session: Session,
    router: RouterState,
    patient_query: PatientQuery,
    appointment_query: AppointmentQuery,
    patient_form: CreateForm<PatientDraft>,
    appointment_form: CreateForm<AppointmentDraft>,
    data: ScreenData,
    notifications: Vec<Notification>,
}

impl Shell {
    /// Creates a shell in the unauthenticated state.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if `policy` leaves some role without a
    /// dashboard or lists a view twice.
    pub fn new(services: ShellServices, policy: RolePolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self {
            services,
            policy,
            session: Session::new(),
            router: RouterState::new(),
            patient_query: PatientQuery::default(),
            appointment_query: AppointmentQuery::default(),
            patient_form: CreateForm::new(),
            appointment_form: CreateForm::new(),
            data: ScreenData::default(),
            notifications: Vec::new(),
        })
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn router(&self) -> &RouterState {
        &self.router
    }

    pub fn policy(&self) -> &RolePolicy {
        &self.policy
    }

    pub fn patient_query(&self) -> &PatientQuery {
        &self.patient_query
    }

    pub fn appointment_query(&self) -> &AppointmentQuery {
        &self.appointment_query
    }

    pub fn patient_form(&self) -> &CreateForm<PatientDraft> {
        &self.patient_form
    }

    pub fn appointment_form(&self) -> &CreateForm<AppointmentDraft> {
        &self.appointment_form
    }

    pub fn today(&self) -> NaiveDate {
        self.services.clock.today()
    }

    /// Notifications raised since the last drain.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn require_role(&self) -> Result<Role> {
        self.session.role().ok_or(MedicareError::NotAuthenticated)
    }

    // ============================================================================
    // Session
    // ============================================================================

    /// Logs in through the auth gateway.
    ///
    /// On success the session becomes authenticated, the router is reset to
    /// the dashboard and a welcome notification is raised.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyAuthenticated` while a session is open, `InvalidCredentials`
    /// when email or password is empty, the gateway's error, or the error of
    /// loading the landing view. The session and router are left unchanged in
    /// every case.
    pub async fn login(&mut self, credentials: Credentials) -> Result<Role> {
        if let Err(err) = self.session.ensure_unauthenticated() {
            warn!("[Shell] Login rejected: {}", err);
            return Err(err);
        }

        let role = match self.authenticate(&credentials).await {
            Ok(role) => role,
            Err(err) => {
                warn!("[Shell] Login failed: {}", err);
                self.notifications.push(Notification::error(
                    "Login Failed",
                    "Please enter valid credentials.",
                ));
                return Err(err);
            }
        };

        self.session.authenticate_as(role)?;
        self.clear_workspace();
        let landing = self.policy.default_view(role);
        self.router.navigate(landing, None);

        if let Err(err) = self.refresh().await {
            warn!("[Shell] Could not load {} for {}: {}", landing, role, err);
            self.session.logout();
            self.clear_workspace();
            self.notifications.push(Notification::error(
                "Login Failed",
                "The dashboard could not be loaded. Please try again.",
            ));
            return Err(err);
        }

        info!("[Shell] Logged in as {}", role);
        self.notifications.push(Notification::success(
            "Login Successful",
            format!("Welcome to MediCare Pro, {}!", role),
        ));
        Ok(role)
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<Role> {
        credentials.validate()?;
        self.services.auth.authenticate(credentials).await
    }

    /// Returns to the login screen, discarding all view state.
    pub fn logout(&mut self) {
        if let Some(role) = self.session.role() {
            info!("[Shell] Logging out {}", role);
        }
        self.session.logout();
        self.clear_workspace();
    }

    fn clear_workspace(&mut self) {
        self.router.reset();
        self.patient_query = PatientQuery::default();
        self.appointment_query = AppointmentQuery::default();
        self.patient_form.reset();
        self.appointment_form.reset();
        self.data = ScreenData::default();
    }

    // ============================================================================
    // Navigation
    // ============================================================================

    /// Moves the router to `view`.
    ///
    /// # Arguments
    ///
    /// * `view` - Target view
    /// * `entity_id` - Entity to select; `None` keeps the current selection
    ///
    /// # Errors
    ///
    /// Returns `NotAuthenticated` without a session and `Forbidden` when the
    /// role policy does not allow the view. The router is unchanged on error.
    pub async fn navigate(&mut self, view: ViewId, entity_id: Option<u32>) -> Result<()> {
        let role = self.require_role()?;
        if !self.policy.is_allowed(role, view) {
            warn!("[Shell] {} may not open {}", role, view);
            return Err(MedicareError::Forbidden { role, view });
        }

        debug!("[Shell] Navigating to {} (entity: {:?})", view, entity_id);
        self.router.navigate(view, entity_id);
        self.refresh().await
    }

    /// Menu rows for the logged-in role; empty without a session.
    pub fn menu(&self) -> Vec<&MenuEntry> {
        match self.session.role() {
            Some(role) => self.policy.menu_for(role),
            None => Vec::new(),
        }
    }

    /// Carries out a control's intent.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation. `Submit` outside a
    /// create view is an `Internal` error.
    pub async fn activate(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::Navigate(request) => self.navigate(request.view, request.entity_id).await,
            Intent::Perform { action, entity_id } => {
                let role = self.require_role()?;
                if !self.policy.can_perform(role, action) {
                    return Err(MedicareError::Forbidden {
                        role,
                        view: action.gate(),
                    });
                }
                info!("[Shell] {} requested on #{}", action, entity_id);
                Ok(())
            }
            Intent::Submit => match self.router.current_screen() {
                ViewId::PatientCreate => self.submit_patient().await.map(|_| ()),
                ViewId::AppointmentCreate => self.submit_appointment().await.map(|_| ()),
                other => Err(MedicareError::internal(format!(
                    "nothing to submit on {}",
                    other
                ))),
            },
            Intent::Logout => {
                self.logout();
                Ok(())
            }
        }
    }

    // ============================================================================
    // List queries
    // ============================================================================

    pub async fn set_patient_query(&mut self, query: PatientQuery) -> Result<()> {
        self.require_role()?;
        self.patient_query = query;
        self.refresh().await
    }

    pub async fn set_appointment_query(&mut self, query: AppointmentQuery) -> Result<()> {
        self.require_role()?;
        self.appointment_query = query;
        self.refresh().await
    }

    // ============================================================================
    // Create forms
    // ============================================================================

    pub fn set_patient_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.require_role()?;
        self.patient_form.set_field(name, value)
    }

    pub fn set_appointment_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.require_role()?;
        self.appointment_form.set_field(name, value)
    }

    /// Submits the "Add Patient" form.
    ///
    /// On success the draft is reset and the router moves to the patient
    /// list. On failure the form stays on screen with the error attached.
    pub async fn submit_patient(&mut self) -> Result<u32> {
        self.require_create_view(ViewId::PatientCreate)?;
        let draft = self.patient_form.draft().clone();
        let gateway = Arc::clone(&self.services.patient_gateway);

        match self.patient_form.submit(&*gateway).await {
            Ok(id) => {
                info!("[Shell] Patient #{} created", id);
                self.notifications.push(Notification::success(
                    "Patient Added Successfully",
                    format!(
                        "{} {} has been added to the system.",
                        draft.first_name, draft.last_name
                    ),
                ));
                self.router.navigate(ViewId::PatientList, None);
                self.refresh().await?;
                Ok(id)
            }
            Err(err) => Err(self.submission_error(err)),
        }
    }

    /// Submits the "Schedule Appointment" form.
    pub async fn submit_appointment(&mut self) -> Result<u32> {
        self.require_create_view(ViewId::AppointmentCreate)?;
        let draft = self.appointment_form.draft().clone();
        let gateway = Arc::clone(&self.services.appointment_gateway);

        match self.appointment_form.submit(&*gateway).await {
            Ok(id) => {
                info!("[Shell] Appointment #{} scheduled", id);
                let description = self.describe_appointment(&draft);
                self.notifications.push(Notification::success(
                    "Appointment Scheduled Successfully",
                    description,
                ));
                self.router.navigate(ViewId::AppointmentList, None);
                self.refresh().await?;
                Ok(id)
            }
            Err(err) => Err(self.submission_error(err)),
        }
    }

    fn require_create_view(&self, view: ViewId) -> Result<()> {
        let role = self.require_role()?;
        if !self.policy.is_allowed(role, view) {
            return Err(MedicareError::Forbidden { role, view });
        }
        Ok(())
    }

    fn submission_error(&mut self, err: MedicareError) -> MedicareError {
        warn!("[Shell] Submission rejected: {}", err);
        let title = match &err {
            MedicareError::Validation { .. } => "Missing Required Fields",
            MedicareError::SubmissionInFlight { .. } => "Submission In Progress",
            _ => "Submission Failed",
        };
        self.notifications
            .push(Notification::error(title, err.to_string()));
        err
    }

    /// "Appointment scheduled for <patient> with <doctor> on <date> at <time>."
    fn describe_appointment(&self, draft: &AppointmentDraft) -> String {
        let patient = self
            .data
            .patient_options
            .iter()
            .find(|p| p.id.to_string() == draft.patient_id)
            .map(|p| p.name.as_str())
            .unwrap_or(draft.patient_id.as_str());
        let doctor = self
            .data
            .doctors
            .iter()
            .find(|d| d.id.to_string() == draft.doctor_id)
            .map(|d| d.name.as_str())
            .unwrap_or(draft.doctor_id.as_str());

        format!(
            "Appointment scheduled for {} with {} on {} at {}.",
            patient, doctor, draft.appointment_date, draft.appointment_time
        )
    }

    // ============================================================================
    // Rendering
    // ============================================================================

    /// Reloads the records the current view shows.
    async fn refresh(&mut self) -> Result<()> {
        let today = self.today();
        let services = &self.services;

        match self.router.current_screen() {
            ViewId::Dashboard => {
                self.data.summary = services.directory.dashboard_summary().await?;
            }
            ViewId::PatientList => {
                self.data.patients = services.patients.query(&self.patient_query, today).await?;
            }
            ViewId::PatientDetail => {
                self.data.selected_patient = match self.router.detail_entity() {
                    Some(id) => services.patients.find_by_id(id).await?,
                    None => None,
                };
            }
            ViewId::AppointmentList => {
                self.data.appointments = services
                    .appointments
                    .query(&self.appointment_query, today)
                    .await?;
            }
            ViewId::AppointmentCreate => {
                self.data.patient_options = services.patients.list().await?;
                self.data.doctors = services.directory.doctors().await?;
            }
            ViewId::PatientCreate | ViewId::MedicalRecords => {}
        }
        Ok(())
    }

    /// Everything the front end needs to draw the current state.
    pub fn render(&self) -> Frame {
        let Some(role) = self.session.role() else {
            return Frame::Login {
                screen: screens::render_login(),
            };
        };

        let ctx = ScreenContext {
            role,
            router: &self.router,
            policy: &self.policy,
            data: &self.data,
            patient_query: &self.patient_query,
            appointment_query: &self.appointment_query,
            patient_form: &self.patient_form,
            appointment_form: &self.appointment_form,
            today: self.today(),
        };

        Frame::App {
            navigation: screens::navigation_bar(role, &self.router, &self.policy),
            screen: screens::render(&ctx),
        }
    }
}
