use std::sync::Arc;

use tracing::{debug, error};

use booking_cell::{BookingHandoff, BookingOverlay};
use shared_gateway::{ApiClient, GatewayError};
use shared_models::{Doctor, Notifier, Role, Session, SessionError, SessionStore};

use crate::card::{build_card, CardAction, DoctorCard};
use crate::models::{DoctorFilter, NewDoctor};
use crate::view::{DirectoryContent, DirectoryView};
use crate::wire;

const NO_DOCTORS_MESSAGE: &str = "No doctors found.";
const NO_FILTERED_DOCTORS_MESSAGE: &str = "No doctors found with the given filters.";

/// Identifies one reload issued by [`DirectoryController`]. A completion is
/// committed only while its ticket is still the newest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadTicket(u64);

/// Owns the doctor set and the rendered directory. The role classification
/// is parsed once at construction; every reload replaces the in-memory set,
/// except for the optimistic removal after a successful delete.
pub struct DirectoryController {
    api: ApiClient,
    store: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
    overlay: Arc<dyn BookingOverlay>,
    role: Role,
    handoff: BookingHandoff,
    doctors: Vec<Doctor>,
    view: DirectoryView,
    seq: u64,
}

impl DirectoryController {
    pub fn new(
        api: ApiClient,
        store: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
        overlay: Arc<dyn BookingOverlay>,
    ) -> Result<Self, SessionError> {
        let session = Session::read(store.as_ref())?;

        Ok(Self {
            api,
            store,
            notifier,
            overlay,
            role: session.role,
            handoff: BookingHandoff::new(),
            doctors: Vec::new(),
            view: DirectoryView::empty(),
            seq: 0,
        })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn view(&self) -> &DirectoryView {
        &self.view
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn handoff(&self) -> &BookingHandoff {
        &self.handoff
    }

    /// Invoked by the overlay collaborator on close or submit.
    pub fn overlay_closed(&mut self) {
        self.handoff.overlay_closed();
    }

    fn render(&mut self) {
        let cards = self
            .doctors
            .iter()
            .map(|doctor| build_card(doctor, self.role))
            .collect();
        self.view = DirectoryView::cards(cards);
    }

    /// Starts a reload and invalidates every earlier in-flight one.
    pub fn begin_reload(&mut self) -> ReloadTicket {
        self.seq += 1;
        ReloadTicket(self.seq)
    }

    fn is_stale(&self, ticket: ReloadTicket) -> bool {
        ticket.0 != self.seq
    }

    /// Commits an unfiltered load. An empty directory gets its own
    /// placeholder; a failure only logs, leaving the prior view untouched.
    pub fn finish_load_all(&mut self, ticket: ReloadTicket, outcome: Result<Vec<Doctor>, GatewayError>) {
        if self.is_stale(ticket) {
            debug!("Discarding stale doctor load {:?}", ticket);
            return;
        }

        match outcome {
            Ok(doctors) if doctors.is_empty() => {
                self.doctors.clear();
                self.view = DirectoryView::placeholder(NO_DOCTORS_MESSAGE);
            }
            Ok(doctors) => {
                self.doctors = doctors;
                self.render();
            }
            Err(err) => {
                error!("Error loading doctors: {}", err);
            }
        }
    }

    pub async fn load_all(&mut self) {
        let ticket = self.begin_reload();
        let outcome = wire::get_doctors(&self.api).await;
        self.finish_load_all(ticket, outcome);
    }

    /// Commits a filtered load. Zero matches render a placeholder distinct
    /// from the unfiltered-empty one; a failure is reported to the user and
    /// the view stays unchanged.
    pub fn finish_filter(&mut self, ticket: ReloadTicket, outcome: Result<Vec<Doctor>, GatewayError>) {
        if self.is_stale(ticket) {
            debug!("Discarding stale doctor filter {:?}", ticket);
            return;
        }

        match outcome {
            Ok(doctors) if doctors.is_empty() => {
                self.doctors.clear();
                self.view = DirectoryView::placeholder(NO_FILTERED_DOCTORS_MESSAGE);
            }
            Ok(doctors) => {
                self.doctors = doctors;
                self.render();
            }
            Err(err) => {
                error!("Filter error: {}", err);
                self.notifier
                    .notify("Failed to filter doctors, please try again.");
            }
        }
    }

    /// Invoked on every change to any of the three filter inputs with the
    /// current composite state. Deliberately no debounce.
    pub async fn apply_filter(&mut self, filter: DoctorFilter) {
        let ticket = self.begin_reload();
        let outcome = wire::filter_doctors(&self.api, &filter).await;
        self.finish_filter(ticket, outcome);
    }

    /// Routes a card activation through the action bound at render time. A
    /// doctor without a rendered card cannot be activated at all.
    pub async fn dispatch(&mut self, doctor_id: i64) {
        let action = match &self.view.content {
            DirectoryContent::Cards(cards) => cards
                .iter()
                .find(|card| card.doctor_id == doctor_id)
                .map(|card| card.action),
            DirectoryContent::Placeholder(_) => None,
        };

        match action {
            Some(CardAction::Delete) => self.delete_doctor(doctor_id).await,
            Some(CardAction::PromptLogin) => self
                .notifier
                .notify("Please log in as a patient to book an appointment."),
            Some(CardAction::Book) => self.book_now(doctor_id).await,
            None => {}
        }
    }

    /// Admin delete: explicit confirmation, token required, then an
    /// optimistic removal on success. A failure leaves every card in place;
    /// there is no reconciling re-fetch either way.
    pub async fn delete_doctor(&mut self, doctor_id: i64) {
        let Some(doctor) = self.doctors.iter().find(|doctor| doctor.id == doctor_id).cloned()
        else {
            return;
        };

        let prompt = format!("Are you sure you want to delete Dr. {}?", doctor.name);
        if !self.notifier.confirm(&prompt) {
            return;
        }

        let Some(token) = self.store.token() else {
            self.notifier.notify("Unauthorized action.");
            return;
        };

        match wire::delete_doctor(&self.api, doctor_id, &token).await {
            Ok(response) => {
                self.remove_doctor(doctor_id);
                let message = response
                    .message
                    .unwrap_or_else(|| "Doctor deleted.".to_string());
                self.notifier.notify(&message);
            }
            Err(err) => {
                error!("Delete error: {}", err);
                self.notifier.notify("Failed to delete doctor.");
            }
        }
    }

    /// The optimistic state transition behind a successful delete: the
    /// doctor leaves the in-memory set and its card leaves the view, with
    /// no other card affected.
    pub fn remove_doctor(&mut self, doctor_id: i64) {
        self.doctors.retain(|doctor| doctor.id != doctor_id);
        if let DirectoryContent::Cards(cards) = &mut self.view.content {
            cards.retain(|card| card.doctor_id != doctor_id);
        }
    }

    /// Book-now for an authenticated patient; the handoff owns the token
    /// check and the profile fetch.
    pub async fn book_now(&mut self, doctor_id: i64) {
        let Some(doctor) = self.doctors.iter().find(|doctor| doctor.id == doctor_id).cloned()
        else {
            return;
        };

        let token = self.store.token();
        self.handoff
            .begin(
                &self.api,
                &doctor,
                token.as_deref(),
                self.overlay.as_ref(),
                self.notifier.as_ref(),
            )
            .await;
    }

    /// Admin create. Required fields and the token are checked before any
    /// network call; a success reloads the full directory.
    pub async fn add_doctor(&mut self, doctor: NewDoctor) {
        if !doctor.has_required_fields() {
            self.notifier.notify("Please fill in all required fields.");
            return;
        }

        let Some(token) = self.store.token() else {
            self.notifier
                .notify("You must be logged in as admin to add a doctor.");
            return;
        };

        match wire::save_doctor(&self.api, &doctor, &token).await {
            Ok(_) => {
                self.notifier.notify("Doctor added successfully.");
                self.load_all().await;
            }
            Err(err) => {
                error!("Error adding doctor: {}", err);
                self.notifier
                    .notify(&format!("Failed to add doctor: {}", err));
            }
        }
    }

    /// The rendered card for one doctor, if any.
    pub fn card(&self, doctor_id: i64) -> Option<&DoctorCard> {
        match &self.view.content {
            DirectoryContent::Cards(cards) => {
                cards.iter().find(|card| card.doctor_id == doctor_id)
            }
            DirectoryContent::Placeholder(_) => None,
        }
    }
}
