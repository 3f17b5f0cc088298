use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, error};

use shared_gateway::{ApiClient, GatewayError};
use shared_models::{Notifier, SessionStore};

use crate::models::AppointmentRecord;
use crate::normalize::normalize;
use crate::row::build_row;
use crate::view::{RosterRow, RosterView};

const NO_APPOINTMENTS_MESSAGE: &str = "No Appointments found for today.";
const LOAD_ERROR_MESSAGE: &str = "Error loading appointments. Try again later.";

/// Identifies one reload issued by [`AppointmentTableController`]. A
/// completion is committed only while its ticket is still the newest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadTicket(u64);

/// Owns the roster filter state and the rendered table. Each of the three
/// triggers mutates exactly one field and then reloads; reloads are never
/// merged or coalesced.
pub struct AppointmentTableController {
    api: ApiClient,
    store: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
    selected_date: NaiveDate,
    name_filter: Option<String>,
    seq: u64,
    view: RosterView,
}

impl AppointmentTableController {
    pub fn new(api: ApiClient, store: Arc<dyn SessionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            store,
            notifier,
            selected_date: Local::now().date_naive(),
            name_filter: None,
            seq: 0,
            view: RosterView::default(),
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn name_filter(&self) -> Option<&str> {
        self.name_filter.as_deref()
    }

    pub fn view(&self) -> &RosterView {
        &self.view
    }

    /// Free-text name input. Blank input clears the filter.
    pub async fn set_name_input(&mut self, input: &str) {
        let trimmed = input.trim();
        self.name_filter = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.reload().await;
    }

    /// The "jump to today" shortcut.
    pub async fn jump_to_today(&mut self) {
        self.selected_date = Local::now().date_naive();
        self.reload().await;
    }

    /// Date picker change.
    pub async fn set_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.reload().await;
    }

    /// Starts a reload and invalidates every earlier in-flight one.
    pub fn begin_reload(&mut self) -> ReloadTicket {
        self.seq += 1;
        ReloadTicket(self.seq)
    }

    /// Commits a completed reload unless a newer one has started since.
    pub fn finish_reload(
        &mut self,
        ticket: ReloadTicket,
        outcome: Result<Vec<AppointmentRecord>, GatewayError>,
    ) {
        if ticket.0 != self.seq {
            debug!("Discarding stale appointment reload {:?}", ticket);
            return;
        }

        match outcome {
            Ok(records) if records.is_empty() => {
                self.view = RosterView::message(NO_APPOINTMENTS_MESSAGE);
            }
            Ok(records) => {
                let rows = records
                    .iter()
                    .map(normalize)
                    .map(|appointment| {
                        RosterRow::Appointment(build_row(
                            &appointment.patient,
                            appointment.appointment_id,
                            appointment.doctor_id,
                        ))
                    })
                    .collect();
                self.view = RosterView::rows(rows);
            }
            Err(err) => {
                error!("Error loading appointments: {}", err);
                self.view = RosterView::error(LOAD_ERROR_MESSAGE);
            }
        }
    }

    /// One full fetch-and-render pass for the current filter state. A
    /// missing token short-circuits with a re-login prompt before any
    /// network call.
    pub async fn reload(&mut self) {
        let Some(token) = self.store.token() else {
            self.notifier.notify("Session expired. Please log in again.");
            return;
        };

        let ticket = self.begin_reload();
        let outcome =
            crate::wire::appointments(&self.api, self.selected_date, self.name_filter.as_deref(), &token)
                .await;
        self.finish_reload(ticket, outcome);
    }
}
