use tracing::{debug, error};

use shared_gateway::ApiClient;
use shared_models::{Doctor, Notifier};

use crate::overlay::BookingOverlay;
use crate::wire;

/// Client-observable states of the book-now sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffState {
    Idle,
    FetchingProfile,
    OverlayOpen,
}

/// Coordinates the only multi-step async sequence behind a doctor card:
/// fetch the caller's own profile, then hand doctor and profile to the
/// external overlay. The overlay owns everything after that.
#[derive(Debug)]
pub struct BookingHandoff {
    state: HandoffState,
}

impl BookingHandoff {
    pub fn new() -> Self {
        Self {
            state: HandoffState::Idle,
        }
    }

    pub fn state(&self) -> HandoffState {
        self.state
    }

    /// A missing token short-circuits with a re-login prompt before any
    /// network call. A failed profile fetch reports the error and returns
    /// to `Idle` without ever opening the overlay.
    pub async fn begin(
        &mut self,
        api: &ApiClient,
        doctor: &Doctor,
        token: Option<&str>,
        overlay: &dyn BookingOverlay,
        notifier: &dyn Notifier,
    ) {
        let Some(token) = token else {
            notifier.notify("Session expired. Please log in again.");
            return;
        };

        debug!("Fetching patient profile for booking with doctor {}", doctor.id);
        self.state = HandoffState::FetchingProfile;

        match wire::patient_details(api, token).await {
            Ok(patient) => {
                overlay.open(doctor, &patient);
                self.state = HandoffState::OverlayOpen;
            }
            Err(err) => {
                error!("Booking error: {}", err);
                notifier.notify("Unable to fetch patient data.");
                self.state = HandoffState::Idle;
            }
        }
    }

    /// Invoked by the overlay collaborator on close or submit.
    pub fn overlay_closed(&mut self) {
        self.state = HandoffState::Idle;
    }
}

impl Default for BookingHandoff {
    fn default() -> Self {
        Self::new()
    }
}
