use shared_models::{Doctor, Patient};

/// The external booking modal. This layer only hands it a doctor and the
/// caller's profile; slot choice and submission happen inside the overlay.
pub trait BookingOverlay: Send + Sync {
    fn open(&self, doctor: &Doctor, patient: &Patient);
}
