use crate::models::PatientSummary;
use crate::view::AppointmentRow;

/// Maps one normalized patient plus the appointment and doctor identifiers
/// to a table row node. Display only; the roster offers no row actions.
pub fn build_row(
    patient: &PatientSummary,
    appointment_id: Option<i64>,
    doctor_id: Option<i64>,
) -> AppointmentRow {
    AppointmentRow {
        patient_id: patient.id,
        patient_name: patient.name.clone(),
        patient_phone: patient.phone.clone(),
        patient_email: patient.email.clone(),
        appointment_id,
        doctor_id,
    }
}
