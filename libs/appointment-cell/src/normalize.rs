use chrono::NaiveDateTime;

use crate::models::{Appointment, AppointmentRecord, PatientSummary};

const UNKNOWN_PATIENT: &str = "Unknown";

/// Folds the backend's variable record shapes into the canonical
/// [`Appointment`]. Patient identity resolves through a fallback chain:
/// flattened field first, then the nested patient object, then a fixed
/// default ("Unknown" for the name, empty strings for phone and email).
pub fn normalize(record: &AppointmentRecord) -> Appointment {
    let nested = record.patient.as_ref();

    let patient = PatientSummary {
        id: record
            .patient_id
            .or_else(|| nested.and_then(|patient| patient.id)),
        name: record
            .patient_name
            .clone()
            .or_else(|| nested.and_then(|patient| patient.name.clone()))
            .unwrap_or_else(|| UNKNOWN_PATIENT.to_string()),
        phone: record
            .patient_phone
            .clone()
            .or_else(|| nested.and_then(|patient| patient.phone.clone()))
            .unwrap_or_default(),
        email: record
            .patient_email
            .clone()
            .or_else(|| nested.and_then(|patient| patient.email.clone()))
            .unwrap_or_default(),
    };

    // Date and time come pre-split when the backend serializes its helper
    // accessors; otherwise they are carved out of the combined timestamp.
    let combined = record.appointment_time.as_deref().and_then(|timestamp| {
        NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M"))
            .ok()
    });

    Appointment {
        appointment_id: record.appointment_id.or(record.id),
        doctor_id: record.doctor_id,
        patient,
        date: record
            .appointment_date
            .or_else(|| combined.map(|datetime| datetime.date())),
        time: record
            .appointment_time_only
            .or_else(|| combined.map(|datetime| datetime.time())),
        status: record.status,
    }
}
