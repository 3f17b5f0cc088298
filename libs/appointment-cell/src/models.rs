use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

/// Raw appointment record as served by the backend. Every field is optional
/// because the wire shape varies: newer endpoints flatten patient fields
/// onto the record, older ones nest a patient object, and the id may arrive
/// as `appointmentId` or plain `id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    pub id: Option<i64>,
    pub appointment_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub patient_id: Option<i64>,
    pub patient_name: Option<String>,
    pub patient_phone: Option<String>,
    pub patient_email: Option<String>,
    pub patient: Option<NestedPatient>,
    pub appointment_time: Option<String>,
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time_only: Option<NaiveTime>,
    pub status: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedPatient {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentsEnvelope {
    #[serde(default)]
    pub appointments: Vec<AppointmentRecord>,
}

/// Canonical appointment snapshot produced by the normalizer. Read-only
/// after fetch; a reload replaces the whole set rather than mutating it.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub appointment_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub patient: PatientSummary,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub status: Option<i32>,
}

/// Patient identity as shown in the roster, resolved through the fallback
/// chain in [`crate::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct PatientSummary {
    pub id: Option<i64>,
    pub name: String,
    pub phone: String,
    pub email: String,
}
