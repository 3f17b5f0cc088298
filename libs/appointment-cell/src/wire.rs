use chrono::NaiveDate;
use reqwest::Method;

use shared_gateway::{ApiClient, GatewayError};

use crate::models::{AppointmentRecord, AppointmentsEnvelope};

/// Reserved path segment the backend requires when no name filter is
/// supplied. Part of the external wire contract; the `Option` form never
/// leaves this module.
pub const NO_NAME_FILTER: &str = "null";

/// `GET /appointments/{date}/{patientName}/{token}` — the doctor roster
/// query. This endpoint embeds the token in the path.
pub async fn appointments(
    api: &ApiClient,
    date: NaiveDate,
    patient_name: Option<&str>,
    token: &str,
) -> Result<Vec<AppointmentRecord>, GatewayError> {
    let name = patient_name.unwrap_or(NO_NAME_FILTER);
    let path = format!("/appointments/{}/{}/{}", date.format("%Y-%m-%d"), name, token);

    let envelope: AppointmentsEnvelope = api.request(Method::GET, &path, None, None).await?;
    Ok(envelope.appointments)
}

/// `GET /patient/appointments/{id}/{user}` — one patient's appointment
/// history, viewable from the patient or doctor dashboard. Bearer token.
pub async fn patient_appointments(
    api: &ApiClient,
    patient_id: i64,
    user: &str,
    token: &str,
) -> Result<Vec<AppointmentRecord>, GatewayError> {
    let path = format!("/patient/appointments/{}/{}", patient_id, user);

    let envelope: AppointmentsEnvelope = api.request(Method::GET, &path, Some(token), None).await?;
    Ok(envelope.appointments)
}

/// `GET /patient/appointments/filter/{condition}/{name}` — a patient's
/// appointments filtered by status condition and doctor name. Bearer token.
pub async fn filter_patient_appointments(
    api: &ApiClient,
    condition: &str,
    name: &str,
    token: &str,
) -> Result<Vec<AppointmentRecord>, GatewayError> {
    let path = format!("/patient/appointments/filter/{}/{}", condition, name);

    let envelope: AppointmentsEnvelope = api.request(Method::GET, &path, Some(token), None).await?;
    Ok(envelope.appointments)
}
