use reqwest::Method;
use serde_json::json;

use shared_gateway::{ApiClient, GatewayError};
use shared_models::Doctor;

use crate::models::{DoctorFilter, DoctorListEnvelope, MessageResponse, NewDoctor};

/// Literal segment the filter endpoint expects for an unconstrained field.
pub const UNFILTERED: &str = "null";

/// `GET /doctor` — the unfiltered directory.
pub async fn get_doctors(api: &ApiClient) -> Result<Vec<Doctor>, GatewayError> {
    let envelope: DoctorListEnvelope = api.request(Method::GET, "/doctor", None, None).await?;
    Ok(envelope.doctors)
}

/// `GET /doctor/filter/{name}/{time}/{specialty}` — absent fields travel as
/// the literal `null` segment required by the path layout.
pub async fn filter_doctors(
    api: &ApiClient,
    filter: &DoctorFilter,
) -> Result<Vec<Doctor>, GatewayError> {
    let path = format!(
        "/doctor/filter/{}/{}/{}",
        filter.name.as_deref().unwrap_or(UNFILTERED),
        filter.time.as_deref().unwrap_or(UNFILTERED),
        filter.specialty.as_deref().unwrap_or(UNFILTERED),
    );

    let envelope: DoctorListEnvelope = api.request(Method::GET, &path, None, None).await?;
    Ok(envelope.doctors)
}

/// `POST /doctor/{token}` — admin create. This endpoint embeds the token in
/// the path, not in a header.
pub async fn save_doctor(
    api: &ApiClient,
    doctor: &NewDoctor,
    token: &str,
) -> Result<MessageResponse, GatewayError> {
    let path = format!("/doctor/{}", token);
    let body = json!({
        "name": doctor.name,
        "email": doctor.email,
        "phone": doctor.phone,
        "password": doctor.password,
        "specialty": doctor.specialty,
        "availableTimes": doctor.availability,
    });

    api.request(Method::POST, &path, None, Some(body)).await
}

/// `DELETE /doctor/{id}/{token}` — admin delete, token in the path.
pub async fn delete_doctor(
    api: &ApiClient,
    doctor_id: i64,
    token: &str,
) -> Result<MessageResponse, GatewayError> {
    let path = format!("/doctor/{}/{}", doctor_id, token);
    api.request(Method::DELETE, &path, None, None).await
}
