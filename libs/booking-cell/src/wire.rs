use reqwest::Method;

use shared_gateway::{ApiClient, GatewayError};
use shared_models::Patient;

/// Fetches the calling patient's own profile. This endpoint carries the
/// token as a bearer header, not in the path.
pub async fn patient_details(api: &ApiClient, token: &str) -> Result<Patient, GatewayError> {
    api.request(Method::GET, "/patient/details", Some(token), None)
        .await
}
