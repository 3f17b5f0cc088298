use serde::{Deserialize, Serialize};

/// Canonical doctor record. The backend serves camelCase JSON, but older
/// rows and some endpoints use alternate spellings; the aliases fold those
/// shapes into this one at the deserialization boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    #[serde(alias = "speciality")]
    pub specialty: String,
    pub email: String,
    #[serde(default, alias = "available_times")]
    pub available_times: Vec<String>,
}
