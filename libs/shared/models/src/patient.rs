use serde::{Deserialize, Serialize};

/// Patient profile as returned by `GET /patient/details`. The backend never
/// echoes the password field back, so it has no representation here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
}
