use serde::Deserialize;

use shared_models::Doctor;

/// Composite state of the three directory filter inputs. A blank input
/// means unconstrained, never a match against the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorFilter {
    pub name: Option<String>,
    pub time: Option<String>,
    pub specialty: Option<String>,
}

impl DoctorFilter {
    pub fn from_inputs(name: &str, time: &str, specialty: &str) -> Self {
        Self {
            name: field(name),
            time: field(time),
            specialty: field(specialty),
        }
    }
}

fn field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Admin create payload. `name`, `email`, `password` and `specialty` are
/// required before the request is issued.
#[derive(Debug, Clone)]
pub struct NewDoctor {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub specialty: String,
    pub availability: Vec<String>,
}

impl NewDoctor {
    pub fn has_required_fields(&self) -> bool {
        !(self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.trim().is_empty()
            || self.specialty.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DoctorListEnvelope {
    #[serde(default)]
    pub doctors: Vec<Doctor>,
}

/// Mutation endpoints respond with a `message` field.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: Option<String>,
}
