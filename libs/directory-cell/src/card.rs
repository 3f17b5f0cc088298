use shared_models::{Doctor, Role};

/// The single action bound to a card, decided by the closed role
/// classification at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Admin removal, behind an explicit confirmation.
    Delete,
    /// Anonymous patients only get a login prompt; no network call.
    PromptLogin,
    /// Authenticated patients start the booking handoff.
    Book,
}

/// One rendered directory card.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorCard {
    pub doctor_id: i64,
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub availability: String,
    pub action: CardAction,
}

pub fn build_card(doctor: &Doctor, role: Role) -> DoctorCard {
    let action = match role {
        Role::Admin => CardAction::Delete,
        Role::Patient => CardAction::PromptLogin,
        Role::LoggedPatient => CardAction::Book,
    };

    DoctorCard {
        doctor_id: doctor.id,
        name: doctor.name.clone(),
        specialty: format!("Specialty: {}", doctor.specialty),
        email: format!("Email: {}", doctor.email),
        availability: format!("Available Times: {}", doctor.available_times.join(", ")),
        action,
    }
}
