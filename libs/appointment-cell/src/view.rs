/// One rendered roster row. Message and error rows span every column of the
/// table, so a view holding one of them holds exactly one row.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterRow {
    Appointment(AppointmentRow),
    Message(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentRow {
    pub patient_id: Option<i64>,
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_email: String,
    pub appointment_id: Option<i64>,
    pub doctor_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosterView {
    pub rows: Vec<RosterRow>,
}

impl RosterView {
    pub fn rows(rows: Vec<RosterRow>) -> Self {
        Self { rows }
    }

    pub fn message(text: &str) -> Self {
        Self {
            rows: vec![RosterRow::Message(text.to_string())],
        }
    }

    pub fn error(text: &str) -> Self {
        Self {
            rows: vec![RosterRow::Error(text.to_string())],
        }
    }
}
