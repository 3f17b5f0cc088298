pub mod controller;
pub mod models;
pub mod normalize;
pub mod row;
pub mod view;
pub mod wire;

pub use controller::{AppointmentTableController, ReloadTicket};
pub use models::{Appointment, AppointmentRecord, PatientSummary};
pub use view::{AppointmentRow, RosterRow, RosterView};
