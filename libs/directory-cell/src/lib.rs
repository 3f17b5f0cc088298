pub mod card;
pub mod controller;
pub mod models;
pub mod view;
pub mod wire;

pub use card::{build_card, CardAction, DoctorCard};
pub use controller::{DirectoryController, ReloadTicket};
pub use models::{DoctorFilter, NewDoctor};
pub use view::{DirectoryContent, DirectoryView};
