pub mod auth;
pub mod doctor;
pub mod notify;
pub mod patient;

pub use auth::{MemorySessionStore, Role, Session, SessionError, SessionStore, ROLE_KEY, TOKEN_KEY};
pub use doctor::Doctor;
pub use notify::Notifier;
pub use patient::Patient;
