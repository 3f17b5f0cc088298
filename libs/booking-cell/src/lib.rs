pub mod handoff;
pub mod overlay;
pub mod wire;

pub use handoff::{BookingHandoff, HandoffState};
pub use overlay::BookingOverlay;
